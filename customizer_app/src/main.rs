//! Headless customizer demo
//!
//! Runs the customizer against an in-memory fleet at a simulated 60 Hz,
//! renames a ship half-way, presses the reset key once, and prints the
//! resulting material state.
//!
//! Usage: `customizer_demo [config.toml|config.ron] [fleet.ron]`

use std::path::PathBuf;

use ship_customization::foundation::logging;
use ship_customization::prelude::*;
use thiserror::Error;

// Simulation settings
const FRAME_TIME: f32 = 1.0 / 60.0;
const SIMULATED_SECONDS: f32 = 32.0;
const RENAME_AT_SECONDS: f32 = 12.0;
const RESET_AT_SECONDS: f32 = 22.0;

const DEFAULT_CONFIG_PATH: &str = "customizer.toml";

const DEFAULT_FLEET: &str = r#"(ships: [
    (name: "Queen Anne's Revenge#SbFpRa", parts: [
        (name: "MainSail", kind: Renderer, materials: 2),
        (name: "ForeSail", kind: Renderer),
        (name: "Rigging", kind: Renderer),
        (name: "RopeNet", kind: Renderer),
        (name: "Flag", kind: Renderer),
        (name: "Hull", kind: Renderer, materials: 3),
        (name: "Lantern", kind: Light),
    ]),
    (name: "Fancy#LyDs", parts: [
        (name: "Sail", kind: Renderer),
        (name: "Flag", kind: Renderer),
        (name: "CabinLight", kind: Light),
    ]),
    (name: "Plain Sloop", parts: [
        (name: "Sail", kind: Renderer),
        (name: "Flag", kind: Renderer),
    ]),
    (name: "Typo#SxZ", parts: [
        (name: "Sail", kind: Renderer),
    ]),
])"#;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] logging::LoggingError),

    #[error("Fleet file error: {0}")]
    FleetIo(#[from] std::io::Error),

    #[error("Fleet parse error: {0}")]
    FleetParse(#[from] ron::error::SpannedError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

struct DemoApp {
    customizer: ShipCustomizer,
    scene: MemoryScene,
    elapsed: f32,
    renamed: bool,
    reset: bool,
}

impl DemoApp {
    fn new(config: CustomizerConfig, fleet: &FleetDescription) -> Result<Self, DemoError> {
        Ok(Self {
            customizer: ShipCustomizer::new(config)?,
            scene: MemoryScene::from_fleet(fleet)?,
            elapsed: 0.0,
            renamed: false,
            reset: false,
        })
    }

    fn run(&mut self) -> Result<(), DemoError> {
        while self.elapsed < SIMULATED_SECONDS {
            self.elapsed += FRAME_TIME;

            if !self.renamed && self.elapsed >= RENAME_AT_SECONDS {
                self.rename_flagship()?;
            }
            if !self.reset && self.elapsed >= RESET_AT_SECONDS {
                self.reset = true;
                let reset_key = self.customizer.config().reset_key;
                self.customizer.on_key_down(reset_key);
            }

            if let Some(report) = self.customizer.update(FRAME_TIME, &mut self.scene) {
                log::info!(
                    "t={:.1}s processed={} skipped={} failed={} applied={} unknown={} unresolved={}",
                    self.elapsed,
                    report.processed,
                    report.skipped,
                    report.failed,
                    report.directives.applied,
                    report.directives.unknown_operators,
                    report.directives.unresolved_values,
                );
            }
        }
        Ok(())
    }

    fn rename_flagship(&mut self) -> Result<(), DemoError> {
        self.renamed = true;
        if let Some(&flagship) = self.scene.ships().first() {
            let name = self.scene.display_name(flagship)?;
            let base = name.split('#').next().unwrap_or_default();
            let renamed = format!("{base}#SrFsLo");
            log::info!("Renaming {} to {}", name, renamed);
            self.scene.rename_ship(flagship, renamed)?;
        }
        Ok(())
    }

    fn print_summary(&self) -> Result<(), DemoError> {
        for ship in self.scene.ships() {
            let name = self.scene.display_name(ship)?;
            let directives: Vec<String> = DirectiveParser::tokens(&name)
                .map(|token| match token {
                    Token::Directive { operator, value } => {
                        format!("{}{}", operator.symbol(), value.unwrap_or('_'))
                    }
                    Token::Unknown(c) => format!("?{c}"),
                })
                .collect();
            println!("{name}  [{}]", directives.join(" "));

            for part in self.scene.descendant_parts(ship)? {
                let Some(materials) = self.scene.materials(part.handle) else {
                    continue;
                };
                for (index, material) in materials.iter().enumerate() {
                    let texture = material
                        .texture
                        .as_ref()
                        .map_or_else(|| "-".to_string(), |t| format!("{} {}x{}", t.name, t.width, t.height));
                    println!(
                        "    {:<12} #{index} color={:?} texture={texture}",
                        part.name,
                        material.color.to_rgba8(),
                    );
                }
            }
        }
        Ok(())
    }
}

fn load_fleet(path: Option<PathBuf>) -> Result<FleetDescription, DemoError> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_FLEET.to_string(),
    };
    Ok(ron::from_str(&source)?)
}

fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let fleet_path = args.next().map(PathBuf::from);

    let config = CustomizerConfig::load_or_default(&config_path)?;
    logging::init(&config.logging)?;

    log::info!("Starting ship customization demo");
    let fleet = load_fleet(fleet_path)?;

    let mut app = DemoApp::new(config, &fleet)?;
    app.run()?;
    app.print_summary()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("customizer_demo failed: {e}");
        std::process::exit(1);
    }
}
