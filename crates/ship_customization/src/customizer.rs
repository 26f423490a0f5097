//! Fleet customization loop
//!
//! Driven by the host: [`ShipCustomizer::update`] every frame with the frame
//! delta, [`ShipCustomizer::on_key_down`] for key presses. Every tick walks
//! the roster, skips ships whose name is unchanged since their last pass and
//! runs the directives of the others.

use thiserror::Error;

use crate::cache::NameCache;
use crate::config::{ConfigError, CustomizerConfig, RecoveryMode};
use crate::directive::{OperatorDispatcher, ParseReport};
use crate::foundation::time::TickTimer;
use crate::input::KeyCode;
use crate::scene::{HostError, ShipHost, ShipId};

/// Customization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomizationError {
    /// A single directive could not be applied
    #[error("Failed to process operator '{operator}' on {ship}: {source}")]
    Operator {
        /// Operator character
        operator: char,
        /// Ship being customized
        ship: ShipId,
        /// Host failure
        #[source]
        source: HostError,
    },

    /// A ship could not be processed at all
    #[error("Failed to process {ship}: {source}")]
    Ship {
        /// Ship being customized
        ship: ShipId,
        /// Host failure
        #[source]
        source: HostError,
    },
}

/// What a tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Ships whose directives were run
    pub processed: usize,
    /// Ships skipped because their name was unchanged
    pub skipped: usize,
    /// Ships that failed before their directives could run
    pub failed: usize,
    /// Whether a failure ended the tick early
    pub aborted: bool,
    /// Directive totals over all processed ships
    pub directives: ParseReport,
}

impl TickReport {
    fn absorb(&mut self, report: &ParseReport) {
        let totals = &mut self.directives;
        totals.directives += report.directives;
        totals.applied += report.applied;
        totals.unknown_operators += report.unknown_operators;
        totals.unresolved_values += report.unresolved_values;
        totals.failed_operators += report.failed_operators;
        totals.materials_written += report.materials_written;
    }
}

/// Applies name directives to every ship of the host
pub struct ShipCustomizer {
    config: CustomizerConfig,
    timer: TickTimer,
    names: NameCache<ShipId>,
    dispatcher: OperatorDispatcher,
}

impl ShipCustomizer {
    /// Create a customizer from a validated configuration
    pub fn new(config: CustomizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        log::info!("Ship customization loaded");
        log::info!("Keymaps:");
        log::info!("{:?} - force update on next tick", config.reset_key);
        log::debug!("Initialized update loop with delay {}s", config.tick_interval_secs);

        Ok(Self {
            timer: TickTimer::new(config.tick_interval_secs),
            names: NameCache::new(),
            dispatcher: OperatorDispatcher::new(&config.assets),
            config,
        })
    }

    /// Active configuration
    pub const fn config(&self) -> &CustomizerConfig {
        &self.config
    }

    /// Names recorded after each ship's last pass
    pub const fn names(&self) -> &NameCache<ShipId> {
        &self.names
    }

    /// Tick timer
    pub const fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Operator dispatcher
    pub const fn dispatcher(&self) -> &OperatorDispatcher {
        &self.dispatcher
    }

    /// Advance time; runs a tick when one is due
    pub fn update<H: ShipHost + ?Sized>(&mut self, delta_time: f32, host: &mut H) -> Option<TickReport> {
        self.timer.advance(delta_time).then(|| self.run_tick(host))
    }

    /// React to a key press
    ///
    /// Returns `true` when the key triggered a full refresh.
    pub fn on_key_down(&mut self, key: KeyCode) -> bool {
        if key != self.config.reset_key {
            return false;
        }
        log::info!("Forced update on all ships");
        self.reset_all();
        true
    }

    /// Forget every processed name so the next tick reprocesses all ships
    pub fn reset_all(&mut self) {
        self.names.reset_all();
        self.dispatcher.flags_mut().clear_cache();
    }

    /// Process every ship of the host once
    pub fn run_tick<H: ShipHost + ?Sized>(&mut self, host: &mut H) -> TickReport {
        let ships = host.ships();
        log::debug!("Tick, processing {} ships", ships.len());

        let mut report = TickReport::default();
        for ship in ships {
            match self.process_ship(host, ship) {
                Ok(Some(parse)) => {
                    report.processed += 1;
                    report.absorb(&parse);
                }
                Ok(None) => report.skipped += 1,
                Err(err) => {
                    log::error!("{}", err);
                    report.failed += 1;
                    if self.config.recovery == RecoveryMode::PerTick {
                        report.aborted = true;
                        break;
                    }
                }
            }
        }

        report
    }

    /// Process one ship if its name changed since its last pass
    ///
    /// Returns `Ok(None)` when the ship was skipped.
    pub fn process_ship<H: ShipHost + ?Sized>(
        &mut self,
        host: &mut H,
        ship: ShipId,
    ) -> Result<Option<ParseReport>, CustomizationError> {
        let name = host
            .display_name(ship)
            .map_err(|source| CustomizationError::Ship { ship, source })?;

        if !self.names.should_process(&ship, &name) {
            log::debug!("Skipped processing {}", name);
            return Ok(None);
        }

        let report = self.dispatcher.process_name(host, ship, &name);
        self.names.commit(ship, name);
        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::Color;
    use crate::scene::{MemoryScene, PartKind, ShipRoster};

    fn scene_with(names: &[&str]) -> MemoryScene {
        let mut scene = MemoryScene::new();
        for name in names {
            let ship = scene.add_ship(*name);
            scene.add_part(ship, "Sail", PartKind::Renderer, 1).unwrap();
        }
        scene
    }

    fn sail_color(scene: &MemoryScene, ship: ShipId) -> Color {
        let sail = scene.find_part_by_name(ship, "Sail").unwrap();
        scene.materials(sail).unwrap()[0].color
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = CustomizerConfig::default().with_tick_interval(-1.0);
        assert!(ShipCustomizer::new(config).is_err());
    }

    #[test]
    fn test_unchanged_names_are_skipped() {
        let mut scene = scene_with(&["A#Sb", "B"]);
        let mut customizer = ShipCustomizer::new(CustomizerConfig::default()).unwrap();

        let first = customizer.run_tick(&mut scene);
        assert_eq!(first.processed, 2);
        assert_eq!(first.directives.applied, 1);

        let second = customizer.run_tick(&mut scene);
        assert_eq!(second.processed, 0);
        assert_eq!(second.skipped, 2);
    }

    #[test]
    fn test_rename_triggers_reprocessing() {
        let mut scene = scene_with(&["A#Sb"]);
        let ship = scene.ships()[0];
        let mut customizer = ShipCustomizer::new(CustomizerConfig::default()).unwrap();

        customizer.run_tick(&mut scene);
        assert_eq!(sail_color(&scene, ship), Color::black());

        scene.rename_ship(ship, "A#Sr").unwrap();
        let report = customizer.run_tick(&mut scene);
        assert_eq!(report.processed, 1);
        assert_eq!(sail_color(&scene, ship), Color::red());
        assert_eq!(customizer.names().get(&ship), Some("A#Sr"));
    }

    #[test]
    fn test_reset_key_forces_full_refresh() {
        let mut scene = scene_with(&["A#Sb", "B#Sg"]);
        let mut customizer = ShipCustomizer::new(CustomizerConfig::default()).unwrap();
        customizer.run_tick(&mut scene);

        assert!(!customizer.on_key_down(KeyCode::End));
        assert_eq!(customizer.run_tick(&mut scene).processed, 0);

        assert!(customizer.on_key_down(KeyCode::Home));
        assert!(customizer.names().is_empty());
        assert_eq!(customizer.run_tick(&mut scene).processed, 2);
    }

    #[test]
    fn test_update_runs_tick_on_interval() {
        let mut scene = scene_with(&["A#Sb"]);
        let config = CustomizerConfig::default().with_tick_interval(5.0);
        let mut customizer = ShipCustomizer::new(config).unwrap();

        let mut ticks = Vec::new();
        for _ in 0..60 {
            if let Some(report) = customizer.update(0.25, &mut scene) {
                ticks.push(report);
            }
        }

        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0].processed, 1);
        assert_eq!(ticks[1].skipped, 1);
        assert_eq!(customizer.timer().tick_count(), 3);
    }

    #[test]
    fn test_vanished_ship_is_not_committed() {
        let mut scene = scene_with(&["A#Sb"]);
        let ship = scene.ships()[0];
        scene.remove_ship(ship).unwrap();
        let mut customizer = ShipCustomizer::new(CustomizerConfig::default()).unwrap();

        let result = customizer.process_ship(&mut scene, ship);
        assert_eq!(
            result,
            Err(CustomizationError::Ship { ship, source: HostError::UnknownShip(ship) })
        );
        assert!(customizer.names().is_empty());
    }
}
