//! # Ship Customization
//!
//! Turns directives hidden in a ship's display name into sail, rigging, light
//! and flag customizations on the ship's 3D parts.
//!
//! ## Features
//!
//! - **Directive Parsing**: `#` sentinel followed by operator/value pairs
//! - **Lookup Tables**: single-character palette colors and flag textures
//! - **Memoization**: ships are reprocessed only when their name changes
//! - **Host Agnostic**: the scene graph and materials sit behind traits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ship_customization::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CustomizerConfig::load_or_default("customizer.toml")?;
//!     ship_customization::foundation::logging::init(&config.logging)?;
//!
//!     let mut scene = MemoryScene::new();
//!     let ship = scene.add_ship("Black Pearl#SbFp");
//!     scene.add_part(ship, "MainSail", PartKind::Renderer, 1)?;
//!     scene.add_part(ship, "Flag", PartKind::Renderer, 1)?;
//!
//!     let mut customizer = ShipCustomizer::new(config)?;
//!     let report = customizer.run_tick(&mut scene);
//!     println!("{} ships customized", report.processed);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod input;
pub mod assets;
pub mod directive;
pub mod scene;

mod cache;
mod customizer;

pub use cache::NameCache;
pub use customizer::{CustomizationError, ShipCustomizer, TickReport};

/// Common imports for customizer users
pub mod prelude {
    pub use crate::{
        CustomizationError, NameCache, ShipCustomizer, TickReport,
        assets::{AssetError, FlagLibrary, Lookup, TextureData, palette},
        config::{
            AssetConfig, Config, ConfigError, CustomizerConfig, LoggingConfig, RecoveryMode,
        },
        directive::{Category, Directive, DirectiveParser, Operator, OperatorDispatcher, ParseReport, Token},
        foundation::{
            color::Color,
            logging::LoggingLevel,
            time::TickTimer,
        },
        input::KeyCode,
        scene::{
            FleetDescription, HostError, MaterialSink, MemoryScene, PartHandle, PartInfo, PartKind,
            SceneQuery, ShipHost, ShipId, ShipRoster,
        },
    };
}
