//! Host scene interfaces
//!
//! The customizer never touches engine objects directly. The embedding host
//! implements three small capabilities:
//!
//! - [`ShipRoster`]: which ships exist and what they are called
//! - [`SceneQuery`]: the renderable parts and lights below a ship
//! - [`MaterialSink`]: writes to part materials
//!
//! [`MemoryScene`] implements all three in memory for tools and tests.

pub mod applier;
pub mod memory;

pub use memory::{FleetDescription, MaterialState, MemoryScene, PartDescription, ShipDescription};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::TextureData;
use crate::directive::Category;
use crate::foundation::color::Color;

/// Stable identity of a ship for as long as the host keeps it alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub u64);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship {}", self.0)
    }
}

/// Opaque handle of a renderable part or light owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartHandle(pub u64);

impl fmt::Display for PartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {:#x}", self.0)
    }
}

/// What a part is on the host side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    /// Mesh renderer with one or more materials
    Renderer,
    /// Light source; its single "material" slot is the light color
    Light,
}

/// Description of one part below a ship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartInfo {
    /// Host handle
    pub handle: PartHandle,
    /// Object name in the host scene, used for category matching
    pub name: String,
    /// Renderer or light
    pub kind: PartKind,
    /// Number of material slots
    pub material_count: usize,
}

/// Errors reported by host collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The ship is no longer known to the host
    #[error("Unknown ship: {0}")]
    UnknownShip(ShipId),

    /// The part handle is stale
    #[error("Unknown part: {0}")]
    UnknownPart(PartHandle),

    /// Material slot outside the part's material list
    #[error("Material {material} out of range on {part}")]
    MaterialOutOfRange {
        /// Part written to
        part: PartHandle,
        /// Requested slot
        material: usize,
    },

    /// The host refused the operation
    #[error("Host rejected operation: {0}")]
    Rejected(String),
}

/// Source of ships and their display names
pub trait ShipRoster {
    /// All ships in host order, including currently hidden ones
    fn ships(&self) -> Vec<ShipId>;

    /// Current display name of a ship
    fn display_name(&self, ship: ShipId) -> Result<String, HostError>;
}

/// Read access to the parts below a ship
pub trait SceneQuery {
    /// Every renderer and light below the ship, inactive ones included
    fn descendant_parts(&self, ship: ShipId) -> Result<Vec<PartInfo>, HostError>;

    /// Parts below the ship that belong to `category`
    fn find_parts(&self, ship: ShipId, category: Category) -> Result<Vec<PartInfo>, HostError> {
        Ok(self
            .descendant_parts(ship)?
            .into_iter()
            .filter(|part| category.matches(part))
            .collect())
    }
}

/// Write access to part materials
pub trait MaterialSink {
    /// Overwrite the color of one material slot (or a light's color)
    fn set_color(&mut self, part: PartHandle, material: usize, color: Color) -> Result<(), HostError>;

    /// Overwrite the primary texture of one material slot
    fn set_texture(
        &mut self,
        part: PartHandle,
        material: usize,
        texture: Arc<TextureData>,
    ) -> Result<(), HostError>;
}

/// Everything the customizer needs from the host
pub trait ShipHost: ShipRoster + SceneQuery + MaterialSink {}

impl<T: ShipRoster + SceneQuery + MaterialSink + ?Sized> ShipHost for T {}
