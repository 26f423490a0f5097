//! In-memory host scene
//!
//! Stands in for the game client when running the customizer headless: a
//! flat list of ships, each owning named renderers and lights with plain
//! material state that can be inspected after a tick.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, Key, KeyData, SlotMap};

use crate::assets::TextureData;
use crate::foundation::color::Color;
use crate::scene::{
    HostError, MaterialSink, PartHandle, PartInfo, PartKind, SceneQuery, ShipId, ShipRoster,
};

new_key_type! {
    struct PartKey;
}

/// State of one material slot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialState {
    /// Material or light color
    pub color: Color,
    /// Primary texture, `None` until one is assigned
    pub texture: Option<Arc<TextureData>>,
}

#[derive(Debug)]
struct MemoryPart {
    ship: ShipId,
    name: String,
    kind: PartKind,
    materials: Vec<MaterialState>,
}

#[derive(Debug)]
struct MemoryShip {
    id: ShipId,
    name: String,
    parts: Vec<PartKey>,
}

/// Fleet layout loadable from RON or TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FleetDescription {
    /// Ships in roster order
    pub ships: Vec<ShipDescription>,
}

/// One ship of a [`FleetDescription`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipDescription {
    /// Initial display name
    pub name: String,
    /// Parts below the ship
    #[serde(default)]
    pub parts: Vec<PartDescription>,
}

/// One part of a [`ShipDescription`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartDescription {
    /// Object name
    pub name: String,
    /// Renderer or light
    pub kind: PartKind,
    /// Material slot count
    #[serde(default = "default_material_count")]
    pub materials: usize,
}

const fn default_material_count() -> usize {
    1
}

/// In-memory implementation of every host capability
#[derive(Debug, Default)]
pub struct MemoryScene {
    ships: Vec<MemoryShip>,
    parts: SlotMap<PartKey, MemoryPart>,
    next_ship_id: u64,
    write_count: usize,
}

impl MemoryScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from a fleet description
    pub fn from_fleet(fleet: &FleetDescription) -> Result<Self, HostError> {
        let mut scene = Self::new();
        for ship in &fleet.ships {
            let id = scene.add_ship(ship.name.clone());
            for part in &ship.parts {
                scene.add_part(id, part.name.clone(), part.kind, part.materials)?;
            }
        }
        Ok(scene)
    }

    /// Add a ship at the end of the roster
    pub fn add_ship(&mut self, name: impl Into<String>) -> ShipId {
        let id = ShipId(self.next_ship_id);
        self.next_ship_id += 1;
        self.ships.push(MemoryShip {
            id,
            name: name.into(),
            parts: Vec::new(),
        });
        id
    }

    /// Remove a ship and all of its parts
    pub fn remove_ship(&mut self, ship: ShipId) -> Result<(), HostError> {
        let index = self
            .ships
            .iter()
            .position(|s| s.id == ship)
            .ok_or(HostError::UnknownShip(ship))?;
        let removed = self.ships.remove(index);
        for key in removed.parts {
            self.parts.remove(key);
        }
        Ok(())
    }

    /// Change a ship's display name
    pub fn rename_ship(&mut self, ship: ShipId, name: impl Into<String>) -> Result<(), HostError> {
        self.ship_mut(ship)?.name = name.into();
        Ok(())
    }

    /// Attach a part with `materials` default (white, untextured) slots
    pub fn add_part(
        &mut self,
        ship: ShipId,
        name: impl Into<String>,
        kind: PartKind,
        materials: usize,
    ) -> Result<PartHandle, HostError> {
        // Validate before inserting so a failed call leaves no orphan part
        self.ship(ship)?;
        let key = self.parts.insert(MemoryPart {
            ship,
            name: name.into(),
            kind,
            materials: vec![MaterialState::default(); materials],
        });
        self.ship_mut(ship)?.parts.push(key);
        Ok(handle_of(key))
    }

    /// Handle of the first part of `ship` named exactly `name`
    pub fn find_part_by_name(&self, ship: ShipId, name: &str) -> Option<PartHandle> {
        let ship = self.ship(ship).ok()?;
        ship.parts
            .iter()
            .copied()
            .find(|key| self.parts.get(*key).is_some_and(|part| part.name == name))
            .map(handle_of)
    }

    /// Material slots of a part
    pub fn materials(&self, part: PartHandle) -> Option<&[MaterialState]> {
        self.parts.get(key_of(part)).map(|p| p.materials.as_slice())
    }

    /// Owning ship of a part
    pub fn owner(&self, part: PartHandle) -> Option<ShipId> {
        self.parts.get(key_of(part)).map(|p| p.ship)
    }

    /// Number of ships
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Total material writes received through [`MaterialSink`]
    pub const fn write_count(&self) -> usize {
        self.write_count
    }

    fn ship(&self, ship: ShipId) -> Result<&MemoryShip, HostError> {
        self.ships
            .iter()
            .find(|s| s.id == ship)
            .ok_or(HostError::UnknownShip(ship))
    }

    fn ship_mut(&mut self, ship: ShipId) -> Result<&mut MemoryShip, HostError> {
        self.ships
            .iter_mut()
            .find(|s| s.id == ship)
            .ok_or(HostError::UnknownShip(ship))
    }

    fn material_mut(&mut self, part: PartHandle, material: usize) -> Result<&mut MaterialState, HostError> {
        self.parts
            .get_mut(key_of(part))
            .ok_or(HostError::UnknownPart(part))?
            .materials
            .get_mut(material)
            .ok_or(HostError::MaterialOutOfRange { part, material })
    }
}

fn handle_of(key: PartKey) -> PartHandle {
    PartHandle(key.data().as_ffi())
}

fn key_of(handle: PartHandle) -> PartKey {
    PartKey::from(KeyData::from_ffi(handle.0))
}

impl ShipRoster for MemoryScene {
    fn ships(&self) -> Vec<ShipId> {
        self.ships.iter().map(|s| s.id).collect()
    }

    fn display_name(&self, ship: ShipId) -> Result<String, HostError> {
        self.ship(ship).map(|s| s.name.clone())
    }
}

impl SceneQuery for MemoryScene {
    fn descendant_parts(&self, ship: ShipId) -> Result<Vec<PartInfo>, HostError> {
        let ship = self.ship(ship)?;
        Ok(ship
            .parts
            .iter()
            .filter_map(|&key| {
                self.parts.get(key).map(|part| PartInfo {
                    handle: handle_of(key),
                    name: part.name.clone(),
                    kind: part.kind,
                    material_count: part.materials.len(),
                })
            })
            .collect())
    }
}

impl MaterialSink for MemoryScene {
    fn set_color(&mut self, part: PartHandle, material: usize, color: Color) -> Result<(), HostError> {
        self.material_mut(part, material)?.color = color;
        self.write_count += 1;
        Ok(())
    }

    fn set_texture(
        &mut self,
        part: PartHandle,
        material: usize,
        texture: Arc<TextureData>,
    ) -> Result<(), HostError> {
        self.material_mut(part, material)?.texture = Some(texture);
        self.write_count += 1;
        Ok(())
    }
}
