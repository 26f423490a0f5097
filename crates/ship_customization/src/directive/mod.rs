//! Directives encoded in ship display names
//!
//! A name carries directives after the `#` sentinel as operator/value
//! character pairs:
//!
//! ```text
//! name      := anything* '#' directive*
//! directive := operator value?
//! operator  := 'S' | 'L' | 'R' | 'F' | 'D'
//! ```
//!
//! `"Revenge#SbFp"` paints the sails black and hoists the pirate frog flag.

pub mod parser;
pub mod dispatcher;

pub use dispatcher::{OperatorDispatcher, ParseReport};
pub use parser::{DirectiveParser, RawDirective, Token};

use std::fmt;
use std::sync::Arc;

use crate::assets::TextureData;
use crate::foundation::color::Color;
use crate::scene::{PartInfo, PartKind};

/// Character that starts the directive section of a name
pub const SENTINEL: char = '#';

/// Group of ship parts a directive targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Sail cloth
    Sail,
    /// Ship lights
    Light,
    /// Rigging and ropes
    Rigging,
    /// Flags
    Flag,
}

impl Category {
    /// Lowercase name used in logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sail => "sail",
            Self::Light => "light",
            Self::Rigging => "rigging",
            Self::Flag => "flag",
        }
    }

    /// Name fragments identifying parts of this category
    ///
    /// Empty for lights, which are selected by kind alone.
    pub const fn name_patterns(self) -> &'static [&'static str] {
        match self {
            Self::Sail => &["sail"],
            Self::Light => &[],
            Self::Rigging => &["rigging", "rope"],
            Self::Flag => &["flag"],
        }
    }

    /// Kind of part this category writes to
    pub const fn part_kind(self) -> PartKind {
        match self {
            Self::Light => PartKind::Light,
            Self::Sail | Self::Rigging | Self::Flag => PartKind::Renderer,
        }
    }

    /// Whether a host part belongs to this category (case-insensitive)
    pub fn matches(self, part: &PartInfo) -> bool {
        if part.kind != self.part_kind() {
            return false;
        }
        let patterns = self.name_patterns();
        if patterns.is_empty() {
            return true;
        }
        let name = part.name.to_lowercase();
        patterns.iter().any(|pattern| name.contains(pattern))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recognized operator characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `S`: sail color
    SailColor,
    /// `L`: light color
    LightColor,
    /// `R`: rigging color
    RiggingColor,
    /// `F`: flag texture
    FlagTexture,
    /// `D`: sail texture
    SailTexture,
}

impl Operator {
    /// All operators
    pub const ALL: [Self; 5] = [
        Self::SailColor,
        Self::LightColor,
        Self::RiggingColor,
        Self::FlagTexture,
        Self::SailTexture,
    ];

    /// Operator for a character, if recognized
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::SailColor),
            'L' => Some(Self::LightColor),
            'R' => Some(Self::RiggingColor),
            'F' => Some(Self::FlagTexture),
            'D' => Some(Self::SailTexture),
            _ => None,
        }
    }

    /// Character spelling this operator
    pub const fn symbol(self) -> char {
        match self {
            Self::SailColor => 'S',
            Self::LightColor => 'L',
            Self::RiggingColor => 'R',
            Self::FlagTexture => 'F',
            Self::SailTexture => 'D',
        }
    }

    /// Parts this operator writes to
    pub const fn category(self) -> Category {
        match self {
            Self::SailColor | Self::SailTexture => Category::Sail,
            Self::LightColor => Category::Light,
            Self::RiggingColor => Category::Rigging,
            Self::FlagTexture => Category::Flag,
        }
    }

    /// Whether the value selects a texture rather than a color
    pub const fn is_texture(self) -> bool {
        matches!(self, Self::FlagTexture | Self::SailTexture)
    }
}

/// A directive with its value resolved to a concrete resource
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Overwrite material (or light) colors
    Color {
        /// Target parts
        category: Category,
        /// New color
        color: Color,
    },
    /// Overwrite primary textures
    Texture {
        /// Target parts
        category: Category,
        /// New texture
        texture: Arc<TextureData>,
    },
}

impl Directive {
    /// Target parts
    pub const fn category(&self) -> Category {
        match self {
            Self::Color { category, .. } | Self::Texture { category, .. } => *category,
        }
    }

    /// Short description for debug logs
    pub fn describe(&self) -> String {
        match self {
            Self::Color { category, color } => format!("{category} color {:?}", color.to_rgba8()),
            Self::Texture { category, texture } => format!("{category} texture {}", texture.name),
        }
    }

    /// Per-ship summary logged once the directive is applied
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Color { category: Category::Sail, .. } => "Sails repainted",
            Self::Color { category: Category::Light, .. } => "Light color changed",
            Self::Color { category: Category::Rigging, .. } => "Rigging repainted",
            Self::Color { category: Category::Flag, .. } => "Flag repainted",
            Self::Texture { category: Category::Flag, .. } => "Flag retextured",
            Self::Texture { category: Category::Sail, .. } => "Sails retextured",
            Self::Texture { .. } => "Texture changed",
        }
    }
}
