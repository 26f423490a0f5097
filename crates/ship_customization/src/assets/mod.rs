//! Customization resources: palette colors and flag textures

pub mod palette;
pub mod texture;
pub mod flag_library;

pub use flag_library::FlagLibrary;
pub use texture::TextureData;

use thiserror::Error;

/// Result of looking a value character up in one of the resource tables
///
/// Unknown keys and unreadable files still hand back a usable default so the
/// caller decides whether a fallback is worth applying.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The key named a resource and it was produced
    Found(T),
    /// The key was unknown or its asset unreadable; holds the default resource
    Fallback(T),
}

impl<T> Lookup<T> {
    /// Whether the key resolved to its own resource
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Borrow the carried resource
    pub const fn value(&self) -> &T {
        match self {
            Self::Found(value) | Self::Fallback(value) => value,
        }
    }

    /// Transform the carried resource, keeping the variant
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::Fallback(value) => Lookup::Fallback(f(value)),
        }
    }

    /// Take the carried resource
    pub fn into_inner(self) -> T {
        match self {
            Self::Found(value) | Self::Fallback(value) => value,
        }
    }
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Image bytes could not be decoded
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
