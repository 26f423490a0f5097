//! Color values written to host materials and lights

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// 3D vector type used for RGB channels
pub type Vec3 = Vector3<f32>;

/// Linear RGBA color
///
/// The named constructors mirror the standard color constants of the host
/// engine so ships look the same as with the stock palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red, green and blue channels in 0.0..=1.0
    pub rgb: Vec3,
    /// Alpha channel
    pub alpha: f32,
}

impl Color {
    /// Opaque color from RGB channels
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            rgb: Vec3::new(r, g, b),
            alpha: 1.0,
        }
    }

    /// Black (0, 0, 0)
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Blue (0, 0, 1)
    pub fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }

    /// Cyan (0, 1, 1)
    pub fn cyan() -> Self {
        Self::rgb(0.0, 1.0, 1.0)
    }

    /// Gray (0.5, 0.5, 0.5)
    pub fn gray() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }

    /// Green (0, 1, 0)
    pub fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }

    /// Magenta (1, 0, 1)
    pub fn magenta() -> Self {
        Self::rgb(1.0, 0.0, 1.0)
    }

    /// Red (1, 0, 0)
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    /// White (1, 1, 1)
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Yellow (1, 0.92, 0.016)
    pub fn yellow() -> Self {
        Self::rgb(1.0, 0.92, 0.016)
    }

    /// Orange (1, 0.5, 0)
    pub fn orange() -> Self {
        Self::rgb(1.0, 0.5, 0.0)
    }

    /// Channels as 8-bit RGBA
    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.rgb.x),
            quantize(self.rgb.y),
            quantize(self.rgb.z),
            quantize(self.alpha),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::white());
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::orange().to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(Color::black().to_rgba8(), [0, 0, 0, 255]);
    }
}
