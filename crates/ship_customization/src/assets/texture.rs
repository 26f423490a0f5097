//! Decoded texture data handed to material sinks
//!
//! Flag images are decoded to uncompressed RGB, matching what the host
//! engine uploads for flag and sail textures.

use std::path::Path;

use crate::assets::AssetError;

/// Decoded RGB pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Name used in logs (file stem for loaded images)
    pub name: String,
    /// Raw RGB pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (always 3)
    pub channels: u8,
}

impl TextureData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        if !path_ref.is_file() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        log::debug!("Loading texture from {}", path_ref.display());
        let bytes = std::fs::read(path_ref)?;
        let name = path_ref
            .file_stem()
            .map_or_else(|| "texture".to_string(), |stem| stem.to_string_lossy().into_owned());

        let texture = Self::from_bytes(name, &bytes)?;
        log::debug!("Texture loaded ({}x{})", texture.width, texture.height);
        Ok(texture)
    }

    /// Decode an image held in memory
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, AssetError> {
        let rgb_img = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = rgb_img.dimensions();

        Ok(Self {
            name: name.into(),
            data: rgb_img.into_raw(),
            width,
            height,
            channels: 3,
        })
    }

    /// Create a solid color texture
    pub fn solid_color(name: impl Into<String>, width: u32, height: u32, color: [u8; 3]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 3);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            name: name.into(),
            data,
            width,
            height,
            channels: 3,
        }
    }

    /// The 4x4 white texture substituted for unusable flags
    pub fn white() -> Self {
        Self::solid_color("white", 4, 4, [255, 255, 255])
    }

    /// Whether the texture has the given dimensions
    pub const fn has_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// RGB value of the pixel at (x, y)
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 3) as usize;
        self.data
            .get(offset..offset + 3)
            .map(|rgb| [rgb[0], rgb[1], rgb[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_white_texture() {
        let white = TextureData::white();
        assert_eq!(white.width, 4);
        assert_eq!(white.height, 4);
        assert_eq!(white.channels, 3);
        assert_eq!(white.data.len(), 4 * 4 * 3);
        assert!(white.data.iter().all(|&c| c == 255));
    }

    #[test]
    fn test_decode_drops_alpha() {
        let bytes = png_bytes(6, 2, [10, 20, 30, 128]);
        let texture = TextureData::from_bytes("flag", &bytes).unwrap();

        assert!(texture.has_size(6, 2));
        assert_eq!(texture.channels, 3);
        assert_eq!(texture.data.len(), 6 * 2 * 3);
        assert_eq!(texture.pixel(5, 1), Some([10, 20, 30]));
        assert_eq!(texture.pixel(6, 0), None);
    }

    #[test]
    fn test_corrupt_bytes() {
        let result = TextureData::from_bytes("broken", b"definitely not a png");
        assert!(matches!(result, Err(AssetError::Decode(_))));
    }

    #[test]
    fn test_nonexistent_file() {
        let result = TextureData::from_file("nonexistent_file.png");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }
}
