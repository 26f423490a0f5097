//! Flag textures keyed by a single lowercase letter
//!
//! Each key names a PNG under `<assets_root>/<mod_id>/<flags_dir>/`. Files are
//! reread on every resolution unless texture caching is enabled.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assets::palette::describe;
use crate::assets::{AssetError, Lookup, TextureData};
use crate::config::AssetConfig;

/// Flag keys and the file stem each one loads
pub const FLAGS: [(char, &str); 5] = [
    ('f', "Frog"),
    ('p', "PirateFrog"),
    ('s', "Ussr"),
    ('g', "GreatTortuga"),
    ('u', "UnityOfComrades"),
];

/// File stem of the flag named by `key`, if any
pub fn file_stem_for(key: char) -> Option<&'static str> {
    FLAGS
        .iter()
        .find(|(flag_key, _)| *flag_key == key)
        .map(|(_, stem)| *stem)
}

/// Resolves flag keys to decoded textures
pub struct FlagLibrary {
    flags_path: PathBuf,
    expected_size: (u32, u32),
    default_texture: Arc<TextureData>,
    /// Decoded textures by key, present only when caching is enabled
    cache: Option<HashMap<char, Arc<TextureData>>>,
}

impl FlagLibrary {
    /// Create a library reading from the configured flags directory
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            flags_path: config.flags_path(),
            expected_size: (config.flag_width, config.flag_height),
            default_texture: Arc::new(TextureData::white()),
            cache: config.cache_textures.then(HashMap::new),
        }
    }

    /// Directory the flags are read from
    pub fn flags_path(&self) -> &Path {
        &self.flags_path
    }

    /// Full path of the image for `key`, if the key is known
    pub fn path_for(&self, key: char) -> Option<PathBuf> {
        file_stem_for(key).map(|stem| self.flags_path.join(format!("{stem}.png")))
    }

    /// The texture substituted for unknown keys and unreadable files
    pub fn default_texture(&self) -> Arc<TextureData> {
        Arc::clone(&self.default_texture)
    }

    /// Resolve a directive value to a flag texture
    pub fn resolve(&mut self, value: Option<char>) -> Lookup<Arc<TextureData>> {
        let Some((key, path)) = value.and_then(|key| self.path_for(key).map(|path| (key, path))) else {
            log::warn!("Unknown flag texture {}", describe(value));
            return Lookup::Fallback(self.default_texture());
        };

        if let Some(texture) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
            log::debug!("Using cached texture {}", texture.name);
            return Lookup::Found(Arc::clone(texture));
        }

        match TextureData::from_file(&path) {
            Ok(texture) => {
                let (width, height) = self.expected_size;
                if !texture.has_size(width, height) {
                    log::debug!(
                        "Texture {} is {}x{}, expected {}x{}",
                        texture.name, texture.width, texture.height, width, height
                    );
                }

                let texture = Arc::new(texture);
                if let Some(cache) = self.cache.as_mut() {
                    cache.insert(key, Arc::clone(&texture));
                }
                Lookup::Found(texture)
            }
            Err(AssetError::NotFound(_)) => {
                log::warn!("Texture not found @ {}, replacing with default", path.display());
                Lookup::Fallback(self.default_texture())
            }
            Err(e) => {
                log::warn!("Texture unreadable @ {}, replacing with default: {}", path.display(), e);
                Lookup::Fallback(self.default_texture())
            }
        }
    }

    /// Drop every cached texture
    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }

    /// Number of cached textures
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    struct FlagDir {
        root: PathBuf,
    }

    impl FlagDir {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir()
                .join(format!("ship_customization_flags_{}_{}", std::process::id(), name));
            let _ = std::fs::remove_dir_all(&root);
            Self { root }
        }

        fn config(&self, cache_textures: bool) -> AssetConfig {
            AssetConfig {
                assets_root: self.root.clone(),
                cache_textures,
                ..AssetConfig::default()
            }
        }

        fn write_flag(&self, stem: &str, width: u32, height: u32, pixel: [u8; 3]) {
            let dir = self.config(false).flags_path();
            std::fs::create_dir_all(&dir).unwrap();
            RgbImage::from_pixel(width, height, Rgb(pixel))
                .save(dir.join(format!("{stem}.png")))
                .unwrap();
        }
    }

    impl Drop for FlagDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn test_paths_follow_layout() {
        let library = FlagLibrary::new(&AssetConfig::default());
        let expected = PathBuf::from("assets").join("548219").join("flags").join("PirateFrog.png");
        assert_eq!(library.path_for('p'), Some(expected));
        assert_eq!(library.path_for('x'), None);
    }

    #[test]
    fn test_loads_known_flag() {
        let dir = FlagDir::new("known");
        dir.write_flag("Frog", 8, 4, [0, 200, 0]);

        let mut library = FlagLibrary::new(&dir.config(false));
        let lookup = library.resolve(Some('f'));

        assert!(lookup.is_found());
        let texture = lookup.into_inner();
        assert_eq!(texture.name, "Frog");
        assert_eq!(texture.pixel(0, 0), Some([0, 200, 0]));
    }

    #[test]
    fn test_unknown_key_uses_white() {
        let mut library = FlagLibrary::new(&AssetConfig::default());
        let lookup = library.resolve(Some('x'));

        assert!(!lookup.is_found());
        assert_eq!(*lookup.into_inner(), TextureData::white());
        assert!(!library.resolve(None).is_found());
    }

    #[test]
    fn test_missing_file_uses_white() {
        let dir = FlagDir::new("missing");
        let mut library = FlagLibrary::new(&dir.config(false));

        let lookup = library.resolve(Some('u'));
        assert!(!lookup.is_found());
        assert_eq!(*lookup.into_inner(), TextureData::white());
    }

    #[test]
    fn test_corrupt_file_uses_white() {
        let dir = FlagDir::new("corrupt");
        let flags = dir.config(false).flags_path();
        std::fs::create_dir_all(&flags).unwrap();
        std::fs::write(flags.join("Ussr.png"), b"not an image").unwrap();

        let mut library = FlagLibrary::new(&dir.config(false));
        assert!(!library.resolve(Some('s')).is_found());
    }

    #[test]
    fn test_rereads_without_cache() {
        let dir = FlagDir::new("reread");
        dir.write_flag("GreatTortuga", 2, 2, [255, 0, 0]);
        let mut library = FlagLibrary::new(&dir.config(false));
        assert_eq!(library.resolve(Some('g')).into_inner().pixel(0, 0), Some([255, 0, 0]));

        dir.write_flag("GreatTortuga", 2, 2, [0, 0, 255]);
        assert_eq!(library.resolve(Some('g')).into_inner().pixel(0, 0), Some([0, 0, 255]));
        assert_eq!(library.cached_len(), 0);
    }

    #[test]
    fn test_cache_keeps_texture_until_cleared() {
        let dir = FlagDir::new("cached");
        dir.write_flag("GreatTortuga", 2, 2, [255, 0, 0]);
        let mut library = FlagLibrary::new(&dir.config(true));

        let first = library.resolve(Some('g')).into_inner();
        dir.write_flag("GreatTortuga", 2, 2, [0, 0, 255]);
        let second = library.resolve(Some('g')).into_inner();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(library.cached_len(), 1);

        library.clear_cache();
        assert_eq!(library.resolve(Some('g')).into_inner().pixel(0, 0), Some([0, 0, 255]));
    }
}
