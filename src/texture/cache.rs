//! Texture cache - path-keyed, decode once
//!
//! Files are decoded with the `image` crate and handed to a
//! `TextureUploader` that turns pixels into whatever the draw surface
//! consumes. A file that cannot be read or decoded is replaced by a solid
//! square; the substitution is logged and reported as
//! `TextureSource::Fallback`, and the square is cached under the failing
//! path so the file is never retried.

use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::config::{RenderConfig, Rgb};
use crate::error::TextureError;

/// Handle to a texture owned by a `TextureCache`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(u32);

impl TextureId {
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Where a cached texture's pixels came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSource {
    /// Decoded from the requested file
    Decoded,
    /// Synthesized because the file could not be loaded
    Fallback,
}

/// Result of `TextureCache::load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureLookup {
    pub id: TextureId,
    pub source: TextureSource,
}

/// Turns decoded RGBA pixels into a drawable texture.
pub trait TextureUploader {
    type Texture;

    fn upload(&mut self, image: &RgbaImage) -> Self::Texture;
}

struct CachedTexture<T> {
    texture: T,
    source: TextureSource,
}

pub struct TextureCache<U: TextureUploader> {
    uploader: U,
    /// Indexed by TextureId
    textures: Vec<CachedTexture<U::Texture>>,
    by_path: HashMap<String, TextureId>,
    fallback_color: Rgb,
    fallback_size: u16,
}

impl<U: TextureUploader> TextureCache<U> {
    pub fn new(uploader: U, render: &RenderConfig) -> Self {
        Self {
            uploader,
            textures: Vec::new(),
            by_path: HashMap::new(),
            fallback_color: render.fallback_color,
            fallback_size: render.fallback_size,
        }
    }

    /// Return the texture for `path`, decoding it on first request only.
    pub fn load(&mut self, path: &str) -> TextureLookup {
        if let Some(&id) = self.by_path.get(path) {
            let source = self.textures[id.index()].source;
            return TextureLookup { id, source };
        }

        let (image, source) = match decode(path) {
            Ok(image) => {
                log::info!("loaded texture {} ({}x{})", path, image.width(), image.height());
                (image, TextureSource::Decoded)
            }
            Err(e) => {
                log::warn!("{}; using {}px fallback", e, self.fallback_size);
                (solid_square(self.fallback_size, self.fallback_color), TextureSource::Fallback)
            }
        };

        let id = TextureId::new(self.textures.len() as u32);
        let texture = self.uploader.upload(&image);
        self.textures.push(CachedTexture { texture, source });
        self.by_path.insert(path.to_string(), id);
        TextureLookup { id, source }
    }

    /// Resolve a handle. `None` for ids this cache never issued.
    pub fn get(&self, id: TextureId) -> Option<&U::Texture> {
        self.textures.get(id.index()).map(|cached| &cached.texture)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Release every texture. Handles issued earlier stop resolving.
    pub fn clear(&mut self) {
        log::debug!("releasing {} texture(s)", self.textures.len());
        self.textures.clear();
        self.by_path.clear();
    }
}

/// Read and decode an image file into RGBA8.
pub fn decode(path: &str) -> Result<RgbaImage, TextureError> {
    let bytes = std::fs::read(path).map_err(|source| TextureError::Io {
        path: path.to_string(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| TextureError::Decode {
        path: path.to_string(),
        source,
    })?;
    let (width, height) = (image.width(), image.height());
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(TextureError::TooLarge {
            path: path.to_string(),
            width,
            height,
        });
    }
    Ok(image.to_rgba8())
}

/// An opaque square of one colour.
pub fn solid_square(size: u16, [r, g, b]: Rgb) -> RgbaImage {
    RgbaImage::from_pixel(size as u32, size as u32, Rgba([r, g, b, 255]))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::Path;

    /// Records uploads; a "texture" is just the uploaded size and first pixel.
    #[derive(Default)]
    pub(crate) struct FakeUploader {
        pub uploads: usize,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct FakeTexture {
        pub width: u32,
        pub height: u32,
        pub first_pixel: [u8; 4],
    }

    impl TextureUploader for FakeUploader {
        type Texture = FakeTexture;

        fn upload(&mut self, image: &RgbaImage) -> FakeTexture {
            self.uploads += 1;
            FakeTexture {
                width: image.width(),
                height: image.height(),
                first_pixel: image.get_pixel(0, 0).0,
            }
        }
    }

    fn cache() -> TextureCache<FakeUploader> {
        TextureCache::new(FakeUploader::default(), &RenderConfig::default())
    }

    fn write_png(path: &Path, width: u32, height: u32, pixel: [u8; 4]) {
        RgbaImage::from_pixel(width, height, Rgba(pixel)).save(path).unwrap();
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn test_decodes_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ship.png");
        write_png(&path, 4, 2, [1, 2, 3, 255]);

        let mut cache = cache();
        let lookup = cache.load(path_str(&path));

        assert_eq!(lookup.source, TextureSource::Decoded);
        let texture = cache.get(lookup.id).unwrap();
        assert_eq!((texture.width, texture.height), (4, 2));
        assert_eq!(texture.first_pixel, [1, 2, 3, 255]);
    }

    #[test]
    fn test_same_path_returns_cached_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ship.png");
        write_png(&path, 2, 2, [9, 9, 9, 255]);

        let mut cache = cache();
        let first = cache.load(path_str(&path));
        // Even if the file changes on disk, the cached copy wins
        std::fs::remove_file(&path).unwrap();
        let second = cache.load(path_str(&path));

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.uploader.uploads, 1);
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.bmp");

        let mut cache = cache();
        let lookup = cache.load(path_str(&path));

        assert_eq!(lookup.source, TextureSource::Fallback);
        let texture = cache.get(lookup.id).unwrap();
        assert_eq!((texture.width, texture.height), (64, 64));
        assert_eq!(texture.first_pixel, [200, 80, 80, 255]);
    }

    #[test]
    fn test_fallback_is_cached_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.bmp");
        std::fs::write(&path, b"definitely not a bitmap").unwrap();

        let mut cache = cache();
        let first = cache.load(path_str(&path));
        let second = cache.load(path_str(&path));

        assert_eq!(first, second);
        assert_eq!(second.source, TextureSource::Fallback);
        assert_eq!(cache.uploader.uploads, 1);
    }

    #[test]
    fn test_distinct_paths_get_distinct_handles() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        write_png(&a, 1, 1, [0, 0, 0, 255]);
        write_png(&b, 1, 1, [255, 255, 255, 255]);

        let mut cache = cache();
        assert_ne!(cache.load(path_str(&a)).id, cache.load(path_str(&b)).id);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_decode_error_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let garbage = dir.path().join("garbage.bmp");
        std::fs::write(&garbage, [0u8; 16]).unwrap();

        assert!(matches!(decode(path_str(&garbage)), Err(TextureError::Decode { .. })));
        let missing = dir.path().join("missing.bmp");
        assert!(matches!(decode(path_str(&missing)), Err(TextureError::Io { .. })));
    }

    #[test]
    fn test_oversized_image_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.png");
        write_png(&path, u16::MAX as u32 + 1, 1, [0, 0, 255, 255]);

        assert!(matches!(
            decode(path_str(&path)),
            Err(TextureError::TooLarge { width: 65536, height: 1, .. })
        ));

        let mut cache = cache();
        let lookup = cache.load(path_str(&path));
        assert_eq!(lookup.source, TextureSource::Fallback);
        assert_eq!(cache.get(lookup.id).unwrap().width, 64);
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut cache = cache();
        let lookup = cache.load("does/not/exist.bmp");
        assert!(cache.get(lookup.id).is_some());

        cache.clear();
        assert!(cache.get(lookup.id).is_none());
        assert_eq!(cache.len(), 0);
    }
}
