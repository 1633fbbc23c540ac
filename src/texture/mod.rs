//! Texture resources
//!
//! `TextureCache` maps file paths to uploaded textures and degrades to a
//! solid square when a file is missing or corrupt.

mod cache;

pub use cache::{TextureCache, TextureId, TextureSource, TextureUploader};

#[cfg(test)]
pub(crate) use cache::tests::{FakeTexture, FakeUploader};
