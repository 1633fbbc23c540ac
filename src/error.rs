//! Error types
//!
//! Two tiers only:
//! - `InitError`: fatal, reported and followed by exit status 1
//! - `TextureError`: recoverable, the texture cache substitutes a fallback

use std::path::PathBuf;

/// Fatal startup failures.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    /// Config file exists but could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid RON for `EngineConfig`
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// Config parsed but holds values the loop cannot run with
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Failure to turn a file into a drawable texture.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// Larger than a GPU texture dimension can address
    #[error("{path} is {width}x{height}, larger than {max}px on a side", max = u16::MAX)]
    TooLarge { path: String, width: u32, height: u32 },
}
