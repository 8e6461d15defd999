// Asset management system
//
// Locates the assets root, resolves numbered frame sequences on disk and owns
// every texture uploaded from them until shutdown.

mod cache;
mod frames;
mod handle;
mod loader;

#[cfg(test)]
pub(crate) mod test_support;

pub use cache::{AnimationClip, StaticImage, TextureCache};
pub use frames::FrameSource;
pub use handle::{TextureHandle, TextureStore};
pub use loader::{AssetLoader, DecodedImage};

use std::path::PathBuf;

/// Asset loading errors
///
/// None of these are fatal: a failed asset is logged and treated as absent.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create texture for {}: {reason}", path.display())]
    Upload { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
