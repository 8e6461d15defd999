// Asset root discovery and image decoding

use super::AssetError;
use log::debug;
use std::path::{Path, PathBuf};

/// Decoded RGBA pixels ready for upload
pub type DecodedImage = image::RgbaImage;

/// Name of the assets directory searched for next to the executable and cwd
const ASSETS_DIR_NAME: &str = "assets";

/// Asset loader responsible for finding and decoding asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Locate the assets root relative to the running executable and the
    /// current working directory.
    pub fn discover() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Self::new(locate_assets_root(exe_dir.as_deref(), &cwd))
    }

    /// Get the full path for an asset relative to the root
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Decode an asset from the root into RGBA pixels
    pub fn load_image(&self, name: &str) -> Result<DecodedImage, AssetError> {
        decode_image(&self.resolve_path(name))
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Candidate roots in priority order: next to the executable, its parent,
/// then the same pair under the working directory.
pub fn assets_root_candidates(exe_dir: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    let exe_dir = exe_dir.unwrap_or(cwd);
    vec![
        exe_dir.join(ASSETS_DIR_NAME),
        exe_dir.join("..").join(ASSETS_DIR_NAME),
        cwd.join(ASSETS_DIR_NAME),
        cwd.join("..").join(ASSETS_DIR_NAME),
    ]
}

/// First candidate that is an existing directory, or the first candidate if none is
pub fn locate_assets_root(exe_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    let candidates = assets_root_candidates(exe_dir, cwd);

    for candidate in &candidates {
        if candidate.is_dir() {
            debug!("Using assets root {}", candidate.display());
            return candidate.clone();
        }
    }

    candidates[0].clone()
}

/// Decode a single image file.
///
/// The format is sniffed from the file contents, so a misnamed file still
/// decodes and a corrupt one reports [`AssetError::Decode`].
pub fn decode_image(path: &Path) -> Result<DecodedImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let reader = image::io::Reader::open(path)?.with_guessed_format()?;
    let image = reader.decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(image.to_rgba8())
}
