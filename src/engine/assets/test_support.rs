// Shared fixtures for asset tests: bitmap writers and an in-memory texture store

use super::{DecodedImage, TextureHandle, TextureStore};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Write a solid `width`x`height` BMP file and return its path
pub fn write_bmp(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let image = image::RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]));
    image
        .save_with_format(&path, image::ImageFormat::Bmp)
        .unwrap();
    path
}

/// Write an empty file (matches by name, never decodes)
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"").unwrap();
    path
}

/// Texture store that records uploads and releases without a GPU
#[derive(Debug, Default)]
pub struct FakeTextureStore {
    pub created: Vec<(TextureHandle, String, (u32, u32))>,
    pub released: Vec<TextureHandle>,
    pub fail_labels: Vec<String>,
}

impl FakeTextureStore {
    pub fn live_count(&self) -> usize {
        self.created.len() - self.released.len()
    }
}

impl TextureStore for FakeTextureStore {
    fn create_texture(&mut self, image: &DecodedImage, label: &str) -> Result<TextureHandle> {
        if self.fail_labels.iter().any(|l| label.ends_with(l.as_str())) {
            anyhow::bail!("upload rejected");
        }
        let handle = TextureHandle(self.created.len());
        self.created
            .push((handle, label.to_string(), image.dimensions()));
        Ok(handle)
    }

    fn release_texture(&mut self, handle: TextureHandle) {
        self.released.push(handle);
    }
}
