// Texture handles and the upload seam between asset loading and the GPU

use super::DecodedImage;
use anyhow::Result;

/// Handle to a texture owned by a [`TextureStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) usize);

impl TextureHandle {
    /// Get the raw slot index
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Something that can turn decoded pixels into drawable textures.
///
/// The renderer implements this on top of wgpu; tests use an in-memory fake.
pub trait TextureStore {
    /// Upload an image and return a handle to the new texture
    fn create_texture(&mut self, image: &DecodedImage, label: &str) -> Result<TextureHandle>;

    /// Release a texture. Releasing an unknown or already released handle is a no-op.
    fn release_texture(&mut self, handle: TextureHandle);
}
