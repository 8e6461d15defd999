// Texture upload and ownership on the GPU

use crate::core::Color;
use crate::engine::assets::{DecodedImage, TextureHandle, TextureStore};
use anyhow::Result;
use log::{debug, warn};

/// A loaded texture with GPU resources.
///
/// The view and sampler live on inside the bind group.
pub struct Texture {
    texture: wgpu::Texture,
    pub bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl Texture {
    /// Upload raw RGBA8 pixels
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        rgba: &[u8],
        (width, height): (u32, u32),
        label: Option<&str>,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        // Unorm, not sRGB: pixel values go to the surface untouched
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label,
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            texture,
            bind_group,
            width,
            height,
        }
    }

    /// Create a 1x1 solid color texture (tinted per vertex for rectangle fills)
    pub fn from_color(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        color: Color,
        label: Option<&str>,
    ) -> Self {
        let rgba = [color.r, color.g, color.b, color.a];
        Self::from_rgba(device, queue, layout, &rgba, (1, 1), label)
    }

    /// Get the pixel size
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Free the GPU memory now instead of when the last reference drops
    fn destroy(self) {
        self.texture.destroy();
    }
}

/// Bind group layout shared by every sprite texture
pub fn texture_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Texture Bind Group Layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Owns every texture on the GPU. Released slots stay empty so handles are
/// never reused.
pub struct TextureManager {
    bind_group_layout: wgpu::BindGroupLayout,
    textures: Vec<Option<Texture>>,
    white: Texture,
}

impl TextureManager {
    /// Create a new texture manager
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let bind_group_layout = texture_bind_group_layout(device);
        let white = Texture::from_color(
            device,
            queue,
            &bind_group_layout,
            Color::WHITE,
            Some("White Texture"),
        );

        Self {
            bind_group_layout,
            textures: Vec::new(),
            white,
        }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Upload a decoded image
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecodedImage,
        label: &str,
    ) -> Result<TextureHandle> {
        let (width, height) = image.dimensions();
        let max = device.limits().max_texture_dimension_2d;
        if width == 0 || height == 0 || width > max || height > max {
            anyhow::bail!(
                "{}x{} is outside the supported texture size (1..={})",
                width,
                height,
                max
            );
        }

        let texture = Texture::from_rgba(
            device,
            queue,
            &self.bind_group_layout,
            image.as_raw(),
            (width, height),
            Some(label),
        );

        let handle = TextureHandle(self.textures.len());
        let (width, height) = texture.size();
        self.textures.push(Some(texture));
        debug!("Uploaded {} ({}x{}) as {:?}", label, width, height, handle);
        Ok(handle)
    }

    /// Drop the GPU resources behind a handle
    pub fn release(&mut self, handle: TextureHandle) {
        match self.textures.get_mut(handle.index()).and_then(Option::take) {
            Some(texture) => texture.destroy(),
            None => warn!("Texture {:?} released twice or never loaded", handle),
        }
    }

    /// Get a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.index()).and_then(Option::as_ref)
    }

    /// Texture used for solid fills
    pub fn white(&self) -> &Texture {
        &self.white
    }
}

/// [`TextureStore`] view over the renderer's device, queue and manager
pub struct GpuTextureStore<'a> {
    pub(super) device: &'a wgpu::Device,
    pub(super) queue: &'a wgpu::Queue,
    pub(super) manager: &'a mut TextureManager,
}

impl TextureStore for GpuTextureStore<'_> {
    fn create_texture(&mut self, image: &DecodedImage, label: &str) -> Result<TextureHandle> {
        self.manager.upload(self.device, self.queue, image, label)
    }

    fn release_texture(&mut self, handle: TextureHandle) {
        self.manager.release(handle);
    }
}
