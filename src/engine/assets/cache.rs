// Texture cache: owns every texture decoded from disk until shutdown

use super::frames::{resolve_frames, FrameSource};
use super::loader::decode_image;
use super::{AssetError, AssetLoader, DecodedImage, TextureHandle, TextureStore};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// A single texture with its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticImage {
    pub texture: TextureHandle,
    pub width: u32,
    pub height: u32,
}

/// An ordered sequence of frames sharing one display size and frame duration
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    name: String,
    frames: Vec<TextureHandle>,
    frame_duration: f32,
    frame_width: u32,
    frame_height: u32,
}

impl AnimationClip {
    /// A clip with no frames, used when an animation is absent
    pub fn empty(name: &str, frame_duration: f32, frame_size: (u32, u32)) -> Self {
        Self::new(name, Vec::new(), frame_duration, frame_size)
    }

    pub fn new(
        name: &str,
        frames: Vec<TextureHandle>,
        frame_duration: f32,
        (frame_width, frame_height): (u32, u32),
    ) -> Self {
        Self {
            name: name.to_string(),
            frames,
            frame_duration,
            frame_width,
            frame_height,
        }
    }

    /// Get the animation name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// A zero-frame clip counts as absent
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get the texture for a frame index
    pub fn frame(&self, index: usize) -> Option<TextureHandle> {
        self.frames.get(index).copied()
    }

    /// Seconds each frame stays on screen
    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    /// Display size shared by every frame
    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }
}

/// A path that could not be turned into a texture, and why
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: AssetError,
}

/// Owns textures created from asset files.
///
/// Every handle is released exactly once by [`TextureCache::unload_all`], in
/// the reverse order it was acquired.
pub struct TextureCache {
    loader: AssetLoader,
    /// Live textures in acquisition order
    owned: Vec<TextureHandle>,
}

impl TextureCache {
    pub fn new(loader: AssetLoader) -> Self {
        Self {
            loader,
            owned: Vec::new(),
        }
    }

    /// Get the loader resolving asset names
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }

    /// Load a single image from the assets root
    pub fn load_image(
        &mut self,
        name: &str,
        store: &mut dyn TextureStore,
    ) -> Result<StaticImage, AssetError> {
        let path = self.loader.resolve_path(name);
        let image = self.loader.load_image(name)?;
        let texture = self.upload(&path, &image, store)?;

        Ok(StaticImage {
            texture,
            width: image.width(),
            height: image.height(),
        })
    }

    /// Decode and upload every path as one clip.
    ///
    /// A frame that fails is skipped, so the clip may be shorter than `paths`.
    /// The clip takes the size of the last frame that loaded; if none did it
    /// keeps `default_size`.
    pub fn load_clip(
        &mut self,
        name: &str,
        paths: &[PathBuf],
        frame_duration: f32,
        default_size: (u32, u32),
        store: &mut dyn TextureStore,
    ) -> (AnimationClip, Vec<LoadFailure>) {
        let mut frames = Vec::with_capacity(paths.len());
        let mut frame_size = default_size;
        let mut failures = Vec::new();

        for path in paths {
            match self.load_frame(path, store) {
                Ok((texture, size)) => {
                    frames.push(texture);
                    frame_size = size;
                }
                Err(error) => failures.push(LoadFailure {
                    path: path.clone(),
                    error,
                }),
            }
        }

        (
            AnimationClip::new(name, frames, frame_duration, frame_size),
            failures,
        )
    }

    /// Resolve an animation's frames under the assets root and load them
    pub fn load_animation(
        &mut self,
        name: &str,
        source: &FrameSource,
        frame_duration: f32,
        default_size: (u32, u32),
        store: &mut dyn TextureStore,
    ) -> AnimationClip {
        let root = self.loader.base_path().to_path_buf();
        let paths = resolve_frames(&root, source);
        let (clip, failures) = self.load_clip(name, &paths, frame_duration, default_size, store);

        for failure in &failures {
            warn!(
                "Skipping {} frame {}: {}",
                clip.name(),
                failure.path.display(),
                failure.error
            );
        }

        if clip.is_empty() {
            warn!(
                "No {} frames found in {}",
                clip.name(),
                root.join(source.subdir).display()
            );
        } else {
            info!("Loaded {} frames: {}", clip.name(), clip.frame_count());
        }

        clip
    }

    /// Number of textures currently owned
    pub fn texture_count(&self) -> usize {
        self.owned.len()
    }

    /// Release every owned texture, newest first
    pub fn unload_all(&mut self, store: &mut dyn TextureStore) {
        let count = self.texture_count();
        while let Some(texture) = self.owned.pop() {
            store.release_texture(texture);
        }

        if count > 0 {
            info!("Released {} texture(s)", count);
        }
    }

    fn load_frame(
        &mut self,
        path: &Path,
        store: &mut dyn TextureStore,
    ) -> Result<(TextureHandle, (u32, u32)), AssetError> {
        let image = decode_image(path)?;
        let texture = self.upload(path, &image, store)?;
        Ok((texture, image.dimensions()))
    }

    fn upload(
        &mut self,
        path: &Path,
        image: &DecodedImage,
        store: &mut dyn TextureStore,
    ) -> Result<TextureHandle, AssetError> {
        let label = path.to_string_lossy();
        let texture = store
            .create_texture(image, &label)
            .map_err(|e| AssetError::Upload {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        self.owned.push(texture);
        Ok(texture)
    }
}

impl Drop for TextureCache {
    fn drop(&mut self) {
        if !self.owned.is_empty() {
            warn!(
                "Texture cache dropped with {} texture(s) still loaded",
                self.owned.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::test_support::{touch, write_bmp, FakeTextureStore};

    const WALK: FrameSource = FrameSource {
        subdir: "walk",
        prefix: "walk",
        fallback_prefixes: &["rewalk"],
        extension: "bmp",
    };

    #[test]
    fn test_load_clip_skips_bad_frames() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            write_bmp(dir.path(), "walk1.bmp", 10, 20),
            touch(dir.path(), "walk2.bmp"),
            write_bmp(dir.path(), "walk3.bmp", 30, 40),
            dir.path().join("walk4.bmp"),
        ];

        let mut store = FakeTextureStore::default();
        let mut cache = TextureCache::new(AssetLoader::new(dir.path()));
        let (clip, failures) = cache.load_clip("walk", &paths, 0.1, (48, 64), &mut store);

        assert_eq!(clip.frame_count(), 2);
        assert_eq!(clip.frame_size(), (30, 40));
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].path, paths[1]);
        assert!(matches!(failures[0].error, AssetError::Decode { .. }));
        assert!(matches!(failures[1].error, AssetError::NotFound(_)));

        cache.unload_all(&mut store);
    }

    #[test]
    fn test_size_comes_from_last_loaded_frame() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            write_bmp(dir.path(), "idle1.bmp", 30, 40),
            write_bmp(dir.path(), "idle2.bmp", 10, 20),
            touch(dir.path(), "idle3.bmp"),
        ];

        let mut store = FakeTextureStore::default();
        let mut cache = TextureCache::new(AssetLoader::new(dir.path()));
        let (clip, _) = cache.load_clip("idle", &paths, 0.12, (48, 64), &mut store);

        assert_eq!(clip.frame_size(), (10, 20));
        cache.unload_all(&mut store);
    }

    #[test]
    fn test_empty_clip_keeps_default_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FakeTextureStore::default();
        let mut cache = TextureCache::new(AssetLoader::new(dir.path()));

        let (clip, failures) = cache.load_clip("punch", &[], 0.06, (48, 64), &mut store);
        assert!(clip.is_empty());
        assert!(failures.is_empty());
        assert_eq!(clip.frame_size(), (48, 64));
        assert_eq!(clip.frame(0), None);
    }

    #[test]
    fn test_upload_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            write_bmp(dir.path(), "walk1.bmp", 8, 8),
            write_bmp(dir.path(), "walk2.bmp", 8, 8),
        ];

        let mut store = FakeTextureStore {
            fail_labels: vec!["walk2.bmp".to_string()],
            ..Default::default()
        };
        let mut cache = TextureCache::new(AssetLoader::new(dir.path()));
        let (clip, failures) = cache.load_clip("walk", &paths, 0.1, (1, 1), &mut store);

        assert_eq!(clip.frame_count(), 1);
        assert!(matches!(failures[0].error, AssetError::Upload { .. }));
        cache.unload_all(&mut store);
    }

    #[test]
    fn test_load_animation_resolves_under_root() {
        let root = tempfile::tempdir().unwrap();
        let walk_dir = root.path().join("walk");
        std::fs::create_dir(&walk_dir).unwrap();
        write_bmp(&walk_dir, "rewalk2.bmp", 16, 16);
        write_bmp(&walk_dir, "rewalk1.bmp", 16, 16);

        let mut store = FakeTextureStore::default();
        let mut cache = TextureCache::new(AssetLoader::new(root.path()));
        let clip = cache.load_animation("walk", &WALK, 0.1, (48, 64), &mut store);

        assert_eq!(clip.frame_count(), 2);
        assert!(store.created[0].1.ends_with("rewalk1.bmp"));
        assert!(store.created[1].1.ends_with("rewalk2.bmp"));
        assert_eq!(clip.name(), "walk");
        cache.unload_all(&mut store);
    }

    #[test]
    fn test_missing_animation_is_empty() {
        let root = tempfile::tempdir().unwrap();
        let mut store = FakeTextureStore::default();
        let mut cache = TextureCache::new(AssetLoader::new(root.path()));

        let clip = cache.load_animation("walk", &WALK, 0.1, (48, 64), &mut store);
        assert!(clip.is_empty());
        assert_eq!(store.created.len(), 0);
    }

    #[test]
    fn test_unload_all_releases_once_in_reverse_order() {
        let dir = tempfile::tempdir().unwrap();
        write_bmp(dir.path(), "Opanda.bmp", 48, 64);
        let paths = vec![
            write_bmp(dir.path(), "idle1.bmp", 8, 8),
            write_bmp(dir.path(), "idle2.bmp", 8, 8),
        ];

        let mut store = FakeTextureStore::default();
        let mut cache = TextureCache::new(AssetLoader::new(dir.path()));
        let base = cache.load_image("Opanda.bmp", &mut store).unwrap();
        assert_eq!((base.width, base.height), (48, 64));
        cache.load_clip("idle", &paths, 0.12, (48, 64), &mut store);
        assert_eq!(cache.texture_count(), 3);

        cache.unload_all(&mut store);
        cache.unload_all(&mut store);

        assert_eq!(
            store.released,
            vec![TextureHandle(2), TextureHandle(1), TextureHandle(0)]
        );
        assert_eq!(store.live_count(), 0);
        assert_eq!(cache.texture_count(), 0);
    }

    #[test]
    fn test_load_image_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FakeTextureStore::default();
        let mut cache = TextureCache::new(AssetLoader::new(dir.path()));

        let err = cache.load_image("Opanda.bmp", &mut store).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
        assert_eq!(cache.texture_count(), 0);
        assert_eq!(cache.loader().base_path(), dir.path());
    }
}
