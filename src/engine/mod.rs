// Engine modules: assets, input, renderer, timing

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;

/// Startup failures. Any of these ends the process before the loop starts.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter found")]
    NoAdapter,

    #[error("Failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Surface reports no usable format")]
    UnsupportedSurface,
}
