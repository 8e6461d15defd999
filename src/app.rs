// Application: owns the window, renderer, loaded textures and game state

use crate::engine::assets::{AssetLoader, TextureCache};
use crate::engine::game_loop::FrameClock;
use crate::engine::input::InputManager;
use crate::engine::renderer::{Renderer, SpriteBatch};
use crate::engine::InitError;
use crate::game::player::{PlayerSprites, BASE_STATS};
use crate::game::{Scene, WindowConfig};
use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;
use winit::event::WindowEvent;
use winit::window::Window;

/// What the event loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Every resource the running game holds.
///
/// Textures are released when the app is dropped, before the renderer and
/// window go away (fields drop in declaration order).
pub struct App {
    textures: TextureCache,
    renderer: Renderer,
    scene: Scene,
    input: InputManager,
    clock: FrameClock,
    batch: SpriteBatch,
    window: Arc<Window>,
}

impl App {
    pub fn new(window: Arc<Window>, config: WindowConfig) -> Result<Self, InitError> {
        let mut renderer =
            pollster::block_on(Renderer::new(window.clone(), (config.width, config.height)))?;

        let mut textures = TextureCache::new(AssetLoader::discover());
        info!("Assets root: {}", textures.loader().base_path().display());

        let sprites = PlayerSprites::load(&mut textures, &mut renderer.texture_store(), &BASE_STATS);

        Ok(Self {
            textures,
            renderer,
            scene: Scene::new(config, sprites, BASE_STATS),
            input: InputManager::new(),
            clock: FrameClock::new(),
            batch: SpriteBatch::new(),
            window,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Feed a window event to the app
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<Flow> {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down...");
                return Ok(Flow::Exit);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.process_keyboard_event(event);
                if self.input.quit_requested() {
                    info!("Quit key pressed, shutting down...");
                    return Ok(Flow::Exit);
                }
            }
            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused
                self.input.reset();
            }
            WindowEvent::Resized(physical_size) => {
                debug!("Window resized to {:?}", physical_size);
                self.renderer.resize(*physical_size);
            }
            WindowEvent::RedrawRequested => self.frame()?,
            _ => {}
        }

        Ok(Flow::Continue)
    }

    /// One tick: timing, update, render. The first tick advances by zero.
    fn frame(&mut self) -> Result<()> {
        let dt = self.clock.tick();

        self.scene.update(dt, &self.input.snapshot());
        self.input.begin_frame();

        self.scene.render(&mut self.batch);
        self.renderer.render(&self.batch)
    }

    /// Release every loaded texture. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.textures.unload_all(&mut self.renderer.texture_store());
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
