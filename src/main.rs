use anyhow::Result;
use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;
use winit::{
    event::Event,
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod app;
mod core;
mod engine;
mod game;

use app::{App, Flow};
use engine::InitError;
use game::DEFAULT_WINDOW;

fn main() -> ExitCode {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    info!("Starting {}...", DEFAULT_WINDOW.title);

    // Create event loop and window
    let event_loop = EventLoop::new().map_err(InitError::from)?;
    let window = WindowBuilder::new()
        .with_title(DEFAULT_WINDOW.title)
        .with_inner_size(winit::dpi::LogicalSize::new(
            DEFAULT_WINDOW.width,
            DEFAULT_WINDOW.height,
        ))
        .with_resizable(true)
        .build(&event_loop)
        .map_err(InitError::from)?;
    let window = Arc::new(window);

    info!("Window created successfully");

    let mut app = App::new(window, DEFAULT_WINDOW)?;

    // Main event loop
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match app.handle_window_event(&event) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => elwt.exit(),
            Err(e) => {
                error!("Render failed: {:#}", e);
                elwt.exit();
            }
        },
        Event::AboutToWait => {
            // Request redraw on next frame
            app.window().request_redraw();
        }
        Event::LoopExiting => app.shutdown(),
        _ => {}
    })?;

    Ok(())
}
