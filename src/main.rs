//! Lunar Lander entry point
//!
//! Opens the window, loads the sprites, and runs the frame loop:
//! input, fixed-step update, render. Command-line arguments are ignored.

use std::sync::Arc;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use lunar_lander::platform::{FrameClock, KeyboardState};
use lunar_lander::renderer::{RenderState, scene};
use lunar_lander::sim::SpriteSet;
use lunar_lander::{Game, RenderInitError, Settings};

/// Everything that exists once the window is up
struct Running {
    window: Arc<Window>,
    render_state: RenderState,
    game: Game,
}

struct App {
    settings: Settings,
    running: Option<Running>,
    keys: KeyboardState,
    clock: FrameClock,
    /// Set when startup fails; reported after the event loop exits
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            running: None,
            keys: KeyboardState::new(),
            clock: FrameClock::new(),
            fatal: None,
        }
    }

    /// Create the window and GPU state, then load every sprite.
    /// Any unreadable sprite aborts startup.
    fn start(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Running> {
        let window_settings = &self.settings.window;
        let attributes = Window::default_attributes()
            .with_title(window_settings.title.clone())
            .with_inner_size(LogicalSize::new(window_settings.width, window_settings.height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let mut render_state = pollster::block_on(init_renderer(
            window.clone(),
            size.width,
            size.height,
            window_settings.vsync,
        ))?;

        let assets = &self.settings.assets;
        let sprites = SpriteSet {
            player: render_state.load_texture(&assets.player)?,
            pillar: render_state.load_texture(&assets.pillar)?,
            landing: render_state.load_texture(&assets.landing)?,
            font: render_state.load_texture(&assets.font)?,
        };

        Ok(Running {
            window,
            render_state,
            game: Game::new(&sprites),
        })
    }

    /// One rendered frame
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(running) = &mut self.running else {
            return;
        };

        running.game.input = self.keys.tick_input();

        let dt = self.clock.tick();
        running.game.update(dt);

        let batches = scene::build(&running.game.state);
        match running.render_state.render(&batches) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = running.render_state.size;
                running.render_state.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(running) => {
                log::info!("Lunar Lander running!");
                running.window.request_redraw();
                self.clock = FrameClock::new();
                self.running = Some(running);
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                self.keys.handle_event(&event);
                if self.keys.quit_requested() {
                    event_loop.exit();
                }
            }
            WindowEvent::Focused(false) => self.keys.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(running) = &mut self.running {
                    running.render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(running) = &self.running {
            running.window.request_redraw();
        }
    }
}

async fn init_renderer(
    window: Arc<Window>,
    width: u32,
    height: u32,
    vsync: bool,
) -> Result<RenderState, RenderInitError> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY,
        ..Default::default()
    });

    let surface = instance.create_surface(window)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    RenderState::new(surface, &adapter, width, height, vsync).await
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("lunar_lander=info,warn"))
        .init();
    log::info!("Lunar Lander starting...");

    let settings = Settings::load();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
