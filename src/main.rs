//! Nyan Scene
//!
//! Nyan Cat bobs in place while a pulsing, spinning star orbits it.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use nyan_core::SpriteScene;
use nyan_scene::config::AppConfig;
use nyan_scene::input::InputAction;
use nyan_scene::systems::{EventResponse, RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// Run status, clock, phases and model matrices
    scene: SpriteScene,
    simulation: SimulationSystem,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = SpriteScene::new(config.animation.to_motion_params());

        Self {
            config,
            window: None,
            render: None,
            scene,
            simulation: SimulationSystem::new(),
        }
    }

    /// Update the scene and draw it
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(transforms) = self.simulation.update(&mut self.scene) else {
            return;
        };

        let Some(render) = &mut self.render else {
            return;
        };

        match render.render_frame(&transforms) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.reconfigure(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                if SimulationSystem::apply_action(&mut self.scene, InputAction::Quit) == EventResponse::Exit {
                    event_loop.exit();
                }
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            &self.config.assets,
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(RenderError::Texture(e)) => {
                log::error!("Unable to load image. Make sure the path is correct. ({})", e);
                std::process::abort();
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match SimulationSystem::handle_event(&mut self.scene, &event) {
            EventResponse::Exit => {
                event_loop.exit();
                return;
            }
            EventResponse::Consumed => return,
            EventResponse::Forward => {}
        }

        match event {
            // The window is fixed-size, but the platform can still resize it
            // (scale factor changes). The surface follows; the view stretches.
            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested if self.scene.is_running() => self.frame(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Shutting down after {} frames", self.scene.frame_count());
    }
}

fn main() {
    // Logger is set up after loading config so the configured level applies
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting Nyan Scene");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
