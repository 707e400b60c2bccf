use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use shader_flight::cli::Cli;
use shader_flight::config::Config;
use shader_flight::core::{Clock, Controller, FramePacer, WindowContext, WinitController};
use shader_flight::frame::{FrameLoop, TickOutcome};
use shader_flight::renderer::{load_shader_source, ShaderRenderer};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Fullscreen, Window, WindowId},
};

const WINDOW_TITLE: &str = "Shader Flight";

struct App {
    cli: Cli,
    config: Config,
    shader_source: Cow<'static, str>,
    window: Option<Arc<Window>>,
    renderer: Option<ShaderRenderer>,
    controller: WinitController,
    frame_loop: FrameLoop,
    clock: Clock,
    pacer: FramePacer,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(cli: Cli, config: Config, shader_source: Cow<'static, str>) -> Self {
        Self {
            frame_loop: FrameLoop::new(&config),
            pacer: FramePacer::new(config.max_fps),
            cli,
            config,
            shader_source,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            clock: Clock::new(),
            startup_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let [width, height] = self.config.resolution;
        let mut attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(width, height));
        if self.config.full_screen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(attributes)?);
        window.set_cursor_visible(false);

        let renderer = pollster::block_on(ShaderRenderer::new(
            window.clone(),
            &self.shader_source,
            self.frame_loop.camera(),
            !self.cli.no_ui,
        ))?;

        let center = window.dimensions().center();
        // The first tick reports a failed warp
        window.set_pointer_position(center.0, center.1);
        self.controller.reset_pointer(center);

        self.clock.reset();
        self.pacer = FramePacer::new(self.config.max_fps);
        window.request_redraw();

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };

        self.pacer.sleep_until_due();
        let now = Instant::now();
        self.pacer.mark_frame(now);
        let dt = self.clock.tick_at(now);

        match self
            .frame_loop
            .tick(&mut self.controller, &**window, renderer, dt)
        {
            Ok(TickOutcome::Continue(_)) => {}
            Ok(TickOutcome::Quit) => event_loop.exit(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Render error: out of GPU memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Startup failed: {:#}", e);
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui see the event first
        let consumed = self
            .renderer
            .as_mut()
            .is_some_and(|renderer| renderer.handle_event(&event));
        if !consumed {
            self.controller.process_event(&event);
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }

        if FrameLoop::should_quit(&self.controller) {
            event_loop.exit();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let shader_source = load_shader_source(cli.shader.as_deref())?;
    log::info!(
        "Starting {}x{} at {} fps{}",
        config.resolution[0],
        config.resolution[1],
        config.max_fps,
        if config.full_screen { ", fullscreen" } else { "" }
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config, shader_source);

    println!("Shader Flight - Controls: WASD/arrows to move, mouse to look, Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
