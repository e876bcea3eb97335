use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::EmbedderContext;
use crate::engine::{Engine, EngineLaunch, EngineLibrary};
use crate::input::platform::dispatch_window_event;
use crate::render::GlWindowSurface;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Physical pixels; also the first metrics reported to the engine.
    pub initial_size: PhysicalSize<u32>,
    /// Requested OpenGL ES major version.
    pub gles_major: u8,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Flutter".to_string(),
            initial_size: PhysicalSize::new(800, 600),
            gles_major: 2,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, starts the engine and blocks until the window closes.
    pub fn run(config: RuntimeConfig, launch: EngineLaunch) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, launch);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Everything tied to the open window.
///
/// Field order is drop order: the engine shuts down before the GL surface it
/// renders into, and the surface goes before the window.
struct Session {
    ctx: EmbedderContext<Engine>,
    gl: Box<GlWindowSurface>,
    window: Window,
}

impl Session {
    fn open(
        event_loop: &ActiveEventLoop,
        config: &RuntimeConfig,
        launch: EngineLaunch,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);

        let (window, gl) = GlWindowSurface::create(event_loop, attrs, config.gles_major)?;
        let gl = Box::new(gl);

        let library = EngineLibrary::open(&launch.library)?;

        // SAFETY: `gl` is boxed so its address is stable, and `Session` drops
        // `ctx` (and with it the engine) before `gl`.
        let engine = unsafe { Engine::run(library, &launch.project, gl.as_ref()) }
            .context("failed to start engine")?;

        let size = config.initial_size;
        let ctx = EmbedderContext::new(engine, (size.width, size.height));

        Ok(Self { ctx, gl, window })
    }

    fn id(&self) -> WindowId {
        self.window.id()
    }
}

struct AppState {
    config: RuntimeConfig,
    launch: Option<EngineLaunch>,
    session: Option<Session>,
    startup_error: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, launch: EngineLaunch) -> Self {
        Self {
            config,
            launch: Some(launch),
            session: None,
            startup_error: None,
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.take().is_some() {
            log::info!("window closed");
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // The engine is started once; later resumes keep the existing session.
        let Some(launch) = self.launch.take() else {
            return;
        };

        match Session::open(event_loop, &self.config, launch) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                log::error!("startup failed: {e:#}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.id() != window_id {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => session.ctx.request_close(),
            WindowEvent::Resized(size) => session.gl.resize(*size),
            _ => {}
        }

        dispatch_window_event(&mut session.ctx, &event);

        if session.ctx.close_requested() {
            self.close(event_loop);
        }
    }
}
