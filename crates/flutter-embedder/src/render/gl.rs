use std::ffi::{CStr, c_void};
use std::num::NonZeroU32;

use anyhow::{Context, Result, anyhow};
use glutin::config::{Api, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext,
    PossiblyCurrentGlContext, Version,
};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::{ApiPreference, DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::bridge::RenderSurface;

/// OpenGL ES context and window surface handed to the engine.
///
/// The context is never made current on the main thread; the engine binds it
/// on its raster thread through [`RenderSurface::make_current`].
pub struct GlWindowSurface {
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
    display: Display,
}

// SAFETY: the engine serializes make-current / present / clear-current on its
// raster thread, and EGL allows binding a context from any thread as long as it
// is current on at most one thread at a time. The main thread only resizes the
// surface, which does not require the context to be current.
unsafe impl Send for GlWindowSurface {}
unsafe impl Sync for GlWindowSurface {}

impl GlWindowSurface {
    /// Creates the window together with an EGL-preferred GLES context.
    pub fn create(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        gles_major: u8,
    ) -> Result<(Window, Self)> {
        let template = ConfigTemplateBuilder::new().with_api(gles_api(gles_major));

        let (window, gl_config) = DisplayBuilder::new()
            .with_preference(ApiPreference::PreferEgl)
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, |configs| {
                // glutin-winit only calls the picker with a non-empty set; no
                // matching config is reported as an error from `build`.
                configs
                    .reduce(|best, c| if c.num_samples() > best.num_samples() { c } else { best })
                    .expect("GL display offered no configs")
            })
            .map_err(|e| anyhow!("failed to create GL display: {e}"))?;

        let window = window.context("GL display did not create a window")?;

        log::debug!(
            "GL config: api {:?}, {} samples",
            gl_config.api(),
            gl_config.num_samples()
        );

        let raw_window_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();

        let display = gl_config.display();
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(gles_major, 0))))
            .build(Some(raw_window_handle));

        // SAFETY: the raw window handle belongs to `window`, which the caller keeps
        // alive for longer than this surface.
        let not_current = unsafe { display.create_context(&gl_config, &context_attrs) }
            .context("failed to create GLES context")?;

        let surface_attrs = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .context("failed to describe window surface")?;

        // SAFETY: as above.
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create window surface")?;

        Ok((
            window,
            Self {
                context: not_current.treat_as_possibly_current(),
                surface,
                display,
            },
        ))
    }

    /// Resizes the backing window surface; zero-sized requests are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.surface.resize(&self.context, width, height);
    }
}

/// Config API bit able to back a GLES context of `major`.
fn gles_api(major: u8) -> Api {
    match major {
        0 | 1 => Api::GLES1,
        2 => Api::GLES2,
        _ => Api::GLES3,
    }
}

impl RenderSurface for GlWindowSurface {
    fn make_current(&self) {
        if let Err(e) = self.context.make_current(&self.surface) {
            log::error!("make_current failed: {e}");
        }
    }

    fn clear_current(&self) {
        if let Err(e) = self.context.make_not_current_in_place() {
            log::error!("clear_current failed: {e}");
        }
    }

    fn present(&self) {
        if let Err(e) = self.surface.swap_buffers(&self.context) {
            log::error!("swap_buffers failed: {e}");
        }
    }

    fn proc_address(&self, name: &CStr) -> *const c_void {
        self.display.get_proc_address(name)
    }
}
