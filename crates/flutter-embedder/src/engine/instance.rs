use std::ffi::c_void;
use std::ptr::NonNull;

use super::abi;
use super::error::{EngineError, check};
use super::library::EngineLibrary;
use super::project::ProjectArgs;
use crate::core::EventSink;
use crate::input::{PointerEvent, WindowMetrics};
use crate::render::{RenderSurface, opengl_renderer_config};

/// A running engine instance.
///
/// Dropping it shuts the engine down; it must therefore be dropped before the
/// render surface it was started with.
pub struct Engine {
    handle: NonNull<c_void>,
    library: EngineLibrary,
}

impl Engine {
    /// Starts the engine rendering into `surface`.
    ///
    /// # Safety
    ///
    /// `surface` is handed to the engine as raw user data and called from the
    /// engine's raster thread. It must stay at the same address and outlive
    /// the returned `Engine`.
    pub unsafe fn run<S: RenderSurface>(
        library: EngineLibrary,
        project: &ProjectArgs,
        surface: &S,
    ) -> Result<Self, EngineError> {
        let config = opengl_renderer_config::<S>();
        let args = project.as_raw();
        let user_data = surface as *const S as *mut c_void;
        let mut handle: abi::FlutterEngine = std::ptr::null_mut();

        // SAFETY: `config` and `args` are valid for the duration of the call and
        // `args` borrows strings owned by `project`.
        let status = unsafe {
            (library.run)(
                abi::FLUTTER_ENGINE_VERSION,
                &config,
                &args,
                user_data,
                &mut handle,
            )
        };
        check("FlutterEngineRun", status)?;

        let handle = NonNull::new(handle).ok_or(EngineError::NullHandle)?;
        log::info!("engine running ({})", library.path().display());

        Ok(Self { handle, library })
    }

    pub fn send_window_metrics(&self, metrics: WindowMetrics) -> Result<(), EngineError> {
        let raw = metrics.to_raw();
        // SAFETY: `handle` is a live engine and `raw` outlives the call.
        let status = unsafe { (self.library.send_window_metrics)(self.handle.as_ptr(), &raw) };
        check("FlutterEngineSendWindowMetricsEvent", status)
    }

    pub fn send_pointer_event(&self, event: PointerEvent) -> Result<(), EngineError> {
        let raw = event.to_raw();
        // SAFETY: as above; exactly one event is passed.
        let status = unsafe { (self.library.send_pointer_event)(self.handle.as_ptr(), &raw, 1) };
        check("FlutterEngineSendPointerEvent", status)
    }
}

impl EventSink for Engine {
    fn send_pointer_event(&mut self, event: PointerEvent) -> Result<(), EngineError> {
        Engine::send_pointer_event(self, event)
    }

    fn send_window_metrics(&mut self, metrics: WindowMetrics) -> Result<(), EngineError> {
        Engine::send_window_metrics(self, metrics)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        // SAFETY: the handle is live and is not used after this call.
        let status = unsafe { (self.library.shutdown)(self.handle.as_ptr()) };
        match check("FlutterEngineShutdown", status) {
            Ok(()) => log::debug!("engine shut down"),
            Err(e) => log::error!("{e}"),
        }
    }
}
