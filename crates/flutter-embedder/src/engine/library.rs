use std::path::{Path, PathBuf};

use libloading::Library;

use super::abi;
use super::error::EngineError;

/// Engine shared library with its entry points resolved.
///
/// The function pointers stay valid for as long as `_library` is loaded, which
/// is the lifetime of this value.
pub struct EngineLibrary {
    pub(crate) run: abi::FlutterEngineRunFn,
    pub(crate) shutdown: abi::FlutterEngineShutdownFn,
    pub(crate) send_window_metrics: abi::FlutterEngineSendWindowMetricsEventFn,
    pub(crate) send_pointer_event: abi::FlutterEngineSendPointerEventFn,
    path: PathBuf,
    _library: Library,
}

impl EngineLibrary {
    /// Loads the library at `path` (or by name through the dynamic loader
    /// search path) and resolves every entry point the embedder calls.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref().to_path_buf();

        // SAFETY: loading runs the library's initializers; the engine library
        // has no unsound static constructors.
        let library = unsafe { Library::new(&path) }.map_err(|source| EngineError::Load {
            path: path.clone(),
            source,
        })?;

        // SAFETY: each symbol is declared with the signature from
        // `flutter_embedder.h` for ABI version 1.
        let (run, shutdown, send_window_metrics, send_pointer_event) = unsafe {
            (
                symbol::<abi::FlutterEngineRunFn>(&library, "FlutterEngineRun")?,
                symbol::<abi::FlutterEngineShutdownFn>(&library, "FlutterEngineShutdown")?,
                symbol::<abi::FlutterEngineSendWindowMetricsEventFn>(
                    &library,
                    "FlutterEngineSendWindowMetricsEvent",
                )?,
                symbol::<abi::FlutterEngineSendPointerEventFn>(
                    &library,
                    "FlutterEngineSendPointerEvent",
                )?,
            )
        };

        log::debug!("loaded engine library {}", path.display());

        Ok(Self {
            run,
            shutdown,
            send_window_metrics,
            send_pointer_event,
            path,
            _library: library,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
impl EngineLibrary {
    /// Wraps in-process entry points; the handle keeps the test binary itself loaded.
    pub(crate) fn from_entry_points(
        run: abi::FlutterEngineRunFn,
        shutdown: abi::FlutterEngineShutdownFn,
        send_window_metrics: abi::FlutterEngineSendWindowMetricsEventFn,
        send_pointer_event: abi::FlutterEngineSendPointerEventFn,
    ) -> Self {
        Self {
            run,
            shutdown,
            send_window_metrics,
            send_pointer_event,
            path: PathBuf::from("<in-process>"),
            _library: libloading::os::unix::Library::this().into(),
        }
    }
}

impl std::fmt::Debug for EngineLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineLibrary").field("path", &self.path).finish_non_exhaustive()
    }
}

/// # Safety
///
/// `T` must match the exported symbol's real type.
unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, EngineError> {
    let mut bytes = Vec::with_capacity(name.len() + 1);
    bytes.extend_from_slice(name.as_bytes());
    bytes.push(0);

    let sym = unsafe { library.get::<T>(&bytes) }
        .map_err(|source| EngineError::MissingSymbol { name, source })?;
    Ok(*sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_reports_its_path() {
        let err = EngineLibrary::open("/nonexistent/libflutter_engine.so").unwrap_err();

        match &err {
            EngineError::Load { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/libflutter_engine.so"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("libflutter_engine.so"));
    }
}
