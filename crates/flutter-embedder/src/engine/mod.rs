//! Flutter engine binding.
//!
//! The engine is a shared library consumed through its C embedder ABI:
//! - `abi` mirrors the structs and entry points
//! - `EngineLibrary` loads the library and resolves entry points
//! - `ProjectArgs` owns the strings passed at startup
//! - `Engine` is the running instance and the sink for input/window events

pub mod abi;
mod error;
mod instance;
mod library;
mod project;

pub use error::{EngineError, ResultCode};
pub use instance::Engine;
pub use library::EngineLibrary;
pub use project::ProjectArgs;

/// Everything needed to start the engine once a render surface exists.
#[derive(Debug)]
pub struct EngineLaunch {
    pub library: std::path::PathBuf,
    pub project: ProjectArgs,
}
