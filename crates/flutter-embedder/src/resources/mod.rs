//! Runtime resource lookup.
//!
//! Locale data, the asset bundle and the engine library are found relative to
//! the executable so a bundled build runs from any working directory.

mod error;
mod layout;
mod locator;

pub use error::ResourceError;
pub use layout::{
    ASSETS_DIR, DATA_DIR, ENGINE_LIBRARY, ICU_DATA_FILE, IcuDataSource, LIB_DIR, ResourceLayout,
    ResourcePaths, SYSTEM_ICU_DATA,
};
pub use locator::{base_directory, executable_directory};
