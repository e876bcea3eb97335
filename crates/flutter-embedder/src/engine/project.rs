use std::ffi::{CString, OsStr, c_char, c_int};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::abi;
use super::error::EngineError;
use crate::resources::ResourcePaths;

/// Owned project arguments for `FlutterEngineRun`.
///
/// The C strings live here, so the raw view returned by [`ProjectArgs::as_raw`]
/// is valid for as long as `self` is borrowed.
#[derive(Debug)]
pub struct ProjectArgs {
    assets_path: CString,
    icu_data_path: CString,
    switches: Vec<CString>,
    argv: Vec<*const c_char>,
}

impl ProjectArgs {
    /// Builds arguments from resolved resource paths.
    ///
    /// `command_line` is forwarded as the engine's argv; the first element is
    /// the program name, the rest are engine switches. Arguments are passed
    /// through as raw bytes and need not be UTF-8.
    pub fn new<I, S>(paths: &ResourcePaths, command_line: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let assets_path = path_to_cstring("assets path", &paths.assets)?;
        let icu_data_path = path_to_cstring("ICU data path", &paths.icu_data)?;

        let switches = command_line
            .into_iter()
            .map(|arg| os_to_cstring("engine switch", arg.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        // CString owns its heap buffer, so these pointers survive moves of `self`.
        let argv = switches.iter().map(|s| s.as_ptr()).collect();

        Ok(Self {
            assets_path,
            icu_data_path,
            switches,
            argv,
        })
    }

    pub fn switches(&self) -> impl Iterator<Item = &str> {
        self.switches.iter().filter_map(|s| s.to_str().ok())
    }

    pub fn as_raw(&self) -> abi::FlutterProjectArgs {
        abi::FlutterProjectArgs {
            struct_size: std::mem::size_of::<abi::FlutterProjectArgs>(),
            assets_path: self.assets_path.as_ptr(),
            main_path_unused: std::ptr::null(),
            packages_path_unused: std::ptr::null(),
            icu_data_path: self.icu_data_path.as_ptr(),
            command_line_argc: self.argv.len() as c_int,
            command_line_argv: if self.argv.is_empty() {
                std::ptr::null()
            } else {
                self.argv.as_ptr()
            },
        }
    }
}

fn path_to_cstring(what: &'static str, path: &Path) -> Result<CString, EngineError> {
    os_to_cstring(what, path.as_os_str())
}

fn os_to_cstring(what: &'static str, value: &OsStr) -> Result<CString, EngineError> {
    CString::new(value.as_bytes()).map_err(|_| EngineError::InvalidArgument {
        what,
        value: value.to_string_lossy().into_owned(),
    })
}
