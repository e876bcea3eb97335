use std::fmt;
use std::path::PathBuf;

use super::abi;

/// Status returned by engine entry points.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResultCode {
    Success,
    InvalidLibraryVersion,
    InvalidArguments,
    InternalInconsistency,
    /// A status this crate does not know about.
    Unknown(i32),
}

impl ResultCode {
    pub fn from_raw(raw: abi::FlutterEngineResult) -> Self {
        match raw {
            abi::K_SUCCESS => Self::Success,
            abi::K_INVALID_LIBRARY_VERSION => Self::InvalidLibraryVersion,
            abi::K_INVALID_ARGUMENTS => Self::InvalidArguments,
            abi::K_INTERNAL_INCONSISTENCY => Self::InternalInconsistency,
            other => Self::Unknown(other),
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::InvalidLibraryVersion => f.write_str("invalid library version"),
            Self::InvalidArguments => f.write_str("invalid arguments"),
            Self::InternalInconsistency => f.write_str("internal inconsistency"),
            Self::Unknown(raw) => write!(f, "unknown status {raw}"),
        }
    }
}

/// Failure while loading or talking to the engine library.
#[derive(Debug)]
pub enum EngineError {
    /// The shared library could not be opened.
    Load {
        path: PathBuf,
        source: libloading::Error,
    },
    /// A required entry point is not exported by the library.
    MissingSymbol {
        name: &'static str,
        source: libloading::Error,
    },
    /// A path or switch contains an interior NUL byte.
    InvalidArgument { what: &'static str, value: String },
    /// An entry point returned a non-success status.
    Call {
        call: &'static str,
        code: ResultCode,
    },
    /// `FlutterEngineRun` reported success without producing a handle.
    NullHandle,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, .. } => {
                write!(f, "failed to load engine library {}", path.display())
            }
            Self::MissingSymbol { name, .. } => {
                write!(f, "engine library does not export {name}")
            }
            Self::InvalidArgument { what, value } => {
                write!(f, "{what} contains a NUL byte: {value:?}")
            }
            Self::Call { call, code } => write!(f, "{call} failed: {code}"),
            Self::NullHandle => f.write_str("FlutterEngineRun returned a null engine handle"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load { source, .. } | Self::MissingSymbol { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Maps a raw status into `Ok(())` or [`EngineError::Call`].
pub(crate) fn check(call: &'static str, raw: abi::FlutterEngineResult) -> Result<(), EngineError> {
    match ResultCode::from_raw(raw) {
        ResultCode::Success => Ok(()),
        code => Err(EngineError::Call { call, code }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_variants() {
        assert_eq!(ResultCode::from_raw(0), ResultCode::Success);
        assert_eq!(ResultCode::from_raw(1), ResultCode::InvalidLibraryVersion);
        assert_eq!(ResultCode::from_raw(2), ResultCode::InvalidArguments);
        assert_eq!(ResultCode::from_raw(3), ResultCode::InternalInconsistency);
    }

    #[test]
    fn unknown_code_is_preserved() {
        assert_eq!(ResultCode::from_raw(42), ResultCode::Unknown(42));
        assert!(!ResultCode::Unknown(42).is_success());
    }

    #[test]
    fn check_names_the_failing_call() {
        assert!(check("FlutterEngineShutdown", abi::K_SUCCESS).is_ok());

        let err = check("FlutterEngineRun", abi::K_INVALID_ARGUMENTS).unwrap_err();
        assert_eq!(err.to_string(), "FlutterEngineRun failed: invalid arguments");
    }
}
