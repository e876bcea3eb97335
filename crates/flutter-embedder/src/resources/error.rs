use std::fmt;
use std::path::PathBuf;

/// A required runtime resource is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No `icudtl.dat` at any probed location.
    IcuDataNotFound { searched: Vec<PathBuf> },
    /// The `flutter_assets` bundle directory does not exist.
    AssetsNotFound { path: PathBuf },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IcuDataNotFound { searched } => {
                f.write_str("unable to locate icudtl.dat (searched ")?;
                for (i, path) in searched.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", path.display())?;
                }
                f.write_str(")")
            }
            Self::AssetsNotFound { path } => {
                write!(f, "unable to locate flutter_assets directory at {}", path.display())
            }
        }
    }
}

impl std::error::Error for ResourceError {}
