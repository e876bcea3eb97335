use std::path::{Path, PathBuf};

const SELF_EXE: &str = "/proc/self/exe";

/// Directory containing the running executable.
///
/// Returns `None` (after logging why) when `/proc/self/exe` cannot be read or
/// has no parent directory.
pub fn executable_directory() -> Option<PathBuf> {
    match std::fs::read_link(SELF_EXE) {
        Ok(exe) => parent_directory(&exe),
        Err(e) => {
            log::error!("couldn't locate executable: {e}");
            None
        }
    }
}

/// Base directory for runtime resources: the executable's directory, or the
/// current directory when that cannot be determined.
pub fn base_directory() -> PathBuf {
    executable_directory().unwrap_or_else(|| PathBuf::from("."))
}

fn parent_directory(exe: &Path) -> Option<PathBuf> {
    match exe.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Some(dir.to_path_buf()),
        _ => {
            log::error!("unable to find parent directory of {}", exe.display());
            None
        }
    }
}
