//! Path resolution for tsk data files.
//!
//! TSK_HOME resolution order:
//! 1. TSK_HOME environment variable (if set)
//! 2. ~/.config/tsk (default)

use std::path::PathBuf;

/// Returns the tsk home directory.
///
/// Checks TSK_HOME env var first, falls back to ~/.config/tsk
pub fn tsk_home() -> PathBuf {
    if let Ok(home) = std::env::var("TSK_HOME") {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .map(|h| h.join(".config").join("tsk"))
        .expect("Could not determine home directory")
}

/// Returns the path to the persisted task collection.
pub fn tasks_path() -> PathBuf {
    tsk_home().join("tasks.json")
}

/// Returns the path to the persisted session blob.
pub fn session_path() -> PathBuf {
    tsk_home().join("session.json")
}
