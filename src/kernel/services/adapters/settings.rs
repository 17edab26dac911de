use crate::kernel::services::ports::settings::Settings;
use crate::kernel::WorkspaceError;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".agentic-workspace";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Writes default settings to `path` unless a file is already there.
pub fn ensure_settings_file_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings_from(path: &Path) -> Result<Settings, WorkspaceError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| WorkspaceError::Settings(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| WorkspaceError::Settings(format!("{}: {e}", path.display())))
}

/// Creates the file with defaults when missing, then parses it.
pub fn load_settings_at(path: &Path) -> Result<Settings, WorkspaceError> {
    ensure_settings_file_at(path)
        .map_err(|e| WorkspaceError::Settings(format!("{}: {e}", path.display())))?;
    load_settings_from(path)
}

/// Loads the user settings file. Callers decide how to report a failure,
/// usually by logging it once a subscriber is up and using defaults.
pub fn load_settings() -> Result<Settings, WorkspaceError> {
    let path = get_settings_path().ok_or_else(|| {
        WorkspaceError::Settings("cannot determine settings directory".to_string())
    })?;
    load_settings_at(&path)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
