//! Filesystem locations for linkdeck's configuration, lists, and logs.

use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from `var`, falling back to `$HOME`
/// joined with `fallback` when the variable is unset or blank.
fn xdg_base_dir(var: &str, fallback: &[&str]) -> PathBuf {
    if let Ok(val) = env::var(var)
        && !val.trim().is_empty()
    {
        return PathBuf::from(val);
    }
    let mut base = env::var("HOME").map_or_else(|_| PathBuf::from("."), PathBuf::from);
    for part in fallback {
        base.push(part);
    }
    base
}

/// Return `$HOME/.config/linkdeck`, ensuring it exists.
///
/// Inputs: none
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("linkdeck");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// XDG config directory for linkdeck (ensured to exist)
pub fn config_dir() -> PathBuf {
    // Prefer HOME ~/.config/linkdeck first
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    // Fallback: use XDG_CONFIG_HOME (or default to ~/.config) and ensure
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("linkdeck");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/linkdeck/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let base = config_dir();
    let dir = base.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Lists directory under config: "$HOME/.config/linkdeck/lists" (ensured to exist)
pub fn lists_dir() -> PathBuf {
    let base = config_dir();
    let dir = base.join("lists");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
