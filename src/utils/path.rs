//! Path utilities: expand `~`, resolve relative names.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~` and make the path absolute against the current directory.
pub fn absolutize(path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() {
        return p;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&p))
        .unwrap_or(p)
}
