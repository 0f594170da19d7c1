//! Path utilities: expand ~ and resolve paths relative to a base directory.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~` and anchor relative paths under `base`.
pub fn resolve(path: &str, base: &Path) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base.join(p) }
}
