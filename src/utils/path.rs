//! Path utilities for user-supplied roster locations.

use std::path::PathBuf;

/// `~/roster.csv` → `<home>/roster.csv`; anything else is taken as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
