use anyhow::{Context, Result};
use std::path::PathBuf;

/// NewsFeed data root.
///
/// - macOS: ~/Library/Application Support/newsfeed
/// - Windows: %APPDATA%\newsfeed
/// - Linux: $XDG_DATA_HOME/newsfeed or ~/.local/share/newsfeed
///
/// The directory is not created here.
pub fn app_data_dir() -> Result<PathBuf> {
    let base = match std::env::var_os("XDG_DATA_HOME") {
        Some(xdg) if cfg!(target_os = "linux") => PathBuf::from(xdg),
        _ => dirs::data_dir().context("Unable to determine platform data directory")?,
    };
    Ok(base.join("newsfeed"))
}

pub fn log_dir(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("logs")
}
