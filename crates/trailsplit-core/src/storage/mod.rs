//! On-disk storage locations and the settings store.

mod settings;

pub use settings::SettingsStore;

use std::path::PathBuf;

/// Returns `~/.config/trailsplit[-dev]/` based on TRAILSPLIT_ENV.
///
/// Set TRAILSPLIT_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TRAILSPLIT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("trailsplit-dev")
    } else {
        base_dir.join("trailsplit")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
