//! Generic JSON persistence helpers for ~/.angler/ files.
//!
//! The data directory can be redirected with the `ANGLER_HOME` environment
//! variable.

use std::fs;
use std::io;
use std::path::PathBuf;

pub const HOME_ENV: &str = "ANGLER_HOME";

/// Get the data directory path, creating it if needed.
pub fn angler_dir() -> io::Result<PathBuf> {
    let dir = match std::env::var_os(HOME_ENV) {
        Some(custom) => PathBuf::from(custom),
        None => dirs::home_dir()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Could not determine home directory",
                )
            })?
            .join(".angler"),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in the data directory.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(angler_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(file = filename, error = %e, "data directory unavailable");
            return T::default();
        }
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(file = filename, error = %e, "invalid JSON, using defaults");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
