//! `.env` settings file support.
//!
//! Values from the file are layered *under* the process environment:
//! a variable that is already set is never overwritten.

use crate::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load `.env` from the working directory.
///
/// Parent directories are not searched. Returns the path that was loaded,
/// or `None` when no file exists. A file that exists but cannot be read or
/// parsed is an error.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    let path = PathBuf::from(".env");
    match dotenvy::from_path(&path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded settings file");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => {
            debug!("No .env file found, using process environment only");
            Ok(None)
        }
        Err(e) => Err(ConfigError::DotEnv {
            path: path.display().to_string(),
            details: e.to_string(),
        }),
    }
}

/// Load an explicit settings file. Unlike [`load_dotenv`], a missing file is an error.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_err(|e| ConfigError::DotEnv {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    debug!(path = %path.display(), "Loaded settings file");
    Ok(())
}
