//! Where the calculator keeps its files.
//!
//! Everything lives under one `.wellness` folder inside the OS config
//! directory: `config.toml`, `logs/` and `models/`. Setting
//! `WELLNESS_CONFIG_HOME` replaces the OS config directory, which keeps
//! tests and portable installs self-contained.

use std::path::PathBuf;
#[cfg(test)]
use std::sync::Mutex;

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the config base.
pub const APP_DIR_NAME: &str = ".wellness";

/// Environment variable that replaces the OS config directory.
pub const CONFIG_HOME_ENV: &str = "WELLNESS_CONFIG_HOME";

#[cfg(test)]
static BASE_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// Neither the override nor the OS yielded a config directory.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create one of the application directories.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Subdirectories of the application root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
    Root,
    Logs,
    Models,
}

impl AppDir {
    fn resolve(self) -> Result<PathBuf, AppDirError> {
        let root = config_base().ok_or(AppDirError::NoBaseDir)?.join(APP_DIR_NAME);
        let path = match self {
            Self::Root => root,
            Self::Logs => root.join("logs"),
            Self::Models => root.join("models"),
        };
        std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// The `.wellness` root, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    AppDir::Root.resolve()
}

/// Per-launch log files.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    AppDir::Logs.resolve()
}

/// Model artifacts, including the installed copy of the bundled model.
pub fn models_dir() -> Result<PathBuf, AppDirError> {
    AppDir::Models.resolve()
}

fn config_base() -> Option<PathBuf> {
    #[cfg(test)]
    if let Some(path) = BASE_OVERRIDE
        .lock()
        .unwrap_or_else(|err| err.into_inner())
        .clone()
    {
        return Some(path);
    }
    std::env::var_os(CONFIG_HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
}
