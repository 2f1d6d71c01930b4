use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::Error as SerdeDeError;

use crate::app_dirs;

use super::{AppSettings, CONFIG_FILE_NAME, ConfigError, map_app_dir_error};

const TEMP_FILE_ATTEMPTS: usize = 5;

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the application root, returning defaults if missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    load_from(&path)
}

/// Load configuration from the application root, writing defaults on first run.
///
/// A failed write is logged and the defaults are still returned.
pub fn load_or_create() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    load_or_create_at(&path)
}

/// Load configuration from `path`, writing defaults there if it is missing.
pub fn load_or_create_at(path: &Path) -> Result<AppSettings, ConfigError> {
    if path.exists() {
        return load_from(path);
    }
    let settings = AppSettings::default();
    match save_to_path(&settings, path) {
        Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
        Err(err) => tracing::warn!("Could not write default config: {err}"),
    }
    Ok(settings)
}

/// Load configuration from a specific path, returning defaults if missing.
pub fn load_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Persist configuration to the application root.
pub fn save(settings: &AppSettings) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(settings, &path)
}

/// Write settings atomically, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, data.as_bytes())
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    use rand::TryRngCore;
    let write_error = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .ok_or_else(|| write_error(std::io::Error::other("config path has no parent directory")))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| write_error(std::io::Error::other("config path has no file name")))?;

    let mut last_err = None;
    for _ in 0..TEMP_FILE_ATTEMPTS {
        let mut bytes = [0u8; 6];
        rand::rngs::OsRng.try_fill_bytes(&mut bytes).map_err(|source| {
            write_error(std::io::Error::other(format!(
                "failed to generate temporary file suffix: {source}"
            )))
        })?;
        let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        let tmp_path = dir.join(format!("{}.tmp-{}", file_name.to_string_lossy(), suffix));

        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                last_err = Some(err);
                continue;
            }
            Err(source) => {
                return Err(ConfigError::Write {
                    path: tmp_path,
                    source,
                });
            }
        };

        if let Err(source) = file.write_all(data).and_then(|_| file.sync_all()) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(ConfigError::Write {
                path: tmp_path,
                source,
            });
        }
        drop(file);
        if let Err(source) = std::fs::rename(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_error(source));
        }
        return Ok(());
    }

    Err(write_error(std::io::Error::new(
        std::io::ErrorKind::AlreadyExists,
        format!(
            "failed to create temporary file: {}",
            last_err
                .map(|err| err.to_string())
                .unwrap_or_else(|| "unknown error".into())
        ),
    )))
}
