// src/config/loader.rs

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{BridgeError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    load_from_fs(&RealFileSystem, path.as_ref())
}

/// [`load_from_path`] reading through `fs`.
///
/// A missing file is an `IoError` of kind `NotFound`.
pub fn load_from_fs(fs: &dyn FileSystem, path: &Path) -> Result<RawConfigFile> {
    if !fs.exists(path) {
        return Err(BridgeError::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            format!("config file {} does not exist", path.display()),
        )));
    }
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
///
/// `required = true` (a path the user named explicitly) turns a missing
/// file into an IO error instead.
pub fn load_or_default(path: impl AsRef<Path>, required: bool) -> Result<ConfigFile> {
    load_or_default_from_fs(&RealFileSystem, path.as_ref(), required)
}

/// [`load_or_default`] reading through `fs`.
pub fn load_or_default_from_fs(
    fs: &dyn FileSystem,
    path: &Path,
    required: bool,
) -> Result<ConfigFile> {
    if !required && !fs.exists(path) {
        debug!(path = %path.display(), "no config file; using defaults");
        return ConfigFile::try_from(RawConfigFile::default());
    }
    let raw_config = load_from_fs(fs, path)?;
    ConfigFile::try_from(raw_config)
}

/// `OdeBridge.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("OdeBridge.toml")
}
