// src/config/loader.rs

use std::path::Path;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, StagedagError};
use crate::fs::FileSystem;

/// Load a configuration file and return the raw, unvalidated model.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    if !fs.is_file(path) {
        return Err(StagedagError::MissingInput(path.to_path_buf()));
    }
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file and validate it.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the config at `path` if one was given, otherwise use the defaults.
pub fn load_or_default(fs: &dyn FileSystem, path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => load_and_validate(fs, path),
        None => Ok(ConfigFile::default()),
    }
}
