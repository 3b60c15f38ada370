// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, StagedagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = StagedagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.input, raw.output))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_input_section(cfg)?;
    validate_output_section(cfg)?;
    Ok(())
}

fn validate_input_section(cfg: &RawConfigFile) -> Result<()> {
    if cfg.input.not_available.trim().is_empty() {
        return Err(StagedagError::ConfigError(
            "[input].not_available must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_output_section(cfg: &RawConfigFile) -> Result<()> {
    let loader = cfg.output.sample_loader.as_str();

    if loader.is_empty() {
        return Err(StagedagError::ConfigError(
            "[output].sample_loader must not be empty".to_string(),
        ));
    }

    // Emitted verbatim into the simulator script.
    let valid = loader
        .split('.')
        .all(|part| {
            part.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if !valid {
        return Err(StagedagError::ConfigError(format!(
            "[output].sample_loader '{}' is not a dotted identifier",
            loader
        )));
    }

    Ok(())
}
