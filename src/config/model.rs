// src/config/model.rs

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [input]
/// not_available = "NOVAL"
///
/// [output]
/// sample_loader = "solver.fileToArray"
/// write_samples = true
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub input: InputSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Validated configuration. Only constructible through
/// `ConfigFile::try_from(RawConfigFile)` or [`ConfigFile::default`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub input: InputSection,
    pub output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(input: InputSection, output: OutputSection) -> Self {
        Self { input, output }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(InputSection::default(), OutputSection::default())
    }
}

/// `[input]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSection {
    /// Cell value meaning "not yet available" in the job table.
    #[serde(default = "default_not_available")]
    pub not_available: String,
}

fn default_not_available() -> String {
    "NOVAL".to_string()
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            not_available: default_not_available(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Simulator function that turns a samples path into an array.
    #[serde(default = "default_sample_loader")]
    pub sample_loader: String,

    /// Whether the per-stage samples files are written next to the graph.
    #[serde(default = "default_write_samples")]
    pub write_samples: bool,
}

fn default_sample_loader() -> String {
    "solver.fileToArray".to_string()
}

fn default_write_samples() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            sample_loader: default_sample_loader(),
            write_samples: default_write_samples(),
        }
    }
}
