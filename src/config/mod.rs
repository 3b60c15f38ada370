// src/config/mod.rs

//! Configuration loading and validation for stagedag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file through the [`FileSystem`](crate::fs::FileSystem) (`loader.rs`).
//! - Validate field values (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, InputSection, OutputSection, RawConfigFile};
