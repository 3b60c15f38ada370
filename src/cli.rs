// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `stagedag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stagedag",
    version,
    about = "Build a stage precedence DAG from job/stage tables for the DAG simulator.",
    long_about = None
)]
pub struct CliArgs {
    /// Job table (CSV): Job ID, Submission Time, Completion Time, Stage IDs.
    #[arg(value_name = "JOBS_CSV")]
    pub jobs: PathBuf,

    /// Stage table (CSV), one row per task: Stage ID, Executor Run Time.
    #[arg(value_name = "STAGES_CSV")]
    pub stages: PathBuf,

    /// Stage relation table (CSV): Stage ID, Parent IDs, Number of Tasks.
    #[arg(value_name = "STAGE_REL_CSV")]
    pub stage_relations: PathBuf,

    /// Directory holding the per-stage samples files referenced by the graph.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Optional config file (TOML).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STAGEDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Do not write the per-stage samples files.
    #[arg(long)]
    pub skip_samples: bool,

    /// Print the job hierarchy and idle gaps instead of the graph; write nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
