// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod output;
pub mod records;
pub mod types;

use std::path::Path;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::errors::{Result, StagedagError};
use crate::fs::{FileSystem, RealFileSystem};
use crate::output::{render_report, GraphSerializer, SampleWriter};
use crate::records::{load_task_samples, RecordStore};

/// High-level entry point used by `main.rs`: runs [`execute`] against the
/// real filesystem and prints the result to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let output = execute(&args, &RealFileSystem)?;
    println!("{output}");
    Ok(())
}

/// Run the whole pipeline and return the text destined for stdout.
///
/// This wires together:
/// - input existence checks
/// - config loading
/// - record store -> job precedence -> followers -> stage graph
/// - samples files (unless disabled or in dry-run mode)
/// - serialization (or the dry-run report)
pub fn execute(args: &CliArgs, fs: &dyn FileSystem) -> Result<String> {
    ensure_inputs_exist(
        fs,
        &[
            args.jobs.as_path(),
            args.stages.as_path(),
            args.stage_relations.as_path(),
        ],
    )?;

    let cfg = load_or_default(fs, args.config.as_deref())?;
    let store = RecordStore::load(fs, &args.jobs, &args.stage_relations, &cfg.input)?;
    let dag = dag::build(&store)?;

    if args.dry_run {
        debug!("dry-run complete (nothing written)");
        return Ok(render_report(&store, &dag));
    }

    if cfg.output.write_samples && !args.skip_samples {
        let samples = load_task_samples(fs, &args.stages)?;
        SampleWriter::new(&args.output_dir).write_all(fs, &store, &samples)?;
    } else {
        info!("skipping samples files");
    }

    let serializer = GraphSerializer::new(&args.output_dir, &cfg.output);
    Ok(serializer.render(&dag.stages))
}

fn ensure_inputs_exist(fs: &dyn FileSystem, paths: &[&Path]) -> Result<()> {
    for path in paths {
        if !fs.is_file(path) {
            return Err(StagedagError::MissingInput(path.to_path_buf()));
        }
    }
    Ok(())
}
