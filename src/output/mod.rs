// src/output/mod.rs

//! Everything the tool emits.
//!
//! - [`serializer`]: the stage graph in the simulator's grammar (stdout).
//! - [`samples`]: one `<qualifiedName>.txt` per stage with its run times.
//! - [`report`]: the `--dry-run` summary, including idle gaps between jobs.

pub mod report;
pub mod samples;
pub mod serializer;

pub use report::{idle_gaps, render_report, IdleGap};
pub use samples::SampleWriter;
pub use serializer::GraphSerializer;
