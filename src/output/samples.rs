// src/output/samples.rs

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::records::{RecordStore, TaskSamples};
use crate::types::qualified_name;

/// Writes `<dir>/J<job>S<stage>.txt`, one run time per line, for every
/// stage of the task table whose owning job is known.
#[derive(Debug, Clone)]
pub struct SampleWriter {
    dir: PathBuf,
}

impl SampleWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the number of files written.
    pub fn write_all(
        &self,
        fs: &dyn FileSystem,
        store: &RecordStore,
        samples: &TaskSamples,
    ) -> Result<usize> {
        let mut written = 0;

        for (stage, values) in samples.iter() {
            let Some(job) = store.owner_of(stage) else {
                warn!(stage = %stage, "samples for a stage no job lists; skipping");
                continue;
            };

            let path = self.dir.join(format!("{}.txt", qualified_name(job, stage)));
            fs.write(&path, values.join("\n").as_bytes())?;
            debug!(path = ?path, samples = values.len(), "wrote samples file");
            written += 1;
        }

        info!(files = written, dir = ?self.dir, "samples files written");
        Ok(written)
    }
}
