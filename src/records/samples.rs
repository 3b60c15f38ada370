// src/records/samples.rs

use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{Result, StagedagError};
use crate::fs::FileSystem;
use crate::records::model::TaskRow;
use crate::records::store::read_rows;
use crate::types::StageId;

/// Executor run times per stage, in table order.
pub type TaskSamples = BTreeMap<StageId, Vec<String>>;

/// Read the stage (task) table and group run times by stage.
///
/// Values are kept as written but must parse as numbers.
pub fn load_task_samples(fs: &dyn FileSystem, path: &Path) -> Result<TaskSamples> {
    let rows: Vec<TaskRow> = read_rows(fs, path)?;

    let mut samples = TaskSamples::new();
    for row in rows {
        if row.executor_run_time.parse::<f64>().is_err() {
            return Err(StagedagError::malformed(
                path,
                format!(
                    "stage '{}': column 'Executor Run Time' expects a number, got '{}'",
                    row.stage_id, row.executor_run_time
                ),
            ));
        }
        samples
            .entry(row.stage_id)
            .or_default()
            .push(row.executor_run_time);
    }

    Ok(samples)
}
