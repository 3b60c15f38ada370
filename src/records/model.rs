// src/records/model.rs

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::types::{JobId, StageId};

/// A job as described by the job table, after all of its rows are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub id: JobId,
    pub submission_time: i64,
    /// `0` when no row ever supplied a completion time.
    pub completion_time: i64,
    /// Whether a row supplied the completion time. Unfinished jobs (killed or
    /// still running when the trace was taken) never precede another job.
    pub finished: bool,
    pub stage_ids: BTreeSet<StageId>,
}

/// A stage as described by the stage relation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRecord {
    pub id: StageId,
    /// Parents as listed in the input; may name stages that were never loaded.
    pub parent_ids: Vec<StageId>,
    pub task_count: u64,
}

/// One row of the job table. Any cell may hold the "not available" sentinel.
#[derive(Debug, Deserialize)]
pub(crate) struct JobRow {
    #[serde(rename = "Job ID")]
    pub job_id: String,
    #[serde(rename = "Submission Time")]
    pub submission_time: String,
    #[serde(rename = "Completion Time")]
    pub completion_time: String,
    #[serde(rename = "Stage IDs")]
    pub stage_ids: String,
}

/// One row of the stage relation table.
#[derive(Debug, Deserialize)]
pub(crate) struct StageRelationRow {
    #[serde(rename = "Stage ID")]
    pub stage_id: String,
    #[serde(rename = "Parent IDs")]
    pub parent_ids: String,
    #[serde(rename = "Number of Tasks")]
    pub task_count: String,
}

/// One row of the stage (task) table; other columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct TaskRow {
    #[serde(rename = "Stage ID")]
    pub stage_id: String,
    #[serde(rename = "Executor Run Time")]
    pub executor_run_time: String,
}
