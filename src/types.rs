// src/types.rs

//! Identifier aliases shared by the record store, the graph builders and the
//! serializer.

/// Job identifier as it appears in the job table.
pub type JobId = String;

/// Stage identifier as it appears in the stage tables. Unique across jobs.
pub type StageId = String;

/// Serialization name of a stage: `J<jobId>S<stageId>`.
///
/// This is also the stem of the per-stage samples file (`<name>.txt`).
pub fn qualified_name(job: &str, stage: &str) -> String {
    format!("J{job}S{stage}")
}
