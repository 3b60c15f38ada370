// src/records/store.rs

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::InputSection;
use crate::errors::{Result, StagedagError};
use crate::fs::FileSystem;
use crate::records::model::{JobRecord, JobRow, StageRecord, StageRelationRow};
use crate::records::parse::{parse_id_list, parse_int};
use crate::types::{JobId, StageId};

/// Immutable snapshot of every job and stage of one execution trace.
///
/// Invariants upheld by construction:
/// - every stage id is listed by at most one job,
/// - every loaded stage is owned by exactly one job.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    jobs: BTreeMap<JobId, JobRecord>,
    stages: BTreeMap<StageId, StageRecord>,
    owners: BTreeMap<StageId, JobId>,
}

impl RecordStore {
    /// Assemble a store from already-typed records.
    ///
    /// Stages that no job lists are dropped with a warning since they cannot
    /// be given a qualified name.
    pub fn from_records(
        jobs: impl IntoIterator<Item = JobRecord>,
        stages: impl IntoIterator<Item = StageRecord>,
    ) -> Result<Self> {
        let mut job_map = BTreeMap::new();
        let mut owners: BTreeMap<StageId, JobId> = BTreeMap::new();

        for job in jobs {
            for stage in job.stage_ids.iter() {
                if let Some(previous) = owners.insert(stage.clone(), job.id.clone()) {
                    if previous != job.id {
                        return Err(StagedagError::InconsistentRecords(format!(
                            "stage '{}' is listed by both job '{}' and job '{}'",
                            stage, previous, job.id
                        )));
                    }
                }
            }
            job_map.insert(job.id.clone(), job);
        }

        let mut stage_map = BTreeMap::new();
        for stage in stages {
            if !owners.contains_key(&stage.id) {
                warn!(stage = %stage.id, "stage is not listed by any job; skipping");
                continue;
            }
            if stage_map.contains_key(&stage.id) {
                return Err(StagedagError::InconsistentRecords(format!(
                    "stage '{}' is described more than once",
                    stage.id
                )));
            }
            stage_map.insert(stage.id.clone(), stage);
        }

        Ok(Self {
            jobs: job_map,
            stages: stage_map,
            owners,
        })
    }

    /// Load the job table and the stage relation table.
    pub fn load(
        fs: &dyn FileSystem,
        jobs_path: &Path,
        relations_path: &Path,
        input: &InputSection,
    ) -> Result<Self> {
        let jobs = load_jobs(fs, jobs_path, &input.not_available)?;
        let stages = load_stage_relations(fs, relations_path)?;

        let store = Self::from_records(jobs, stages)?;
        info!(
            jobs = store.jobs.len(),
            stages = store.stages.len(),
            "record store loaded"
        );
        Ok(store)
    }

    pub fn jobs(&self) -> &BTreeMap<JobId, JobRecord> {
        &self.jobs
    }

    pub fn job(&self, id: &str) -> Option<&JobRecord> {
        self.jobs.get(id)
    }

    pub fn stages(&self) -> &BTreeMap<StageId, StageRecord> {
        &self.stages
    }

    pub fn stage(&self, id: &str) -> Option<&StageRecord> {
        self.stages.get(id)
    }

    /// Whether `id` is part of the loaded stage set.
    pub fn contains_stage(&self, id: &str) -> bool {
        self.stages.contains_key(id)
    }

    /// Job listing `stage`, whether or not the stage itself was loaded.
    pub fn owner_of(&self, stage: &str) -> Option<&JobId> {
        self.owners.get(stage)
    }

    /// Loaded stages belonging to `job`.
    pub fn stages_of<'a>(&'a self, job: &'a JobRecord) -> impl Iterator<Item = &'a StageRecord> {
        job.stage_ids.iter().filter_map(|id| self.stages.get(id))
    }
}

/// Deserialize every row of a headed CSV document.
pub(crate) fn read_rows<T: DeserializeOwned>(fs: &dyn FileSystem, path: &Path) -> Result<Vec<T>> {
    let contents = fs.read_to_string(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: T = row.map_err(|e| StagedagError::malformed(path, e.to_string()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Partially known job while rows are being merged.
#[derive(Debug, Default)]
struct JobDraft {
    submission_time: Option<i64>,
    completion_time: Option<i64>,
    stage_ids: Option<BTreeSet<StageId>>,
}

fn load_jobs(fs: &dyn FileSystem, path: &Path, not_available: &str) -> Result<Vec<JobRecord>> {
    let rows: Vec<JobRow> = read_rows(fs, path)?;
    let malformed = |msg: String| StagedagError::malformed(path, msg);

    let mut drafts: BTreeMap<JobId, JobDraft> = BTreeMap::new();

    for row in rows {
        let draft = drafts.entry(row.job_id.clone()).or_default();

        if row.stage_ids != not_available {
            let stage_ids = parse_id_list(&row.stage_ids).map_err(&malformed)?;
            let submission = parse_int(&row.submission_time, "Submission Time")
                .map_err(|e| malformed(format!("job '{}': {}", row.job_id, e)))?;
            draft.stage_ids = Some(stage_ids.into_iter().collect());
            draft.submission_time = Some(submission);
        }

        if row.completion_time != not_available {
            let completion = parse_int(&row.completion_time, "Completion Time")
                .map_err(|e| malformed(format!("job '{}': {}", row.job_id, e)))?;
            draft.completion_time = Some(completion);
        }
    }

    let mut jobs = Vec::with_capacity(drafts.len());
    for (id, draft) in drafts {
        let (Some(stage_ids), Some(submission_time)) = (draft.stage_ids, draft.submission_time)
        else {
            return Err(malformed(format!(
                "job '{}' has no row listing its stages and submission time",
                id
            )));
        };

        if draft.completion_time.is_none() {
            debug!(job = %id, "no completion time available; defaulting to 0");
        }

        jobs.push(JobRecord {
            id,
            submission_time,
            completion_time: draft.completion_time.unwrap_or(0),
            finished: draft.completion_time.is_some(),
            stage_ids,
        });
    }

    Ok(jobs)
}

fn load_stage_relations(fs: &dyn FileSystem, path: &Path) -> Result<Vec<StageRecord>> {
    let rows: Vec<StageRelationRow> = read_rows(fs, path)?;
    let malformed = |msg: String| StagedagError::malformed(path, msg);

    let mut seen = BTreeSet::new();
    let mut stages = Vec::with_capacity(rows.len());

    for row in rows {
        if !seen.insert(row.stage_id.clone()) {
            return Err(malformed(format!("duplicate row for stage '{}'", row.stage_id)));
        }

        let parent_ids = parse_id_list(&row.parent_ids).map_err(&malformed)?;
        let task_count = row.task_count.trim().parse::<u64>().map_err(|_| {
            malformed(format!(
                "stage '{}': column 'Number of Tasks' expects a count, got '{}'",
                row.stage_id, row.task_count
            ))
        })?;

        stages.push(StageRecord {
            id: row.stage_id,
            parent_ids,
            task_count,
        });
    }

    Ok(stages)
}
