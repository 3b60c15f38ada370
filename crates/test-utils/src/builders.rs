#![allow(dead_code)]

use stagedag::records::{JobRecord, RecordStore, StageRecord};

/// Builder for `RecordStore` to simplify test setup.
pub struct RecordStoreBuilder {
    jobs: Vec<JobRecord>,
    stages: Vec<StageRecord>,
}

impl RecordStoreBuilder {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            stages: Vec::new(),
        }
    }

    pub fn with_job(mut self, job: JobRecord) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_stage(mut self, stage: StageRecord) -> Self {
        self.stages.push(stage);
        self
    }

    /// Shorthand: a job owning `stages`, each of which gets a parentless,
    /// single-task stage record.
    pub fn with_simple_job(mut self, id: &str, submitted: i64, completed: i64, stages: &[&str]) -> Self {
        self.jobs.push(
            JobBuilder::new(id)
                .submitted(submitted)
                .completed(completed)
                .stages(stages)
                .build(),
        );
        for stage in stages {
            self.stages.push(StageBuilder::new(stage).build());
        }
        self
    }

    pub fn build(self) -> RecordStore {
        RecordStore::from_records(self.jobs, self.stages)
            .expect("Failed to build valid record store from builder")
    }
}

impl Default for RecordStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `JobRecord`.
pub struct JobBuilder {
    job: JobRecord,
}

impl JobBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            job: JobRecord {
                id: id.to_string(),
                submission_time: 0,
                completion_time: 0,
                finished: true,
                stage_ids: Default::default(),
            },
        }
    }

    pub fn submitted(mut self, time: i64) -> Self {
        self.job.submission_time = time;
        self
    }

    pub fn completed(mut self, time: i64) -> Self {
        self.job.completion_time = time;
        self
    }

    /// No completion time known.
    pub fn unfinished(mut self) -> Self {
        self.job.completion_time = 0;
        self.job.finished = false;
        self
    }

    pub fn stages(mut self, stages: &[&str]) -> Self {
        self.job
            .stage_ids
            .extend(stages.iter().map(|s| s.to_string()));
        self
    }

    pub fn build(self) -> JobRecord {
        self.job
    }
}

/// Builder for `StageRecord`.
pub struct StageBuilder {
    stage: StageRecord,
}

impl StageBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            stage: StageRecord {
                id: id.to_string(),
                parent_ids: Vec::new(),
                task_count: 1,
            },
        }
    }

    pub fn parent(mut self, parent: &str) -> Self {
        self.stage.parent_ids.push(parent.to_string());
        self
    }

    pub fn tasks(mut self, count: u64) -> Self {
        self.stage.task_count = count;
        self
    }

    pub fn build(self) -> StageRecord {
        self.stage
    }
}
