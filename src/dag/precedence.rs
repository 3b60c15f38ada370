// src/dag/precedence.rs

//! Job-level precedence inferred from timestamps alone.
//!
//! Two phases:
//! 1. [`CandidateSnapshot`]: job `i` is a candidate parent of job `j` iff
//!    `i` finished, `completion(i) < submission(j)` and `i != j`.
//! 2. [`JobPrecedenceBuilder::build`]: every job's candidates are reduced to
//!    the direct predecessors, reading only the immutable snapshot.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::records::JobRecord;
use crate::types::JobId;

/// Raw, unreduced candidate parents of every job.
///
/// Candidate lists follow job-id order; this is the tie-break order used
/// during reduction.
#[derive(Debug, Clone, Default)]
pub struct CandidateSnapshot {
    ordered: BTreeMap<JobId, Vec<JobId>>,
    sets: BTreeMap<JobId, BTreeSet<JobId>>,
}

impl CandidateSnapshot {
    pub fn from_jobs(jobs: &BTreeMap<JobId, JobRecord>) -> Self {
        let mut ordered = BTreeMap::new();
        let mut sets = BTreeMap::new();

        for (id, job) in jobs.iter() {
            let candidates: Vec<JobId> = jobs
                .values()
                .filter(|other| {
                    other.finished
                        && other.id != *id
                        && other.completion_time < job.submission_time
                })
                .map(|other| other.id.clone())
                .collect();

            sets.insert(id.clone(), candidates.iter().cloned().collect());
            ordered.insert(id.clone(), candidates);
        }

        Self { ordered, sets }
    }

    /// Candidate parents of `job`, in job-id order.
    pub fn candidates_of(&self, job: &str) -> &[JobId] {
        self.ordered.get(job).map(|c| c.as_slice()).unwrap_or(&[])
    }

    pub fn is_candidate(&self, parent: &str, child: &str) -> bool {
        self.sets
            .get(child)
            .is_some_and(|set| set.contains(parent))
    }
}

/// Reduced job-level parent relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPrecedence {
    parents: BTreeMap<JobId, Vec<JobId>>,
}

impl JobPrecedence {
    /// Direct parents of `job`, closest-finishing first.
    pub fn parents_of(&self, job: &str) -> &[JobId] {
        self.parents.get(job).map(|p| p.as_slice()).unwrap_or(&[])
    }

    /// Every job with its parents, in job-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&JobId, &[JobId])> {
        self.parents.iter().map(|(job, parents)| (job, parents.as_slice()))
    }

    /// Jobs without parents.
    pub fn roots(&self) -> impl Iterator<Item = &JobId> {
        self.parents
            .iter()
            .filter(|(_, parents)| parents.is_empty())
            .map(|(job, _)| job)
    }
}

/// Infers [`JobPrecedence`] from submission and completion times.
#[derive(Debug)]
pub struct JobPrecedenceBuilder<'a> {
    jobs: &'a BTreeMap<JobId, JobRecord>,
}

impl<'a> JobPrecedenceBuilder<'a> {
    pub fn new(jobs: &'a BTreeMap<JobId, JobRecord>) -> Self {
        Self { jobs }
    }

    /// Phase one: the unreduced candidate relation.
    pub fn candidates(&self) -> CandidateSnapshot {
        CandidateSnapshot::from_jobs(self.jobs)
    }

    /// Both phases.
    pub fn build(&self) -> JobPrecedence {
        let snapshot = self.candidates();
        self.reduce(&snapshot)
    }

    /// Phase two: reduce every job's candidates against `snapshot`.
    ///
    /// Candidates are visited closest-finishing first. The closest one is
    /// always kept; a later one is dropped when it is itself a candidate of a
    /// parent already kept, since a path through that parent exists.
    pub fn reduce(&self, snapshot: &CandidateSnapshot) -> JobPrecedence {
        let mut parents = BTreeMap::new();

        for (id, job) in self.jobs.iter() {
            let mut ordered: Vec<&JobId> = snapshot.candidates_of(id).iter().collect();
            // Stable: equal gaps keep job-id order.
            ordered.sort_by_key(|candidate| {
                job.submission_time.saturating_sub(self.completion_of(candidate))
            });

            let mut kept: Vec<JobId> = Vec::new();
            for candidate in ordered {
                let implied = kept
                    .iter()
                    .find(|parent| snapshot.is_candidate(candidate, parent));

                match implied {
                    Some(via) => {
                        debug!(job = %id, dropped = %candidate, via = %via, "transitively implied parent");
                    }
                    None => kept.push(candidate.clone()),
                }
            }

            debug!(job = %id, parents = ?kept, "reduced job parents");
            parents.insert(id.clone(), kept);
        }

        JobPrecedence { parents }
    }

    fn completion_of(&self, job: &str) -> i64 {
        self.jobs.get(job).map(|j| j.completion_time).unwrap_or(0)
    }
}
