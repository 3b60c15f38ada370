// src/output/report.rs

//! Human-readable `--dry-run` output.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::dag::BuiltDag;
use crate::records::{JobRecord, RecordStore};
use crate::types::JobId;

/// Idle time between two jobs adjacent in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdleGap {
    pub previous: JobId,
    pub next: JobId,
    /// `next.submission_time - previous.completion_time`, always positive.
    pub span: i64,
}

/// Gaps between consecutive jobs ordered by submission time (ties by id).
/// Overlapping or touching pairs, and pairs whose earlier job never
/// finished, are omitted.
pub fn idle_gaps(jobs: &BTreeMap<JobId, JobRecord>) -> Vec<IdleGap> {
    let mut ordered: Vec<&JobRecord> = jobs.values().collect();
    ordered.sort_by_key(|job| job.submission_time);

    ordered
        .windows(2)
        .filter(|pair| pair[0].finished)
        .filter_map(|pair| {
            let span = pair[1].submission_time.saturating_sub(pair[0].completion_time);
            (span > 0).then(|| IdleGap {
                previous: pair[0].id.clone(),
                next: pair[1].id.clone(),
                span,
            })
        })
        .collect()
}

/// Summary of the job hierarchy, stage boundaries and idle gaps.
pub fn render_report(store: &RecordStore, dag: &BuiltDag) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, store, dag);
    out
}

fn write_report(out: &mut String, store: &RecordStore, dag: &BuiltDag) -> fmt::Result {
    writeln!(out, "stagedag dry-run")?;
    writeln!(out, "  jobs = {}", store.jobs().len())?;
    writeln!(out, "  stages = {}", dag.stages.len())?;
    writeln!(out)?;

    writeln!(out, "jobs ({}):", store.jobs().len())?;
    for (id, job) in store.jobs().iter() {
        writeln!(out, "  - {id}")?;
        if job.finished {
            writeln!(
                out,
                "      submitted: {}, completed: {}",
                job.submission_time, job.completion_time
            )?;
        } else {
            writeln!(out, "      submitted: {}, unfinished", job.submission_time)?;
        }
        writeln!(out, "      stages: {:?}", job.stage_ids)?;

        let parents = dag.precedence.parents_of(id);
        if !parents.is_empty() {
            writeln!(out, "      parents: {:?}", parents)?;
        }
        let followers: Vec<&JobId> = dag.followers.followers_of(id).collect();
        if !followers.is_empty() {
            writeln!(out, "      followers: {:?}", followers)?;
        }
        if let Some(boundary) = dag.stages.boundary(id) {
            writeln!(out, "      first stages: {:?}", boundary.first)?;
            writeln!(out, "      last stages: {:?}", boundary.last)?;
        }
    }

    let gaps = idle_gaps(store.jobs());
    writeln!(out)?;
    writeln!(out, "idle gaps ({}):", gaps.len())?;
    for gap in gaps {
        writeln!(out, "  {} -> {}: {}", gap.previous, gap.next, gap.span)?;
    }

    Ok(())
}
