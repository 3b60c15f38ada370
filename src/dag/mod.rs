// src/dag/mod.rs

//! Precedence graph construction.
//!
//! - [`precedence`] infers the minimal job-level parent relation from
//!   timestamps.
//! - [`followers`] inverts it.
//! - [`stages`] builds the stage DAG from explicit metadata and splices in
//!   the cross-job edges.
//! - [`validate`] checks the result is acyclic.
//!
//! Each step reads only the immutable output of the step before it.

pub mod followers;
pub mod precedence;
pub mod stages;
pub mod validate;

use tracing::info;

pub use followers::FollowerIndex;
pub use precedence::{CandidateSnapshot, JobPrecedence, JobPrecedenceBuilder};
pub use stages::{JobBoundary, StageGraph, StageNode};
pub use validate::ensure_acyclic;

use crate::errors::Result;
use crate::records::RecordStore;

/// Everything the pipeline derives from a [`RecordStore`].
#[derive(Debug, Clone)]
pub struct BuiltDag {
    pub precedence: JobPrecedence,
    pub followers: FollowerIndex,
    pub stages: StageGraph,
}

/// Run the whole construction pipeline over `store`.
pub fn build(store: &RecordStore) -> Result<BuiltDag> {
    let precedence = JobPrecedenceBuilder::new(store.jobs()).build();
    let followers = FollowerIndex::from_precedence(&precedence);
    let stages = StageGraph::explicit(store).splice(&followers);
    ensure_acyclic(&stages)?;

    info!(
        jobs = store.jobs().len(),
        roots = precedence.roots().count(),
        stages = stages.len(),
        "stage graph built"
    );

    Ok(BuiltDag {
        precedence,
        followers,
        stages,
    })
}
