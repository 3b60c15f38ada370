// src/dag/stages.rs

//! Stage-level dependency graph.
//!
//! Edges come from two places:
//! - explicit `Parent IDs` metadata, filtered to the loaded stage set;
//! - the cross-job splice: the last stages of a job become parents of the
//!   first stages of each of its followers.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::dag::followers::FollowerIndex;
use crate::records::RecordStore;
use crate::types::{qualified_name, JobId, StageId};

/// A stage with its resolved neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageNode {
    pub id: StageId,
    pub job: JobId,
    /// `J<job>S<stage>`.
    pub name: String,
    pub task_count: u64,
    pub parents: BTreeSet<StageId>,
    pub children: BTreeSet<StageId>,
}

/// Entry and exit stages of one job, computed within the job's own stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobBoundary {
    /// Stages with no parent inside the job.
    pub first: BTreeSet<StageId>,
    /// Stages with no child inside the job.
    pub last: BTreeSet<StageId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageGraph {
    nodes: BTreeMap<StageId, StageNode>,
    boundaries: BTreeMap<JobId, JobBoundary>,
}

impl StageGraph {
    /// Graph of the explicit stage relations only, with job boundaries.
    pub fn explicit(store: &RecordStore) -> Self {
        let mut nodes: BTreeMap<StageId, StageNode> = BTreeMap::new();

        // First pass: nodes with their filtered parent lists.
        for (id, stage) in store.stages().iter() {
            let Some(job) = store.owner_of(id) else {
                continue;
            };

            let parents: BTreeSet<StageId> = stage
                .parent_ids
                .iter()
                .filter(|parent| store.contains_stage(parent))
                .cloned()
                .collect();

            if parents.len() < stage.parent_ids.len() {
                debug!(stage = %id, listed = ?stage.parent_ids, kept = ?parents, "filtered unknown parent stages");
            }

            nodes.insert(
                id.clone(),
                StageNode {
                    id: id.clone(),
                    job: job.clone(),
                    name: qualified_name(job, id),
                    task_count: stage.task_count,
                    parents,
                    children: BTreeSet::new(),
                },
            );
        }

        // Second pass: children from parents.
        let edges: Vec<(StageId, StageId)> = nodes
            .values()
            .flat_map(|node| {
                node.parents
                    .iter()
                    .map(move |parent| (parent.clone(), node.id.clone()))
            })
            .collect();
        for (parent, child) in edges {
            if let Some(node) = nodes.get_mut(&parent) {
                node.children.insert(child);
            }
        }

        let mut boundaries = BTreeMap::new();
        for (job_id, job) in store.jobs().iter() {
            let own: BTreeSet<&StageId> = store.stages_of(job).map(|s| &s.id).collect();
            let mut boundary = JobBoundary::default();

            for stage in own.iter() {
                let Some(node) = nodes.get(*stage) else {
                    continue;
                };
                if !node.parents.iter().any(|p| own.contains(p)) {
                    boundary.first.insert((*stage).clone());
                }
                if !node.children.iter().any(|c| own.contains(c)) {
                    boundary.last.insert((*stage).clone());
                }
            }

            boundaries.insert(job_id.clone(), boundary);
        }

        Self { nodes, boundaries }
    }

    /// Add the cross-job edges implied by `followers`.
    ///
    /// For every job `x`, follower `y`, `s ∈ last(x)` and `t ∈ first(y)`:
    /// `s` becomes a parent of `t`. Boundaries are those of the explicit
    /// graph and are not recomputed.
    pub fn splice(mut self, followers: &FollowerIndex) -> Self {
        let mut edges: Vec<(StageId, StageId)> = Vec::new();

        for (job, boundary) in self.boundaries.iter() {
            for next in followers.followers_of(job) {
                let Some(next_boundary) = self.boundaries.get(next) else {
                    continue;
                };
                for last in boundary.last.iter() {
                    for first in next_boundary.first.iter() {
                        edges.push((last.clone(), first.clone()));
                    }
                }
            }
        }

        debug!(edges = edges.len(), "splicing cross-job stage edges");

        for (parent, child) in edges {
            if let Some(node) = self.nodes.get_mut(&child) {
                node.parents.insert(parent.clone());
            }
            if let Some(node) = self.nodes.get_mut(&parent) {
                node.children.insert(child);
            }
        }

        self
    }

    pub fn node(&self, id: &str) -> Option<&StageNode> {
        self.nodes.get(id)
    }

    /// All nodes in stage-id order.
    pub fn nodes(&self) -> impl Iterator<Item = &StageNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn boundary(&self, job: &str) -> Option<&JobBoundary> {
        self.boundaries.get(job)
    }

    pub fn first_stages<'a>(&'a self, job: &str) -> impl Iterator<Item = &'a StageId> + use<'a> {
        self.boundaries.get(job).into_iter().flat_map(|b| b.first.iter())
    }

    pub fn last_stages<'a>(&'a self, job: &str) -> impl Iterator<Item = &'a StageId> + use<'a> {
        self.boundaries.get(job).into_iter().flat_map(|b| b.last.iter())
    }
}
