// src/dag/followers.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::dag::precedence::JobPrecedence;
use crate::types::JobId;

/// Inverse of the reduced parent relation:
/// `followers(x) = { y : x ∈ parents(y) }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowerIndex {
    followers: BTreeMap<JobId, BTreeSet<JobId>>,
}

impl FollowerIndex {
    /// Every job of `precedence` gets an entry, possibly empty.
    pub fn from_precedence(precedence: &JobPrecedence) -> Self {
        let mut followers: BTreeMap<JobId, BTreeSet<JobId>> = precedence
            .iter()
            .map(|(job, _)| (job.clone(), BTreeSet::new()))
            .collect();

        for (job, parents) in precedence.iter() {
            for parent in parents {
                followers
                    .entry(parent.clone())
                    .or_default()
                    .insert(job.clone());
            }
        }

        Self { followers }
    }

    pub fn followers_of<'a>(&'a self, job: &str) -> impl Iterator<Item = &'a JobId> + use<'a> {
        self.followers.get(job).into_iter().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JobId, &BTreeSet<JobId>)> {
        self.followers.iter()
    }
}
