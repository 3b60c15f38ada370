// src/records/mod.rs

//! Typed job and stage records loaded from the input tables.
//!
//! - [`model`] holds the record types and the raw CSV row shapes.
//! - [`parse`] splits bracketed id lists such as `[3, 4, 5]`.
//! - [`store`] loads and merges rows into a [`RecordStore`].
//! - [`samples`] reads the per-task execution times of the stage table.

pub mod model;
pub mod parse;
pub mod samples;
pub mod store;

pub use model::{JobRecord, StageRecord};
pub use samples::{load_task_samples, TaskSamples};
pub use store::RecordStore;
