#![allow(dead_code)]

//! CSV text for the three input tables, in the column layout the loader
//! expects.

/// Job table with one row per `(id, submission, completion, stage list)`.
///
/// Stage lists are written as given, e.g. `"[1, 2]"` or `"NOVAL"`.
pub fn jobs_csv(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut out = String::from("Job ID,Submission Time,Completion Time,Stage IDs\n");
    for (id, submitted, completed, stages) in rows {
        out.push_str(&format!("{id},{submitted},{completed},\"{stages}\"\n"));
    }
    out
}

/// Stage relation table with one row per `(stage, parent list, task count)`.
pub fn stage_relations_csv(rows: &[(&str, &str, u64)]) -> String {
    let mut out = String::from("Stage ID,Parent IDs,Number of Tasks\n");
    for (id, parents, tasks) in rows {
        out.push_str(&format!("{id},\"{parents}\",{tasks}\n"));
    }
    out
}

/// Stage (task) table with one row per `(stage, executor run time)`.
pub fn tasks_csv(rows: &[(&str, &str)]) -> String {
    let mut out = String::from("Stage ID,Task ID,Executor Run Time\n");
    for (index, (stage, run_time)) in rows.iter().enumerate() {
        out.push_str(&format!("{stage},{index},{run_time}\n"));
    }
    out
}
