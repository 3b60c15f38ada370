use stagedag_test_utils::builders::{JobBuilder, RecordStoreBuilder};
use stagedag_test_utils::init_tracing;

use stagedag::dag::{FollowerIndex, JobPrecedenceBuilder};
use stagedag::output::idle_gaps;
use stagedag::records::RecordStore;

fn chain() -> RecordStore {
    RecordStoreBuilder::new()
        .with_simple_job("A", 0, 10, &["1"])
        .with_simple_job("B", 20, 30, &["2"])
        .with_simple_job("C", 40, 50, &["3"])
        .build()
}

fn followers_of(index: &FollowerIndex, job: &str) -> Vec<String> {
    index.followers_of(job).cloned().collect()
}

#[test]
fn candidates_are_jobs_finishing_before_submission() {
    init_tracing();

    let store = chain();
    let snapshot = JobPrecedenceBuilder::new(store.jobs()).candidates();

    assert!(snapshot.candidates_of("A").is_empty());
    assert_eq!(snapshot.candidates_of("B"), ["A".to_string()]);
    assert_eq!(snapshot.candidates_of("C"), ["A".to_string(), "B".to_string()]);

    assert!(snapshot.is_candidate("A", "C"));
    assert!(!snapshot.is_candidate("C", "A"));
    assert!(!snapshot.is_candidate("A", "A"));
}

#[test]
fn chain_keeps_only_direct_predecessors() {
    init_tracing();

    let store = chain();
    let precedence = JobPrecedenceBuilder::new(store.jobs()).build();

    assert!(precedence.parents_of("A").is_empty());
    assert_eq!(precedence.parents_of("B"), ["A".to_string()]);
    // A is reachable through B.
    assert_eq!(precedence.parents_of("C"), ["B".to_string()]);

    let followers = FollowerIndex::from_precedence(&precedence);
    assert_eq!(followers_of(&followers, "A"), vec!["B"]);
    assert_eq!(followers_of(&followers, "B"), vec!["C"]);
    assert!(followers_of(&followers, "C").is_empty());
}

#[test]
fn overlapping_jobs_are_both_roots() {
    init_tracing();

    let store = RecordStoreBuilder::new()
        .with_simple_job("X", 0, 30, &["1"])
        .with_simple_job("Y", 10, 40, &["2"])
        .build();
    let builder = JobPrecedenceBuilder::new(store.jobs());

    let snapshot = builder.candidates();
    assert!(snapshot.candidates_of("X").is_empty());
    assert!(snapshot.candidates_of("Y").is_empty());

    let precedence = builder.build();
    let roots: Vec<&String> = precedence.roots().collect();
    assert_eq!(roots, vec!["X", "Y"]);

    let followers = FollowerIndex::from_precedence(&precedence);
    assert!(followers_of(&followers, "X").is_empty());
    assert!(followers_of(&followers, "Y").is_empty());
}

#[test]
fn parallel_predecessors_are_both_kept() {
    init_tracing();

    // B and C run side by side after A; D starts after both.
    let store = RecordStoreBuilder::new()
        .with_simple_job("A", 0, 10, &["1"])
        .with_simple_job("B", 20, 30, &["2"])
        .with_simple_job("C", 22, 32, &["3"])
        .with_simple_job("D", 40, 50, &["4"])
        .build();
    let precedence = JobPrecedenceBuilder::new(store.jobs()).build();

    // Closest first: C (gap 8), then B (gap 10); A is implied via C.
    assert_eq!(precedence.parents_of("D"), ["C".to_string(), "B".to_string()]);
    assert_eq!(precedence.parents_of("B"), ["A".to_string()]);
    assert_eq!(precedence.parents_of("C"), ["A".to_string()]);

    let followers = FollowerIndex::from_precedence(&precedence);
    assert_eq!(followers_of(&followers, "A"), vec!["B", "C"]);
    assert_eq!(followers_of(&followers, "B"), vec!["D"]);
    assert_eq!(followers_of(&followers, "C"), vec!["D"]);
}

#[test]
fn equal_gaps_keep_job_id_order() {
    init_tracing();

    let store = RecordStoreBuilder::new()
        .with_simple_job("A", 0, 10, &["1"])
        .with_simple_job("B", 0, 10, &["2"])
        .with_simple_job("C", 20, 30, &["3"])
        .build();
    let precedence = JobPrecedenceBuilder::new(store.jobs()).build();

    assert_eq!(precedence.parents_of("C"), ["A".to_string(), "B".to_string()]);
}

#[test]
fn reduction_reads_unreduced_candidates_of_peers() {
    init_tracing();

    // D's candidates are C, B, A (closest first). C's reduced parents are
    // [B] only, but A is still a raw candidate of C, so A is dropped for D.
    let store = RecordStoreBuilder::new()
        .with_simple_job("A", 0, 10, &["1"])
        .with_simple_job("B", 20, 30, &["2"])
        .with_simple_job("C", 40, 50, &["3"])
        .with_simple_job("D", 60, 70, &["4"])
        .build();
    let builder = JobPrecedenceBuilder::new(store.jobs());
    let snapshot = builder.candidates();
    let precedence = builder.reduce(&snapshot);

    assert_eq!(precedence.parents_of("C"), ["B".to_string()]);
    assert_eq!(precedence.parents_of("D"), ["C".to_string()]);

    // Reducing again from the same snapshot gives the same answer.
    assert_eq!(builder.reduce(&snapshot), precedence);
}

#[test]
fn unknown_jobs_have_no_relations() {
    init_tracing();

    let store = chain();
    let precedence = JobPrecedenceBuilder::new(store.jobs()).build();
    let followers = FollowerIndex::from_precedence(&precedence);

    assert!(precedence.parents_of("nope").is_empty());
    assert!(followers_of(&followers, "nope").is_empty());
}

#[test]
fn unfinished_job_is_never_a_candidate_parent() {
    init_tracing();

    // U has no completion time; its default of 0 would otherwise put it
    // before every later job, including A, which finished before U started.
    let store = RecordStoreBuilder::new()
        .with_simple_job("A", 0, 10, &["1"])
        .with_job(JobBuilder::new("U").submitted(20).unfinished().stages(&["2"]).build())
        .with_simple_job("B", 30, 40, &["3"])
        .build();
    let builder = JobPrecedenceBuilder::new(store.jobs());
    let snapshot = builder.candidates();

    assert!(!snapshot.is_candidate("U", "A"));
    assert!(!snapshot.is_candidate("U", "B"));
    assert_eq!(snapshot.candidates_of("U"), ["A".to_string()]);

    let precedence = builder.reduce(&snapshot);
    assert_eq!(precedence.parents_of("U"), ["A".to_string()]);
    assert_eq!(precedence.parents_of("B"), ["A".to_string()]);

    let followers = FollowerIndex::from_precedence(&precedence);
    assert_eq!(followers_of(&followers, "A"), vec!["B", "U"]);
    assert!(followers_of(&followers, "U").is_empty());
}

#[test]
fn idle_gaps_skip_unfinished_jobs_and_extreme_times() {
    init_tracing();

    let store = RecordStoreBuilder::new()
        .with_simple_job("A", i64::MIN, i64::MIN, &["1"])
        .with_job(JobBuilder::new("U").submitted(20).unfinished().stages(&["2"]).build())
        .with_simple_job("B", i64::MAX, i64::MAX, &["3"])
        .build();

    let gaps = idle_gaps(store.jobs());

    // A -> U saturates instead of overflowing; U -> B has no completion.
    assert_eq!(gaps.len(), 1);
    assert_eq!((gaps[0].previous.as_str(), gaps[0].next.as_str()), ("A", "U"));
    assert_eq!(gaps[0].span, i64::MAX);
}

#[test]
fn extreme_timestamps_do_not_overflow_the_reduction() {
    init_tracing();

    let store = RecordStoreBuilder::new()
        .with_simple_job("A", i64::MIN, i64::MIN, &["1"])
        .with_simple_job("B", 0, 0, &["2"])
        .with_simple_job("C", 10, i64::MAX, &["3"])
        .build();
    let precedence = JobPrecedenceBuilder::new(store.jobs()).build();

    assert_eq!(precedence.parents_of("C"), ["B".to_string()]);
    assert_eq!(precedence.parents_of("B"), ["A".to_string()]);
}
