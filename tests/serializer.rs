use stagedag_test_utils::builders::{JobBuilder, RecordStoreBuilder, StageBuilder};
use stagedag_test_utils::init_tracing;

use std::collections::BTreeSet;
use std::error::Error;

use stagedag::config::OutputSection;
use stagedag::dag::{self, StageGraph};
use stagedag::output::GraphSerializer;
use stagedag::records::RecordStore;

type TestResult = Result<(), Box<dyn Error>>;

fn chain() -> RecordStore {
    RecordStoreBuilder::new()
        .with_job(JobBuilder::new("0").submitted(0).completed(10).stages(&["1"]).build())
        .with_job(JobBuilder::new("1").submitted(20).completed(30).stages(&["2"]).build())
        .with_job(JobBuilder::new("2").submitted(40).completed(50).stages(&["3"]).build())
        .with_stage(StageBuilder::new("1").tasks(4).build())
        .with_stage(StageBuilder::new("2").tasks(2).build())
        .with_stage(StageBuilder::new("3").tasks(1).build())
        .build()
}

fn serializer() -> GraphSerializer {
    GraphSerializer::new("out", &OutputSection::default())
}

/// Every `name="..."` and every quoted entry of a `pre={...}`/`post={...}` list.
fn declared_and_referenced(text: &str) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut declared = BTreeSet::new();
    for (idx, _) in text.match_indices("name=\"") {
        let rest = &text[idx + "name=\"".len()..];
        let end = rest.find('"').unwrap();
        declared.insert(rest[..end].to_string());
    }

    let mut referenced = BTreeSet::new();
    for marker in ["pre={", "post={"] {
        for (idx, _) in text.match_indices(marker) {
            let rest = &text[idx + marker.len()..];
            let end = rest.find('}').unwrap();
            for name in rest[..end].split(',').filter(|s| !s.is_empty()) {
                referenced.insert(name.trim_matches('"').to_string());
            }
        }
    }

    (declared, referenced)
}

#[test]
fn chain_renders_in_simulator_grammar() -> TestResult {
    init_tracing();

    let built = dag::build(&chain())?;
    let text = serializer().render(&built.stages);

    let expected = concat!(
        "{",
        r#"{ name="J0S1", tasks="4", distr={type="replay", params={samples=solver.fileToArray("out/J0S1.txt")}}, pre={}, post={"J1S2"}},"#,
        r#"{ name="J1S2", tasks="2", distr={type="replay", params={samples=solver.fileToArray("out/J1S2.txt")}}, pre={"J0S1"}, post={"J2S3"}},"#,
        r#"{ name="J2S3", tasks="1", distr={type="replay", params={samples=solver.fileToArray("out/J2S3.txt")}}, pre={"J1S2"}, post={}}"#,
        "}",
    );
    assert_eq!(text, expected);

    Ok(())
}

#[test]
fn lists_are_joined_with_comma_and_quotes() -> TestResult {
    init_tracing();

    let store = RecordStoreBuilder::new()
        .with_job(JobBuilder::new("0").completed(10).stages(&["1", "2", "3"]).build())
        .with_stage(StageBuilder::new("1").build())
        .with_stage(StageBuilder::new("2").build())
        .with_stage(StageBuilder::new("3").parent("2").parent("1").build())
        .build();
    let built = dag::build(&store)?;
    let text = serializer().render(&built.stages);

    assert!(text.contains(r#"name="J0S3""#));
    assert!(text.contains(r#"pre={"J0S1","J0S2"}, post={}}"#));

    Ok(())
}

#[test]
fn empty_graph_renders_empty_braces() {
    init_tracing();

    let text = serializer().render(&StageGraph::default());
    assert_eq!(text, "{}");
}

#[test]
fn custom_sample_loader_is_used() -> TestResult {
    init_tracing();

    let output = OutputSection {
        sample_loader: "sim.load".to_string(),
        write_samples: true,
    };
    let built = dag::build(&chain())?;
    let text = GraphSerializer::new("/data/run", &output).render(&built.stages);

    assert!(text.contains(r#"samples=sim.load("/data/run/J0S1.txt")"#));

    Ok(())
}

#[test]
fn nodes_are_ordered_by_qualified_name() -> TestResult {
    init_tracing();

    // Stage ids sort differently from the qualified names.
    let store = RecordStoreBuilder::new()
        .with_simple_job("9", 0, 10, &["1"])
        .with_simple_job("10", 20, 30, &["2"])
        .build();
    let built = dag::build(&store)?;
    let text = serializer().render(&built.stages);

    let first = text.find(r#"name="J10S2""#).unwrap();
    let second = text.find(r#"name="J9S1""#).unwrap();
    assert!(first < second);

    Ok(())
}

#[test]
fn serialization_is_stable() -> TestResult {
    init_tracing();

    let built = dag::build(&chain())?;
    let serializer = serializer();
    assert_eq!(serializer.render(&built.stages), serializer.render(&built.stages));

    // Same records, different insertion order.
    let reordered = RecordStoreBuilder::new()
        .with_stage(StageBuilder::new("3").tasks(1).build())
        .with_job(JobBuilder::new("2").submitted(40).completed(50).stages(&["3"]).build())
        .with_stage(StageBuilder::new("2").tasks(2).build())
        .with_job(JobBuilder::new("1").submitted(20).completed(30).stages(&["2"]).build())
        .with_stage(StageBuilder::new("1").tasks(4).build())
        .with_job(JobBuilder::new("0").submitted(0).completed(10).stages(&["1"]).build())
        .build();
    let rebuilt = dag::build(&reordered)?;
    assert_eq!(serializer.render(&rebuilt.stages), serializer.render(&built.stages));

    Ok(())
}

#[test]
fn every_referenced_name_is_emitted() -> TestResult {
    init_tracing();

    let store = RecordStoreBuilder::new()
        .with_job(JobBuilder::new("A").submitted(0).completed(10).stages(&["1", "2", "3"]).build())
        .with_job(JobBuilder::new("B").submitted(20).completed(30).stages(&["4", "5"]).build())
        .with_job(JobBuilder::new("C").submitted(22).completed(35).stages(&["6"]).build())
        .with_stage(StageBuilder::new("1").parent("0").build())
        .with_stage(StageBuilder::new("2").parent("1").build())
        .with_stage(StageBuilder::new("3").parent("1").build())
        .with_stage(StageBuilder::new("4").build())
        .with_stage(StageBuilder::new("5").parent("4").parent("77").build())
        .with_stage(StageBuilder::new("6").build())
        .build();
    let built = dag::build(&store)?;
    let text = serializer().render(&built.stages);

    let (declared, referenced) = declared_and_referenced(&text);
    assert_eq!(declared.len(), 6);
    assert!(!referenced.is_empty());
    assert!(
        referenced.is_subset(&declared),
        "dangling references: {:?}",
        referenced.difference(&declared).collect::<Vec<_>>()
    );

    Ok(())
}
