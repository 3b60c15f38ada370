// src/dag/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::stages::StageGraph;
use crate::errors::{Result, StagedagError};

/// Fail if the stage graph contains a cycle.
///
/// Edge direction: parent -> child.
pub fn ensure_acyclic(graph: &StageGraph) -> Result<()> {
    let mut dag: DiGraphMap<&str, ()> = DiGraphMap::new();

    for node in graph.nodes() {
        dag.add_node(node.id.as_str());
    }

    for node in graph.nodes() {
        for child in node.children.iter() {
            dag.add_edge(node.id.as_str(), child.as_str(), ());
        }
    }

    match toposort(&dag, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let stage = cycle.node_id();
            let name = graph
                .node(stage)
                .map(|n| n.name.as_str())
                .unwrap_or(stage);
            Err(StagedagError::DagCycle(format!(
                "cycle detected in stage graph involving stage '{}'",
                name
            )))
        }
    }
}
