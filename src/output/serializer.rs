// src/output/serializer.rs

use std::path::PathBuf;

use crate::config::OutputSection;
use crate::dag::{StageGraph, StageNode};

/// Renders a [`StageGraph`] as the simulator's stage list:
///
/// ```text
/// { name="J0S1", tasks="4", distr={type="replay", params={samples=solver.fileToArray("out/J0S1.txt")}}, pre={}, post={"J1S2"}},...}
/// ```
///
/// Nodes and their `pre`/`post` lists are ordered by qualified name, so the
/// same graph always renders to the same bytes.
#[derive(Debug, Clone)]
pub struct GraphSerializer {
    samples_dir: PathBuf,
    sample_loader: String,
}

impl GraphSerializer {
    pub fn new(samples_dir: impl Into<PathBuf>, output: &OutputSection) -> Self {
        Self {
            samples_dir: samples_dir.into(),
            sample_loader: output.sample_loader.clone(),
        }
    }

    /// Path of the samples file the simulator reads for `name`.
    pub fn samples_path(&self, name: &str) -> PathBuf {
        self.samples_dir.join(format!("{name}.txt"))
    }

    pub fn render(&self, graph: &StageGraph) -> String {
        let mut nodes: Vec<&StageNode> = graph.nodes().collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));

        let records: Vec<String> = nodes
            .into_iter()
            .map(|node| self.render_node(graph, node))
            .collect();

        format!("{{{}}}", records.join(","))
    }

    fn render_node(&self, graph: &StageGraph, node: &StageNode) -> String {
        let pre = quoted_names(graph, node.parents.iter());
        let post = quoted_names(graph, node.children.iter());

        format!(
            "{{ name=\"{name}\", tasks=\"{tasks}\", distr={{type=\"replay\", params={{samples={loader}(\"{path}\")}}}}, pre={{{pre}}}, post={{{post}}}}}",
            name = node.name,
            tasks = node.task_count,
            loader = self.sample_loader,
            path = self.samples_path(&node.name).display(),
        )
    }
}

fn quoted_names<'a>(graph: &StageGraph, ids: impl Iterator<Item = &'a String>) -> String {
    let mut names: Vec<&str> = ids
        .filter_map(|id| graph.node(id))
        .map(|n| n.name.as_str())
        .collect();
    names.sort_unstable();
    names.dedup();

    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(",")
}
