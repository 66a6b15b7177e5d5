use anyhow::{bail, Context, Result};
use columnar_layout::{ColumnarOptions, PlacementHint};
use petgraph::graph::{Graph, NodeIndex};
use ron::extensions::Extensions;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Graph read from disk, nodes in host order
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
    #[serde(default)]
    pub options: Option<ColumnarOptions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub placement: Option<PlacementHint>,
}

fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

impl Document {
    pub fn parse(source: &str) -> Result<Self> {
        ron_options()
            .from_str(source)
            .context("Failed to parse graph document")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Invalid document {}", path.display()))
    }

    /// Build the host graph, edges only link nodes and don't affect placement
    pub fn to_graph(&self) -> Result<Graph<NodeSpec, ()>> {
        let mut graph = Graph::with_capacity(self.nodes.len(), self.edges.len());
        let mut ids: HashMap<&str, NodeIndex> = HashMap::new();

        for node in &self.nodes {
            let index = graph.add_node(node.clone());
            if ids.insert(node.id.as_str(), index).is_some() {
                bail!("Node {:?} is declared more than once", node.id);
            }
        }

        for (from, to) in &self.edges {
            let (Some(&from_index), Some(&to_index)) =
                (ids.get(from.as_str()), ids.get(to.as_str()))
            else {
                bail!("Edge {from:?} -> {to:?} references an unknown node");
            };
            graph.add_edge(from_index, to_index, ());
        }

        Ok(graph)
    }
}

/// Read standalone layout options
pub fn load_options(path: &Path) -> Result<ColumnarOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    ron_options()
        .from_str(&source)
        .with_context(|| format!("Invalid options {}", path.display()))
}
