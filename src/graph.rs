//! Insertion-ordered communication graph.
//!
//! Aggregates src->dst observations into one record per node, in the shape
//! D3.js force-directed layouts consume: `{name, size, imports}` where
//! `imports` lists the distinct destinations the node has sent to and `size`
//! is their count. Output order is first-seen order across the input.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::address::NodeName;

/// One node of the output graph. Invariant: `size == imports.len()`.
/// A name seen only as a destination has `size = 0` and empty `imports`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: NodeName,
    pub size: usize,
    pub imports: Vec<NodeName>,
}

impl GraphNode {
    fn new(name: NodeName) -> Self {
        Self {
            name,
            size: 0,
            imports: Vec::new(),
        }
    }
}

/// Index-stable node store: nodes live in a `Vec` in first-seen order, with
/// a name->index map for O(1) lookup. A node first seen as a destination
/// keeps its position if it later shows up as a source.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    index: HashMap<NodeName, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one src->dst observation.
    ///
    /// Ensures both endpoints exist in the graph, appends `dst` to `src`'s
    /// imports if not already present, and keeps `size` in step with the
    /// import count. Duplicate (src, dst) pairs are no-ops.
    pub fn record(&mut self, src: NodeName, dst: NodeName) {
        let src_idx = self.ensure_node(src);

        let src_node = &mut self.nodes[src_idx];
        if !src_node.imports.contains(&dst) {
            src_node.imports.push(dst.clone());
            src_node.size += 1;
        }

        // Pure sinks still get an entry in the output
        self.ensure_node(dst);
    }

    fn ensure_node(&mut self, name: NodeName) -> usize {
        if let Some(&idx) = self.index.get(&name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(name.clone(), idx);
        self.nodes.push(GraphNode::new(name));
        idx
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consume the graph, yielding nodes in first-seen order.
    pub fn into_nodes(self) -> Vec<GraphNode> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> NodeName {
        s.to_string()
    }

    #[test]
    fn test_record_creates_source_and_sink() {
        let mut graph = Graph::new();
        graph.record(name("mgen.10-0-0-1"), name("mgen.10-0-0-2"));

        let nodes = graph.into_nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].name, "mgen.10-0-0-1");
        assert_eq!(nodes[0].size, 1);
        assert_eq!(nodes[0].imports, vec!["mgen.10-0-0-2"]);
        assert_eq!(nodes[1].name, "mgen.10-0-0-2");
        assert_eq!(nodes[1].size, 0);
        assert!(nodes[1].imports.is_empty());
    }

    #[test]
    fn test_duplicate_pair_not_counted_twice() {
        let mut graph = Graph::new();
        graph.record(name("a"), name("b"));
        graph.record(name("a"), name("b"));

        let nodes = graph.into_nodes();
        assert_eq!(nodes[0].size, 1);
        assert_eq!(nodes[0].imports, vec!["b"]);
    }

    #[test]
    fn test_destination_promoted_to_source_keeps_position() {
        let mut graph = Graph::new();
        graph.record(name("a"), name("b"));
        graph.record(name("b"), name("c"));

        let nodes = graph.into_nodes();
        let order: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(nodes[1].size, 1);
        assert_eq!(nodes[1].imports, vec!["c"]);
    }

    #[test]
    fn test_imports_preserve_first_seen_order() {
        let mut graph = Graph::new();
        graph.record(name("a"), name("c"));
        graph.record(name("a"), name("b"));
        graph.record(name("a"), name("c"));

        let nodes = graph.into_nodes();
        assert_eq!(nodes[0].imports, vec!["c", "b"]);
    }

    #[test]
    fn test_size_matches_import_count() {
        let mut graph = Graph::new();
        graph.record(name("a"), name("b"));
        graph.record(name("a"), name("c"));
        graph.record(name("b"), name("a"));
        graph.record(name("a"), name("b"));

        for node in graph.into_nodes() {
            assert_eq!(node.size, node.imports.len());
        }
    }

    #[test]
    fn test_self_loop_recorded_once() {
        let mut graph = Graph::new();
        graph.record(name("a"), name("a"));

        let nodes = graph.into_nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].size, 1);
        assert_eq!(nodes[0].imports, vec!["a"]);
    }

    #[test]
    fn test_graph_node_json_field_order() {
        let node = GraphNode {
            name: name("mgen.127-0-0-1"),
            size: 1,
            imports: vec![name("mgen.127-0-0-2")],
        };
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"name":"mgen.127-0-0-1","size":1,"imports":["mgen.127-0-0-2"]}"#
        );
    }
}
