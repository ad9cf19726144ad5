// src/render/graph.rs

use std::collections::BTreeMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::id::TaskId;
use crate::table::model::PrecedenceMap;

/// Directed graph of the precedence relation, for rendering only.
///
/// The layout core works straight off the `PrecedenceMap` (adjacency *is*
/// the map), so this graph exists purely to walk edges when drawing. Edge
/// direction: predecessor -> task.
pub struct PrecedenceGraph {
    graph: DiGraph<TaskId, ()>,
    indices: BTreeMap<TaskId, NodeIndex>,
}

impl PrecedenceGraph {
    /// Build the graph from a precedence map.
    ///
    /// Two passes: nodes first, then edges, so edge insertion never has to
    /// create nodes on the fly. `update_edge` collapses duplicate
    /// predecessor entries into a single drawn edge.
    pub fn from_precedence(map: &PrecedenceMap) -> Self {
        let mut graph = DiGraph::new();
        let mut indices = BTreeMap::new();

        for task in map.keys() {
            let idx = graph.add_node(task.clone());
            indices.insert(task.clone(), idx);
        }

        for (task, predecessors) in map.iter() {
            let task_idx = indices[task];
            for pred in predecessors.iter() {
                if let Some(&pred_idx) = indices.get(pred) {
                    graph.update_edge(pred_idx, task_idx, ());
                }
            }
        }

        Self { graph, indices }
    }

    /// All edges as (predecessor, task) pairs, in insertion order (which is
    /// map order, hence deterministic).
    pub fn edges(&self) -> impl Iterator<Item = (&TaskId, &TaskId)> {
        self.graph.edge_indices().filter_map(|edge| {
            let (a, b) = self.graph.edge_endpoints(edge)?;
            Some((&self.graph[a], &self.graph[b]))
        })
    }

    pub fn task_count(&self) -> usize {
        self.indices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
