// src/table/validate.rs

use anyhow::{Result, anyhow};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::id::TaskId;
use crate::table::model::PrecedenceMap;

/// Run semantic validation against a loaded precedence map.
///
/// This checks:
/// - there is at least one task
/// - every predecessor reference names a task present in the map
/// - no task lists itself as a predecessor
/// - the precedence relation has no cycles
///
/// The layout core assumes all of this and simply never terminates on a
/// cyclic or open map, so rejecting bad input here, with a concrete error,
/// is what keeps that precondition out of the caller's hands.
pub fn validate_table(map: &PrecedenceMap) -> Result<()> {
    ensure_has_tasks(map)?;
    validate_references(map)?;
    validate_acyclic(map)?;
    Ok(())
}

fn ensure_has_tasks(map: &PrecedenceMap) -> Result<()> {
    if map.is_empty() {
        return Err(anyhow!("precedence table must contain at least one task"));
    }
    Ok(())
}

fn validate_references(map: &PrecedenceMap) -> Result<()> {
    for (task, predecessors) in map.iter() {
        for pred in predecessors.iter() {
            if !map.contains_key(pred) {
                return Err(anyhow!(
                    "task '{}' has unknown predecessor '{}'",
                    task,
                    pred
                ));
            }
            if pred == task {
                return Err(anyhow!("task '{}' cannot precede itself", task));
            }
        }
    }
    Ok(())
}

fn validate_acyclic(map: &PrecedenceMap) -> Result<()> {
    // Build a petgraph graph from the tasks and their predecessors.
    //
    // Edge direction: predecessor -> task, so for
    //   3: [1, 2]
    // we add edges 1 -> 3 and 2 -> 3.
    let mut graph: DiGraphMap<&TaskId, ()> = DiGraphMap::new();

    for task in map.keys() {
        graph.add_node(task);
    }

    for (task, predecessors) in map.iter() {
        for pred in predecessors.iter() {
            graph.add_edge(pred, task, ());
        }
    }

    // A topological sort fails iff there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(anyhow!(
                "cycle detected in precedence table involving task '{}'",
                node
            ))
        }
    }
}
