// src/layout/level.rs

use std::collections::BTreeMap;

use tracing::debug;

use crate::id::TaskId;
use crate::table::model::PrecedenceMap;

/// Mapping from task to its level: the length of the longest predecessor
/// chain leading to it. Roots (no predecessors) are level 0.
pub type LevelMap = BTreeMap<TaskId, u32>;

/// Assign every task in `precedence` its level.
///
/// The loop is a layered BFS from the roots: seed every predecessor-free
/// task at level 0, then repeatedly take the frontier (all still-unleveled
/// tasks whose *entire* predecessor set is leveled) and assign the next
/// counter value to the whole frontier at once. Batching a frontier is what
/// guarantees that peers get the same level instead of being serialized by
/// iteration order, and it is why the result is the longest-chain level and
/// not merely "one more than some predecessor".
///
/// Preconditions (not checked here; `table::validate` enforces them at the
/// ingestion boundary): the map must be acyclic and closed, with every
/// predecessor present as a key. A cycle, a self-loop or a dangling
/// reference leaves some task permanently ineligible and this function
/// never returns.
pub fn assign_levels(precedence: &PrecedenceMap) -> LevelMap {
    let mut levels: LevelMap = precedence
        .iter()
        .filter(|(_, predecessors)| predecessors.is_empty())
        .map(|(task, _)| (task.clone(), 0))
        .collect();

    debug!(roots = levels.len(), "seeded level 0");

    let mut level = 0u32;
    while levels.len() < precedence.len() {
        level += 1;

        let frontier: Vec<TaskId> = precedence
            .iter()
            .filter(|(task, predecessors)| {
                !levels.contains_key(*task)
                    && predecessors.iter().all(|pred| levels.contains_key(pred))
            })
            .map(|(task, _)| task.clone())
            .collect();

        debug!(level, tasks = frontier.len(), "assigning frontier");

        for task in frontier {
            levels.insert(task, level);
        }
    }

    levels
}
