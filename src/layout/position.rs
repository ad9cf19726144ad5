// src/layout/position.rs

use std::collections::BTreeMap;

use crate::id::TaskId;
use crate::layout::level::LevelMap;

/// A node position in the diagram. `x` is the task's level; `y` is its rank
/// inside that level, centered so every level balances around y = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: u32,
    pub y: f64,
}

impl Position {
    /// Coordinates scaled by a render factor (used for the larger-scale
    /// output; the stored layout itself is never mutated).
    pub fn scaled(&self, factor: f64) -> (f64, f64) {
        (f64::from(self.x) * factor, self.y * factor)
    }
}

/// Mapping from task to its diagram position.
pub type PositionMap = BTreeMap<TaskId, Position>;

/// Plan a position for every task in `levels`.
///
/// Tasks are grouped by level and ordered inside each level by the `TaskId`
/// total order (numbers numerically, then labels lexicographically), the
/// only tie-break, so repeated calls on the same map yield identical
/// results. The i-th task of a level with `width` tasks gets
/// `y = (width - 1)/2 - i`: y-values descend by 1 per rank and are
/// symmetric around 0, which keeps the vertical center of mass of every
/// level on the same baseline no matter how wide the level is. No
/// edge-crossing minimization is attempted.
///
/// Total for any `LevelMap` produced by
/// [`assign_levels`](crate::layout::level::assign_levels).
pub fn plan_positions(levels: &LevelMap) -> PositionMap {
    let mut by_level: BTreeMap<u32, Vec<&TaskId>> = BTreeMap::new();
    for (task, level) in levels.iter() {
        by_level.entry(*level).or_default().push(task);
    }

    let mut positions = PositionMap::new();
    for (level, tasks) in by_level {
        // `levels` iterates in TaskId order, so each bucket is already
        // sorted; no extra sort needed.
        let top = (tasks.len() as f64 - 1.0) / 2.0;
        for (rank, task) in tasks.into_iter().enumerate() {
            positions.insert(
                task.clone(),
                Position {
                    x: level,
                    y: top - rank as f64,
                },
            );
        }
    }

    positions
}
