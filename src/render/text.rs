// src/render/text.rs

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::id::TaskId;
use crate::layout::level::LevelMap;
use crate::layout::position::PositionMap;
use crate::render::graph::PrecedenceGraph;
use crate::table::model::PrecedenceMap;

/// Render the layout as a plain-text listing: one block per level with each
/// task's scaled coordinates, then the edge list.
pub fn render_text(
    map: &PrecedenceMap,
    levels: &LevelMap,
    positions: &PositionMap,
    scale: f64,
) -> String {
    let mut by_level: BTreeMap<u32, Vec<&TaskId>> = BTreeMap::new();
    for (task, level) in levels.iter() {
        by_level.entry(*level).or_default().push(task);
    }

    let graph = PrecedenceGraph::from_precedence(map);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "precedence diagram: {} tasks across {} levels",
        levels.len(),
        by_level.len()
    );

    for (level, tasks) in by_level {
        let _ = writeln!(out);
        let _ = writeln!(out, "level {level}:");
        for task in tasks {
            // Every leveled task has a position; a miss here would mean the
            // two maps came from different inputs.
            if let Some(position) = positions.get(task) {
                let (x, y) = position.scaled(scale);
                let _ = writeln!(out, "  {task}  ({x}, {y})");
            }
        }
    }

    if graph.edge_count() > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "edges:");
        for (pred, task) in graph.edges() {
            let _ = writeln!(out, "  {pred} -> {task}");
        }
    }

    out
}
