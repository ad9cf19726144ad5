// src/render/dot.rs

use std::fmt::Write;

use crate::layout::position::PositionMap;
use crate::render::graph::PrecedenceGraph;
use crate::table::model::PrecedenceMap;

/// Render the layout as Graphviz DOT with pinned positions.
///
/// Every node gets `pos="x,y!"` so `neato -n` reproduces the computed
/// layout exactly; `scale` stretches the coordinates for a larger render of
/// the same diagram.
pub fn render_dot(map: &PrecedenceMap, positions: &PositionMap, scale: f64) -> String {
    let graph = PrecedenceGraph::from_precedence(map);

    let mut out = String::new();
    let _ = writeln!(out, "digraph precedence {{");
    let _ = writeln!(out, "    node [shape=circle];");

    for (task, position) in positions.iter() {
        let (x, y) = position.scaled(scale);
        let _ = writeln!(out, "    {} [pos=\"{x},{y}!\"];", quote(&task.to_string()));
    }

    for (pred, task) in graph.edges() {
        let _ = writeln!(
            out,
            "    {} -> {};",
            quote(&pred.to_string()),
            quote(&task.to_string())
        );
    }

    let _ = writeln!(out, "}}");
    out
}

/// Quote a node id for DOT. Identifiers may be arbitrary labels, so always
/// emit a quoted string with `"` and `\` escaped.
fn quote(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
