// src/table/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::id::TaskId;

/// Normalized precedence mapping: each task to its ordered list of direct
/// predecessors.
///
/// Invariants expected by the layout core (enforced in `validate.rs`, not
/// here):
/// - every predecessor referenced appears as a key of the map
/// - the relation is acyclic
///
/// Duplicates inside a predecessor list and empty lists are both fine; a
/// task with no predecessors is a key with an empty `Vec`, never an absent
/// key. `BTreeMap` keeps iteration in `TaskId` order, which is what makes
/// the whole pipeline reproducible run to run.
pub type PrecedenceMap = BTreeMap<TaskId, Vec<TaskId>>;

/// Top-level structure of a TOML precedence table.
///
/// This mirrors the shape used for task files elsewhere in this family of
/// tools:
///
/// ```toml
/// [task.1]
///
/// [task.2]
///
/// [task.3]
/// after = ["1", "2"]
/// ```
///
/// Section keys are raw identifier tokens; they are normalized into
/// [`TaskId`]s only when the file is turned into a [`PrecedenceMap`].
#[derive(Debug, Clone, Deserialize)]
pub struct TableFile {
    /// All tasks from `[task.<id>]`, keyed by the raw token.
    #[serde(default)]
    pub task: BTreeMap<String, TaskEntry>,
}

/// `[task.<id>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskEntry {
    /// Predecessor list: tokens of tasks that must precede this one.
    ///
    /// Absent means "no predecessors" (the task is a root).
    #[serde(default)]
    pub after: Vec<String>,
}

impl TableFile {
    /// Normalize the raw file into a [`PrecedenceMap`].
    pub fn to_precedence_map(&self) -> PrecedenceMap {
        build_precedence_map(
            self.task
                .iter()
                .map(|(token, entry)| (token.as_str(), entry.after.iter().map(String::as_str))),
        )
    }
}

/// Build a normalized [`PrecedenceMap`] from raw (element, predecessors)
/// rows.
///
/// Both loaders funnel through here so TOML and delimited sources describing
/// the same table produce identical maps. Empty predecessor tokens are
/// dropped; if the same element appears twice, the later row wins, matching
/// how a spreadsheet index behaves.
pub fn build_precedence_map<'a, R, P>(rows: R) -> PrecedenceMap
where
    R: IntoIterator<Item = (&'a str, P)>,
    P: IntoIterator<Item = &'a str>,
{
    let mut map = PrecedenceMap::new();
    for (element, predecessors) in rows {
        let task = TaskId::normalize(element);
        let preds = predecessors
            .into_iter()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(TaskId::normalize)
            .collect();
        map.insert(task, preds);
    }
    map
}
