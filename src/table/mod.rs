// src/table/mod.rs

//! Precedence-table ingestion.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the normalized `PrecedenceMap`
//!   (`model.rs`).
//! - Load a table file from disk, in TOML or delimited (CSV/TSV) form
//!   (`loader.rs`).
//! - Validate the map before the layout core runs: closed references, no
//!   self-loops, no cycles (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{PrecedenceMap, TableFile, TaskEntry};
pub use validate::validate_table;
