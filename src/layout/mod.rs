// src/layout/mod.rs

//! Layered layout of the precedence DAG.
//!
//! - [`level`] assigns every task its level: the length of its longest
//!   predecessor chain.
//! - [`position`] turns those levels into 2-D coordinates with a defined,
//!   collision-free ordering inside each level.
//!
//! Both are pure functions over already-validated maps: they hold no state,
//! touch no I/O, and return freshly built maps on every call. Neither
//! checks its input: feeding them a cyclic or open precedence map is a
//! caller error (see `table::validate`) and makes the leveling loop spin
//! forever.

pub mod level;
pub mod position;

pub use level::{LevelMap, assign_levels};
pub use position::{Position, PositionMap, plan_positions};
