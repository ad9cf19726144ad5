// src/errors.rs

//! Crate-wide error aliases.
//!
//! Boundary failures (unreadable file, malformed table, precedence
//! violations) all flow through `anyhow`; this module is the single place
//! to grow more structured error types if that ever becomes worthwhile.

pub use anyhow::{Error, Result};
