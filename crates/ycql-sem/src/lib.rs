//! YCQL semantic analysis context
//!
//! This crate binds the identifiers of a parsed statement to schema metadata:
//! - Per-statement symbol table for column and table names
//! - Table resolution against a shared, possibly cached catalog
//! - Tracking of the columns a statement must read
//! - Structural implicit-conversion and comparability checks
//!
//! One [`SemContext`] is built per statement and dropped once analysis
//! completes. Recoverable failures are returned as located
//! [`ycql_diagnostics::SemError`]s; catalog corruption aborts with a panic.

mod column;
mod config;
mod context;
mod convert;
mod symbols;
mod tree;

pub use column::*;
pub use config::*;
pub use context::*;
pub use convert::*;
pub use symbols::*;
pub use tree::*;
