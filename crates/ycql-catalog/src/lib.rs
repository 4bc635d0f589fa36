//! YCQL table catalog
//!
//! This crate provides:
//! - Shared, immutable table schema handles
//! - The `TableCatalog` lookup interface used by semantic analysis
//! - An in-memory catalog with a handle cache, loadable from JSON

pub mod provider;
pub mod registry;
pub mod schema;

pub use provider::*;
pub use registry::*;
pub use schema::*;
