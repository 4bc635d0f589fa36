//! YCQL type system
//!
//! This crate defines the vocabulary shared by the catalog and the semantic
//! analyzer:
//! - Data type kinds and recursive type descriptors
//! - Runtime value tags derived from declared types
//! - Table and column identifiers
//! - Scalar implicit-conversion and comparison tables

pub mod conversion;
mod data_type;
mod name;
mod ql_type;

pub use conversion::{is_comparable, is_implicitly_convertible};
pub use data_type::*;
pub use name::*;
pub use ql_type::*;
