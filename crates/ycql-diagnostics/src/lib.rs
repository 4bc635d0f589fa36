//! YCQL diagnostics and error handling
//!
//! This crate provides the error reporting vocabulary shared by the YCQL
//! statement compiler: classified error codes, byte spans into the statement
//! text, line/column locations, and the located `SemError` returned by
//! semantic analysis.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for YCQL analysis operations
pub type Result<T> = std::result::Result<T, SemError>;
