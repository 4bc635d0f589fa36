//! YCQL error codes following a structured numbering system
//!
//! Error code ranges:
//! - YCQL0100-YCQL0199: Semantic errors (name resolution, type checking)
//! - YCQL0300-YCQL0399: Catalog errors (schema metadata)
//! - YCQL0400-YCQL0499: System errors (configuration, internal)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a semantic error (0100-0199)
    pub const fn is_semantic_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a catalog error (0300-0399)
    pub const fn is_catalog_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YCQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Semantic errors (0100-0199)
    map.insert(100, ErrorInfo::new("Table Not Found"));
    map.insert(101, ErrorInfo::new("Duplicate Table"));
    map.insert(102, ErrorInfo::new("Duplicate Column"));
    map.insert(
        103,
        ErrorInfo::new("No Namespace Used")
            .with_help("Qualify the table name or select a keyspace with USE"),
    );
    map.insert(
        104,
        ErrorInfo::new("System Namespace Read Only")
            .with_help("Tables in system keyspaces cannot be modified"),
    );
    map.insert(105, ErrorInfo::new("Undefined Column"));
    map.insert(106, ErrorInfo::new("Datatype Mismatch"));
    map.insert(107, ErrorInfo::new("Incomparable Datatypes"));

    // Catalog errors (0300-0399)
    map.insert(300, ErrorInfo::new("Invalid Table Schema"));
    map.insert(301, ErrorInfo::new("Catalog Load Failed"));

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal Error"));
    map.insert(401, ErrorInfo::new("Configuration Error"));

    map
});

// Semantic errors
pub const YCQL0100: ErrorCode = ErrorCode::new(100);
pub const YCQL0101: ErrorCode = ErrorCode::new(101);
pub const YCQL0102: ErrorCode = ErrorCode::new(102);
pub const YCQL0103: ErrorCode = ErrorCode::new(103);
pub const YCQL0104: ErrorCode = ErrorCode::new(104);
pub const YCQL0105: ErrorCode = ErrorCode::new(105);
pub const YCQL0106: ErrorCode = ErrorCode::new(106);
pub const YCQL0107: ErrorCode = ErrorCode::new(107);

// Catalog errors
pub const YCQL0300: ErrorCode = ErrorCode::new(300);
pub const YCQL0301: ErrorCode = ErrorCode::new(301);

// System errors
pub const YCQL0400: ErrorCode = ErrorCode::new(400);
pub const YCQL0401: ErrorCode = ErrorCode::new(401);

// Named aliases used by the analyzer
pub const TABLE_NOT_FOUND: ErrorCode = YCQL0100;
pub const DUPLICATE_TABLE: ErrorCode = YCQL0101;
pub const DUPLICATE_COLUMN: ErrorCode = YCQL0102;
pub const NO_NAMESPACE_USED: ErrorCode = YCQL0103;
pub const SYSTEM_NAMESPACE_READONLY: ErrorCode = YCQL0104;
pub const UNDEFINED_COLUMN: ErrorCode = YCQL0105;
pub const DATATYPE_MISMATCH: ErrorCode = YCQL0106;
pub const INCOMPARABLE_DATATYPES: ErrorCode = YCQL0107;
pub const INVALID_TABLE_SCHEMA: ErrorCode = YCQL0300;
pub const CATALOG_LOAD_FAILED: ErrorCode = YCQL0301;
pub const INTERNAL_ERROR: ErrorCode = YCQL0400;
pub const CONFIGURATION_ERROR: ErrorCode = YCQL0401;
