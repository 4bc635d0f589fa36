//! Literal AST nodes

use serde::{Deserialize, Serialize};
use ycql_types::DataType;

/// A literal value in a YCQL statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Bool(bool),
    /// Integer literal, typed as `bigint`
    Int(i64),
    /// Floating-point literal, typed as `double`
    Float(f64),
    /// Quoted string literal
    String(String),
    /// UUID literal in canonical text form
    Uuid(String),
    /// Hex blob literal (`0x...`)
    Blob(Vec<u8>),
}

impl Literal {
    /// Statically inferred kind of the literal
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Null => DataType::NullValueType,
            Self::Bool(_) => DataType::Bool,
            Self::Int(_) => DataType::Int64,
            Self::Float(_) => DataType::Double,
            Self::String(_) => DataType::String,
            Self::Uuid(_) => DataType::Uuid,
            Self::Blob(_) => DataType::Binary,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
