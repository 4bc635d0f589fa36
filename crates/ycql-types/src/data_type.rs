//! Top-level data type kinds and their runtime value tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level kind of a YCQL type.
///
/// Composite kinds (`Map`, `Set`, `List`, `Tuple`) only name the shape; their
/// parameters live in [`crate::QlType`]. Expressions report their statically
/// inferred kind with this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataType {
    /// Type not known yet (e.g. unresolved reference)
    UnknownData,
    /// Type of the `NULL` literal
    NullValueType,
    Int8,
    Int16,
    Int32,
    Int64,
    Varint,
    Float,
    Double,
    Decimal,
    String,
    Bool,
    Binary,
    Timestamp,
    Inet,
    Uuid,
    Timeuuid,
    Map,
    Set,
    List,
    Tuple,
}

impl DataType {
    /// All kinds, in declaration order
    pub const ALL: [DataType; 21] = [
        Self::UnknownData,
        Self::NullValueType,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Varint,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::String,
        Self::Bool,
        Self::Binary,
        Self::Timestamp,
        Self::Inet,
        Self::Uuid,
        Self::Timeuuid,
        Self::Map,
        Self::Set,
        Self::List,
        Self::Tuple,
    ];

    /// The CQL keyword naming this kind
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnknownData => "unknown",
            Self::NullValueType => "null",
            Self::Int8 => "tinyint",
            Self::Int16 => "smallint",
            Self::Int32 => "int",
            Self::Int64 => "bigint",
            Self::Varint => "varint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "text",
            Self::Bool => "boolean",
            Self::Binary => "blob",
            Self::Timestamp => "timestamp",
            Self::Inet => "inet",
            Self::Uuid => "uuid",
            Self::Timeuuid => "timeuuid",
            Self::Map => "map",
            Self::Set => "set",
            Self::List => "list",
            Self::Tuple => "tuple",
        }
    }

    /// Look up a kind by its CQL keyword (case-insensitive).
    ///
    /// `varchar` is accepted as an alias of `text`.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower == "varchar" {
            return Some(Self::String);
        }
        Self::ALL
            .into_iter()
            .filter(|dt| dt.is_declarable())
            .find(|dt| dt.name() == lower)
    }

    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Map | Self::Set | Self::List)
    }

    /// Collections and tuples
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Map | Self::Set | Self::List | Self::Tuple)
    }

    pub const fn is_primitive(&self) -> bool {
        !self.is_composite()
    }

    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::Varint
        )
    }

    pub const fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Self::Float | Self::Double | Self::Decimal)
    }

    /// Kinds a column can be declared with
    pub const fn is_declarable(&self) -> bool {
        !matches!(self, Self::UnknownData | Self::NullValueType)
    }

    /// The value tag used by storage and execution for this kind
    pub const fn internal_type(&self) -> InternalType {
        match self {
            Self::UnknownData | Self::NullValueType => InternalType::ValueNotSet,
            Self::Int8 => InternalType::Int8Value,
            Self::Int16 => InternalType::Int16Value,
            Self::Int32 => InternalType::Int32Value,
            Self::Int64 => InternalType::Int64Value,
            Self::Varint => InternalType::VarintValue,
            Self::Float => InternalType::FloatValue,
            Self::Double => InternalType::DoubleValue,
            Self::Decimal => InternalType::DecimalValue,
            Self::String => InternalType::StringValue,
            Self::Bool => InternalType::BoolValue,
            Self::Binary => InternalType::BinaryValue,
            Self::Timestamp => InternalType::TimestampValue,
            Self::Inet => InternalType::InetaddressValue,
            Self::Uuid => InternalType::UuidValue,
            Self::Timeuuid => InternalType::TimeuuidValue,
            Self::Map => InternalType::MapValue,
            Self::Set => InternalType::SetValue,
            Self::List => InternalType::ListValue,
            Self::Tuple => InternalType::TupleValue,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value tag derived from a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalType {
    ValueNotSet,
    Int8Value,
    Int16Value,
    Int32Value,
    Int64Value,
    VarintValue,
    FloatValue,
    DoubleValue,
    DecimalValue,
    StringValue,
    BoolValue,
    BinaryValue,
    TimestampValue,
    InetaddressValue,
    UuidValue,
    TimeuuidValue,
    MapValue,
    SetValue,
    ListValue,
    TupleValue,
}
