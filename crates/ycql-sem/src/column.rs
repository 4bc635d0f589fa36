//! Resolved column descriptors

use ycql_catalog::ColumnSchema;
use ycql_types::{ColumnId, InternalType, QlType};

/// One column of a resolved table.
///
/// Built once per column when a table is resolved and shared through `Arc`
/// between the statement's column list and its symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDesc {
    index: usize,
    id: ColumnId,
    is_hash: bool,
    is_primary: bool,
    is_static: bool,
    is_counter: bool,
    ql_type: QlType,
    internal_type: InternalType,
}

impl ColumnDesc {
    /// Describe the column at catalog ordinal `index`.
    ///
    /// Key columns form a prefix of the schema, and hash key columns form a
    /// prefix of the key columns.
    pub fn new(
        index: usize,
        column: &ColumnSchema,
        num_key_columns: usize,
        num_hash_key_columns: usize,
    ) -> Self {
        Self {
            index,
            id: column.id,
            is_hash: index < num_hash_key_columns,
            is_primary: index < num_key_columns,
            is_static: column.is_static,
            is_counter: column.is_counter,
            internal_type: InternalType::from(&column.ql_type),
            ql_type: column.ql_type.clone(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn is_hash(&self) -> bool {
        self.is_hash
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_counter(&self) -> bool {
        self.is_counter
    }

    pub fn ql_type(&self) -> &QlType {
        &self.ql_type
    }

    pub fn internal_type(&self) -> InternalType {
        self.internal_type
    }
}
