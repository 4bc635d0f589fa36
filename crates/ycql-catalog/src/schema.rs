//! Table schema metadata
//!
//! Schema handles are immutable once built. The catalog hands them out as
//! `Arc<Table>`, so a statement holding a handle keeps seeing the schema it
//! resolved even if the catalog replaces or evicts the table meanwhile.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ycql_diagnostics::{CATALOG_LOAD_FAILED, INVALID_TABLE_SCHEMA, SemError};
use ycql_types::{ColumnId, QlType, TableName};

/// Catalog errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("invalid schema for table {table}: {reason}")]
    InvalidSchema { table: String, reason: String },

    #[error("table name '{0}' is not qualified with a keyspace")]
    Unqualified(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("io error: {0}")]
    IoError(String),
}

impl From<CatalogError> for SemError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::InvalidSchema { table, .. } => SemError::Catalog {
                code: INVALID_TABLE_SCHEMA,
                message: err.to_string(),
                table: Some(table.clone()),
            },
            CatalogError::Unqualified(table) => SemError::Catalog {
                code: INVALID_TABLE_SCHEMA,
                message: err.to_string(),
                table: Some(table.clone()),
            },
            CatalogError::ParseError(_) | CatalogError::IoError(_) => {
                SemError::catalog(CATALOG_LOAD_FAILED, err.to_string())
            }
        }
    }
}

/// One column of a stored table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    pub id: ColumnId,
    #[serde(rename = "type")]
    pub ql_type: QlType,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "counter")]
    pub is_counter: bool,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, id: i32, ql_type: QlType) -> Self {
        Self {
            name: name.into(),
            id: ColumnId(id),
            ql_type,
            is_static: false,
            is_counter: false,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_counter(mut self) -> Self {
        self.is_counter = true;
        self
    }
}

/// Column layout of a table.
///
/// Columns are ordered hash key columns first, then range key columns, then
/// regular columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<ColumnSchema>,
    num_key_columns: usize,
    num_hash_key_columns: usize,
}

impl TableSchema {
    /// Build a schema, checking `hash keys <= keys <= columns`
    pub fn new(
        columns: Vec<ColumnSchema>,
        num_key_columns: usize,
        num_hash_key_columns: usize,
    ) -> Result<Self, String> {
        if num_hash_key_columns > num_key_columns {
            return Err(format!(
                "{} hash key columns exceed {} key columns",
                num_hash_key_columns, num_key_columns
            ));
        }
        if num_key_columns > columns.len() {
            return Err(format!(
                "{} key columns exceed {} columns",
                num_key_columns,
                columns.len()
            ));
        }
        Ok(Self {
            columns,
            num_key_columns,
            num_hash_key_columns,
        })
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_key_columns(&self) -> usize {
        self.num_key_columns
    }

    pub fn num_hash_key_columns(&self) -> usize {
        self.num_hash_key_columns
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn column(&self, idx: usize) -> Option<&ColumnSchema> {
        self.columns.get(idx)
    }

    pub fn find_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A stored table: its qualified name, catalog id and schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    id: String,
    name: TableName,
    schema: TableSchema,
}

impl Table {
    pub fn new(
        id: impl Into<String>,
        name: TableName,
        schema: TableSchema,
    ) -> Result<Self, CatalogError> {
        if !name.has_namespace() {
            return Err(CatalogError::Unqualified(name.to_string()));
        }
        Ok(Self {
            id: id.into(),
            name,
            schema,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &TableName {
        &self.name
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }
}
