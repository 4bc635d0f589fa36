//! Catalog lookup interface used by semantic analysis

use std::sync::Arc;
use ycql_types::TableName;

use crate::Table;

/// Outcome of a catalog lookup
#[derive(Debug, Clone, Default)]
pub struct TableLookup {
    /// The table, or `None` if it does not exist
    pub table: Option<Arc<Table>>,
    /// Whether the handle came from a cache and may be stale
    pub cache_hit: bool,
}

impl TableLookup {
    pub fn found(table: Arc<Table>, cache_hit: bool) -> Self {
        Self {
            table: Some(table),
            cache_hit,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }
}

/// Source of table schemas.
///
/// Implementations are shared across concurrently analyzed statements. A
/// lookup is a single synchronous round-trip; a missing table is reported as
/// `table: None` rather than an error.
pub trait TableCatalog: Send + Sync {
    /// Look up a keyspace-qualified table
    fn get_table_schema(&self, name: &TableName) -> TableLookup;
}

impl<T: TableCatalog + ?Sized> TableCatalog for Arc<T> {
    fn get_table_schema(&self, name: &TableName) -> TableLookup {
        (**self).get_table_schema(name)
    }
}
