//! In-memory catalog implementing TableCatalog
//!
//! The registry keeps the authoritative table definitions and, separately, a
//! cache of handles already served. A lookup served from the cache reports
//! `cache_hit`, which tells the caller the schema may be stale and a failed
//! analysis is worth retrying after [`MemoryCatalog::invalidate`].

use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use ycql_types::TableName;

use crate::provider::{TableCatalog, TableLookup};
use crate::schema::{CatalogError, ColumnSchema, Table, TableSchema};

/// Table definition as stored in catalog JSON files
#[derive(Debug, Deserialize)]
struct TableDefinition {
    namespace: String,
    name: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    hash_key_columns: usize,
    #[serde(default)]
    key_columns: usize,
    columns: Vec<ColumnSchema>,
}

impl TryFrom<TableDefinition> for Table {
    type Error = CatalogError;

    fn try_from(def: TableDefinition) -> Result<Self, Self::Error> {
        let name = TableName::qualified(def.namespace, def.name);
        let schema = TableSchema::new(def.columns, def.key_columns, def.hash_key_columns)
            .map_err(|reason| CatalogError::InvalidSchema {
                table: name.to_string(),
                reason,
            })?;
        let id = def.id.unwrap_or_else(|| name.to_string());
        Table::new(id, name, schema)
    }
}

/// Thread-safe in-memory catalog with a handle cache
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    tables: Arc<RwLock<HashMap<TableName, Arc<Table>>>>,
    cache: Arc<RwLock<HashMap<TableName, Arc<Table>>>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load table definitions from a JSON array
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<TableDefinition> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        let catalog = Self::new();
        for def in defs {
            catalog.create_table(Table::try_from(def)?);
        }
        Ok(catalog)
    }

    /// Load table definitions from a JSON file at runtime
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Register or replace a table.
    ///
    /// Cached handles are left in place until invalidated, the way a remote
    /// metadata cache lags behind schema changes.
    pub fn create_table(&self, table: Table) -> Arc<Table> {
        let table = Arc::new(table);
        log::debug!("Registering table {}", table.name());
        self.tables
            .write()
            .insert(table.name().clone(), Arc::clone(&table));
        table
    }

    /// Remove a table; cached handles stay until invalidated
    pub fn drop_table(&self, name: &TableName) -> Option<Arc<Table>> {
        self.tables.write().remove(name)
    }

    /// Evict one cached handle; returns whether one was cached
    pub fn invalidate(&self, name: &TableName) -> bool {
        self.cache.write().remove(name).is_some()
    }

    pub fn invalidate_all(&self) {
        self.cache.write().clear();
    }

    pub fn table_count(&self) -> usize {
        self.tables.read().len()
    }
}

impl TableCatalog for MemoryCatalog {
    fn get_table_schema(&self, name: &TableName) -> TableLookup {
        if let Some(table) = self.cache.read().get(name) {
            log::debug!("Table {} served from catalog cache", name);
            return TableLookup::found(Arc::clone(table), true);
        }

        let Some(table) = self.tables.read().get(name).cloned() else {
            return TableLookup::missing();
        };
        self.cache.write().insert(name.clone(), Arc::clone(&table));
        TableLookup::found(table, false)
    }
}

impl std::fmt::Debug for MemoryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCatalog")
            .field("tables", &self.tables.read().len())
            .field("cached", &self.cache.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use ycql_types::{ColumnId, DataType};

    const CATALOG_JSON: &str = r#"[
        {
            "namespace": "app",
            "name": "users",
            "hash_key_columns": 1,
            "key_columns": 1,
            "columns": [
                {"name": "id", "id": 10, "type": "uuid"},
                {"name": "email", "id": 11, "type": "text"},
                {"name": "tags", "id": 12, "type": "set<text>"}
            ]
        },
        {
            "namespace": "system",
            "name": "peers",
            "id": "sys-peers",
            "hash_key_columns": 1,
            "key_columns": 1,
            "columns": [{"name": "peer", "id": 1, "type": "inet"}]
        }
    ]"#;

    fn users_table(extra_column: bool) -> Table {
        let mut columns = vec![ColumnSchema::new("id", 10, DataType::Uuid.into())];
        if extra_column {
            columns.push(ColumnSchema::new("age", 13, DataType::Int32.into()));
        }
        let schema = TableSchema::new(columns, 1, 1).unwrap();
        Table::new("users-v1", TableName::from("app.users"), schema).unwrap()
    }

    #[test]
    fn test_from_json() {
        let catalog = MemoryCatalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.table_count(), 2);

        let lookup = catalog.get_table_schema(&TableName::from("app.users"));
        let table = lookup.table.unwrap();
        assert_eq!(table.id(), "app.users");
        assert_eq!(table.schema().num_columns(), 3);
        assert_eq!(
            table.schema().column(2).map(|c| c.ql_type.to_string()),
            Some("set<text>".to_string())
        );

        let peers = catalog.get_table_schema(&TableName::from("system.peers"));
        assert_eq!(peers.table.map(|t| t.id().to_string()), Some("sys-peers".to_string()));
    }

    #[test]
    fn test_from_json_rejects_bad_schema() {
        let json = r#"[{"namespace": "app", "name": "t", "key_columns": 2,
                        "columns": [{"name": "k", "id": 1, "type": "int"}]}]"#;
        let err = MemoryCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSchema { .. }));

        let err = MemoryCatalog::from_json("{").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file.write_all(CATALOG_JSON.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let catalog = MemoryCatalog::from_json_file(temp_file.path()).unwrap();
        assert_eq!(catalog.table_count(), 2);

        let err = MemoryCatalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }

    #[test]
    fn test_cache_hit_reported_on_second_lookup() {
        let catalog = MemoryCatalog::new();
        catalog.create_table(users_table(false));
        let name = TableName::from("app.users");

        assert!(!catalog.get_table_schema(&name).cache_hit);
        assert!(catalog.get_table_schema(&name).cache_hit);

        assert!(catalog.invalidate(&name));
        assert!(!catalog.get_table_schema(&name).cache_hit);
    }

    #[test]
    fn test_missing_table() {
        let catalog = MemoryCatalog::new();
        let lookup = catalog.get_table_schema(&TableName::from("app.nope"));
        assert!(lookup.table.is_none());
        assert!(!lookup.cache_hit);
    }

    #[test]
    fn test_held_handle_survives_replacement() {
        let catalog = MemoryCatalog::new();
        catalog.create_table(users_table(false));
        let name = TableName::from("app.users");

        let held = catalog.get_table_schema(&name).table.unwrap();
        catalog.create_table(users_table(true));

        // The stale cached handle is still served until invalidated.
        let stale = catalog.get_table_schema(&name);
        assert!(stale.cache_hit);
        assert_eq!(stale.table.map(|t| t.schema().num_columns()), Some(1));

        catalog.invalidate_all();
        let fresh = catalog.get_table_schema(&name).table.unwrap();
        assert_eq!(fresh.schema().num_columns(), 2);
        assert_eq!(held.schema().num_columns(), 1);
        assert_eq!(held.schema().column(0).map(|c| c.id), Some(ColumnId(10)));
    }

    #[test]
    fn test_drop_table() {
        let catalog = MemoryCatalog::new();
        catalog.create_table(users_table(false));
        let name = TableName::from("app.users");

        assert!(catalog.drop_table(&name).is_some());
        assert!(catalog.get_table_schema(&name).table.is_none());
    }
}
