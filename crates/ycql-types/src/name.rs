//! Table and column identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyspaces that hold system tables
pub const SYSTEM_NAMESPACES: &[&str] = &[
    "system",
    "system_schema",
    "system_auth",
    "system_distributed",
    "system_traces",
];

/// Catalog identifier of a column, stable across schema changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub i32);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A possibly unqualified table reference (`[keyspace.]table`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableName {
    #[serde(default)]
    pub namespace: Option<String>,
    pub table: String,
}

impl TableName {
    /// Create an unqualified table name
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            namespace: None,
            table: table.into(),
        }
    }

    /// Create a keyspace-qualified table name
    pub fn qualified(namespace: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            table: table.into(),
        }
    }

    pub fn has_namespace(&self) -> bool {
        self.namespace.as_deref().is_some_and(|ns| !ns.is_empty())
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = Some(namespace.into());
    }

    /// Whether the table lives in one of the [`SYSTEM_NAMESPACES`]
    pub fn is_system(&self) -> bool {
        self.namespace()
            .is_some_and(|ns| SYSTEM_NAMESPACES.contains(&ns))
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace() {
            Some(ns) => write!(f, "{}.{}", ns, self.table),
            None => f.write_str(&self.table),
        }
    }
}

impl From<&str> for TableName {
    /// Split `keyspace.table` on the first dot
    fn from(s: &str) -> Self {
        match s.split_once('.') {
            Some((ns, table)) => Self::qualified(ns, table),
            None => Self::new(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualification() {
        let mut name = TableName::new("users");
        assert!(!name.has_namespace());
        assert_eq!(name.to_string(), "users");

        name.set_namespace("app");
        assert!(name.has_namespace());
        assert_eq!(name.to_string(), "app.users");

        assert!(!TableName::qualified("", "users").has_namespace());
    }

    #[test]
    fn test_is_system() {
        assert!(TableName::from("system.peers").is_system());
        assert!(TableName::from("system_schema.tables").is_system());
        assert!(!TableName::from("app.system").is_system());
        assert!(!TableName::new("peers").is_system());
    }
}
