//! Statement-level bookkeeping written by semantic analysis

use indexmap::IndexSet;
use std::collections::BTreeSet;
use ycql_types::{ColumnId, TableName};

/// Facts about one statement that later compilation stages consume.
///
/// Semantic analysis records every table it consulted, so cached plans can be
/// invalidated when one of those tables changes, and every column that must
/// be fetched from storage to execute the statement.
#[derive(Debug, Clone, Default)]
pub struct ParseTree {
    analyzed_tables: IndexSet<TableName>,
    column_refs: BTreeSet<ColumnId>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` was consulted; repeated tables are kept once
    pub fn add_analyzed_table(&mut self, name: TableName) {
        self.analyzed_tables.insert(name);
    }

    /// Tables consulted, in first-use order
    pub fn analyzed_tables(&self) -> impl Iterator<Item = &TableName> {
        self.analyzed_tables.iter()
    }

    /// Record that column `id` must be read; returns false if it already was
    pub fn add_column_ref(&mut self, id: ColumnId) -> bool {
        self.column_refs.insert(id)
    }

    pub fn column_refs(&self) -> &BTreeSet<ColumnId> {
        &self.column_refs
    }
}
