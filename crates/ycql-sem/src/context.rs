//! Semantic analysis context of one statement
//!
//! The context binds table and column names of a single statement. It borrows
//! the statement text for locating diagnostics, the shared catalog for schema
//! lookups and the statement tree for recording what analysis consulted.
//! Schema handles obtained from the catalog are shared, never mutated, and
//! stay valid for as long as the context holds them.

use std::collections::HashSet;
use std::sync::Arc;
use ycql_ast::{ColumnDefinition, Expression, Span};
use ycql_catalog::{Table, TableCatalog};
use ycql_diagnostics::{
    DUPLICATE_COLUMN, ErrorBuilder, ErrorCode, NO_NAMESPACE_USED, Result, SYSTEM_NAMESPACE_READONLY,
    SemError, TABLE_NOT_FOUND,
};
use ycql_types::{DataType, QlType, TableName};

use crate::{ColumnDesc, SemConfig, StatementTree, Symbol, SymbolEntry, SymbolTable};

/// A table resolved for the statement being analyzed
#[derive(Debug, Clone)]
pub struct ResolvedTable {
    /// Shared schema handle, as returned by the catalog
    pub table: Arc<Table>,
    /// One descriptor per schema column, in catalog order
    pub columns: Vec<Arc<ColumnDesc>>,
    pub num_key_columns: usize,
    pub num_hash_key_columns: usize,
    /// Whether the table lives in a system keyspace
    pub is_system: bool,
}

/// Semantic analysis state for one statement
pub struct SemContext<'a> {
    source: &'a str,
    catalog: &'a dyn TableCatalog,
    tree: &'a mut dyn StatementTree,
    config: SemConfig,
    keyspace: String,
    symbols: SymbolTable<'a>,
    current_table: Option<Arc<Table>>,
    cache_used: bool,
}

impl<'a> SemContext<'a> {
    /// Create a context for analyzing `source`
    pub fn new(
        source: &'a str,
        catalog: &'a dyn TableCatalog,
        tree: &'a mut dyn StatementTree,
    ) -> Self {
        Self {
            source,
            catalog,
            tree,
            config: SemConfig::default(),
            keyspace: String::new(),
            symbols: SymbolTable::new(),
            current_table: None,
            cache_used: false,
        }
    }

    /// Set the session keyspace; an empty string means none is selected
    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = keyspace.into();
        self
    }

    pub fn with_config(mut self, config: SemConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve a table reference and bind its columns.
    ///
    /// An unqualified `name` is resolved in the session keyspace. Write access
    /// to a system table is refused before the catalog is consulted. On
    /// success the table becomes the current table of the statement and every
    /// column is bound in the symbol table.
    ///
    /// # Panics
    ///
    /// Resolving a table whose columns are already bound in this context
    /// aborts, as for any descriptor inserted twice.
    pub fn lookup_table(
        &mut self,
        name: &TableName,
        write_only: bool,
        span: Span,
    ) -> Result<ResolvedTable> {
        let mut name = name.clone();
        if !name.has_namespace() {
            if self.keyspace.is_empty() {
                return Err(self.error_with(span, NO_NAMESPACE_USED, format!("table {}", name)));
            }
            name.set_namespace(self.keyspace.clone());
        }

        let is_system = name.is_system();
        if is_system && write_only && self.config.system_namespace_readonly {
            return Err(self.error_with(
                span,
                SYSTEM_NAMESPACE_READONLY,
                format!("table {}", name),
            ));
        }

        let Some(table) = self.get_table_desc(&name) else {
            return Err(self.error_with(span, TABLE_NOT_FOUND, format!("table {}", name)));
        };
        self.current_table = Some(Arc::clone(&table));

        let columns = self.bind_columns(&table, &name, span)?;
        let schema = table.schema();
        Ok(ResolvedTable {
            num_key_columns: schema.num_key_columns(),
            num_hash_key_columns: schema.num_hash_key_columns(),
            table,
            columns,
            is_system,
        })
    }

    /// Describe every column of `table` and bind it by name
    fn bind_columns(
        &mut self,
        table: &Table,
        name: &TableName,
        span: Span,
    ) -> Result<Vec<Arc<ColumnDesc>>> {
        let schema = table.schema();
        let mut seen = HashSet::with_capacity(schema.num_columns());
        let mut columns = Vec::with_capacity(schema.num_columns());

        for (idx, column) in schema.columns().iter().enumerate() {
            // Two schema columns with one name means the catalog entry is corrupt.
            if !seen.insert(column.name.as_str()) {
                return Err(self.error_with(
                    span,
                    DUPLICATE_COLUMN,
                    format!("column '{}' repeated in table {}", column.name, name),
                ));
            }

            let desc = Arc::new(ColumnDesc::new(
                idx,
                column,
                schema.num_key_columns(),
                schema.num_hash_key_columns(),
            ));
            self.map_symbol(column.name.clone(), SymbolEntry::ColumnDesc(Arc::clone(&desc)))?;
            columns.push(desc);
        }

        Ok(columns)
    }

    /// Fetch a table from the catalog, recording it on the statement
    fn get_table_desc(&mut self, name: &TableName) -> Option<Arc<Table>> {
        log::debug!("Loading table descriptor for {}", name);
        let lookup = self.catalog.get_table_schema(name);
        let table = lookup.table?;

        self.tree.add_analyzed_table(name);
        if lookup.cache_hit {
            log::debug!("Table descriptor for {} came from the catalog cache", name);
            self.cache_used = true;
        }
        Some(table)
    }

    /// Bind `entry` to `name` in the statement's symbol table.
    ///
    /// A clash is reported at the span of the entry being bound.
    pub fn map_symbol(&mut self, name: impl Into<String>, entry: SymbolEntry<'a>) -> Result<()> {
        let span = entry.span().unwrap_or_default();
        self.symbols
            .insert(name, entry)
            .map_err(|clash| self.error_with(span, clash.code(), clash.to_string()))
    }

    pub fn lookup_symbol(&self, name: &str) -> Option<&Symbol<'a>> {
        self.symbols.lookup(name)
    }

    /// The CREATE TABLE column definition bound to `name`
    pub fn get_column_definition(&self, name: &str) -> Option<&'a ColumnDefinition> {
        self.symbols.lookup(name)?.column_definition()
    }

    /// The resolved column bound to `name`.
    ///
    /// With `reading_column`, the column is added to the set of columns the
    /// statement reads from storage. A column referenced several times is
    /// read once.
    pub fn get_column_desc(&mut self, name: &str, reading_column: bool) -> Option<Arc<ColumnDesc>> {
        let desc = Arc::clone(self.symbols.lookup(name)?.column_desc()?);
        if reading_column {
            self.tree.add_column_ref(&desc);
        }
        Some(desc)
    }

    pub fn is_convertible(&self, expr: &Expression, target: &QlType) -> bool {
        crate::is_convertible(expr, target)
    }

    pub fn is_comparable(&self, lhs: DataType, rhs: DataType) -> bool {
        crate::is_comparable(lhs, rhs)
    }

    /// Build an error located at `span` of the statement text
    pub fn error(&self, span: Span, code: ErrorCode) -> SemError {
        ErrorBuilder::from_code(code).span(span, self.source).semantic()
    }

    /// Build a located error with extra context for the client
    pub fn error_with(&self, span: Span, code: ErrorCode, context: impl Into<String>) -> SemError {
        ErrorBuilder::from_code(code)
            .span(span, self.source)
            .context(context)
            .semantic()
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn config(&self) -> &SemConfig {
        &self.config
    }

    /// The session keyspace, if one is selected
    pub fn current_keyspace(&self) -> Option<&str> {
        Some(self.keyspace.as_str()).filter(|ks| !ks.is_empty())
    }

    /// The table most recently resolved in this statement
    pub fn current_table(&self) -> Option<&Arc<Table>> {
        self.current_table.as_ref()
    }

    /// Whether any table was served from a catalog cache.
    ///
    /// When analysis fails and this is set, the schema may have been stale;
    /// the caller can invalidate the cache and analyze the statement again.
    pub fn cache_used(&self) -> bool {
        self.cache_used
    }

    pub fn symbols(&self) -> &SymbolTable<'a> {
        &self.symbols
    }
}
