//! Per-statement symbol table
//!
//! Names declared or resolved while analyzing one statement are bound here.
//! A name may carry several entries, one per [`SymbolKind`]: a CREATE TABLE
//! can declare a column with the same name as the table, for instance.
//! Binding a second entry of a kind already present is an error.

use indexmap::IndexMap;
use smallvec::SmallVec;
use std::sync::Arc;
use thiserror::Error;
use ycql_ast::{AlterColumnDefinition, ColumnDefinition, CreateTable, Span};
use ycql_diagnostics::{DUPLICATE_COLUMN, DUPLICATE_TABLE, ErrorCode};

use crate::ColumnDesc;

/// Kind of a symbol entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Column declared by CREATE TABLE
    ColumnDefinition,
    /// Column clause of ALTER TABLE
    AlterColumnDefinition,
    /// Table declared by CREATE TABLE
    CreateTable,
    /// Column of a table resolved from the catalog
    ColumnDesc,
}

/// What a name is bound to
#[derive(Debug, Clone)]
pub enum SymbolEntry<'a> {
    ColumnDefinition(&'a ColumnDefinition),
    AlterColumnDefinition(&'a AlterColumnDefinition),
    CreateTable(&'a CreateTable),
    ColumnDesc(Arc<ColumnDesc>),
}

impl SymbolEntry<'_> {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Self::ColumnDefinition(_) => SymbolKind::ColumnDefinition,
            Self::AlterColumnDefinition(_) => SymbolKind::AlterColumnDefinition,
            Self::CreateTable(_) => SymbolKind::CreateTable,
            Self::ColumnDesc(_) => SymbolKind::ColumnDesc,
        }
    }

    /// Where the entry was declared; resolved columns have no source span
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::ColumnDefinition(def) => Some(def.span),
            Self::AlterColumnDefinition(def) => Some(def.span),
            Self::CreateTable(table) => Some(table.span),
            Self::ColumnDesc(_) => None,
        }
    }
}

/// A name bound twice with the same kind of entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolClash {
    #[error("column '{0}' is already defined")]
    Column(String),

    #[error("table '{0}' is already defined")]
    Table(String),
}

impl SymbolClash {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Column(_) => DUPLICATE_COLUMN,
            Self::Table(_) => DUPLICATE_TABLE,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Column(name) | Self::Table(name) => name,
        }
    }
}

/// All entries bound to one name, at most one per kind
#[derive(Debug, Clone, Default)]
pub struct Symbol<'a> {
    entries: SmallVec<[SymbolEntry<'a>; 2]>,
}

impl<'a> Symbol<'a> {
    pub fn get(&self, kind: SymbolKind) -> Option<&SymbolEntry<'a>> {
        self.entries.iter().find(|entry| entry.kind() == kind)
    }

    pub fn contains(&self, kind: SymbolKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn entries(&self) -> &[SymbolEntry<'a>] {
        &self.entries
    }

    pub fn column_definition(&self) -> Option<&'a ColumnDefinition> {
        self.entries.iter().find_map(|entry| match entry {
            SymbolEntry::ColumnDefinition(def) => Some(*def),
            _ => None,
        })
    }

    pub fn alter_column_definition(&self) -> Option<&'a AlterColumnDefinition> {
        self.entries.iter().find_map(|entry| match entry {
            SymbolEntry::AlterColumnDefinition(def) => Some(*def),
            _ => None,
        })
    }

    pub fn create_table(&self) -> Option<&'a CreateTable> {
        self.entries.iter().find_map(|entry| match entry {
            SymbolEntry::CreateTable(table) => Some(*table),
            _ => None,
        })
    }

    pub fn column_desc(&self) -> Option<&Arc<ColumnDesc>> {
        self.entries.iter().find_map(|entry| match entry {
            SymbolEntry::ColumnDesc(desc) => Some(desc),
            _ => None,
        })
    }
}

/// Symbol table of one statement
#[derive(Debug, Clone, Default)]
pub struct SymbolTable<'a> {
    symbols: IndexMap<String, Symbol<'a>>,
}

impl<'a> SymbolTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `entry` to `name`.
    ///
    /// # Panics
    ///
    /// Binding a second resolved column descriptor to a name means the
    /// catalog or the resolver is corrupt, and analysis cannot continue.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        entry: SymbolEntry<'a>,
    ) -> Result<(), SymbolClash> {
        let name = name.into();
        let symbol = self.symbols.entry(name.clone()).or_default();

        if symbol.contains(entry.kind()) {
            return match entry.kind() {
                SymbolKind::ColumnDefinition | SymbolKind::AlterColumnDefinition => {
                    Err(SymbolClash::Column(name))
                }
                SymbolKind::CreateTable => Err(SymbolClash::Table(name)),
                SymbolKind::ColumnDesc => {
                    log::error!("Column descriptor for '{}' inserted twice", name);
                    panic!("column descriptor for '{name}' inserted twice into one symbol table");
                }
            };
        }

        log::trace!("Binding {:?} to '{}'", entry.kind(), name);
        symbol.entries.push(entry);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol<'a>> {
        self.symbols.get(name)
    }

    /// Bound names, in first-binding order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
