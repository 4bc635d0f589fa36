//! DDL nodes: column and table definitions

use ycql_diagnostics::Span;
use ycql_types::{QlType, TableName};

/// Role of a column declared in CREATE TABLE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    #[default]
    Regular,
    /// Partition (hash) key column
    HashKey,
    /// Clustering (range) key column
    RangeKey,
    /// Column shared by all rows of a partition
    Static,
}

/// A column declared in CREATE TABLE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    pub ql_type: QlType,
    pub kind: ColumnKind,
    pub span: Span,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, ql_type: QlType, span: Span) -> Self {
        Self {
            name: name.into(),
            ql_type,
            kind: ColumnKind::Regular,
            span,
        }
    }

    pub fn with_kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_primary_key(&self) -> bool {
        matches!(self.kind, ColumnKind::HashKey | ColumnKind::RangeKey)
    }
}

/// What an ALTER TABLE clause does to a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterColumnMode {
    Add(QlType),
    Drop,
    Rename(String),
    Type(QlType),
}

/// A column clause of ALTER TABLE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterColumnDefinition {
    pub name: String,
    pub mode: AlterColumnMode,
    pub span: Span,
}

impl AlterColumnDefinition {
    pub fn new(name: impl Into<String>, mode: AlterColumnMode, span: Span) -> Self {
        Self {
            name: name.into(),
            mode,
            span,
        }
    }

    /// The column name after the clause is applied
    pub fn target_name(&self) -> &str {
        match &self.mode {
            AlterColumnMode::Rename(new_name) => new_name,
            _ => &self.name,
        }
    }
}

/// A CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    pub name: TableName,
    pub columns: Vec<ColumnDefinition>,
    pub if_not_exists: bool,
    pub span: Span,
}

impl CreateTable {
    pub fn new(name: TableName, columns: Vec<ColumnDefinition>, span: Span) -> Self {
        Self {
            name,
            columns,
            if_not_exists: false,
            span,
        }
    }

    pub fn hash_key_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::HashKey)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.iter().filter(|c| c.is_primary_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ycql_types::DataType;

    #[test]
    fn test_key_columns() {
        let create = CreateTable::new(
            TableName::from("ks.events"),
            vec![
                ColumnDefinition::new("h", DataType::Int32.into(), Span::new(20, 21))
                    .with_kind(ColumnKind::HashKey),
                ColumnDefinition::new("r", DataType::Timestamp.into(), Span::new(27, 28))
                    .with_kind(ColumnKind::RangeKey),
                ColumnDefinition::new("v", DataType::String.into(), Span::new(40, 41)),
            ],
            Span::new(0, 60),
        );
        assert_eq!(create.hash_key_columns().count(), 1);
        assert_eq!(create.primary_key_columns().count(), 2);
    }

    #[test]
    fn test_alter_target_name() {
        let rename = AlterColumnDefinition::new(
            "v",
            AlterColumnMode::Rename("w".to_string()),
            Span::default(),
        );
        assert_eq!(rename.target_name(), "w");
        let drop = AlterColumnDefinition::new("v", AlterColumnMode::Drop, Span::default());
        assert_eq!(drop.target_name(), "v");
    }
}
