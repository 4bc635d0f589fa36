//! Expression AST nodes
//!
//! Only the expression kinds that semantic analysis inspects structurally are
//! modelled: literals, collection literals, and column references.

use ycql_diagnostics::Span;
use ycql_types::DataType;

use crate::{Expr, Literal, Spanned};

/// A YCQL expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal value, including `NULL`
    Literal(Literal),
    /// Set literal `{e1, e2, ...}`; `{}` also denotes an empty map
    Set(SetExpr),
    /// Map literal `{k1: v1, k2: v2, ...}`
    Map(MapExpr),
    /// List literal `[e1, e2, ...]`
    List(ListExpr),
    /// Reference to a column of the table being analyzed
    ColumnRef(ColumnRefExpr),
}

impl Expression {
    pub fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    pub fn int(value: i64) -> Self {
        Self::Literal(Literal::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Self::Literal(Literal::Bool(value))
    }

    pub fn set(elems: Vec<Expr>) -> Self {
        Self::Set(SetExpr { elems })
    }

    pub fn map(entries: Vec<(Expr, Expr)>) -> Self {
        Self::Map(MapExpr { entries })
    }

    pub fn list(elems: Vec<Expr>) -> Self {
        Self::List(ListExpr { elems })
    }

    pub fn column(name: impl Into<String>) -> Self {
        Self::ColumnRef(ColumnRefExpr::new(name))
    }

    /// Attach the span the expression was parsed from
    pub fn at(self, span: Span) -> Expr {
        Spanned::new(self, span)
    }

    /// Statically inferred kind of the expression
    pub fn ql_type_id(&self) -> DataType {
        match self {
            Self::Literal(lit) => lit.data_type(),
            Self::Set(_) => DataType::Set,
            Self::Map(_) => DataType::Map,
            Self::List(_) => DataType::List,
            Self::ColumnRef(col) => col.data_type.unwrap_or(DataType::UnknownData),
        }
    }
}

impl From<Expression> for Expr {
    fn from(expr: Expression) -> Self {
        expr.at(Span::default())
    }
}

/// Set literal
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpr {
    pub elems: Vec<Expr>,
}

impl SetExpr {
    pub fn elems(&self) -> &[Expr] {
        &self.elems
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}

/// Map literal
#[derive(Debug, Clone, PartialEq)]
pub struct MapExpr {
    /// Key/value pairs in source order
    pub entries: Vec<(Expr, Expr)>,
}

impl MapExpr {
    pub fn keys(&self) -> impl Iterator<Item = &Expr> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Expr> {
        self.entries.iter().map(|(_, v)| v)
    }
}

/// List literal
#[derive(Debug, Clone, PartialEq)]
pub struct ListExpr {
    pub elems: Vec<Expr>,
}

impl ListExpr {
    pub fn elems(&self) -> &[Expr] {
        &self.elems
    }
}

/// Column reference
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRefExpr {
    pub name: String,
    /// Kind of the referenced column, filled in once the column is resolved
    pub data_type: Option<DataType>,
}

impl ColumnRefExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
        }
    }

    pub fn resolved(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ql_type_id() {
        assert_eq!(Expression::null().ql_type_id(), DataType::NullValueType);
        assert_eq!(Expression::int(1).ql_type_id(), DataType::Int64);
        assert_eq!(Expression::set(vec![]).ql_type_id(), DataType::Set);
        assert_eq!(Expression::column("v").ql_type_id(), DataType::UnknownData);

        let resolved = Expression::ColumnRef(ColumnRefExpr::new("v").resolved(DataType::Int32));
        assert_eq!(resolved.ql_type_id(), DataType::Int32);
    }

    #[test]
    fn test_map_keys_and_values() {
        let map = MapExpr {
            entries: vec![
                (Expression::string("a").into(), Expression::int(1).into()),
                (Expression::string("b").into(), Expression::int(2).into()),
            ],
        };
        let keys: Vec<DataType> = map.keys().map(|k| k.ql_type_id()).collect();
        let values: Vec<DataType> = map.values().map(|v| v.ql_type_id()).collect();
        assert_eq!(keys, vec![DataType::String, DataType::String]);
        assert_eq!(values, vec![DataType::Int64, DataType::Int64]);
    }
}
