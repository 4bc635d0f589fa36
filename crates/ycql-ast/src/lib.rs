//! YCQL statement tree definitions
//!
//! This crate defines the parse-tree nodes that semantic analysis reads:
//! expressions with their statically inferred kinds, DDL column and table
//! definitions, and the per-statement bookkeeping the analyzer writes back.

mod ddl;
mod expression;
mod literal;
mod tree;

pub use ddl::*;
pub use expression::*;
pub use literal::*;
pub use tree::*;

pub use ycql_diagnostics::Span;

/// A node with source span information
pub type Spanned<T> = ycql_diagnostics::Spanned<T>;

/// An expression node together with its span
pub type Expr = Spanned<Expression>;
