//! Callbacks into the statement being analyzed

use ycql_ast::ParseTree;
use ycql_types::TableName;

use crate::ColumnDesc;

/// Receiver of the facts semantic analysis records about a statement
pub trait StatementTree {
    /// A table was consulted while analyzing the statement
    fn add_analyzed_table(&mut self, name: &TableName);

    /// A column must be read from storage to execute the statement
    fn add_column_ref(&mut self, column: &ColumnDesc);
}

impl StatementTree for ParseTree {
    fn add_analyzed_table(&mut self, name: &TableName) {
        ParseTree::add_analyzed_table(self, name.clone());
    }

    fn add_column_ref(&mut self, column: &ColumnDesc) {
        if ParseTree::add_column_ref(self, column.id()) {
            log::trace!("Column {} added to read set", column.id());
        }
    }
}
