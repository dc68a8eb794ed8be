//! Error types for table extraction
//!
//! Every error is scoped to one table. Positions are zero-based: `table` is
//! the index of the table in the extraction call, `row` the index among the
//! table's rows and `column` the span-expanded grid column.

use thiserror::Error;

/// Result type alias for table extraction
pub type TableResult<T> = Result<T, TableError>;

#[derive(Debug, Error)]
pub enum TableError {
    /// `rowspan`/`colspan` is not a positive integer
    #[error(
        "Invalid {attribute} value '{value}' in table {table}, row {row}, column {column}: expected a positive integer"
    )]
    InvalidSpanValue {
        attribute: &'static str,
        value: String,
        table: usize,
        row: usize,
        column: usize,
    },

    /// The node has no rows
    #[error("Table {table} has no rows")]
    MissingTable { table: usize },

    /// A caller-supplied extractor failed; the original error is the source
    #[error("Cell extractor failed in table {table}, row {row}, column {column}: {source}")]
    Extractor {
        table: usize,
        row: usize,
        column: usize,
        #[source]
        source: anyhow::Error,
    },

    /// Span expansion would exceed the grid limit
    #[error("Table {table} too large: {cells} grid cells exceeds maximum {limit}")]
    TableTooLarge {
        table: usize,
        cells: usize,
        limit: usize,
    },
}

impl TableError {
    /// Index of the table this error belongs to
    #[must_use]
    pub fn table_index(&self) -> usize {
        match self {
            TableError::InvalidSpanValue { table, .. }
            | TableError::MissingTable { table }
            | TableError::Extractor { table, .. }
            | TableError::TableTooLarge { table, .. } => *table,
        }
    }
}
