//! HTML table to row records
//!
//! `TableExtractor` turns a `<table>` element into an ordered sequence of
//! `RowRecord`s keyed by header name. The pipeline for one table:
//!
//! 1. derive headers (explicit `headings` or the first row)
//! 2. flatten colspan/rowspan for the whole table into a `SpanGrid`
//! 3. visit rows top to bottom, skipping header/hidden/empty/ignored rows
//! 4. resolve each grid slot's value through the anchor cell covering it
//! 5. apply column filtering and zip values against the headers
//!
//! Tables are independent of each other; a failing table does not affect
//! its siblings in `extract_tables`.

mod cells;
pub mod errors;
pub mod extractors;
mod grid;
mod headers;
pub mod record;
mod rows;

pub use errors::{TableError, TableResult};
pub use extractors::{CellExtractors, TextExtractor};
pub use record::{GroupedTables, RowRecord, TableRecords, UngroupedTables};

use ego_tree::NodeId;
use scraper::ElementRef;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use crate::config::TableOptions;
use crate::utils::table_rows;
use cells::resolve_cell_value;
use grid::{Anchor, SpanGrid};
use headers::Headers;
use rows::row_skip_reason;

/// Extracts row records from HTML tables with fixed options and extractors
#[derive(Debug, Clone, Default)]
pub struct TableExtractor {
    options: TableOptions,
    extractors: CellExtractors,
}

impl TableExtractor {
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        Self {
            options,
            extractors: CellExtractors::default(),
        }
    }

    #[must_use]
    pub fn with_extractors(options: TableOptions, extractors: CellExtractors) -> Self {
        Self {
            options,
            extractors,
        }
    }

    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    #[must_use]
    pub fn extractors(&self) -> &CellExtractors {
        &self.extractors
    }

    /// Extract one table.
    ///
    /// # Errors
    ///
    /// `MissingTable` when the node has no rows, `InvalidSpanValue` for a
    /// malformed span, `Extractor` when a caller extractor fails and
    /// `TableTooLarge` when span expansion exceeds the grid limit.
    pub fn extract_table(&self, table: ElementRef<'_>) -> TableResult<TableRecords> {
        self.extract_indexed(0, table)
    }

    /// Extract every table independently, in input order.
    ///
    /// Errors are reported per table and carry the table's position.
    pub fn extract_tables<'a, I>(&self, tables: I) -> Vec<TableResult<TableRecords>>
    where
        I: IntoIterator<Item = ElementRef<'a>>,
    {
        tables
            .into_iter()
            .enumerate()
            .map(|(index, table)| {
                let result = self.extract_indexed(index, table);
                if let Err(e) = &result {
                    warn!("Failed to extract table {}: {}", index, e);
                }
                result
            })
            .collect()
    }

    fn extract_indexed(&self, index: usize, table: ElementRef<'_>) -> TableResult<TableRecords> {
        let rows = table_rows(table);
        let Some(first_row) = rows.first() else {
            return Err(TableError::MissingTable { table: index });
        };

        let headers = Headers::derive(*first_row, &self.options);
        let grid = SpanGrid::build(&rows, index)?;

        let mut pass = TablePass {
            table: index,
            options: &self.options,
            extractors: &self.extractors,
            grid: &grid,
            resolved: HashMap::new(),
        };

        let mut records = Vec::new();
        for (row_idx, row) in rows.iter().enumerate() {
            if let Some(reason) =
                row_skip_reason(*row, row_idx, headers.is_derived(), &self.options)
            {
                debug!("table {}: skipping row {} ({:?})", index, row_idx, reason);
                continue;
            }

            let values = pass.row_values(*row, row_idx, headers.includes_row_id())?;
            records.push(assemble_record(headers.names(), &values));
        }

        debug!(
            "table {}: {} records from {} rows x {} columns",
            index,
            records.len(),
            rows.len(),
            grid.width()
        );

        Ok(records)
    }
}

/// Per-table state while rows are visited top to bottom
struct TablePass<'t, 'a> {
    table: usize,
    options: &'t TableOptions,
    extractors: &'t CellExtractors,
    grid: &'t SpanGrid<'a>,
    /// Resolved anchor values, so a spanned cell is computed once
    resolved: HashMap<NodeId, String>,
}

impl<'a> TablePass<'_, 'a> {
    /// Values for one row keyed by output position after column filtering.
    ///
    /// Only occupied slots are visited; a position no cell covers has no entry.
    fn row_values(
        &mut self,
        row: ElementRef<'a>,
        row_idx: usize,
        with_row_id: bool,
    ) -> TableResult<BTreeMap<usize, String>> {
        let mut values = BTreeMap::new();
        let mut offset = 0;

        if with_row_id {
            let id = row.value().attr("id").unwrap_or_default();
            values.insert(0, id.trim().to_string());
            offset = 1;
        }

        let grid = self.grid;
        for (column, anchor) in grid.row_slots(row_idx) {
            if let Some(position) = self.options.output_position(column) {
                let value = self.anchor_value(anchor)?;
                values.insert(position + offset, value);
            }
        }

        Ok(values)
    }

    fn anchor_value(&mut self, anchor: Anchor<'a>) -> TableResult<String> {
        let id = anchor.element.id();
        if let Some(value) = self.resolved.get(&id) {
            return Ok(value.clone());
        }

        let value = resolve_cell_value(
            anchor.element,
            anchor.column,
            self.options,
            Some(self.extractors),
        )
        .map_err(|source| TableError::Extractor {
            table: self.table,
            row: anchor.row,
            column: anchor.column,
            source,
        })?;

        self.resolved.insert(id, value.clone());
        Ok(value)
    }
}

/// Pair the i-th header with the value at position i.
///
/// A header whose value is absent is left out of the record; values past
/// the last header are dropped.
fn assemble_record(headers: &[String], values: &BTreeMap<usize, String>) -> RowRecord {
    headers
        .iter()
        .enumerate()
        .filter_map(|(i, header)| values.get(&i).map(|v| (header.clone(), v.clone())))
        .collect()
}

/// Extract one table with default extractors.
///
/// # Errors
///
/// See [`TableExtractor::extract_table`].
pub fn extract_table(table: ElementRef<'_>, options: &TableOptions) -> TableResult<TableRecords> {
    TableExtractor::new(options.clone()).extract_table(table)
}

/// Extract several tables with default extractors, one result per table.
pub fn extract_tables<'a, I>(tables: I, options: &TableOptions) -> Vec<TableResult<TableRecords>>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    TableExtractor::new(options.clone()).extract_tables(tables)
}
