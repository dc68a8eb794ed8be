//! Span flattening over a sparse row/column map
//!
//! Every source cell is recorded once as an anchor at its (row, column)
//! origin. `colspan`/`rowspan` then map each covered grid slot back to that
//! anchor, so downstream code sees one explicit entry per physical column
//! position without the DOM ever being modified.
//!
//! Layout follows the usual HTML table model: rows are visited top to
//! bottom, and each cell is placed at the first column of its row not
//! already covered by a rowspan from above. A cell's colspan in its own row
//! replaces any rowspan reaching into those slots; in the rows below it, a
//! slot that is already occupied keeps its first owner.

use scraper::ElementRef;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::errors::{TableError, TableResult};
use crate::utils::{MAX_COLSPAN, MAX_GRID_SLOTS, MAX_ROWSPAN, direct_cells};

/// A source cell placed at its origin slot
#[derive(Debug, Clone, Copy)]
pub(crate) struct Anchor<'a> {
    pub(crate) element: ElementRef<'a>,
    pub(crate) row: usize,
    pub(crate) column: usize,
}

#[derive(Debug)]
pub(crate) struct SpanGrid<'a> {
    anchors: Vec<Anchor<'a>>,
    /// Per row, occupied column -> anchor index
    slots: Vec<BTreeMap<usize, usize>>,
    width: usize,
}

impl<'a> SpanGrid<'a> {
    /// Lay out `rows` into the grid, expanding every span.
    ///
    /// # Errors
    ///
    /// `InvalidSpanValue` for a span that is not a positive integer and
    /// `TableTooLarge` when the expanded grid would exceed `MAX_GRID_SLOTS`.
    pub(crate) fn build(rows: &[ElementRef<'a>], table: usize) -> TableResult<Self> {
        let mut grid = Self {
            anchors: Vec::new(),
            slots: vec![BTreeMap::new(); rows.len()],
            width: 0,
        };
        let mut total_slots = 0usize;

        for (row_idx, row) in rows.iter().enumerate() {
            let mut col_idx = 0usize;

            for cell in direct_cells(*row) {
                // Skip columns occupied by rowspans from previous rows
                while grid.slots[row_idx].contains_key(&col_idx) {
                    col_idx += 1;
                }

                let colspan = parse_span(cell, "colspan", table, row_idx, col_idx)?.min(MAX_COLSPAN);
                let mut rowspan =
                    parse_span(cell, "rowspan", table, row_idx, col_idx)?.min(MAX_ROWSPAN);

                let rows_left = rows.len() - row_idx;
                if rowspan > rows_left {
                    debug!(
                        "rowspan {} at table {}, row {}, column {} runs past the last row, clipping to {}",
                        rowspan, table, row_idx, col_idx, rows_left
                    );
                    rowspan = rows_left;
                }

                total_slots = total_slots.saturating_add(colspan.saturating_mul(rowspan));
                if total_slots > MAX_GRID_SLOTS {
                    return Err(TableError::TableTooLarge {
                        table,
                        cells: total_slots,
                        limit: MAX_GRID_SLOTS,
                    });
                }

                let anchor_idx = grid.anchors.len();
                grid.anchors.push(Anchor {
                    element: cell,
                    row: row_idx,
                    column: col_idx,
                });

                // The origin row can only hold rowspans from earlier rows here
                for c in col_idx..col_idx + colspan {
                    grid.slots[row_idx].insert(c, anchor_idx);
                }
                for r in row_idx + 1..row_idx + rowspan {
                    for c in col_idx..col_idx + colspan {
                        grid.slots[r].entry(c).or_insert(anchor_idx);
                    }
                }

                col_idx += colspan;
                grid.width = grid.width.max(col_idx);
            }
        }

        trace!(
            "table {}: {} rows x {} columns, {} anchors",
            table,
            rows.len(),
            grid.width,
            grid.anchors.len()
        );

        Ok(grid)
    }

    /// Number of columns after span expansion
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// The cell covering (row, column), if any
    #[cfg(test)]
    pub(crate) fn slot(&self, row: usize, column: usize) -> Option<&Anchor<'a>> {
        self.slots
            .get(row)
            .and_then(|row| row.get(&column))
            .and_then(|&idx| self.anchors.get(idx))
    }

    /// Occupied slots of `row` in column order, skipping holes
    pub(crate) fn row_slots(&self, row: usize) -> impl Iterator<Item = (usize, Anchor<'a>)> + '_ {
        self.slots
            .get(row)
            .into_iter()
            .flatten()
            .filter_map(|(&column, &idx)| self.anchors.get(idx).map(|anchor| (column, *anchor)))
    }
}

/// Read a span attribute, defaulting to 1 when absent
fn parse_span(
    cell: ElementRef<'_>,
    attribute: &'static str,
    table: usize,
    row: usize,
    column: usize,
) -> TableResult<usize> {
    let Some(raw) = cell.value().attr(attribute) else {
        return Ok(1);
    };

    match raw.trim().parse::<usize>() {
        Ok(span) if span > 0 => Ok(span),
        _ => Err(TableError::InvalidSpanValue {
            attribute,
            value: raw.to_string(),
            table,
            row,
            column,
        }),
    }
}
