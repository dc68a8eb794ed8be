//! Row validity filtering

use scraper::ElementRef;

use crate::config::TableOptions;
use crate::utils::{IGNORE_ROW_ATTRIBUTE, direct_cells, is_hidden, is_truthy};

/// Why a row is left out of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowSkip {
    HeaderRow,
    Hidden,
    Empty,
    Ignored,
}

/// Decide whether the row at `index` produces a record.
///
/// Returns the reason when it does not.
pub(crate) fn row_skip_reason(
    row: ElementRef<'_>,
    index: usize,
    headers_derived: bool,
    options: &TableOptions,
) -> Option<RowSkip> {
    if index == 0 && headers_derived {
        return Some(RowSkip::HeaderRow);
    }
    if options.ignore_hidden_rows() && is_hidden(row) {
        return Some(RowSkip::Hidden);
    }
    if options.ignore_empty_rows() && is_empty_row(row) {
        return Some(RowSkip::Empty);
    }
    if row
        .value()
        .attr(IGNORE_ROW_ATTRIBUTE)
        .is_some_and(is_truthy)
    {
        return Some(RowSkip::Ignored);
    }
    None
}

/// Every `<td>` of the row has empty trimmed text
fn is_empty_row(row: ElementRef<'_>) -> bool {
    direct_cells(row)
        .into_iter()
        .filter(|cell| cell.value().name() == "td")
        .all(|cell| cell.text().all(|chunk| chunk.trim().is_empty()))
}
