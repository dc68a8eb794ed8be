//! Cell value resolution
//!
//! Precedence, first match wins:
//! 1. the override attribute (`data-override` by default), even when empty
//! 2. the global extractor, else the extractor registered for the column
//! 3. inner HTML when `allow_html` is set, inner text otherwise
//!
//! The result is always trimmed.

use scraper::ElementRef;

use super::extractors::CellExtractors;
use crate::config::TableOptions;

/// Resolve a cell's value.
///
/// `extractors` is `None` for header cells, which never go through
/// caller-supplied extractors.
///
/// # Errors
///
/// Propagates the error of a failing extractor unchanged.
pub(crate) fn resolve_cell_value(
    cell: ElementRef<'_>,
    column: usize,
    options: &TableOptions,
    extractors: Option<&CellExtractors>,
) -> anyhow::Result<String> {
    if let Some(value) = cell.value().attr(options.text_data_override()) {
        return Ok(value.trim().to_string());
    }

    if let Some(extractor) = extractors.and_then(|ex| ex.for_column(column)) {
        if let Some(value) = extractor.extract(column, cell)? {
            return Ok(value.trim().to_string());
        }
    }

    Ok(default_cell_value(cell, options.allow_html()))
}

/// Default text of a cell: trimmed inner HTML or inner text
pub(crate) fn default_cell_value(cell: ElementRef<'_>, allow_html: bool) -> String {
    if allow_html {
        cell.inner_html().trim().to_string()
    } else {
        cell.text().collect::<String>().trim().to_string()
    }
}
