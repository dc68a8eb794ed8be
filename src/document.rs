//! Whole-document convenience entry points
//!
//! Parses an HTML string with `scraper` and extracts every `<table>` in
//! document order. Nested tables are extracted as tables of their own.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::TableOptions;
use crate::table_extractor::{TableExtractor, TableRecords, TableResult};

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table")
        .expect("BUG: hardcoded selector 'table' is statically valid")
});

impl TableExtractor {
    /// Extract every table found in `html`, one result per table
    pub fn extract_document(&self, html: &str) -> Vec<TableResult<TableRecords>> {
        let document = Html::parse_document(html);
        self.extract_tables(document.select(&TABLE_SELECTOR))
    }
}

/// Extract every table in an HTML document with default extractors
pub fn extract_document_tables(
    html: &str,
    options: &TableOptions,
) -> Vec<TableResult<TableRecords>> {
    TableExtractor::new(options.clone()).extract_document(html)
}
