//! Header derivation
//!
//! Headers come either verbatim from `TableOptions::headings` or from the
//! cells of the table's first row, in document order. Derived headers are
//! filtered with the same column rule as values; explicit headings never are.
//!
//! Row values carry the row id only when the headers have room for it: a
//! derived `rowIdHeader` was emitted, or explicit headings are paired with
//! `include_row_id`.

use scraper::ElementRef;
use tracing::trace;

use super::cells::resolve_cell_value;
use crate::config::TableOptions;
use crate::utils::direct_cells;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Headers {
    names: Vec<String>,
    derived: bool,
    row_id: bool,
}

impl Headers {
    /// Build the header list for a table whose first row is `first_row`
    pub(crate) fn derive(first_row: ElementRef<'_>, options: &TableOptions) -> Self {
        if options.has_explicit_headings() {
            return Self {
                names: options.headings().to_vec(),
                derived: false,
                row_id: options.include_row_id(),
            };
        }

        let mut names = Vec::new();
        if options.include_row_id() && first_row.value().attr("id").is_none() {
            names.push(options.row_id_header().to_string());
        }

        let row_id = !names.is_empty();
        for (index, cell) in direct_cells(first_row).into_iter().enumerate() {
            if options.is_ignored_column(index) {
                continue;
            }
            // Header cells never reach caller extractors, so this cannot fail
            let name = resolve_cell_value(cell, index, options, None).unwrap_or_default();
            names.push(name);
        }

        trace!("derived {} headers (row id: {})", names.len(), row_id);

        Self {
            names,
            derived: true,
            row_id,
        }
    }

    /// True when the first row supplied the headers and is not data
    pub(crate) fn is_derived(&self) -> bool {
        self.derived
    }

    /// True when row values must start with the row id
    pub(crate) fn includes_row_id(&self) -> bool {
        self.row_id
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn headers(html: &str, options: &TableOptions) -> Headers {
        let doc = Html::parse_document(html);
        let selector = Selector::parse("tr").unwrap();
        let row = doc.select(&selector).next().unwrap();
        Headers::derive(row, options)
    }

    #[test]
    fn test_derived_from_first_row() {
        let h = headers(
            "<table><tr><th> Name </th><th>Age</th></tr></table>",
            &TableOptions::default(),
        );
        assert!(h.is_derived());
        assert_eq!(h.names(), ["Name", "Age"]);
    }

    #[test]
    fn test_explicit_headings_used_verbatim() {
        let options = TableOptions::builder()
            .headings([" A ", "B"])
            .ignore_columns([0])
            .build()
            .unwrap();
        let h = headers("<table><tr><td>x</td><td>y</td></tr></table>", &options);
        assert!(!h.is_derived());
        assert_eq!(h.names(), [" A ", "B"]);
    }

    #[test]
    fn test_row_id_header_prepended() {
        let options = TableOptions::builder()
            .include_row_id(true)
            .row_id_header("key")
            .build()
            .unwrap();
        let h = headers("<table><tr><th>A</th></tr></table>", &options);
        assert_eq!(h.names(), ["key", "A"]);
        assert!(h.includes_row_id());

        let h = headers("<table><tr id=\"head\"><th>A</th></tr></table>", &options);
        assert_eq!(h.names(), ["A"]);
        assert!(!h.includes_row_id());
    }

    #[test]
    fn test_explicit_headings_take_row_id_when_enabled() {
        let options = TableOptions::builder()
            .headings(["id", "A"])
            .include_row_id(true)
            .build()
            .unwrap();
        let h = headers("<table><tr id=\"r0\"><td>x</td></tr></table>", &options);
        assert!(h.includes_row_id());

        let h = headers(
            "<table><tr><td>x</td></tr></table>",
            &TableOptions::builder().headings(["A"]).build().unwrap(),
        );
        assert!(!h.includes_row_id());
    }

    #[test]
    fn test_derived_headers_filtered() {
        let options = TableOptions::builder().only_columns([1]).build().unwrap();
        let h = headers(
            "<table><tr><th>A</th><th>B</th><th>C</th></tr></table>",
            &options,
        );
        assert_eq!(h.names(), ["B"]);
    }
}
