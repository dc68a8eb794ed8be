//! Core option types for table extraction
//!
//! `TableOptions` carries the plain-data options. Extractor functions are
//! kept out of it (see `CellExtractors`) so options stay serialisable and
//! can be shared freely between extractions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::utils::{DEFAULT_ROW_ID_HEADER, DEFAULT_TEXT_DATA_OVERRIDE};

/// Options controlling how a `<table>` is turned into row records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Zero-based column indexes dropped from the output
    pub(crate) ignore_columns: BTreeSet<usize>,

    /// When non-empty, only these column indexes are kept.
    ///
    /// Takes precedence over `ignore_columns`.
    pub(crate) only_columns: BTreeSet<usize>,

    /// Skip rows that are hidden (`hidden` attribute or `display: none`)
    ///
    /// Default: true
    pub(crate) ignore_hidden_rows: bool,

    /// Skip rows whose `<td>` cells are all empty
    ///
    /// Default: false
    pub(crate) ignore_empty_rows: bool,

    /// Explicit header names.
    ///
    /// When supplied every row, including the first, is treated as data and
    /// the headings are paired with values without column filtering.
    pub(crate) headings: Vec<String>,

    /// Keep a cell's inner HTML instead of its text
    pub(crate) allow_html: bool,

    /// Prepend each row's `id` attribute as a leading field
    pub(crate) include_row_id: bool,

    /// Header name of the row-id field
    pub(crate) row_id_header: String,

    /// Cell attribute whose value, when present, replaces the cell value
    pub(crate) text_data_override: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            ignore_columns: BTreeSet::new(),
            only_columns: BTreeSet::new(),
            ignore_hidden_rows: true,
            ignore_empty_rows: false,
            headings: Vec::new(),
            allow_html: false,
            include_row_id: false,
            row_id_header: DEFAULT_ROW_ID_HEADER.to_string(),
            text_data_override: DEFAULT_TEXT_DATA_OVERRIDE.to_string(),
        }
    }
}

impl TableOptions {
    /// Whether column `index` is filtered out of the output.
    ///
    /// `only_columns` wins whenever it is non-empty.
    #[must_use]
    pub fn is_ignored_column(&self, index: usize) -> bool {
        if self.only_columns.is_empty() {
            self.ignore_columns.contains(&index)
        } else {
            !self.only_columns.contains(&index)
        }
    }

    /// Position of column `index` among the columns kept by filtering,
    /// `None` when the column is filtered out
    #[must_use]
    pub fn output_position(&self, index: usize) -> Option<usize> {
        if self.is_ignored_column(index) {
            return None;
        }
        if self.only_columns.is_empty() {
            Some(index - self.ignore_columns.range(..index).count())
        } else {
            Some(self.only_columns.range(..index).count())
        }
    }

    /// True when headers come from `headings` instead of the first row
    #[must_use]
    pub fn has_explicit_headings(&self) -> bool {
        !self.headings.is_empty()
    }
}
