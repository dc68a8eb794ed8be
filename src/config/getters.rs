//! Getter methods for `TableOptions`

use std::collections::BTreeSet;

use super::types::TableOptions;

impl TableOptions {
    #[must_use]
    pub fn ignore_columns(&self) -> &BTreeSet<usize> {
        &self.ignore_columns
    }

    #[must_use]
    pub fn only_columns(&self) -> &BTreeSet<usize> {
        &self.only_columns
    }

    #[must_use]
    pub fn ignore_hidden_rows(&self) -> bool {
        self.ignore_hidden_rows
    }

    #[must_use]
    pub fn ignore_empty_rows(&self) -> bool {
        self.ignore_empty_rows
    }

    #[must_use]
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    #[must_use]
    pub fn allow_html(&self) -> bool {
        self.allow_html
    }

    #[must_use]
    pub fn include_row_id(&self) -> bool {
        self.include_row_id
    }

    #[must_use]
    pub fn row_id_header(&self) -> &str {
        &self.row_id_header
    }

    #[must_use]
    pub fn text_data_override(&self) -> &str {
        &self.text_data_override
    }
}
