//! Setter methods of `TableOptionsBuilder`

use super::builder::TableOptionsBuilder;

impl TableOptionsBuilder {
    /// Drop these zero-based column indexes from the output
    #[must_use]
    pub fn ignore_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.options.ignore_columns = Self::collect_columns(columns);
        self
    }

    /// Keep only these zero-based column indexes.
    ///
    /// A non-empty set overrides `ignore_columns`.
    #[must_use]
    pub fn only_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.options.only_columns = Self::collect_columns(columns);
        self
    }

    #[must_use]
    pub fn ignore_hidden_rows(mut self, ignore: bool) -> Self {
        self.options.ignore_hidden_rows = ignore;
        self
    }

    #[must_use]
    pub fn ignore_empty_rows(mut self, ignore: bool) -> Self {
        self.options.ignore_empty_rows = ignore;
        self
    }

    /// Use these header names instead of deriving them from the first row.
    ///
    /// With explicit headings the first row is extracted as data.
    #[must_use]
    pub fn headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.headings = headings.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn allow_html(mut self, allow: bool) -> Self {
        self.options.allow_html = allow;
        self
    }

    #[must_use]
    pub fn include_row_id(mut self, include: bool) -> Self {
        self.options.include_row_id = include;
        self
    }

    #[must_use]
    pub fn row_id_header(mut self, header: impl Into<String>) -> Self {
        self.options.row_id_header = header.into();
        self
    }

    #[must_use]
    pub fn text_data_override(mut self, attribute: impl Into<String>) -> Self {
        self.options.text_data_override = attribute.into();
        self
    }
}
