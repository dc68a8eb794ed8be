//! Fluent builder for `TableOptions`
//!
//! Every option has a default, so the builder can be built straight away.
//! `build()` validates the string options that must not be empty.

use anyhow::{Result, bail};
use std::collections::BTreeSet;

use super::types::TableOptions;

#[derive(Debug, Clone, Default)]
pub struct TableOptionsBuilder {
    pub(crate) options: TableOptions,
}

impl TableOptions {
    /// Create a builder for configuring `TableOptions` with a fluent interface
    #[must_use]
    pub fn builder() -> TableOptionsBuilder {
        TableOptionsBuilder::default()
    }
}

impl From<TableOptions> for TableOptionsBuilder {
    fn from(options: TableOptions) -> Self {
        Self { options }
    }
}

impl TableOptionsBuilder {
    /// Validate and produce the options
    ///
    /// # Errors
    ///
    /// Returns an error if `row_id_header` or `text_data_override` is blank.
    pub fn build(self) -> Result<TableOptions> {
        let options = self.options;

        if options.row_id_header.trim().is_empty() {
            bail!("Invalid option 'rowIdHeader': header name must not be empty");
        }
        if options.text_data_override.trim().is_empty() {
            bail!("Invalid option 'textDataOverride': attribute name must not be empty");
        }

        Ok(options)
    }

    pub(crate) fn collect_columns(columns: impl IntoIterator<Item = usize>) -> BTreeSet<usize> {
        columns.into_iter().collect()
    }
}
