//! Caller-supplied cell value extractors
//!
//! An extractor computes a data cell's value in place of the default
//! text/HTML extraction. The global extractor, when set, applies to every
//! column; otherwise a per-column extractor is looked up by grid column.
//! Extractors never run for header cells.

use scraper::ElementRef;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Strategy computing the value of one cell.
///
/// Returning `Ok(None)` defers to the default text extraction. Errors are
/// reported to the caller as `TableError::Extractor`.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, column: usize, cell: ElementRef<'_>) -> anyhow::Result<Option<String>>;
}

impl<F> TextExtractor for F
where
    F: Fn(usize, ElementRef<'_>) -> anyhow::Result<Option<String>> + Send + Sync,
{
    fn extract(&self, column: usize, cell: ElementRef<'_>) -> anyhow::Result<Option<String>> {
        self(column, cell)
    }
}

/// The set of extractors used by one `TableExtractor`
#[derive(Clone, Default)]
pub struct CellExtractors {
    global: Option<Arc<dyn TextExtractor>>,
    per_column: HashMap<usize, Arc<dyn TextExtractor>>,
}

impl CellExtractors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor applied to every column, taking precedence over per-column ones
    #[must_use]
    pub fn global<F>(self, extractor: F) -> Self
    where
        F: Fn(usize, ElementRef<'_>) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    {
        self.global_with(Arc::new(extractor))
    }

    #[must_use]
    pub fn global_with(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.global = Some(extractor);
        self
    }

    /// Extractor for one grid column, used only when no global extractor is set
    #[must_use]
    pub fn column<F>(self, column: usize, extractor: F) -> Self
    where
        F: Fn(usize, ElementRef<'_>) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    {
        self.column_with(column, Arc::new(extractor))
    }

    #[must_use]
    pub fn column_with(mut self, column: usize, extractor: Arc<dyn TextExtractor>) -> Self {
        self.per_column.insert(column, extractor);
        self
    }

    /// The extractor that applies to `column`, if any
    #[must_use]
    pub fn for_column(&self, column: usize) -> Option<&dyn TextExtractor> {
        self.global
            .as_deref()
            .or_else(|| self.per_column.get(&column).map(Arc::as_ref))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global.is_none() && self.per_column.is_empty()
    }
}

impl fmt::Debug for CellExtractors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut columns: Vec<_> = self.per_column.keys().copied().collect();
        columns.sort_unstable();
        f.debug_struct("CellExtractors")
            .field("global", &self.global.is_some())
            .field("columns", &columns)
            .finish()
    }
}
