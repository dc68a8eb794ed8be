//! Shared constants for table extraction
//!
//! Default option values and the grid limits used when flattening spans.

/// Header name used for the synthetic row-id field
pub const DEFAULT_ROW_ID_HEADER: &str = "rowId";

/// Cell attribute whose value replaces the computed cell value
pub const DEFAULT_TEXT_DATA_OVERRIDE: &str = "data-override";

/// Row attribute that excludes a row from the output when truthy
pub const IGNORE_ROW_ATTRIBUTE: &str = "data-ignore";

/// Largest `colspan` honoured; larger values are clamped (HTML limit).
pub const MAX_COLSPAN: usize = 1000;

/// Largest `rowspan` honoured; larger values are clamped (HTML limit).
pub const MAX_ROWSPAN: usize = 65_534;

/// Maximum number of grid slots a single table may expand to.
///
/// A handful of cells with large colspan/rowspan values can otherwise
/// allocate an arbitrarily large grid.
pub const MAX_GRID_SLOTS: usize = 1_000_000;
