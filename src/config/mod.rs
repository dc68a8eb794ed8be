//! Configuration module for table extraction
//!
//! This module provides the `TableOptions` struct and its fluent builder
//! with validation and the documented defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::TableOptionsBuilder;
pub use types::TableOptions;
