pub mod config;
pub mod document;
pub mod table_extractor;
pub mod utils;

pub use config::{TableOptions, TableOptionsBuilder};
pub use document::extract_document_tables;
pub use table_extractor::{
    CellExtractors, GroupedTables, RowRecord, TableError, TableExtractor, TableRecords,
    TableResult, TextExtractor, UngroupedTables, extract_table, extract_tables,
};
