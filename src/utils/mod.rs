pub mod constants;
pub mod dom_utils;

pub use constants::*;
pub use dom_utils::{direct_cells, is_hidden, is_truthy, table_rows};
