//! Loading die face tables and dice pools from JSON.

use model::die::DieCatalog;

use crate::error::TableResult;

pub mod catalog;
pub mod error;
pub mod pool;

pub use catalog::parse_catalog;
pub use pool::parse_pool;

/// The bundled face tables for red, black, white and mortal power dice.
pub const REFERENCE_TABLES: &str = include_str!("../data/power_dice.json");

pub fn reference_catalog() -> TableResult<DieCatalog> {
    parse_catalog(REFERENCE_TABLES)
}
