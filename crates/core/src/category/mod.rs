//! Per-category aggregation and ranked breakdowns.

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::{CategoryService, UNCATEGORIZED};
pub use types::CategoryBreakdownEntry;
