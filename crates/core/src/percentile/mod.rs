//! Peer percentile comparison.

pub mod service;


pub use service::PercentileService;
