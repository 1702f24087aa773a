//! Day/week/month time bucketing.
//!
//! This module groups transactions into calendar buckets:
//! - Structured period keys that sort on integers, never on rendered labels
//! - ISO-8601 week handling (Monday start, first-Thursday rule)
//! - Bucket accumulation over an optional inclusive date window

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::PeriodService;
pub use types::{Granularity, PeriodBucket, PeriodKey};
