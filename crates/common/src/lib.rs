//! Shared types for the dashboard metrics API.

mod types;

pub use types::MetricRecord;
