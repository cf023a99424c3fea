//! Utility functions shared across the harness.

mod timestamps;

pub use timestamps::{format_iso8601, iso_timestamp, sample_timestamp, Timestamp};

/// Generates a new v4 UUID string, useful as an execution id.
#[must_use]
pub fn generate_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}
