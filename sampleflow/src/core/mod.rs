//! Core data structures for self-describing pipeline data.

mod envelope;
mod metadata;
mod result;

#[cfg(test)]
mod envelope_tests;

pub use envelope::{DataEnvelope, DataKind, LineageRecord, Payload, ENVELOPE_VERSION};
pub use metadata::ComponentMetadata;
pub use result::ComponentResult;
