//! # Sampleflow
//!
//! A component execution harness for multi-stage data-transformation
//! pipelines, with:
//!
//! - **Universal run contract**: one `run` method accepts mappings, typed
//!   values, envelopes, prior results, other components, named samples, and
//!   file paths
//! - **Schema validation**: statically-defined record schemas with explicit
//!   validate/coerce at both ends of every execution
//! - **Lineage tracking**: append-only execution history carried on every
//!   envelope
//! - **Sample capture/replay**: timestamped, collision-free JSON samples per
//!   component, replayable with no input at all
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sampleflow::prelude::*;
//! use sampleflow::testing::fixtures::TextCleaner;
//!
//! let cleaner = TextCleaner::new("sample_data/text_cleaner")?;
//! let result = cleaner
//!     .run(payload.into(), &RunConfig::debug(true))
//!     .await;
//! assert!(result.is_success());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod component;
pub mod config;
pub mod core;
pub mod errors;
pub mod registry;
pub mod samples;
pub mod schema;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::component::{Component, InputSource, SampleSource};
    pub use crate::config::{RunConfig, SampleSaveMode};
    pub use crate::core::{
        ComponentMetadata, ComponentResult, DataEnvelope, DataKind, LineageRecord, Payload,
    };
    pub use crate::errors::{ComponentError, RegistryError};
    pub use crate::registry::{ComponentRegistry, RegisteredComponent};
    pub use crate::samples::{SampleKind, SampleStore};
    pub use crate::schema::Schema;
    pub use crate::utils::{generate_uuid, iso_timestamp, Timestamp};
}
