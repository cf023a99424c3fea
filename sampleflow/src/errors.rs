//! Error types for the sampleflow harness.
//!
//! Every error raised between input normalization and output validation is
//! recovered at the `run` boundary and surfaced as a single error string on
//! the [`ComponentResult`](crate::core::ComponentResult); nothing in this
//! taxonomy crosses the engine boundary as a panic.

use thiserror::Error;

/// The main error type for component execution.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// A latest-sample lookup found nothing: replay mode with no persisted
    /// input, or a component reference with no persisted output.
    #[error("no saved {kind} samples found for {component}")]
    NoSavedInput {
        /// The component whose store was consulted.
        component: String,
        /// Which sample kind was looked up.
        kind: crate::samples::SampleKind,
    },

    /// The envelope declares a schema this component does not accept.
    #[error("schema mismatch: expects {expected}, got {actual}")]
    SchemaMismatch {
        /// The schema the component declares as input.
        expected: String,
        /// The schema carried by the envelope.
        actual: String,
    },

    /// The adapted input payload failed validation against the input schema.
    #[error("input validation failed: {0}")]
    InputValidation(String),

    /// The value returned by `process` failed validation against the output schema.
    #[error("output validation failed: {0}")]
    OutputValidation(String),

    /// The component's transformation hook failed.
    #[error("processing failed: {0}")]
    Processing(String),

    /// The input source resolved to a payload shape the engine cannot accept.
    #[error("unsupported input source: {0}")]
    UnsupportedInput(String),

    /// A named sample file does not exist.
    #[error("sample file not found: {path}")]
    SampleNotFound {
        /// The path that was looked up.
        path: String,
    },

    /// Filesystem failure while reading or writing a sample.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A sample or payload could not be serialized or parsed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ComponentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Errors returned by the [`ComponentRegistry`](crate::registry::ComponentRegistry)
/// connectivity check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// One side of the connection was never registered.
    #[error("component '{name}' not registered")]
    NotRegistered {
        /// The missing component name.
        name: String,
    },

    /// The producer's output schema does not match the consumer's input schema.
    #[error("schema mismatch: {from} outputs {output}, {to} expects {input}")]
    SchemaMismatch {
        /// The producing component.
        from: String,
        /// Its declared output schema.
        output: String,
        /// The consuming component.
        to: String,
        /// Its declared input schema.
        input: String,
    },
}
