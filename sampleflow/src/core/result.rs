//! Typed result returned by a component execution.

use serde::{Deserialize, Serialize};

use super::{ComponentMetadata, DataEnvelope};

/// The outcome of one `run` invocation.
///
/// Exactly one of `data` and `error` is present: a success carries the
/// validated output value (and an output envelope), a failure carries a
/// formatted error string and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentResult<T> {
    /// The validated output value. Absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Metadata for this execution.
    pub metadata: ComponentMetadata,
    /// Error message. Absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Non-fatal warnings collected during the run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// The output envelope. Present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<DataEnvelope>,
}

impl<T> ComponentResult<T> {
    /// Creates a successful result.
    #[must_use]
    pub fn success(data: T, metadata: ComponentMetadata, envelope: DataEnvelope) -> Self {
        Self {
            data: Some(data),
            metadata,
            error: None,
            warnings: Vec::new(),
            envelope: Some(envelope),
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failure(metadata: ComponentMetadata, error: impl Into<String>) -> Self {
        Self {
            data: None,
            metadata,
            error: Some(error.into()),
            warnings: Vec::new(),
            envelope: None,
        }
    }

    /// Appends warnings to the result.
    #[must_use]
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Returns true if the execution succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns true if the execution failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataEnvelope, DataKind, Payload};

    fn metadata() -> ComponentMetadata {
        ComponentMetadata::new("test_component", "1.0.0")
    }

    #[test]
    fn test_success_has_data_and_no_error() {
        let envelope = DataEnvelope::new(DataKind::ComponentOutput, Payload::new());
        let result = ComponentResult::success(42_u32, metadata(), envelope);

        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.data, Some(42));
        assert!(result.error.is_none());
        assert!(result.envelope.is_some());
    }

    #[test]
    fn test_failure_has_error_and_no_data() {
        let result: ComponentResult<u32> = ComponentResult::failure(metadata(), "boom");

        assert!(result.is_failure());
        assert!(result.data.is_none());
        assert!(result.envelope.is_none());
        assert_eq!(result.error.as_deref(), Some("boom"));
    }
}
