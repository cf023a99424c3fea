//! Execution metadata tracked for each `run` invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LineageRecord;

/// Metadata captured once per component execution.
///
/// Never persisted on its own; it is folded into the output envelope's
/// lineage and carried on the [`ComponentResult`](super::ComponentResult).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// The executing component's name.
    pub component_name: String,
    /// The executing component's version.
    pub component_version: String,
    /// When the execution started.
    pub executed_at: DateTime<Utc>,
    /// The execution id from the run configuration, if any.
    #[serde(default)]
    pub execution_id: Option<String>,
    /// Whether the run was executed in debug mode.
    #[serde(default)]
    pub debug_mode: bool,
    /// Human-readable label for how the input was sourced.
    #[serde(default)]
    pub input_source_kind: Option<String>,
    /// Whether the input was replayed from a saved sample.
    #[serde(default)]
    pub is_replay: bool,
    /// Snapshot of the input envelope's lineage, taken before this
    /// execution appends its own record.
    #[serde(default)]
    pub data_lineage: Vec<LineageRecord>,
}

impl ComponentMetadata {
    /// Creates metadata for one execution, timestamped now.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            component_name: name.into(),
            component_version: version.into(),
            executed_at: Utc::now(),
            execution_id: None,
            debug_mode: false,
            input_source_kind: None,
            is_replay: false,
            data_lineage: Vec::new(),
        }
    }

    /// Sets the execution id.
    #[must_use]
    pub fn with_execution_id(mut self, id: impl Into<String>) -> Self {
        self.execution_id = Some(id.into());
        self
    }

    /// Sets the debug flag.
    #[must_use]
    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    /// Builds the lineage record this execution contributes.
    #[must_use]
    pub fn lineage_record(&self) -> LineageRecord {
        LineageRecord::new(
            &self.component_name,
            &self.component_version,
            self.executed_at,
            self.execution_id.as_deref(),
        )
    }
}
