//! The universal data envelope and its lineage records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The envelope format version written into every persisted sample.
pub const ENVELOPE_VERSION: &str = "1.0";

/// The payload carried by an envelope: an untyped key-value mapping.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Classifies the data wrapped by a [`DataEnvelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    /// Data that has not passed through any component yet.
    RawData,
    /// A component's validated input.
    ComponentInput,
    /// A component's validated output.
    ComponentOutput,
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RawData => write!(f, "raw_data"),
            Self::ComponentInput => write!(f, "component_input"),
            Self::ComponentOutput => write!(f, "component_output"),
        }
    }
}

/// One entry in an envelope's execution history.
///
/// Records are appended in execution order and never reordered or
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageRecord {
    /// The component that executed.
    pub component: String,
    /// Its version.
    pub version: String,
    /// When it executed, as an ISO-8601 string.
    pub timestamp: String,
    /// The execution id, or an empty string when none was supplied.
    #[serde(default)]
    pub execution_id: String,
}

impl LineageRecord {
    /// Creates a lineage record for one component execution.
    #[must_use]
    pub fn new(
        component: impl Into<String>,
        version: impl Into<String>,
        executed_at: DateTime<Utc>,
        execution_id: Option<&str>,
    ) -> Self {
        Self {
            component: component.into(),
            version: version.into(),
            timestamp: crate::utils::format_iso8601(&executed_at),
            execution_id: execution_id.unwrap_or_default().to_string(),
        }
    }
}

/// Universal wrapper for all pipeline data with rich metadata.
///
/// Envelopes are immutable by convention: lineage grows only by copying the
/// prior list and appending one record, and persisted envelopes are never
/// deleted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope {
    /// Format version of the envelope itself.
    #[serde(default = "default_envelope_version")]
    pub envelope_version: String,

    /// What kind of data this envelope carries.
    pub data_type: DataKind,

    /// The component that produced this data, if any.
    #[serde(default)]
    pub component_name: Option<String>,
    /// Version of the producing component.
    #[serde(default)]
    pub component_version: Option<String>,

    /// Free-form classification tags.
    #[serde(default)]
    pub data_tags: Vec<String>,

    /// Name of the schema the payload conforms to, if known.
    #[serde(default)]
    pub schema_name: Option<String>,
    /// Version of that schema.
    #[serde(default)]
    pub schema_version: Option<String>,

    /// The execution this envelope belongs to.
    #[serde(default)]
    pub execution_id: Option<String>,

    /// When the envelope was created.
    pub timestamp: DateTime<Utc>,

    /// Free-form description of where the data came from.
    #[serde(default)]
    pub source_info: Option<Payload>,

    /// Append-only execution history.
    #[serde(default)]
    pub lineage: Vec<LineageRecord>,

    /// The actual data. Always present, possibly empty.
    pub data: Payload,
}

fn default_envelope_version() -> String {
    ENVELOPE_VERSION.to_string()
}

impl DataEnvelope {
    /// Creates a new envelope around a payload, timestamped now.
    #[must_use]
    pub fn new(data_type: DataKind, data: Payload) -> Self {
        Self {
            envelope_version: ENVELOPE_VERSION.to_string(),
            data_type,
            component_name: None,
            component_version: None,
            data_tags: Vec::new(),
            schema_name: None,
            schema_version: None,
            execution_id: None,
            timestamp: Utc::now(),
            source_info: None,
            lineage: Vec::new(),
            data,
        }
    }

    /// Wraps a raw payload that has not passed through any component.
    #[must_use]
    pub fn raw(data: Payload) -> Self {
        Self::new(DataKind::RawData, data)
    }

    /// Sets the producing component's name and version.
    #[must_use]
    pub fn with_component(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.component_name = Some(name.into());
        self.component_version = Some(version.into());
        self
    }

    /// Sets the schema name.
    #[must_use]
    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = Some(name.into());
        self
    }

    /// Sets the execution id.
    #[must_use]
    pub fn with_execution_id(mut self, id: impl Into<String>) -> Self {
        self.execution_id = Some(id.into());
        self
    }

    /// Sets the envelope timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the source-info map.
    #[must_use]
    pub fn with_source_info(mut self, info: Payload) -> Self {
        self.source_info = Some(info);
        self
    }

    /// Replaces the lineage with the given history.
    #[must_use]
    pub fn with_lineage(mut self, lineage: Vec<LineageRecord>) -> Self {
        self.lineage = lineage;
        self
    }

    /// Returns a copy of the lineage with one record appended.
    ///
    /// The envelope itself is not mutated.
    #[must_use]
    pub fn lineage_with(&self, record: LineageRecord) -> Vec<LineageRecord> {
        let mut lineage = self.lineage.clone();
        lineage.push(record);
        lineage
    }
}
