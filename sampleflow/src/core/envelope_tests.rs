//! Tests for envelope construction, lineage, and serialization.

use chrono::Utc;
use pretty_assertions::assert_eq;

use super::{DataEnvelope, DataKind, LineageRecord, Payload, ENVELOPE_VERSION};

fn payload(pairs: &[(&str, &str)]) -> Payload {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), serde_json::json!(v)))
        .collect()
}

#[test]
fn test_new_envelope_defaults() {
    let envelope = DataEnvelope::raw(payload(&[("text", "hello")]));

    assert_eq!(envelope.envelope_version, ENVELOPE_VERSION);
    assert_eq!(envelope.data_type, DataKind::RawData);
    assert!(envelope.component_name.is_none());
    assert!(envelope.schema_name.is_none());
    assert!(envelope.lineage.is_empty());
    assert_eq!(envelope.data.len(), 1);
}

#[test]
fn test_builder_setters() {
    let envelope = DataEnvelope::new(DataKind::ComponentOutput, Payload::new())
        .with_component("text_cleaner", "1.0.0")
        .with_schema_name("CleanedText")
        .with_execution_id("run_42");

    assert_eq!(envelope.component_name.as_deref(), Some("text_cleaner"));
    assert_eq!(envelope.component_version.as_deref(), Some("1.0.0"));
    assert_eq!(envelope.schema_name.as_deref(), Some("CleanedText"));
    assert_eq!(envelope.execution_id.as_deref(), Some("run_42"));
}

#[test]
fn test_lineage_with_copies_instead_of_mutating() {
    let record = LineageRecord::new("a", "1.0.0", Utc::now(), None);
    let envelope = DataEnvelope::raw(Payload::new()).with_lineage(vec![record.clone()]);

    let extended = envelope.lineage_with(LineageRecord::new("b", "1.0.0", Utc::now(), Some("x")));

    assert_eq!(envelope.lineage.len(), 1);
    assert_eq!(extended.len(), 2);
    assert_eq!(extended[0], record);
    assert_eq!(extended[1].component, "b");
    assert_eq!(extended[1].execution_id, "x");
}

#[test]
fn test_lineage_record_empty_execution_id() {
    let record = LineageRecord::new("a", "1.0.0", Utc::now(), None);
    assert_eq!(record.execution_id, "");
}

#[test]
fn test_data_kind_serde_strings() {
    assert_eq!(
        serde_json::to_string(&DataKind::ComponentInput).unwrap(),
        "\"component_input\""
    );
    assert_eq!(
        serde_json::from_str::<DataKind>("\"raw_data\"").unwrap(),
        DataKind::RawData
    );
    assert_eq!(DataKind::ComponentOutput.to_string(), "component_output");
}

#[test]
fn test_envelope_json_round_trip() {
    let envelope = DataEnvelope::new(DataKind::ComponentInput, payload(&[("text", "hi")]))
        .with_component("text_cleaner", "1.0.0")
        .with_schema_name("TextInput")
        .with_lineage(vec![LineageRecord::new("loader", "1.0.0", Utc::now(), None)]);

    let json = serde_json::to_string_pretty(&envelope).unwrap();
    let parsed: DataEnvelope = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.envelope_version, envelope.envelope_version);
    assert_eq!(parsed.data_type, envelope.data_type);
    assert_eq!(parsed.component_name, envelope.component_name);
    assert_eq!(parsed.schema_name, envelope.schema_name);
    assert_eq!(parsed.lineage, envelope.lineage);
    assert_eq!(parsed.data, envelope.data);
}

#[test]
fn test_envelope_parses_with_missing_optional_fields() {
    let json = r#"{
        "data_type": "raw_data",
        "timestamp": "2024-05-01T12:00:00Z",
        "data": {"text": "hi"}
    }"#;

    let envelope: DataEnvelope = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.envelope_version, ENVELOPE_VERSION);
    assert!(envelope.data_tags.is_empty());
    assert!(envelope.lineage.is_empty());
}
