//! The component execution engine.
//!
//! [`Component`] is the fixed interface behind which arbitrary
//! transformation logic lives. The provided [`Component::run`] method is the
//! universal contract: it normalizes any accepted input shape into an
//! envelope, validates against the declared schemas, invokes the
//! transformation hook, tracks lineage, and optionally persists samples.
//! `run` never raises past its own boundary; every failure comes back as a
//! [`ComponentResult`] carrying an error string, and the component instance
//! stays fully usable afterwards.

mod input;


pub use input::{InputSource, ResultView, SampleSource};

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::config::RunConfig;
use crate::core::{ComponentMetadata, ComponentResult, DataEnvelope, DataKind, Payload};
use crate::errors::ComponentError;
use crate::samples::{SampleKind, SampleStore};
use crate::schema::Schema;

/// A single named, versioned processing step with declared input and output
/// schemas.
///
/// Implementors supply identity, a sample store, and the `process` hook;
/// the engine supplies `run` and `can_process`.
#[async_trait]
pub trait Component: Send + Sync {
    /// The schema of validated input.
    type Input: Schema;
    /// The schema of validated output.
    type Output: Schema;

    /// The component's name.
    fn name(&self) -> &str;

    /// The component's version.
    fn version(&self) -> &str;

    /// The component's sample store.
    fn store(&self) -> &SampleStore;

    /// Whether this component transforms foreign payloads in
    /// [`adapt_input`](Self::adapt_input). Drives the compatibility check:
    /// a schema mismatch is acceptable when the component adapts.
    fn adapts_input(&self) -> bool {
        false
    }

    /// Transforms the envelope payload into the shape the input schema
    /// expects. The default is the identity.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the error is captured at the `run`
    /// boundary like any other.
    fn adapt_input(&self, payload: Payload) -> Result<Payload, ComponentError> {
        Ok(payload)
    }

    /// The transformation hook. Arbitrary user logic; any failure is
    /// reported as a processing error on the result.
    async fn process(&self, input: Self::Input) -> anyhow::Result<Self::Output>;

    /// Advisory check that this component can accept the envelope.
    ///
    /// Pure, no side effects. Passes unless the envelope declares a schema
    /// name different from the declared input schema and the component does
    /// not adapt its input. A pass may carry a note explaining that
    /// adaptation will handle the mismatch.
    ///
    /// # Errors
    ///
    /// Returns `SchemaMismatch` naming both schema identifiers.
    fn can_process(&self, envelope: &DataEnvelope) -> Result<Option<String>, ComponentError> {
        let Some(actual) = envelope.schema_name.as_deref() else {
            return Ok(None);
        };
        let expected = Self::Input::schema_name();
        if actual == expected {
            return Ok(None);
        }
        if self.adapts_input() {
            return Ok(Some(format!(
                "schema {actual} differs from {expected}; will transform via adapt_input"
            )));
        }
        Err(ComponentError::SchemaMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }

    /// Executes this component against one unit of input.
    ///
    /// All failures between normalization and output validation are
    /// captured here and returned as a failed result whose error embeds the
    /// component name and the underlying cause.
    async fn run(
        &self,
        source: InputSource<'_>,
        config: &RunConfig,
    ) -> ComponentResult<Self::Output>
    where
        Self: Sized,
    {
        let mut metadata = ComponentMetadata::new(self.name(), self.version())
            .with_debug_mode(config.debug_mode);
        metadata.execution_id = config.execution_id.clone();

        let mut warnings = Vec::new();
        match run_inner(self, source, config, &mut metadata, &mut warnings).await {
            Ok((data, envelope)) => {
                if config.debug_mode {
                    info!(component = self.name(), "completed successfully");
                }
                ComponentResult::success(data, metadata, envelope).with_warnings(warnings)
            }
            Err(err) => {
                let message = format!("Component {} failed: {err}", self.name());
                error!(component = self.name(), error = %err, "component run failed");
                ComponentResult::failure(metadata, message).with_warnings(warnings)
            }
        }
    }
}

/// Every component can be named as an input source for another.
impl<C: Component> SampleSource for C {
    fn source_name(&self) -> &str {
        Component::name(self)
    }

    fn sample_store(&self) -> &SampleStore {
        Component::store(self)
    }
}

/// The engine proper. Any error returned here is converted into a failed
/// result by `run`.
async fn run_inner<C: Component>(
    component: &C,
    source: InputSource<'_>,
    config: &RunConfig,
    metadata: &mut ComponentMetadata,
    warnings: &mut Vec<String>,
) -> Result<(C::Output, DataEnvelope), ComponentError> {
    metadata.input_source_kind = Some(source.kind_label());

    // Resolve the input source into an envelope.
    let envelope = match source {
        InputSource::Latest => {
            info!(
                component = component.name(),
                "replay mode: using latest saved input"
            );
            let envelope = component.store().latest(SampleKind::Input)?.ok_or_else(|| {
                ComponentError::NoSavedInput {
                    component: component.name().to_string(),
                    kind: SampleKind::Input,
                }
            })?;
            metadata.is_replay = true;
            envelope
        }
        InputSource::Map(data) => DataEnvelope::raw(data),
        InputSource::Typed { schema_name, data } => {
            DataEnvelope::raw(data).with_schema_name(schema_name)
        }
        InputSource::Envelope(envelope) => envelope,
        InputSource::Result(view) => match view.envelope {
            Some(envelope) => envelope,
            None => synthesize_result_envelope(&view.metadata, view.data),
        },
        InputSource::Component(other) => {
            info!(source = other.source_name(), "loading latest output sample");
            other
                .sample_store()
                .latest(SampleKind::Output)?
                .ok_or_else(|| ComponentError::NoSavedInput {
                    component: other.source_name().to_string(),
                    kind: SampleKind::Output,
                })?
        }
        InputSource::NamedSample(other, name) => other.sample_store().load(&name)?,
        InputSource::Path(path) => component.store().load(&path)?,
    };

    // Lineage snapshot goes on the metadata before this execution appends
    // its own record, so even failed runs carry the input's history.
    metadata.data_lineage = envelope.lineage.clone();

    if !config.skip_compatibility_check {
        if let Some(note) = component.can_process(&envelope)? {
            warnings.push(note);
        }
    }

    if config.debug_mode {
        log_data_source(&envelope, metadata.is_replay);
    }

    let adapted = component.adapt_input(envelope.data.clone())?;
    let validated_input = C::Input::validate(&adapted)?;

    // Persist the input before processing, so a crash in the hook still
    // leaves a replayable artifact.
    if config.save_samples.saves_input() {
        component
            .store()
            .save(
                SampleKind::Input,
                &adapted,
                C::Input::schema_name(),
                metadata,
                config.sample_name_prefix.as_deref(),
            )
            .map_err(|err| {
                if config.debug_mode {
                    error!(component = component.name(), error = %err, "input sample save failed");
                }
                err
            })?;
    }

    let raw_output = component
        .process(validated_input)
        .await
        .map_err(|err| ComponentError::Processing(err.to_string()))?;

    // Coerce through the output schema: serialize and re-validate.
    let output_payload = raw_output.to_payload()?;
    let validated_output = C::Output::validate(&output_payload).map_err(|err| match err {
        ComponentError::InputValidation(detail) => ComponentError::OutputValidation(detail),
        other => other,
    })?;

    let mut output_envelope = DataEnvelope::new(DataKind::ComponentOutput, output_payload)
        .with_component(component.name(), component.version())
        .with_schema_name(C::Output::schema_name())
        .with_timestamp(metadata.executed_at)
        .with_lineage(envelope.lineage_with(metadata.lineage_record()));
    if let Some(id) = &metadata.execution_id {
        output_envelope = output_envelope.with_execution_id(id);
    }
    if let Some(source_info) = &config.source_info {
        output_envelope = output_envelope.with_source_info(source_info.clone());
    }

    if config.save_samples.saves_output() {
        component
            .store()
            .save(
                SampleKind::Output,
                &output_envelope.data,
                C::Output::schema_name(),
                metadata,
                config.sample_name_prefix.as_deref(),
            )
            .map_err(|err| {
                if config.debug_mode {
                    error!(component = component.name(), error = %err, "output sample save failed");
                }
                err
            })?;
    }

    Ok((validated_output, output_envelope))
}

/// Builds an envelope from a prior result that carried none.
fn synthesize_result_envelope(metadata: &ComponentMetadata, data: Payload) -> DataEnvelope {
    let envelope = DataEnvelope::new(DataKind::ComponentOutput, data)
        .with_component(&metadata.component_name, &metadata.component_version)
        .with_timestamp(metadata.executed_at)
        .with_lineage(metadata.data_lineage.clone());
    match &metadata.execution_id {
        Some(id) => envelope.with_execution_id(id),
        None => envelope,
    }
}

/// Logs a human-readable description of where the data came from.
fn log_data_source(envelope: &DataEnvelope, is_replay: bool) {
    let mut parts = Vec::new();
    if is_replay {
        parts.push("replay".to_string());
    }
    if let Some(name) = &envelope.component_name {
        parts.push(format!("from: {name}"));
    }
    if let Some(schema) = &envelope.schema_name {
        parts.push(format!("schema: {schema}"));
    }
    if !envelope.data_tags.is_empty() {
        parts.push(format!("tags: {:?}", envelope.data_tags));
    }
    debug!("data source: {}", parts.join(" | "));
}
