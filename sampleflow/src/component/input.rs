//! The closed set of input shapes accepted by `run`.

use std::path::{Path, PathBuf};

use crate::core::{ComponentMetadata, ComponentResult, DataEnvelope, Payload};
use crate::errors::ComponentError;
use crate::samples::SampleStore;
use crate::schema::Schema;

/// Read-only view of another component's sample store.
///
/// Implemented for every [`Component`](super::Component), so any component
/// can be named as an input source for another.
pub trait SampleSource: Send + Sync {
    /// The component's name.
    fn source_name(&self) -> &str;
    /// The component's sample store.
    fn sample_store(&self) -> &SampleStore;
}

/// Type-erased view of a prior [`ComponentResult`], independent of its
/// output type.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub(crate) envelope: Option<DataEnvelope>,
    pub(crate) metadata: ComponentMetadata,
    pub(crate) data: Payload,
}

/// One accepted input shape for a `run` invocation.
///
/// A closed tagged-variant set: resolution inside the engine is a single
/// exhaustive match, not a chain of runtime type tests.
pub enum InputSource<'a> {
    /// Replay mode: the component's most recently persisted input sample.
    Latest,
    /// A free-form key-value mapping, wrapped as raw data.
    Map(Payload),
    /// A typed value, wrapped as raw data tagged with its schema name.
    Typed {
        /// The schema the value conforms to.
        schema_name: &'static str,
        /// The serialized value.
        data: Payload,
    },
    /// An existing envelope, used as-is.
    Envelope(DataEnvelope),
    /// A prior result from any component.
    Result(ResultView),
    /// Another component: its most recently persisted output sample.
    Component(&'a dyn SampleSource),
    /// An exact sample from another component's store.
    NamedSample(&'a dyn SampleSource, String),
    /// A sample file path, absolute or relative to this component's store.
    Path(PathBuf),
}

impl InputSource<'_> {
    /// Wraps a typed schema value.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedInput` when the value does not serialize to a
    /// JSON object.
    pub fn typed<T: Schema>(value: &T) -> Result<Self, ComponentError> {
        Ok(InputSource::Typed {
            schema_name: T::schema_name(),
            data: value.to_payload()?,
        })
    }

    /// Builds a source from a prior result, reusing its envelope when one
    /// exists and otherwise capturing enough to synthesize one.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedInput` when the result's value does not
    /// serialize to a JSON object.
    pub fn from_result<T: Schema>(result: &ComponentResult<T>) -> Result<Self, ComponentError> {
        let data = result
            .data
            .as_ref()
            .map(Schema::to_payload)
            .transpose()?
            .unwrap_or_default();

        Ok(InputSource::Result(ResultView {
            envelope: result.envelope.clone(),
            metadata: result.metadata.clone(),
            data,
        }))
    }

    /// Human-readable label recorded on the execution metadata.
    #[must_use]
    pub fn kind_label(&self) -> String {
        match self {
            Self::Latest => "latest_saved_input".to_string(),
            Self::Map(_) => "map".to_string(),
            Self::Typed { schema_name, .. } => format!("typed:{schema_name}"),
            Self::Envelope(_) => "data_envelope".to_string(),
            Self::Result(_) => "component_result".to_string(),
            Self::Component(source) => format!("component:{}", source.source_name()),
            Self::NamedSample(source, name) => format!("sample:{}/{name}", source.source_name()),
            Self::Path(_) => "file".to_string(),
        }
    }
}

impl std::fmt::Debug for InputSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InputSource::{}", self.kind_label())
    }
}

impl From<Payload> for InputSource<'_> {
    fn from(data: Payload) -> Self {
        Self::Map(data)
    }
}

impl From<DataEnvelope> for InputSource<'_> {
    fn from(envelope: DataEnvelope) -> Self {
        Self::Envelope(envelope)
    }
}

impl From<PathBuf> for InputSource<'_> {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for InputSource<'_> {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for InputSource<'_> {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}
