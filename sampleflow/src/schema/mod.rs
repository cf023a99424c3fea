//! Statically-defined record schemas with explicit validate/coerce.
//!
//! Each component declares its input and output as a concrete Rust type
//! implementing [`Schema`]. An envelope's `schema_name` is a stored string
//! tag compared against these static names; validation is a serde
//! deserialization of the payload into the record type.

use serde::{de::DeserializeOwned, Serialize};

use crate::core::Payload;
use crate::errors::ComponentError;

/// A named, serde-backed record type usable as a component input or output.
pub trait Schema: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The schema identifier carried in envelopes and the registry.
    fn schema_name() -> &'static str;

    /// Validates and coerces a payload mapping into this record type.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError::InputValidation` with the serde detail when
    /// the payload does not conform.
    fn validate(payload: &Payload) -> Result<Self, ComponentError> {
        serde_json::from_value(serde_json::Value::Object(payload.clone()))
            .map_err(|e| ComponentError::InputValidation(e.to_string()))
    }

    /// Serializes this record into a payload mapping.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError::UnsupportedInput` when the record does not
    /// serialize to a JSON object.
    fn to_payload(&self) -> Result<Payload, ComponentError> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(ComponentError::UnsupportedInput(format!(
                "schema {} serialized to non-object JSON: {}",
                Self::schema_name(),
                other
            ))),
        }
    }
}
