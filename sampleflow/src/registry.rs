//! Process-wide directory of component schema declarations.
//!
//! The registry answers pre-flight "can output of A feed input of B"
//! questions; it is never consulted during `run` itself. Construct an
//! instance explicitly and share it where connectivity checks are needed.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::RegistryError;

/// A component's declared schema identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredComponent {
    /// The component version.
    pub version: String,
    /// Name of the schema it consumes.
    pub input_schema: String,
    /// Name of the schema it produces.
    pub output_schema: String,
}

#[derive(Debug, Default)]
struct RegistryInner {
    components: HashMap<String, RegisteredComponent>,
    // Registration order, without duplicates on re-registration.
    order: Vec<String>,
}

/// Name-keyed registry of component schema declarations.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    inner: RwLock<RegistryInner>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component. Re-registering a name overwrites its entry.
    pub fn register(
        &self,
        name: impl Into<String>,
        version: impl Into<String>,
        input_schema: impl Into<String>,
        output_schema: impl Into<String>,
    ) {
        let name = name.into();
        let entry = RegisteredComponent {
            version: version.into(),
            input_schema: input_schema.into(),
            output_schema: output_schema.into(),
        };
        info!(component = %name, version = %entry.version, "registered component");

        let mut inner = self.inner.write();
        if inner.components.insert(name.clone(), entry).is_none() {
            inner.order.push(name);
        }
    }

    /// Looks up a component's declaration.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<RegisteredComponent> {
        self.inner.read().components.get(name).cloned()
    }

    /// Checks whether `from`'s output schema matches `to`'s input schema.
    ///
    /// # Errors
    ///
    /// Returns `NotRegistered` naming whichever side is missing, or
    /// `SchemaMismatch` naming the mismatched pair.
    pub fn can_connect(&self, from: &str, to: &str) -> Result<(), RegistryError> {
        let inner = self.inner.read();

        let from_entry = inner
            .components
            .get(from)
            .ok_or_else(|| RegistryError::NotRegistered {
                name: from.to_string(),
            })?;
        let to_entry = inner
            .components
            .get(to)
            .ok_or_else(|| RegistryError::NotRegistered {
                name: to.to_string(),
            })?;

        if from_entry.output_schema == to_entry.input_schema {
            Ok(())
        } else {
            Err(RegistryError::SchemaMismatch {
                from: from.to_string(),
                output: from_entry.output_schema.clone(),
                to: to.to_string(),
                input: to_entry.input_schema.clone(),
            })
        }
    }

    /// Lists registered component names in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.inner.read().order.clone()
    }
}
