//! Configuration for component execution.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Payload;

/// Controls which samples a run persists.
///
/// A closed enum rather than bitflags, so undefined combinations cannot be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSaveMode {
    /// Persist nothing.
    #[default]
    None,
    /// Persist the validated input before processing.
    Input,
    /// Persist the validated output after processing.
    Output,
    /// Persist both input and output.
    Both,
}

impl SampleSaveMode {
    /// Returns true if the input sample should be saved.
    #[must_use]
    pub fn saves_input(self) -> bool {
        matches!(self, Self::Input | Self::Both)
    }

    /// Returns true if the output sample should be saved.
    #[must_use]
    pub fn saves_output(self) -> bool {
        matches!(self, Self::Output | Self::Both)
    }
}

/// Configuration for one component execution.
///
/// Immutable once constructed; build with the `with_*` setters or one of the
/// factory presets. `timeout` and `max_retries` are advisory metadata only,
/// recorded but never enforced by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Enables verbose logging of data sources and outcomes.
    #[serde(default)]
    pub debug_mode: bool,
    /// Which samples to persist.
    #[serde(default)]
    pub save_samples: SampleSaveMode,
    /// Identifier correlating this run with a larger execution.
    #[serde(default)]
    pub execution_id: Option<String>,
    /// Free-form description of the data source.
    #[serde(default)]
    pub source_info: Option<Payload>,
    /// Skips the advisory envelope compatibility check.
    #[serde(default)]
    pub skip_compatibility_check: bool,
    /// Advisory timeout for the processing hook.
    #[serde(default)]
    pub timeout: Option<Duration>,
    /// Advisory retry budget. The engine never retries on its own.
    #[serde(default)]
    pub max_retries: u32,
    /// Prefix prepended to sample filenames.
    #[serde(default)]
    pub sample_name_prefix: Option<String>,
    /// Declares that samples should be compressed. Not enforced.
    #[serde(default)]
    pub compress_samples: bool,
}

impl RunConfig {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Debug preset: debug logging on, saving both samples (or none).
    #[must_use]
    pub fn debug(save_all: bool) -> Self {
        Self {
            debug_mode: true,
            save_samples: if save_all {
                SampleSaveMode::Both
            } else {
                SampleSaveMode::None
            },
            ..Self::default()
        }
    }

    /// Production preset: no debug logging, no saving, compatibility checks on.
    #[must_use]
    pub fn production(execution_id: impl Into<String>) -> Self {
        Self {
            debug_mode: false,
            save_samples: SampleSaveMode::None,
            execution_id: Some(execution_id.into()),
            skip_compatibility_check: false,
            ..Self::default()
        }
    }

    /// Testing preset: debug logging on, saving output only or both.
    #[must_use]
    pub fn testing(save_output_only: bool) -> Self {
        Self {
            debug_mode: true,
            save_samples: if save_output_only {
                SampleSaveMode::Output
            } else {
                SampleSaveMode::Both
            },
            ..Self::default()
        }
    }

    /// Sets the debug flag.
    #[must_use]
    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    /// Sets the sample save mode.
    #[must_use]
    pub fn with_save_samples(mut self, mode: SampleSaveMode) -> Self {
        self.save_samples = mode;
        self
    }

    /// Sets the execution id.
    #[must_use]
    pub fn with_execution_id(mut self, id: impl Into<String>) -> Self {
        self.execution_id = Some(id.into());
        self
    }

    /// Sets the source-info map.
    #[must_use]
    pub fn with_source_info(mut self, info: Payload) -> Self {
        self.source_info = Some(info);
        self
    }

    /// Disables the envelope compatibility check.
    #[must_use]
    pub fn with_skip_compatibility_check(mut self, skip: bool) -> Self {
        self.skip_compatibility_check = skip;
        self
    }

    /// Sets the advisory timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the advisory retry budget.
    #[must_use]
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Sets the sample filename prefix.
    #[must_use]
    pub fn with_sample_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.sample_name_prefix = Some(prefix.into());
        self
    }

    /// Declares sample compression.
    #[must_use]
    pub fn with_compress_samples(mut self, compress: bool) -> Self {
        self.compress_samples = compress;
        self
    }
}
