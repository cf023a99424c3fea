//! Durable, collision-free persistence of envelopes as JSON sample files.
//!
//! Each component owns one directory of samples. Filenames are
//! `[<prefix>_]<input|output>_<YYYYMMDD_HHMMSS_fff>[_<NNN>].json`; the
//! numeric suffix appears only when the timestamped name is already taken.
//! Saves never overwrite: the name is claimed with an exclusive create, so
//! concurrent savers land in distinct files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ComponentMetadata, DataEnvelope, DataKind, Payload};
use crate::errors::ComponentError;
use crate::utils::sample_timestamp;

/// Which side of an execution a sample captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// A component's validated input, saved before processing.
    Input,
    /// A component's validated output, saved after processing.
    Output,
}

impl SampleKind {
    /// The filename prefix for this kind.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Input => "input_",
            Self::Output => "output_",
        }
    }

    /// The envelope data kind this sample kind maps to.
    #[must_use]
    pub fn data_kind(self) -> DataKind {
        match self {
            Self::Input => DataKind::ComponentInput,
            Self::Output => DataKind::ComponentOutput,
        }
    }
}

impl std::fmt::Display for SampleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Per-component store of persisted envelope samples.
#[derive(Debug, Clone)]
pub struct SampleStore {
    dir: PathBuf,
}

impl SampleStore {
    /// Opens a store rooted at `dir`, creating the directory if absent.
    ///
    /// # Errors
    ///
    /// Returns an io error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ComponentError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened sample store");
        Ok(Self { dir })
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persists a payload as an envelope sample and returns the file path.
    ///
    /// The envelope carries the component identity, lineage snapshot, and
    /// execution timestamp from `metadata`. The filename timestamp is the
    /// execution timestamp at millisecond precision; when that name is
    /// already taken the store retries with a zero-padded counter, claiming
    /// each candidate with an exclusive create so concurrent saves cannot
    /// overwrite each other.
    ///
    /// # Errors
    ///
    /// Returns io or serialization errors; never overwrites an existing file.
    pub fn save(
        &self,
        kind: SampleKind,
        data: &Payload,
        schema_name: &str,
        metadata: &ComponentMetadata,
        prefix: Option<&str>,
    ) -> Result<PathBuf, ComponentError> {
        let envelope = DataEnvelope::new(kind.data_kind(), data.clone())
            .with_component(&metadata.component_name, &metadata.component_version)
            .with_schema_name(schema_name)
            .with_timestamp(metadata.executed_at)
            .with_lineage(metadata.data_lineage.clone());
        let envelope = match &metadata.execution_id {
            Some(id) => envelope.with_execution_id(id),
            None => envelope,
        };

        let stem = match prefix {
            Some(p) => format!("{p}_{}{}", kind.prefix(), sample_timestamp(&metadata.executed_at)),
            None => format!("{}{}", kind.prefix(), sample_timestamp(&metadata.executed_at)),
        };
        let json = serde_json::to_string_pretty(&envelope)?;

        let mut counter: u32 = 0;
        loop {
            let filename = if counter == 0 {
                format!("{stem}.json")
            } else {
                format!("{stem}_{counter:03}.json")
            };
            let path = self.dir.join(filename);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(json.as_bytes())?;
                    info!(
                        kind = %kind,
                        path = %path.display(),
                        component = %metadata.component_name,
                        "saved sample"
                    );
                    return Ok(path);
                }
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                    counter += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Loads a sample by filename, absolute or relative to the store.
    ///
    /// # Errors
    ///
    /// Returns `SampleNotFound` when the file does not exist, or a
    /// serialization error when it does not parse as an envelope.
    pub fn load(&self, filename: impl AsRef<Path>) -> Result<DataEnvelope, ComponentError> {
        let filename = filename.as_ref();
        let path = if filename.is_absolute() {
            filename.to_path_buf()
        } else {
            self.dir.join(filename)
        };

        if !path.exists() {
            return Err(ComponentError::SampleNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads the most recently saved sample of the given kind, or `None`
    /// when the store holds no matching file.
    ///
    /// Newest is by modification time; ties fall back to lexicographic
    /// filename order, which tracks the timestamp embedded in the name.
    ///
    /// # Errors
    ///
    /// Returns io or serialization errors from reading the directory or the
    /// chosen file.
    pub fn latest(&self, kind: SampleKind) -> Result<Option<DataEnvelope>, ComponentError> {
        let mut candidates: Vec<(std::time::SystemTime, String)> = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(kind.prefix()) || !name.ends_with(".json") {
                continue;
            }
            let mtime = entry
                .metadata()?
                .modified()
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
            candidates.push((mtime, name));
        }

        let Some((_, name)) = candidates.into_iter().max() else {
            return Ok(None);
        };
        self.load(&name).map(Some)
    }

    /// Lists sample filenames in lexicographic (chronological) order,
    /// optionally filtered by kind.
    ///
    /// # Errors
    ///
    /// Returns an io error if the directory cannot be read.
    pub fn list(&self, kind: Option<SampleKind>) -> Result<Vec<String>, ComponentError> {
        let mut names: Vec<String> = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(".json") {
                continue;
            }
            if let Some(kind) = kind {
                if !name.starts_with(kind.prefix()) {
                    continue;
                }
            }
            names.push(name);
        }

        names.sort();
        Ok(names)
    }
}
