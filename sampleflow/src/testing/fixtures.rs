//! Text-processing fixture components and their schemas.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::errors::ComponentError;
use crate::samples::SampleStore;
use crate::schema::Schema;

/// Raw text waiting to be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    /// The raw text.
    pub text: String,
    /// Optional source identifier.
    #[serde(default)]
    pub source: Option<String>,
}

impl Schema for TextInput {
    fn schema_name() -> &'static str {
        "TextInput"
    }
}

/// Normalized text with a record of what changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedText {
    /// The cleaned text.
    pub text: String,
    /// Optional source identifier, carried through.
    #[serde(default)]
    pub source: Option<String>,
    /// Which normalizations actually changed the text.
    #[serde(default)]
    pub changes_made: Vec<String>,
}

impl Schema for CleanedText {
    fn schema_name() -> &'static str {
        "CleanedText"
    }
}

/// Word statistics over cleaned text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStats {
    /// Total word count.
    pub total_words: u64,
    /// Distinct word count.
    pub unique_words: u64,
    /// Mean word length, rounded to two decimals.
    pub average_word_length: f64,
    /// Up to five most frequent words with their counts.
    pub most_common_words: Vec<(String, u64)>,
    /// Optional source identifier, carried through.
    #[serde(default)]
    pub source: Option<String>,
}

impl Schema for WordStats {
    fn schema_name() -> &'static str {
        "WordStats"
    }
}

/// Pass-through component that validates text input.
#[derive(Debug)]
pub struct TextLoader {
    store: SampleStore,
}

impl TextLoader {
    /// Creates a loader with samples under `sample_dir`.
    ///
    /// # Errors
    ///
    /// Returns an io error if the directory cannot be created.
    pub fn new(sample_dir: impl Into<PathBuf>) -> Result<Self, ComponentError> {
        Ok(Self {
            store: SampleStore::new(sample_dir)?,
        })
    }
}

#[async_trait]
impl Component for TextLoader {
    type Input = TextInput;
    type Output = TextInput;

    fn name(&self) -> &str {
        "text_loader"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn store(&self) -> &SampleStore {
        &self.store
    }

    async fn process(&self, input: TextInput) -> anyhow::Result<TextInput> {
        Ok(input)
    }
}

/// Normalizes whitespace, case, and special characters.
#[derive(Debug)]
pub struct TextCleaner {
    store: SampleStore,
    strip_pattern: Regex,
}

impl TextCleaner {
    /// Creates a cleaner with samples under `sample_dir`.
    ///
    /// # Errors
    ///
    /// Returns an io error if the directory cannot be created.
    pub fn new(sample_dir: impl Into<PathBuf>) -> Result<Self, ComponentError> {
        Ok(Self {
            store: SampleStore::new(sample_dir)?,
            strip_pattern: Regex::new(r"[^a-z0-9\s]").expect("pattern is valid"),
        })
    }
}

#[async_trait]
impl Component for TextCleaner {
    type Input = TextInput;
    type Output = CleanedText;

    fn name(&self) -> &str {
        "text_cleaner"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn store(&self) -> &SampleStore {
        &self.store
    }

    async fn process(&self, input: TextInput) -> anyhow::Result<CleanedText> {
        let mut changes = Vec::new();

        let collapsed = input.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed != input.text {
            changes.push("removed_extra_whitespace".to_string());
        }

        let lowered = collapsed.to_lowercase();
        if lowered != collapsed {
            changes.push("converted_to_lowercase".to_string());
        }

        let stripped = self.strip_pattern.replace_all(&lowered, "").into_owned();
        if stripped.len() != lowered.len() {
            changes.push("removed_special_characters".to_string());
        }

        Ok(CleanedText {
            text: stripped,
            source: input.source,
            changes_made: changes,
        })
    }
}

/// Counts words and derives statistics from cleaned text.
#[derive(Debug)]
pub struct WordCounter {
    store: SampleStore,
}

impl WordCounter {
    /// Creates a counter with samples under `sample_dir`.
    ///
    /// # Errors
    ///
    /// Returns an io error if the directory cannot be created.
    pub fn new(sample_dir: impl Into<PathBuf>) -> Result<Self, ComponentError> {
        Ok(Self {
            store: SampleStore::new(sample_dir)?,
        })
    }
}

#[async_trait]
impl Component for WordCounter {
    type Input = CleanedText;
    type Output = WordStats;

    fn name(&self) -> &str {
        "word_counter"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn store(&self) -> &SampleStore {
        &self.store
    }

    async fn process(&self, input: CleanedText) -> anyhow::Result<WordStats> {
        let words: Vec<&str> = input.text.split_whitespace().collect();

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for &word in &words {
            *counts.entry(word).or_insert(0) += 1;
        }

        let total_words = words.len() as u64;
        let unique_words = counts.len() as u64;
        let average_word_length = if words.is_empty() {
            0.0
        } else {
            let total_len: usize = words.iter().map(|w| w.len()).sum();
            (total_len as f64 / total_words as f64 * 100.0).round() / 100.0
        };

        // Highest count first, ties by word for determinism.
        let mut ranked: Vec<(String, u64)> = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(5);

        Ok(WordStats {
            total_words,
            unique_words,
            average_word_length,
            most_common_words: ranked,
            source: input.source,
        })
    }
}
