//! Labelled training data.
//!
//! A dataset is a list of raw messages with one [`Label`] per message. On
//! disk, messages are one per line (empty lines skipped) and labels are
//! integers separated by commas and/or whitespace, given inline or in a
//! separate file.
//!
//! # Examples
//!
//! ```
//! use sentir::dataset::Dataset;
//! use sentir::ml::label::Label;
//!
//! let labels = Dataset::parse_labels("1, 0 1\n0").unwrap();
//! assert_eq!(labels, vec![Label(1), Label(0), Label(1), Label(0)]);
//!
//! let sample = Dataset::sample();
//! assert_eq!(sample.texts().len(), sample.labels().len());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::ml::label::Label;

/// Built-in chat sample used when no artifact and no dataset are available.
const SAMPLE_CHAT: &[(&str, u32)] = &[
    ("I'm really happy with this conversation!", 1),
    ("This is terrible and disappointing.", 0),
    ("Thanks so much, you are amazing", 1),
    ("I hate waiting for replies all day", 0),
    ("What a wonderful surprise, love it", 1),
    ("The app keeps crashing, so frustrating", 0),
    ("Great job team, the demo was brilliant", 1),
    ("I'm sad and upset about the news", 0),
    ("Feeling great today, best weekend ever", 1),
    ("Worst service I have ever had", 0),
    ("Loved the movie, it was fantastic", 1),
    ("This is so boring and annoying", 0),
    ("Awesome work, thank you for helping", 1),
    ("I'm angry, nothing works and nobody listens", 0),
    ("Cool, that sounds like fun", 1),
    ("The meeting was a horrible waste of time", 0),
    ("Nice! I really enjoy chatting with you", 1),
    ("Ugh, my phone died again, awful day", 0),
    ("Perfect, I'm so excited and pleased", 1),
    ("I feel lonely and tired of everything", 0),
];

/// Aligned messages and labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    texts: Vec<String>,
    labels: Vec<Label>,
}

impl Dataset {
    /// Pair `texts` with `labels`; the counts must match.
    pub fn new(texts: Vec<String>, labels: Vec<Label>) -> Result<Self> {
        if texts.len() != labels.len() {
            return Err(SentirError::InputLengthMismatch {
                texts: texts.len(),
                labels: labels.len(),
            });
        }
        Ok(Dataset { texts, labels })
    }

    /// The built-in binary chat sample.
    pub fn sample() -> Self {
        Dataset {
            texts: SAMPLE_CHAT.iter().map(|(text, _)| text.to_string()).collect(),
            labels: SAMPLE_CHAT.iter().map(|&(_, id)| Label(id)).collect(),
        }
    }

    /// Load messages from `messages` and labels from `labels`.
    pub fn load<P: AsRef<Path>>(messages: P, labels: &LabelSource) -> Result<Self> {
        let texts = Self::read_messages(messages)?;
        let labels = labels.resolve()?;
        debug!("loaded {} messages and {} labels", texts.len(), labels.len());
        Self::new(texts, labels)
    }

    /// Read one message per non-empty line.
    pub fn read_messages<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SentirError::dataset(format!("cannot read messages from {}: {e}", path.display()))
        })?;
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Parse integers separated by commas and/or whitespace.
    pub fn parse_labels(input: &str) -> Result<Vec<Label>> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|item| !item.is_empty())
            .map(str::parse::<Label>)
            .collect()
    }

    /// Read a label file in [`parse_labels`](Self::parse_labels) syntax.
    pub fn read_labels<P: AsRef<Path>>(path: P) -> Result<Vec<Label>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SentirError::dataset(format!("cannot read labels from {}: {e}", path.display()))
        })?;
        Self::parse_labels(&content)
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Where labels come from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    /// An inline list such as `"1,0,1,0"`.
    Inline(String),
    /// A file containing such a list.
    File(PathBuf),
}

impl LabelSource {
    pub fn resolve(&self) -> Result<Vec<Label>> {
        match self {
            LabelSource::Inline(list) => Dataset::parse_labels(list),
            LabelSource::File(path) => Dataset::read_labels(path),
        }
    }
}

/// Dataset section of the configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Message file, one message per line.
    pub messages: Option<PathBuf>,
    pub labels: Option<LabelSource>,
}

impl DatasetConfig {
    /// Load the configured dataset, `None` if no message file is set.
    pub fn load(&self) -> Result<Option<Dataset>> {
        let Some(messages) = &self.messages else {
            return Ok(None);
        };
        let labels = self.labels.as_ref().ok_or_else(|| {
            SentirError::invalid_config(format!(
                "dataset {} has no labels configured",
                messages.display()
            ))
        })?;
        Dataset::load(messages, labels).map(Some)
    }

    /// The configured dataset, or the built-in sample.
    pub fn load_or_sample(&self) -> Result<Dataset> {
        Ok(self.load()?.unwrap_or_else(Dataset::sample))
    }
}
