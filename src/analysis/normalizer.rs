//! Message normalization.
//!
//! The [`Normalizer`] turns raw chat lines into the space-joined lemma
//! strings the feature extractor is trained on. It owns no linguistic
//! knowledge itself; all of it lives in the injected [`Analyzer`].
//!
//! # Examples
//!
//! ```
//! use sentir::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::english();
//! let normalized = normalizer.normalize(&["The CATS run!!! 123", ""]).unwrap();
//!
//! assert_eq!(normalized, vec!["cat run".to_string(), String::new()]);
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::english::EnglishAnalyzer;
use crate::analysis::language::LanguageResource;
use crate::error::Result;

/// Converts raw messages into normalized strings.
///
/// Cloning is cheap; the analyzer is shared.
#[derive(Clone)]
pub struct Normalizer {
    analyzer: Arc<dyn Analyzer>,
}

impl Normalizer {
    /// Create a normalizer around an analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Normalizer { analyzer }
    }

    /// A normalizer using the English analyzer over `resource`.
    pub fn with_resource(resource: Arc<LanguageResource>) -> Self {
        Self::new(Arc::new(EnglishAnalyzer::new(resource)))
    }

    /// A normalizer using the built-in English resource.
    pub fn english() -> Self {
        Self::with_resource(Arc::new(LanguageResource::english()))
    }

    /// The analyzer in use.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Normalize a single message.
    ///
    /// An input with no surviving tokens yields an empty string.
    pub fn normalize_one(&self, message: &str) -> Result<String> {
        let tokens: Vec<String> = self
            .analyzer
            .analyze(message)?
            .filter(|token| !token.is_stopped() && !token.is_empty())
            .map(|token| token.text)
            .collect();

        Ok(tokens.join(" "))
    }

    /// Normalize a batch of messages, one output per input, in order.
    pub fn normalize<S: AsRef<str>>(&self, messages: &[S]) -> Result<Vec<String>> {
        let normalized = messages
            .iter()
            .map(|message| self.normalize_one(message.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "normalized {} messages with analyzer '{}'",
            normalized.len(),
            self.analyzer.name()
        );
        Ok(normalized)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
