//! Linguistic resources used by the normalizer.
//!
//! A [`LanguageResource`] bundles everything the English analysis chain needs
//! to know about the language: the stop-word list, irregular lemma
//! exceptions, a lexicon of known base forms and the suffix rules of the
//! lemmatizer. It is loaded once at startup, either from the built-in tables
//! ([`LanguageResource::english`]) or from a JSON file
//! ([`LanguageResource::from_path`]), and shared read-only behind an `Arc`.
//!
//! # Lemmatization
//!
//! [`LanguageResource::lemmatize`] resolves a lowercased word in this order:
//!
//! 1. the exception table (`ran -> run`, `children -> child`);
//! 2. the word itself, if it is a known base form;
//! 3. the first suffix-rule candidate found in the lexicon, where rules that
//!    strip `-ing`/`-ed`/`-er`/`-est` also try the undoubled stem
//!    (`running -> runn -> run`);
//! 4. the first candidate of a rule that does not require a known base form
//!    (plural `-s`), unless the word ends like a singular (`-ss`, `-us`, `-is`);
//! 5. the word unchanged.
//!
//! # Examples
//!
//! ```
//! use sentir::analysis::language::LanguageResource;
//!
//! let resource = LanguageResource::english();
//! assert!(resource.is_stop_word("the"));
//! assert_eq!(resource.lemmatize("cats"), "cat");
//! assert_eq!(resource.lemmatize("running"), "run");
//! assert_eq!(resource.lemmatize("loved"), "love");
//! assert_eq!(resource.lemmatize("mice"), "mouse");
//! ```

pub mod english;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};

/// Shortest stem a suffix rule may leave behind, in characters.
const MIN_STEM_CHARS: usize = 2;

/// A suffix rewrite used by the lemmatizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    /// Suffix to strip.
    pub suffix: String,
    /// Text appended to the stripped stem.
    pub replacement: String,
    /// Only accept the candidate if it is a known base form.
    #[serde(default)]
    pub requires_known: bool,
}

impl SuffixRule {
    /// Create a new suffix rule.
    pub fn new<S: Into<String>, R: Into<String>>(
        suffix: S,
        replacement: R,
        requires_known: bool,
    ) -> Self {
        SuffixRule {
            suffix: suffix.into(),
            replacement: replacement.into(),
            requires_known,
        }
    }

    /// Candidate base forms for `word`, empty if the rule does not apply.
    fn candidates(&self, word: &str) -> Vec<String> {
        let Some(stem) = word.strip_suffix(self.suffix.as_str()) else {
            return Vec::new();
        };
        if stem.chars().count() < MIN_STEM_CHARS {
            return Vec::new();
        }

        let mut candidates = vec![format!("{stem}{}", self.replacement)];
        if self.requires_known
            && self.replacement.is_empty()
            && let Some(undoubled) = undouble(stem)
        {
            candidates.push(undoubled.to_string());
        }
        candidates
    }
}

/// Strip a doubled final consonant (`runn -> run`, `stopp -> stop`).
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

/// Stop words, lemma exceptions, base-form lexicon and suffix rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageResource {
    /// Resource name, e.g. `en_core`.
    pub name: String,
    /// Resource version; normalization is deterministic per version.
    pub version: String,
    /// Words removed by the stop filter.
    pub stop_words: HashSet<String>,
    /// Irregular inflection -> lemma.
    #[serde(default)]
    pub exceptions: HashMap<String, String>,
    /// Known base forms.
    #[serde(default)]
    pub lexicon: HashSet<String>,
    /// Suffix rules, tried in order.
    #[serde(default)]
    pub rules: Vec<SuffixRule>,
}

impl LanguageResource {
    /// The built-in English resource.
    pub fn english() -> Self {
        LanguageResource {
            name: "en_core".to_string(),
            version: "1.0".to_string(),
            stop_words: english::STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            exceptions: english::LEMMA_EXCEPTIONS
                .iter()
                .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
            lexicon: english::LEXICON.iter().map(|s| s.to_string()).collect(),
            rules: english::SUFFIX_RULES
                .iter()
                .map(|(suffix, replacement, known)| SuffixRule::new(*suffix, *replacement, *known))
                .collect(),
        }
    }

    /// Load a resource from a JSON file.
    ///
    /// Any failure (missing file, malformed JSON, invalid content) is reported
    /// as [`SentirError::ResourceLoad`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SentirError::resource_load(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
            .map_err(|e| SentirError::resource_load(format!("{}: {e}", path.display())))
    }

    /// Parse and validate a resource from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let resource: LanguageResource = serde_json::from_str(json)
            .map_err(|e| SentirError::resource_load(format!("malformed resource: {e}")))?;
        resource.validate()?;
        Ok(resource)
    }

    /// Check the resource for content that would make lemmatization misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SentirError::resource_load("resource name is empty"));
        }
        if let Some(rule) = self.rules.iter().find(|rule| rule.suffix.is_empty()) {
            return Err(SentirError::resource_load(format!(
                "suffix rule with empty suffix (replacement {:?})",
                rule.replacement
            )));
        }
        if let Some(word) = self.stop_words.iter().find(|w| w.chars().any(char::is_uppercase)) {
            return Err(SentirError::resource_load(format!(
                "stop word {word:?} is not lowercase"
            )));
        }
        Ok(())
    }

    /// Check if a (lowercased) word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Reduce a lowercased word to its lemma.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }
        if self.lexicon.contains(word) {
            return word.to_string();
        }

        if let Some(known) = self
            .rules
            .iter()
            .flat_map(|rule| rule.candidates(word))
            .find(|candidate| self.lexicon.contains(candidate))
        {
            return known;
        }

        if !Self::looks_singular(word)
            && let Some(guess) = self
                .rules
                .iter()
                .filter(|rule| !rule.requires_known)
                .flat_map(|rule| rule.candidates(word))
                .next()
        {
            return guess;
        }

        word.to_string()
    }

    /// Endings that mark a singular word despite a trailing `s`.
    fn looks_singular(word: &str) -> bool {
        ["ss", "us", "is"].iter().any(|ending| word.ends_with(ending))
    }
}

impl Default for LanguageResource {
    fn default() -> Self {
        Self::english()
    }
}
