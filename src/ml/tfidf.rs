//! TF-IDF vectorizer for text feature extraction.
//!
//! The vectorizer learns a vocabulary and inverse document frequencies from
//! a training corpus and then maps texts to sparse [`FeatureVector`]s:
//!
//! - terms are Unicode word segments with at least one alphanumeric
//!   character and at least `min_term_len` characters;
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`;
//! - the weight of `t` in `d` is `tf(t, d) * idf(t)`, where `tf` is the raw
//!   count (or `1 + ln(count)` with `sublinear_tf`);
//! - rows are L2-normalized unless `norm` is [`Norm::None`].
//!
//! Vocabulary indices follow lexicographic term order, so a fitted
//! vectorizer does not depend on hash iteration order.
//!
//! # Examples
//!
//! ```
//! use sentir::ml::tfidf::{TfIdfVectorizer, VectorizerConfig};
//!
//! let docs = ["love", "hate", "great", "terrible"];
//! let (vectorizer, rows) = TfIdfVectorizer::fit_transform(VectorizerConfig::default(), &docs);
//!
//! assert_eq!(vectorizer.vocabulary_size(), 4);
//! assert_eq!(rows.len(), 4);
//! assert_eq!(vectorizer.transform(&["love hate"])[0].nnz(), 2);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::ml::feature::FeatureVector;

/// Row normalization applied after weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale every row to unit Euclidean length.
    #[default]
    L2,
    /// Leave rows unscaled.
    None,
}

/// Vectorizer settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Lowercase text before extracting terms.
    pub lowercase: bool,
    /// Minimum term length in characters.
    pub min_term_len: usize,
    /// Use `1 + ln(tf)` instead of the raw count.
    pub sublinear_tf: bool,
    /// Row normalization.
    pub norm: Norm,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            lowercase: true,
            min_term_len: 2,
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }
}

/// A fitted TF-IDF vectorizer.
///
/// The vocabulary is frozen after fitting; terms not seen during fitting
/// contribute nothing at transform time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
    /// Vocabulary: term -> index mapping.
    vocabulary: BTreeMap<String, usize>,
    /// Inverse document frequency for each index.
    idf: Vec<f64>,
    /// Number of documents seen during fitting.
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Learn vocabulary and IDF weights from `documents`.
    ///
    /// An empty corpus yields an empty vocabulary.
    pub fn fit<S: AsRef<str>>(config: VectorizerConfig, documents: &[S]) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let unique_terms: BTreeSet<String> =
                Self::extract_terms(&config, doc.as_ref()).into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let ordered: BTreeSet<&String> = document_frequency.keys().collect();
        let vocabulary: BTreeMap<String, usize> = ordered
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let n_documents = documents.len();
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            idf[idx] = Self::smooth_idf(n_documents, df);
        }

        TfIdfVectorizer {
            config,
            vocabulary,
            idf,
            n_documents,
        }
    }

    /// Fit on `documents` and return their vectors.
    pub fn fit_transform<S: AsRef<str>>(
        config: VectorizerConfig,
        documents: &[S],
    ) -> (Self, Vec<FeatureVector>) {
        let vectorizer = Self::fit(config, documents);
        let rows = vectorizer.transform(documents);
        (vectorizer, rows)
    }

    /// Transform documents with the frozen vocabulary.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Vec<FeatureVector> {
        documents
            .iter()
            .map(|doc| self.transform_one(doc.as_ref()))
            .collect()
    }

    /// Transform a single document.
    pub fn transform_one(&self, document: &str) -> FeatureVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in Self::extract_terms(&self.config, document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if self.config.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (idx, tf * self.idf[idx])
            })
            .collect();

        let mut row = FeatureVector::from_entries(self.vocabulary.len(), entries);
        if self.config.norm == Norm::L2 {
            row.normalize_l2();
        }
        row
    }

    /// Terms of `text` as seen by this vectorizer, in order of occurrence.
    pub fn terms(&self, text: &str) -> Vec<String> {
        Self::extract_terms(&self.config, text)
    }

    fn extract_terms(config: &VectorizerConfig, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|segment| segment.chars().any(char::is_alphanumeric))
            .filter(|segment| segment.chars().count() >= config.min_term_len)
            .map(|segment| {
                if config.lowercase {
                    segment.to_lowercase()
                } else {
                    segment.to_string()
                }
            })
            .collect()
    }

    fn smooth_idf(n_documents: usize, df: usize) -> f64 {
        ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The term -> index mapping.
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    /// Index of `term`, if known.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weights by index.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Number of documents seen during fitting.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// The settings this vectorizer was fitted with.
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Check internal consistency of a (deserialized) vectorizer.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.idf.len() != self.vocabulary.len() {
            return Err(format!(
                "idf has {} weights for {} terms",
                self.idf.len(),
                self.vocabulary.len()
            ));
        }
        let mut seen = vec![false; self.vocabulary.len()];
        for (term, &idx) in &self.vocabulary {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(format!("term {term:?} has invalid index {idx}")),
            }
        }
        if let Some(bad) = self.idf.iter().find(|w| !w.is_finite() || **w < 1.0) {
            return Err(format!("invalid idf weight {bad}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_vocabulary_is_lexicographic() {
        let docs = ["zebra apple", "mango apple"];
        let vectorizer = TfIdfVectorizer::fit(VectorizerConfig::default(), &docs);

        assert_eq!(vectorizer.index_of("apple"), Some(0));
        assert_eq!(vectorizer.index_of("mango"), Some(1));
        assert_eq!(vectorizer.index_of("zebra"), Some(2));
        assert_eq!(vectorizer.n_documents(), 2);
    }

    #[test]
    fn test_smooth_idf() {
        let docs = ["apple banana", "apple", "cherry"];
        let vectorizer = TfIdfVectorizer::fit(VectorizerConfig::default(), &docs);

        let apple = vectorizer.index_of("apple").unwrap();
        let cherry = vectorizer.index_of("cherry").unwrap();
        // df(apple) = 2, df(cherry) = 1, n = 3
        assert!((vectorizer.idf()[apple] - ((4.0f64 / 3.0).ln() + 1.0)).abs() < EPS);
        assert!((vectorizer.idf()[cherry] - ((4.0f64 / 2.0).ln() + 1.0)).abs() < EPS);
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let docs = ["good good movie", "bad movie"];
        let (_, rows) = TfIdfVectorizer::fit_transform(VectorizerConfig::default(), &docs);

        for row in &rows {
            assert!((row.l2_norm() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_transform_matches_fit_transform() {
        let docs = ["love this", "hate that", "this is great"];
        let (vectorizer, rows) = TfIdfVectorizer::fit_transform(VectorizerConfig::default(), &docs);

        assert_eq!(vectorizer.transform(&docs), rows);
    }

    #[test]
    fn test_unknown_terms_are_ignored() {
        let (vectorizer, _) =
            TfIdfVectorizer::fit_transform(VectorizerConfig::default(), &["love", "hate"]);

        let rows = vectorizer.transform(&["completely unseen words", ""]);
        assert!(rows[0].is_zero());
        assert!(rows[1].is_zero());
        assert_eq!(rows[0].dim(), 2);
    }

    #[test]
    fn test_min_term_len_and_lowercase() {
        let vectorizer = TfIdfVectorizer::fit(VectorizerConfig::default(), &["I LOVE a Cat!"]);

        assert_eq!(vectorizer.terms("I LOVE a Cat!"), vec!["love", "cat"]);
        assert_eq!(vectorizer.vocabulary_size(), 2);
    }

    #[test]
    fn test_sublinear_tf_without_norm() {
        let config = VectorizerConfig {
            sublinear_tf: true,
            norm: Norm::None,
            ..VectorizerConfig::default()
        };
        let vectorizer = TfIdfVectorizer::fit(config, &["spam spam spam"]);
        let row = vectorizer.transform_one("spam spam spam");

        // single document: idf = ln(2/2) + 1 = 1
        assert!((row.get(0) - (1.0 + 3.0f64.ln())).abs() < EPS);
    }

    #[test]
    fn test_empty_corpus() {
        let empty: [&str; 0] = [];
        let (vectorizer, rows) = TfIdfVectorizer::fit_transform(VectorizerConfig::default(), &empty);

        assert_eq!(vectorizer.vocabulary_size(), 0);
        assert!(rows.is_empty());
        assert!(vectorizer.validate().is_ok());
    }

    #[test]
    fn test_validate_detects_inconsistency() {
        let mut vectorizer = TfIdfVectorizer::fit(VectorizerConfig::default(), &["one two"]);
        assert!(vectorizer.validate().is_ok());

        vectorizer.idf.pop();
        assert!(vectorizer.validate().is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: VectorizerConfig = serde_json::from_str(r#"{"norm": "none"}"#).unwrap();
        assert_eq!(config.norm, Norm::None);
        assert_eq!(config.min_term_len, 2);
        assert!(config.lowercase);
    }
}
