//! Multinomial Naive Bayes classifier.
//!
//! Trained on TF-IDF rows: per class, the feature weights are summed and
//! turned into Laplace-smoothed log probabilities
//!
//! ```text
//! log P(t | c) = ln((N_ct + alpha) / (N_c + alpha * |V|))
//! ```
//!
//! and prediction picks the class maximizing
//! `log P(c) + sum_t x_t * log P(t | c)`. Ties go to the lowest label.
//!
//! A [`MultinomialNb`] only exists as the result of a successful
//! [`MultinomialNb::fit`], so there is no untrained classifier to predict
//! with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::ml::feature::FeatureVector;
use crate::ml::label::Label;

/// Classifier settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Additive (Laplace/Lidstone) smoothing, must be > 0.
    pub alpha: f64,
    /// Learn class priors from the data; uniform priors otherwise.
    pub fit_prior: bool,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        NaiveBayesConfig {
            alpha: 1.0,
            fit_prior: true,
        }
    }
}

impl NaiveBayesConfig {
    /// Reject settings that cannot produce a valid model.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(SentirError::invalid_config(format!(
                "alpha must be a positive number, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// A fitted multinomial Naive Bayes model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    config: NaiveBayesConfig,
    /// Classes in ascending order.
    classes: Vec<Label>,
    /// Training rows per class.
    class_count: Vec<usize>,
    class_log_prior: Vec<f64>,
    /// `[class][feature]` log probabilities.
    feature_log_prob: Vec<Vec<f64>>,
    n_features: usize,
}

impl MultinomialNb {
    /// Fit the model on `(vector, label)` pairs.
    ///
    /// Fails with [`SentirError::InputLengthMismatch`] if the counts differ
    /// and with [`SentirError::InsufficientData`] if there are no rows or
    /// the feature space is empty.
    pub fn fit(config: NaiveBayesConfig, vectors: &[FeatureVector], labels: &[Label]) -> Result<Self> {
        config.validate()?;

        if vectors.len() != labels.len() {
            return Err(SentirError::InputLengthMismatch {
                texts: vectors.len(),
                labels: labels.len(),
            });
        }
        if vectors.is_empty() {
            return Err(SentirError::insufficient_data("no training rows"));
        }

        let n_features = vectors[0].dim();
        if n_features == 0 {
            return Err(SentirError::insufficient_data(
                "empty feature space: no terms survived normalization",
            ));
        }
        if let Some(bad) = vectors.iter().find(|v| v.dim() != n_features) {
            return Err(SentirError::invalid_operation(format!(
                "feature dimension mismatch: expected {n_features}, got {}",
                bad.dim()
            )));
        }

        // class -> (row count, summed feature weights)
        let mut per_class: BTreeMap<Label, (usize, Vec<f64>)> = BTreeMap::new();
        for (vector, &label) in vectors.iter().zip(labels) {
            let (count, totals) = per_class
                .entry(label)
                .or_insert_with(|| (0, vec![0.0; n_features]));
            *count += 1;
            for (idx, weight) in vector.iter() {
                totals[idx] += weight;
            }
        }

        let n_classes = per_class.len();
        let n_rows = vectors.len() as f64;
        let smoothing_total = config.alpha * n_features as f64;

        let mut classes = Vec::with_capacity(n_classes);
        let mut class_count = Vec::with_capacity(n_classes);
        let mut class_log_prior = Vec::with_capacity(n_classes);
        let mut feature_log_prob = Vec::with_capacity(n_classes);

        for (label, (count, totals)) in per_class {
            let class_total: f64 = totals.iter().sum();
            let denominator = (class_total + smoothing_total).ln();
            let log_probs = totals
                .iter()
                .map(|&n_ct| (n_ct + config.alpha).ln() - denominator)
                .collect();

            let prior = if config.fit_prior {
                (count as f64 / n_rows).ln()
            } else {
                -(n_classes as f64).ln()
            };

            classes.push(label);
            class_count.push(count);
            class_log_prior.push(prior);
            feature_log_prob.push(log_probs);
        }

        Ok(MultinomialNb {
            config,
            classes,
            class_count,
            class_log_prior,
            feature_log_prob,
            n_features,
        })
    }

    /// Unnormalized log posterior per class, in class order.
    ///
    /// Feature indices outside the fitted space are ignored.
    pub fn joint_log_likelihood(&self, vector: &FeatureVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| prior + vector.dot_dense(log_probs))
            .collect()
    }

    /// Most probable label for a single vector.
    pub fn predict_one(&self, vector: &FeatureVector) -> Label {
        let scores = self.joint_log_likelihood(vector);
        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = i;
            }
        }
        self.classes[best]
    }

    /// Most probable label per vector.
    pub fn predict(&self, vectors: &[FeatureVector]) -> Vec<Label> {
        vectors.iter().map(|v| self.predict_one(v)).collect()
    }

    /// Classes in ascending order.
    pub fn classes(&self) -> &[Label] {
        &self.classes
    }

    /// Training rows per class, aligned with [`classes`](Self::classes).
    pub fn class_count(&self) -> &[usize] {
        &self.class_count
    }

    /// Log priors, aligned with [`classes`](Self::classes).
    pub fn class_log_prior(&self) -> &[f64] {
        &self.class_log_prior
    }

    /// Per-class feature log probabilities.
    pub fn feature_log_prob(&self) -> &[Vec<f64>] {
        &self.feature_log_prob
    }

    /// Dimensionality of the feature space.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// The settings this model was fitted with.
    pub fn config(&self) -> &NaiveBayesConfig {
        &self.config
    }

    /// Check internal consistency of a (deserialized) model.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let n = self.classes.len();
        if n == 0 {
            return Err("classifier has no classes".to_string());
        }
        if self.class_count.len() != n || self.class_log_prior.len() != n || self.feature_log_prob.len() != n {
            return Err(format!("classifier tables disagree on class count {n}"));
        }
        if self.classes.windows(2).any(|w| w[0] >= w[1]) {
            return Err("classes are not strictly ascending".to_string());
        }
        if let Some(row) = self.feature_log_prob.iter().find(|row| row.len() != self.n_features) {
            return Err(format!(
                "feature table row has {} entries, expected {}",
                row.len(),
                self.n_features
            ));
        }
        Ok(())
    }
}
