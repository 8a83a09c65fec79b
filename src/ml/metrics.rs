//! Classification metrics.
//!
//! [`EvaluationReport::compute`] derives per-class precision, recall, F1 and
//! support from true and predicted labels. The classes reported are the
//! union of both label lists. A ratio with a zero denominator is reported
//! as `0.0`.
//!
//! The [`Display`](std::fmt::Display) impl renders the usual report table:
//!
//! ```text
//!              precision    recall  f1-score   support
//!
//!            0      1.00      0.50      0.67         2
//!            1      0.67      1.00      0.80         2
//!
//!     accuracy                          0.75         4
//!    macro avg      0.83      0.75      0.73         4
//! weighted avg      0.83      0.75      0.73         4
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::ml::label::Label;

/// Metrics for a single class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub label: Label,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true rows of this class.
    pub support: usize,
}

/// Averaged precision/recall/F1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Held-out evaluation of a trained pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Per-class metrics, ascending by label.
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub macro_avg: AverageMetrics,
    /// Averaged by support.
    pub weighted_avg: AverageMetrics,
    /// Rows evaluated.
    pub support: usize,
    /// Rows the evaluated model was trained on.
    pub train_size: usize,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

impl EvaluationReport {
    /// Compute the report for aligned true and predicted labels.
    pub fn compute(y_true: &[Label], y_pred: &[Label]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(SentirError::InputLengthMismatch {
                texts: y_pred.len(),
                labels: y_true.len(),
            });
        }
        if y_true.is_empty() {
            return Err(SentirError::insufficient_data("no rows to evaluate"));
        }

        let labels: BTreeSet<Label> = y_true.iter().chain(y_pred).copied().collect();
        let pairs: Vec<(Label, Label)> = y_true.iter().copied().zip(y_pred.iter().copied()).collect();

        let classes: Vec<ClassMetrics> = labels
            .into_iter()
            .map(|label| {
                let true_positive = pairs.iter().filter(|&&(t, p)| t == label && p == label).count();
                let predicted = pairs.iter().filter(|&&(_, p)| p == label).count();
                let support = pairs.iter().filter(|&&(t, _)| t == label).count();

                let precision = ratio(true_positive, predicted);
                let recall = ratio(true_positive, support);
                ClassMetrics {
                    label,
                    precision,
                    recall,
                    f1: f1_score(precision, recall),
                    support,
                }
            })
            .collect();

        let total = y_true.len();
        let correct = pairs.iter().filter(|&&(t, p)| t == p).count();

        let n_classes = classes.len() as f64;
        let macro_avg = AverageMetrics {
            precision: classes.iter().map(|c| c.precision).sum::<f64>() / n_classes,
            recall: classes.iter().map(|c| c.recall).sum::<f64>() / n_classes,
            f1: classes.iter().map(|c| c.f1).sum::<f64>() / n_classes,
        };

        let weight = |c: &ClassMetrics| c.support as f64 / total as f64;
        let weighted_avg = AverageMetrics {
            precision: classes.iter().map(|c| c.precision * weight(c)).sum(),
            recall: classes.iter().map(|c| c.recall * weight(c)).sum(),
            f1: classes.iter().map(|c| c.f1 * weight(c)).sum(),
        };

        Ok(EvaluationReport {
            classes,
            accuracy: ratio(correct, total),
            macro_avg,
            weighted_avg,
            support: total,
            train_size: 0,
        })
    }

    /// Record how many rows the evaluated model was trained on.
    pub fn with_train_size(mut self, train_size: usize) -> Self {
        self.train_size = train_size;
        self
    }

    /// Metrics for `label`, if it appeared in the evaluation.
    pub fn class(&self, label: Label) -> Option<&ClassMetrics> {
        self.classes.iter().find(|c| c.label == label)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|c| c.label.to_string().len())
            .chain(std::iter::once("weighted avg".len()))
            .max()
            .unwrap_or(12);

        writeln!(
            f,
            "{:>width$} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for c in &self.classes {
            writeln!(
                f,
                "{:>width$} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                c.label.to_string(),
                c.precision,
                c.recall,
                c.f1,
                c.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.support
        )?;
        for (name, avg) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>width$} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                name, avg.precision, avg.recall, avg.f1, self.support
            )?;
        }
        Ok(())
    }
}
