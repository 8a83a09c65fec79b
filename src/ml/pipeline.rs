//! The train/evaluate/predict pipeline.
//!
//! A [`Pipeline`] starts out untrained. [`Pipeline::train`] partitions the
//! data, fits a [`TrainedPipeline`] (TF-IDF vectorizer plus Naive Bayes
//! classifier) on the training rows and evaluates it on the held-out rows.
//! That model, which has never seen the held-out rows, is the one delivered
//! unless `refit_on_full_data` asks for a second fit on every row. The
//! transition is one way: a trained pipeline refuses to train again.
//!
//! Inputs are normalized messages; see
//! [`Normalizer`](crate::analysis::normalizer::Normalizer).
//!
//! # Examples
//!
//! ```
//! use sentir::ml::label::Label;
//! use sentir::ml::pipeline::{Pipeline, PipelineConfig};
//!
//! let texts = ["love", "hate", "great", "terrible"];
//! let labels = [Label(1), Label(0), Label(1), Label(0)];
//!
//! let mut pipeline = Pipeline::new(PipelineConfig::default());
//! let report = pipeline.train(&texts, &labels).unwrap();
//! assert_eq!((report.train_size, report.support), (3, 1));
//! assert_eq!(pipeline.trained().unwrap().vectorizer().n_documents(), 3);
//! assert_eq!(pipeline.predict(&["great", "terrible"]).unwrap().len(), 2);
//! ```
//!
//! Refitting on every row after evaluation:
//!
//! ```
//! use sentir::ml::label::Label;
//! use sentir::ml::pipeline::{Pipeline, PipelineConfig, TrainingConfig};
//!
//! let texts = ["love", "hate", "great", "terrible"];
//! let labels = [Label(1), Label(0), Label(1), Label(0)];
//!
//! let mut config = PipelineConfig::default();
//! config.training = TrainingConfig { refit_on_full_data: true, ..TrainingConfig::default() };
//! let mut pipeline = Pipeline::new(config);
//! pipeline.train(&texts, &labels).unwrap();
//!
//! assert_eq!(pipeline.predict(&["great", "terrible"]).unwrap(), vec![Label(1), Label(0)]);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::ml::label::Label;
use crate::ml::metrics::EvaluationReport;
use crate::ml::naive_bayes::{MultinomialNb, NaiveBayesConfig};
use crate::ml::split::TrainTestSplit;
use crate::ml::tfidf::{TfIdfVectorizer, VectorizerConfig};

/// How a training run partitions and uses its data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Fraction of rows held out for evaluation, in `(0, 1)`.
    pub test_fraction: f64,
    /// Seed of the train/test partition.
    pub seed: u64,
    /// Refit the delivered model on all rows after evaluation. Off by
    /// default: the delivered model is the one the report describes.
    pub refit_on_full_data: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            test_fraction: 0.2,
            seed: 42,
            refit_on_full_data: false,
        }
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(SentirError::invalid_config(format!(
                "test fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }
        Ok(())
    }
}

/// Settings for every stage of the pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub vectorizer: VectorizerConfig,
    pub classifier: NaiveBayesConfig,
    pub training: TrainingConfig,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()?;
        self.training.validate()
    }
}

/// A fitted vectorizer and classifier. Immutable; share it through `Arc`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainedPipeline {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
}

impl TrainedPipeline {
    /// Fit vectorizer and classifier on all given rows.
    pub fn fit<S: AsRef<str>>(
        config: &PipelineConfig,
        texts: &[S],
        labels: &[Label],
    ) -> Result<Self> {
        if texts.len() != labels.len() {
            return Err(SentirError::InputLengthMismatch {
                texts: texts.len(),
                labels: labels.len(),
            });
        }

        let (vectorizer, rows) = TfIdfVectorizer::fit_transform(config.vectorizer.clone(), texts);
        let classifier = MultinomialNb::fit(config.classifier.clone(), &rows, labels)?;

        Ok(TrainedPipeline {
            vectorizer,
            classifier,
        })
    }

    /// Predict one label per text, in order.
    pub fn predict<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Label> {
        let rows = self.vectorizer.transform(texts);
        self.classifier.predict(&rows)
    }

    /// The classes this pipeline can predict, ascending.
    pub fn classes(&self) -> &[Label] {
        self.classifier.classes()
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &MultinomialNb {
        &self.classifier
    }

    /// Check that vectorizer and classifier agree with each other.
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.vectorizer.validate()?;
        self.classifier.validate()?;
        if self.classifier.n_features() != self.vectorizer.vocabulary_size() {
            return Err(format!(
                "classifier expects {} features but vocabulary has {} terms",
                self.classifier.n_features(),
                self.vectorizer.vocabulary_size()
            ));
        }
        Ok(())
    }
}

/// Lifecycle state of a [`Pipeline`].
#[derive(Clone, Debug)]
pub enum PipelineState {
    Untrained,
    Trained(Arc<TrainedPipeline>),
}

/// Owns the train-once lifecycle around a [`TrainedPipeline`].
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    state: PipelineState,
}

impl Pipeline {
    /// A new, untrained pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline {
            config,
            state: PipelineState::Untrained,
        }
    }

    /// Wrap an already trained (e.g. loaded) pipeline.
    pub fn from_trained(config: PipelineConfig, trained: Arc<TrainedPipeline>) -> Self {
        Pipeline {
            config,
            state: PipelineState::Trained(trained),
        }
    }

    /// Train on `texts` and `labels`, returning the held-out evaluation.
    ///
    /// Errors:
    /// - [`SentirError::InvalidOperation`] if already trained;
    /// - [`SentirError::InputLengthMismatch`] if the counts differ;
    /// - [`SentirError::InsufficientData`] with fewer than 2 rows or classes.
    pub fn train<S: AsRef<str>>(&mut self, texts: &[S], labels: &[Label]) -> Result<EvaluationReport> {
        if self.is_trained() {
            return Err(SentirError::invalid_operation(
                "pipeline is already trained; construct a new one to retrain",
            ));
        }
        self.config.validate()?;

        if texts.len() != labels.len() {
            return Err(SentirError::InputLengthMismatch {
                texts: texts.len(),
                labels: labels.len(),
            });
        }
        if texts.len() < 2 {
            return Err(SentirError::insufficient_data(format!(
                "need at least 2 samples, got {}",
                texts.len()
            )));
        }
        let distinct: BTreeSet<Label> = labels.iter().copied().collect();
        if distinct.len() < 2 {
            return Err(SentirError::insufficient_data(format!(
                "need at least 2 distinct labels, got {}",
                distinct.len()
            )));
        }

        let training = &self.config.training;
        let split = TrainTestSplit::new(texts.len(), training.test_fraction, training.seed)?;

        let train_texts: Vec<&str> = split.train.iter().map(|&i| texts[i].as_ref()).collect();
        let train_labels = TrainTestSplit::select(labels, &split.train);
        let test_texts: Vec<&str> = split.test.iter().map(|&i| texts[i].as_ref()).collect();
        let test_labels = TrainTestSplit::select(labels, &split.test);

        let train_classes: BTreeSet<Label> = train_labels.iter().copied().collect();
        if train_classes.len() < 2 {
            warn!(
                "training partition contains a single class ({} rows); held-out metrics will be degenerate",
                train_labels.len()
            );
        }

        let held_out_model = TrainedPipeline::fit(&self.config, &train_texts, &train_labels)?;
        let predictions = held_out_model.predict(&test_texts);
        let report = EvaluationReport::compute(&test_labels, &predictions)?
            .with_train_size(train_texts.len());

        info!(
            "trained on {} rows, evaluated on {}: accuracy {:.2}",
            train_texts.len(),
            test_texts.len(),
            report.accuracy
        );

        let delivered = if training.refit_on_full_data {
            let full = TrainedPipeline::fit(&self.config, texts, labels)?;
            info!(
                "refit on all {} rows: {} terms, {} classes",
                texts.len(),
                full.vectorizer().vocabulary_size(),
                full.classes().len()
            );
            full
        } else {
            held_out_model
        };

        self.state = PipelineState::Trained(Arc::new(delivered));
        Ok(report)
    }

    /// Predict one label per text.
    ///
    /// Fails with [`SentirError::PredictBeforeTrain`] while untrained.
    pub fn predict<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Label>> {
        Ok(self.trained()?.predict(texts))
    }

    pub fn is_trained(&self) -> bool {
        matches!(self.state, PipelineState::Trained(_))
    }

    /// The trained model.
    pub fn trained(&self) -> Result<&Arc<TrainedPipeline>> {
        match &self.state {
            PipelineState::Trained(trained) => Ok(trained),
            PipelineState::Untrained => Err(SentirError::PredictBeforeTrain),
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
