//! Model lifecycle and batch analysis.
//!
//! [`ModelSlot`] holds the process-wide model through an explicit state
//! machine:
//!
//! ```text
//! Absent -> Loading -> Trained(model)
//!                   -> Failed(reason)
//!                   -> Absent          (artifact not found)
//! ```
//!
//! The whole transition happens under the slot's write lock, so inference
//! never observes a half-initialized model. Inference clones the `Arc`
//! under a short read lock and runs without holding it.
//!
//! [`SentimentService`] ties the slot to a [`Normalizer`] and a
//! [`ModelStore`]: at startup it loads the stored artifact or, if there is
//! none, trains on a fallback dataset and saves the result.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::Normalizer;
use crate::config::SentirConfig;
use crate::dataset::Dataset;
use crate::error::{Result, SentirError};
use crate::ml::label::Label;
use crate::ml::metrics::EvaluationReport;
use crate::ml::pipeline::{Pipeline, PipelineConfig, TrainedPipeline};
use crate::storage::model_store::{ArtifactMetadata, ModelStore};

/// State of a [`ModelSlot`].
#[derive(Clone, Debug)]
pub enum SlotState {
    Absent,
    Loading,
    Trained(Arc<TrainedPipeline>),
    Failed(String),
}

impl SlotState {
    pub fn name(&self) -> &'static str {
        match self {
            SlotState::Absent => "absent",
            SlotState::Loading => "loading",
            SlotState::Trained(_) => "trained",
            SlotState::Failed(_) => "failed",
        }
    }
}

/// Holds the shared model.
#[derive(Debug)]
pub struct ModelSlot {
    state: RwLock<SlotState>,
}

impl ModelSlot {
    pub fn new() -> Self {
        ModelSlot {
            state: RwLock::new(SlotState::Absent),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SlotState {
        self.state.read().clone()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.state.read(), SlotState::Trained(_))
    }

    /// Run `init` to populate an absent slot.
    ///
    /// A missing artifact ([`SentirError::ArtifactNotFound`]) puts the slot
    /// back to `Absent`, so a later start can still train one. Any other
    /// error moves it to `Failed`, and so does a panic inside `init`. A slot
    /// that is not `Absent` rejects initialization with
    /// [`SentirError::InvalidOperation`].
    pub fn initialize<F>(&self, init: F) -> Result<Arc<TrainedPipeline>>
    where
        F: FnOnce() -> Result<Arc<TrainedPipeline>>,
    {
        let mut state = self.state.write();
        if !matches!(*state, SlotState::Absent) {
            return Err(SentirError::invalid_operation(format!(
                "model slot is already {}",
                state.name()
            )));
        }

        let loading = LoadingGuard::enter(&mut state);
        match init() {
            Ok(model) => {
                loading.finish(SlotState::Trained(Arc::clone(&model)));
                Ok(model)
            }
            Err(e) if e.is_not_found() => {
                loading.finish(SlotState::Absent);
                Err(e)
            }
            Err(e) => {
                loading.finish(SlotState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// The trained model, or [`SentirError::PredictBeforeTrain`].
    pub fn get(&self) -> Result<Arc<TrainedPipeline>> {
        match &*self.state.read() {
            SlotState::Trained(model) => Ok(Arc::clone(model)),
            _ => Err(SentirError::PredictBeforeTrain),
        }
    }
}

/// Keeps a slot in `Loading` until finished. Dropped unfinished (`init`
/// unwound), it leaves the slot `Failed`.
struct LoadingGuard<'a> {
    state: &'a mut SlotState,
}

impl<'a> LoadingGuard<'a> {
    fn enter(state: &'a mut SlotState) -> Self {
        *state = SlotState::Loading;
        LoadingGuard { state }
    }

    fn finish(self, next: SlotState) {
        *self.state = next;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if matches!(*self.state, SlotState::Loading) {
            *self.state = SlotState::Failed("model initialization panicked".to_string());
        }
    }
}

impl Default for ModelSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// How startup obtained its model.
#[derive(Clone, Debug)]
pub enum StartupOutcome {
    /// An existing artifact was loaded.
    Loaded(ArtifactMetadata),
    /// No artifact existed; a model was trained and saved.
    Trained {
        report: EvaluationReport,
        metadata: ArtifactMetadata,
    },
}

/// Result of analyzing a batch of messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// One label per message, in order.
    pub labels: Vec<Label>,
    /// Hits per trained class, zero counts included.
    pub counts: BTreeMap<Label, usize>,
    /// The normalized messages the labels were computed from.
    pub normalized: Vec<String>,
}

/// Normalization, model lifecycle and prediction behind one handle.
pub struct SentimentService {
    normalizer: Normalizer,
    store: ModelStore,
    slot: ModelSlot,
}

impl SentimentService {
    pub fn new(normalizer: Normalizer, store: ModelStore) -> Self {
        SentimentService {
            normalizer,
            store,
            slot: ModelSlot::new(),
        }
    }

    /// Build the service described by `config`.
    ///
    /// Fails with [`SentirError::ResourceLoad`] if the language resource
    /// cannot be loaded.
    pub fn from_config(config: &SentirConfig) -> Result<Self> {
        let resource = config.language_resource()?;
        info!(
            "language resource '{}' v{} ({} stop words)",
            resource.name,
            resource.version,
            resource.stop_words.len()
        );
        Ok(Self::new(
            Normalizer::with_resource(resource),
            ModelStore::new(&config.model_path),
        ))
    }

    /// Load the stored model, or train one on `fallback` and save it.
    ///
    /// Only a missing artifact triggers training; a corrupt one fails
    /// startup and leaves the slot `Failed`.
    pub fn start<F>(&self, config: &PipelineConfig, fallback: F) -> Result<StartupOutcome>
    where
        F: FnOnce() -> Result<Dataset>,
    {
        let mut outcome = None;
        self.slot.initialize(|| match self.store.load_artifact() {
            Ok(artifact) => {
                info!(
                    "loaded model from {} ({} terms, trained {})",
                    self.store.path().display(),
                    artifact.metadata.vocabulary_size,
                    artifact.metadata.trained_at
                );
                outcome = Some(StartupOutcome::Loaded(artifact.metadata));
                Ok(Arc::new(artifact.pipeline))
            }
            Err(e) if e.is_not_found() => {
                warn!("{e}; training a fallback model");
                let dataset = fallback()?;
                let (model, report) = self.fit(&dataset, config)?;
                let metadata = self.store.save(&model)?;
                outcome = Some(StartupOutcome::Trained { report, metadata });
                Ok(model)
            }
            Err(e) => Err(e),
        })?;

        outcome.ok_or_else(|| SentirError::invalid_operation("startup produced no model"))
    }

    /// Load the stored model without any fallback.
    pub fn load(&self) -> Result<ArtifactMetadata> {
        let mut metadata = None;
        self.slot.initialize(|| {
            let artifact = self.store.load_artifact()?;
            debug!("loaded model from {}", self.store.path().display());
            metadata = Some(artifact.metadata);
            Ok(Arc::new(artifact.pipeline))
        })?;

        metadata.ok_or_else(|| SentirError::invalid_operation("loading produced no model"))
    }

    /// Train on `dataset`, save the model and install it.
    pub fn train(&self, dataset: &Dataset, config: &PipelineConfig) -> Result<(EvaluationReport, ArtifactMetadata)> {
        let mut result = None;
        self.slot.initialize(|| {
            let (model, report) = self.fit(dataset, config)?;
            let metadata = self.store.save(&model)?;
            result = Some((report, metadata));
            Ok(model)
        })?;

        result.ok_or_else(|| SentirError::invalid_operation("training produced no model"))
    }

    fn fit(&self, dataset: &Dataset, config: &PipelineConfig) -> Result<(Arc<TrainedPipeline>, EvaluationReport)> {
        let normalized = self.normalizer.normalize(dataset.texts())?;
        let mut pipeline = Pipeline::new(config.clone());
        let report = pipeline.train(&normalized, dataset.labels())?;
        info!("evaluation on held-out messages:\n{report}");
        Ok((Arc::clone(pipeline.trained()?), report))
    }

    /// Label each message.
    pub fn predict<S: AsRef<str>>(&self, messages: &[S]) -> Result<Vec<Label>> {
        Ok(self.analyze(messages)?.labels)
    }

    /// Normalize, label and count a batch of messages.
    pub fn analyze<S: AsRef<str>>(&self, messages: &[S]) -> Result<SentimentAnalysis> {
        let model = self.slot.get()?;
        let normalized = self.normalizer.normalize(messages)?;
        let labels = model.predict(&normalized);

        let mut counts: BTreeMap<Label, usize> =
            model.classes().iter().map(|&label| (label, 0)).collect();
        for label in &labels {
            *counts.entry(*label).or_insert(0) += 1;
        }

        debug!("analyzed {} messages: {:?}", labels.len(), counts);
        Ok(SentimentAnalysis {
            labels,
            counts,
            normalized,
        })
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    pub fn slot(&self) -> &ModelSlot {
        &self.slot
    }
}

impl fmt::Debug for SentimentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentService")
            .field("normalizer", &self.normalizer)
            .field("store", &self.store.path())
            .field("state", &self.slot.state().name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scenario() -> Dataset {
        Dataset::new(
            vec![
                "I love this!".to_string(),
                "I hate this!".to_string(),
                "This is great".to_string(),
                "This is terrible".to_string(),
            ],
            vec![Label(1), Label(0), Label(1), Label(0)],
        )
        .unwrap()
    }

    /// Trained on every row, so predictions do not depend on the split.
    fn refit_config() -> PipelineConfig {
        let mut config = PipelineConfig::default();
        config.training.refit_on_full_data = true;
        config
    }

    fn service(dir: &TempDir) -> SentimentService {
        SentimentService::new(Normalizer::english(), ModelStore::new(dir.path().join("model.bin")))
    }

    #[test]
    fn test_slot_transitions() {
        let slot = ModelSlot::new();
        assert!(matches!(slot.state(), SlotState::Absent));
        assert!(matches!(slot.get().unwrap_err(), SentirError::PredictBeforeTrain));

        let err = slot
            .initialize(|| Err(SentirError::artifact_corrupt("m.bin", "bad magic")))
            .unwrap_err();
        assert!(matches!(err, SentirError::ArtifactCorrupt { .. }));
        assert!(matches!(slot.state(), SlotState::Failed(reason) if reason.contains("bad magic")));
        assert!(!slot.is_ready());

        // a failed slot is not retried
        let model = TrainedPipeline::fit(&PipelineConfig::default(), &["a1", "b2"], &[Label(0), Label(1)]).unwrap();
        let err = slot.initialize(|| Ok(Arc::new(model))).unwrap_err();
        assert!(matches!(err, SentirError::InvalidOperation(_)));
    }

    #[test]
    fn test_slot_initialize_once() {
        let slot = ModelSlot::new();
        let model = TrainedPipeline::fit(&PipelineConfig::default(), &["yes", "no"], &[Label(1), Label(0)]).unwrap();
        let model = Arc::new(model);

        slot.initialize(|| Ok(Arc::clone(&model))).unwrap();
        assert!(slot.is_ready());
        assert!(Arc::ptr_eq(&slot.get().unwrap(), &model));

        let err = slot.initialize(|| Ok(Arc::clone(&model))).unwrap_err();
        assert!(matches!(err, SentirError::InvalidOperation(_)));
    }

    #[test]
    fn test_analyze_scenario() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        service.train(&scenario(), &refit_config()).unwrap();

        let analysis = service
            .analyze(&["This is great", "This is terrible", "", "The CATS run!!! 123"])
            .unwrap();

        assert_eq!(analysis.labels.len(), 4);
        assert_eq!(analysis.labels[0], Label(1));
        assert_eq!(analysis.labels[1], Label(0));
        assert_eq!(analysis.normalized, vec!["great", "terrible", "", "cat run"]);
        assert_eq!(analysis.counts.len(), 2);
        assert_eq!(analysis.counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_counts_include_zero_classes() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        service.train(&scenario(), &refit_config()).unwrap();

        let analysis = service.analyze(&["great"]).unwrap();
        assert_eq!(analysis.counts[&Label(1)], 1);
        assert_eq!(analysis.counts[&Label(0)], 0);
    }

    #[test]
    fn test_predict_before_start() {
        let dir = TempDir::new().unwrap();
        let err = service(&dir).predict(&["hello"]).unwrap_err();
        assert!(matches!(err, SentirError::PredictBeforeTrain));
    }

    #[test]
    fn test_start_falls_back_then_loads() {
        let dir = TempDir::new().unwrap();

        let first = service(&dir);
        let outcome = first.start(&PipelineConfig::default(), || Ok(scenario())).unwrap();
        assert!(matches!(outcome, StartupOutcome::Trained { .. }));
        assert!(first.store().exists());

        let second = service(&dir);
        let outcome = second
            .start(&PipelineConfig::default(), || panic!("fallback must not run"))
            .unwrap();
        assert!(matches!(outcome, StartupOutcome::Loaded(_)));
        assert_eq!(
            first.predict(&["This is great"]).unwrap(),
            second.predict(&["This is great"]).unwrap()
        );
    }

    #[test]
    fn test_start_with_corrupt_artifact_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("model.bin"), b"not a model").unwrap();

        let service = service(&dir);
        let err = service
            .start(&PipelineConfig::default(), || Ok(scenario()))
            .unwrap_err();

        assert!(matches!(err, SentirError::ArtifactCorrupt { .. }));
        assert!(matches!(service.slot().state(), SlotState::Failed(_)));
    }

    #[test]
    fn test_load_missing_artifact() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let err = service.load().unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(service.slot().state(), SlotState::Absent));
        assert!(!service.store().exists());

        // the slot is still free for a start that trains
        let outcome = service.start(&PipelineConfig::default(), || Ok(scenario())).unwrap();
        assert!(matches!(outcome, StartupOutcome::Trained { .. }));
        assert!(service.slot().is_ready());
        assert!(service.store().exists());
    }

    #[test]
    fn test_panicking_init_leaves_slot_failed() {
        let slot = ModelSlot::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            slot.initialize(|| panic!("vocabulary exploded"))
        }));
        assert!(result.is_err());

        assert!(matches!(slot.state(), SlotState::Failed(reason) if reason.contains("panicked")));
        assert!(matches!(slot.get().unwrap_err(), SentirError::PredictBeforeTrain));
    }
}
