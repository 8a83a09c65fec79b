//! Runtime configuration.
//!
//! Configuration is read from a JSON file; every field is optional and
//! falls back to its default. Command-line flags and `SENTIR_*`
//! environment variables take precedence over file values (applied by the
//! CLI).
//!
//! ```json
//! {
//!   "model_path": "sentiment_model.bin",
//!   "resource_path": null,
//!   "dataset": { "messages": "chat_dataset.txt", "labels": { "inline": "1,0,1,0" } },
//!   "training": { "test_fraction": 0.2, "seed": 42, "refit_on_full_data": false },
//!   "vectorizer": { "lowercase": true, "min_term_len": 2, "sublinear_tf": false, "norm": "l2" },
//!   "classifier": { "alpha": 1.0, "fit_prior": true }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::language::LanguageResource;
use crate::dataset::DatasetConfig;
use crate::error::Result;
use crate::ml::naive_bayes::NaiveBayesConfig;
use crate::ml::pipeline::{PipelineConfig, TrainingConfig};
use crate::ml::tfidf::VectorizerConfig;

/// Default artifact location.
pub const DEFAULT_MODEL_PATH: &str = "sentiment_model.bin";

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentirConfig {
    /// Where the trained model is stored.
    pub model_path: PathBuf,
    /// JSON language resource; the built-in English tables when unset.
    pub resource_path: Option<PathBuf>,
    /// Training data for the startup fallback.
    pub dataset: DatasetConfig,
    pub training: TrainingConfig,
    pub vectorizer: VectorizerConfig,
    pub classifier: NaiveBayesConfig,
}

impl Default for SentirConfig {
    fn default() -> Self {
        SentirConfig {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            resource_path: None,
            dataset: DatasetConfig::default(),
            training: TrainingConfig::default(),
            vectorizer: VectorizerConfig::default(),
            classifier: NaiveBayesConfig::default(),
        }
    }
}

impl SentirConfig {
    /// Read and validate a configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SentirConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.pipeline_config().validate()
    }

    /// The settings handed to [`Pipeline`](crate::ml::pipeline::Pipeline).
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            vectorizer: self.vectorizer.clone(),
            classifier: self.classifier.clone(),
            training: self.training.clone(),
        }
    }

    /// Load the configured language resource.
    pub fn language_resource(&self) -> Result<Arc<LanguageResource>> {
        let resource = match &self.resource_path {
            Some(path) => LanguageResource::from_path(path)?,
            None => LanguageResource::english(),
        };
        Ok(Arc::new(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LabelSource;
    use crate::error::SentirError;
    use crate::ml::tfidf::Norm;

    #[test]
    fn test_defaults() {
        let config = SentirConfig::default();
        assert_eq!(config.model_path, PathBuf::from("sentiment_model.bin"));
        assert_eq!(config.training.test_fraction, 0.2);
        assert_eq!(config.training.seed, 42);
        assert!(!config.training.refit_on_full_data);
        assert_eq!(config.classifier.alpha, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = SentirConfig::from_json(
            r#"{
                "model_path": "models/chat.bin",
                "dataset": {"messages": "chat.txt", "labels": {"inline": "1,0"}},
                "vectorizer": {"norm": "none"},
                "classifier": {"alpha": 0.5}
            }"#,
        )
        .unwrap();

        assert_eq!(config.model_path, PathBuf::from("models/chat.bin"));
        assert_eq!(
            config.dataset.labels,
            Some(LabelSource::Inline("1,0".to_string()))
        );
        assert_eq!(config.vectorizer.norm, Norm::None);
        assert_eq!(config.classifier.alpha, 0.5);
        assert!(config.classifier.fit_prior);
        assert_eq!(config.training.seed, 42);
    }

    #[test]
    fn test_invalid_values() {
        let err = SentirConfig::from_json(r#"{"classifier": {"alpha": 0}}"#).unwrap_err();
        assert!(matches!(err, SentirError::InvalidConfig(_)));

        let err = SentirConfig::from_json(r#"{"training": {"test_fraction": 1.0}}"#).unwrap_err();
        assert!(matches!(err, SentirError::InvalidConfig(_)));

        let err = SentirConfig::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, SentirError::Json(_)));
    }

    #[test]
    fn test_missing_resource_file() {
        let config = SentirConfig {
            resource_path: Some(PathBuf::from("/nonexistent/resource.json")),
            ..SentirConfig::default()
        };
        assert!(matches!(
            config.language_resource().unwrap_err(),
            SentirError::ResourceLoad(_)
        ));
    }
}
