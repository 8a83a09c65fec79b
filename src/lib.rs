//! # sentir
//!
//! Sentiment classification for short chat messages.
//!
//! ## Features
//!
//! - Token-level text analysis with a pluggable language resource
//! - TF-IDF features over a deterministic vocabulary
//! - Multinomial Naive Bayes with held-out evaluation
//! - Checksummed model artifacts with train-on-first-start fallback
//!
//! ## Example
//!
//! ```
//! use sentir::analysis::Normalizer;
//! use sentir::ml::{Label, Pipeline, PipelineConfig};
//!
//! let normalizer = Normalizer::english();
//! let texts = normalizer
//!     .normalize(&["I love this", "I hate this", "This is great", "This is terrible"])
//!     .unwrap();
//!
//! // evaluate on a held-out row, then refit on all four
//! let mut config = PipelineConfig::default();
//! config.training.refit_on_full_data = true;
//! let mut pipeline = Pipeline::new(config);
//! let report = pipeline
//!     .train(&texts, &[Label(1), Label(0), Label(1), Label(0)])
//!     .unwrap();
//! assert_eq!(report.support, 1);
//!
//! let query = normalizer.normalize(&["this is great"]).unwrap();
//! assert_eq!(pipeline.predict(&query).unwrap(), vec![Label(1)]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ml;
pub mod service;
pub mod storage;

pub mod prelude {
    pub use crate::analysis::Normalizer;
    pub use crate::config::SentirConfig;
    pub use crate::dataset::Dataset;
    pub use crate::error::{Result, SentirError};
    pub use crate::ml::{EvaluationReport, Label, Pipeline, PipelineConfig, TrainedPipeline};
    pub use crate::service::SentimentService;
    pub use crate::storage::ModelStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
