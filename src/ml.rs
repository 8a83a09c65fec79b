//! Feature extraction, classification and evaluation.
//!
//! - [`tfidf`]: sparse TF-IDF features over normalized messages
//! - [`naive_bayes`]: multinomial Naive Bayes on those features
//! - [`pipeline`]: the two composed into a trainable, persistable unit
//! - [`split`] and [`metrics`]: held-out evaluation

pub mod feature;
pub mod label;
pub mod metrics;
pub mod naive_bayes;
pub mod pipeline;
pub mod split;
pub mod tfidf;

pub use feature::FeatureVector;
pub use label::Label;
pub use metrics::EvaluationReport;
pub use pipeline::{Pipeline, PipelineConfig, TrainedPipeline};
