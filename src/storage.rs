//! Persistence of trained pipelines.
//!
//! A trained pipeline is stored as a single self-describing file; see
//! [`model_store`] for the layout.

pub mod model_store;

pub use model_store::{ArtifactMetadata, ModelArtifact, ModelStore};
