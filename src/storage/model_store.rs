//! Single-file model artifacts.
//!
//! # File layout
//!
//! ```text
//! offset  size  field
//! 0       4     magic "SNTM"
//! 4       2     format version (major, minor) = 1.0
//! 6       8     payload length, u64 LE
//! 14      4     CRC-32 of the payload, u32 LE
//! 18      n     payload: ModelArtifact, bincode (serde, standard config)
//! ```
//!
//! Saving writes a sibling `*.tmp` file and renames it over the target, so
//! a reader sees either the previous artifact or the new one.
//!
//! # Examples
//!
//! ```
//! use sentir::ml::label::Label;
//! use sentir::ml::pipeline::{PipelineConfig, TrainedPipeline};
//! use sentir::storage::model_store::ModelStore;
//!
//! # fn main() -> sentir::error::Result<()> {
//! let dir = tempfile::TempDir::new()?;
//! let store = ModelStore::new(dir.path().join("model.bin"));
//!
//! let pipeline = TrainedPipeline::fit(
//!     &PipelineConfig::default(),
//!     &["love", "hate"],
//!     &[Label(1), Label(0)],
//! )?;
//! store.save(&pipeline)?;
//!
//! let loaded = store.load()?;
//! assert_eq!(loaded.predict(&["love"]), pipeline.predict(&["love"]));
//! # Ok(())
//! # }
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentirError};
use crate::ml::label::Label;
use crate::ml::pipeline::TrainedPipeline;

/// Magic bytes at the start of every artifact.
pub const MAGIC: &[u8; 4] = b"SNTM";
/// Format version written by this build.
pub const FORMAT_VERSION: [u8; 2] = [1, 0];

const HEADER_LEN: usize = 4 + 2 + 8 + 4;

/// Descriptive data stored next to the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Version of the crate that wrote the artifact.
    pub crate_version: String,
    pub trained_at: DateTime<Utc>,
    /// Rows the delivered model was fitted on.
    pub n_train_samples: usize,
    pub classes: Vec<Label>,
    pub vocabulary_size: usize,
}

impl ArtifactMetadata {
    /// Describe `pipeline`, stamped with the current time.
    pub fn describe(pipeline: &TrainedPipeline) -> Self {
        ArtifactMetadata {
            crate_version: crate::VERSION.to_string(),
            trained_at: Utc::now(),
            n_train_samples: pipeline.vectorizer().n_documents(),
            classes: pipeline.classes().to_vec(),
            vocabulary_size: pipeline.vectorizer().vocabulary_size(),
        }
    }
}

/// The persisted payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub metadata: ArtifactMetadata,
    pub pipeline: TrainedPipeline,
}

/// Reads and writes the artifact at a fixed path.
#[derive(Clone, Debug)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ModelStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a file exists at the artifact path.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Persist `pipeline`, replacing any existing artifact.
    pub fn save(&self, pipeline: &TrainedPipeline) -> Result<ArtifactMetadata> {
        let artifact = ModelArtifact {
            metadata: ArtifactMetadata::describe(pipeline),
            pipeline: pipeline.clone(),
        };
        let bytes = encode(&artifact)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        info!(
            "saved model artifact to {} ({} bytes, {} terms)",
            self.path.display(),
            bytes.len(),
            artifact.metadata.vocabulary_size
        );
        Ok(artifact.metadata)
    }

    /// Load the full artifact.
    ///
    /// [`SentirError::ArtifactNotFound`] if nothing exists at the path,
    /// [`SentirError::ArtifactCorrupt`] if the bytes cannot be turned back
    /// into a consistent pipeline.
    pub fn load_artifact(&self) -> Result<ModelArtifact> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SentirError::artifact_not_found(&self.path));
            }
            Err(e) => return Err(e.into()),
        };

        let artifact =
            decode(&bytes).map_err(|reason| SentirError::artifact_corrupt(&self.path, reason))?;
        artifact
            .pipeline
            .validate()
            .map_err(|reason| SentirError::artifact_corrupt(&self.path, reason))?;

        debug!(
            "loaded model artifact from {} (written by {} at {})",
            self.path.display(),
            artifact.metadata.crate_version,
            artifact.metadata.trained_at
        );
        Ok(artifact)
    }

    /// Load the trained pipeline.
    pub fn load(&self) -> Result<TrainedPipeline> {
        Ok(self.load_artifact()?.pipeline)
    }

    /// Read only the metadata.
    pub fn inspect(&self) -> Result<ArtifactMetadata> {
        Ok(self.load_artifact()?.metadata)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "model".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn encode(artifact: &ModelArtifact) -> Result<Vec<u8>> {
    let payload = bincode::serde::encode_to_vec(artifact, bincode::config::standard())
        .map_err(|e| SentirError::serialization(format!("Failed to serialize model: {e}")))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION);
    bytes.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    bytes.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

fn decode(bytes: &[u8]) -> std::result::Result<ModelArtifact, String> {
    if bytes.len() < HEADER_LEN {
        return Err(format!("file is {} bytes, shorter than the header", bytes.len()));
    }
    if &bytes[0..4] != MAGIC {
        return Err("bad magic".to_string());
    }

    let (major, minor) = (bytes[4], bytes[5]);
    if major != FORMAT_VERSION[0] {
        return Err(format!("unsupported format version {major}.{minor}"));
    }

    let mut len_bytes = [0u8; 8];
    len_bytes.copy_from_slice(&bytes[6..14]);
    let payload_len = u64::from_le_bytes(len_bytes);

    let mut crc_bytes = [0u8; 4];
    crc_bytes.copy_from_slice(&bytes[14..18]);
    let expected_crc = u32::from_le_bytes(crc_bytes);

    let payload = &bytes[HEADER_LEN..];
    if payload.len() as u64 != payload_len {
        return Err(format!(
            "payload is {} bytes, header says {payload_len}",
            payload.len()
        ));
    }
    if crc32fast::hash(payload) != expected_crc {
        return Err("checksum mismatch".to_string());
    }

    let (artifact, read): (ModelArtifact, usize) =
        bincode::serde::decode_from_slice(payload, bincode::config::standard())
            .map_err(|e| format!("failed to decode payload: {e}"))?;
    if read != payload.len() {
        return Err(format!("{} trailing payload bytes", payload.len() - read));
    }
    Ok(artifact)
}
