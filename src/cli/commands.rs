//! Command implementations for the sentir CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SentirConfig;
use crate::dataset::{Dataset, LabelSource};
use crate::service::{SentimentService, StartupOutcome};
use crate::storage::ModelStore;

/// Execute a CLI command.
pub fn execute_command(args: SentirArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Train(train_args) => train_model(train_args, config, &args),
        Command::Predict(predict_args) => predict_messages(predict_args, config, &args),
        Command::Normalize(normalize_args) => normalize_messages(normalize_args, &config, &args),
        Command::Inspect(inspect_args) => inspect_model(inspect_args, &config, &args),
    }
}

/// Read the configuration file, if any, and apply global overrides.
fn load_config(args: &SentirArgs) -> Result<SentirConfig> {
    let mut config = match &args.config {
        Some(path) => SentirConfig::from_path(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => SentirConfig::default(),
    };
    if let Some(resource) = &args.resource {
        config.resource_path = Some(resource.clone());
    }
    Ok(config)
}

fn model_path(override_path: &Option<PathBuf>, config: &SentirConfig) -> PathBuf {
    override_path
        .clone()
        .unwrap_or_else(|| config.model_path.clone())
}

/// Train a model on a message file and save it.
fn train_model(train_args: &TrainArgs, mut config: SentirConfig, args: &SentirArgs) -> Result<()> {
    config.model_path = model_path(&train_args.model, &config);
    if let Some(fraction) = train_args.test_fraction {
        config.training.test_fraction = fraction;
    }
    if let Some(seed) = train_args.seed {
        config.training.seed = seed;
    }
    if train_args.refit {
        config.training.refit_on_full_data = true;
    }
    config.validate()?;

    let labels = match (&train_args.labels.labels, &train_args.labels.labels_file) {
        (Some(list), _) => LabelSource::Inline(list.clone()),
        (None, Some(path)) => LabelSource::File(path.clone()),
        (None, None) => anyhow::bail!("either --labels or --labels-file is required"),
    };
    let dataset = Dataset::load(&train_args.data, &labels)
        .with_context(|| format!("failed to load training data {}", train_args.data.display()))?;
    info!(
        "training on {} messages from {}",
        dataset.len(),
        train_args.data.display()
    );

    let service = SentimentService::from_config(&config)?;
    let (report, metadata) = service.train(&dataset, &config.pipeline_config())?;

    output_result(
        "Model trained successfully",
        &TrainingResult {
            model_path: config.model_path.display().to_string(),
            report,
            metadata,
        },
        args,
    )?;
    Ok(())
}

/// Read messages from a file, one per line, skipping empty lines.
fn read_input(path: &Path) -> Result<Vec<String>> {
    Dataset::read_messages(path)
        .with_context(|| format!("failed to read messages from {}", path.display()))
}

/// Classify messages with the stored model, training and saving one on the
/// configured dataset if none exists yet.
fn predict_messages(predict_args: &PredictArgs, mut config: SentirConfig, args: &SentirArgs) -> Result<()> {
    config.model_path = model_path(&predict_args.model, &config);
    let messages = match &predict_args.input {
        Some(path) => read_input(path)?,
        None => predict_args.messages.clone(),
    };

    let service = SentimentService::from_config(&config)?;
    if predict_args.no_fallback {
        service
            .load()
            .with_context(|| "no usable model; run `sentir train` or drop --no-fallback")?;
    } else {
        let dataset_config = config.dataset.clone();
        let outcome = service.start(&config.pipeline_config(), || dataset_config.load_or_sample())?;
        if let StartupOutcome::Trained { metadata, .. } = outcome {
            info!(
                "trained fallback model with {} terms, saved to {}",
                metadata.vocabulary_size,
                config.model_path.display()
            );
        }
    }

    let analysis = service.analyze(&messages)?;
    let predictions = messages
        .into_iter()
        .zip(analysis.normalized)
        .zip(&analysis.labels)
        .map(|((message, normalized), &label)| {
            debug!("{label}: {normalized:?}");
            Prediction {
                message,
                normalized,
                label,
                sentiment: label.name(),
            }
        })
        .collect();
    let counts = analysis
        .counts
        .iter()
        .map(|(label, count)| (label.name(), *count))
        .collect();

    output_result(
        "Predictions",
        &PredictionResults {
            predictions,
            counts,
        },
        args,
    )?;
    Ok(())
}

/// Print normalized messages.
fn normalize_messages(normalize_args: &NormalizeArgs, config: &SentirConfig, args: &SentirArgs) -> Result<()> {
    let normalizer = crate::analysis::Normalizer::with_resource(config.language_resource()?);
    let normalized = normalizer.normalize(&normalize_args.messages)?;

    output_result(
        "Normalized messages",
        &NormalizationResults { normalized },
        args,
    )?;
    Ok(())
}

/// Print the metadata of a stored model.
fn inspect_model(inspect_args: &InspectArgs, config: &SentirConfig, args: &SentirArgs) -> Result<()> {
    let path = model_path(&inspect_args.model, config);
    let metadata = ModelStore::new(&path).inspect()?;

    output_result("Model information", &ModelInfo::new(&path, metadata), args)?;
    Ok(())
}
