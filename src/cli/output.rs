//! Output formatting for CLI commands.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentirArgs};
use crate::ml::label::Label;
use crate::ml::metrics::EvaluationReport;
use crate::storage::ArtifactMetadata;

/// Values a command prints.
pub trait HumanOutput {
    /// Plain-text rendering used by `--format human`.
    fn render_human(&self) -> String;
}

/// Result of a training run.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_path: String,
    pub report: EvaluationReport,
    pub metadata: ArtifactMetadata,
}

/// One classified message.
#[derive(Debug, Serialize, Deserialize)]
pub struct Prediction {
    pub message: String,
    pub normalized: String,
    pub label: Label,
    pub sentiment: String,
}

/// Result of a prediction run.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResults {
    pub predictions: Vec<Prediction>,
    /// Keyed by class name.
    pub counts: BTreeMap<String, usize>,
}

/// Normalized messages, aligned with the input.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizationResults {
    pub normalized: Vec<String>,
}

/// Metadata of a stored model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_path: String,
    pub metadata: ArtifactMetadata,
}

impl ModelInfo {
    pub fn new(path: &Path, metadata: ArtifactMetadata) -> Self {
        ModelInfo {
            model_path: path.display().to_string(),
            metadata,
        }
    }
}

fn class_list(classes: &[Label]) -> String {
    classes
        .iter()
        .map(|label| format!("{} ({})", label.name(), label.id()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn metadata_lines(out: &mut String, metadata: &ArtifactMetadata) {
    let _ = writeln!(out, "  Trained at:      {}", metadata.trained_at.to_rfc3339());
    let _ = writeln!(out, "  Written by:      sentir {}", metadata.crate_version);
    let _ = writeln!(out, "  Training rows:   {}", metadata.n_train_samples);
    let _ = writeln!(out, "  Vocabulary size: {}", metadata.vocabulary_size);
    let _ = writeln!(out, "  Classes:         {}", class_list(&metadata.classes));
}

impl HumanOutput for TrainingResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.report);
        let _ = writeln!(out, "Model saved to {}", self.model_path);
        metadata_lines(&mut out, &self.metadata);
        out
    }
}

impl HumanOutput for PredictionResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for prediction in &self.predictions {
            let _ = writeln!(out, "{:<9} {}", prediction.sentiment, prediction.message);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Counts:");
        for (sentiment, count) in &self.counts {
            let _ = writeln!(out, "  {sentiment:<9} {count}");
        }
        out
    }
}

impl HumanOutput for NormalizationResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for line in &self.normalized {
            let _ = writeln!(out, "{line}");
        }
        out
    }
}

impl HumanOutput for ModelInfo {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Model: {}", self.model_path);
        metadata_lines(&mut out, &self.metadata);
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SentirArgs,
) -> serde_json::Result<()> {
    print!("{}", format_result(message, result, args)?);
    Ok(())
}

/// Render a result in the specified format.
pub fn format_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SentirArgs,
) -> serde_json::Result<String> {
    match args.output_format {
        OutputFormat::Human => {
            let mut out = String::new();
            if args.verbosity() > 1 {
                let _ = writeln!(out, "{message}");
                let _ = writeln!(out);
            }
            out.push_str(&result.render_human());
            Ok(out)
        }
        OutputFormat::Json => {
            let mut json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn results() -> PredictionResults {
        PredictionResults {
            predictions: vec![
                Prediction {
                    message: "This is great".to_string(),
                    normalized: "great".to_string(),
                    label: Label::POSITIVE,
                    sentiment: "positive".to_string(),
                },
                Prediction {
                    message: "awful".to_string(),
                    normalized: "awful".to_string(),
                    label: Label::NEGATIVE,
                    sentiment: "negative".to_string(),
                },
            ],
            counts: BTreeMap::from([("negative".to_string(), 1), ("positive".to_string(), 1)]),
        }
    }

    #[test]
    fn test_human_predictions() {
        let args = SentirArgs::parse_from(["sentir", "predict", "x"]);
        let text = format_result("Predictions", &results(), &args).unwrap();

        assert!(text.starts_with("positive  This is great\n"));
        assert!(text.contains("negative  awful\n"));
        assert!(text.contains("Counts:\n  negative  1\n  positive  1\n"));
        assert!(!text.contains("Predictions"));
    }

    #[test]
    fn test_json_predictions() {
        let args = SentirArgs::parse_from(["sentir", "-f", "json", "predict", "x"]);
        let text = format_result("Predictions", &results(), &args).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["predictions"][0]["label"], 1);
        assert_eq!(value["predictions"][1]["sentiment"], "negative");
        assert_eq!(value["counts"]["positive"], 1);
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_human_normalization() {
        let args = SentirArgs::parse_from(["sentir", "-vv", "normalize", "x"]);
        let result = NormalizationResults {
            normalized: vec!["cat run".to_string(), String::new()],
        };
        let text = format_result("Normalized messages", &result, &args).unwrap();
        assert_eq!(text, "Normalized messages\n\ncat run\n\n");
    }
}
