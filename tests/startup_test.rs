use clap::Parser;
use sentir::cli::{SentirArgs, execute_command};
use sentir::config::SentirConfig;
use sentir::dataset::Dataset;
use sentir::error::SentirError;
use sentir::ml::Label;
use sentir::service::{SentimentService, SlotState, StartupOutcome};
use tempfile::tempdir;

fn config_in(dir: &std::path::Path) -> SentirConfig {
    SentirConfig {
        model_path: dir.join("sentiment_model.bin"),
        ..SentirConfig::default()
    }
}

#[test]
fn test_fallback_training_leaves_artifact() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let service = SentimentService::from_config(&config).unwrap();
    assert!(!service.store().exists());

    let outcome = service
        .start(&config.pipeline_config(), || Ok(Dataset::sample()))
        .unwrap();
    let StartupOutcome::Trained { report, metadata } = outcome else {
        panic!("expected fallback training");
    };
    assert_eq!(report.support + report.train_size, 20);
    assert_eq!(metadata.n_train_samples, report.train_size);
    assert!(config.model_path.is_file());
    assert!(matches!(service.slot().state(), SlotState::Trained(_)));

    let restarted = SentimentService::from_config(&config).unwrap();
    let outcome = restarted
        .start(&config.pipeline_config(), || {
            Err(SentirError::dataset("fallback should not run"))
        })
        .unwrap();
    assert!(matches!(outcome, StartupOutcome::Loaded(_)));
}

#[test]
fn test_analysis_counts() {
    let dir = tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.training.refit_on_full_data = true;
    let service = SentimentService::from_config(&config).unwrap();
    service
        .start(&config.pipeline_config(), || Ok(Dataset::sample()))
        .unwrap();

    let messages = ["Great job, I love it", "This is awful and terrible", "..."];
    let analysis = service.analyze(&messages).unwrap();

    assert_eq!(analysis.labels.len(), 3);
    assert_eq!(analysis.labels[0], Label::POSITIVE);
    assert_eq!(analysis.labels[1], Label::NEGATIVE);
    assert_eq!(analysis.normalized[2], "");
    assert_eq!(analysis.counts.keys().copied().collect::<Vec<_>>(), vec![Label(0), Label(1)]);
    assert_eq!(analysis.counts.values().sum::<usize>(), 3);
}

#[test]
fn test_predict_command_trains_missing_model() {
    let dir = tempdir().unwrap();
    let model = dir.path().join("models").join("sentiment_model.bin");
    let model_arg = model.to_str().unwrap();

    let args = SentirArgs::parse_from(["sentir", "-q", "predict", "--model", model_arg, "great"]);
    execute_command(args).unwrap();
    assert!(model.is_file());

    // the stored model is reused, and --no-fallback accepts it
    let args = SentirArgs::parse_from([
        "sentir",
        "-q",
        "predict",
        "--no-fallback",
        "--model",
        model_arg,
        "so sad",
    ]);
    execute_command(args).unwrap();
}

#[test]
fn test_predict_command_without_fallback_needs_model() {
    let dir = tempdir().unwrap();
    let model = dir.path().join("sentiment_model.bin");

    let args = SentirArgs::parse_from([
        "sentir",
        "-q",
        "predict",
        "--no-fallback",
        "--model",
        model.to_str().unwrap(),
        "great",
    ]);
    let err = execute_command(args).unwrap_err();
    assert!(format!("{err:#}").contains("--no-fallback"));
    assert!(!model.exists());
}

#[test]
fn test_missing_resource_aborts_startup() {
    let dir = tempdir().unwrap();
    let config = SentirConfig {
        resource_path: Some(dir.path().join("missing_resource.json")),
        ..config_in(dir.path())
    };

    let err = SentimentService::from_config(&config).unwrap_err();
    assert!(matches!(err, SentirError::ResourceLoad(_)));
}

#[test]
fn test_dataset_files() {
    let dir = tempdir().unwrap();
    let messages = dir.path().join("chat_dataset.txt");
    let labels = dir.path().join("labels.txt");
    std::fs::write(&messages, "I love this\n\nI hate this\nThis is great\n").unwrap();
    std::fs::write(&labels, "1, 0\n1\n").unwrap();

    let config = SentirConfig::from_json(&format!(
        r#"{{"dataset": {{"messages": {:?}, "labels": {{"file": {:?}}}}}}}"#,
        messages, labels
    ))
    .unwrap();
    let dataset = config.dataset.load_or_sample().unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.labels(), &[Label(1), Label(0), Label(1)]);

    std::fs::write(&labels, "1 0").unwrap();
    let err = config.dataset.load_or_sample().unwrap_err();
    assert!(matches!(err, SentirError::InputLengthMismatch { texts: 3, labels: 2 }));
}
