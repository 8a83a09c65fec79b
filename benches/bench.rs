//! Criterion benchmarks for sentir.
//!
//! Covers the three hot paths of a running service:
//! - Message normalization
//! - TF-IDF vectorization
//! - Naive Bayes prediction on normalized messages

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sentir::analysis::Normalizer;
use sentir::dataset::Dataset;
use sentir::ml::naive_bayes::{MultinomialNb, NaiveBayesConfig};
use sentir::ml::tfidf::{TfIdfVectorizer, VectorizerConfig};
use sentir::ml::{Label, PipelineConfig, TrainedPipeline};
use std::hint::black_box;

/// Generate chat-like messages for benchmarking.
fn generate_messages(count: usize) -> Vec<String> {
    let words = [
        "I", "really", "love", "hate", "this", "app", "the", "team", "is", "great", "terrible",
        "waiting", "replies", "movies", "were", "amazing", "boring", "running", "late", "again",
        "thanks", "so", "much", "awful", "day", "!!!", "123", "don't", "happier", "than", "ever",
    ];

    (0..count)
        .map(|i| {
            let len = 5 + (i % 20);
            (0..len)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Alternating labels for generated messages.
fn generate_labels(count: usize) -> Vec<Label> {
    (0..count).map(|i| Label((i % 2) as u32)).collect()
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let normalizer = Normalizer::english();
    let messages = generate_messages(1000);

    group.bench_function("normalize_single_message", |b| {
        b.iter(|| black_box(normalizer.normalize_one(black_box(&messages[0]))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("normalize_batch", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(&messages[..100]))))
    });

    group.finish();
}

fn bench_vectorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorization");
    let normalized = Normalizer::english()
        .normalize(&generate_messages(1000))
        .unwrap();

    group.throughput(Throughput::Elements(1000));
    group.bench_function("fit_1000", |b| {
        b.iter(|| {
            black_box(TfIdfVectorizer::fit(
                VectorizerConfig::default(),
                black_box(&normalized),
            ))
        })
    });

    let vectorizer = TfIdfVectorizer::fit(VectorizerConfig::default(), &normalized);
    group.throughput(Throughput::Elements(100));
    group.bench_function("transform_batch", |b| {
        b.iter(|| black_box(vectorizer.transform(black_box(&normalized[..100]))))
    });

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prediction");
    let normalizer = Normalizer::english();

    let sample = Dataset::sample();
    let texts = normalizer.normalize(sample.texts()).unwrap();
    let model = TrainedPipeline::fit(&PipelineConfig::default(), &texts, sample.labels()).unwrap();

    let queries = normalizer.normalize(&generate_messages(100)).unwrap();
    group.throughput(Throughput::Elements(100));
    group.bench_function("pipeline_predict_batch", |b| {
        b.iter(|| black_box(model.predict(black_box(&queries))))
    });

    let messages = normalizer.normalize(&generate_messages(1000)).unwrap();
    let labels = generate_labels(messages.len());
    let (_, vectors) = TfIdfVectorizer::fit_transform(VectorizerConfig::default(), &messages);
    group.throughput(Throughput::Elements(1000));
    group.bench_function("naive_bayes_fit_1000", |b| {
        b.iter(|| {
            black_box(MultinomialNb::fit(
                NaiveBayesConfig::default(),
                black_box(&vectors),
                black_box(&labels),
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_vectorization,
    bench_prediction
);
criterion_main!(benches);
