use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::{Array1, Array2};
use wernicke::{NaiveBayes, Tagger, Vocabulary};

fn setup_benchmark_tagger(vocab_rows: usize) -> Tagger {
    let num_features = 25;

    let model = NaiveBayes::new(
        vec!["B-geo".to_string(), "B-per".to_string(), "O".to_string()],
        Array1::from_elem(3, (1.0_f64 / 3.0).ln()),
        Array2::from_shape_fn((3, num_features), |(i, j)| (i as f64) - (j as f64) * 0.01),
        Array2::from_elem((3, num_features), 0.5),
    )
    .unwrap();

    let rows = (0..vocab_rows)
        .map(|i| {
            (
                format!("word{}", i % (vocab_rows / 2).max(1)),
                Array1::from_shape_fn(num_features, |j| ((i + j) % 7) as f32 * 0.1),
            )
        })
        .collect();
    let vocab = Vocabulary::from_rows(rows).unwrap();

    Tagger {
        model_path: String::new(),
        vocab_path: String::new(),
        model: Arc::new(model),
        vocab: Arc::new(vocab),
    }
}

fn bench_word_tagging(c: &mut Criterion) {
    let tagger = setup_benchmark_tagger(1_000);
    let mut group = c.benchmark_group("Word tagging");

    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Vocabulary hit: lookup, mean, forward pass
    group.bench_function("vocabulary_hit", |b| {
        b.iter(|| tagger.tag_word(black_box("word42")))
    });

    // Vocabulary miss: lookup only
    group.bench_function("vocabulary_miss", |b| {
        b.iter(|| tagger.tag_word(black_box("unseen")))
    });

    group.finish();
}

fn bench_sentence_tagging(c: &mut Criterion) {
    let tagger = setup_benchmark_tagger(1_000);
    let mut group = c.benchmark_group("Sentence tagging");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let short = "word1 word2 unseen";
    let medium = (0..50).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ");
    let long = (0..200).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ");

    group.bench_function("short_sentence", |b| {
        b.iter(|| tagger.tag_sentence(black_box(short)))
    });
    group.bench_function("medium_sentence", |b| {
        b.iter(|| tagger.tag_sentence(black_box(&medium)))
    });
    group.bench_function("long_sentence", |b| {
        b.iter(|| tagger.tag_sentence(black_box(&long)))
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Scaling with vocabulary size
    let vocab_sizes = [100, 1_000, 10_000, 100_000];
    for &size in &vocab_sizes {
        let tagger = setup_benchmark_tagger(size);
        group.bench_function(format!("vocab_{}", size), |b| {
            b.iter(|| tagger.tag_word(black_box("word7")))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_word_tagging,
    bench_sentence_tagging,
    bench_scaling
);
criterion_main!(benches);
