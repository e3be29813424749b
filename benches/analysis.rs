//! Benchmarks for chatlens parsing and statistics.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- sentiment`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::analysis::{Analyzer, Participant};
use chatlens::config::ParserConfig;
use chatlens::parser::ChatParser;
use chatlens::sentiment::SentimentAnalyzer;

const BODIES: &[&str] = &[
    "Meet at the station at 6",
    "I love this, great job!",
    "This is terrible, I hate waiting 😡",
    "<Media omitted>",
    "check https://example.com and tell me",
    "haha 😂😂 so funny",
    "Привет, как дела?",
];

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = ["Alice", "Bob", "Carol"][i % 3];
        let day = i % 28 + 1;
        let hour = i % 12 + 1;
        let minute = i % 60;
        let meridiem = if i % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "3/{day}/25, {hour}:{minute:02} {meridiem} - {sender}: {}",
            BODIES[i % BODIES.len()]
        ));
    }
    lines.join("\n")
}

// =============================================================================
// Parsing
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1_000, 10_000] {
        let export = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| ChatParser::new().parse_str(black_box(export)).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("parse_without_language");
    let parser = ChatParser::with_config(ParserConfig::new().with_detect_language(false));

    for size in [1_000, 10_000] {
        let export = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| parser.parse_str(black_box(export)).unwrap());
        });
    }
    group.finish();
}

// =============================================================================
// Statistics
// =============================================================================

fn bench_sentiment(c: &mut Criterion) {
    let scorer = SentimentAnalyzer::new();
    c.bench_function("sentiment/polarity_scores", |b| {
        b.iter(|| {
            for body in BODIES {
                black_box(scorer.polarity_scores(black_box(body)));
            }
        });
    });
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    for size in [1_000, 10_000] {
        let chat = ChatParser::with_config(ParserConfig::new().with_detect_language(false))
            .parse_str(&generate_export(size))
            .unwrap();
        let records = chat.into_records();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            let analyzer = Analyzer::new(records);
            b.iter(|| analyzer.report(black_box(&Participant::Overall)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parsing, bench_sentiment, bench_report);
criterion_main!(benches);
