//! Benchmarks for caption_summarizer

use caption_summarizer::variants::frequency::rank_frequency;
use caption_summarizer::variants::term_weight::rank_tfidf;
use caption_summarizer::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Sample transcript for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.
The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.
Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.
"#;

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT)))
    });

    // Benchmark different document sizes
    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_rankers(c: &mut Criterion) {
    let summarizer = Summarizer::new();
    let mut group = c.benchmark_group("rank_by_size");

    for size in [1, 10, 50].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        let doc = match summarizer.parse(&text) {
            Ok(doc) => doc,
            Err(_) => continue,
        };
        group.throughput(Throughput::Elements(doc.sentence_count() as u64));

        group.bench_with_input(BenchmarkId::new("tfidf", size), &doc, |b, doc| {
            b.iter(|| rank_tfidf(black_box(doc)))
        });
        group.bench_with_input(BenchmarkId::new("frequency", size), &doc, |b, doc| {
            b.iter(|| rank_frequency(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_summarize(c: &mut Criterion) {
    let summarizer = Summarizer::new();

    for mode in [SummaryMode::TermWeight, SummaryMode::Frequency] {
        c.bench_function(&format!("summarize_{}", mode), |b| {
            b.iter(|| summarizer.summarize(black_box(SAMPLE_TEXT), mode, 0.3))
        });
    }

    let texts: Vec<&str> = std::iter::repeat(SAMPLE_TEXT).take(64).collect();
    c.bench_function("summarize_batch_64", |b| {
        b.iter(|| summarizer.summarize_batch(black_box(&texts), SummaryMode::TermWeight, 0.3))
    });
}

fn benchmark_webvtt(c: &mut Criterion) {
    let mut vtt = String::from("WEBVTT\n\n");
    for (i, line) in SAMPLE_TEXT.lines().filter(|l| !l.is_empty()).enumerate() {
        vtt.push_str(&format!(
            "00:00:{:02}.000 --> 00:00:{:02}.500\n<c>{}</c>\n\n",
            i, i, line
        ));
    }

    c.bench_function("parse_vtt", |b| {
        b.iter(|| source::parse_vtt(black_box(&vtt)))
    });
}

fn benchmark_stopwords(c: &mut Criterion) {
    let filter = StopwordFilter::default();

    // Words to check
    let words: Vec<&str> = vec![
        "the", "and", "is", "a", "caption", "video", "lecture", "ownership", "compiler",
        "borrow", "thread", "data", "algorithm", "computer", "science",
    ];

    c.bench_function("stopword_check", |b| {
        b.iter(|| {
            for word in &words {
                black_box(filter.is_stopword(word));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_rankers,
    benchmark_summarize,
    benchmark_webvtt,
    benchmark_stopwords,
);

criterion_main!(benches);
