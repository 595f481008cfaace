//! Property-based tests using proptest

use caption_summarizer::summarizer::{selection_count, selector::Selector};
use caption_summarizer::*;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "rust", "cargo", "crate", "borrow", "owner", "trait", "macro", "thread", "compiler", "closure",
    "iterator", "lifetime",
];

/// One sentence of 1-7 vocabulary words, capitalized or not the way
/// auto-generated captions mix both
fn sentence() -> impl Strategy<Value = String> {
    (prop::collection::vec(prop::sample::select(WORDS), 1..8), any::<bool>()).prop_map(
        |(words, capitalize)| {
            let mut sentence = words.join(" ");
            if capitalize {
                if let Some(first) = sentence.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
            }
            sentence.push('.');
            sentence
        },
    )
}

/// One lowercase sentence, as caption tracks without casing produce
fn lowercase_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..8)
        .prop_map(|words| format!("{}.", words.join(" ")))
}

fn document() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence(), 1..15)
}

fn extractive_mode() -> impl Strategy<Value = SummaryMode> {
    prop_oneof![Just(SummaryMode::TermWeight), Just(SummaryMode::Frequency)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_summary_is_ordered_subset(
        sentences in document(),
        fraction in 0.01f64..=1.0,
        mode in extractive_mode()
    ) {
        let text = sentences.join(" ");
        let summary = Summarizer::new().summarize_detailed(&text, mode, fraction).unwrap();

        prop_assert_eq!(summary.sentence_count, sentences.len());

        let k = (fraction * sentences.len() as f64).ceil() as usize;
        prop_assert_eq!(summary.requested, k);
        let expected_len = match mode {
            SummaryMode::Frequency => k.min(5),
            _ => k,
        };
        prop_assert_eq!(summary.sentences.len(), expected_len);

        let indices = summary.indices();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));

        // The summary is exactly the chosen source sentences, space separated
        let expected: Vec<&str> = indices.iter().map(|&i| sentences[i].as_str()).collect();
        prop_assert_eq!(summary.text, expected.join(" "));
    }

    #[test]
    fn test_lowercase_sentences_are_counted(
        sentences in prop::collection::vec(lowercase_sentence(), 1..15),
        fraction in 0.01f64..1.0
    ) {
        let text = sentences.join(" ");
        let summary = Summarizer::new()
            .summarize_detailed(&text, SummaryMode::TermWeight, fraction)
            .unwrap();

        prop_assert_eq!(summary.sentence_count, sentences.len());
        let k = (fraction * sentences.len() as f64).ceil() as usize;
        prop_assert_eq!(summary.sentences.len(), k);
        for selected in &summary.sentences {
            prop_assert!(sentences.contains(&selected.text));
        }
    }

    #[test]
    fn test_summarize_is_idempotent(
        sentences in document(),
        fraction in 0.01f64..=1.0,
        mode in extractive_mode()
    ) {
        let text = sentences.join(" ");
        let summarizer = Summarizer::new();
        let first = summarizer.summarize(&text, mode, fraction).unwrap();
        let second = summarizer.summarize(&text, mode, fraction).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_full_fraction_returns_everything(sentences in prop::collection::vec(sentence(), 1..6)) {
        let text = sentences.join(" ");
        for mode in [SummaryMode::TermWeight, SummaryMode::Frequency] {
            prop_assert_eq!(summarize(&text, mode, 1.0).unwrap(), text.clone());
        }
    }

    #[test]
    fn test_selection_count_bounds(fraction in 0.0001f64..=1.0, n in 1usize..500) {
        let k = selection_count(fraction, n).unwrap();
        prop_assert!(k >= 1);
        prop_assert!(k <= n);
        prop_assert!(k as f64 >= fraction * n as f64);
    }

    #[test]
    fn test_out_of_range_fraction_rejected(fraction in prop_oneof![-10.0f64..=0.0, 1.0001f64..10.0]) {
        let err = summarize("Rust is fast. Cargo builds it.", SummaryMode::TermWeight, fraction)
            .unwrap_err();
        prop_assert_eq!(err.code(), "invalid_fraction");
    }

    #[test]
    fn test_ranked_is_stable_permutation(scores in prop::collection::vec(0.0f64..5.0, 1..40)) {
        let list = ScoreList::from_scores(scores.clone());
        let ranked = list.ranked();
        prop_assert_eq!(ranked.len(), scores.len());

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.score > b.score || (a.score == b.score && a.index < b.index));
        }
    }

    #[test]
    fn test_selector_picks_best_scores(
        scores in prop::collection::vec(0.0f64..5.0, 1..40),
        k_seed in 0usize..40
    ) {
        let n = scores.len();
        let k = k_seed % n + 1;
        let list = ScoreList::from_scores(scores.clone());
        let picked = Selector::new().pick(&list, k).unwrap();

        prop_assert_eq!(picked.len(), k);
        let worst_picked = picked.iter().map(|&i| scores[i]).fold(f64::INFINITY, f64::min);
        for (i, &score) in scores.iter().enumerate() {
            if !picked.contains(&i) {
                prop_assert!(score <= worst_picked);
            }
        }
    }

    #[test]
    fn test_frequency_weights_bounded(sentences in document()) {
        let text = sentences.join(" ");
        let summarizer = Summarizer::with_config(
            SummarizerConfig::default().with_frequency_sentence_cap(None),
        ).unwrap();
        let doc = summarizer.parse(&text).unwrap();
        let table = FrequencyRanker::new().table(&doc);

        for word in WORDS {
            let weight = table.weight(word);
            prop_assert!((0.0..=1.0).contains(&weight));
        }
        if !table.is_empty() {
            prop_assert!(WORDS.iter().any(|w| table.weight(w) == 1.0));
        }
    }

    #[test]
    fn test_term_weight_rows_normalized(sentences in document()) {
        let text = sentences.join(" ");
        let doc = Summarizer::new().parse(&text).unwrap();
        let table = TermWeightRanker::new().table(&doc);

        for i in 0..doc.sentence_count() {
            let row = table.row(i);
            if row.is_empty() {
                continue;
            }
            let norm: f64 = row.iter().map(|(_, w)| w * w).sum();
            prop_assert!((norm - 1.0).abs() < 1e-9);
        }
    }
}
