//! Frequency variant
//!
//! Counts every alphabetic, non-stopword token of the document (lower-cased),
//! divides each count by the largest count, and rounds to three decimals.
//! The most frequent term therefore weighs exactly 1.0. A sentence scores the
//! sum of its tokens' weights, again rounded to three decimals.

use super::SentenceRanker;
use crate::nlp::tokenizer::Document;
use crate::types::ScoreList;
use rustc_hash::FxHashMap;

/// Decimal places kept for term weights and sentence scores
pub const SCORE_PRECISION: i32 = 3;

/// Round half to even at [`SCORE_PRECISION`] decimals
pub fn round_score(value: f64) -> f64 {
    let scale = 10f64.powi(SCORE_PRECISION);
    (value * scale).round_ties_even() / scale
}

/// Normalized word frequencies of one document
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    weights: FxHashMap<String, f64>,
    max_count: usize,
}

impl FrequencyTable {
    /// Count qualifying terms across the whole document
    pub fn build(doc: &Document) -> Self {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for token in doc.tokens() {
            if token.is_frequency_term() {
                *counts.entry(token.lower.as_str()).or_insert(0) += 1;
            }
        }

        let max_count = counts.values().copied().max().unwrap_or(0);
        let weights = counts
            .into_iter()
            .map(|(term, count)| {
                (
                    term.to_string(),
                    round_score(count as f64 / max_count as f64),
                )
            })
            .collect();

        Self { weights, max_count }
    }

    /// Normalized weight of a lower-cased term (0 when absent)
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Raw count of the most frequent term
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Number of distinct qualifying terms
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if no term qualified
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Score every sentence of `doc` against this table
    pub fn scores(&self, doc: &Document) -> ScoreList {
        ScoreList::from_scores(doc.sentences().iter().map(|sentence| {
            let total: f64 = doc
                .sentence_tokens(sentence)
                .iter()
                .map(|token| self.weight(&token.lower))
                .sum();
            round_score(total)
        }))
    }
}

/// Word-frequency sentence ranker
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRanker;

impl FrequencyRanker {
    /// Create a new frequency ranker
    pub fn new() -> Self {
        Self
    }

    /// Build the frequency table without scoring
    pub fn table(&self, doc: &Document) -> FrequencyTable {
        FrequencyTable::build(doc)
    }
}

impl SentenceRanker for FrequencyRanker {
    fn rank(&self, doc: &Document) -> ScoreList {
        self.table(doc).scores(doc)
    }
}

/// Convenience function to rank sentences by normalized word frequency
pub fn rank_frequency(doc: &Document) -> ScoreList {
    FrequencyRanker.rank(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::Tokenizer;

    fn doc(text: &str, stopwords: &[&str]) -> Document {
        Document::parse(text, &Tokenizer::new(), &StopwordFilter::from_list(stopwords)).unwrap()
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(1.0 / 3.0), 0.333);
        assert_eq!(round_score(2.0 / 3.0), 0.667);
        assert_eq!(round_score(0.5), 0.5);
        assert_eq!(round_score(0.0), 0.0);
    }

    #[test]
    fn test_most_frequent_term_weighs_one() {
        let d = doc("A cat sat. A cat ran. Dogs bark loudly.", &["a"]);
        let table = FrequencyRanker::new().table(&d);

        assert_eq!(table.max_count(), 2);
        assert_eq!(table.weight("cat"), 1.0);
        assert_eq!(table.weight("sat"), 0.5);
        assert_eq!(table.weight("loudly"), 0.5);
        assert_eq!(table.weight("a"), 0.0);
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_sentence_scores_sum_weights() {
        let d = doc("A cat sat. A cat ran. Dogs bark loudly.", &["a"]);
        let scores = rank_frequency(&d);

        assert_eq!(scores.len(), 3);
        assert_eq!(scores.score(0), Some(1.5));
        assert_eq!(scores.score(1), Some(1.5));
        assert_eq!(scores.score(2), Some(1.5));
    }

    #[test]
    fn test_weights_are_rounded() {
        let d = doc("alpha alpha alpha beta. beta gamma.", &[]);
        let table = FrequencyRanker::new().table(&d);

        assert_eq!(table.weight("alpha"), 1.0);
        assert_eq!(table.weight("beta"), 0.667);
        assert_eq!(table.weight("gamma"), 0.333);

        let scores = table.scores(&d);
        assert_eq!(scores.score(0), Some(3.667));
        assert_eq!(scores.score(1), Some(1.0));
    }

    #[test]
    fn test_case_is_folded() {
        let d = doc("Rust rust RUST. Go.", &[]);
        let table = FrequencyRanker::new().table(&d);

        assert_eq!(table.weight("rust"), 1.0);
        assert_eq!(table.weight("go"), 0.333);
    }

    #[test]
    fn test_uniform_term_has_same_weight_everywhere() {
        let d = doc("video one. video two. video three.", &[]);
        let table = FrequencyRanker::new().table(&d);

        // "video" occurs in every sentence; each occurrence adds the same weight
        assert_eq!(table.weight("video"), 1.0);
        let scores = table.scores(&d);
        for i in 0..3 {
            assert_eq!(scores.score(i), Some(round_score(1.0 + 1.0 / 3.0)));
        }
    }

    #[test]
    fn test_non_alphabetic_tokens_ignored() {
        let d = doc("mp3 files. 2024 mp3.", &[]);
        let table = FrequencyRanker::new().table(&d);

        assert_eq!(table.weight("mp3"), 0.0);
        assert_eq!(table.weight("files"), 1.0);

        let scores = table.scores(&d);
        assert_eq!(scores.score(1), Some(0.0));
    }

    #[test]
    fn test_only_stopwords_gives_empty_table() {
        let d = doc("The and the.", &["the", "and"]);
        let table = FrequencyRanker::new().table(&d);

        assert!(table.is_empty());
        assert_eq!(table.max_count(), 0);
        assert_eq!(rank_frequency(&d).score(0), Some(0.0));
    }
}
