//! TermWeight variant
//!
//! Treats every sentence as a document in a corpus of `N` sentences and builds
//! a TF-IDF matrix over them:
//!
//! - `tf(s, t)`: raw count of term `t` in sentence `s`
//! - `idf(t) = ln((1 + N) / (1 + df(t))) + 1` (smoothed), or
//!   `ln(N / df(t)) + 1` (unsmoothed)
//! - `w(s, t) = tf(s, t) * idf(t)`, optionally L2-normalized per sentence
//!
//! A sentence's score aggregates its row of weights (sum by default). Terms
//! are lower-cased word tokens with at least one letter that are not
//! stopwords. With a single sentence every idf is 1 and the weighting reduces
//! to term frequency.

use super::SentenceRanker;
use crate::nlp::tokenizer::Document;
use crate::types::{ScoreAggregation, ScoreList, StringPool, SummarizerConfig};
use rustc_hash::FxHashMap;

/// Configuration for the term-weight ranker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermWeightConfig {
    /// Add one to document frequencies, as if an extra sentence held every term
    pub smooth_idf: bool,
    /// L2-normalize each sentence row
    pub normalize_rows: bool,
    /// How a row becomes a score
    pub aggregation: ScoreAggregation,
}

impl Default for TermWeightConfig {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            normalize_rows: true,
            aggregation: ScoreAggregation::Sum,
        }
    }
}

impl From<&SummarizerConfig> for TermWeightConfig {
    fn from(config: &SummarizerConfig) -> Self {
        Self {
            smooth_idf: config.smooth_idf,
            normalize_rows: config.normalize_rows,
            aggregation: config.score_aggregation,
        }
    }
}

/// Sparse sentence-by-term weight matrix for one document.
///
/// Rows list `(term_id, weight)` in first-occurrence order, so summing a row
/// always adds the same values in the same order.
#[derive(Debug)]
pub struct TermWeightTable {
    terms: StringPool,
    idf: Vec<f64>,
    rows: Vec<Vec<(u32, f64)>>,
}

impl TermWeightTable {
    /// Build the table for `doc`
    pub fn build(doc: &Document, config: &TermWeightConfig) -> Self {
        let mut terms = StringPool::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        let mut rows: Vec<Vec<(u32, f64)>> = Vec::with_capacity(doc.sentence_count());

        for sentence in doc.sentences() {
            let mut row: Vec<(u32, f64)> = Vec::new();
            let mut slot: FxHashMap<u32, usize> = FxHashMap::default();

            for token in doc.sentence_tokens(sentence) {
                if !token.is_weight_term() {
                    continue;
                }
                let id = terms.intern(&token.lower);
                match slot.get(&id) {
                    Some(&pos) => row[pos].1 += 1.0,
                    None => {
                        slot.insert(id, row.len());
                        row.push((id, 1.0));
                        if id as usize == doc_freq.len() {
                            doc_freq.push(0);
                        }
                        doc_freq[id as usize] += 1;
                    }
                }
            }

            rows.push(row);
        }

        let n = doc.sentence_count() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| {
                let df = df as f64;
                if config.smooth_idf {
                    ((1.0 + n) / (1.0 + df)).ln() + 1.0
                } else {
                    (n / df).ln() + 1.0
                }
            })
            .collect();

        for row in &mut rows {
            for (id, weight) in row.iter_mut() {
                *weight *= idf[*id as usize];
            }

            if config.normalize_rows {
                let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, weight) in row.iter_mut() {
                        *weight /= norm;
                    }
                }
            }
        }

        Self { terms, idf, rows }
    }

    /// Number of distinct terms across the document
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Inverse document frequency of a (lower-cased) term
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.terms.id_of(term).map(|id| self.idf[id as usize])
    }

    /// Weight of `term` in sentence `sentence` (0 when absent)
    pub fn weight(&self, sentence: usize, term: &str) -> f64 {
        let Some(id) = self.terms.id_of(term) else {
            return 0.0;
        };
        self.rows
            .get(sentence)
            .and_then(|row| row.iter().find(|(t, _)| *t == id))
            .map_or(0.0, |(_, w)| *w)
    }

    /// Non-zero `(term, weight)` pairs of one sentence
    pub fn row(&self, sentence: usize) -> Vec<(&str, f64)> {
        self.rows
            .get(sentence)
            .map(|row| {
                row.iter()
                    .filter_map(|(id, w)| self.terms.get(*id).map(|t| (t, *w)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Aggregate every row into a sentence score
    pub fn scores(&self, aggregation: ScoreAggregation) -> ScoreList {
        ScoreList::from_scores(self.rows.iter().map(|row| {
            let weights: Vec<f64> = row.iter().map(|(_, w)| *w).collect();
            aggregation.aggregate(&weights)
        }))
    }
}

/// TF-IDF sentence ranker
#[derive(Debug, Clone, Default)]
pub struct TermWeightRanker {
    config: TermWeightConfig,
}

impl TermWeightRanker {
    /// Create a ranker with smoothed idf, L2 rows and sum aggregation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: TermWeightConfig) -> Self {
        Self { config }
    }

    /// Set the row aggregation
    pub fn with_aggregation(mut self, aggregation: ScoreAggregation) -> Self {
        self.config.aggregation = aggregation;
        self
    }

    /// Build the weight table without scoring
    pub fn table(&self, doc: &Document) -> TermWeightTable {
        TermWeightTable::build(doc, &self.config)
    }
}

impl SentenceRanker for TermWeightRanker {
    fn rank(&self, doc: &Document) -> ScoreList {
        self.table(doc).scores(self.config.aggregation)
    }
}

/// Convenience function to rank sentences with default TF-IDF settings
pub fn rank_tfidf(doc: &Document) -> ScoreList {
    TermWeightRanker::new().rank(doc)
}
