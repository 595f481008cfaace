//! Core types for caption_summarizer
//!
//! This module defines the fundamental data structures used throughout the library,
//! including string interning, tokens, sentences, score lists, and configuration.

use crate::errors::{Result, SummarizeError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// String Interning
// ============================================================================

/// A pool for string interning.
///
/// Each unique term is stored once and referenced by a dense `u32` id, which
/// keeps term-weight rows small and gives them a stable first-seen order.
#[derive(Debug, Default)]
pub struct StringPool {
    /// Maps strings to their interned IDs
    string_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps IDs back to strings
    id_to_string: Vec<Arc<str>>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.string_to_id.get(s) {
            return id;
        }

        let id = self.id_to_string.len() as u32;
        let arc: Arc<str> = s.into();
        self.string_to_id.insert(arc.clone(), id);
        self.id_to_string.push(arc);
        id
    }

    /// Look up the ID of an already interned string
    pub fn id_of(&self, s: &str) -> Option<u32> {
        self.string_to_id.get(s).copied()
    }

    /// Get a string by its ID
    pub fn get(&self, id: u32) -> Option<&str> {
        self.id_to_string.get(id as usize).map(|s| s.as_ref())
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }
}

// ============================================================================
// Token
// ============================================================================

/// A word token from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// Lower-cased form, used as the term key by both rankers
    pub lower: String,
    /// Byte offset (start) in original text
    pub start: usize,
    /// Byte offset (end) in original text
    pub end: usize,
    /// Sentence index this token belongs to
    pub sentence_idx: usize,
    /// Token index within the document
    pub token_idx: usize,
    /// Every character is alphabetic
    pub is_alpha: bool,
    /// Whether this token is a stopword
    pub is_stopword: bool,
}

impl Token {
    /// Create a new token
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            text,
            lower,
            start,
            end,
            sentence_idx,
            token_idx,
            is_alpha,
            is_stopword: false,
        }
    }

    /// Check if this token has at least one alphabetic character
    pub fn has_alpha(&self) -> bool {
        self.text.chars().any(char::is_alphabetic)
    }

    /// Term key for the term-weight ranker: any token with a letter that is
    /// not a stopword
    pub fn is_weight_term(&self) -> bool {
        !self.is_stopword && self.has_alpha()
    }

    /// Term key for the frequency ranker: purely alphabetic, not a stopword
    pub fn is_frequency_term(&self) -> bool {
        !self.is_stopword && self.is_alpha
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text (includes trailing whitespace up to
    /// the next sentence)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            start_token: 0,
            end_token: 0,
        }
    }

    /// Number of word tokens in this sentence
    pub fn token_len(&self) -> usize {
        self.end_token - self.start_token
    }
}

// ============================================================================
// Scores
// ============================================================================

/// Importance score of one sentence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    /// Sentence index within the document
    pub index: usize,
    /// Ranker-specific importance score
    pub score: f64,
}

impl SentenceScore {
    /// Create a new sentence score
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }

    /// Total ranking order: score descending, then sentence index ascending.
    ///
    /// Equal scores keep the earlier sentence first, which is the same result
    /// a stable descending sort over a list in sentence order gives.
    pub fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// One score per sentence, in sentence order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreList {
    entries: Vec<SentenceScore>,
}

impl ScoreList {
    /// Build a score list from per-sentence scores in sentence order
    pub fn from_scores(scores: impl IntoIterator<Item = f64>) -> Self {
        Self {
            entries: scores
                .into_iter()
                .enumerate()
                .map(|(index, score)| SentenceScore::new(index, score))
                .collect(),
        }
    }

    /// Number of scored sentences
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of the sentence at `index`
    pub fn score(&self, index: usize) -> Option<f64> {
        self.entries.get(index).map(|e| e.score)
    }

    /// Entries in sentence order
    pub fn as_slice(&self) -> &[SentenceScore] {
        &self.entries
    }

    /// Entries ordered by [`SentenceScore::stable_cmp`]
    pub fn ranked(&self) -> Vec<SentenceScore> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| a.stable_cmp(b));
        ranked
    }
}

// ============================================================================
// Score Aggregation
// ============================================================================

/// Methods for aggregating the term weights of one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreAggregation {
    /// Sum of all term weights
    #[default]
    Sum,
    /// Arithmetic mean of the non-zero term weights
    Mean,
    /// Maximum term weight
    Max,
    /// Root mean square of term weights
    RootMeanSquare,
}

impl ScoreAggregation {
    /// Aggregate a slice of scores
    pub fn aggregate(&self, scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }

        match self {
            ScoreAggregation::Sum => scores.iter().sum(),
            ScoreAggregation::Mean => scores.iter().sum::<f64>() / scores.len() as f64,
            ScoreAggregation::Max => scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            ScoreAggregation::RootMeanSquare => {
                let sum_sq: f64 = scores.iter().map(|x| x * x).sum();
                (sum_sq / scores.len() as f64).sqrt()
            }
        }
    }

    /// Parse a user-facing aggregation name
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "sum" => Ok(ScoreAggregation::Sum),
            "mean" | "average" => Ok(ScoreAggregation::Mean),
            "max" => Ok(ScoreAggregation::Max),
            "rms" | "root_mean_square" => Ok(ScoreAggregation::RootMeanSquare),
            other => Err(SummarizeError::invalid_config(format!(
                "unknown score_aggregation '{}'. Use 'sum', 'mean', 'max', or 'rms'",
                other
            ))),
        }
    }
}

// ============================================================================
// Summary Mode
// ============================================================================

/// Which strategy produces the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// TF-IDF term-weight aggregation per sentence
    #[default]
    TermWeight,
    /// Normalized word-frequency scoring
    Frequency,
    /// Delegate to an injected external summarizer
    ExternalService,
}

impl SummaryMode {
    /// All modes, in menu order
    pub const ALL: [SummaryMode; 3] = [
        SummaryMode::TermWeight,
        SummaryMode::Frequency,
        SummaryMode::ExternalService,
    ];

    /// Short identifier used by the CLI and bindings
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMode::TermWeight => "tfidf",
            SummaryMode::Frequency => "frequency",
            SummaryMode::ExternalService => "external",
        }
    }

    /// Whether this mode ranks sentences itself
    pub fn is_extractive(&self) -> bool {
        !matches!(self, SummaryMode::ExternalService)
    }
}

impl std::fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SummaryMode {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "tfidf" | "tf-idf" | "tfidf-based" | "term_weight" | "termweight" => {
                Ok(SummaryMode::TermWeight)
            }
            "frequency" | "freq" | "frequency-based" => Ok(SummaryMode::Frequency),
            "external" | "external_service" | "gensim" | "gensim-based" => {
                Ok(SummaryMode::ExternalService)
            }
            _ => Err(SummarizeError::unsupported_mode(value)),
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Sentence index within the source document
    pub index: usize,
    /// Score the ranker assigned
    pub score: f64,
    /// Trimmed sentence text
    pub text: String,
}

/// Result of one summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The summary text
    pub text: String,
    /// Strategy that produced it
    pub mode: SummaryMode,
    /// Number of sentences in the source document
    pub sentence_count: usize,
    /// Requested selection count `K`
    pub requested: usize,
    /// Selected sentences in document order (empty for external mode)
    pub sentences: Vec<SelectedSentence>,
}

impl Summary {
    /// Source indices of the selected sentences
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Language code for stopwords (e.g., "en", "de", "fr")
    #[serde(default = "default_language")]
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Minimum token length in characters
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,
    /// Use smoothed idf: `ln((1 + n) / (1 + df)) + 1`
    #[serde(default = "default_true")]
    pub smooth_idf: bool,
    /// L2-normalize each sentence's term-weight row
    #[serde(default = "default_true")]
    pub normalize_rows: bool,
    /// How a sentence's term weights become its score
    #[serde(default)]
    pub score_aggregation: ScoreAggregation,
    /// Upper bound on sentences returned in frequency mode (`None` = no cap)
    #[serde(default = "default_frequency_cap")]
    pub frequency_sentence_cap: Option<usize>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_min_token_length() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_frequency_cap() -> Option<usize> {
    Some(DEFAULT_FREQUENCY_SENTENCE_CAP)
}

/// Frequency mode returns at most this many sentences unless reconfigured
pub const DEFAULT_FREQUENCY_SENTENCE_CAP: usize = 5;

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            stopwords: Vec::new(),
            min_token_length: default_min_token_length(),
            smooth_idf: true,
            normalize_rows: true,
            score_aggregation: ScoreAggregation::Sum,
            frequency_sentence_cap: default_frequency_cap(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SummarizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(SummarizeError::invalid_config("language must not be empty"));
        }

        if self.min_token_length == 0 {
            return Err(SummarizeError::invalid_config(
                "min_token_length must be > 0",
            ));
        }

        if self.frequency_sentence_cap == Some(0) {
            return Err(SummarizeError::invalid_config(
                "frequency_sentence_cap must be > 0 (use null to disable the cap)",
            ));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Builder method: toggle idf smoothing
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Builder method: toggle L2 row normalization
    pub fn with_normalize_rows(mut self, normalize: bool) -> Self {
        self.normalize_rows = normalize;
        self
    }

    /// Builder method: set score aggregation
    pub fn with_score_aggregation(mut self, aggregation: ScoreAggregation) -> Self {
        self.score_aggregation = aggregation;
        self
    }

    /// Builder method: set or clear the frequency-mode sentence cap
    pub fn with_frequency_sentence_cap(mut self, cap: Option<usize>) -> Self {
        self.frequency_sentence_cap = cap;
        self
    }
}
