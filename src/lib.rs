//! # caption_summarizer
//!
//! Extractive summarization of caption and transcript text.
//!
//! A document is split into sentences, each sentence is scored by one of two
//! rankers, and the top `ceil(fraction * sentences)` are returned in their
//! original order.
//!
//! ## Features
//!
//! - **TF-IDF ranking**: each sentence is a document; rows are aggregated into scores
//! - **Frequency ranking**: word counts normalized by the most frequent word
//! - **Pluggable sources**: WebVTT and plain-text readers, with an optional deadline
//! - **External delegation**: a third mode hands the text to an injected summarizer
//! - **Python bindings**: via PyO3 behind the `python` feature
//!
//! ```
//! use caption_summarizer::{summarize, SummaryMode};
//!
//! let text = "Rust has no garbage collector. Ownership frees memory. The borrow checker enforces it.";
//! let summary = summarize(text, SummaryMode::TermWeight, 0.34).unwrap();
//! assert!(!summary.is_empty());
//! ```

pub mod errors;
pub mod nlp;
pub mod source;
pub mod summarizer;
pub mod types;
pub mod variants;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{
    ScoreAggregation, ScoreList, SelectedSentence, Sentence, SentenceScore, StringPool, Summary,
    SummarizerConfig, SummaryMode, Token,
};

// Re-export main functionality
pub use nlp::{
    stopwords::StopwordFilter,
    tokenizer::{Document, Tokenizer},
};
pub use source::{
    SourceDocument, SourceProvider, SourceSummary, TextFileSource, TimedSource, VttFileSource,
};
pub use summarizer::dispatch::{summarize, ExternalSummarizer, Summarizer};
pub use summarizer::selector::Selector;
pub use variants::{
    frequency::FrequencyRanker, term_weight::TermWeightRanker, SentenceRanker,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
