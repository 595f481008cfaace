//! Strategy dispatch
//!
//! [`Summarizer`] owns everything a call needs (tokenizer, stopwords, config,
//! optional external service) and routes each request to the strategy its
//! [`SummaryMode`] names. Nothing is cached between calls, so a shared
//! `&Summarizer` can serve any number of threads.

use super::selection_count;
use super::selector::{join_sentences, Selector};
use super::validate_fraction;
use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_line_break, Document, Tokenizer};
use crate::source::{SourceProvider, SourceSummary};
use crate::types::{Summary, SummaryMode, SummarizerConfig};
use crate::variants::frequency::FrequencyRanker;
use crate::variants::term_weight::TermWeightRanker;
use crate::variants::SentenceRanker;
use rayon::prelude::*;
use std::sync::Arc;

/// Enter a named tracing span for the rest of the enclosing block
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// A black-box summarizer used by [`SummaryMode::ExternalService`].
///
/// Receives the document's sentences joined by `"\n"` and the requested ratio.
/// Implementations must be safe to call from several threads at once.
pub trait ExternalSummarizer: Send + Sync {
    /// Summarize `text`, keeping roughly `ratio` of it
    fn summarize(&self, text: &str, ratio: f64) -> Result<String>;
}

impl<F> ExternalSummarizer for F
where
    F: Fn(&str, f64) -> Result<String> + Send + Sync,
{
    fn summarize(&self, text: &str, ratio: f64) -> Result<String> {
        self(text, ratio)
    }
}

/// Mode-dispatching summarizer
#[derive(Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    external: Option<Arc<dyn ExternalSummarizer>>,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer)
            .field("stopwords", &self.stopwords.len())
            .field("external", &self.external.is_some())
            .finish()
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Summarizer with the default configuration (English stopwords)
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
            tokenizer: Tokenizer::new(),
            stopwords: StopwordFilter::default(),
            external: None,
        }
    }

    /// Build from a validated configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = StopwordFilter::from_config(&config)?;
        let tokenizer = Tokenizer::new().with_min_length(config.min_token_length);

        Ok(Self {
            config,
            tokenizer,
            stopwords,
            external: None,
        })
    }

    /// Attach the service used by [`SummaryMode::ExternalService`]
    pub fn with_external(mut self, external: impl ExternalSummarizer + 'static) -> Self {
        self.external = Some(Arc::new(external));
        self
    }

    /// Active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Whether an external service is attached
    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    /// Split and tokenize `text` with this summarizer's settings
    pub fn parse(&self, text: &str) -> Result<Document> {
        Document::parse(text, &self.tokenizer, &self.stopwords)
    }

    /// Summary text for `text`
    pub fn summarize(&self, text: &str, mode: SummaryMode, fraction: f64) -> Result<String> {
        self.summarize_detailed(text, mode, fraction)
            .map(|summary| summary.text)
    }

    /// Summary with the selected sentences and their scores
    pub fn summarize_detailed(
        &self,
        text: &str,
        mode: SummaryMode,
        fraction: f64,
    ) -> Result<Summary> {
        validate_fraction(fraction)?;

        match mode {
            SummaryMode::TermWeight => {
                let ranker = TermWeightRanker::with_config((&self.config).into());
                self.extract(text, mode, fraction, &ranker, Selector::new())
            }
            SummaryMode::Frequency => {
                let selector =
                    Selector::new().with_max_sentences(self.config.frequency_sentence_cap);
                self.extract(text, mode, fraction, &FrequencyRanker::new(), selector)
            }
            SummaryMode::ExternalService => self.delegate(text, fraction),
        }
    }

    fn extract<R: SentenceRanker>(
        &self,
        text: &str,
        mode: SummaryMode,
        fraction: f64,
        ranker: &R,
        selector: Selector,
    ) -> Result<Summary> {
        let doc = {
            trace_stage!("split");
            self.parse(text)?
        };
        let k = selection_count(fraction, doc.sentence_count())?;

        let scores = {
            trace_stage!("rank");
            ranker.rank(&doc)
        };

        trace_stage!("select");
        let sentences = selector.select_sentences(&scores, k, &doc)?;
        let indices: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        let text = join_sentences(&doc, &indices);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            mode = mode.as_str(),
            sentences = doc.sentence_count(),
            requested = k,
            selected = sentences.len(),
            "summary built"
        );

        Ok(Summary {
            text,
            mode,
            sentence_count: doc.sentence_count(),
            requested: k,
            sentences,
        })
    }

    fn delegate(&self, text: &str, fraction: f64) -> Result<Summary> {
        let external = self.external.as_ref().ok_or_else(|| {
            SummarizeError::external_service("no external summarizer is configured")
        })?;

        let doc = {
            trace_stage!("split");
            self.parse(text)?
        };
        // One sentence per line; wrapped caption lines are rejoined first
        let joined = doc
            .sentences()
            .iter()
            .map(|s| {
                s.text
                    .split(is_line_break)
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");

        trace_stage!("external");
        let text = external.summarize(&joined, fraction)?;

        Ok(Summary {
            text,
            mode: SummaryMode::ExternalService,
            sentence_count: doc.sentence_count(),
            requested: selection_count(fraction, doc.sentence_count())?,
            sentences: Vec::new(),
        })
    }

    /// Summarize many texts in parallel; results keep input order
    pub fn summarize_batch(
        &self,
        texts: &[&str],
        mode: SummaryMode,
        fraction: f64,
    ) -> Vec<Result<String>> {
        texts
            .par_iter()
            .map(|text| self.summarize(text, mode, fraction))
            .collect()
    }

    /// Fetch a document from `source` and summarize it, keeping its title
    pub fn summarize_source(
        &self,
        source: &dyn SourceProvider,
        identifier: &str,
        mode: SummaryMode,
        fraction: f64,
    ) -> Result<SourceSummary> {
        let document = {
            trace_stage!("fetch");
            source.fetch_source_text(identifier)?
        };
        let summary = self.summarize_detailed(&document.text, mode, fraction)?;
        Ok(SourceSummary {
            title: document.title,
            summary,
        })
    }
}

/// Convenience function to summarize with the default configuration
pub fn summarize(text: &str, mode: SummaryMode, fraction: f64) -> Result<String> {
    Summarizer::new().summarize(text, mode, fraction)
}
