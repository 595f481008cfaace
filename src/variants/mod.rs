//! Sentence ranking variants
//!
//! This module provides the two extractive scoring strategies:
//! - TermWeight: TF-IDF weighting with each sentence as a document
//! - Frequency: global word frequencies normalized by the most frequent word
//!
//! Both produce a [`ScoreList`] that the selector turns into a summary.

pub mod frequency;
pub mod term_weight;

use crate::nlp::tokenizer::Document;
use crate::types::ScoreList;

/// A strategy that assigns every sentence of a document an importance score.
///
/// # Contract
///
/// - **Output**: exactly one entry per sentence, in sentence order.
/// - **Deterministic**: same document and configuration, same scores
///   (bit for bit).
/// - **Stateless**: nothing is cached between calls.
pub trait SentenceRanker {
    /// Score every sentence of `doc`
    fn rank(&self, doc: &Document) -> ScoreList;
}

impl<R: SentenceRanker + ?Sized> SentenceRanker for &R {
    fn rank(&self, doc: &Document) -> ScoreList {
        (**self).rank(doc)
    }
}
