//! Top-K sentence selection
//!
//! Keeps the `k` best-scoring sentences, restores their document order, and
//! joins their source spans into the summary text.

use crate::errors::{Result, SummarizeError};
use crate::nlp::tokenizer::{is_line_break, Document};
use crate::types::{ScoreList, SelectedSentence};

/// Top-K sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    /// Hard upper bound applied after the top-K cut
    max_sentences: Option<usize>,
}

impl Selector {
    /// Create a selector without a sentence cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of selected sentences regardless of `k`
    pub fn with_max_sentences(mut self, max: Option<usize>) -> Self {
        self.max_sentences = max;
        self
    }

    /// Indices of the chosen sentences, in document order.
    ///
    /// Ranking is by [`SentenceScore::stable_cmp`](crate::types::SentenceScore::stable_cmp):
    /// score descending, ties to the earlier sentence.
    pub fn pick(&self, scores: &ScoreList, k: usize) -> Result<Vec<usize>> {
        let n = scores.len();
        if k == 0 || k > n {
            return Err(SummarizeError::invalid_fraction(
                k as f64 / n.max(1) as f64,
                format!("cannot select {} of {} sentences", k, n),
            ));
        }

        let take = self.max_sentences.map_or(k, |max| k.min(max));
        let mut chosen: Vec<usize> = scores
            .ranked()
            .into_iter()
            .take(take)
            .map(|s| s.index)
            .collect();
        chosen.sort_unstable();
        Ok(chosen)
    }

    /// Chosen sentences with their scores, in document order
    pub fn select_sentences(
        &self,
        scores: &ScoreList,
        k: usize,
        doc: &Document,
    ) -> Result<Vec<SelectedSentence>> {
        if scores.len() != doc.sentence_count() {
            return Err(SummarizeError::invalid_config(format!(
                "score list has {} entries for {} sentences",
                scores.len(),
                doc.sentence_count()
            )));
        }

        Ok(self
            .pick(scores, k)?
            .into_iter()
            .map(|index| SelectedSentence {
                index,
                score: scores.score(index).unwrap_or(0.0),
                text: doc.sentences()[index].text.clone(),
            })
            .collect())
    }

    /// Summary text for the top `k` sentences
    pub fn select(&self, scores: &ScoreList, k: usize, doc: &Document) -> Result<String> {
        let selected = self.select_sentences(scores, k, doc)?;
        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        Ok(join_sentences(doc, &indices))
    }
}

/// Concatenate the source spans of `indices` (already in document order).
///
/// Spans carry the whitespace that followed each sentence in the source, so
/// no separator is added. Line breaks are removed; one that sat between two
/// words becomes a single space so the words stay apart.
pub(crate) fn join_sentences(doc: &Document, indices: &[usize]) -> String {
    let mut joined = String::new();
    for sentence in indices.iter().filter_map(|&i| doc.sentences().get(i)) {
        joined.push_str(doc.span(sentence));
    }
    strip_line_breaks(&joined).trim().to_string()
}

fn strip_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !is_line_break(c) {
            out.push(c);
            continue;
        }
        let prev_is_word = out.ends_with(|p: char| !p.is_whitespace());
        let next_is_word = chars.peek().is_some_and(|n| !n.is_whitespace());
        if prev_is_word && next_is_word {
            out.push(' ');
        }
    }

    out
}
