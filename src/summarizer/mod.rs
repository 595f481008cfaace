//! Summarization components
//!
//! Provides extractive summarization: a [`selector::Selector`] that keeps the
//! top-ranked sentences in document order, and a [`dispatch::Summarizer`] that
//! routes a request to the ranker (or external service) its mode names.

pub mod dispatch;
pub mod selector;

use crate::errors::{Result, SummarizeError};

/// Number of sentences a fraction of the document asks for:
/// `ceil(fraction * sentence_count)`.
///
/// Fails with [`SummarizeError::InvalidFraction`] unless `fraction` is in
/// `(0, 1]` and the count lands in `[1, sentence_count]`.
pub fn selection_count(fraction: f64, sentence_count: usize) -> Result<usize> {
    validate_fraction(fraction)?;

    let k = (fraction * sentence_count as f64).ceil() as usize;
    if k == 0 || k > sentence_count {
        return Err(SummarizeError::invalid_fraction(
            fraction,
            format!(
                "selects {} of {} sentences; expected between 1 and {}",
                k, sentence_count, sentence_count
            ),
        ));
    }

    Ok(k)
}

/// Check that a fraction lies in `(0, 1]`
pub fn validate_fraction(fraction: f64) -> Result<()> {
    if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
        return Err(SummarizeError::invalid_fraction(
            fraction,
            "fraction must be in (0, 1]",
        ));
    }
    Ok(())
}
