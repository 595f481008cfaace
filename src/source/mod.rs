//! Source text acquisition
//!
//! The summarizer never fetches text itself. A [`SourceProvider`] turns an
//! identifier (a caption file path, a URL handled by some downloader) into a
//! [`SourceDocument`] carrying both the text and a display title, so the title
//! travels with the text instead of living in shared state.

pub mod webvtt;

use crate::errors::{Result, SummarizeError};
use crate::types::Summary;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub use webvtt::{parse_vtt, Cue, VttFileSource};

/// Plain text plus a display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Human-readable title (video title, file stem, ...)
    pub title: String,
    /// Document text handed to the summarizer
    pub text: String,
}

impl SourceDocument {
    /// Create a new source document
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A summary together with the title of the document it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    /// Title reported by the source provider
    pub title: String,
    /// The summary of the source text
    pub summary: Summary,
}

/// Acquires document text for an identifier.
///
/// Failures are reported as [`SummarizeError::SourceUnavailable`]. Retry policy
/// belongs to the caller.
pub trait SourceProvider {
    /// Fetch the title and text behind `identifier`
    fn fetch_source_text(&self, identifier: &str) -> Result<SourceDocument>;
}

impl<F> SourceProvider for F
where
    F: Fn(&str) -> Result<SourceDocument>,
{
    fn fetch_source_text(&self, identifier: &str) -> Result<SourceDocument> {
        self(identifier)
    }
}

/// Reads a plain UTF-8 text file; the title is the file stem
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileSource;

impl SourceProvider for TextFileSource {
    fn fetch_source_text(&self, identifier: &str) -> Result<SourceDocument> {
        let path = Path::new(identifier);
        let text = std::fs::read_to_string(path).map_err(|e| {
            SummarizeError::source_unavailable(format!("cannot read {}: {}", identifier, e))
        })?;
        Ok(SourceDocument::new(title_from_path(path), text))
    }
}

/// File stem of `path`, or the whole path when it has none
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Wraps a provider with a deadline.
///
/// The fetch runs on a worker thread. When the deadline passes the caller gets
/// [`SummarizeError::SourceUnavailable`] immediately and the worker's eventual
/// result is dropped.
#[derive(Debug)]
pub struct TimedSource<S> {
    inner: Arc<S>,
    timeout: Duration,
}

impl<S> TimedSource<S> {
    /// Wrap `inner`, giving each fetch at most `timeout`
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }
}

impl<S> SourceProvider for TimedSource<S>
where
    S: SourceProvider + Send + Sync + 'static,
{
    fn fetch_source_text(&self, identifier: &str) -> Result<SourceDocument> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let id = identifier.to_string();

        thread::Builder::new()
            .name("source-fetch".to_string())
            .spawn(move || {
                // The receiver is gone if the caller already timed out
                let _ = tx.send(inner.fetch_source_text(&id));
            })
            .map_err(|e| {
                SummarizeError::source_unavailable(format!("cannot start fetch worker: {}", e))
            })?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(SummarizeError::source_unavailable(format!(
                "fetching '{}' timed out after {:?}",
                identifier, self.timeout
            ))),
            Err(RecvTimeoutError::Disconnected) => Err(SummarizeError::source_unavailable(
                format!("fetch worker for '{}' exited without a result", identifier),
            )),
        }
    }
}
