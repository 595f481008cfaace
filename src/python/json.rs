//! JSON interface for batch processing
//!
//! One call crosses the Python↔Rust boundary for a whole batch; documents are
//! summarized in parallel and failures are reported per document.

use super::to_py_err;
use crate::errors::SummarizeError;
use crate::summarizer::dispatch::Summarizer;
use crate::types::{SelectedSentence, SummaryMode, SummarizerConfig};
use pyo3::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Batch request from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonBatch {
    pub documents: Vec<JsonDocument>,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_fraction")]
    pub fraction: f64,
    #[serde(default)]
    pub config: Option<SummarizerConfig>,
}

fn default_mode() -> String {
    SummaryMode::TermWeight.as_str().to_string()
}

fn default_fraction() -> f64 {
    0.3
}

/// Output for one document: either a summary or an error
#[derive(Debug, Clone, Serialize)]
pub struct JsonResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sentences: Vec<SelectedSentence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Error record for a failed document
#[derive(Debug, Clone, Serialize)]
pub struct JsonError {
    pub code: &'static str,
    pub message: String,
}

impl From<&SummarizeError> for JsonError {
    fn from(err: &SummarizeError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Summarize a parsed batch. Request-level problems (bad mode, bad config)
/// fail the whole batch; document-level problems become per-document errors.
pub fn summarize_batch(batch: JsonBatch) -> crate::errors::Result<Vec<JsonResult>> {
    let mode: SummaryMode = batch.mode.parse()?;
    let summarizer = match batch.config {
        Some(config) => Summarizer::with_config(config)?,
        None => Summarizer::new(),
    };
    let fraction = batch.fraction;

    Ok(batch
        .documents
        .into_par_iter()
        .map(|doc| {
            match summarizer.summarize_detailed(&doc.text, mode, fraction) {
                Ok(summary) => JsonResult {
                    title: doc.title,
                    summary: Some(summary.text),
                    sentences: summary.sentences,
                    error: None,
                },
                Err(err) => JsonResult {
                    title: doc.title,
                    summary: None,
                    sentences: Vec::new(),
                    error: Some(JsonError::from(&err)),
                },
            }
        })
        .collect())
}

/// Summarize a batch of documents given as JSON
///
/// Args:
///     json_input: `{"documents": [{"text": ..., "title": ...}], "mode": ...,
///                  "fraction": ..., "config": {...}}`
///
/// Returns:
///     JSON array with one result object per document
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_batch_from_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    let batch: JsonBatch = serde_json::from_str(json_input)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(format!("Invalid JSON: {}", e)))?;

    let results = py.allow_threads(|| summarize_batch(batch)).map_err(to_py_err)?;

    serde_json::to_string(&results)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}
