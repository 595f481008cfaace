//! Native Python interface
//!
//! Python classes mirroring the Rust API. Summarization releases the GIL;
//! a Python callable passed as `external` re-acquires it for each call.

use super::to_py_err;
use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::summarizer::dispatch::{ExternalSummarizer, Summarizer};
use crate::types::{ScoreAggregation, SelectedSentence, Summary, SummaryMode, SummarizerConfig};
use pyo3::prelude::*;

/// Adapts a Python callable `(text: str, ratio: float) -> str`
struct PyExternal {
    callable: Py<PyAny>,
}

impl ExternalSummarizer for PyExternal {
    fn summarize(&self, text: &str, ratio: f64) -> Result<String> {
        Python::with_gil(|py| {
            self.callable
                .call1(py, (text, ratio))
                .and_then(|out| out.extract::<String>(py))
        })
        .map_err(|e| SummarizeError::external_service(e.to_string()))
    }
}

/// A sentence chosen for a summary
#[pyclass(name = "SelectedSentence")]
#[derive(Clone)]
pub struct PySelectedSentence {
    #[pyo3(get)]
    pub index: usize,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub text: String,
}

#[pymethods]
impl PySelectedSentence {
    fn __repr__(&self) -> String {
        format!(
            "SelectedSentence(index={}, score={:.4}, text='{}')",
            self.index, self.score, self.text
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<SelectedSentence> for PySelectedSentence {
    fn from(s: SelectedSentence) -> Self {
        Self {
            index: s.index,
            score: s.score,
            text: s.text,
        }
    }
}

/// Result of a summarization call
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub mode: String,
    #[pyo3(get)]
    pub sentence_count: usize,
    #[pyo3(get)]
    pub requested: usize,
    #[pyo3(get)]
    pub sentences: Vec<PySelectedSentence>,
}

#[pymethods]
impl PySummary {
    fn __repr__(&self) -> String {
        format!(
            "Summary(mode='{}', selected={}, sentence_count={})",
            self.mode,
            self.sentences.len(),
            self.sentence_count
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    fn __len__(&self) -> usize {
        self.sentences.len()
    }

    /// Source indices of the selected sentences
    fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }
}

impl From<Summary> for PySummary {
    fn from(s: Summary) -> Self {
        Self {
            text: s.text,
            mode: s.mode.as_str().to_string(),
            sentence_count: s.sentence_count,
            requested: s.requested,
            sentences: s.sentences.into_iter().map(PySelectedSentence::from).collect(),
        }
    }
}

/// Get the built-in stopword list for a language.
#[pyfunction]
#[pyo3(signature = (language = "en"))]
pub fn get_stopwords(language: &str) -> PyResult<Vec<String>> {
    StopwordFilter::built_in_list(language).map_err(to_py_err)
}

/// Configuration for the summarizer
#[pyclass(name = "SummarizerConfig")]
#[derive(Clone)]
pub struct PySummarizerConfig {
    inner: SummarizerConfig,
}

#[pymethods]
impl PySummarizerConfig {
    #[new]
    #[pyo3(signature = (
        language="en",
        stopwords=None,
        min_token_length=1,
        smooth_idf=true,
        normalize_rows=true,
        score_aggregation="sum",
        frequency_sentence_cap=Some(5)
    ))]
    fn new(
        language: &str,
        stopwords: Option<Vec<String>>,
        min_token_length: usize,
        smooth_idf: bool,
        normalize_rows: bool,
        score_aggregation: &str,
        frequency_sentence_cap: Option<usize>,
    ) -> PyResult<Self> {
        let config = SummarizerConfig::default()
            .with_language(language)
            .with_stopwords(stopwords.unwrap_or_default())
            .with_min_token_length(min_token_length)
            .with_smooth_idf(smooth_idf)
            .with_normalize_rows(normalize_rows)
            .with_score_aggregation(ScoreAggregation::parse(score_aggregation).map_err(to_py_err)?)
            .with_frequency_sentence_cap(frequency_sentence_cap);

        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    /// Serialize to a JSON object string
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| to_py_err(e.into()))
    }

    fn __repr__(&self) -> String {
        format!(
            "SummarizerConfig(language='{}', smooth_idf={}, frequency_sentence_cap={:?})",
            self.inner.language, self.inner.smooth_idf, self.inner.frequency_sentence_cap
        )
    }
}

/// Mode-dispatching extractive summarizer
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    inner: Summarizer,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (config=None, external=None))]
    fn new(config: Option<PySummarizerConfig>, external: Option<Py<PyAny>>) -> PyResult<Self> {
        let inner = build_summarizer(config, external)?;
        Ok(Self { inner })
    }

    /// Summarize text, returning only the summary string
    #[pyo3(signature = (text, mode="tfidf", fraction=0.3))]
    fn summarize(&self, py: Python<'_>, text: &str, mode: &str, fraction: f64) -> PyResult<String> {
        let mode: SummaryMode = mode.parse().map_err(to_py_err)?;
        py.allow_threads(|| self.inner.summarize(text, mode, fraction))
            .map_err(to_py_err)
    }

    /// Summarize text, returning the selected sentences and their scores
    #[pyo3(signature = (text, mode="tfidf", fraction=0.3))]
    fn summarize_detailed(
        &self,
        py: Python<'_>,
        text: &str,
        mode: &str,
        fraction: f64,
    ) -> PyResult<PySummary> {
        let mode: SummaryMode = mode.parse().map_err(to_py_err)?;
        py.allow_threads(|| self.inner.summarize_detailed(text, mode, fraction))
            .map(PySummary::from)
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "Summarizer(language='{}', external={})",
            self.inner.config().language,
            self.inner.has_external()
        )
    }
}

fn build_summarizer(
    config: Option<PySummarizerConfig>,
    external: Option<Py<PyAny>>,
) -> PyResult<Summarizer> {
    let summarizer = match config {
        Some(c) => Summarizer::with_config(c.inner).map_err(to_py_err)?,
        None => Summarizer::new(),
    };
    Ok(match external {
        Some(callable) => summarizer.with_external(PyExternal { callable }),
        None => summarizer,
    })
}

/// Summarize text in one call.
///
/// Args:
///     text: document text
///     mode: "tfidf", "frequency", or "external"
///     fraction: share of sentences to keep, in (0, 1]
///     external: callable `(text, ratio) -> str` used by the external mode
///     config: optional SummarizerConfig
#[pyfunction]
#[pyo3(signature = (text, mode="tfidf", fraction=0.3, external=None, config=None))]
pub fn summarize(
    py: Python<'_>,
    text: &str,
    mode: &str,
    fraction: f64,
    external: Option<Py<PyAny>>,
    config: Option<PySummarizerConfig>,
) -> PyResult<String> {
    let mode: SummaryMode = mode.parse().map_err(to_py_err)?;
    let summarizer = build_summarizer(config, external)?;
    py.allow_threads(|| summarizer.summarize(text, mode, fraction))
        .map_err(to_py_err)
}

/// Like `summarize`, but returns a Summary with the selected sentences
#[pyfunction]
#[pyo3(signature = (text, mode="tfidf", fraction=0.3, external=None, config=None))]
pub fn summarize_detailed(
    py: Python<'_>,
    text: &str,
    mode: &str,
    fraction: f64,
    external: Option<Py<PyAny>>,
    config: Option<PySummarizerConfig>,
) -> PyResult<PySummary> {
    let mode: SummaryMode = mode.parse().map_err(to_py_err)?;
    let summarizer = build_summarizer(config, external)?;
    py.allow_threads(|| summarizer.summarize_detailed(text, mode, fraction))
        .map(PySummary::from)
        .map_err(to_py_err)
}
