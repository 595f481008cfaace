//! Python bindings via PyO3
//!
//! This module provides the Python interface for caption_summarizer.

pub mod json;
pub mod native;

use crate::errors::SummarizeError;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

/// Map a library error onto the closest Python exception
pub(crate) fn to_py_err(err: SummarizeError) -> PyErr {
    match err {
        SummarizeError::SourceUnavailable { .. } => PyIOError::new_err(err.to_string()),
        SummarizeError::ExternalService { .. } => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface
    m.add_class::<native::PySelectedSentence>()?;
    m.add_class::<native::PySummary>()?;
    m.add_class::<native::PySummarizerConfig>()?;
    m.add_class::<native::PySummarizer>()?;
    m.add_function(wrap_pyfunction!(native::summarize, m)?)?;
    m.add_function(wrap_pyfunction!(native::summarize_detailed, m)?)?;
    m.add_function(wrap_pyfunction!(native::get_stopwords, m)?)?;

    // JSON interface
    m.add_function(wrap_pyfunction!(json::summarize_batch_from_json, m)?)?;

    Ok(())
}
