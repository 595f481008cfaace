//! Natural Language Processing components
//!
//! This module provides sentence splitting, word tokenization, and stopword
//! filtering. Both sentence rankers consume the [`tokenizer::Document`] built here.

pub mod stopwords;
pub mod tokenizer;
