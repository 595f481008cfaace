//! Unicode-aware sentence splitting and word tokenization
//!
//! Sentence and word boundaries follow UAX #29. Caption text wraps lines at
//! arbitrary points, so line breaks are read as spaces when locating sentence
//! boundaries; the reported spans still index the original text.
//!
//! UAX #29 never breaks before a lowercase word, which is how most auto
//! generated captions start their sentences. A repair pass splits those
//! runs again after `.`, `?` or `!`, keeping initials, dotted abbreviations
//! and common short forms ("etc.", "vs.") inside their sentence.

use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Sentence, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length (in chars) to keep
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length.max(1);
        self
    }

    /// Split text into sentences in document order
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        self.sentence_boundaries(text)
            .into_iter()
            .enumerate()
            .map(|(idx, (start, end))| Sentence::new(text[start..end].trim(), start, end, idx))
            .collect()
    }

    /// Tokenize text into sentences and word tokens
    pub fn tokenize(&self, text: &str) -> (Vec<Sentence>, Vec<Token>) {
        let mut sentences = self.split_sentences(text);
        let mut tokens = Vec::new();

        for sentence in &mut sentences {
            sentence.start_token = tokens.len();
            let sent_text = &text[sentence.start..sentence.end];

            for (word_start, word) in sent_text.unicode_word_indices() {
                if word.chars().count() < self.min_token_length {
                    continue;
                }

                // Skip pure punctuation/symbols
                if !word.chars().any(|c| c.is_alphanumeric()) {
                    continue;
                }

                let abs_start = sentence.start + word_start;
                tokens.push(Token::new(
                    word,
                    abs_start,
                    abs_start + word.len(),
                    sentence.index,
                    tokens.len(),
                ));
            }

            sentence.end_token = tokens.len();
        }

        (sentences, tokens)
    }

    /// Find sentence boundaries in text as `(start, end)` byte spans.
    ///
    /// Each span runs up to the start of the next sentence, so trailing
    /// whitespace belongs to the sentence it follows. Leading whitespace of
    /// the document is not part of any span.
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let flat = flatten_line_breaks(text);

        let mut boundaries: Vec<(usize, usize)> = Vec::new();
        for (idx, segment) in flat.split_sentence_bound_indices() {
            if segment.trim().is_empty() {
                // Whitespace-only segment: attach it to the previous sentence
                if let Some(last) = boundaries.last_mut() {
                    last.1 = idx + segment.len();
                }
                continue;
            }
            let lead = segment.len() - segment.trim_start().len();
            let (seg_start, seg_end) = (idx + lead, idx + segment.len());
            let mut start = seg_start;
            for split in lowercase_restarts(&flat[seg_start..seg_end]) {
                boundaries.push((start, seg_start + split));
                start = seg_start + split;
            }
            boundaries.push((start, seg_end));
        }

        boundaries
    }
}

/// Words whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "approx", "apr", "aug", "ave", "ca", "cf", "co", "corp", "dec", "dept", "dr", "est", "etc",
    "feb", "fig", "inc", "jan", "jr", "jul", "jun", "ltd", "mar", "min", "misc", "mr", "mrs",
    "ms", "mt", "no", "nov", "oct", "prof", "sec", "sep", "sept", "sr", "st", "vol", "vs",
];

/// A sentence terminator, optional closing quotes or brackets, whitespace,
/// then a lowercase letter or digit. UAX #29 keeps these together.
static LOWERCASE_RESTART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<end>[.?!]+)["'\x{2019}\x{201D})\]]*\s+(?P<next>[\p{Ll}0-9])"#)
        .expect("sentence restart pattern is valid")
});

/// Replace line breaks with spaces of the same byte length, so byte offsets
/// in the result are valid offsets into `text`.
fn flatten_line_breaks(text: &str) -> String {
    let mut flat = String::with_capacity(text.len());
    for c in text.chars() {
        if is_line_break(c) {
            flat.extend(std::iter::repeat(' ').take(c.len_utf8()));
        } else {
            flat.push(c);
        }
    }
    flat
}

/// Characters UAX #29 treats as hard paragraph separators.
pub(crate) fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Byte offsets inside `segment` where a new sentence starts with a
/// lowercase letter or a digit.
fn lowercase_restarts(segment: &str) -> Vec<usize> {
    LOWERCASE_RESTART
        .captures_iter(segment)
        .filter_map(|caps| {
            let end = caps.name("end")?;
            let next = caps.name("next")?;
            ends_sentence(&segment[..end.start()], end.as_str()).then_some(next.start())
        })
        .collect()
}

/// Whether `terminator` closes a sentence given the text before it.
fn ends_sentence(before: &str, terminator: &str) -> bool {
    if terminator != "." {
        // Suspension points continue the sentence; `?` and `!` always end it
        return !terminator.starts_with("..");
    }

    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        return true;
    }
    // Initials ("j. smith") and dotted abbreviations ("e.g", "u.s")
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return false;
    }
    if word.contains('.') {
        return false;
    }
    let lower = word.to_lowercase();
    !ABBREVIATIONS.contains(&lower.as_str())
}

/// A tokenized document: the source text, its sentences, and its tokens.
///
/// Built once per summarization call and read by every stage after the
/// splitter. Sentences are never reordered.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    sentences: Vec<Sentence>,
    tokens: Vec<Token>,
}

impl Document {
    /// Split and tokenize `text`, marking stopwords with `stopwords`.
    ///
    /// Fails with [`SummarizeError::EmptyDocument`] when no sentence is found.
    pub fn parse(text: &str, tokenizer: &Tokenizer, stopwords: &StopwordFilter) -> Result<Self> {
        let (sentences, mut tokens) = tokenizer.tokenize(text);
        if sentences.is_empty() {
            return Err(SummarizeError::empty_document(
                "input has no recognizable sentences",
            ));
        }

        for token in &mut tokens {
            token.is_stopword = stopwords.is_stopword(&token.lower);
        }

        Ok(Self {
            text: text.to_string(),
            sentences,
            tokens,
        })
    }

    /// The original text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// All word tokens in document order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Tokens belonging to one sentence
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        &self.tokens[sentence.start_token..sentence.end_token]
    }

    /// The source span of a sentence, including its trailing whitespace
    pub fn span(&self, sentence: &Sentence) -> &str {
        &self.text[sentence.start..sentence.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let (sentences, tokens) = tokenizer.tokenize("Hello world. This is a test.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Hello world.");
        assert_eq!(sentences[1].text, "This is a test.");
        assert_eq!(tokens.len(), 6);
        assert_eq!(sentences[0].token_len(), 2);
        assert_eq!(tokens[2].sentence_idx, 1);
    }

    #[test]
    fn test_spans_cover_input() {
        let text = "  A cat sat. A cat ran!  Dogs bark loudly?";
        let sentences = Tokenizer::new().split_sentences(text);

        assert_eq!(sentences.len(), 3);
        let rebuilt: String = sentences.iter().map(|s| &text[s.start..s.end]).collect();
        assert_eq!(rebuilt, text.trim_start());

        for pair in sentences.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_newlines_are_not_boundaries() {
        let text = "the speaker talks about\nrust ownership and\nborrowing today. Next topic.";
        let sentences = Tokenizer::new().split_sentences(text);

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].text.contains('\n'));
        assert!(sentences[0].text.ends_with("today."));
    }

    #[test]
    fn test_lowercase_sentences_are_split() {
        let text = "so we start with ownership. then we talk about borrowing. finally lifetimes.";
        let sentences = Tokenizer::new().split_sentences(text);

        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "so we start with ownership.",
                "then we talk about borrowing.",
                "finally lifetimes."
            ]
        );
        let rebuilt: String = sentences.iter().map(|s| &text[s.start..s.end]).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_sentence_starting_with_digit_is_split() {
        let sentences = Tokenizer::new().split_sentences("mp3 files. 2024 mp3.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].text, "2024 mp3.");
    }

    #[test]
    fn test_closing_quote_and_question_mark_end_sentences() {
        let text = "he said \"stop.\" then he left. is it fast? yes it is!";
        let sentences = Tokenizer::new().split_sentences(text);

        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["he said \"stop.\"", "then he left.", "is it fast?", "yes it is!"]
        );
    }

    #[test]
    fn test_abbreviations_initials_and_decimals_stay_inside() {
        let text = "we compare rust vs. go, e.g. speed at 3.5 times. j. smith wrote it... and then left.";
        let sentences = Tokenizer::new().split_sentences(text);

        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "we compare rust vs. go, e.g. speed at 3.5 times.",
                "j. smith wrote it... and then left."
            ]
        );
    }

    #[test]
    fn test_unicode_line_separators_are_not_boundaries() {
        for sep in ['\u{0085}', '\u{2028}', '\u{2029}'] {
            let text = format!("talks about{}rust ownership today. Next topic.", sep);
            let sentences = Tokenizer::new().split_sentences(&text);

            assert_eq!(sentences.len(), 2, "separator {:?}", sep);
            assert!(sentences[0].text.contains(sep));
            assert!(sentences[0].text.ends_with("today."));
            assert_eq!(&text[sentences[1].start..sentences[1].end], "Next topic.");
        }
    }

    #[test]
    fn test_no_terminal_punctuation_is_one_sentence() {
        let sentences = Tokenizer::new().split_sentences("so today we are going to talk");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "so today we are going to talk");
    }

    #[test]
    fn test_unicode_handling() {
        let tokenizer = Tokenizer::new();
        let (sentences, tokens) = tokenizer.tokenize("Café résumé naïve. Über alles.");

        assert_eq!(sentences.len(), 2);
        assert!(tokens.iter().any(|t| t.text == "résumé"));
        assert!(tokens.iter().all(|t| t.is_alpha));
        for t in &tokens {
            assert_eq!(&"Café résumé naïve. Über alles."[t.start..t.end], t.text);
        }
    }

    #[test]
    fn test_min_length_filter() {
        let tokenizer = Tokenizer::new().with_min_length(3);
        let (_, tokens) = tokenizer.tokenize("A cat is on the mat.");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["cat", "the", "mat"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        let (sentences, tokens) = tokenizer.tokenize("");
        assert!(sentences.is_empty());
        assert!(tokens.is_empty());

        let (sentences, _) = tokenizer.tokenize(" \n\t ");
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_document_parse_marks_stopwords() {
        let stopwords = StopwordFilter::from_list(&["the", "on"]);
        let doc = Document::parse("The cat sat on the mat.", &Tokenizer::new(), &stopwords)
            .unwrap();

        assert_eq!(doc.sentence_count(), 1);
        let flagged: Vec<bool> = doc.tokens().iter().map(|t| t.is_stopword).collect();
        assert_eq!(flagged, vec![true, false, false, true, true, false]);
    }

    #[test]
    fn test_document_parse_empty_is_error() {
        let err = Document::parse("   ", &Tokenizer::new(), &StopwordFilter::empty()).unwrap_err();
        assert_eq!(err.code(), "empty_document");
    }

    #[test]
    fn test_document_sentence_tokens_and_span() {
        let doc = Document::parse(
            "One two. Three four five.",
            &Tokenizer::new(),
            &StopwordFilter::empty(),
        )
        .unwrap();

        let second = &doc.sentences()[1];
        let words: Vec<&str> = doc
            .sentence_tokens(second)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(words, vec!["Three", "four", "five"]);
        assert_eq!(doc.span(&doc.sentences()[0]), "One two. ");
    }
}
