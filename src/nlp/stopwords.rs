//! Stopword filtering
//!
//! English uses a compact function-word list of about three hundred entries.
//! Other languages come from the `stop-words` crate. Every set can be extended
//! with custom words from [`SummarizerConfig::stopwords`].

use crate::errors::{Result, SummarizeError};
use crate::types::SummarizerConfig;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A case-insensitive set of words excluded from term weighting and
/// frequency counting
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self {
            stopwords: Self::load_stopwords(LANGUAGE::English),
        }
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language code or name
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl
    pub fn new(language: &str) -> Result<Self> {
        let lang = Self::resolve_language(language)?;
        Ok(Self {
            stopwords: Self::load_stopwords(lang),
        })
    }

    /// Build the filter a [`SummarizerConfig`] describes: the built-in list for
    /// its language plus its extra stopwords
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        let mut filter = Self::new(&config.language)?;
        filter.add_stopwords(config.stopwords.iter().map(String::as_str));
        Ok(filter)
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words.iter().copied());
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// The built-in list for a language, sorted
    pub fn built_in_list(language: &str) -> Result<Vec<String>> {
        let lang = Self::resolve_language(language)?;
        let mut words: Vec<String> = Self::load_stopwords(lang).into_iter().collect();
        words.sort();
        Ok(words)
    }

    fn resolve_language(language: &str) -> Result<LANGUAGE> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            other => {
                return Err(SummarizeError::invalid_config(format!(
                    "no stopword list for language '{}'",
                    other
                )))
            }
        };
        Ok(lang)
    }

    fn load_stopwords(lang: LANGUAGE) -> FxHashSet<String> {
        // The crate's English list also drops content words ("system", "value")
        if matches!(lang, LANGUAGE::English) {
            return ENGLISH_STOP_WORDS.iter().map(|s| s.to_string()).collect();
        }
        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}

/// English function words, lowercase
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "but", "by", "can", "cannot", "cant", "co", "could", "couldnt", "de", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "first", "five", "for", "former",
    "formerly", "forty", "four", "from", "further", "get", "give", "go", "had", "has", "hasnt",
    "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers",
    "herself", "him", "himself", "his", "how", "however", "hundred", "i", "ie", "if", "in",
    "inc", "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last", "latter",
    "latterly", "least", "less", "ltd", "made", "many", "may", "me", "meanwhile", "might",
    "mine", "more", "moreover", "most", "mostly", "much", "must", "my", "myself", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only",
    "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over",
    "own", "per", "perhaps", "please", "put", "rather", "re", "really", "same", "say", "see",
    "seem", "seemed", "seeming", "seems", "several", "she", "should", "since", "six", "sixty",
    "so", "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "take", "ten", "than", "that", "the", "their", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
    "these", "they", "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "toward", "towards", "twelve", "twenty", "two",
    "un", "under", "unless", "until", "up", "upon", "us", "used", "using", "various", "very",
    "via", "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever",
    "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether",
    "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will",
    "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en").unwrap();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("and"));
        assert!(filter.is_stopword("a"));
        assert!(!filter.is_stopword("dogs"));
    }

    #[test]
    fn test_english_keeps_content_words() {
        let filter = StopwordFilter::new("en").unwrap();

        for word in ["caption", "computer", "system", "information", "example", "value"] {
            assert!(!filter.is_stopword(word), "{} was filtered", word);
        }
        assert!((250..400).contains(&filter.len()), "{} English stopwords", filter.len());
    }

    #[test]
    fn test_default_is_english() {
        let filter = StopwordFilter::default();
        assert!(filter.is_stopword("the"));
        assert_eq!(filter.len(), StopwordFilter::new("english").unwrap().len());
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("WORDS"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(["extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_from_config_extends_builtin() {
        let config = SummarizerConfig::default().with_stopwords(["um", "uh"]);
        let filter = StopwordFilter::from_config(&config).unwrap();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("um"));
        assert!(filter.is_stopword("Uh"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de").unwrap();

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("maschine"));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = StopwordFilter::new("klingon").unwrap_err();
        assert_eq!(err.code(), "invalid_config");
    }

    #[test]
    fn test_built_in_list_sorted() {
        let words = StopwordFilter::built_in_list("en").unwrap();
        assert!(words.contains(&"the".to_string()));
        assert!(words.windows(2).all(|w| w[0] <= w[1]));
    }
}
