//! Stopword filtering
//!
//! Multi-language NLTK stopword lists from the `stop-words` crate, plus short
//! built-in lists for Chinese and Japanese. Lists for every supported
//! language are loaded once per process and shared read-only through
//! [`StopwordFilter::shared`].

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};
use stop_words::{get, LANGUAGE};

/// Canonical codes of every language with a stopword list
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "ar",
    "az", "el", "id", "kk", "ne", "ro", "sl", "tg", "zh", "ja",
];

static SHARED: LazyLock<FxHashMap<&'static str, StopwordFilter>> = LazyLock::new(|| {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|&code| (code, StopwordFilter::new(code)))
        .collect()
});

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Accepts ISO codes or English names ("de", "german"). Unknown languages
    /// fall back to English.
    pub fn new(language: &str) -> Self {
        let code = canonical_code(language).unwrap_or("en");
        Self {
            stopwords: Self::load_stopwords(code),
        }
    }

    /// The process-wide filter for a language
    ///
    /// Built on first use and never mutated afterwards. Unknown languages
    /// resolve to the English filter.
    pub fn shared(language: &str) -> &'static StopwordFilter {
        let code = canonical_code(language).unwrap_or("en");
        &SHARED[code]
    }

    /// Whether a stopword list exists for this language
    pub fn is_supported(language: &str) -> bool {
        canonical_code(language).is_some()
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
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

    fn load_stopwords(code: &str) -> FxHashSet<String> {
        let lang = match code {
            "de" => LANGUAGE::German,
            "fr" => LANGUAGE::French,
            "es" => LANGUAGE::Spanish,
            "it" => LANGUAGE::Italian,
            "pt" => LANGUAGE::Portuguese,
            "nl" => LANGUAGE::Dutch,
            "ru" => LANGUAGE::Russian,
            "sv" => LANGUAGE::Swedish,
            "no" => LANGUAGE::Norwegian,
            "da" => LANGUAGE::Danish,
            "fi" => LANGUAGE::Finnish,
            "hu" => LANGUAGE::Hungarian,
            "tr" => LANGUAGE::Turkish,
            "ar" => LANGUAGE::Arabic,
            "az" => LANGUAGE::Azerbaijani,
            "el" => LANGUAGE::Greek,
            "id" => LANGUAGE::Indonesian,
            "kk" => LANGUAGE::Kazakh,
            "ne" => LANGUAGE::Nepali,
            "ro" => LANGUAGE::Romanian,
            "sl" => LANGUAGE::Slovenian,
            "tg" => LANGUAGE::Tajik,
            "zh" => return Self::chinese_stopwords(),
            "ja" => return Self::japanese_stopwords(),
            _ => LANGUAGE::English,
        };

        get(lang)
            .into_iter()
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Common Chinese stopwords
    fn chinese_stopwords() -> FxHashSet<String> {
        [
            "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及",
            "这", "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对",
            "将", "于", "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Common Japanese stopwords
    fn japanese_stopwords() -> FxHashSet<String> {
        [
            "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある",
            "いる", "も", "する", "から", "な", "こと", "として", "い", "や", "など", "なっ",
            "ない", "この", "ため", "その", "あっ", "よう", "また", "もの", "という", "あり",
            "まで", "られ", "なる", "へ", "か", "だ", "これ", "によって", "により", "おり",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

/// Map a language code or name to its canonical two-letter code
fn canonical_code(language: &str) -> Option<&'static str> {
    let code = match language.trim().to_lowercase().as_str() {
        "en" | "english" => "en",
        "de" | "german" => "de",
        "fr" | "french" => "fr",
        "es" | "spanish" => "es",
        "it" | "italian" => "it",
        "pt" | "portuguese" => "pt",
        "nl" | "dutch" => "nl",
        "ru" | "russian" => "ru",
        "sv" | "swedish" => "sv",
        "no" | "norwegian" => "no",
        "da" | "danish" => "da",
        "fi" | "finnish" => "fi",
        "hu" | "hungarian" => "hu",
        "tr" | "turkish" => "tr",
        "ar" | "arabic" => "ar",
        "az" | "azerbaijani" => "az",
        "el" | "greek" => "el",
        "id" | "indonesian" => "id",
        "kk" | "kazakh" => "kk",
        "ne" | "nepali" => "ne",
        "ro" | "romanian" => "ro",
        "sl" | "slovenian" => "sl",
        "tg" | "tajik" => "tg",
        "zh" | "chinese" => "zh",
        "ja" | "japanese" => "ja",
        _ => return None,
    };
    Some(code)
}
