//! Sentence segmentation
//!
//! Rule-based splitting on terminal punctuation. A boundary is a run of
//! `.`, `!`, `?` or `…` (plus any closing quotes or brackets) followed by
//! whitespace or the end of the text. A lone period after a known
//! abbreviation is not a boundary, and neither is one after a single capital
//! initial unless that letter is the pronoun `I` or the next word is a
//! stopword (which usually opens a new sentence, as in "Plan B. It ...").
//!
//! Sentences keep their exact original text, trimmed of surrounding
//! whitespace, together with byte offsets into the document.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use super::stopwords::StopwordFilter;
use crate::types::Sentence;

/// Lowercase abbreviations (without their final period) that never end a sentence
static ABBREVIATIONS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "cf", "approx",
        "dept", "fig", "inc", "ltd", "corp", "vol", "jan", "feb", "apr", "jun", "jul", "aug",
        "sep", "sept", "oct", "nov", "dec", "mt", "ave", "u.s", "u.k", "a.m", "p.m", "gen",
        "gov", "sen", "rep", "rev", "capt", "lt", "col", "sgt",
    ]
    .into_iter()
    .collect()
});

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | ')' | ']' | '»')
}

const OPENERS: [char; 7] = ['(', '[', '"', '\'', '“', '‘', '«'];

/// A capital letter followed by a period, such as "R."
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase()
    )
}

/// Splits documents into sentences
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// Abbreviations added on top of the built-in table
    extra_abbreviations: FxHashSet<String>,
    /// Words that typically open a sentence after an initial-like letter
    starters: &'static StopwordFilter,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Create an English segmenter using the built-in abbreviation table
    pub fn new() -> Self {
        Self::for_language("en")
    }

    /// Create a segmenter that reads sentence openers from the stopword
    /// list of `language`
    pub fn for_language(language: &str) -> Self {
        Self {
            extra_abbreviations: FxHashSet::default(),
            starters: StopwordFilter::shared(language),
        }
    }

    /// Treat additional words as abbreviations (given without the final period)
    pub fn with_abbreviations(mut self, words: &[&str]) -> Self {
        self.extra_abbreviations
            .extend(words.iter().map(|w| w.trim_end_matches('.').to_lowercase()));
        self
    }

    /// Split `text` into sentences in document order
    ///
    /// Text without terminal punctuation comes back as a single sentence;
    /// empty or whitespace-only text yields no sentences.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];
            if !is_terminator(c) {
                i += 1;
                continue;
            }

            let mut j = i;
            while j < chars.len() && is_terminator(chars[j].1) {
                j += 1;
            }
            let single_period = j - i == 1 && c == '.';
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            let at_boundary = j == chars.len() || chars[j].1.is_whitespace();
            let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
            if at_boundary
                && !(single_period && self.period_continues(&text[start..pos], &text[end..]))
            {
                push_trimmed(&mut sentences, text, start, end);
                start = end;
            }
            i = j;
        }

        push_trimmed(&mut sentences, text, start, text.len());
        sentences
    }

    /// Whether a lone period ends an abbreviation or an initial rather
    /// than the sentence
    fn period_continues(&self, preceding: &str, following: &str) -> bool {
        let Some(word) = preceding.split_whitespace().last() else {
            return false;
        };
        let word = word.trim_start_matches(OPENERS);

        let mut chars = word.chars();
        if let (Some(first), None) = (chars.next(), chars.next()) {
            return first.is_uppercase() && first != 'I' && !self.opens_sentence(following);
        }

        let lower = word.to_lowercase();
        ABBREVIATIONS.contains(lower.as_str()) || self.extra_abbreviations.contains(&lower)
    }

    /// Whether the next word reads like the first word of a sentence
    fn opens_sentence(&self, following: &str) -> bool {
        let Some(next) = following.split_whitespace().next() else {
            return true;
        };
        let next = next.trim_start_matches(OPENERS);
        if is_initial(next) {
            return false;
        }
        let bare = next.trim_end_matches(|c: char| !c.is_alphanumeric());
        self.starters.is_stopword(bare)
    }
}

fn push_trimmed(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (slice.len() - slice.trim_start().len());
    let index = sentences.len();
    sentences.push(Sentence::new(trimmed, offset, offset + trimmed.len(), index));
}
