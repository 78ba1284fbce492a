//! Text processing utilities: normalization, tokenization and n-grams

mod stop_words;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

use stop_words::ENGLISH_STOP_WORDS;

/// Common English stop words excluded from the similarity space
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Runs of two or more word characters
static TOKEN_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

/// Runs of whitespace, collapsed to a single space by `normalize`
static WHITESPACE: OnceLock<Option<Regex>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

fn compile(pattern: &str, what: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, pattern, "Failed to compile {} regex", what);
            None
        }
    }
}

fn get_token_pattern() -> Option<&'static Regex> {
    TOKEN_PATTERN
        .get_or_init(|| compile(r"\b\w\w+\b", "token"))
        .as_ref()
}

fn get_whitespace() -> Option<&'static Regex> {
    WHITESPACE.get_or_init(|| compile(r"\s+", "whitespace")).as_ref()
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Whether `word` is on the fixed English stop-word list
pub fn is_stop_word(word: &str) -> bool {
    get_stop_words().contains(word)
}

/// Canonicalize text for comparison.
///
/// Trims both ends, collapses every whitespace run to a single space and
/// lower-cases unless `case_sensitive` is set.
pub fn normalize(text: &str, case_sensitive: bool) -> String {
    let collapsed = match get_whitespace() {
        Some(re) => re.replace_all(text.trim(), " ").into_owned(),
        None => collapse_whitespace(text),
    };
    if case_sensitive {
        collapsed
    } else {
        collapsed.to_lowercase()
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the text is empty or whitespace only
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Lower-cased tokens of two or more word characters, stop words removed
pub fn tokenize(text: &str) -> Vec<String> {
    // No pattern means no tokens; the vector space reports an empty vocabulary
    let Some(pattern) = get_token_pattern() else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|s| !is_stop_word(s))
        .map(|s| s.to_string())
        .collect()
}

/// Tokenize text with optional Porter stemming
///
/// Stop words are removed before stemming, so "others" stays filtered
/// even though its stem is not on the list.
pub fn tokenize_with_stemming(text: &str, stem: bool) -> Vec<String> {
    let tokens = tokenize(text);
    if !stem {
        return tokens;
    }

    let stemmer = get_stemmer();
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}

/// Build every n-gram with `min_n <= n <= max_n` from a token stream.
///
/// Unigrams come first, then bigrams and so on; tokens in an n-gram are
/// joined with a single space.
pub fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();
    let min_n = min_n.max(1);

    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        if n == 1 {
            grams.extend(tokens.iter().cloned());
            continue;
        }
        grams.extend(tokens.windows(n).map(|w| w.join(" ")));
    }

    grams
}

/// Pattern matching `needle` delimited by word boundaries.
///
/// Compile once per keyword and reuse it across answers.
pub fn word_pattern(needle: &str) -> Option<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(needle));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, needle, "keyword pattern rejected");
            None
        }
    }
}
