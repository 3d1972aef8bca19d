//! Stop-word removal.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::analysis::Token;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static DEFAULT_STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_ENGLISH_STOP_WORDS.iter().copied().collect());

/// Removes stop words from a token stream.
///
/// Positions are reassigned after removal, so phrase offsets count the
/// surviving tokens only; the same filter must therefore run at build
/// time and (implicitly, by folding queries the same way) at query time.
#[derive(Debug, Clone)]
pub struct StopFilter {
    words: HashSet<String>,
}

impl StopFilter {
    /// Create a filter with the default English stop words.
    pub fn new() -> Self {
        StopFilter {
            words: DEFAULT_STOP_SET.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Create a filter with a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a token text is a stop word.
    pub fn is_stop(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Drop stop words and re-enumerate positions.
    pub fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.is_stop(&token.text))
            .enumerate()
            .map(|(position, token)| Token {
                text: token.text,
                position,
            })
            .collect()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(texts: &[&str]) -> Vec<Token> {
        texts
            .iter()
            .enumerate()
            .map(|(position, text)| Token {
                text: text.to_string(),
                position,
            })
            .collect()
    }

    #[test]
    fn test_default_filter_removes_stop_words() {
        let filter = StopFilter::new();
        let result = filter.filter(tokens(&["the", "quick", "brown"]));

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "quick");
        assert_eq!(result[1].text, "brown");
    }

    #[test]
    fn test_positions_are_reassigned() {
        let filter = StopFilter::new();
        let result = filter.filter(tokens(&["the", "cat", "sat"]));

        assert_eq!(result[0].position, 0); // cat
        assert_eq!(result[1].position, 1); // sat
    }

    #[test]
    fn test_custom_word_list() {
        let filter = StopFilter::from_words(["cat"]);
        let result = filter.filter(tokens(&["the", "cat", "sat"]));

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "sat"]);
    }
}
