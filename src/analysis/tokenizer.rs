//! Tokenizer implementations.

use regex::Regex;

use crate::analysis::Token;
use crate::error::{Result, XiphosError};

/// Trait for tokenizers that convert raw text into tokens.
pub trait Tokenizer: Send + Sync + std::fmt::Debug {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The default tokenizer: extracts `\w+` runs and case-folds them.
///
/// Punctuation never matches the pattern, so it is stripped as a side
/// effect; positions are assigned by enumeration over the matches.
#[derive(Debug, Clone)]
pub struct SimpleTokenizer {
    pattern: Regex,
}

impl SimpleTokenizer {
    /// Create a tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| XiphosError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(SimpleTokenizer { pattern: regex })
    }
}

impl Default for SimpleTokenizer {
    fn default() -> Self {
        Self::new().expect("default pattern is valid")
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token {
                text: mat.as_str().to_lowercase(),
                position,
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation_and_folds_case() {
        let tokenizer = SimpleTokenizer::default();
        let tokens = tokenizer.tokenize("The cat, Sat!").unwrap();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "cat", "sat"]);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_tokenize_empty_text() {
        let tokenizer = SimpleTokenizer::default();
        assert!(tokenizer.tokenize("  ...  ").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_analysis_error() {
        match SimpleTokenizer::with_pattern("(unclosed") {
            Err(XiphosError::Analysis(_)) => {}
            other => panic!("expected analysis error, got {other:?}"),
        }
    }
}
