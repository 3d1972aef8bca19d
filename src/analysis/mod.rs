//! Text analysis: tokenization, case folding and stop-word removal.
//!
//! The index core consumes normalized tokens; this module is the thin
//! pipeline that produces them from raw text. Stop words are explicit
//! configuration threaded into the build step, not global state — the
//! default is the English list in [`stop`].

pub mod stop;
pub mod tokenizer;

use crate::error::Result;

pub use self::stop::StopFilter;
pub use self::tokenizer::{SimpleTokenizer, Tokenizer};

/// A single normalized token with its zero-based position.
///
/// Positions count surviving tokens after stop-word removal, which is
/// what the positional index stores and phrase offsets are measured in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercase, punctuation-free token text.
    pub text: String,
    /// Position in the filtered token stream.
    pub position: usize,
}

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Custom stop words; `None` selects the default English list.
    pub stop_words: Option<Vec<String>>,
    /// Skip stop-word removal entirely.
    pub keep_stop_words: bool,
}

/// The analysis pipeline: tokenizer followed by the stop filter.
#[derive(Debug)]
pub struct Analyzer {
    tokenizer: Box<dyn Tokenizer>,
    stop_filter: Option<StopFilter>,
}

impl Analyzer {
    /// Create the default pipeline: [`SimpleTokenizer`] plus the default
    /// English stop list.
    pub fn new() -> Self {
        Analyzer {
            tokenizer: Box::new(SimpleTokenizer::default()),
            stop_filter: Some(StopFilter::new()),
        }
    }

    /// Create a pipeline from explicit configuration.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let stop_filter = if config.keep_stop_words {
            None
        } else {
            Some(match &config.stop_words {
                Some(words) => StopFilter::from_words(words.iter().cloned()),
                None => StopFilter::new(),
            })
        };

        Analyzer {
            tokenizer: Box::new(SimpleTokenizer::default()),
            stop_filter,
        }
    }

    /// Create a pipeline around a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>, stop_filter: Option<StopFilter>) -> Self {
        Analyzer {
            tokenizer,
            stop_filter,
        }
    }

    /// Run the full pipeline over raw text.
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(match &self.stop_filter {
            Some(filter) => filter.filter(tokens),
            None => tokens,
        })
    }

    /// Like [`Analyzer::analyze`], returning the token texts only.
    pub fn analyze_texts(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .into_iter()
            .map(|token| token.text)
            .collect())
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
