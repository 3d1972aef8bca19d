//! Raw query text → query tokens.
//!
//! Queries are whitespace-delimited. The uppercase words `AND`, `OR` and
//! `NOT` are operators; everything else is a term, case-folded before
//! lookup. A query wrapped in double quotes is a phrase query; the quote
//! pair must be balanced.

use crate::error::{QueryErrorKind, Result, XiphosError};
use crate::query::{Operator, QueryToken};

/// A query split into tokens, with the phrase marker already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// The operand / operator sequence, in query order.
    pub tokens: Vec<QueryToken>,
    /// Whether the raw query was wrapped in quotation marks.
    pub phrase: bool,
}

impl ParsedQuery {
    /// The operand terms in query order, including repeats.
    pub fn terms(&self) -> Vec<String> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                QueryToken::Operand(term) => Some(term.clone()),
                QueryToken::Operator(_) => None,
            })
            .collect()
    }
}

/// Parse raw query text.
///
/// An empty query parses to an empty token list, which evaluates to an
/// empty result without error. Inside a quoted phrase every word is a
/// term; operators are only recognized outside quotes.
pub fn parse_query(raw: &str) -> Result<ParsedQuery> {
    let trimmed = raw.trim();

    let starts = trimmed.starts_with('"');
    let ends = trimmed.ends_with('"') && trimmed.len() > 1;
    let phrase = starts && ends;
    if starts != ends {
        return Err(XiphosError::malformed(QueryErrorKind::UnbalancedPhrase));
    }

    let body = if phrase {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    // A stray quote in the middle of an unquoted query is also unbalanced.
    if body.contains('"') {
        return Err(XiphosError::malformed(QueryErrorKind::UnbalancedPhrase));
    }

    let tokens = body
        .split_whitespace()
        .map(|word| match word {
            "AND" if !phrase => QueryToken::Operator(Operator::And),
            "OR" if !phrase => QueryToken::Operator(Operator::Or),
            "NOT" if !phrase => QueryToken::Operator(Operator::Not),
            term => QueryToken::Operand(term.to_lowercase()),
        })
        .collect();

    Ok(ParsedQuery { tokens, phrase })
}
