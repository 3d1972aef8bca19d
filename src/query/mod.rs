//! Query representation and evaluation.

pub mod evaluator;
pub mod parser;
pub mod scorer;

use serde::{Deserialize, Serialize};

use crate::index::DocId;

pub use self::evaluator::evaluate;
pub use self::parser::{parse_query, ParsedQuery};
pub use self::scorer::TfIdfScorer;

/// A boolean query operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Set intersection.
    And,
    /// Set union.
    Or,
    /// Asymmetric set difference (left minus right).
    Not,
}

impl Operator {
    /// The operator's surface form in query text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

/// One token of a parsed query: either a term or an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    /// A case-folded search term.
    Operand(String),
    /// One of AND / OR / NOT.
    Operator(Operator),
}

/// How a query is evaluated.
///
/// Boolean mode is chosen by the caller; within ranked evaluation the
/// phrase / free-text distinction is fixed up front from the quote
/// markers and applies to every combination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Set algebra over document-id lists, result unranked.
    Boolean,
    /// Terms must occur contiguously and in order; result unranked.
    Phrase,
    /// Documents containing every term, ranked by TF-IDF cosine.
    FreeText,
}

/// A document matched by a ranked query, with its cosine similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHit {
    /// The matched document.
    pub doc_id: DocId,
    /// Cosine similarity against the query vector.
    pub score: f32,
}

/// The outcome of evaluating a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryOutput {
    /// Sorted document ids (boolean and phrase queries).
    Docs(Vec<DocId>),
    /// Hits ordered by descending similarity (free-text queries).
    Ranked(Vec<RankedHit>),
}

impl QueryOutput {
    /// The matched document ids in output order.
    pub fn doc_ids(&self) -> Vec<DocId> {
        match self {
            QueryOutput::Docs(ids) => ids.clone(),
            QueryOutput::Ranked(hits) => hits.iter().map(|h| h.doc_id).collect(),
        }
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryOutput::Docs(ids) => ids.is_empty(),
            QueryOutput::Ranked(hits) => hits.is_empty(),
        }
    }
}
