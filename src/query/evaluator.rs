//! Left-to-right stack-machine query evaluation.
//!
//! The evaluator is a single pass over the token stream, not a precedence
//! parser: operands accumulate in a bag, and the pending operator fires as
//! soon as two operands are available, combining them first-pushed-first
//! (the earlier operand is the left side). Boolean mode drives the set
//! algebra over document-id lists; ranked mode drives the positional
//! intersection plus the consistency check fixed by the query type.

use std::collections::VecDeque;

use crate::error::{QueryErrorKind, Result, XiphosError};
use crate::index::algebra::{
    check_free_text, check_phrase, difference, intersect, intersect_positional, union,
};
use crate::index::posting::{DocId, PositionalPostingList};
use crate::index::Index;
use crate::query::scorer::TfIdfScorer;
use crate::query::{Operator, QueryMode, QueryOutput, QueryToken};

/// Evaluate a query against an index.
///
/// Boolean mode works on either index variant (a positional index projects
/// its entries to document ids). Ranked modes require a positional index;
/// free-text results are ranked through `scorer`, whose idf cache persists
/// across queries against the same index.
pub fn evaluate(
    index: &Index,
    tokens: &[QueryToken],
    mode: QueryMode,
    scorer: &TfIdfScorer,
) -> Result<QueryOutput> {
    match mode {
        QueryMode::Boolean => Ok(QueryOutput::Docs(evaluate_boolean(index, tokens)?)),
        QueryMode::Phrase | QueryMode::FreeText => evaluate_ranked(index, tokens, mode, scorer),
    }
}

/// Boolean evaluation: AND / OR / NOT over sorted document-id lists.
fn evaluate_boolean(index: &Index, tokens: &[QueryToken]) -> Result<Vec<DocId>> {
    let mut bag: VecDeque<Vec<DocId>> = VecDeque::new();
    let mut pending: Option<Operator> = None;

    for token in tokens {
        match token {
            QueryToken::Operator(op) => {
                if bag.is_empty() {
                    return Err(XiphosError::malformed(QueryErrorKind::MissingOperand));
                }
                // No precedence: a later operator overwrites an unfired one.
                pending = Some(*op);
            }
            QueryToken::Operand(term) => {
                bag.push_back(index.lookup_docs(term));

                if bag.len() >= 2 {
                    match pending.take() {
                        Some(op) => {
                            // First-pushed operand is the left side.
                            let left = bag.pop_front().expect("bag has two entries");
                            let right = bag.pop_front().expect("bag has two entries");
                            bag.push_back(apply_operator(op, &left, &right));
                        }
                        None if bag.len() >= 3 => {
                            return Err(XiphosError::malformed(QueryErrorKind::MissingOperator));
                        }
                        None => {}
                    }
                }
            }
        }
    }

    match bag.len() {
        0 => Ok(Vec::new()),
        1 => Ok(bag.pop_front().expect("bag has one entry")),
        _ => Err(XiphosError::malformed(QueryErrorKind::DanglingOperand)),
    }
}

fn apply_operator(op: Operator, left: &[DocId], right: &[DocId]) -> Vec<DocId> {
    match op {
        Operator::And => intersect(left, right),
        Operator::Or => union(left, right),
        Operator::Not => difference(left, right),
    }
}

/// Ranked evaluation: successive terms are AND-combined through the
/// positional intersection, then filtered by the phrase or free-text
/// consistency check. Phrase anchors stay at the first term's position, so
/// the offset for the term at index `i` is `i`.
fn evaluate_ranked(
    index: &Index,
    tokens: &[QueryToken],
    mode: QueryMode,
    scorer: &TfIdfScorer,
) -> Result<QueryOutput> {
    let positional = index.as_positional().ok_or_else(|| {
        XiphosError::index("ranked queries require a positional index")
    })?;

    let mut running: Option<PositionalPostingList> = None;
    let mut terms: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            // Terms are combined with an implicit AND; an explicit AND is
            // accepted as a no-op. OR and NOT have no defined meaning over
            // positional matches.
            QueryToken::Operator(Operator::And) => {
                if running.is_none() {
                    return Err(XiphosError::malformed(QueryErrorKind::MissingOperand));
                }
            }
            QueryToken::Operator(op) => {
                return Err(XiphosError::unsupported(format!(
                    "{} over positional matches",
                    op.as_str()
                )));
            }
            QueryToken::Operand(term) => {
                let next = positional.lookup(term);
                running = Some(match running {
                    None => next,
                    Some(current) => {
                        let merged = intersect_positional(&current, &next);
                        match mode {
                            QueryMode::Phrase => check_phrase(merged, terms.len() as u32),
                            _ => check_free_text(merged),
                        }
                    }
                });
                terms.push(term.clone());
            }
        }
    }

    let candidates = running.map(|list| list.doc_ids()).unwrap_or_default();

    match mode {
        QueryMode::Phrase => Ok(QueryOutput::Docs(candidates)),
        _ => Ok(QueryOutput::Ranked(scorer.rank(
            positional,
            index.doc_count(),
            &terms,
            &candidates,
        ))),
    }
}
