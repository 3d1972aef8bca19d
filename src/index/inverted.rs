//! The token → postings mapping in its two variants.
//!
//! Exactly two posting shapes exist, so the variants are a tagged enum
//! rather than trait objects: [`Index::Boolean`] wraps an [`InvertedIndex`]
//! of bare document-id lists, [`Index::Positional`] wraps a
//! [`PositionalInvertedIndex`] that also tracks in-document positions.
//!
//! An index is write-once: it is populated by the builder, carries the
//! total document count fixed at build time, and is read-only from the
//! query evaluator's perspective. Lookups for absent tokens return empty
//! postings, never an error.

use ahash::AHashMap;

use crate::index::posting::{DocId, PositionalPostingList, Position, PostingList};

/// Which posting shape an index stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Document ids only; supports boolean queries.
    Boolean,
    /// Document ids with positions; supports phrase and ranked queries.
    Positional,
}

/// A boolean inverted index: token → sorted document-id list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    postings: AHashMap<String, PostingList>,
    doc_count: u64,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Register that `token` occurs in `doc_id`.
    ///
    /// Callers must make a document contribute each token at most once
    /// (the builder de-duplicates a document's token set before
    /// recording); the list itself also ignores duplicate ids.
    pub fn record(&mut self, token: &str, doc_id: DocId) {
        self.postings
            .entry(token.to_string())
            .or_default()
            .insert(doc_id);
    }

    /// The posting list for a token, or `None` if the token is absent.
    pub fn get(&self, token: &str) -> Option<&PostingList> {
        self.postings.get(token)
    }

    /// The document ids for a token, empty if the token is absent.
    pub fn lookup(&self, token: &str) -> Vec<DocId> {
        self.postings
            .get(token)
            .map(|list| list.doc_ids().to_vec())
            .unwrap_or_default()
    }

    /// Number of unique tokens.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterate over all (token, posting list) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.postings.iter().map(|(t, l)| (t.as_str(), l))
    }

    pub(crate) fn set_doc_count(&mut self, doc_count: u64) {
        self.doc_count = doc_count;
    }
}

/// A positional inverted index: token → per-document position lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionalInvertedIndex {
    postings: AHashMap<String, PositionalPostingList>,
    doc_count: u64,
}

impl PositionalInvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        PositionalInvertedIndex::default()
    }

    /// Register that `token` occurs in `doc_id` at `position`.
    pub fn record(&mut self, token: &str, doc_id: DocId, position: Position) {
        self.postings
            .entry(token.to_string())
            .or_default()
            .record(doc_id, position);
    }

    /// The positional posting list for a token, or `None` if absent.
    pub fn get(&self, token: &str) -> Option<&PositionalPostingList> {
        self.postings.get(token)
    }

    /// The positional posting list for a token, empty if absent.
    pub fn lookup(&self, token: &str) -> PositionalPostingList {
        self.postings.get(token).cloned().unwrap_or_default()
    }

    /// The token's document frequency (length of its posting list).
    pub fn doc_freq(&self, token: &str) -> usize {
        self.postings.get(token).map_or(0, |list| list.len())
    }

    /// The token's term frequency within one document.
    pub fn term_freq(&self, token: &str, doc_id: DocId) -> usize {
        self.postings
            .get(token)
            .and_then(|list| list.get(doc_id))
            .map_or(0, |entry| entry.term_freq())
    }

    /// Number of unique tokens.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterate over all (token, posting list) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PositionalPostingList)> {
        self.postings.iter().map(|(t, l)| (t.as_str(), l))
    }

    pub(crate) fn set_doc_count(&mut self, doc_count: u64) {
        self.doc_count = doc_count;
    }
}

/// An immutable, queryable index in one of its two variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Index {
    /// Boolean index (document ids only).
    Boolean(InvertedIndex),
    /// Positional index (document ids with positions).
    Positional(PositionalInvertedIndex),
}

impl Index {
    /// Which posting shape this index stores.
    pub fn kind(&self) -> IndexKind {
        match self {
            Index::Boolean(_) => IndexKind::Boolean,
            Index::Positional(_) => IndexKind::Positional,
        }
    }

    /// Total number of documents in the corpus, fixed at build time.
    pub fn doc_count(&self) -> u64 {
        match self {
            Index::Boolean(index) => index.doc_count,
            Index::Positional(index) => index.doc_count,
        }
    }

    /// Number of unique tokens.
    pub fn term_count(&self) -> usize {
        match self {
            Index::Boolean(index) => index.term_count(),
            Index::Positional(index) => index.term_count(),
        }
    }

    /// The document ids for a token, empty if the token is absent.
    ///
    /// Works for both variants; the positional variant projects its
    /// entries down to bare ids. This is the lookup boolean evaluation
    /// uses, so boolean queries run against either index shape.
    pub fn lookup_docs(&self, token: &str) -> Vec<DocId> {
        match self {
            Index::Boolean(index) => index.lookup(token),
            Index::Positional(index) => index.lookup(token).doc_ids(),
        }
    }

    /// The positional postings for a token, if this is a positional index.
    pub fn as_positional(&self) -> Option<&PositionalInvertedIndex> {
        match self {
            Index::Positional(index) => Some(index),
            Index::Boolean(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_record_and_lookup() {
        let mut index = InvertedIndex::new();
        index.record("cat", 3);
        index.record("cat", 1);
        index.record("dog", 2);

        assert_eq!(index.lookup("cat"), vec![1, 3]);
        assert_eq!(index.lookup("dog"), vec![2]);
        assert_eq!(index.term_count(), 2);
    }

    #[test]
    fn test_lookup_absent_token_is_empty_not_error() {
        let index = InvertedIndex::new();
        assert!(index.lookup("missing").is_empty());

        let positional = PositionalInvertedIndex::new();
        assert!(positional.lookup("missing").is_empty());
    }

    #[test]
    fn test_positional_record_and_frequencies() {
        let mut index = PositionalInvertedIndex::new();
        index.record("stock", 1, 0);
        index.record("stock", 1, 4);
        index.record("stock", 2, 2);

        assert_eq!(index.doc_freq("stock"), 2);
        assert_eq!(index.term_freq("stock", 1), 2);
        assert_eq!(index.term_freq("stock", 2), 1);
        assert_eq!(index.term_freq("stock", 9), 0);
        assert_eq!(index.doc_freq("absent"), 0);
    }

    #[test]
    fn test_index_enum_dispatch() {
        let mut positional = PositionalInvertedIndex::new();
        positional.record("cat", 5, 1);
        positional.set_doc_count(10);
        let index = Index::Positional(positional);

        assert_eq!(index.kind(), IndexKind::Positional);
        assert_eq!(index.doc_count(), 10);
        assert_eq!(index.lookup_docs("cat"), vec![5]);
        assert!(index.as_positional().is_some());
    }
}
