//! Batch index construction from a normalized document stream.
//!
//! The builder consumes `(DocId, tokens)` pairs — tokens are already
//! lowercase and punctuation-free, produced by the analysis pipeline or an
//! external tokenizer — and yields an immutable [`Index`]. Construction is
//! batch only: the document count is fixed when [`IndexBuilder::finish`]
//! runs, and the finished index is never mutated.

use ahash::AHashSet;
use log::debug;

use crate::index::inverted::{Index, IndexKind, InvertedIndex, PositionalInvertedIndex};
use crate::index::posting::DocId;

/// Accumulates documents into an index of the chosen kind.
#[derive(Debug)]
pub struct IndexBuilder {
    inner: BuilderInner,
    doc_count: u64,
}

#[derive(Debug)]
enum BuilderInner {
    Boolean(InvertedIndex),
    Positional(PositionalInvertedIndex),
}

impl IndexBuilder {
    /// Create a builder for the given index kind.
    pub fn new(kind: IndexKind) -> Self {
        let inner = match kind {
            IndexKind::Boolean => BuilderInner::Boolean(InvertedIndex::new()),
            IndexKind::Positional => BuilderInner::Positional(PositionalInvertedIndex::new()),
        };
        IndexBuilder {
            inner,
            doc_count: 0,
        }
    }

    /// Add one document's token sequence.
    ///
    /// Document ids are assigned externally and must not repeat across
    /// calls. For a boolean index the token sequence is reduced to its
    /// unique token set before recording, which keeps posting lists
    /// strictly increasing; the positional index records every occurrence
    /// with its zero-based position.
    pub fn add_document<S: AsRef<str>>(&mut self, doc_id: DocId, tokens: &[S]) {
        match &mut self.inner {
            BuilderInner::Boolean(index) => {
                let mut seen = AHashSet::new();
                for token in tokens {
                    let token = token.as_ref();
                    if seen.insert(token) {
                        index.record(token, doc_id);
                    }
                }
            }
            BuilderInner::Positional(index) => {
                for (position, token) in tokens.iter().enumerate() {
                    index.record(token.as_ref(), doc_id, position as u32);
                }
            }
        }
        self.doc_count += 1;
    }

    /// Number of documents added so far.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Fix the document count and produce the immutable index.
    pub fn finish(self) -> Index {
        let doc_count = self.doc_count;
        let index = match self.inner {
            BuilderInner::Boolean(mut index) => {
                index.set_doc_count(doc_count);
                Index::Boolean(index)
            }
            BuilderInner::Positional(mut index) => {
                index.set_doc_count(doc_count);
                Index::Positional(index)
            }
        };
        debug!(
            "index built: {} documents, {} terms",
            doc_count,
            index.term_count()
        );
        index
    }
}
