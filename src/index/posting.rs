//! Posting list types and sorted-insertion primitives.
//!
//! A posting list is the value side of the token → documents mapping. Two
//! shapes exist: [`PostingList`] holds bare document ids (boolean index) and
//! [`PositionalPostingList`] additionally tracks every in-document token
//! position (positional index, required for phrase matching and scoring).
//!
//! Both shapes keep their entries strictly increasing by document id after
//! every insertion; insertion locates the slot with a binary search.

/// Identifier of a source document. Assigned externally, never reused.
pub type DocId = u32;

/// Zero-based token position within a document.
pub type Position = u32;

/// A sorted, duplicate-free list of document ids for one token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    ids: Vec<DocId>,
}

impl PostingList {
    /// Create an empty posting list.
    pub fn new() -> Self {
        PostingList { ids: Vec::new() }
    }

    /// Insert a document id at its sorted location.
    ///
    /// Inserting an id that is already present is a no-op, so the list
    /// stays strictly increasing regardless of caller behavior.
    pub fn insert(&mut self, doc_id: DocId) {
        match self.ids.binary_search(&doc_id) {
            Ok(_) => {}
            Err(slot) => self.ids.insert(slot, doc_id),
        }
    }

    /// Whether the list contains the given document id.
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.ids.binary_search(&doc_id).is_ok()
    }

    /// The document ids, ascending.
    pub fn doc_ids(&self) -> &[DocId] {
        &self.ids
    }

    /// Number of documents in the list (the token's document frequency).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<DocId>> for PostingList {
    /// Build a posting list from ids that are already sorted and unique.
    fn from(ids: Vec<DocId>) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        PostingList { ids }
    }
}

impl FromIterator<DocId> for PostingList {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        let mut list = PostingList::new();
        for id in iter {
            list.insert(id);
        }
        list
    }
}

/// One document's entry in a positional posting list: the document id plus
/// the ordered positions at which the token occurs in that document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalPosting {
    /// The document this entry belongs to.
    pub doc_id: DocId,
    /// Strictly increasing, zero-based token positions.
    pub positions: Vec<Position>,
}

impl PositionalPosting {
    /// Create an entry with a single occurrence.
    pub fn new(doc_id: DocId, position: Position) -> Self {
        PositionalPosting {
            doc_id,
            positions: vec![position],
        }
    }

    /// The token's term frequency in this document.
    pub fn term_freq(&self) -> usize {
        self.positions.len()
    }
}

/// A list of [`PositionalPosting`] entries, strictly increasing by document
/// id, with at most one entry per document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalPostingList {
    entries: Vec<PositionalPosting>,
}

impl PositionalPostingList {
    /// Create an empty list.
    pub fn new() -> Self {
        PositionalPostingList {
            entries: Vec::new(),
        }
    }

    /// Register an occurrence of the token at `position` in `doc_id`.
    ///
    /// If the document already has an entry the position is appended to it
    /// (positions arrive in increasing order while one document is being
    /// indexed, so no re-sort is needed); otherwise a new entry is inserted
    /// at its sorted location.
    pub fn record(&mut self, doc_id: DocId, position: Position) {
        match self.entries.binary_search_by_key(&doc_id, |e| e.doc_id) {
            Ok(at) => {
                let positions = &mut self.entries[at].positions;
                debug_assert!(positions.last().map_or(true, |&p| p < position));
                positions.push(position);
            }
            Err(slot) => self
                .entries
                .insert(slot, PositionalPosting::new(doc_id, position)),
        }
    }

    /// Look up one document's entry.
    pub fn get(&self, doc_id: DocId) -> Option<&PositionalPosting> {
        self.entries
            .binary_search_by_key(&doc_id, |e| e.doc_id)
            .ok()
            .map(|at| &self.entries[at])
    }

    /// The entries, ascending by document id.
    pub fn entries(&self) -> &[PositionalPosting] {
        &self.entries
    }

    /// The document ids, ascending.
    pub fn doc_ids(&self) -> Vec<DocId> {
        self.entries.iter().map(|e| e.doc_id).collect()
    }

    /// Number of documents in the list (the token's document frequency).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<PositionalPosting>> for PositionalPostingList {
    /// Build a list from entries already sorted by document id.
    fn from(entries: Vec<PositionalPosting>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].doc_id < w[1].doc_id));
        PositionalPostingList { entries }
    }
}
