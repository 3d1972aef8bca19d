//! Inverted index: posting lists, set algebra, and batch construction.

pub mod algebra;
pub mod builder;
pub mod inverted;
pub mod posting;

pub use self::algebra::{
    check_free_text, check_phrase, difference, intersect, intersect_positional, union,
    MergedPosting,
};
pub use self::builder::IndexBuilder;
pub use self::inverted::{Index, IndexKind, InvertedIndex, PositionalInvertedIndex};
pub use self::posting::{DocId, Position, PositionalPosting, PositionalPostingList, PostingList};
