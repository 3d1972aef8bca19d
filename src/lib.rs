//! # Xiphos
//!
//! A small single-node text search engine: builds an inverted index over a
//! document collection and answers boolean, phrase and free-text queries
//! against it.
//!
//! ## Features
//!
//! - Sorted posting lists with binary-search insertion
//! - Two-pointer set algebra (AND / OR / NOT) for boolean queries
//! - Positional index and offset-anchored phrase matching
//! - Log-scaled TF-IDF cosine ranking for free-text queries
//! - Versioned, checksummed binary persistence
//!
//! ## Example
//!
//! ```
//! use xiphos::analysis::Analyzer;
//! use xiphos::engine::SearchEngine;
//! use xiphos::index::IndexKind;
//!
//! # fn main() -> xiphos::error::Result<()> {
//! let documents = vec![(1, "the cat sat"), (2, "a dog ran")];
//! let engine = SearchEngine::build(IndexKind::Positional, documents, Analyzer::new())?;
//!
//! let hits = engine.search("cat")?;
//! assert_eq!(hits.doc_ids(), vec![1]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod storage;
pub mod util;

/// Commonly used types, for glob import in applications and tests.
pub mod prelude {
    pub use crate::analysis::{Analyzer, AnalyzerConfig};
    pub use crate::engine::SearchEngine;
    pub use crate::error::{QueryErrorKind, Result, XiphosError};
    pub use crate::index::{DocId, Index, IndexBuilder, IndexKind};
    pub use crate::query::{QueryMode, QueryOutput, RankedHit};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
