//! High-level search engine facade.
//!
//! Ties the pieces together: the analysis pipeline feeds the index
//! builder, the finished index serves queries through the evaluator, and
//! the codec persists it. The index is immutable once built, so a
//! [`SearchEngine`] can be shared across threads and queried concurrently;
//! the scorer's idf cache is created together with the index and therefore
//! never holds stale entries.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::analysis::Analyzer;
use crate::error::Result;
use crate::index::{DocId, Index, IndexBuilder, IndexKind};
use crate::query::{evaluate, parse_query, QueryMode, QueryOutput, TfIdfScorer};
use crate::storage;

/// An immutable index plus everything needed to query it.
#[derive(Debug)]
pub struct SearchEngine {
    index: Index,
    analyzer: Analyzer,
    scorer: TfIdfScorer,
}

impl SearchEngine {
    /// Wrap an already-built index, with the default analyzer for queries.
    pub fn from_index(index: Index) -> Self {
        SearchEngine {
            index,
            analyzer: Analyzer::new(),
            scorer: TfIdfScorer::new(),
        }
    }

    /// Build an index of the given kind from `(doc_id, raw text)` pairs.
    ///
    /// Texts run through `analyzer`; document ids come from the caller and
    /// must be unique.
    pub fn build<I, S>(kind: IndexKind, documents: I, analyzer: Analyzer) -> Result<Self>
    where
        I: IntoIterator<Item = (DocId, S)>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut builder = IndexBuilder::new(kind);

        for (doc_id, text) in documents {
            let tokens = analyzer.analyze_texts(text.as_ref())?;
            builder.add_document(doc_id, &tokens);
        }

        let index = builder.finish();
        info!(
            "built {:?} index: {} documents, {} terms in {:.3}s",
            kind,
            index.doc_count(),
            index.term_count(),
            start.elapsed().as_secs_f64()
        );

        Ok(SearchEngine {
            index,
            analyzer,
            scorer: TfIdfScorer::new(),
        })
    }

    /// Build from pre-normalized token streams, bypassing analysis.
    pub fn build_from_tokens<I, S>(kind: IndexKind, documents: I) -> Self
    where
        I: IntoIterator<Item = (DocId, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new(kind);
        for (doc_id, tokens) in documents {
            builder.add_document(doc_id, &tokens);
        }
        SearchEngine::from_index(builder.finish())
    }

    /// The underlying index.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Evaluate a ranked query: quoted input is a phrase query, anything
    /// else is free text ranked by TF-IDF cosine.
    pub fn search(&self, raw: &str) -> Result<QueryOutput> {
        let parsed = parse_query(raw)?;
        let mode = if parsed.phrase {
            QueryMode::Phrase
        } else {
            QueryMode::FreeText
        };
        evaluate(&self.index, &parsed.tokens, mode, &self.scorer)
    }

    /// Evaluate a boolean query (AND / OR / NOT set algebra).
    pub fn search_boolean(&self, raw: &str) -> Result<Vec<DocId>> {
        let parsed = parse_query(raw)?;
        match evaluate(&self.index, &parsed.tokens, QueryMode::Boolean, &self.scorer)? {
            QueryOutput::Docs(ids) => Ok(ids),
            QueryOutput::Ranked(_) => unreachable!("boolean evaluation returns doc ids"),
        }
    }

    /// Persist the index to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        storage::save_index(path, &self.index)
    }

    /// Load a persisted index, or `None` when no file exists.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        Ok(storage::load_index(path)?.map(SearchEngine::from_index))
    }

    /// Load a persisted index, rebuilding (and saving) from `documents`
    /// when the file is absent.
    pub fn load_or_build<P, I, S>(
        path: P,
        kind: IndexKind,
        documents: I,
        analyzer: Analyzer,
    ) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = (DocId, S)>,
        S: AsRef<str>,
    {
        if let Some(engine) = SearchEngine::load(&path)? {
            return Ok(engine);
        }

        info!("rebuilding index at {}", path.as_ref().display());
        let engine = SearchEngine::build(kind, documents, analyzer)?;
        engine.save(&path)?;
        Ok(engine)
    }
}
