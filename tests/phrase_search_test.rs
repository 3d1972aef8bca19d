//! Integration tests for phrase query evaluation.

use xiphos::analysis::Analyzer;
use xiphos::prelude::*;

#[test]
fn test_phrase_respects_term_order() -> Result<()> {
    let engine = SearchEngine::build_from_tokens(
        IndexKind::Positional,
        vec![(1, vec!["the", "cat", "sat"])],
    );

    // cat at position 1, sat at position 2: offset 1 satisfied.
    match engine.search("\"cat sat\"")? {
        QueryOutput::Docs(ids) => assert_eq!(ids, vec![1]),
        other => panic!("expected doc ids, got {other:?}"),
    }

    // Reversed order: no position p with p + 1 matching.
    assert!(engine.search("\"sat cat\"")?.is_empty());
    Ok(())
}

#[test]
fn test_phrase_longer_than_two_terms() -> Result<()> {
    let engine = SearchEngine::build(
        IndexKind::Positional,
        vec![
            (1, "stock market rises sharply"),
            (2, "market stock rises"),
            (3, "stock market crash and stock market rises"),
        ],
        Analyzer::new(),
    )?;

    match engine.search("\"stock market rises\"")? {
        QueryOutput::Docs(ids) => assert_eq!(ids, vec![1, 3]),
        other => panic!("expected doc ids, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_phrase_with_repeated_occurrences() -> Result<()> {
    let engine = SearchEngine::build_from_tokens(
        IndexKind::Positional,
        vec![(5, vec!["cat", "cat", "sat", "cat"])],
    );

    // Only the occurrence at position 1 is followed by "sat".
    match engine.search("\"cat sat\"")? {
        QueryOutput::Docs(ids) => assert_eq!(ids, vec![5]),
        other => panic!("expected doc ids, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_single_term_phrase_matches_all_containing_docs() -> Result<()> {
    let engine = SearchEngine::build_from_tokens(
        IndexKind::Positional,
        vec![(1, vec!["cat"]), (2, vec!["dog"]), (3, vec!["cat", "dog"])],
    );

    match engine.search("\"cat\"")? {
        QueryOutput::Docs(ids) => assert_eq!(ids, vec![1, 3]),
        other => panic!("expected doc ids, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_unbalanced_quote_is_malformed() {
    let engine =
        SearchEngine::build_from_tokens(IndexKind::Positional, vec![(1, vec!["cat", "sat"])]);

    match engine.search("\"cat sat") {
        Err(XiphosError::MalformedQuery(QueryErrorKind::UnbalancedPhrase)) => {}
        other => panic!("expected unbalanced-phrase error, got {other:?}"),
    }
}

#[test]
fn test_not_in_ranked_query_is_unsupported() {
    let engine =
        SearchEngine::build_from_tokens(IndexKind::Positional, vec![(1, vec!["cat", "sat"])]);

    match engine.search("cat NOT sat") {
        Err(XiphosError::UnsupportedOperation(_)) => {}
        other => panic!("expected unsupported-operation error, got {other:?}"),
    }
}

#[test]
fn test_phrase_across_documents_never_matches() -> Result<()> {
    let engine = SearchEngine::build_from_tokens(
        IndexKind::Positional,
        vec![(1, vec!["cat"]), (2, vec!["sat"])],
    );

    assert!(engine.search("\"cat sat\"")?.is_empty());
    Ok(())
}
