//! A built index is immutable, so independent threads may query the same
//! engine concurrently without locking (the scorer's idf cache has its own
//! synchronization).

use std::thread;

use xiphos::prelude::*;

#[test]
fn test_concurrent_queries_agree_with_serial_results() -> Result<()> {
    let documents: Vec<(DocId, Vec<String>)> = (0..200)
        .map(|i| {
            let mut tokens = vec!["common".to_string()];
            if i % 2 == 0 {
                tokens.push("even".to_string());
            }
            if i % 3 == 0 {
                tokens.push("fizz".to_string());
            }
            (i as DocId, tokens)
        })
        .collect();

    let engine = SearchEngine::build_from_tokens(IndexKind::Positional, documents);

    let expected_boolean = engine.search_boolean("even AND fizz")?;
    let expected_ranked = engine.search("common even")?;

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..20 {
                    let boolean = engine.search_boolean("even AND fizz").unwrap();
                    assert_eq!(boolean, expected_boolean);

                    let ranked = engine.search("common even").unwrap();
                    assert_eq!(ranked, expected_ranked);
                }
            });
        }
    });

    Ok(())
}
