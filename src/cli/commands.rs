//! Command implementations for the Xiphos CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use crate::analysis::{Analyzer, AnalyzerConfig};
use crate::cli::args::{Command, IndexArgs, ReplArgs, SearchArgs, XiphosArgs};
use crate::cli::output::{IndexBuildResult, SearchResult};
use crate::engine::SearchEngine;
use crate::error::{Result, XiphosError};
use crate::index::{DocId, IndexKind};

/// Execute a CLI command.
pub fn execute_command(args: XiphosArgs) -> Result<()> {
    match &args.command {
        Command::Index(index_args) => build_index(index_args.clone(), &args),
        Command::Search(search_args) => search_index(search_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
    }
}

/// Build an index from a documents file and persist it.
fn build_index(args: IndexArgs, cli_args: &XiphosArgs) -> Result<()> {
    let documents = read_documents(&args.docs)?;
    let kind = if args.boolean {
        IndexKind::Boolean
    } else {
        IndexKind::Positional
    };
    let analyzer = Analyzer::from_config(&AnalyzerConfig {
        stop_words: None,
        keep_stop_words: args.keep_stop_words,
    });

    let start = Instant::now();
    let engine = SearchEngine::build(kind, documents, analyzer)?;
    engine.save(&args.index_path)?;

    let result = IndexBuildResult {
        path: args.index_path.display().to_string(),
        documents: engine.index().doc_count(),
        terms: engine.index().term_count(),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if cli_args.verbosity() > 0 {
        println!(
            "indexed {} documents ({} terms) into {} in {}ms",
            result.documents, result.terms, result.path, result.duration_ms
        );
    }
    Ok(())
}

/// Run one query against a persisted index.
fn search_index(args: SearchArgs, cli_args: &XiphosArgs) -> Result<()> {
    let engine = open_engine(&args.index_path)?;
    let output = run_query(&engine, &args.query, args.boolean)?;
    SearchResult::from_output(output, args.limit).print(cli_args.json)
}

/// Interactive query loop; 'q' exits. Query errors are reported and the
/// loop continues.
fn run_repl(args: ReplArgs, cli_args: &XiphosArgs) -> Result<()> {
    let engine = open_engine(&args.index_path)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "query ('q' for exit)> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let query = line.trim();
        if query == "q" {
            break;
        }

        match run_query(&engine, query, args.boolean) {
            Ok(output) => SearchResult::from_output(output, None).print(cli_args.json)?,
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}

fn run_query(
    engine: &SearchEngine,
    query: &str,
    boolean: bool,
) -> Result<crate::query::QueryOutput> {
    if boolean {
        Ok(crate::query::QueryOutput::Docs(
            engine.search_boolean(query)?,
        ))
    } else {
        engine.search(query)
    }
}

fn open_engine(path: &std::path::Path) -> Result<SearchEngine> {
    SearchEngine::load(path)?.ok_or_else(|| {
        XiphosError::storage(format!(
            "no index at {} (build one with `xiphos index`)",
            path.display()
        ))
    })
}

/// Read the documents file: one document per line. A leading
/// `id<TAB>` assigns the document id; otherwise the 1-based line
/// number is used.
fn read_documents(path: &std::path::Path) -> Result<Vec<(DocId, String)>> {
    let file = File::open(path)?;
    let mut documents = Vec::new();

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parsed = line
            .split_once('\t')
            .and_then(|(id, text)| id.parse::<DocId>().ok().map(|id| (id, text.to_string())));

        documents.push(match parsed {
            Some(pair) => pair,
            None => ((line_no + 1) as DocId, line),
        });
    }

    Ok(documents)
}
