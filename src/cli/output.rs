//! Output formatting for CLI commands.

use serde::Serialize;

use crate::error::Result;
use crate::query::{QueryOutput, RankedHit};

/// Result structure for index builds.
#[derive(Debug, Serialize)]
pub struct IndexBuildResult {
    pub path: String,
    pub documents: u64,
    pub terms: usize,
    pub duration_ms: u64,
}

/// Result structure for search operations.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub total_hits: usize,
    pub doc_ids: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<RankedHit>>,
}

impl SearchResult {
    /// Shape a query output for printing, truncated to `limit` hits.
    pub fn from_output(output: QueryOutput, limit: Option<usize>) -> Self {
        match output {
            QueryOutput::Docs(mut doc_ids) => {
                if let Some(limit) = limit {
                    doc_ids.truncate(limit);
                }
                SearchResult {
                    total_hits: doc_ids.len(),
                    doc_ids,
                    hits: None,
                }
            }
            QueryOutput::Ranked(mut hits) => {
                if let Some(limit) = limit {
                    hits.truncate(limit);
                }
                SearchResult {
                    total_hits: hits.len(),
                    doc_ids: hits.iter().map(|h| h.doc_id).collect(),
                    hits: Some(hits),
                }
            }
        }
    }

    /// Print for humans or as JSON.
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }

        if self.total_hits == 0 {
            println!("no matches");
        } else if let Some(hits) = &self.hits {
            for hit in hits {
                println!("{}\t{:.3}", hit.doc_id, hit.score);
            }
        } else {
            let ids: Vec<String> = self.doc_ids.iter().map(|id| id.to_string()).collect();
            println!("{}", ids.join(" "));
        }
        Ok(())
    }
}
