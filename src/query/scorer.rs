//! TF-IDF cosine scoring for free-text queries.
//!
//! Weights follow the classic log-scaled scheme: a term occurring `freq`
//! times weighs `1 + ln(freq)` (0 when absent, so `ln(0)` is never
//! evaluated), scaled by `idf = ln(N / df)`. The query and every candidate
//! document are projected onto one dimension per query term occurrence and
//! compared by cosine similarity.

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::index::posting::DocId;
use crate::index::PositionalInvertedIndex;
use crate::query::RankedHit;

/// Log-scaled term frequency weight. Absence weighs 0.
pub fn tf_weight(freq: usize) -> f64 {
    if freq == 0 {
        0.0
    } else {
        1.0 + (freq as f64).ln()
    }
}

/// Inverse document frequency: `ln(N / df)`, 0 when `df` or `N` is 0.
///
/// A zero-df term cannot appear in any candidate document, so 0 is the
/// correct degenerate weight rather than an error.
pub fn idf_weight(doc_count: u64, doc_freq: usize) -> f64 {
    if doc_freq == 0 || doc_count == 0 {
        0.0
    } else {
        (doc_count as f64 / doc_freq as f64).ln()
    }
}

/// Ranks candidate documents by cosine similarity to the query.
///
/// The idf of each term is memoized for the scorer's lifetime, which is
/// tied to one index: the engine creates a fresh scorer whenever the index
/// is rebuilt or reloaded. The cache sits behind a lock so one scorer can
/// serve concurrent query threads over the shared read-only index.
#[derive(Debug, Default)]
pub struct TfIdfScorer {
    idf_cache: RwLock<AHashMap<String, f64>>,
}

impl TfIdfScorer {
    /// Create a scorer with an empty idf cache.
    pub fn new() -> Self {
        TfIdfScorer::default()
    }

    /// The memoized idf of a token.
    fn idf(&self, index: &PositionalInvertedIndex, doc_count: u64, token: &str) -> f64 {
        if let Some(&cached) = self.idf_cache.read().get(token) {
            return cached;
        }
        let idf = idf_weight(doc_count, index.doc_freq(token));
        self.idf_cache.write().insert(token.to_string(), idf);
        idf
    }

    /// Rank `candidates` against the query terms, best first.
    ///
    /// `query_terms` is the operand sequence in query order including
    /// repeats: the vectors get one dimension per occurrence, and a
    /// repeated term weighs accordingly on both sides. Ties in similarity
    /// break by ascending document id, making the ranking deterministic.
    pub fn rank(
        &self,
        index: &PositionalInvertedIndex,
        doc_count: u64,
        query_terms: &[String],
        candidates: &[DocId],
    ) -> Vec<RankedHit> {
        let mut query_tf: AHashMap<&str, usize> = AHashMap::new();
        for term in query_terms {
            *query_tf.entry(term.as_str()).or_insert(0) += 1;
        }

        let query_vector: Vec<f64> = query_terms
            .iter()
            .map(|term| {
                tf_weight(query_tf[term.as_str()]) * self.idf(index, doc_count, term)
            })
            .collect();

        let mut hits: Vec<RankedHit> = candidates
            .iter()
            .map(|&doc_id| {
                let doc_vector: Vec<f64> = query_terms
                    .iter()
                    .map(|term| {
                        tf_weight(index.term_freq(term, doc_id))
                            * self.idf(index, doc_count, term)
                    })
                    .collect();

                RankedHit {
                    doc_id,
                    score: cosine(&query_vector, &doc_vector) as f32,
                }
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        hits
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Normalized dot product. A zero-length vector on either side (every
/// coordinate weighed 0, e.g. all-zero idf) yields similarity 0 rather
/// than dividing by zero.
fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot(a, b) / (norm_a * norm_b)
    }
}
