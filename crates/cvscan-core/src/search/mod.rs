//! Two-stage search orchestration
//!
//! ```text
//! Idle -> ExactPhase -> Decision -> [FuzzyPhase] -> Ranking -> Done
//! ```
//!
//! - **ExactPhase**: load and case-fold every document, run the selected
//!   exact algorithm over it, keep documents with at least one hit
//! - **Decision**: run the fuzzy pass when some keyword never matched
//!   anywhere, or fewer documents matched than the requested top N
//! - **FuzzyPhase**: match every loaded document again, merging into the
//!   existing entry or creating a new one
//! - **Ranking**: stable sort by total count, truncate to top N
//!
//! Per-document work is independent. With the `parallel` feature, corpora at
//! or above `EngineConfig::parallel_threshold` documents are mapped on the
//! rayon pool; results come back in corpus order and are merged on the
//! calling thread, so no locking is involved.

mod config;

use std::time::Instant;

use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::corpus::{CorpusSource, Document, DocumentId};
use crate::error::Result;
use crate::exact::KeywordScanner;
use crate::fuzzy::FuzzyMatcher;
use crate::types::{ApplicantMatch, MatchMap, SearchRequest, SearchResult};

pub use config::EngineConfig;

/// Why the fuzzy pass does or does not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyDecision {
    /// Some keywords had zero exact occurrences across the corpus
    MissingKeywords(usize),
    /// Fewer matching documents than requested
    TooFewApplicants { found: usize, wanted: usize },
    Skip,
}

impl FuzzyDecision {
    /// Decide from per-keyword corpus totals and the matched document count.
    pub fn from_exact_phase(
        keyword_totals: &[usize],
        matched_documents: usize,
        top_matches: usize,
    ) -> Self {
        let missing = keyword_totals.iter().filter(|&&total| total == 0).count();
        if missing > 0 {
            FuzzyDecision::MissingKeywords(missing)
        } else if matched_documents < top_matches {
            FuzzyDecision::TooFewApplicants {
                found: matched_documents,
                wanted: top_matches,
            }
        } else {
            FuzzyDecision::Skip
        }
    }

    pub fn runs_fuzzy(&self) -> bool {
        !matches!(self, FuzzyDecision::Skip)
    }
}

/// Stateless search orchestrator; one instance can serve any number of
/// searches, concurrently if needed.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
    fuzzy: FuzzyMatcher,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            fuzzy: FuzzyMatcher::new(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let fuzzy = FuzzyMatcher::with_threshold(config.fuzzy_threshold)?;
        Ok(Self { config, fuzzy })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run `request` over every document of `corpus`.
    ///
    /// Request validation errors are returned before any document is read.
    /// Unreadable documents are skipped and counted, never fatal.
    pub fn search<C>(&self, corpus: &C, request: &SearchRequest) -> Result<SearchResult>
    where
        C: CorpusSource + ?Sized,
    {
        let keywords = request.normalized()?;
        debug!(
            algorithm = %request.algorithm,
            keywords = keywords.len(),
            top_matches = request.top_matches,
            "search started"
        );

        // Exact phase
        let exact_started = Instant::now();
        let scanner = KeywordScanner::new(request.algorithm, keywords.folded());

        let ids = corpus.document_ids();
        let documents: Vec<Document> = self
            .map_documents(&ids, |&id| load_document(corpus, id))
            .into_iter()
            .flatten()
            .collect();
        let documents_skipped = ids.len() - documents.len();

        let exact_counts = self.map_documents(&documents, |doc| {
            let text: Vec<char> = doc.text().chars().collect();
            scanner.count(&text)
        });

        let mut keyword_totals = vec![0usize; keywords.len()];
        let mut slots: Vec<Option<ApplicantMatch>> = Vec::with_capacity(documents.len());
        for (doc, counts) in documents.iter().zip(exact_counts) {
            let mut matched = MatchMap::new();
            let per_keyword = keywords.labels().iter().zip(&mut keyword_totals).zip(counts);
            for ((label, total), count) in per_keyword {
                if count > 0 {
                    *total += count;
                    matched.insert(label.clone(), count);
                }
            }
            slots.push((!matched.is_empty()).then(|| ApplicantMatch::from_exact(doc.id(), matched)));
        }

        let exact_runtime = exact_started.elapsed();
        let matched_documents = slots.iter().flatten().count();
        debug!(
            scanned = documents.len(),
            skipped = documents_skipped,
            matched = matched_documents,
            elapsed_ms = exact_runtime.as_secs_f64() * 1000.0,
            "exact phase complete"
        );

        // Decision
        let decision =
            FuzzyDecision::from_exact_phase(&keyword_totals, matched_documents, request.top_matches);
        debug!(?decision, "fuzzy decision");

        // Fuzzy phase
        let fuzzy_runtime = if decision.runs_fuzzy() {
            let fuzzy_started = Instant::now();
            let keyword_chars: Vec<Vec<char>> =
                keywords.folded().iter().map(|k| k.chars().collect()).collect();

            let fuzzy_maps = self.map_documents(&documents, |doc| {
                self.fuzzy.match_prepared(doc.text(), &keyword_chars)
            });

            for ((slot, doc), fuzzy) in slots.iter_mut().zip(&documents).zip(fuzzy_maps) {
                if fuzzy.is_empty() {
                    continue;
                }
                match slot {
                    Some(entry) => entry.attach_fuzzy(fuzzy),
                    None => *slot = Some(ApplicantMatch::from_fuzzy(doc.id(), fuzzy)),
                }
            }

            let elapsed = fuzzy_started.elapsed();
            debug!(elapsed_ms = elapsed.as_secs_f64() * 1000.0, "fuzzy phase complete");
            Some(elapsed)
        } else {
            None
        };

        // Ranking
        let mut applicants: Vec<ApplicantMatch> = slots
            .into_iter()
            .flatten()
            .filter(|entry| !entry.is_empty())
            .collect();
        applicants.sort_by(|a, b| b.match_count.cmp(&a.match_count));
        applicants.truncate(request.top_matches);

        Ok(SearchResult {
            applicants,
            cvs_scanned: documents.len(),
            documents_skipped,
            exact_runtime,
            fuzzy_runtime,
        })
    }

    /// Map over documents - parallel on large corpora
    #[cfg(feature = "parallel")]
    fn map_documents<I, O, F>(&self, items: &[I], f: F) -> Vec<O>
    where
        I: Sync,
        O: Send,
        F: Fn(&I) -> O + Sync + Send,
    {
        if items.len() >= self.config.parallel_threshold {
            items.par_iter().map(f).collect()
        } else {
            items.iter().map(f).collect()
        }
    }

    /// Sequential mapping when the parallel feature is disabled
    #[cfg(not(feature = "parallel"))]
    fn map_documents<I, O, F>(&self, items: &[I], f: F) -> Vec<O>
    where
        F: Fn(&I) -> O,
    {
        items.iter().map(f).collect()
    }
}

/// Load and fold one document; failures are logged and yield `None`.
fn load_document<C>(corpus: &C, id: DocumentId) -> Option<Document>
where
    C: CorpusSource + ?Sized,
{
    match corpus.load_text(id) {
        Ok(text) => Some(Document::new(id, text)),
        Err(err) => {
            warn!(document = id, error = %err, "skipping unreadable document");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MemoryCorpus;
    use crate::error::SearchError;
    use crate::exact::Algorithm;

    fn request(keywords: &[&str], algorithm: Algorithm, top: usize) -> SearchRequest {
        SearchRequest::new(keywords.iter().map(|k| k.to_string()).collect(), algorithm, top)
    }

    #[test]
    fn test_decision_missing_keyword() {
        assert_eq!(
            FuzzyDecision::from_exact_phase(&[3, 0, 1], 5, 2),
            FuzzyDecision::MissingKeywords(1)
        );
    }

    #[test]
    fn test_decision_too_few() {
        assert_eq!(
            FuzzyDecision::from_exact_phase(&[3, 1], 1, 2),
            FuzzyDecision::TooFewApplicants { found: 1, wanted: 2 }
        );
    }

    #[test]
    fn test_decision_skip() {
        let decision = FuzzyDecision::from_exact_phase(&[3, 1], 2, 2);
        assert_eq!(decision, FuzzyDecision::Skip);
        assert!(!decision.runs_fuzzy());
    }

    #[test]
    fn test_invalid_request_fails_before_scan() {
        let mut corpus = MemoryCorpus::new();
        corpus.insert_unreadable(1);

        let engine = SearchEngine::new();
        let err = engine.search(&corpus, &request(&["  "], Algorithm::Kmp, 3)).unwrap_err();
        assert_eq!(err, SearchError::EmptyKeywords);

        let err = engine.search(&corpus, &request(&["rust"], Algorithm::Kmp, 0)).unwrap_err();
        assert_eq!(err, SearchError::InvalidTopMatches(0));
    }

    #[test]
    fn test_invalid_config() {
        let config = EngineConfig {
            fuzzy_threshold: 120.0,
            ..Default::default()
        };
        assert!(matches!(
            SearchEngine::with_config(config),
            Err(SearchError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let corpus = MemoryCorpus::with_documents((0..40u64).map(|id| {
            let text = match id % 4 {
                0 => "Rust and Python engineer",
                1 => "pythn scripting, some rust",
                2 => "Kotlin, Java",
                _ => "rust rust rust",
            };
            (id, text)
        }));
        let req = request(&["rust", "python"], Algorithm::AhoCorasick, 40);

        let sequential = SearchEngine::with_config(EngineConfig {
            parallel_threshold: usize::MAX,
            ..Default::default()
        })
        .unwrap();
        let parallel = SearchEngine::with_config(EngineConfig {
            parallel_threshold: 1,
            ..Default::default()
        })
        .unwrap();

        let a = sequential.search(&corpus, &req).unwrap();
        let b = parallel.search(&corpus, &req).unwrap();
        assert_eq!(a.applicants, b.applicants);
        assert_eq!(a.cvs_scanned, 40);
    }
}
