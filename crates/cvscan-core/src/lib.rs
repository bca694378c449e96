//! cvscan Core Engine
//!
//! Keyword search over a corpus of CV texts. A search runs in two stages:
//! an exact pass using one of three substring algorithms, then (when the
//! exact pass leaves keywords unmatched or too few applicants) an
//! edit-distance fuzzy pass over every document token.
//!
//! # Features
//!
//! - `parallel` - Dispatch per-document work on the rayon pool (default)
//!
//! # Example
//!
//! ```rust
//! use cvscan_core::corpus::MemoryCorpus;
//! use cvscan_core::search::SearchEngine;
//! use cvscan_core::{Algorithm, SearchRequest};
//!
//! let mut corpus = MemoryCorpus::new();
//! corpus.insert(1, "Senior Python developer, Django and PostgreSQL");
//! corpus.insert(2, "Java engineer with some Pyhton scripting");
//!
//! let request = SearchRequest::new(vec!["python".into()], Algorithm::Kmp, 10);
//! let result = SearchEngine::new().search(&corpus, &request).unwrap();
//!
//! assert_eq!(result.applicants[0].id, 1);
//! assert!(result.fuzzy_runtime.is_some());
//! ```

pub mod corpus;
pub mod error;
pub mod exact;
pub mod fuzzy;
pub mod search;
pub mod sections;
pub mod types;

// Re-export main types at crate root
pub use corpus::{
    ApplicantProfile, CorpusSource, Document, DocumentId, MemoryCorpus, MemoryProfiles,
    ProfileLookup,
};
pub use error::{DocumentReadError, Result, SearchError};
pub use exact::{AhoCorasick, Algorithm};
pub use fuzzy::{levenshtein_distance, similarity, FuzzyMatcher, DEFAULT_FUZZY_THRESHOLD};
pub use search::{EngineConfig, FuzzyDecision, SearchEngine};
pub use sections::{CvSections, SectionExtractor};
pub use types::{
    ApplicantMatch, ApplicantSummary, Keywords, MatchMap, SearchRequest, SearchResponse,
    SearchResult,
};
