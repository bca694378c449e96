//! Search error types

use thiserror::Error;

use crate::corpus::DocumentId;

/// Errors that abort a search before any document is scanned
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// No usable keyword remained after trimming
    #[error("keyword list is empty")]
    EmptyKeywords,

    /// Result limit below one
    #[error("top_matches must be at least 1, got {0}")]
    InvalidTopMatches(usize),

    /// Algorithm selector not recognised
    #[error("unknown search algorithm: '{0}' (expected KMP, BM or AHO_CORASICK)")]
    UnknownAlgorithm(String),

    /// Fuzzy similarity threshold outside (0, 100]
    #[error("fuzzy threshold must be in (0, 100], got {0}")]
    InvalidThreshold(f64),
}

/// A single document's text could not be obtained.
///
/// Corpus sources return this per document; the search engine logs it and
/// skips the document without failing the search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document {id} unreadable: {reason}")]
pub struct DocumentReadError {
    pub id: DocumentId,
    pub reason: String,
}

impl DocumentReadError {
    pub fn new(id: DocumentId, reason: impl Into<String>) -> Self {
        Self {
            id,
            reason: reason.into(),
        }
    }
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
