//! In-memory corpus and profile backends
//!
//! Simple map-based implementations for tests, demos and callers that already
//! hold every CV text in memory.

use std::collections::HashMap;

use crate::error::DocumentReadError;

use super::traits::{CorpusSource, ProfileLookup};
use super::{ApplicantProfile, DocumentId};

/// In-memory corpus preserving insertion order.
///
/// A document may be registered as unreadable to exercise the skip path.
#[derive(Debug, Default, Clone)]
pub struct MemoryCorpus {
    order: Vec<DocumentId>,
    texts: HashMap<DocumentId, Option<String>>,
}

impl MemoryCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corpus from `(id, text)` pairs.
    pub fn with_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = (DocumentId, S)>,
        S: Into<String>,
    {
        let mut corpus = Self::new();
        for (id, text) in documents {
            corpus.insert(id, text);
        }
        corpus
    }

    /// Add or replace a document. Replacing keeps the original position.
    pub fn insert(&mut self, id: DocumentId, text: impl Into<String>) {
        self.put(id, Some(text.into()));
    }

    /// Register a document whose text cannot be loaded.
    pub fn insert_unreadable(&mut self, id: DocumentId) {
        self.put(id, None);
    }

    fn put(&mut self, id: DocumentId, text: Option<String>) {
        if self.texts.insert(id, text).is_none() {
            self.order.push(id);
        }
    }
}

impl CorpusSource for MemoryCorpus {
    fn document_ids(&self) -> Vec<DocumentId> {
        self.order.clone()
    }

    fn load_text(&self, id: DocumentId) -> Result<String, DocumentReadError> {
        match self.texts.get(&id) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(DocumentReadError::new(id, "text unavailable")),
            None => Err(DocumentReadError::new(id, "no such document")),
        }
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}

/// In-memory profile directory keyed by document id.
#[derive(Debug, Default, Clone)]
pub struct MemoryProfiles {
    profiles: HashMap<DocumentId, ApplicantProfile>,
}

impl MemoryProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `profile` for the application document `id`.
    pub fn insert(&mut self, id: DocumentId, profile: ApplicantProfile) {
        self.profiles.insert(id, profile);
    }

    pub fn get(&self, id: DocumentId) -> Option<&ApplicantProfile> {
        self.profiles.get(&id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl FromIterator<(DocumentId, ApplicantProfile)> for MemoryProfiles {
    fn from_iter<I: IntoIterator<Item = (DocumentId, ApplicantProfile)>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

impl ProfileLookup for MemoryProfiles {
    fn display_name(&self, id: DocumentId) -> Option<String> {
        self.profiles
            .get(&id)
            .map(ApplicantProfile::display_name)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let mut corpus = MemoryCorpus::new();
        corpus.insert(3, "c");
        corpus.insert(1, "a");
        corpus.insert(2, "b");
        corpus.insert(3, "c2");

        assert_eq!(corpus.document_ids(), vec![3, 1, 2]);
        assert_eq!(corpus.load_text(3).unwrap(), "c2");
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_unreadable_document() {
        let mut corpus = MemoryCorpus::with_documents([(1, "ok")]);
        corpus.insert_unreadable(2);

        assert!(corpus.load_text(1).is_ok());
        let err = corpus.load_text(2).unwrap_err();
        assert_eq!(err.id, 2);
        assert!(corpus.load_text(9).is_err());
    }

    #[test]
    fn test_profile_display_name() {
        let profiles: MemoryProfiles = [
            (1, ApplicantProfile::new(10, "Ada", "Lovelace")),
            (2, ApplicantProfile::new(11, "", "")),
        ]
        .into_iter()
        .collect();

        assert_eq!(profiles.display_name(1).as_deref(), Some("Ada Lovelace"));
        assert_eq!(profiles.display_name(2), None);
        assert_eq!(profiles.display_name(3), None);
    }
}
