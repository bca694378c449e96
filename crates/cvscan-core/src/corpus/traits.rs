//! Collaborator trait definitions

use crate::error::DocumentReadError;

use super::DocumentId;

/// Supplier of CV texts.
///
/// Implementations hand out raw extracted text; case folding happens once,
/// in `Document::new`, when the search engine loads a document. Sources are
/// read from worker threads, so they must be `Sync`.
pub trait CorpusSource: Sync {
    /// Ids of every document in scan order.
    ///
    /// The order is the tie-break order of the final ranking.
    fn document_ids(&self) -> Vec<DocumentId>;

    /// Raw text of one document.
    ///
    /// A failure skips that document for the current search only.
    fn load_text(&self, id: DocumentId) -> Result<String, DocumentReadError>;

    /// Number of documents in the corpus.
    fn len(&self) -> usize {
        self.document_ids().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves a document id to an applicant display name.
pub trait ProfileLookup {
    /// Display name for `id`, or `None` when no profile is known.
    fn display_name(&self, id: DocumentId) -> Option<String>;
}
