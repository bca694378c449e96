//! Corpus and profile abstractions
//!
//! The engine never reads PDFs or databases itself. Callers supply:
//!
//! - a `CorpusSource` handing out already-extracted CV text per document
//! - optionally a `ProfileLookup` resolving document ids to display names
//!
//! `MemoryCorpus` and `MemoryProfiles` are the in-process implementations;
//! file-backed ones live in the `cvscan` runtime crate.
//!
//! # Example
//!
//! ```rust
//! use cvscan_core::corpus::{CorpusSource, Document, MemoryCorpus};
//!
//! let corpus = MemoryCorpus::with_documents([(7, "Rust / PostgreSQL")]);
//! let doc = Document::new(7, corpus.load_text(7).unwrap());
//! assert_eq!(doc.text(), "rust / postgresql");
//! ```

mod memory;
mod traits;

use serde::{Deserialize, Serialize};

pub use memory::{MemoryCorpus, MemoryProfiles};
pub use traits::{CorpusSource, ProfileLookup};

/// Identifier of an application document (one CV).
pub type DocumentId = u64;

/// Lowercase `text`. The single place where CV text and keywords are folded.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// A loaded, case-folded CV text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: DocumentId,
    text: String,
}

impl Document {
    /// Wrap raw extracted text, folding its case.
    pub fn new(id: DocumentId, raw_text: impl AsRef<str>) -> Self {
        Self {
            id,
            text: fold_case(raw_text.as_ref()),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Applicant record as kept by the profile store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub applicant_id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ApplicantProfile {
    pub fn new(applicant_id: u64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            applicant_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// "first last", trimmed; empty when both parts are blank.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}
