//! Directory-backed corpus
//!
//! CV text is extracted ahead of time (one plain-text file per application)
//! and laid out flat:
//!
//! ```text
//! cvs/
//! ├── 1.txt
//! ├── 2.txt
//! └── 17.txt
//! ```
//!
//! The file stem is the document id. Files whose stem is not an integer are
//! ignored with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use cvscan_core::{CorpusSource, DocumentId, DocumentReadError};

use crate::error::{Error, Result};

const TEXT_EXTENSION: &str = "txt";

/// Corpus over a directory of `<id>.txt` files, in ascending id order.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
    ids: Vec<DocumentId>,
}

impl DirectoryCorpus {
    /// Index `root`. Only the listing is read here; texts are read per search.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::Config(format!(
                "corpus path is not a directory: {}",
                root.display()
            )));
        }

        let mut ids: Vec<DocumentId> = Vec::new();
        for entry in fs::read_dir(&root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEXT_EXTENSION) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()).map(str::parse) {
                Some(Ok(id)) => ids.push(id),
                _ => warn!(path = %path.display(), "ignoring file without a numeric id"),
            }
        }
        ids.sort_unstable();
        ids.dedup();

        debug!(root = %root.display(), documents = ids.len(), "corpus indexed");
        Ok(Self { root, ids })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the text of document `id` lives.
    pub fn path_for(&self, id: DocumentId) -> PathBuf {
        self.root.join(format!("{id}.{TEXT_EXTENSION}"))
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }
}

impl CorpusSource for DirectoryCorpus {
    fn document_ids(&self) -> Vec<DocumentId> {
        self.ids.clone()
    }

    fn load_text(&self, id: DocumentId) -> std::result::Result<String, DocumentReadError> {
        fs::read_to_string(self.path_for(id)).map_err(|e| DocumentReadError::new(id, e.to_string()))
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}
