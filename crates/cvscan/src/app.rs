//! Command implementations shared by the CLI and its tests.

use tracing::{info, warn};

use cvscan_core::{
    Algorithm, CorpusSource, CvSections, DocumentId, EngineConfig, ProfileLookup, SearchEngine,
    SearchRequest, SearchResponse, SectionExtractor, DEFAULT_FUZZY_THRESHOLD,
};

use crate::dir_corpus::DirectoryCorpus;
use crate::error::{Error, Result};

/// Parameters of one `search` invocation.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub keywords: Vec<String>,
    pub algorithm: Algorithm,
    pub top_matches: usize,
    pub fuzzy_threshold: f64,
}

impl SearchOptions {
    pub fn new(keywords: Vec<String>, algorithm: Algorithm, top_matches: usize) -> Self {
        Self {
            keywords,
            algorithm,
            top_matches,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// Search `corpus`, resolve names from `profiles` and shape the response.
pub fn run_search<C>(
    corpus: &C,
    profiles: &dyn ProfileLookup,
    options: SearchOptions,
) -> Result<SearchResponse>
where
    C: CorpusSource + ?Sized,
{
    let engine = SearchEngine::with_config(EngineConfig {
        fuzzy_threshold: options.fuzzy_threshold,
        ..Default::default()
    })?;
    let request = SearchRequest::new(options.keywords, options.algorithm, options.top_matches);

    let mut result = engine.search(corpus, &request)?;
    if result.documents_skipped > 0 {
        warn!(skipped = result.documents_skipped, "some CVs could not be read");
    }
    result.resolve_names(profiles);

    info!(
        algorithm = %request.algorithm,
        applicants = result.applicants.len(),
        scanned = result.cvs_scanned,
        fuzzy = result.fuzzy_ran(),
        "search finished"
    );
    Ok(result.to_response())
}

/// Extract the sections of one CV from the directory corpus.
pub fn run_summary(corpus: &DirectoryCorpus, id: DocumentId) -> Result<CvSections> {
    if !corpus.contains(id) {
        return Err(Error::Config(format!(
            "no CV with id {id} in {}",
            corpus.root().display()
        )));
    }
    let text = corpus
        .load_text(id)
        .map_err(|e| Error::Config(e.to_string()))?;
    let extractor = SectionExtractor::new().map_err(|e| Error::Config(e.to_string()))?;
    Ok(extractor.extract(&text))
}
