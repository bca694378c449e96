//! Search request and result types

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::corpus::{fold_case, DocumentId, ProfileLookup};
use crate::error::{Result, SearchError};
use crate::exact::Algorithm;

/// Matched string -> occurrence count (always >= 1).
///
/// Ordered so serialized output is deterministic.
pub type MatchMap = BTreeMap<String, usize>;

/// What the caller asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub keywords: Vec<String>,
    pub algorithm: Algorithm,
    pub top_matches: usize,
}

impl SearchRequest {
    pub fn new(keywords: Vec<String>, algorithm: Algorithm, top_matches: usize) -> Self {
        Self {
            keywords,
            algorithm,
            top_matches,
        }
    }

    /// Validate and fold the keyword list.
    ///
    /// Keywords are trimmed, empties dropped, and keywords whose folded form
    /// repeats an earlier one are removed.
    pub fn normalized(&self) -> Result<Keywords> {
        if self.top_matches == 0 {
            return Err(SearchError::InvalidTopMatches(self.top_matches));
        }

        let mut labels = Vec::new();
        let mut folded: Vec<String> = Vec::new();
        for keyword in &self.keywords {
            let trimmed = keyword.trim();
            if trimmed.is_empty() {
                continue;
            }
            let lower = fold_case(trimmed);
            if folded.contains(&lower) {
                continue;
            }
            labels.push(trimmed.to_string());
            folded.push(lower);
        }

        if folded.is_empty() {
            return Err(SearchError::EmptyKeywords);
        }
        Ok(Keywords { labels, folded })
    }
}

/// Validated keyword list: display labels alongside their folded forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    labels: Vec<String>,
    folded: Vec<String>,
}

impl Keywords {
    /// Keywords as the caller wrote them (trimmed); used as exact MatchMap keys.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Case-folded keywords, the form matched against documents.
    pub fn folded(&self) -> &[String] {
        &self.folded
    }

    pub fn len(&self) -> usize {
        self.folded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Per-document aggregate of exact and fuzzy hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantMatch {
    pub id: DocumentId,
    /// Filled by `SearchResult::resolve_names`; empty until then
    pub name: String,
    /// Sum of every count in both maps
    pub match_count: usize,
    pub matched_keywords: MatchMap,
    pub fuzzy_matched_keywords: Option<MatchMap>,
}

impl ApplicantMatch {
    /// Entry for a document with exact hits.
    pub fn from_exact(id: DocumentId, matched_keywords: MatchMap) -> Self {
        Self {
            id,
            name: String::new(),
            match_count: matched_keywords.values().sum(),
            matched_keywords,
            fuzzy_matched_keywords: None,
        }
    }

    /// Entry for a document found by the fuzzy pass only.
    pub fn from_fuzzy(id: DocumentId, fuzzy: MatchMap) -> Self {
        let mut entry = Self::from_exact(id, MatchMap::new());
        entry.attach_fuzzy(fuzzy);
        entry
    }

    /// Attach fuzzy hits, adding them to the total. An empty map is ignored.
    pub fn attach_fuzzy(&mut self, fuzzy: MatchMap) {
        if fuzzy.is_empty() {
            return;
        }
        self.match_count += fuzzy.values().sum::<usize>();
        self.fuzzy_matched_keywords = Some(fuzzy);
    }

    /// Whether the entry carries no hit at all.
    pub fn is_empty(&self) -> bool {
        self.matched_keywords.is_empty()
            && self.fuzzy_matched_keywords.as_ref().map_or(true, |f| f.is_empty())
    }

    /// Fallback label for applicants without a resolvable profile.
    pub fn fallback_name(id: DocumentId) -> String {
        format!("Applicant #{id}")
    }
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Ranked by `match_count` descending, ties in corpus order
    pub applicants: Vec<ApplicantMatch>,
    /// Documents whose text was loaded and scanned
    pub cvs_scanned: usize,
    /// Documents skipped because their text could not be loaded
    pub documents_skipped: usize,
    pub exact_runtime: Duration,
    /// `None` when the fuzzy pass did not run
    pub fuzzy_runtime: Option<Duration>,
}

impl SearchResult {
    /// Fill every applicant name from `profiles`, falling back to
    /// "Applicant #<id>". Never removes an applicant.
    pub fn resolve_names(&mut self, profiles: &dyn ProfileLookup) {
        for applicant in &mut self.applicants {
            applicant.name = profiles
                .display_name(applicant.id)
                .unwrap_or_else(|| ApplicantMatch::fallback_name(applicant.id));
        }
    }

    pub fn fuzzy_ran(&self) -> bool {
        self.fuzzy_runtime.is_some()
    }

    /// Serializable response shape.
    pub fn to_response(&self) -> SearchResponse {
        SearchResponse {
            applicants: self
                .applicants
                .iter()
                .map(|a| ApplicantSummary {
                    id: a.id,
                    name: a.name.clone(),
                    match_count: a.match_count,
                    matched_keywords: a.matched_keywords.clone(),
                    fuzzy_matched_keywords: a.fuzzy_matched_keywords.clone(),
                })
                .collect(),
            cvs_scanned: self.cvs_scanned,
            exact_runtime_ms: as_millis_f64(self.exact_runtime),
            fuzzy_runtime_ms: self.fuzzy_runtime.map(as_millis_f64).unwrap_or(0.0),
        }
    }
}

fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// One applicant in a `SearchResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantSummary {
    pub id: DocumentId,
    pub name: String,
    pub match_count: usize,
    pub matched_keywords: MatchMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_matched_keywords: Option<MatchMap>,
}

/// Wire shape of a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub applicants: Vec<ApplicantSummary>,
    pub cvs_scanned: usize,
    pub exact_runtime_ms: f64,
    /// 0 when the fuzzy pass was skipped
    pub fuzzy_runtime_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{ApplicantProfile, MemoryProfiles};
    use pretty_assertions::assert_eq;

    fn request(keywords: &[&str], top: usize) -> SearchRequest {
        SearchRequest::new(
            keywords.iter().map(|k| k.to_string()).collect(),
            Algorithm::Kmp,
            top,
        )
    }

    #[test]
    fn test_normalize_trims_folds_dedups() {
        let keywords = request(&["  Python ", "", "SQL", "python", "   "], 5)
            .normalized()
            .unwrap();
        assert_eq!(keywords.labels(), &["Python".to_string(), "SQL".to_string()]);
        assert_eq!(keywords.folded(), &["python".to_string(), "sql".to_string()]);
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert_eq!(request(&[" ", ""], 5).normalized(), Err(SearchError::EmptyKeywords));
        assert_eq!(request(&[], 5).normalized(), Err(SearchError::EmptyKeywords));
    }

    #[test]
    fn test_normalize_rejects_zero_top() {
        assert_eq!(
            request(&["rust"], 0).normalized(),
            Err(SearchError::InvalidTopMatches(0))
        );
    }

    #[test]
    fn test_match_count_invariant() {
        let exact = MatchMap::from([("Python".to_string(), 3), ("SQL".to_string(), 1)]);
        let mut entry = ApplicantMatch::from_exact(1, exact);
        assert_eq!(entry.match_count, 4);

        entry.attach_fuzzy(MatchMap::from([("pythn (~)".to_string(), 2)]));
        assert_eq!(entry.match_count, 6);

        entry.attach_fuzzy(MatchMap::new());
        assert_eq!(entry.match_count, 6);
        assert!(entry.fuzzy_matched_keywords.is_some());
    }

    #[test]
    fn test_fuzzy_only_entry() {
        let entry = ApplicantMatch::from_fuzzy(9, MatchMap::from([("jva (~)".to_string(), 1)]));
        assert!(entry.matched_keywords.is_empty());
        assert_eq!(entry.match_count, 1);
        assert!(!entry.is_empty());
        assert!(ApplicantMatch::from_fuzzy(9, MatchMap::new()).is_empty());
    }

    #[test]
    fn test_resolve_names_with_fallback() {
        let mut profiles = MemoryProfiles::new();
        profiles.insert(1, ApplicantProfile::new(100, "Ada", "Lovelace"));

        let mut result = SearchResult {
            applicants: vec![
                ApplicantMatch::from_exact(1, MatchMap::from([("rust".to_string(), 1)])),
                ApplicantMatch::from_exact(2, MatchMap::from([("rust".to_string(), 1)])),
            ],
            cvs_scanned: 2,
            documents_skipped: 0,
            exact_runtime: Duration::from_millis(3),
            fuzzy_runtime: None,
        };
        result.resolve_names(&profiles);

        assert_eq!(result.applicants.len(), 2);
        assert_eq!(result.applicants[0].name, "Ada Lovelace");
        assert_eq!(result.applicants[1].name, "Applicant #2");
    }

    #[test]
    fn test_response_shape() {
        let result = SearchResult {
            applicants: vec![ApplicantMatch::from_exact(
                5,
                MatchMap::from([("Go".to_string(), 2)]),
            )],
            cvs_scanned: 1,
            documents_skipped: 0,
            exact_runtime: Duration::from_micros(1500),
            fuzzy_runtime: None,
        };

        let json = serde_json::to_value(result.to_response()).unwrap();
        assert_eq!(json["applicants"][0]["id"], 5);
        assert_eq!(json["applicants"][0]["matched_keywords"]["Go"], 2);
        assert!(json["applicants"][0].get("fuzzy_matched_keywords").is_none());
        assert_eq!(json["cvs_scanned"], 1);
        assert_eq!(json["exact_runtime_ms"], 1.5);
        assert_eq!(json["fuzzy_runtime_ms"], 0.0);
    }
}
