//! Token-level fuzzy matching against a keyword list

use ahash::AHashSet;

use super::levenshtein::similarity_of;
use crate::error::{Result, SearchError};
use crate::types::MatchMap;

/// Default minimum similarity percentage for a fuzzy hit
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 80.0;

/// Suffix marking a MatchMap key as approximate
pub const FUZZY_MARKER: &str = " (~)";

/// MatchMap key for a fuzzy-matched token: `"<token> (~)"`.
pub fn fuzzy_key(token: &str) -> String {
    format!("{token}{FUZZY_MARKER}")
}

/// Maximal runs of alphabetic characters, in text order (duplicates kept).
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
}

/// Distinct tokens of a document, each with its character form.
fn distinct_tokens(text: &str) -> Vec<(&str, Vec<char>)> {
    let mut seen = AHashSet::new();
    tokenize(text)
        .filter(|token| seen.insert(*token))
        .map(|token| (token, token.chars().collect()))
        .collect()
}

/// Edit-distance fuzzy matcher.
///
/// Reports document tokens whose similarity to some keyword is at least the
/// threshold but below 100; identical tokens are left to the exact pass.
/// Counts are aggregated per token: every keyword a token satisfies adds one.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    /// Create a matcher with the default 80% threshold
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// Create a matcher with a custom threshold in (0, 100]
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        if !(threshold > 0.0 && threshold <= 100.0) {
            return Err(SearchError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Match an already case-folded document against case-folded keywords.
    pub fn match_document<S: AsRef<str>>(&self, text: &str, keywords: &[S]) -> MatchMap {
        let keywords: Vec<Vec<char>> = keywords
            .iter()
            .map(|k| k.as_ref().chars().collect())
            .collect();
        self.match_prepared(text, &keywords)
    }

    /// Same as `match_document` with keywords already split into characters.
    pub(crate) fn match_prepared(&self, text: &str, keywords: &[Vec<char>]) -> MatchMap {
        let tokens = distinct_tokens(text);
        let mut matches = MatchMap::new();

        for keyword in keywords.iter().filter(|k| !k.is_empty()) {
            for (token, token_chars) in &tokens {
                if self.within_threshold(keyword, token_chars) {
                    *matches.entry(fuzzy_key(token)).or_insert(0) += 1;
                }
            }
        }

        matches
    }

    #[inline]
    fn within_threshold(&self, keyword: &[char], token: &[char]) -> bool {
        let max_len = keyword.len().max(token.len());
        if max_len == 0 {
            return false;
        }

        // distance >= length difference, so this bounds the similarity from above
        let len_diff = keyword.len().abs_diff(token.len());
        let best_case = (1.0 - len_diff as f64 / max_len as f64) * 100.0;
        if best_case < self.threshold {
            return false;
        }

        let score = similarity_of(keyword, token);
        self.threshold <= score && score < 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_letter_runs() {
        let tokens: Vec<&str> = tokenize("c++ & python3, node.js").collect();
        assert_eq!(tokens, vec!["c", "python", "node", "js"]);
    }

    #[test]
    fn test_tokenize_unicode_letters() {
        let tokens: Vec<&str> = tokenize("développeur—münchen").collect();
        assert_eq!(tokens, vec!["développeur", "münchen"]);
    }

    #[test]
    fn test_typo_matched() {
        let matcher = FuzzyMatcher::new();
        let matches = matcher.match_document("experienced pythn developer", &["python"]);
        assert_eq!(matches.get("pythn (~)"), Some(&1));
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_exact_token_excluded() {
        let matcher = FuzzyMatcher::new();
        let matches = matcher.match_document("python python python", &["python"]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_repeated_token_counted_once() {
        let matcher = FuzzyMatcher::new();
        let text = "javas ".repeat(50);
        let matches = matcher.match_document(&text, &["java"]);
        assert_eq!(matches.get("javas (~)"), Some(&1));
    }

    #[test]
    fn test_token_satisfying_two_keywords() {
        let matcher = FuzzyMatcher::new();
        // "managr" is one edit from both keywords
        let matches = matcher.match_document("project managr", &["manager", "manage"]);
        assert_eq!(matches.get("managr (~)"), Some(&2));
    }

    #[test]
    fn test_threshold_boundary_inclusive() {
        let matcher = FuzzyMatcher::new();
        // 1 edit over 5 characters is exactly 80%
        let matches = matcher.match_document("rustc", &["rusty"]);
        assert_eq!(matches.get("rustc (~)"), Some(&1));

        // 2 edits over 5 characters is 60%
        let matches = matcher.match_document("rxstc", &["rusty"]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_length_gap_pruned() {
        let matcher = FuzzyMatcher::new();
        let matches = matcher.match_document("go golang gopher", &["golangci"]);
        assert_eq!(matches.get("golang (~)"), None);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let matcher = FuzzyMatcher::with_threshold(60.0).unwrap();
        let matches = matcher.match_document("rxstc", &["rusty"]);
        assert_eq!(matches.get("rxstc (~)"), Some(&1));
    }

    #[test]
    fn test_invalid_threshold() {
        assert_eq!(
            FuzzyMatcher::with_threshold(0.0).unwrap_err(),
            SearchError::InvalidThreshold(0.0)
        );
        assert!(FuzzyMatcher::with_threshold(100.5).is_err());
        assert!(FuzzyMatcher::with_threshold(f64::NAN).is_err());
    }

    #[test]
    fn test_empty_keyword_ignored() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.match_document("a b c", &[""]).is_empty());
    }
}
