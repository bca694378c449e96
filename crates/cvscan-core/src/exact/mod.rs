//! Exact Matching Algorithms
//!
//! Three interchangeable substring searches, all returning 0-based start
//! offsets in ascending order:
//!
//! - **KMP**: border-function fallback, O(n + m)
//! - **Boyer-Moore**: bad-character rule over a sparse last-occurrence table
//! - **Aho-Corasick**: every keyword in a single pass, O(n + Σm + z)
//!
//! # Example
//!
//! ```rust
//! use cvscan_core::exact::{kmp, boyer_moore};
//!
//! let text = "BILAKATADARIKATAMANAKATAKATA";
//! assert_eq!(kmp::find_all_str(text, "KATA"), vec![4, 12, 20, 24]);
//! assert_eq!(boyer_moore::find_all_str(text, "KATA"), vec![4, 12, 20, 24]);
//! ```

pub mod aho_corasick;
pub mod boyer_moore;
pub mod kmp;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

pub use aho_corasick::AhoCorasick;
pub use boyer_moore::BoyerMoore;
pub use kmp::Kmp;

/// Exact-match algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "KMP")]
    Kmp,
    #[serde(rename = "BM", alias = "BOYER_MOORE")]
    BoyerMoore,
    #[serde(rename = "AHO_CORASICK", alias = "Aho-Corasick")]
    AhoCorasick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::BoyerMoore, Algorithm::AhoCorasick];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "BM",
            Algorithm::AhoCorasick => "AHO_CORASICK",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "KMP" => Ok(Algorithm::Kmp),
            "BM" | "BOYER_MOORE" => Ok(Algorithm::BoyerMoore),
            "AC" | "AHO_CORASICK" => Ok(Algorithm::AhoCorasick),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Keywords compiled for one algorithm, reused for every document of a search.
///
/// Shared read-only across worker threads; no per-scan state is kept.
#[derive(Debug, Clone)]
pub struct KeywordScanner {
    compiled: Compiled,
    pattern_lens: Vec<usize>,
}

#[derive(Debug, Clone)]
enum Compiled {
    Kmp(Vec<Kmp<char>>),
    BoyerMoore(Vec<BoyerMoore<char>>),
    AhoCorasick(AhoCorasick<char>),
}

impl KeywordScanner {
    pub fn new<S: AsRef<str>>(algorithm: Algorithm, keywords: &[S]) -> Self {
        let patterns: Vec<Vec<char>> = keywords
            .iter()
            .map(|k| k.as_ref().chars().collect())
            .collect();
        let pattern_lens = patterns.iter().map(Vec::len).collect();

        let compiled = match algorithm {
            Algorithm::Kmp => Compiled::Kmp(patterns.iter().map(|p| Kmp::new(p)).collect()),
            Algorithm::BoyerMoore => {
                Compiled::BoyerMoore(patterns.iter().map(|p| BoyerMoore::new(p)).collect())
            }
            Algorithm::AhoCorasick => Compiled::AhoCorasick(AhoCorasick::new(&patterns)),
        };

        Self {
            compiled,
            pattern_lens,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self.compiled {
            Compiled::Kmp(_) => Algorithm::Kmp,
            Compiled::BoyerMoore(_) => Algorithm::BoyerMoore,
            Compiled::AhoCorasick(_) => Algorithm::AhoCorasick,
        }
    }

    /// Start offsets per keyword, indexed like the keywords given to `new`.
    pub fn find_all(&self, text: &[char]) -> Vec<Vec<usize>> {
        let positions: Vec<Vec<usize>> = match &self.compiled {
            Compiled::Kmp(matchers) => matchers.iter().map(|m| m.find_all(text)).collect(),
            Compiled::BoyerMoore(matchers) => matchers.iter().map(|m| m.find_all(text)).collect(),
            Compiled::AhoCorasick(automaton) => automaton.find_all(text),
        };

        for (found, &len) in positions.iter().zip(&self.pattern_lens) {
            debug_assert_positions(found, text.len(), len);
        }
        positions
    }

    /// Occurrence count per keyword.
    pub fn count(&self, text: &[char]) -> Vec<usize> {
        self.find_all(text).iter().map(Vec::len).collect()
    }
}

/// A reported start outside `[0, text_len - pattern_len]`, or out of order,
/// is a matcher bug. Checked in debug builds only.
#[inline]
fn debug_assert_positions(positions: &[usize], text_len: usize, pattern_len: usize) {
    debug_assert!(
        positions.is_empty() || (pattern_len > 0 && pattern_len <= text_len),
        "matcher reported {} hit(s) for pattern of length {} in text of length {}",
        positions.len(),
        pattern_len,
        text_len
    );
    debug_assert!(
        positions.iter().all(|&p| p + pattern_len <= text_len),
        "matcher reported a start past {}",
        text_len.saturating_sub(pattern_len)
    );
    debug_assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "matcher reported unordered positions"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("KMP".parse::<Algorithm>().unwrap(), Algorithm::Kmp);
        assert_eq!("bm".parse::<Algorithm>().unwrap(), Algorithm::BoyerMoore);
        assert_eq!("Boyer-Moore".parse::<Algorithm>().unwrap(), Algorithm::BoyerMoore);
        assert_eq!("Aho-Corasick".parse::<Algorithm>().unwrap(), Algorithm::AhoCorasick);
        assert_eq!("aho_corasick".parse::<Algorithm>().unwrap(), Algorithm::AhoCorasick);
    }

    #[test]
    fn test_algorithm_parse_unknown() {
        let err = "rabin-karp".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SearchError::UnknownAlgorithm("rabin-karp".to_string()));
    }

    #[test]
    fn test_algorithm_serde() {
        assert_eq!(serde_json::to_string(&Algorithm::BoyerMoore).unwrap(), "\"BM\"");
        let parsed: Algorithm = serde_json::from_str("\"Aho-Corasick\"").unwrap();
        assert_eq!(parsed, Algorithm::AhoCorasick);
        assert!(serde_json::from_str::<Algorithm>("\"REGEX\"").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_scanner_counts_agree() {
        let text = chars("python, pandas and python notebooks; cpython internals");
        let keywords = ["python", "pandas", "rust", ""];

        for algorithm in Algorithm::ALL {
            let scanner = KeywordScanner::new(algorithm, &keywords);
            assert_eq!(scanner.algorithm(), algorithm);
            assert_eq!(scanner.count(&text), vec![3, 1, 0, 0], "{algorithm}");
        }
    }

    #[test]
    fn test_scanner_positions_agree() {
        let text = chars("ushershers");
        let keywords = ["he", "she", "his", "hers"];
        let expected = vec![vec![2, 6], vec![1, 5], vec![], vec![2, 6]];

        for algorithm in Algorithm::ALL {
            let scanner = KeywordScanner::new(algorithm, &keywords);
            assert_eq!(scanner.find_all(&text), expected, "{algorithm}");
        }
    }
}
