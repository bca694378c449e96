//! Fuzzy Matching
//!
//! Approximate keyword matching for when the exact pass comes up short.
//!
//! A document is split into maximal runs of letters; every distinct token is
//! compared with every keyword by Levenshtein distance, and scored as
//!
//! ```text
//! similarity = (1 - distance / max(len(keyword), len(token))) * 100
//! ```
//!
//! Tokens with `threshold <= similarity < 100` are reported under the key
//! `"<token> (~)"`. Identical tokens score 100 and are left to the exact pass.
//!
//! # Example
//!
//! ```rust
//! use cvscan_core::fuzzy::{levenshtein_distance, FuzzyMatcher};
//!
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//!
//! let matches = FuzzyMatcher::new().match_document("senior javascrpt engineer", &["javascript"]);
//! assert_eq!(matches.get("javascrpt (~)"), Some(&1));
//! ```

mod levenshtein;
mod matcher;

pub use levenshtein::{distance, levenshtein_distance, similarity};
pub use matcher::{fuzzy_key, tokenize, FuzzyMatcher, DEFAULT_FUZZY_THRESHOLD, FUZZY_MARKER};
