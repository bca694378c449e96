//! Boyer-Moore single-pattern search using the bad-character rule
//!
//! The last-occurrence table is a hash map keyed by symbol, so any alphabet
//! (full Unicode `char`, bytes, tokens) works without a fixed-size array.

use std::hash::Hash;

use ahash::AHashMap;

/// A pattern with its last-occurrence table precomputed.
#[derive(Debug, Clone)]
pub struct BoyerMoore<T> {
    pattern: Vec<T>,
    last: AHashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> BoyerMoore<T> {
    pub fn new(pattern: &[T]) -> Self {
        let mut last = AHashMap::with_capacity(pattern.len());
        for (i, symbol) in pattern.iter().enumerate() {
            last.insert(symbol.clone(), i);
        }

        Self {
            pattern: pattern.to_vec(),
            last,
        }
    }

    /// Highest index of `symbol` in the pattern.
    pub fn last_occurrence(&self, symbol: &T) -> Option<usize> {
        self.last.get(symbol).copied()
    }

    /// Shift for a window whose symbol at `offset` is `symbol`:
    /// `max(1, offset - last_occurrence(symbol))`, with absent symbols at -1.
    #[inline]
    fn bad_character_shift(&self, offset: usize, symbol: &T) -> usize {
        match self.last_occurrence(symbol) {
            Some(last) if last < offset => offset - last,
            Some(_) => 1,
            None => offset + 1,
        }
    }

    /// Start offsets of every occurrence, ascending.
    pub fn find_all(&self, text: &[T]) -> Vec<usize> {
        let n = text.len();
        let m = self.pattern.len();
        if m == 0 || n == 0 || m > n {
            return Vec::new();
        }

        let mut matches = Vec::new();
        let mut shift = 0;

        while shift <= n - m {
            // Compare right to left; `j` is one past the mismatching offset
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }

            if j == 0 {
                matches.push(shift);
                shift += if shift + m < n {
                    self.bad_character_shift(m, &text[shift + m])
                } else {
                    1
                };
            } else {
                let offset = j - 1;
                shift += self.bad_character_shift(offset, &text[shift + offset]);
            }
        }

        matches
    }
}

/// One-shot search over slices.
pub fn find_all<T: Eq + Hash + Clone>(text: &[T], pattern: &[T]) -> Vec<usize> {
    BoyerMoore::new(pattern).find_all(text)
}

/// One-shot search over strings; offsets are in characters.
pub fn find_all_str(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_all(&text, &pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_occurrence_table() {
        let bm = BoyerMoore::new(&['k', 'a', 't', 'a']);
        assert_eq!(bm.last_occurrence(&'k'), Some(0));
        assert_eq!(bm.last_occurrence(&'a'), Some(3));
        assert_eq!(bm.last_occurrence(&'t'), Some(2));
        assert_eq!(bm.last_occurrence(&'z'), None);
    }

    #[test]
    fn test_repeated_word() {
        assert_eq!(
            find_all_str("BILAKATADARIKATAMANAKATAKATA", "KATA"),
            vec![4, 12, 20, 24]
        );
    }

    #[test]
    fn test_large_skip() {
        assert_eq!(find_all_str("TRUSTHARDTOOTHBRUSHES", "TOOTH"), vec![9]);
    }

    #[test]
    fn test_overlapping() {
        assert_eq!(find_all_str("aaaa", "aa"), vec![0, 1, 2]);
        assert_eq!(find_all_str("abababa", "aba"), vec![0, 2, 4]);
    }

    #[test]
    fn test_match_at_text_end() {
        assert_eq!(find_all_str("xxabc", "abc"), vec![2]);
        assert_eq!(find_all_str("abc", "abc"), vec![0]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(find_all_str("", "a").is_empty());
        assert!(find_all_str("abc", "").is_empty());
        assert!(find_all_str("ab", "abc").is_empty());
    }

    #[test]
    fn test_non_ascii_alphabet() {
        // Symbols well outside any narrow byte table
        assert_eq!(find_all_str("ソフトウェア開発とソフト", "ソフト"), vec![0, 9]);
        assert_eq!(find_all_str("naïve naïveté", "naïve"), vec![0, 6]);
    }

    #[test]
    fn test_byte_alphabet() {
        assert_eq!(find_all(b"rust and trust", b"rust"), vec![0, 10]);
    }
}
