//! Knuth-Morris-Pratt single-pattern search

/// Longest proper prefix of `pattern[..=i]` that is also its suffix, for every `i`.
pub fn border_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut border = vec![0; pattern.len()];
    let mut j = 0;

    for i in 1..pattern.len() {
        while j > 0 && pattern[i] != pattern[j] {
            j = border[j - 1];
        }
        if pattern[i] == pattern[j] {
            j += 1;
        }
        border[i] = j;
    }

    border
}

/// A pattern with its border table precomputed, reusable across texts.
#[derive(Debug, Clone)]
pub struct Kmp<T> {
    pattern: Vec<T>,
    border: Vec<usize>,
}

impl<T: PartialEq + Clone> Kmp<T> {
    pub fn new(pattern: &[T]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            border: border_function(pattern),
        }
    }

    /// Start offsets of every occurrence, ascending. Overlapping
    /// occurrences are all reported.
    pub fn find_all(&self, text: &[T]) -> Vec<usize> {
        let m = self.pattern.len();
        if m == 0 || m > text.len() {
            return Vec::new();
        }

        let mut matches = Vec::new();
        let mut j = 0;

        for (i, symbol) in text.iter().enumerate() {
            while j > 0 && *symbol != self.pattern[j] {
                j = self.border[j - 1];
            }
            if *symbol == self.pattern[j] {
                j += 1;
            }
            if j == m {
                matches.push(i + 1 - m);
                j = self.border[m - 1];
            }
        }

        matches
    }
}

/// One-shot search over slices.
pub fn find_all<T: PartialEq + Clone>(text: &[T], pattern: &[T]) -> Vec<usize> {
    Kmp::new(pattern).find_all(text)
}

/// One-shot search over strings; offsets are in characters.
pub fn find_all_str(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    find_all(&text, &pattern)
}
