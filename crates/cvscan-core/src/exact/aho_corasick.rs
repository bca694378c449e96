//! Aho-Corasick multi-pattern search
//!
//! Three phases:
//!
//! 1. Trie of goto transitions, each node remembering the patterns ending there
//! 2. Failure links computed breadth-first; terminal sets are merged along
//!    them so a pattern that is a suffix of another is reported at the same
//!    scan position ("she" also yields "he")
//! 3. One left-to-right scan over the text
//!
//! The automaton is immutable once built and can be shared across threads.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use ahash::AHashMap;

const ROOT: usize = 0;

#[derive(Debug, Clone)]
struct Node<T> {
    goto: AHashMap<T, usize>,
    fail: usize,
    /// Indices of patterns recognised on reaching this node
    outputs: Vec<usize>,
}

impl<T> Node<T> {
    fn new() -> Self {
        Self {
            goto: AHashMap::new(),
            fail: ROOT,
            outputs: Vec::new(),
        }
    }
}

/// Compiled automaton over a fixed pattern list.
#[derive(Debug, Clone)]
pub struct AhoCorasick<T> {
    nodes: Vec<Node<T>>,
    pattern_lens: Vec<usize>,
}

impl<T: Eq + Hash + Clone> AhoCorasick<T> {
    /// Build the automaton. Empty patterns keep their index but never match.
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[T]>,
    {
        let mut automaton = Self {
            nodes: vec![Node::new()],
            pattern_lens: Vec::new(),
        };

        for (index, pattern) in patterns.into_iter().enumerate() {
            let pattern = pattern.as_ref();
            automaton.pattern_lens.push(pattern.len());
            if !pattern.is_empty() {
                automaton.insert(pattern, index);
            }
        }

        automaton.build_failure_links();
        automaton
    }

    fn insert(&mut self, pattern: &[T], index: usize) {
        let mut state = ROOT;
        for symbol in pattern {
            state = match self.nodes[state].goto.get(symbol) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[state].goto.insert(symbol.clone(), next);
                    next
                }
            };
        }
        self.nodes[state].outputs.push(index);
    }

    fn build_failure_links(&mut self) {
        let mut queue: VecDeque<usize> = self.nodes[ROOT].goto.values().copied().collect();

        while let Some(state) = queue.pop_front() {
            let children: Vec<(T, usize)> = self.nodes[state]
                .goto
                .iter()
                .map(|(symbol, &next)| (symbol.clone(), next))
                .collect();

            for (symbol, next) in children {
                queue.push_back(next);

                let fail = self.transition(self.nodes[state].fail, &symbol);
                self.nodes[next].fail = fail;

                let inherited = self.nodes[fail].outputs.clone();
                self.nodes[next].outputs.extend(inherited);
            }
        }
    }

    /// Goto transition with failure fallback; lands on the root when no
    /// suffix state can consume `symbol`.
    #[inline]
    fn transition(&self, mut state: usize, symbol: &T) -> usize {
        loop {
            if let Some(&next) = self.nodes[state].goto.get(symbol) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].fail;
        }
    }

    /// Number of patterns the automaton was built from
    pub fn pattern_count(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Start offsets per pattern, indexed like the input patterns. Patterns
    /// without occurrences get an empty vector.
    pub fn find_all(&self, text: &[T]) -> Vec<Vec<usize>> {
        let mut matches = vec![Vec::new(); self.pattern_lens.len()];
        let mut state = ROOT;

        for (i, symbol) in text.iter().enumerate() {
            state = self.transition(state, symbol);
            for &pattern in &self.nodes[state].outputs {
                matches[pattern].push(i + 1 - self.pattern_lens[pattern]);
            }
        }

        matches
    }
}

/// One-shot search over strings, keyed by pattern; offsets are in characters.
///
/// An empty pattern list or empty text yields an empty map. Otherwise every
/// non-empty pattern is present, mapped to an empty vector when absent.
pub fn find_all_str(text: &str, patterns: &[&str]) -> HashMap<String, Vec<usize>> {
    if patterns.is_empty() || text.is_empty() {
        return HashMap::new();
    }

    let compiled: Vec<Vec<char>> = patterns.iter().map(|p| p.chars().collect()).collect();
    let text: Vec<char> = text.chars().collect();
    let automaton = AhoCorasick::<char>::new(&compiled);

    let mut result = HashMap::with_capacity(patterns.len());
    for (pattern, positions) in patterns.iter().zip(automaton.find_all(&text)) {
        if !pattern.is_empty() {
            result.insert((*pattern).to_string(), positions);
        }
    }
    result
}
