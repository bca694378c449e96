//! Search engine configuration

use crate::error::{Result, SearchError};
use crate::fuzzy::DEFAULT_FUZZY_THRESHOLD;

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Minimum fuzzy similarity percentage, in (0, 100]
    pub fuzzy_threshold: f64,
    /// Corpus size at which per-document work moves onto the rayon pool
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            parallel_threshold: 64,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.fuzzy_threshold > 0.0 && self.fuzzy_threshold <= 100.0) {
            return Err(SearchError::InvalidThreshold(self.fuzzy_threshold));
        }
        Ok(())
    }
}
