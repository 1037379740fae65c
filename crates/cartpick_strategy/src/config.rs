//! Configuration for the strategy engine.

/// Configuration for [`StrategyEngine`](crate::StrategyEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Deepest combinator recursion allowed (the top-level line is depth 0).
    pub max_depth: usize,

    /// Log every listing a catalog returned, at `trace` level.
    pub log_listings: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            log_listings: false,
        }
    }
}

impl EngineConfig {
    /// Allows only what the grammar can express: a combinator whose
    /// alternatives use one more combinator.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_depth: 2,
            ..Self::default()
        }
    }

    /// Logs listings for debugging store results.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            log_listings: true,
            ..Self::default()
        }
    }

    /// Builder method to set the recursion limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder method to enable/disable listing logs.
    #[must_use]
    pub fn with_log_listings(mut self, log: bool) -> Self {
        self.log_listings = log;
        self
    }
}
