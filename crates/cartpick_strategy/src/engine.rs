//! The query-line interpreter.
//!
//! [`StrategyEngine::select`] parses a line and dispatches on its main flag:
//! leaves run against the first alternative, combinators re-enter the
//! engine once per alternative.

use cartpick_foundation::{Catalog, Error, Result};

use crate::config::EngineConfig;
use crate::flag::FlagKind;
use crate::language::QueryLine;
use crate::resume::ManualResume;

/// Evaluates query lines against a catalog.
///
/// The engine holds only configuration; every call is independent.
#[derive(Clone, Debug, Default)]
pub struct StrategyEngine {
    config: EngineConfig,
}

impl StrategyEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses and evaluates one query line.
    ///
    /// # Errors
    ///
    /// Unknown flags and malformed lines fail before any catalog call.
    /// Catalog errors pass through with the failing line attached as context.
    pub fn select<C>(
        &self,
        catalog: &mut C,
        resume: &mut dyn ManualResume,
        line: &str,
    ) -> Result<Vec<C::Product>>
    where
        C: Catalog + ?Sized,
    {
        let parsed = QueryLine::parse(line).map_err(|e| e.within_line(line))?;
        self.evaluate(catalog, resume, &parsed, 0)
    }

    /// Evaluates an already parsed line at the given recursion depth.
    ///
    /// # Errors
    ///
    /// Fails with `DepthExceeded` past [`EngineConfig::max_depth`], and
    /// otherwise as [`StrategyEngine::select`].
    pub fn evaluate<C>(
        &self,
        catalog: &mut C,
        resume: &mut dyn ManualResume,
        line: &QueryLine,
        depth: usize,
    ) -> Result<Vec<C::Product>>
    where
        C: Catalog + ?Sized,
    {
        if depth > self.config.max_depth {
            return Err(Error::depth_exceeded(self.config.max_depth).within_line(line.to_string()));
        }

        tracing::debug!(line = %line, depth, "evaluating");

        let result = match line.main.kind() {
            FlagKind::Leaf(leaf) => match line.first_alternative() {
                Some(query) => leaf.select(catalog, query, resume, &self.config),
                None => Ok(Vec::new()),
            },
            FlagKind::Combinator(combinator) => {
                tracing::debug!(
                    strategy = combinator.name(),
                    alternatives = line.alternatives.len(),
                    list = %line.list,
                    "combining"
                );
                combinator.combine(&line.alternatives, line.list, |inner| {
                    self.evaluate(&mut *catalog, &mut *resume, inner, depth + 1)
                })
            }
        };

        result.map_err(|e| e.within_line(line.to_string()))
    }
}
