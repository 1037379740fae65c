//! Shopping sessions.
//!
//! A session owns one catalog and feeds it query lines through the strategy
//! engine, collecting what each line selected into a [`Basket`].

use cartpick_foundation::{Catalog, Result};
use cartpick_strategy::{ManualResume, StrategyEngine};

use crate::basket::Basket;

/// Runs query lines against one catalog.
pub struct Session<C: Catalog> {
    engine: StrategyEngine,
    catalog: C,
    basket: Basket<C::Product>,
}

impl<C: Catalog> Session<C> {
    /// Creates a session with an empty basket.
    #[must_use]
    pub fn new(engine: StrategyEngine, catalog: C) -> Self {
        Self {
            engine,
            catalog,
            basket: Basket::new(),
        }
    }

    /// Evaluates one line and adds its selection to the basket.
    ///
    /// Returns how many products the line selected.
    ///
    /// # Errors
    ///
    /// Returns the engine's error; the basket is left unchanged.
    pub fn run_line(&mut self, resume: &mut dyn ManualResume, line: &str) -> Result<usize> {
        let selected = self.engine.select(&mut self.catalog, resume, line)?;
        let count = selected.len();
        tracing::info!(line, selected = count, "line done");
        self.basket.add(line, selected);
        Ok(count)
    }

    /// Evaluates every line in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first line's error; lines before it stay in the basket.
    pub fn run<I, S>(&mut self, resume: &mut dyn ManualResume, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.run_line(resume, line.as_ref())?;
        }
        Ok(())
    }

    /// The selections so far.
    #[must_use]
    pub fn basket(&self) -> &Basket<C::Product> {
        &self.basket
    }

    /// The catalog this session searches.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Ends the session, keeping the basket.
    #[must_use]
    pub fn into_basket(self) -> Basket<C::Product> {
        self.basket
    }
}
