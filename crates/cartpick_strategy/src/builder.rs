//! The search → filter → count-branch pipeline.
//!
//! [`FilteredStrategy`] turns any "pick from many" function into a complete
//! strategy. The disambiguator only sees lists of two or more products;
//! zero and one survivors are answered directly.

use cartpick_foundation::{Catalog, Product, Query, Result};

use crate::word_match::QueryWords;

/// A strategy built around a disambiguation function.
#[derive(Clone, Debug)]
pub struct FilteredStrategy<D> {
    name: &'static str,
    disambiguate: D,
    log_listings: bool,
}

impl<D> FilteredStrategy<D> {
    /// Wraps `disambiguate`, which must accept any non-empty list.
    #[must_use]
    pub fn new(name: &'static str, disambiguate: D) -> Self {
        Self {
            name,
            disambiguate,
            log_listings: false,
        }
    }

    /// Builder method to log every listing the catalog returned.
    #[must_use]
    pub fn with_log_listings(mut self, log: bool) -> Self {
        self.log_listings = log;
        self
    }

    /// Strategy name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Searches, keeps the word matches, and branches on how many survived.
    ///
    /// # Errors
    ///
    /// Returns catalog errors unchanged.
    pub fn select<C>(&self, catalog: &mut C, query: &Query) -> Result<Vec<C::Product>>
    where
        C: Catalog + ?Sized,
        D: Fn(Vec<C::Product>) -> Vec<C::Product>,
    {
        catalog.search(query)?;
        let listed = catalog.products()?;
        let total = listed.len();

        if self.log_listings {
            for product in &listed {
                tracing::trace!(product = product.name(), price = product.price(), "listing");
            }
        }

        let words = QueryWords::new(query.as_str());
        let matched: Vec<C::Product> = listed
            .into_iter()
            .filter(|product| words.matches(product.name()))
            .collect();

        tracing::info!(
            strategy = self.name,
            query = %query,
            filtered = matched.len(),
            total,
            "filtered products"
        );

        match matched.len() {
            0 | 1 => Ok(matched),
            _ => Ok((self.disambiguate)(matched)),
        }
    }
}
