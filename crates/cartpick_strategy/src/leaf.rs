//! Leaf strategies.
//!
//! `first`, `all`, `min_price` and `max_price` are [`FilteredStrategy`]s
//! around the `*_of_many` reductions below. `ask` stands alone: it loads the
//! result page and waits for a manual pick.

use cartpick_foundation::{Catalog, Product, Query, Result};

use crate::builder::FilteredStrategy;
use crate::config::EngineConfig;
use crate::resume::ManualResume;

/// A terminal selection policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Leaf {
    /// First matching product.
    First,
    /// Every matching product.
    All,
    /// Manual pick; selects nothing itself.
    Ask,
    /// Cheapest matching product.
    MinPrice,
    /// Most expensive matching product.
    MaxPrice,
}

impl Leaf {
    /// Strategy name, for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Leaf::First => "first",
            Leaf::All => "all",
            Leaf::Ask => "ask",
            Leaf::MinPrice => "min_price",
            Leaf::MaxPrice => "max_price",
        }
    }

    /// Runs this leaf against one query.
    ///
    /// # Errors
    ///
    /// Returns catalog errors unchanged.
    pub fn select<C>(
        self,
        catalog: &mut C,
        query: &Query,
        resume: &mut dyn ManualResume,
        config: &EngineConfig,
    ) -> Result<Vec<C::Product>>
    where
        C: Catalog + ?Sized,
    {
        match self {
            Leaf::First => {
                filtered(self, first_of_many::<C::Product>, config).select(catalog, query)
            }
            Leaf::All => filtered(self, all_of_many::<C::Product>, config).select(catalog, query),
            Leaf::MinPrice => {
                filtered(self, min_price_of_many::<C::Product>, config).select(catalog, query)
            }
            Leaf::MaxPrice => {
                filtered(self, max_price_of_many::<C::Product>, config).select(catalog, query)
            }
            Leaf::Ask => ask(catalog, query, resume),
        }
    }
}

fn filtered<D>(leaf: Leaf, disambiguate: D, config: &EngineConfig) -> FilteredStrategy<D> {
    FilteredStrategy::new(leaf.name(), disambiguate).with_log_listings(config.log_listings)
}

/// Loads the result page for `query`, waits for a manual pick, selects nothing.
///
/// # Errors
///
/// Returns search errors unchanged; waiting itself never fails.
pub fn ask<C>(
    catalog: &mut C,
    query: &Query,
    resume: &mut dyn ManualResume,
) -> Result<Vec<C::Product>>
where
    C: Catalog + ?Sized,
{
    catalog.search(query)?;
    tracing::info!(query = %query, "waiting for manual pick");
    resume.wait_for_resume(query);
    Ok(Vec::new())
}

/// Keeps the first product.
#[must_use]
pub fn first_of_many<P>(products: Vec<P>) -> Vec<P> {
    debug_assert!(!products.is_empty(), "disambiguation needs at least one product");
    products.into_iter().take(1).collect()
}

/// Keeps every product.
#[must_use]
pub fn all_of_many<P>(products: Vec<P>) -> Vec<P> {
    products
}

/// Keeps the cheapest product; the earliest wins ties. Empty in, empty out.
#[must_use]
pub fn min_price_of_many<P: Product>(products: Vec<P>) -> Vec<P> {
    reduce_price(products, |candidate, best| candidate < best)
}

/// Keeps the most expensive product; the earliest wins ties. Empty in, empty out.
#[must_use]
pub fn max_price_of_many<P: Product>(products: Vec<P>) -> Vec<P> {
    reduce_price(products, |candidate, best| candidate > best)
}

/// Keeps the product `beats` prefers. Only a strict win replaces the
/// current best, so earlier products win ties.
fn reduce_price<P: Product>(products: Vec<P>, beats: impl Fn(f64, f64) -> bool) -> Vec<P> {
    let mut best: Option<P> = None;
    for product in products {
        if best
            .as_ref()
            .is_none_or(|current| beats(product.price(), current.price()))
        {
            best = Some(product);
        }
    }
    best.into_iter().collect()
}
