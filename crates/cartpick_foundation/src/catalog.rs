//! Catalog and product capabilities.
//!
//! A store adapter (page scraper, API client, recorded snapshot) implements
//! [`Catalog`]; the strategy engine only ever talks to these two traits.

use crate::error::Result;
use crate::query::Query;

/// A product visible in a catalog's result page.
///
/// Products are only read, never compared by identity.
pub trait Product {
    /// Display name as shown by the store.
    fn name(&self) -> &str;

    /// Price, non-negative. No currency conversion or rounding is applied.
    fn price(&self) -> f64;
}

/// A searchable product inventory.
///
/// Calls are strictly sequential: `search` loads a result page, then
/// `products` reads what that page shows.
pub trait Catalog {
    /// The product type this catalog yields.
    type Product: Product + Clone;

    /// Makes the results for `query` the current result set.
    ///
    /// # Errors
    ///
    /// Returns whatever the adapter fails with; callers pass it on unchanged.
    fn search(&mut self, query: &Query) -> Result<()>;

    /// Returns the result set loaded by the most recent [`Catalog::search`].
    ///
    /// The order is adapter-defined but stable for a single call.
    ///
    /// # Errors
    ///
    /// Returns whatever the adapter fails with.
    fn products(&mut self) -> Result<Vec<Self::Product>>;
}

impl<C: Catalog + ?Sized> Catalog for &mut C {
    type Product = C::Product;

    fn search(&mut self, query: &Query) -> Result<()> {
        (**self).search(query)
    }

    fn products(&mut self) -> Result<Vec<Self::Product>> {
        (**self).products()
    }
}

/// An owned product record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    /// Display name.
    pub name: String,
    /// Price.
    pub price: f64,
}

impl Listing {
    /// Creates a new listing.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Product for Listing {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}
