//! Recorded catalogs.
//!
//! A snapshot maps exact query text to the result page a store showed for it.
//! [`SnapshotCatalog`] replays those pages, which makes whole shopping lists
//! reproducible without a live store.
//!
//! ```json
//! {
//!   "store": "corner-shop",
//!   "results": {
//!     "green tea": [ { "name": "Green tea 100g", "price": 3.0 } ]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use cartpick_foundation::{Catalog, Error, Listing, Query, Result};
use serde::{Deserialize, Serialize};

/// Recorded search results for one store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Store the results were recorded from.
    #[serde(default)]
    pub store: Option<String>,
    /// Result pages keyed by exact query text, in page order.
    #[serde(default)]
    pub results: BTreeMap<String, Vec<Listing>>,
}

impl Snapshot {
    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a price is negative or
    /// not finite.
    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(text).map_err(|e| Error::snapshot(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encodes the snapshot as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::snapshot(e.to_string()))
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::snapshot(format!(
                "failed to read '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_json(&text)
    }

    /// Records the result page for `query`.
    #[must_use]
    pub fn with_results(mut self, query: impl Into<String>, listings: Vec<Listing>) -> Self {
        self.results.insert(query.into(), listings);
        self
    }

    fn validate(&self) -> Result<()> {
        for (query, listings) in &self.results {
            for listing in listings {
                if !listing.price.is_finite() || listing.price < 0.0 {
                    return Err(Error::snapshot(format!(
                        "listing '{}' for query '{query}' has invalid price {}",
                        listing.name, listing.price
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A [`Catalog`] that replays a [`Snapshot`].
///
/// Searching for a query the snapshot never recorded shows an empty page.
#[derive(Clone, Debug, Default)]
pub struct SnapshotCatalog {
    snapshot: Snapshot,
    current: Vec<Listing>,
    history: Vec<Query>,
}

impl SnapshotCatalog {
    /// Creates a catalog over `snapshot`.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            current: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Store name, if the snapshot recorded one.
    #[must_use]
    pub fn store(&self) -> Option<&str> {
        self.snapshot.store.as_deref()
    }

    /// Every query searched so far, in order.
    #[must_use]
    pub fn history(&self) -> &[Query] {
        &self.history
    }
}

impl Catalog for SnapshotCatalog {
    type Product = Listing;

    fn search(&mut self, query: &Query) -> Result<()> {
        self.history.push(query.clone());
        match self.snapshot.results.get(query.as_str()) {
            Some(listings) => self.current.clone_from(listings),
            None => {
                tracing::debug!(query = %query, "no recorded results");
                self.current.clear();
            }
        }
        Ok(())
    }

    fn products(&mut self) -> Result<Vec<Listing>> {
        Ok(self.current.clone())
    }
}
