//! Integration tests for the catalog capability and core values.

use cartpick_foundation::{Catalog, Error, Listing, Product, Query, Result};

/// A catalog whose store is down.
struct Offline;

impl Catalog for Offline {
    type Product = Listing;

    fn search(&mut self, _query: &Query) -> Result<()> {
        Err(Error::catalog("connection refused"))
    }

    fn products(&mut self) -> Result<Vec<Listing>> {
        Ok(Vec::new())
    }
}

#[test]
fn listing_exposes_name_and_price() {
    let listing = Listing::new("Milk 3.2% 1L", 1.25);
    assert_eq!(listing.name(), "Milk 3.2% 1L");
    assert!((listing.price() - 1.25).abs() < f64::EPSILON);
}

#[test]
fn query_keeps_text_verbatim() {
    let query = Query::from(" coffee maker ");
    assert_eq!(query.as_str(), " coffee maker ");
    assert_eq!(query, Query::new(String::from(" coffee maker ")));
    assert!(!query.is_blank());
}

#[test]
fn catalog_errors_surface_to_callers() {
    let mut catalog = Offline;
    let err = catalog.search(&Query::new("tea")).unwrap_err();
    assert!(err.is_catalog());
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn listing_serde_round_trip() {
    let listing = Listing::new("Green tea 100g", 3.0);
    let json = serde_json::to_string(&listing).unwrap();
    assert_eq!(json, r#"{"name":"Green tea 100g","price":3.0}"#);
    let back: Listing = serde_json::from_str(&json).unwrap();
    assert_eq!(back, listing);
}
