//! Core types, catalog capabilities, and errors for Cartpick.
//!
//! This crate provides:
//! - [`Query`] - An immutable search term sent to a catalog
//! - [`Product`] and [`Catalog`] - The capabilities a store adapter supplies
//! - [`Listing`] - A plain owned product record
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod error;
pub mod query;

pub use catalog::{Catalog, Listing, Product};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use query::Query;
