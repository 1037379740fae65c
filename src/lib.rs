//! Cartpick - product selection over catalog searches
//!
//! This crate re-exports all layers of the Cartpick system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: cartpick_runtime     CLI, shopping-list sessions, snapshot catalogs
//! Layer 1: cartpick_strategy    Word matching, query lines, strategies
//! Layer 0: cartpick_foundation  Core types (Query, Product, Catalog, Error)
//! ```

pub use cartpick_foundation as foundation;
pub use cartpick_runtime as runtime;
pub use cartpick_strategy as strategy;
