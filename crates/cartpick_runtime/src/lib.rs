//! CLI, shopping-list sessions, and snapshot catalogs for Cartpick.
//!
//! This crate provides:
//! - [`SnapshotCatalog`] - A catalog replaying recorded search results
//! - [`read_shopping_list`] - Query lines from a file
//! - [`Session`] - Runs a shopping list through the strategy engine
//! - [`Basket`] - What the session selected
//! - [`TerminalResume`] - Manual picks confirmed at the terminal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod basket;
mod prompt;
mod session;
mod shopping_list;
mod snapshot;

pub use basket::{Basket, BasketEntry};
pub use prompt::TerminalResume;
pub use session::Session;
pub use shopping_list::{parse_shopping_list, read_shopping_list};
pub use snapshot::{Snapshot, SnapshotCatalog};
