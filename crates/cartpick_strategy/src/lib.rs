//! Query-strategy engine for Cartpick.
//!
//! This crate decides which products from a catalog search an outer caller
//! should act on. Each request is a one-line mini-language such as
//! `"espresso machine,coffee maker|fbc,fst"`.
//!
//! # Architecture
//!
//! ```text
//! "red shoes,blue shoes|mlt,all"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LINE PARSER     │  → QueryLine { ["red shoes", "blue shoes"], mlt, all }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISPATCH        │  → combinator (fbc, mlt) or leaf (fst, all, ask, min, max)
//! └─────────────────┘
//!          │  combinators re-enter with "<alternative>|<list flag>"
//!          ▼
//! ┌─────────────────┐
//! │ SEARCH + WORD   │  → catalog.search, catalog.products, keep word matches
//! │ FILTER          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISAMBIGUATE    │  → 0 → [], 1 → [p], many → leaf reduction
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`word_match`] - Bag-of-words containment between a query and a product name
//! - [`flag`] - The closed set of strategy flags
//! - [`language`] - Mini-language line parser
//! - [`builder`] - Search, filter, and count-branch pipeline around a disambiguator
//! - [`leaf`] - Terminal selection policies
//! - [`combinator`] - Fallback chain and minimum across alternatives
//! - [`resume`] - The manual-pick synchronization capability
//! - [`config`] - Engine configuration
//! - [`engine`] - Interpreter tying it all together

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod combinator;
pub mod config;
pub mod engine;
pub mod flag;
pub mod language;
pub mod leaf;
pub mod resume;
pub mod word_match;

// Re-export main types for convenience
pub use builder::FilteredStrategy;
pub use combinator::Combinator;
pub use config::EngineConfig;
pub use engine::StrategyEngine;
pub use flag::{Flag, FlagKind};
pub use language::QueryLine;
pub use leaf::Leaf;
pub use resume::{ImmediateResume, ManualResume};
pub use word_match::{QueryWords, matches};
