//! Strategy flags.
//!
//! Flags are the short tokens after `|` in a query line. Each names either a
//! leaf strategy or a combinator.

use std::fmt;
use std::str::FromStr;

use cartpick_foundation::Error;

use crate::combinator::Combinator;
use crate::leaf::Leaf;

/// A recognized strategy flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Flag {
    /// `fst` - the first matching product
    First,
    /// `all` - every matching product
    All,
    /// `ask` - manual pick
    #[default]
    Ask,
    /// `min` - the cheapest matching product
    MinPrice,
    /// `max` - the most expensive matching product
    MaxPrice,
    /// `fbc` - first alternative that selects anything
    FallbackChain,
    /// `mlt` - cheapest product across all alternatives
    MinAcrossAlternatives,
}

/// What a flag dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagKind {
    /// Runs against the first alternative only.
    Leaf(Leaf),
    /// Runs over every alternative.
    Combinator(Combinator),
}

impl Flag {
    /// Every flag, in token-table order.
    pub const ALL: [Flag; 7] = [
        Flag::First,
        Flag::All,
        Flag::Ask,
        Flag::MinPrice,
        Flag::MaxPrice,
        Flag::FallbackChain,
        Flag::MinAcrossAlternatives,
    ];

    /// Looks up a flag by its token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fst" => Some(Flag::First),
            "all" => Some(Flag::All),
            "ask" => Some(Flag::Ask),
            "min" => Some(Flag::MinPrice),
            "max" => Some(Flag::MaxPrice),
            "fbc" => Some(Flag::FallbackChain),
            "mlt" => Some(Flag::MinAcrossAlternatives),
            _ => None,
        }
    }

    /// The mini-language token for this flag.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Flag::First => "fst",
            Flag::All => "all",
            Flag::Ask => "ask",
            Flag::MinPrice => "min",
            Flag::MaxPrice => "max",
            Flag::FallbackChain => "fbc",
            Flag::MinAcrossAlternatives => "mlt",
        }
    }

    /// Splits flags into leaves and combinators.
    #[must_use]
    pub fn kind(self) -> FlagKind {
        match self {
            Flag::First => FlagKind::Leaf(Leaf::First),
            Flag::All => FlagKind::Leaf(Leaf::All),
            Flag::Ask => FlagKind::Leaf(Leaf::Ask),
            Flag::MinPrice => FlagKind::Leaf(Leaf::MinPrice),
            Flag::MaxPrice => FlagKind::Leaf(Leaf::MaxPrice),
            Flag::FallbackChain => FlagKind::Combinator(Combinator::FallbackChain),
            Flag::MinAcrossAlternatives => {
                FlagKind::Combinator(Combinator::MinAcrossAlternatives)
            }
        }
    }

    /// Returns true for `fbc` and `mlt`.
    #[must_use]
    pub fn is_combinator(self) -> bool {
        matches!(self.kind(), FlagKind::Combinator(_))
    }
}

impl FromStr for Flag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::from_token(s).ok_or_else(|| Error::unknown_strategy(s))
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
