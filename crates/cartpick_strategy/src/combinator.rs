//! Combinators over alternative queries.
//!
//! A combinator evaluates each alternative as its own line,
//! `"<alternative>|<list flag>"`, through a caller-supplied evaluator (the
//! engine passes itself), then combines the results.

use cartpick_foundation::{Product, Query, Result};

use crate::flag::Flag;
use crate::language::QueryLine;
use crate::leaf::min_price_of_many;

/// A strategy that composes the results of other strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Try alternatives in order; the first non-empty result wins.
    FallbackChain,
    /// Cheapest product across every alternative's result.
    MinAcrossAlternatives,
}

impl Combinator {
    /// Combinator name, for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Combinator::FallbackChain => "fallback_chain",
            Combinator::MinAcrossAlternatives => "min_across_alternatives",
        }
    }

    /// Runs this combinator.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error `evaluate` produces.
    pub fn combine<P, F>(self, alternatives: &[Query], list: Flag, evaluate: F) -> Result<Vec<P>>
    where
        P: Product,
        F: FnMut(&QueryLine) -> Result<Vec<P>>,
    {
        match self {
            Combinator::FallbackChain => fallback_chain(alternatives, list, evaluate),
            Combinator::MinAcrossAlternatives => {
                min_across_alternatives(alternatives, list, evaluate)
            }
        }
    }
}

/// Returns the first non-empty result, evaluating alternatives in order.
///
/// Later alternatives are not evaluated once one succeeds.
///
/// # Errors
///
/// Returns the first error `evaluate` produces.
pub fn fallback_chain<P, F>(alternatives: &[Query], list: Flag, mut evaluate: F) -> Result<Vec<P>>
where
    F: FnMut(&QueryLine) -> Result<Vec<P>>,
{
    for alternative in alternatives {
        let products = evaluate(&QueryLine::for_alternative(alternative, list))?;
        if !products.is_empty() {
            tracing::debug!(alternative = %alternative, selected = products.len(), "fallback chain hit");
            return Ok(products);
        }
        tracing::debug!(alternative = %alternative, "fallback chain miss");
    }
    Ok(Vec::new())
}

/// Evaluates every alternative, flattens the results in order, and keeps the
/// cheapest product (earliest wins ties).
///
/// # Errors
///
/// Returns the first error `evaluate` produces.
pub fn min_across_alternatives<P, F>(
    alternatives: &[Query],
    list: Flag,
    mut evaluate: F,
) -> Result<Vec<P>>
where
    P: Product,
    F: FnMut(&QueryLine) -> Result<Vec<P>>,
{
    let mut pooled = Vec::new();
    for alternative in alternatives {
        pooled.extend(evaluate(&QueryLine::for_alternative(alternative, list))?);
    }
    tracing::debug!(pooled = pooled.len(), "minimum across alternatives");
    Ok(min_price_of_many(pooled))
}
