//! The selections a session has made.

use std::fmt;

use cartpick_foundation::Product;

/// The products one query line selected.
#[derive(Clone, Debug, PartialEq)]
pub struct BasketEntry<P> {
    /// The query line as written in the shopping list.
    pub line: String,
    /// Selected products; empty when nothing matched or the pick was manual.
    pub products: Vec<P>,
}

/// Selected products, grouped by the line that selected them.
#[derive(Clone, Debug, PartialEq)]
pub struct Basket<P> {
    entries: Vec<BasketEntry<P>>,
}

impl<P> Default for Basket<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<P: Product> Basket<P> {
    /// Creates an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records what `line` selected.
    pub fn add(&mut self, line: impl Into<String>, products: Vec<P>) {
        self.entries.push(BasketEntry {
            line: line.into(),
            products,
        });
    }

    /// Every entry, in shopping-list order.
    #[must_use]
    pub fn entries(&self) -> &[BasketEntry<P>] {
        &self.entries
    }

    /// Every selected product, in shopping-list order.
    pub fn products(&self) -> impl Iterator<Item = &P> {
        self.entries.iter().flat_map(|entry| entry.products.iter())
    }

    /// Lines that selected nothing.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.products.is_empty())
            .map(|entry| entry.line.as_str())
    }

    /// Sum of selected prices.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.products().map(Product::price).sum()
    }

    /// Number of selected products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products().count()
    }

    /// Returns true if nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: Product> fmt::Display for Basket<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry.line)?;
            if entry.products.is_empty() {
                writeln!(f, "  (nothing selected)")?;
            }
            for product in &entry.products {
                writeln!(f, "  {:>10.2}  {}", product.price(), product.name())?;
            }
        }
        write!(f, "total: {:.2} ({} items)", self.total(), self.len())
    }
}
