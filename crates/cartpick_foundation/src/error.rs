//! Error types for the Cartpick system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Boxed error raised by a catalog adapter.
pub type CatalogSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for Cartpick operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the line being evaluated when this error passed through it.
    ///
    /// The first call sets the failing line; later calls (from enclosing
    /// combinators) push frames, so the stack is innermost first.
    #[must_use]
    pub fn within_line(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        match &mut self.context {
            Some(context) if context.line.is_some() => context.stack.push(line),
            Some(context) => context.line = Some(line),
            None => self.context = Some(ErrorContext::new().with_line(line)),
        }
        self
    }

    /// Creates an unknown strategy error.
    #[must_use]
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownStrategy(name.into()))
    }

    /// Creates a recursion depth error.
    #[must_use]
    pub fn depth_exceeded(limit: usize) -> Self {
        Self::new(ErrorKind::DepthExceeded { limit })
    }

    /// Wraps an error raised by a catalog adapter.
    #[must_use]
    pub fn catalog(source: impl Into<CatalogSource>) -> Self {
        Self::new(ErrorKind::Catalog(source.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(source))
    }

    /// Creates a snapshot decoding error.
    #[must_use]
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Snapshot(message.into()))
    }

    /// Returns true if this error came from the catalog adapter.
    #[must_use]
    pub fn is_catalog(&self) -> bool {
        matches!(self.kind, ErrorKind::Catalog(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io(source)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A flag token names no known strategy.
    #[error("no strategy with name '{0}'")]
    UnknownStrategy(String),

    /// Combinator recursion went deeper than the configured limit.
    #[error("strategy nesting deeper than {limit} levels")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// The catalog adapter failed; passed through untouched.
    #[error("catalog error: {0}")]
    Catalog(#[source] CatalogSource),

    /// Reading an input file failed.
    #[error("i/o error: {0}")]
    Io(#[source] std::io::Error),

    /// A catalog snapshot could not be decoded.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The mini-language line whose evaluation failed.
    pub line: Option<String>,
    /// Enclosing lines, innermost first; the last frame is the line the
    /// caller passed in.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing line.
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = &self.line {
            write!(f, "while evaluating '{line}'")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in '{frame}'")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for Cartpick operations.
pub type Result<T> = std::result::Result<T, Error>;
