//! Parser for query lines.
//!
//! ```text
//! line       := query_list ('|' flags)?
//! query_list := query (',' query)*
//! flags      := main_flag (',' list_flag (',' ignored)*)?
//! ```
//!
//! Only the first `|` separates queries from flags; any later `|` is part of
//! a flag token (and so makes it unrecognized). Queries and flag tokens are
//! kept verbatim, so `" fst"` is not a flag. Segments after the list flag are
//! never looked at.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use cartpick_foundation::{Query, Result};

use crate::flag::Flag;

/// A parsed query line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryLine {
    /// Alternative queries, in textual order. Parsed lines have at least one.
    pub alternatives: Vec<Query>,
    /// The flag that decides dispatch. Defaults to `ask`.
    pub main: Flag,
    /// The flag combinators hand to each alternative. Defaults to `ask`.
    pub list: Flag,
}

impl QueryLine {
    /// Parses a query line.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStrategy` for an unrecognized main or list flag.
    pub fn parse(line: &str) -> Result<Self> {
        LineParser::new(line).parse()
    }

    /// The line a combinator evaluates for one alternative:
    /// `"<alternative>|<flag>"`, whose own list flag is the default.
    #[must_use]
    pub fn for_alternative(alternative: &Query, flag: Flag) -> Self {
        Self {
            alternatives: vec![alternative.clone()],
            main: flag,
            list: Flag::default(),
        }
    }

    /// The query a leaf runs against, if the line has any.
    #[must_use]
    pub fn first_alternative(&self) -> Option<&Query> {
        self.alternatives.first()
    }
}

impl fmt::Display for QueryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(alternative.as_str())?;
        }
        write!(f, "|{}", self.main)?;
        if self.list != Flag::default() {
            write!(f, ",{}", self.list)?;
        }
        Ok(())
    }
}

/// Recursive-descent parser over one line.
struct LineParser<'src> {
    chars: Peekable<Chars<'src>>,
}

impl<'src> LineParser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<QueryLine> {
        let alternatives = self.parse_query_list();

        let (main, list) = if self.eat('|') {
            self.parse_flags()?
        } else {
            (Flag::default(), Flag::default())
        };

        Ok(QueryLine {
            alternatives,
            main,
            list,
        })
    }

    fn parse_query_list(&mut self) -> Vec<Query> {
        let mut alternatives = vec![self.parse_query()];
        while self.eat(',') {
            alternatives.push(self.parse_query());
        }
        alternatives
    }

    fn parse_query(&mut self) -> Query {
        Query::new(self.take_until(&[',', '|']))
    }

    fn parse_flags(&mut self) -> Result<(Flag, Flag)> {
        let main = self.parse_flag()?;
        let list = if self.eat(',') {
            self.parse_flag()?
        } else {
            Flag::default()
        };

        if self.eat(',') {
            let ignored: String = self.chars.by_ref().collect();
            tracing::debug!(ignored = %ignored, "ignoring flags after the list flag");
        }

        Ok((main, list))
    }

    fn parse_flag(&mut self) -> Result<Flag> {
        self.take_until(&[',']).parse()
    }

    /// Consumes characters up to (not including) any of `stops`.
    fn take_until(&mut self, stops: &[char]) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if stops.contains(&ch) {
                break;
            }
            text.push(ch);
            self.chars.next();
        }
        text
    }

    fn eat(&mut self, expected: char) -> bool {
        self.chars.next_if_eq(&expected).is_some()
    }
}
