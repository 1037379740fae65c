//! Shopping lists: one query line per line of text.

use std::fs;
use std::path::Path;

use cartpick_foundation::{Error, ErrorKind, Result};

/// Splits shopping-list text into query lines.
///
/// Trailing whitespace is stripped; leading whitespace belongs to the first
/// query and is kept. Blank lines and lines starting with `#` are skipped.
#[must_use]
pub fn parse_shopping_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim_start().is_empty() && !line.trim_start().starts_with('#'))
        .map(str::to_owned)
        .collect()
}

/// Reads a shopping-list file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_shopping_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read '{}': {e}", path.as_ref().display()),
        )))
    })?;
    Ok(parse_shopping_list(&text))
}
