//! Loading of outline documents from disk.
//!
//! Reading the document is the only fallible part of getting from a file to
//! an entry tree; every line-level anomaly is absorbed by the parser itself.

use std::fs;

use crate::error::{Error, Result};
use crate::outline::{parse_outline, Outline};

/// Reads and parses the outline document at `path`.
///
/// # Errors
///
/// Returns an error if the document cannot be read, or if it parses to an
/// outline with no entries at all (an empty launcher session is useless).
pub fn load_outline(path: &str) -> Result<Outline> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io_error("outline".to_string(), path.to_string(), e))?;

    let outline = parse_outline(&text);

    if outline.root.children.is_empty() {
        return Err(Error::empty_outline(path.to_string()));
    }

    Ok(outline)
}
