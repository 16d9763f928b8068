//! Indentation measurement
//!
//! Converts the leading whitespace of one physical line into a nesting
//! level. An indentation unit is either one tab or one pair of spaces,
//! and a line must use only one kind of unit.

use wingez_error::{LexicalError, Result};

/// Indentation of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation<'a> {
    /// Number of indentation units consumed
    pub level: u32,
    /// Number of leading characters consumed
    pub width: usize,
    /// The line with its indentation units stripped, otherwise untouched
    pub remainder: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Tab,
    SpacePair,
}

impl Unit {
    fn len(self) -> usize {
        match self {
            Unit::Tab => 1,
            Unit::SpacePair => 2,
        }
    }
}

/// Measures the indentation of `line`.
///
/// Errors are reported on line 1 with the column of the offending
/// character; callers that know the real line number relocate them
/// with [`LexicalError::at_line`].
pub fn measure(line: &str) -> Result<Indentation<'_>> {
    let bytes = line.as_bytes();
    let mut level = 0u32;
    let mut pos = 0usize;
    let mut kind: Option<Unit> = None;

    loop {
        let unit = match (bytes.get(pos), bytes.get(pos + 1)) {
            (Some(b'\t'), _) => Unit::Tab,
            (Some(b' '), Some(b' ')) => Unit::SpacePair,
            (Some(b' '), Some(b'\t')) => {
                return Err(mixed_units(pos));
            }
            (Some(b' '), _) => {
                return Err(LexicalError::invalid_indentation(
                    1,
                    pos as u32 + 1,
                    "single leading space is not a valid indentation unit",
                ));
            }
            _ => break,
        };

        match kind {
            Some(previous) if previous != unit => return Err(mixed_units(pos)),
            _ => kind = Some(unit),
        }

        level += 1;
        pos += unit.len();
    }

    // Only ASCII whitespace was consumed, so `pos` is a char boundary
    Ok(Indentation {
        level,
        width: pos,
        remainder: &line[pos..],
    })
}

fn mixed_units(pos: usize) -> LexicalError {
    LexicalError::invalid_indentation(
        1,
        pos as u32 + 1,
        "cannot mix tabs and spaces in indentation",
    )
}
