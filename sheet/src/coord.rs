use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

static COORD_RE: OnceLock<Regex> = OnceLock::new();

fn coord_re() -> &'static Regex {
    COORD_RE.get_or_init(|| Regex::new(r"^([A-Z]+)([0-9]+)$").expect("coord pattern is valid"))
}

/// A 1-based cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

/// Why a coordinate could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoordParseError {
    /// Not `LETTERS DIGITS`, or row 0.
    Syntax,
    /// Well formed but too large to represent.
    Overflow,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Parse `A1` notation (case-insensitive). Bounds are not checked.
    pub(crate) fn parse(text: &str) -> Result<Self, CoordParseError> {
        let upper = text.trim().to_ascii_uppercase();
        let caps = coord_re().captures(&upper).ok_or(CoordParseError::Syntax)?;

        let column = caps[1]
            .bytes()
            .try_fold(0usize, |acc, letter| {
                acc.checked_mul(26)?
                    .checked_add(usize::from(letter - b'A') + 1)
            })
            .ok_or(CoordParseError::Overflow)?;
        let row = caps[2]
            .parse::<usize>()
            .map_err(|_| CoordParseError::Overflow)?;
        if row == 0 {
            return Err(CoordParseError::Syntax);
        }
        Ok(Self { row, column })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_name(self.column), self.row)
    }
}

/// Column letters for a 1-based column index: 1 → `A`, 26 → `Z`, 27 → `AA`.
#[must_use]
pub fn column_name(mut column: usize) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push(b'A' + rem as u8);
        column = (column - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
