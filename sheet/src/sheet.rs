use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::coord::{Coord, CoordParseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// Not an address or range this sheet can read.
    #[error("unrecognized coordinates: '{0}'")]
    UnrecognizedCoords(String),
    /// A well-formed address outside the sheet.
    #[error("range '{0}' is outside the sheet")]
    RangeOutOfBounds(String),
}

/// A non-empty run of cells along one row or one column, ordered from the
/// smaller coordinate to the larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: Coord,
    end: Coord,
}

impl Range {
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Coord {
        self.end
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Whether the range runs along a row. Single cells count as both.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.start.row == self.end.row
    }

    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_horizontal() {
            self.end.column - self.start.column + 1
        } else {
            self.end.row - self.start.row + 1
        }
    }

    /// Always false; ranges hold at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let start = self.start;
        let horizontal = self.is_horizontal();
        (0..self.len()).map(move |offset| {
            if horizontal {
                Coord::new(start.row, start.column + offset)
            } else {
                Coord::new(start.row + offset, start.column)
            }
        })
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

/// Contents taken by the last copy or cut, in range order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutBuffer {
    cells: Vec<Option<String>>,
    horizontal: bool,
}

impl CutBuffer {
    #[must_use]
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// A fixed-size grid of text cells with a single cut buffer.
#[derive(Debug, Clone)]
pub struct Spreadsheet {
    rows: usize,
    columns: usize,
    cells: BTreeMap<Coord, String>,
    cut_buffer: CutBuffer,
    dirty: bool,
}

impl Spreadsheet {
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: BTreeMap::new(),
            cut_buffer: CutBuffer::default(),
            dirty: false,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Changed since creation.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn cut_buffer(&self) -> &CutBuffer {
        &self.cut_buffer
    }

    fn contains(&self, coord: Coord) -> bool {
        (1..=self.rows).contains(&coord.row) && (1..=self.columns).contains(&coord.column)
    }

    /// Resolve `A1` or `A1:B1` against this sheet.
    pub fn create_range(&self, text: &str) -> Result<Range, SheetError> {
        let parse = |part: &str| {
            Coord::parse(part).map_err(|err| match err {
                CoordParseError::Syntax => SheetError::UnrecognizedCoords(text.to_string()),
                CoordParseError::Overflow => SheetError::RangeOutOfBounds(text.to_string()),
            })
        };

        let (first, second) = match text.split_once(':') {
            Some((first, second)) => (parse(first)?, parse(second)?),
            None => {
                let only = parse(text)?;
                (only, only)
            }
        };
        if first.row != second.row && first.column != second.column {
            return Err(SheetError::UnrecognizedCoords(text.to_string()));
        }
        if !self.contains(first) || !self.contains(second) {
            return Err(SheetError::RangeOutOfBounds(text.to_string()));
        }

        Ok(Range {
            start: first.min(second),
            end: first.max(second),
        })
    }

    #[must_use]
    pub fn content(&self, coord: Coord) -> Option<&str> {
        self.cells.get(&coord).map(String::as_str)
    }

    /// Contents of each cell of `range`, in order.
    pub fn contents<'a>(
        &'a self,
        range: &Range,
    ) -> impl Iterator<Item = (Coord, Option<&'a str>)> + use<'a> {
        range.cells().map(move |coord| (coord, self.content(coord)))
    }

    /// Write `content` into every cell of `range`. Empty text clears the cells.
    pub fn insert(&mut self, range: &Range, content: &str) {
        for coord in range.cells() {
            self.set(coord, (!content.is_empty()).then(|| content.to_string()));
        }
        self.dirty = true;
    }

    /// Replace the cut buffer with the contents of `range`.
    pub fn copy(&mut self, range: &Range) {
        self.cut_buffer = CutBuffer {
            cells: range
                .cells()
                .map(|coord| self.cells.get(&coord).cloned())
                .collect(),
            horizontal: range.is_horizontal(),
        };
        tracing::debug!(%range, cells = self.cut_buffer.len(), "Copied range");
    }

    /// Copy `range` into the cut buffer, then empty its cells.
    pub fn cut(&mut self, range: &Range) {
        self.copy(range);
        for coord in range.cells() {
            self.cells.remove(&coord);
        }
        self.dirty = true;
        tracing::debug!(%range, "Cut range");
    }

    /// Write the cut buffer into the sheet.
    ///
    /// A single-cell target receives the whole buffer, laid out in the
    /// direction it was copied and stopping at the sheet edge. A longer target
    /// is only written when its length matches the buffer. Returns how many
    /// cells were written.
    pub fn paste(&mut self, range: &Range) -> usize {
        if self.cut_buffer.is_empty() {
            return 0;
        }

        let targets: Vec<Coord> = if range.is_single() {
            let start = range.start();
            let horizontal = self.cut_buffer.horizontal;
            (0..self.cut_buffer.len())
                .map_while(|offset| {
                    if horizontal {
                        let column = start.column.checked_add(offset)?;
                        Some(Coord::new(start.row, column))
                    } else {
                        let row = start.row.checked_add(offset)?;
                        Some(Coord::new(row, start.column))
                    }
                })
                .take_while(|coord| self.contains(*coord))
                .collect()
        } else if range.len() == self.cut_buffer.len() {
            range.cells().collect()
        } else {
            tracing::debug!(%range, buffer = self.cut_buffer.len(), "Paste size mismatch");
            return 0;
        };

        let values = self.cut_buffer.cells.clone();
        for (coord, value) in targets.iter().zip(values) {
            self.set(*coord, value);
        }
        if !targets.is_empty() {
            self.dirty = true;
        }
        targets.len()
    }

    fn set(&mut self, coord: Coord, value: Option<String>) {
        match value {
            Some(value) => {
                self.cells.insert(coord, value);
            }
            None => {
                self.cells.remove(&coord);
            }
        }
    }
}
