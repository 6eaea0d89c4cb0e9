//! Terrain weights parsed from text.
//!
//! A [`WeightGrid`] stores one terrain cost per cell, or `None` for an
//! impassable cell. The text format has one line per row and one character
//! per cell: digits `0`-`9` are costs and `#` is a wall.

use std::fmt;

use crate::geom::{Bounds, Coord};

/// Character used for impassable cells.
pub const WALL: char = '#';

/// A rectangular grid of terrain costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightGrid {
    cells: Vec<Option<u32>>,
    bounds: Bounds,
}

impl WeightGrid {
    /// A grid where every cell has cost `cost`.
    pub fn filled(rows: i32, cols: i32, cost: u32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![Some(cost); bounds.len()],
            bounds,
        }
    }

    /// Build a grid from explicit rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Option<u32>>>) -> Result<Self, ParseError> {
        let Some(width) = rows.first().map(Vec::len) else {
            return Err(ParseError::Empty);
        };
        if width == 0 {
            return Err(ParseError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::InconsistentWidth {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            bounds: Bounds::new(rows.len() as i32, width as i32),
            cells,
        })
    }

    /// Parse the canonical text format.
    ///
    /// Whitespace around the whole text is trimmed and `\r` is ignored, so
    /// CRLF input parses the same as LF input.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut rows = Vec::new();
        for (r, line) in s.trim().lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    WALL => None,
                    _ => match ch.to_digit(10) {
                        Some(d) => Some(d),
                        None => {
                            return Err(ParseError::InvalidCell {
                                ch,
                                at: Coord::new(r as i32, c as i32),
                            });
                        }
                    },
                };
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// The grid extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Terrain cost at `c`. `None` if `c` is out of bounds or a wall.
    #[inline]
    pub fn cost(&self, c: Coord) -> Option<u32> {
        self.bounds.index(c).and_then(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and passable.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.cost(c).is_some()
    }

    /// Overwrite the cell at `c`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, c: Coord, cost: Option<u32>) {
        if let Some(i) = self.bounds.index(c) {
            self.cells[i] = cost;
        }
    }

    /// Iterate over `(coord, cost)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<u32>)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for WeightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols() {
                match self.cost(Coord::new(r, c)) {
                    // Costs above 9 have no single-character form.
                    Some(w) => write!(f, "{}", char::from_digit(w, 10).unwrap_or('+'))?,
                    None => write!(f, "{WALL}")?,
                }
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a weight grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no cells.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither a digit nor a wall.
    InvalidCell { ch: char, at: Coord },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCell { ch, at } => {
                write!(f, "grid contains invalid cell \u{201c}{ch}\u{201d} at {at}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
