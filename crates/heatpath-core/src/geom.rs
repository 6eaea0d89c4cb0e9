//! Geometry primitives: [`Coord`], [`Delta`], [`Direction`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards and columns grow
//! to the right, so `North` is `row - 1` and `East` is `col + 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid position. Equality is structural.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a new coordinate shifted by (`d_row`, `d_col`).
    #[inline]
    pub const fn delta(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Step one cell in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.delta();
        self.delta(d.row, d.col)
    }

    /// Whether both components lie in `[0, rows)` and `[0, cols)`.
    #[inline]
    pub const fn in_bounds(self, rows: i32, cols: i32) -> bool {
        self.row >= 0 && self.row < rows && self.col >= 0 && self.col < cols
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub const fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

impl Add<Delta> for Coord {
    type Output = Coord;
    #[inline]
    fn add(self, rhs: Delta) -> Coord {
        self.delta(rhs.row, rhs.col)
    }
}

impl Sub for Coord {
    type Output = (i32, i32);
    /// Raw component difference; use [`Delta::between`] for a validated step.
    #[inline]
    fn sub(self, rhs: Coord) -> (i32, i32) {
        (self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Delta / Direction
// ---------------------------------------------------------------------------

/// A unit step between two orthogonally adjacent cells.
///
/// Each component is in `{-1, 0, 1}`. A `Delta` built through
/// [`Delta::new`] may still be diagonal or zero; [`Direction::try_from`]
/// rejects those.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delta {
    pub row: i32,
    pub col: i32,
}

impl Delta {
    /// Create a delta, rejecting components outside `{-1, 0, 1}`.
    pub fn new(row: i32, col: i32) -> Result<Self, DeltaError> {
        if !(-1..=1).contains(&row) || !(-1..=1).contains(&col) {
            return Err(DeltaError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// The delta that moves from `from` to `to`.
    pub fn between(from: Coord, to: Coord) -> Result<Self, DeltaError> {
        let (row, col) = to - from;
        Self::new(row, col)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The unit step for this direction.
    #[inline]
    pub const fn delta(self) -> Delta {
        match self {
            Self::North => Delta { row: -1, col: 0 },
            Self::East => Delta { row: 0, col: 1 },
            Self::South => Delta { row: 1, col: 0 },
            Self::West => Delta { row: 0, col: -1 },
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Whether movement in this direction changes the row.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Single-character arrow used by renderers.
    pub const fn arrow(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => 'v',
            Self::West => '<',
        }
    }
}

impl TryFrom<Delta> for Direction {
    type Error = DeltaError;

    /// Classify a delta by sign inspection.
    fn try_from(d: Delta) -> Result<Self, DeltaError> {
        match (d.row.signum(), d.col.signum()) {
            (0, 0) => Err(DeltaError::Zero),
            (-1, 0) => Ok(Self::North),
            (1, 0) => Ok(Self::South),
            (0, -1) => Ok(Self::West),
            (0, 1) => Ok(Self::East),
            _ => Err(DeltaError::Diagonal {
                row: d.row,
                col: d.col,
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        };
        f.write_str(s)
    }
}

/// A delta that cannot be classified as a single orthogonal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaError {
    /// Both components are non-zero.
    Diagonal { row: i32, col: i32 },
    /// Both components are zero.
    Zero,
    /// A component lies outside `{-1, 0, 1}`.
    OutOfRange { row: i32, col: i32 },
}

impl fmt::Display for DeltaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagonal { row, col } => {
                write!(f, "invalid delta [{row},{col}]: diagonal moves are not allowed")
            }
            Self::Zero => write!(f, "invalid delta [0,0]: no movement"),
            Self::OutOfRange { row, col } => {
                write!(f, "invalid delta [{row},{col}]: components must be -1, 0 or 1")
            }
        }
    }
}

impl std::error::Error for DeltaError {}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a grid: rows `[0, rows)` by columns `[0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create bounds; negative sizes are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds contain no cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.in_bounds(self.rows, self.cols)
    }

    /// Top-left cell.
    #[inline]
    pub fn first(self) -> Coord {
        Coord::ZERO
    }

    /// Bottom-right cell.
    #[inline]
    pub fn last(self) -> Coord {
        Coord::new(self.rows - 1, self.cols - 1)
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Coord::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coord,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return (0, Some(0));
        }
        let w = self.bounds.cols as usize;
        let remaining_in_row = (self.bounds.cols - self.cur.col) as usize;
        let remaining_rows = (self.bounds.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_equality_is_structural() {
        assert_eq!(Coord::new(2, 3), Coord::new(2, 3));
        assert_ne!(Coord::new(2, 3), Coord::new(3, 2));
    }

    #[test]
    fn delta_does_not_mutate() {
        let a = Coord::new(1, 1);
        let b = a.delta(-1, 2);
        assert_eq!(a, Coord::new(1, 1));
        assert_eq!(b, Coord::new(0, 3));
    }

    #[test]
    fn in_bounds_is_half_open() {
        assert!(Coord::new(0, 0).in_bounds(2, 3));
        assert!(Coord::new(1, 2).in_bounds(2, 3));
        assert!(!Coord::new(2, 0).in_bounds(2, 3));
        assert!(!Coord::new(0, 3).in_bounds(2, 3));
        assert!(!Coord::new(-1, 0).in_bounds(2, 3));
    }

    #[test]
    fn classify_by_sign() {
        let dir = |r, c| Direction::try_from(Delta::new(r, c).unwrap());
        assert_eq!(dir(-1, 0), Ok(Direction::North));
        assert_eq!(dir(1, 0), Ok(Direction::South));
        assert_eq!(dir(0, 1), Ok(Direction::East));
        assert_eq!(dir(0, -1), Ok(Direction::West));
    }

    #[test]
    fn classify_rejects_diagonal_and_zero() {
        let d = Delta::new(1, -1).unwrap();
        assert_eq!(
            Direction::try_from(d),
            Err(DeltaError::Diagonal { row: 1, col: -1 })
        );
        let z = Delta::new(0, 0).unwrap();
        assert_eq!(Direction::try_from(z), Err(DeltaError::Zero));
    }

    #[test]
    fn delta_rejects_long_steps() {
        assert_eq!(
            Delta::new(2, 0),
            Err(DeltaError::OutOfRange { row: 2, col: 0 })
        );
        assert!(Delta::between(Coord::new(0, 0), Coord::new(0, 2)).is_err());
    }

    #[test]
    fn direction_round_trip_through_delta() {
        for dir in Direction::ALL {
            let c = Coord::new(5, 5);
            let d = Delta::between(c, c.step(dir)).unwrap();
            assert_eq!(Direction::try_from(d), Ok(dir));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(3, 4)), 7);
        assert_eq!(Coord::new(3, 4).manhattan(Coord::new(0, 0)), 7);
    }

    #[test]
    fn bounds_index_round_trip() {
        let b = Bounds::new(3, 4);
        assert_eq!(b.len(), 12);
        assert_eq!(b.index(Coord::new(2, 1)), Some(9));
        assert_eq!(b.coord(9), Coord::new(2, 1));
        assert_eq!(b.index(Coord::new(3, 0)), None);
        assert_eq!(b.last(), Coord::new(2, 3));
    }

    #[test]
    fn bounds_iter_row_major() {
        let b = Bounds::new(2, 3);
        let cells: Vec<_> = b.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(b.iter().len(), 6);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[3], Coord::new(1, 0));
        assert_eq!(cells[5], Coord::new(1, 2));
    }

    #[test]
    fn empty_bounds_iter() {
        let b = Bounds::new(0, 5);
        assert!(b.is_empty());
        assert_eq!(b.iter().count(), 0);
    }
}
