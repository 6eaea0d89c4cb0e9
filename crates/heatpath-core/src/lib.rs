//! **heatpath-core**: grid geometry and terrain weights.
//!
//! This crate provides the value types shared by the search engine and its
//! harness: `(row, col)` coordinates, unit-step directions, grid bounds and
//! the [`WeightGrid`] parsed from the canonical one-digit-per-cell format.

pub mod geom;
pub mod weights;

pub use geom::{Bounds, BoundsIter, Coord, Delta, DeltaError, Direction};
pub use weights::{ParseError, WALL, WeightGrid};
