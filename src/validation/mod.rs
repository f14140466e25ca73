//! The per-geometry-type rule engine.
//!
//! Validation is a pure read-only pass: every call allocates its own
//! spatial index and scratch state, reports the *first* rule violation it
//! finds as a [`ValidationError`](crate::error::ValidationError), and
//! returns. The entry points live on the geometry types themselves
//! (`validate`, `try_new`); this module holds the rules.

pub(crate) mod graph;
mod is_simple;
mod multipolygon;
mod polygon;

pub(crate) use is_simple::is_simple_sequence;
pub(crate) use multipolygon::validate_multi_polygon;
pub(crate) use polygon::validate_polygon;

use crate::coord::Coord;
use crate::error::{Result, ValidationError};
use crate::sequence::Sequence;

/// X and Y must be finite; Z and M are carried verbatim.
pub(crate) fn check_coord_finite(coord: &Coord, index: usize) -> Result<()> {
    if coord.x.is_nan() || coord.y.is_nan() {
        return Err(ValidationError::NaNCoord { index });
    }
    if coord.x.is_infinite() || coord.y.is_infinite() {
        return Err(ValidationError::InfCoord { index });
    }
    Ok(())
}

pub(crate) fn check_sequence_finite(seq: &Sequence) -> Result<()> {
    for (index, coord) in seq.iter().enumerate() {
        check_coord_finite(&coord, index)?;
    }
    Ok(())
}

/// A non-empty curve must span at least two distinct positions.
pub(crate) fn check_distinct_points(seq: &Sequence) -> Result<()> {
    let first = seq.xy(0);
    if seq.iter_xy().any(|position| position != first) {
        Ok(())
    } else {
        Err(ValidationError::TooFewPoints)
    }
}
