//! The LineString geometry type.

use crate::coord::Coord;
use crate::datatypes::CoordinatesType;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::validation::{check_distinct_points, check_sequence_finite, is_simple_sequence};

/// A curve through an ordered sequence of control points.
///
/// Empty iff its sequence holds no points. A validated non-empty
/// LineString has finite XY values and at least two distinct positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    seq: Sequence,
}

impl LineString {
    /// Builds a validated LineString from a sequence.
    pub fn try_new(seq: Sequence) -> Result<Self> {
        let line_string = Self::new_unchecked(seq);
        line_string.validate()?;
        Ok(line_string)
    }

    /// Wraps a sequence without validating it.
    pub fn new_unchecked(seq: Sequence) -> Self {
        Self { seq }
    }

    /// The empty LineString of the given layout.
    pub fn empty(coordinates_type: CoordinatesType) -> Self {
        Self {
            seq: Sequence::empty(coordinates_type),
        }
    }

    /// Re-runs the validity rules on this value.
    pub fn validate(&self) -> Result<()> {
        check_sequence_finite(&self.seq)?;
        if !self.seq.is_empty() {
            check_distinct_points(&self.seq)?;
        }
        Ok(())
    }

    /// The control-point sequence.
    pub fn sequence(&self) -> &Sequence {
        &self.seq
    }

    /// Number of control points.
    pub fn num_points(&self) -> usize {
        self.seq.len()
    }

    /// The `i`-th control point.
    ///
    /// # Panics
    ///
    /// Panics when `i` is out of range.
    pub fn point_n(&self, i: usize) -> Coord {
        self.seq.coord(i)
    }

    /// True iff the curve has no control points.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// True iff the curve is non-empty and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.seq.is_closed()
    }

    /// True iff the curve never revisits a position, except that a closed
    /// curve shares its start/end point.
    pub fn is_simple(&self) -> bool {
        is_simple_sequence(&self.seq).is_ok()
    }

    /// The layout shared by the control points.
    pub fn coordinates_type(&self) -> CoordinatesType {
        self.seq.coordinates_type()
    }

    /// The bounding box of the control points.
    pub fn envelope(&self) -> Envelope {
        self.seq.envelope()
    }

    /// A copy with the control-point order reversed.
    pub fn reversed(&self) -> Self {
        Self {
            seq: self.seq.reversed(),
        }
    }

    /// A copy coerced to `coordinates_type`.
    pub fn forced_coordinates_type(&self, coordinates_type: CoordinatesType) -> Self {
        Self {
            seq: self.seq.forced(coordinates_type),
        }
    }
}

impl Default for LineString {
    /// The empty XY LineString.
    fn default() -> Self {
        Self::empty(CoordinatesType::XY)
    }
}
