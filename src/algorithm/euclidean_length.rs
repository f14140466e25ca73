//! Planar arc length.

use crate::geometry::{Geometry, LineString, MultiLineString};
use crate::sequence::Sequence;

/// XY arc length of a sequence of control points.
pub(crate) fn sequence_length(seq: &Sequence) -> f64 {
    seq.segments_xy()
        .map(|((x0, y0), (x1, y1))| (x1 - x0).hypot(y1 - y0))
        .sum()
}

/// Planar (XY) length.
pub trait EuclideanLength {
    /// The summed XY length of every segment.
    fn euclidean_length(&self) -> f64;
}

impl EuclideanLength for LineString {
    fn euclidean_length(&self) -> f64 {
        sequence_length(self.sequence())
    }
}

impl EuclideanLength for MultiLineString {
    fn euclidean_length(&self) -> f64 {
        self.line_strings()
            .iter()
            .map(EuclideanLength::euclidean_length)
            .sum()
    }
}

impl EuclideanLength for Geometry {
    /// Length of the linear parts; punctal and areal members contribute
    /// nothing.
    fn euclidean_length(&self) -> f64 {
        match self {
            Geometry::LineString(g) => g.euclidean_length(),
            Geometry::MultiLineString(g) => g.euclidean_length(),
            Geometry::GeometryCollection(g) => g
                .geometries()
                .iter()
                .map(EuclideanLength::euclidean_length)
                .sum(),
            _ => 0.0,
        }
    }
}
