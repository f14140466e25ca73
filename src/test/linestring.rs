use crate::datatypes::CoordinatesType;
use crate::geometry::LineString;
use crate::sequence::Sequence;

/// An XY sequence from interleaved floats.
pub(crate) fn xy_sequence(floats: &[f64]) -> Sequence {
    Sequence::new(floats.to_vec(), CoordinatesType::XY)
}

/// An unchecked XY LineString from interleaved floats.
pub(crate) fn line_string(floats: &[f64]) -> LineString {
    LineString::new_unchecked(xy_sequence(floats))
}
