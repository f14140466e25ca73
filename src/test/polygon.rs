use crate::geometry::{LineString, Polygon};
use crate::test::linestring::line_string;

/// The closed counter-clockwise ring of an axis-aligned square.
pub(crate) fn square_ring(x: f64, y: f64, side: f64) -> LineString {
    line_string(&[
        x,
        y,
        x + side,
        y,
        x + side,
        y + side,
        x,
        y + side,
        x,
        y,
    ])
}

/// An unchecked axis-aligned square polygon.
pub(crate) fn square(x: f64, y: f64, side: f64) -> Polygon {
    Polygon::new_unchecked(vec![square_ring(x, y, side)])
}
