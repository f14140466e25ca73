//! Fractional positions along a curve.

use crate::coord::Coord;
use crate::geometry::{LineString, Point};
use crate::sequence::Sequence;

/// Maps fractions of total arc length to positions on a curve.
///
/// Cumulative XY lengths are computed once; each lookup is a binary
/// search plus one linear interpolation, in X, Y, Z and M alike.
#[derive(Debug)]
pub struct LinearInterpolator<'a> {
    seq: &'a Sequence,
    cumulative: Vec<f64>,
}

impl<'a> LinearInterpolator<'a> {
    /// Precomputes the cumulative arc length of `seq`.
    pub fn new(seq: &'a Sequence) -> Self {
        let mut cumulative = Vec::with_capacity(seq.len());
        if !seq.is_empty() {
            cumulative.push(0.0);
        }
        let mut total = 0.0;
        for ((x0, y0), (x1, y1)) in seq.segments_xy() {
            total += (x1 - x0).hypot(y1 - y0);
            cumulative.push(total);
        }
        Self { seq, cumulative }
    }

    /// XY arc length of the whole curve.
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// The position at `fraction` of the total length.
    ///
    /// Fractions are clamped to [0, 1] and NaN maps to 0; the exact
    /// endpoints are returned at 0 and 1. `None` for the empty curve.
    pub fn position(&self, fraction: f64) -> Option<Coord> {
        if self.seq.is_empty() {
            return None;
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        if fraction == 0.0 {
            return Some(self.seq.coord(0));
        }
        if fraction == 1.0 {
            return Some(self.seq.coord(self.seq.len() - 1));
        }
        let total = self.total_length();
        if total == 0.0 {
            return Some(self.seq.coord(0));
        }

        let target = fraction * total;
        let i = self.cumulative.partition_point(|&length| length < target);
        // cumulative[0] is 0 < target, so 1 <= i < len and the span
        // around `target` has positive length.
        let span = self.cumulative[i] - self.cumulative[i - 1];
        let t = (target - self.cumulative[i - 1]) / span;
        Some(self.seq.coord(i - 1).lerp(&self.seq.coord(i), t))
    }
}

/// Interpolation along linear geometries.
pub trait LineInterpolatePoint {
    /// The interpolated point's type.
    type Output;

    /// The position at `fraction` (clamped to [0, 1]) of the arc length.
    fn line_interpolate_point(&self, fraction: f64) -> Self::Output;
}

impl LineInterpolatePoint for LineString {
    type Output = Point;

    fn line_interpolate_point(&self, fraction: f64) -> Point {
        match LinearInterpolator::new(self.sequence()).position(fraction) {
            Some(coord) => Point::new_unchecked(coord),
            None => Point::empty(self.coordinates_type()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::CoordinatesType;
    use crate::test::linestring::{line_string, xy_sequence};

    #[test]
    fn endpoints_are_exact() {
        let seq = xy_sequence(&[0.1, 0.2, 0.7, 0.8, 1.3, 0.2]);
        let interpolator = LinearInterpolator::new(&seq);
        assert_eq!(interpolator.position(0.0), Some(seq.coord(0)));
        assert_eq!(interpolator.position(1.0), Some(seq.coord(2)));
    }

    #[test]
    fn fractions_clamp_and_nan_maps_to_start() {
        let seq = xy_sequence(&[0.0, 0.0, 2.0, 0.0]);
        let interpolator = LinearInterpolator::new(&seq);
        assert_eq!(interpolator.position(-3.0), Some(seq.coord(0)));
        assert_eq!(interpolator.position(7.5), Some(seq.coord(1)));
        assert_eq!(interpolator.position(f64::NAN), Some(seq.coord(0)));
    }

    #[test]
    fn interior_fractions_interpolate() {
        let seq = xy_sequence(&[0.0, 0.0, 1.0, 0.0, 1.0, 3.0]);
        let interpolator = LinearInterpolator::new(&seq);
        assert_eq!(interpolator.total_length(), 4.0);
        // Half the length lands one unit up the second segment.
        assert_eq!(interpolator.position(0.5), Some(Coord::xy(1.0, 1.0)));
        assert_eq!(interpolator.position(0.125), Some(Coord::xy(0.5, 0.0)));
    }

    #[test]
    fn z_and_m_interpolate_linearly() {
        let seq = Sequence::from_coords(
            [
                Coord::xyzm(0.0, 0.0, 0.0, 100.0),
                Coord::xyzm(4.0, 0.0, 8.0, 300.0),
            ],
            CoordinatesType::XYZM,
        );
        let interpolator = LinearInterpolator::new(&seq);
        assert_eq!(
            interpolator.position(0.25),
            Some(Coord::xyzm(1.0, 0.0, 2.0, 150.0))
        );
    }

    #[test]
    fn zero_length_curve_returns_its_start() {
        let seq = xy_sequence(&[2.0, 2.0, 2.0, 2.0]);
        let interpolator = LinearInterpolator::new(&seq);
        assert_eq!(interpolator.position(0.5), Some(Coord::xy(2.0, 2.0)));
    }

    #[test]
    fn empty_curve_has_no_position() {
        let seq = Sequence::empty(CoordinatesType::XY);
        assert_eq!(LinearInterpolator::new(&seq).position(0.5), None);
        assert!(LineString::default().line_interpolate_point(0.5).is_empty());
    }

    #[test]
    fn single_point_curve() {
        let point = line_string(&[3.0, 4.0]).line_interpolate_point(0.7);
        assert_eq!(point.coord(), Some(Coord::xy(3.0, 4.0)));
    }
}
