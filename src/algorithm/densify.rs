//! Segment densification.

use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::sequence::Sequence;

/// Inserts evenly spaced points so that no two consecutive control
/// points lie farther apart than `max_distance`.
///
/// Inserted points are linearly interpolated in X, Y, Z and M. The
/// output keeps every original point, in order.
///
/// ```
/// use geo_features::algorithm::Densify;
/// use geo_features::{CoordinatesType, LineString, Sequence};
///
/// let line = LineString::new_unchecked(Sequence::new(
///     vec![0.0, 0.0, 3.0, 0.0],
///     CoordinatesType::XY,
/// ));
/// assert_eq!(line.densify(1.0).num_points(), 4);
/// ```
pub trait Densify {
    /// The densified geometry's type.
    type Output;

    /// Subdivides every segment longer than `max_distance`.
    ///
    /// # Panics
    ///
    /// Panics when `max_distance` is not strictly positive.
    fn densify(&self, max_distance: f64) -> Self::Output;
}

impl Densify for Point {
    type Output = Point;

    fn densify(&self, max_distance: f64) -> Point {
        check_max_distance(max_distance);
        self.clone()
    }
}

impl Densify for MultiPoint {
    type Output = MultiPoint;

    fn densify(&self, max_distance: f64) -> MultiPoint {
        check_max_distance(max_distance);
        self.clone()
    }
}

impl Densify for LineString {
    type Output = LineString;

    fn densify(&self, max_distance: f64) -> LineString {
        LineString::new_unchecked(densify_sequence(self.sequence(), max_distance))
    }
}

impl Densify for Polygon {
    type Output = Polygon;

    fn densify(&self, max_distance: f64) -> Polygon {
        check_max_distance(max_distance);
        if self.is_empty() {
            return self.clone();
        }
        Polygon::new_unchecked(
            self.rings()
                .iter()
                .map(|ring| ring.densify(max_distance))
                .collect(),
        )
    }
}

impl Densify for MultiLineString {
    type Output = MultiLineString;

    fn densify(&self, max_distance: f64) -> MultiLineString {
        check_max_distance(max_distance);
        if self.is_empty() {
            return self.clone();
        }
        MultiLineString::new_unchecked(
            self.line_strings()
                .iter()
                .map(|ls| ls.densify(max_distance))
                .collect(),
        )
    }
}

impl Densify for MultiPolygon {
    type Output = MultiPolygon;

    fn densify(&self, max_distance: f64) -> MultiPolygon {
        check_max_distance(max_distance);
        if self.is_empty() {
            return self.clone();
        }
        MultiPolygon::new_unchecked(
            self.polygons()
                .iter()
                .map(|p| p.densify(max_distance))
                .collect(),
        )
    }
}

impl Densify for GeometryCollection {
    type Output = GeometryCollection;

    fn densify(&self, max_distance: f64) -> GeometryCollection {
        check_max_distance(max_distance);
        if self.is_empty() {
            return self.clone();
        }
        GeometryCollection::new_unchecked(
            self.geometries()
                .iter()
                .map(|g| g.densify(max_distance))
                .collect(),
        )
    }
}

impl Densify for Geometry {
    type Output = Geometry;

    fn densify(&self, max_distance: f64) -> Geometry {
        match self {
            Geometry::GeometryCollection(g) => g.densify(max_distance).into(),
            Geometry::Point(g) => g.densify(max_distance).into(),
            Geometry::LineString(g) => g.densify(max_distance).into(),
            Geometry::Polygon(g) => g.densify(max_distance).into(),
            Geometry::MultiPoint(g) => g.densify(max_distance).into(),
            Geometry::MultiLineString(g) => g.densify(max_distance).into(),
            Geometry::MultiPolygon(g) => g.densify(max_distance).into(),
        }
    }
}

fn check_max_distance(max_distance: f64) {
    assert!(
        max_distance > 0.0,
        "max_distance must be positive, got {max_distance}"
    );
}

/// Splits each segment of XY length `d` into `ceil(d / max_distance)`
/// even pieces.
pub(crate) fn densify_sequence(seq: &Sequence, max_distance: f64) -> Sequence {
    check_max_distance(max_distance);
    if seq.len() < 2 {
        return seq.clone();
    }

    let mut coords = Vec::with_capacity(seq.len());
    coords.push(seq.coord(0));
    for i in 1..seq.len() {
        let a = seq.coord(i - 1);
        let b = seq.coord(i);
        let distance = (b.x - a.x).hypot(b.y - a.y);
        let pieces = (distance / max_distance).ceil() as usize;
        for k in 1..pieces {
            coords.push(a.lerp(&b, k as f64 / pieces as f64));
        }
        coords.push(b);
    }
    Sequence::from_coords(coords, seq.coordinates_type())
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    use crate::coord::Coord;
    use crate::datatypes::CoordinatesType;
    use crate::test::linestring::{line_string, xy_sequence};
    use crate::test::polygon::square;

    #[test]
    fn unit_segment_at_0_4() {
        // LINESTRING(0 0, 1 0) densified at 0.4 gains two points.
        let densified = densify_sequence(&xy_sequence(&[0.0, 0.0, 1.0, 0.0]), 0.4);
        assert_eq!(densified.len(), 4);
        assert_relative_eq!(densified.xy(1).0, 1.0 / 3.0);
        assert_relative_eq!(densified.xy(2).0, 2.0 / 3.0);
        assert_eq!(densified.xy(3), (1.0, 0.0));
    }

    #[test]
    fn exact_multiples_split_evenly() {
        let densified = densify_sequence(&xy_sequence(&[0.0, 0.0, 3.0, 0.0]), 1.0);
        assert_eq!(densified.len(), 4);
        assert_eq!(densified.xy(1), (1.0, 0.0));
        assert_eq!(densified.xy(2), (2.0, 0.0));
    }

    #[test]
    fn short_segments_are_untouched() {
        let seq = xy_sequence(&[0.0, 0.0, 0.5, 0.0, 1.0, 0.0]);
        assert_eq!(densify_sequence(&seq, 2.0), seq);
    }

    #[test]
    fn spacing_never_exceeds_max_distance() {
        let seq = xy_sequence(&[0.0, 0.0, 1.0, 0.0, 1.0, 7.3, -2.5, 7.3]);
        let densified = densify_sequence(&seq, 0.7);
        for ((x0, y0), (x1, y1)) in densified.segments_xy() {
            assert!((x1 - x0).hypot(y1 - y0) <= 0.7 + 1e-12);
        }
        // Every original point survives, in order.
        let original: Vec<_> = seq.iter_xy().collect();
        let mut remaining = original.as_slice();
        for position in densified.iter_xy() {
            if remaining.first() == Some(&position) {
                remaining = &remaining[1..];
            }
        }
        assert!(remaining.is_empty());
    }

    #[test]
    fn z_and_m_interpolate() {
        let seq = Sequence::from_coords(
            [Coord::xyzm(0.0, 0.0, 0.0, 10.0), Coord::xyzm(2.0, 0.0, 4.0, 30.0)],
            CoordinatesType::XYZM,
        );
        let densified = densify_sequence(&seq, 1.0);
        assert_eq!(densified.coord(1), Coord::xyzm(1.0, 0.0, 2.0, 20.0));
    }

    #[test]
    fn polygon_rings_densify() {
        let densified = square(0.0, 0.0, 2.0).densify(1.0);
        assert_eq!(densified.exterior().unwrap().num_points(), 9);
    }

    #[test]
    #[should_panic(expected = "max_distance must be positive")]
    fn non_positive_max_distance_panics() {
        line_string(&[0.0, 0.0, 1.0, 0.0]).densify(0.0);
    }
}
