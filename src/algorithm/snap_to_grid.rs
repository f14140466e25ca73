//! Grid snapping.

use crate::coord::Coord;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::sequence::Sequence;

/// Rounds every coordinate value to a fixed number of decimal places.
///
/// X, Y, Z and M all snap. Snapping is idempotent at a fixed precision.
/// The result is built without validation: rounding may fold distinct
/// positions together, so a previously valid geometry can come out
/// invalid.
pub trait SnapToGrid {
    /// The snapped geometry's type.
    type Output;

    /// A copy with every coordinate rounded to `decimal_places`.
    fn snap_to_grid(&self, decimal_places: i32) -> Self::Output;
}

fn snap(value: f64, factor: f64) -> f64 {
    (value * factor).round() / factor
}

pub(crate) fn snap_sequence(seq: &Sequence, decimal_places: i32) -> Sequence {
    let factor = 10f64.powi(decimal_places);
    Sequence::from_coords(
        seq.iter().map(|coord| Coord {
            x: snap(coord.x, factor),
            y: snap(coord.y, factor),
            z: coord.z.map(|v| snap(v, factor)),
            m: coord.m.map(|v| snap(v, factor)),
        }),
        seq.coordinates_type(),
    )
}

impl SnapToGrid for Point {
    type Output = Point;

    fn snap_to_grid(&self, decimal_places: i32) -> Point {
        match self.coord() {
            Some(coord) => {
                let factor = 10f64.powi(decimal_places);
                Point::new_unchecked(Coord {
                    x: snap(coord.x, factor),
                    y: snap(coord.y, factor),
                    z: coord.z.map(|v| snap(v, factor)),
                    m: coord.m.map(|v| snap(v, factor)),
                })
            }
            None => self.clone(),
        }
    }
}

impl SnapToGrid for LineString {
    type Output = LineString;

    fn snap_to_grid(&self, decimal_places: i32) -> LineString {
        LineString::new_unchecked(snap_sequence(self.sequence(), decimal_places))
    }
}

impl SnapToGrid for Polygon {
    type Output = Polygon;

    fn snap_to_grid(&self, decimal_places: i32) -> Polygon {
        if self.is_empty() {
            return self.clone();
        }
        Polygon::new_unchecked(
            self.rings()
                .iter()
                .map(|ring| ring.snap_to_grid(decimal_places))
                .collect(),
        )
    }
}

impl SnapToGrid for MultiPoint {
    type Output = MultiPoint;

    fn snap_to_grid(&self, decimal_places: i32) -> MultiPoint {
        if self.is_empty() {
            return self.clone();
        }
        MultiPoint::new_unchecked(
            self.points()
                .iter()
                .map(|p| p.snap_to_grid(decimal_places))
                .collect(),
        )
    }
}

impl SnapToGrid for MultiLineString {
    type Output = MultiLineString;

    fn snap_to_grid(&self, decimal_places: i32) -> MultiLineString {
        if self.is_empty() {
            return self.clone();
        }
        MultiLineString::new_unchecked(
            self.line_strings()
                .iter()
                .map(|ls| ls.snap_to_grid(decimal_places))
                .collect(),
        )
    }
}

impl SnapToGrid for MultiPolygon {
    type Output = MultiPolygon;

    fn snap_to_grid(&self, decimal_places: i32) -> MultiPolygon {
        if self.is_empty() {
            return self.clone();
        }
        MultiPolygon::new_unchecked(
            self.polygons()
                .iter()
                .map(|p| p.snap_to_grid(decimal_places))
                .collect(),
        )
    }
}

impl SnapToGrid for GeometryCollection {
    type Output = GeometryCollection;

    fn snap_to_grid(&self, decimal_places: i32) -> GeometryCollection {
        if self.is_empty() {
            return self.clone();
        }
        GeometryCollection::new_unchecked(
            self.geometries()
                .iter()
                .map(|g| g.snap_to_grid(decimal_places))
                .collect(),
        )
    }
}

impl SnapToGrid for Geometry {
    type Output = Geometry;

    fn snap_to_grid(&self, decimal_places: i32) -> Geometry {
        match self {
            Geometry::GeometryCollection(g) => g.snap_to_grid(decimal_places).into(),
            Geometry::Point(g) => g.snap_to_grid(decimal_places).into(),
            Geometry::LineString(g) => g.snap_to_grid(decimal_places).into(),
            Geometry::Polygon(g) => g.snap_to_grid(decimal_places).into(),
            Geometry::MultiPoint(g) => g.snap_to_grid(decimal_places).into(),
            Geometry::MultiLineString(g) => g.snap_to_grid(decimal_places).into(),
            Geometry::MultiPolygon(g) => g.snap_to_grid(decimal_places).into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::CoordinatesType;
    use crate::test::linestring::xy_sequence;

    #[test]
    fn rounds_every_dimension() {
        let seq = Sequence::from_coords(
            [Coord::xyzm(1.2345, -1.2355, 9.8765, 0.0049)],
            CoordinatesType::XYZM,
        );
        let snapped = snap_sequence(&seq, 2);
        assert_eq!(snapped.coord(0), Coord::xyzm(1.23, -1.24, 9.88, 0.0));
    }

    #[test]
    fn idempotent_at_fixed_precision() {
        let seq = xy_sequence(&[1.23456, 7.89012, -3.14159, 2.71828]);
        let once = snap_sequence(&seq, 3);
        assert_eq!(snap_sequence(&once, 3), once);
    }

    #[test]
    fn negative_decimal_places_snap_to_coarse_grids() {
        let seq = xy_sequence(&[1234.0, 5678.0]);
        let snapped = snap_sequence(&seq, -2);
        assert_eq!(snapped.xy(0), (1200.0, 5700.0));
    }

    #[test]
    fn point_snaps() {
        let point = Point::new_unchecked(Coord::xy(0.126, 0.124));
        assert_eq!(
            point.snap_to_grid(2).coord(),
            Some(Coord::xy(0.13, 0.12))
        );
    }
}
