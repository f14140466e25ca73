//! Position-wise transforms.

use crate::coord::Coord;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::sequence::Sequence;

/// Applies an XY map to every control point.
///
/// Z and M ride along unchanged. The result is built without validation:
/// the map may collapse distinct positions or produce non-finite ones,
/// so the output can fail [`validate`](crate::geometry::Geometry::validate).
pub trait TransformXy {
    /// The transformed geometry's type.
    type Output;

    /// A copy with `f` applied to the XY of every control point.
    fn transform_xy<F>(&self, f: F) -> Self::Output
    where
        F: Fn(f64, f64) -> (f64, f64);
}

pub(crate) fn map_sequence_xy<F>(seq: &Sequence, f: &F) -> Sequence
where
    F: Fn(f64, f64) -> (f64, f64),
{
    Sequence::from_coords(
        seq.iter().map(|coord| {
            let (x, y) = f(coord.x, coord.y);
            Coord { x, y, ..coord }
        }),
        seq.coordinates_type(),
    )
}

impl TransformXy for Point {
    type Output = Point;

    fn transform_xy<F>(&self, f: F) -> Point
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        match self.coord() {
            Some(coord) => {
                let (x, y) = f(coord.x, coord.y);
                Point::new_unchecked(Coord { x, y, ..coord })
            }
            None => self.clone(),
        }
    }
}

impl TransformXy for LineString {
    type Output = LineString;

    fn transform_xy<F>(&self, f: F) -> LineString
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        LineString::new_unchecked(map_sequence_xy(self.sequence(), &f))
    }
}

impl TransformXy for Polygon {
    type Output = Polygon;

    fn transform_xy<F>(&self, f: F) -> Polygon
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        if self.is_empty() {
            return self.clone();
        }
        Polygon::new_unchecked(
            self.rings()
                .iter()
                .map(|ring| ring.transform_xy(&f))
                .collect(),
        )
    }
}

impl TransformXy for MultiPoint {
    type Output = MultiPoint;

    fn transform_xy<F>(&self, f: F) -> MultiPoint
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        if self.is_empty() {
            return self.clone();
        }
        MultiPoint::new_unchecked(self.points().iter().map(|p| p.transform_xy(&f)).collect())
    }
}

impl TransformXy for MultiLineString {
    type Output = MultiLineString;

    fn transform_xy<F>(&self, f: F) -> MultiLineString
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        if self.is_empty() {
            return self.clone();
        }
        MultiLineString::new_unchecked(
            self.line_strings()
                .iter()
                .map(|ls| ls.transform_xy(&f))
                .collect(),
        )
    }
}

impl TransformXy for MultiPolygon {
    type Output = MultiPolygon;

    fn transform_xy<F>(&self, f: F) -> MultiPolygon
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        if self.is_empty() {
            return self.clone();
        }
        MultiPolygon::new_unchecked(self.polygons().iter().map(|p| p.transform_xy(&f)).collect())
    }
}

impl TransformXy for GeometryCollection {
    type Output = GeometryCollection;

    fn transform_xy<F>(&self, f: F) -> GeometryCollection
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        if self.is_empty() {
            return self.clone();
        }
        GeometryCollection::new_unchecked(
            self.geometries()
                .iter()
                .map(|g| g.transform_xy(&f))
                .collect(),
        )
    }
}

impl TransformXy for Geometry {
    type Output = Geometry;

    fn transform_xy<F>(&self, f: F) -> Geometry
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        match self {
            Geometry::GeometryCollection(g) => g.transform_xy(f).into(),
            Geometry::Point(g) => g.transform_xy(f).into(),
            Geometry::LineString(g) => g.transform_xy(f).into(),
            Geometry::Polygon(g) => g.transform_xy(f).into(),
            Geometry::MultiPoint(g) => g.transform_xy(f).into(),
            Geometry::MultiLineString(g) => g.transform_xy(f).into(),
            Geometry::MultiPolygon(g) => g.transform_xy(f).into(),
        }
    }
}
