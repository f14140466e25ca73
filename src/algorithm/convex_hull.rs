//! Convex hulls.

use std::cmp::Ordering;

use crate::algorithm::orientation::{orientation, Orientation};
use crate::coord::Coord;
use crate::datatypes::CoordinatesType;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::sequence::Sequence;

/// The convex hull of a geometry's control points.
///
/// The hull of an empty geometry is the empty GeometryCollection; a
/// single distinct position yields a Point; a collinear point set yields
/// the LineString between its two extremes; anything else yields a
/// Polygon with one counter-clockwise ring. The output is always XY.
pub trait ConvexHull {
    /// Computes the convex hull.
    fn convex_hull(&self) -> Geometry;
}

macro_rules! hull_impl {
    ($type:ty, $extend:ident) => {
        impl ConvexHull for $type {
            fn convex_hull(&self) -> Geometry {
                let mut points = Vec::new();
                $extend(self, &mut points);
                hull_of_points(points)
            }
        }
    };
}

hull_impl!(Point, extend_from_point);
hull_impl!(LineString, extend_from_line_string);
hull_impl!(Polygon, extend_from_polygon);
hull_impl!(MultiPoint, extend_from_multi_point);
hull_impl!(MultiLineString, extend_from_multi_line_string);
hull_impl!(MultiPolygon, extend_from_multi_polygon);
hull_impl!(GeometryCollection, extend_from_collection);

impl ConvexHull for Geometry {
    fn convex_hull(&self) -> Geometry {
        crate::geometry::dispatch!(self, g => g.convex_hull())
    }
}

fn extend_from_point(point: &Point, out: &mut Vec<(f64, f64)>) {
    if let Some(coord) = point.coord() {
        out.push(coord.xy_parts());
    }
}

fn extend_from_line_string(line_string: &LineString, out: &mut Vec<(f64, f64)>) {
    out.extend(line_string.sequence().iter_xy());
}

fn extend_from_polygon(polygon: &Polygon, out: &mut Vec<(f64, f64)>) {
    for ring in polygon.rings() {
        out.extend(ring.sequence().iter_xy());
    }
}

fn extend_from_multi_point(multi: &MultiPoint, out: &mut Vec<(f64, f64)>) {
    for point in multi.points() {
        extend_from_point(point, out);
    }
}

fn extend_from_multi_line_string(multi: &MultiLineString, out: &mut Vec<(f64, f64)>) {
    for line_string in multi.line_strings() {
        extend_from_line_string(line_string, out);
    }
}

fn extend_from_multi_polygon(multi: &MultiPolygon, out: &mut Vec<(f64, f64)>) {
    for polygon in multi.polygons() {
        extend_from_polygon(polygon, out);
    }
}

fn extend_from_collection(collection: &GeometryCollection, out: &mut Vec<(f64, f64)>) {
    for member in collection.geometries() {
        match member {
            Geometry::GeometryCollection(nested) => extend_from_collection(nested, out),
            Geometry::Point(g) => extend_from_point(g, out),
            Geometry::LineString(g) => extend_from_line_string(g, out),
            Geometry::Polygon(g) => extend_from_polygon(g, out),
            Geometry::MultiPoint(g) => extend_from_multi_point(g, out),
            Geometry::MultiLineString(g) => extend_from_multi_line_string(g, out),
            Geometry::MultiPolygon(g) => extend_from_multi_polygon(g, out),
        }
    }
}

/// Graham scan over a point multiset.
fn hull_of_points(mut points: Vec<(f64, f64)>) -> Geometry {
    points.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.total_cmp(&b.0)));
    points.dedup();

    match points.len() {
        0 => return Geometry::default(),
        1 => {
            let (x, y) = points[0];
            return Point::new_unchecked(Coord::xy(x, y)).into();
        }
        _ => {}
    }

    if points[2..]
        .iter()
        .all(|&p| orientation(points[0], points[1], p) == Orientation::Collinear)
    {
        return extreme_line(points[0], points[1], &points);
    }

    // The anchor is the bottom-most, then left-most point; the rest are
    // scanned in polar-angle order around it.
    let mut rest = points.split_off(1);
    let anchor = points[0];
    rest.sort_by(|&a, &b| polar_order(anchor, a, b));

    let mut stack = points;
    for point in rest {
        while stack.len() >= 2
            && orientation(stack[stack.len() - 2], stack[stack.len() - 1], point)
                != Orientation::LeftTurn
        {
            stack.pop();
        }
        stack.push(point);
    }
    stack.push(anchor);

    let ring = LineString::new_unchecked(Sequence::from_coords(
        stack.into_iter().map(|(x, y)| Coord::xy(x, y)),
        CoordinatesType::XY,
    ));
    Polygon::new_unchecked(vec![ring]).into()
}

/// Counter-clockwise angular order around the anchor; collinear ties
/// break by ascending distance, so the scan keeps only the farthest of a
/// collinear run.
fn polar_order(anchor: (f64, f64), a: (f64, f64), b: (f64, f64)) -> Ordering {
    match orientation(anchor, a, b) {
        Orientation::LeftTurn => Ordering::Less,
        Orientation::RightTurn => Ordering::Greater,
        Orientation::Collinear => distance2(anchor, a).total_cmp(&distance2(anchor, b)),
    }
}

fn distance2(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)
}

/// The extreme pair of a collinear point set, by projection onto the
/// carrier line.
fn extreme_line(p: (f64, f64), q: (f64, f64), points: &[(f64, f64)]) -> Geometry {
    let direction = (q.0 - p.0, q.1 - p.1);
    let parameter = |s: (f64, f64)| (s.0 - p.0) * direction.0 + (s.1 - p.1) * direction.1;
    let lo = points
        .iter()
        .copied()
        .min_by(|&a, &b| parameter(a).total_cmp(&parameter(b)))
        .unwrap();
    let hi = points
        .iter()
        .copied()
        .max_by(|&a, &b| parameter(a).total_cmp(&parameter(b)))
        .unwrap();
    LineString::new_unchecked(Sequence::from_coords(
        [Coord::xy(lo.0, lo.1), Coord::xy(hi.0, hi.1)],
        CoordinatesType::XY,
    ))
    .into()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::coordinate_position::{position_in_ring, CoordPos};
    use crate::test::linestring::line_string;

    fn multi_point(positions: &[(f64, f64)]) -> MultiPoint {
        MultiPoint::new_unchecked(
            positions
                .iter()
                .map(|&(x, y)| Point::new_unchecked(Coord::xy(x, y)))
                .collect(),
        )
    }

    #[test]
    fn empty_input_yields_empty_collection() {
        assert_eq!(MultiPoint::default().convex_hull(), Geometry::default());
    }

    #[test]
    fn coincident_points_yield_a_point() {
        let hull = multi_point(&[(2.0, 3.0), (2.0, 3.0), (2.0, 3.0)]).convex_hull();
        assert_eq!(hull, Point::new_unchecked(Coord::xy(2.0, 3.0)).into());
    }

    #[test]
    fn collinear_points_yield_the_extreme_line() {
        let hull = multi_point(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).convex_hull();
        assert_eq!(
            hull,
            LineString::new_unchecked(Sequence::from_coords(
                [Coord::xy(0.0, 0.0), Coord::xy(2.0, 2.0)],
                CoordinatesType::XY,
            ))
            .into()
        );
    }

    #[test]
    fn square_with_interior_point() {
        let hull = multi_point(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (2.0, 2.0),
        ])
        .convex_hull();
        let Geometry::Polygon(polygon) = hull else {
            panic!("expected a polygon hull");
        };
        let ring = polygon.exterior().unwrap();
        assert!(ring.is_closed());
        assert_eq!(ring.num_points(), 5);
        assert_eq!(
            position_in_ring((2.0, 2.0), ring.sequence()),
            CoordPos::Inside
        );
    }

    #[test]
    fn collinear_edge_points_are_dropped() {
        // (2 0) sits on the hull's bottom edge and must not appear as a
        // vertex.
        let hull = multi_point(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
            .convex_hull();
        let Geometry::Polygon(polygon) = hull else {
            panic!("expected a polygon hull");
        };
        assert_eq!(polygon.exterior().unwrap().num_points(), 5);
    }

    #[test]
    fn hull_ring_winds_counter_clockwise() {
        let hull = multi_point(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]).convex_hull();
        let Geometry::Polygon(polygon) = hull else {
            panic!("expected a polygon hull");
        };
        assert!(
            crate::algorithm::area::ring_signed_area(polygon.exterior().unwrap().sequence()) > 0.0
        );
    }

    #[test]
    fn hull_contains_every_input_point() {
        let positions = [
            (0.0, 0.0),
            (5.0, 1.0),
            (6.0, 4.0),
            (2.0, 6.0),
            (-1.0, 3.0),
            (2.0, 2.0),
            (3.0, 3.0),
            (1.0, 4.0),
        ];
        let hull = multi_point(&positions).convex_hull();
        let Geometry::Polygon(polygon) = hull else {
            panic!("expected a polygon hull");
        };
        let ring = polygon.exterior().unwrap().sequence();
        for position in positions {
            assert_ne!(position_in_ring(position, ring), CoordPos::Outside);
        }
    }

    #[test]
    fn line_string_hull_uses_control_points() {
        let hull = line_string(&[0.0, 0.0, 2.0, 2.0, 4.0, 0.0]).convex_hull();
        assert!(matches!(hull, Geometry::Polygon(_)));
    }
}
