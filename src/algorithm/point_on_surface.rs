//! Deterministic representative points.

use crate::algorithm::coordinate_position::{position_in_polygon, CoordPos};
use crate::algorithm::euclidean_length::sequence_length;
use crate::algorithm::line_intersection::{segment_intersection, SegmentIntersection};
use crate::coord::Coord;
use crate::datatypes::CoordinatesType;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::index::sequence_segments;

/// A deterministic point guaranteed to lie on its geometry.
///
/// A Point represents itself. A LineString yields the interior control
/// point nearest the centroid of its control points, falling back to the
/// endpoints when there is none. A Polygon yields the midpoint of the
/// widest span the horizontal bisector of its envelope crosses inside
/// the polygon. Multi geometries and collections yield the best member
/// candidate: areal members beat linear ones and linear beat punctal;
/// equal kinds compare by crossed width (areal) or arc length (linear),
/// first match winning ties.
pub trait PointOnSurface {
    /// Picks the representative point; empty for an empty geometry.
    fn point_on_surface(&self) -> Point;
}

/// A representative position plus the member-selection key: the kind
/// rank (areal > linear > punctal) and a score within the kind.
type Candidate = (Coord, u8, f64);

const PUNCTAL: u8 = 0;
const LINEAR: u8 = 1;
const AREAL: u8 = 2;

impl PointOnSurface for Point {
    fn point_on_surface(&self) -> Point {
        self.clone()
    }
}

impl PointOnSurface for LineString {
    fn point_on_surface(&self) -> Point {
        resolve(line_candidate(self), self.coordinates_type())
    }
}

impl PointOnSurface for Polygon {
    fn point_on_surface(&self) -> Point {
        resolve(polygon_candidate(self), self.coordinates_type())
    }
}

impl PointOnSurface for MultiPoint {
    fn point_on_surface(&self) -> Point {
        let candidate = self.points().iter().find_map(point_candidate);
        resolve(candidate, self.coordinates_type())
    }
}

impl PointOnSurface for MultiLineString {
    fn point_on_surface(&self) -> Point {
        let candidate = best(self.line_strings().iter().filter_map(line_candidate));
        resolve(candidate, self.coordinates_type())
    }
}

impl PointOnSurface for MultiPolygon {
    fn point_on_surface(&self) -> Point {
        let candidate = best(self.polygons().iter().filter_map(polygon_candidate));
        resolve(candidate, self.coordinates_type())
    }
}

impl PointOnSurface for GeometryCollection {
    fn point_on_surface(&self) -> Point {
        let candidate = best(self.geometries().iter().filter_map(geometry_candidate));
        resolve(candidate, self.coordinates_type())
    }
}

impl PointOnSurface for Geometry {
    fn point_on_surface(&self) -> Point {
        crate::geometry::dispatch!(self, g => g.point_on_surface())
    }
}

fn resolve(candidate: Option<Candidate>, fallback: CoordinatesType) -> Point {
    match candidate {
        Some((coord, ..)) => Point::new_unchecked(coord),
        None => Point::empty(fallback),
    }
}

/// Keeps the highest-ranked, then highest-scored candidate; earlier
/// members win ties.
fn best(candidates: impl Iterator<Item = Candidate>) -> Option<Candidate> {
    candidates.reduce(|best, next| {
        if next.1 > best.1 || (next.1 == best.1 && next.2 > best.2) {
            next
        } else {
            best
        }
    })
}

fn point_candidate(point: &Point) -> Option<Candidate> {
    point.coord().map(|coord| (coord, PUNCTAL, 0.0))
}

fn line_candidate(line_string: &LineString) -> Option<Candidate> {
    let seq = line_string.sequence();
    let n = seq.len();
    if n == 0 {
        return None;
    }

    let (mut cx, mut cy) = (0.0, 0.0);
    for (x, y) in seq.iter_xy() {
        cx += x;
        cy += y;
    }
    let centroid = (cx / n as f64, cy / n as f64);

    let candidates = if n > 2 { 1..n - 1 } else { 0..n };
    let chosen = candidates
        .min_by(|&i, &j| {
            distance2(seq.xy(i), centroid).total_cmp(&distance2(seq.xy(j), centroid))
        })
        .unwrap();
    Some((seq.coord(chosen), LINEAR, sequence_length(seq)))
}

fn polygon_candidate(polygon: &Polygon) -> Option<Candidate> {
    let envelope = polygon.envelope();
    let (min_x, min_y) = envelope.min()?;
    let (max_x, max_y) = envelope.max()?;
    let y = (min_y + max_y) / 2.0;
    let left = (min_x - 1.0, y);
    let right = (max_x + 1.0, y);

    // Cut the bisector at every boundary crossing, then rate the spans
    // whose midpoints sit inside the polygon.
    let mut xs = Vec::new();
    for ring in polygon.rings() {
        for segment in sequence_segments(ring.sequence()) {
            match segment_intersection(left, right, segment.start, segment.end) {
                SegmentIntersection::None => {}
                SegmentIntersection::Point((x, _)) => xs.push(x),
                SegmentIntersection::Segment((x0, _), (x1, _)) => {
                    xs.push(x0);
                    xs.push(x1);
                }
            }
        }
    }
    xs.sort_by(f64::total_cmp);
    xs.dedup();

    let mut widest: Option<(f64, f64)> = None;
    for pair in xs.windows(2) {
        let mid = (pair[0] + pair[1]) / 2.0;
        if position_in_polygon((mid, y), polygon) == CoordPos::Inside {
            let width = pair[1] - pair[0];
            if widest.map_or(true, |(w, _)| width > w) {
                widest = Some((width, mid));
            }
        }
    }

    match widest {
        Some((width, mid)) => Some((Coord::xy(mid, y), AREAL, width)),
        None => {
            // Degenerate surface: fall back to the first boundary point.
            let coord = polygon
                .rings()
                .iter()
                .find_map(|ring| (!ring.is_empty()).then(|| ring.sequence().coord(0)))?;
            Some((coord, AREAL, 0.0))
        }
    }
}

fn geometry_candidate(geometry: &Geometry) -> Option<Candidate> {
    match geometry {
        Geometry::Point(g) => point_candidate(g),
        Geometry::LineString(g) => line_candidate(g),
        Geometry::Polygon(g) => polygon_candidate(g),
        Geometry::MultiPoint(g) => g.points().iter().find_map(point_candidate),
        Geometry::MultiLineString(g) => best(g.line_strings().iter().filter_map(line_candidate)),
        Geometry::MultiPolygon(g) => best(g.polygons().iter().filter_map(polygon_candidate)),
        Geometry::GeometryCollection(g) => {
            best(g.geometries().iter().filter_map(geometry_candidate))
        }
    }
}

fn distance2(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)
}
