//! Ramer–Douglas–Peucker line simplification.

use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::sequence::Sequence;

/// Ramer–Douglas–Peucker simplification.
///
/// Each LineString and ring is simplified independently: interior points
/// whose perpendicular distance to the local chord stays within
/// `threshold` are removed. A LineString collapsing below 2 points, or a
/// ring below 4, becomes empty and is dropped from its parent; a
/// collapsed exterior ring empties the whole polygon. The output is built
/// without validation, since simplification may produce
/// self-intersecting rings.
///
/// ```
/// use geo_features::algorithm::Simplify;
/// use geo_features::{CoordinatesType, LineString, Sequence};
///
/// let line = LineString::new_unchecked(Sequence::new(
///     vec![0.0, 0.0, 1.0, 0.1, 2.0, 0.0],
///     CoordinatesType::XY,
/// ));
/// assert_eq!(line.simplify(0.5).num_points(), 2);
/// assert_eq!(line.simplify(0.01).num_points(), 3);
/// ```
pub trait Simplify {
    /// The simplified geometry's type.
    type Output;

    /// Removes interior points deviating at most `threshold` from the
    /// chords of the recursive subdivision.
    fn simplify(&self, threshold: f64) -> Self::Output;
}

impl Simplify for Point {
    type Output = Point;

    fn simplify(&self, _threshold: f64) -> Point {
        self.clone()
    }
}

impl Simplify for MultiPoint {
    type Output = MultiPoint;

    fn simplify(&self, _threshold: f64) -> MultiPoint {
        self.clone()
    }
}

impl Simplify for LineString {
    type Output = LineString;

    fn simplify(&self, threshold: f64) -> LineString {
        let seq = simplify_sequence(self.sequence(), threshold);
        if seq.len() < 2 {
            LineString::empty(self.coordinates_type())
        } else {
            LineString::new_unchecked(seq)
        }
    }
}

impl Simplify for Polygon {
    type Output = Polygon;

    fn simplify(&self, threshold: f64) -> Polygon {
        let coordinates_type = self.coordinates_type();
        let mut rings = Vec::with_capacity(self.num_rings());
        for (index, ring) in self.rings().iter().enumerate() {
            let seq = simplify_sequence(ring.sequence(), threshold);
            if seq.len() < 4 {
                if index == 0 {
                    // A collapsed exterior empties the whole polygon.
                    return Polygon::empty(coordinates_type);
                }
                continue;
            }
            rings.push(LineString::new_unchecked(seq));
        }
        if rings.is_empty() {
            Polygon::empty(coordinates_type)
        } else {
            Polygon::new_unchecked(rings)
        }
    }
}

impl Simplify for MultiLineString {
    type Output = MultiLineString;

    fn simplify(&self, threshold: f64) -> MultiLineString {
        let members: Vec<LineString> = self
            .line_strings()
            .iter()
            .map(|ls| ls.simplify(threshold))
            .filter(|ls| !ls.is_empty())
            .collect();
        if members.is_empty() {
            MultiLineString::empty(self.coordinates_type())
        } else {
            MultiLineString::new_unchecked(members)
        }
    }
}

impl Simplify for MultiPolygon {
    type Output = MultiPolygon;

    fn simplify(&self, threshold: f64) -> MultiPolygon {
        let members: Vec<Polygon> = self
            .polygons()
            .iter()
            .map(|p| p.simplify(threshold))
            .filter(|p| !p.is_empty())
            .collect();
        if members.is_empty() {
            MultiPolygon::empty(self.coordinates_type())
        } else {
            MultiPolygon::new_unchecked(members)
        }
    }
}

impl Simplify for GeometryCollection {
    type Output = GeometryCollection;

    fn simplify(&self, threshold: f64) -> GeometryCollection {
        if self.is_empty() {
            return self.clone();
        }
        GeometryCollection::new_unchecked(
            self.geometries()
                .iter()
                .map(|g| g.simplify(threshold))
                .collect(),
        )
    }
}

impl Simplify for Geometry {
    type Output = Geometry;

    fn simplify(&self, threshold: f64) -> Geometry {
        match self {
            Geometry::GeometryCollection(g) => g.simplify(threshold).into(),
            Geometry::Point(g) => g.simplify(threshold).into(),
            Geometry::LineString(g) => g.simplify(threshold).into(),
            Geometry::Polygon(g) => g.simplify(threshold).into(),
            Geometry::MultiPoint(g) => g.simplify(threshold).into(),
            Geometry::MultiLineString(g) => g.simplify(threshold).into(),
            Geometry::MultiPolygon(g) => g.simplify(threshold).into(),
        }
    }
}

/// The core subdivision, driven by an explicit range stack so that
/// nearly-collinear chains of any length cannot overflow the call stack.
pub(crate) fn simplify_sequence(seq: &Sequence, threshold: f64) -> Sequence {
    let n = seq.len();
    if n <= 2 {
        return seq.clone();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut ranges = vec![(0, n - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last <= first + 1 {
            continue;
        }
        let (index, deviation) = max_deviation(seq, first, last);
        if deviation > threshold {
            keep[index] = true;
            ranges.push((first, index));
            ranges.push((index, last));
        }
    }

    Sequence::from_coords(
        seq.iter()
            .enumerate()
            .filter_map(|(i, coord)| keep[i].then_some(coord)),
        seq.coordinates_type(),
    )
}

/// The interior point deviating farthest from the chord `first → last`,
/// or from the single position when the chord is degenerate.
fn max_deviation(seq: &Sequence, first: usize, last: usize) -> (usize, f64) {
    let (x0, y0) = seq.xy(first);
    let (x1, y1) = seq.xy(last);
    let degenerate = (x0, y0) == (x1, y1);
    let (dx, dy) = (x1 - x0, y1 - y0);
    let chord_length = dx.hypot(dy);

    let mut best = (first, 0.0);
    for i in first + 1..last {
        let (px, py) = seq.xy(i);
        let deviation = if degenerate {
            (px - x0).hypot(py - y0)
        } else {
            ((px - x0) * dy - (py - y0) * dx).abs() / chord_length
        };
        if deviation > best.1 {
            best = (i, deviation);
        }
    }
    best
}
