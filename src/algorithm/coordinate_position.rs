//! Point-in-ring and point-in-polygon classification.

use crate::algorithm::line_intersection::point_on_segment;
use crate::geometry::Polygon;
use crate::sequence::Sequence;

/// Where a position sits relative to a closed region's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordPos {
    /// Strictly inside the region.
    Inside,
    /// On the boundary.
    OnBoundary,
    /// Strictly outside the region.
    Outside,
}

/// Classifies `p` against the region enclosed by `ring` via ray casting.
///
/// The ring is taken as closed: when its first and last points differ
/// (an unchecked value), the implicit closing edge is still considered.
/// Boundary hits are detected with the exact orientation predicate
/// before any crossing is counted.
pub fn position_in_ring(p: (f64, f64), ring: &Sequence) -> CoordPos {
    let n = ring.len();
    if n == 0 {
        return CoordPos::Outside;
    }
    let closed = ring.is_closed();

    let mut inside = false;
    for i in 0..n {
        let j = (i + 1) % n;
        if i == n - 1 && (closed || n == 1) {
            break;
        }
        let s0 = ring.xy(i);
        let s1 = ring.xy(j);

        if s0 == s1 {
            if p == s0 {
                return CoordPos::OnBoundary;
            }
            continue;
        }
        if point_on_segment(p, s0, s1) {
            return CoordPos::OnBoundary;
        }

        // Half-open vertical rule: each edge owns its lower endpoint, so a
        // ray through a vertex counts exactly one of the two edges there.
        if (s0.1 > p.1) != (s1.1 > p.1) {
            let t = (p.1 - s0.1) / (s1.1 - s0.1);
            let x = s0.0 + t * (s1.0 - s0.0);
            if p.0 < x {
                inside = !inside;
            }
        }
    }

    if inside {
        CoordPos::Inside
    } else {
        CoordPos::Outside
    }
}

/// Classifies `p` against a polygon: on any ring → boundary; inside the
/// exterior but inside a hole → outside; otherwise inside/outside the
/// exterior.
pub fn position_in_polygon(p: (f64, f64), polygon: &Polygon) -> CoordPos {
    let Some(exterior) = polygon.exterior() else {
        return CoordPos::Outside;
    };
    match position_in_ring(p, exterior.sequence()) {
        CoordPos::OnBoundary => CoordPos::OnBoundary,
        CoordPos::Outside => CoordPos::Outside,
        CoordPos::Inside => {
            for hole in polygon.interiors() {
                match position_in_ring(p, hole.sequence()) {
                    CoordPos::OnBoundary => return CoordPos::OnBoundary,
                    CoordPos::Inside => return CoordPos::Outside,
                    CoordPos::Outside => {}
                }
            }
            CoordPos::Inside
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::CoordinatesType;
    use crate::geometry::LineString;

    fn ring(floats: &[f64]) -> Sequence {
        Sequence::new(floats.to_vec(), CoordinatesType::XY)
    }

    fn unit_square() -> Sequence {
        ring(&[0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0, 0.0, 0.0])
    }

    #[test]
    fn ring_positions() {
        let square = unit_square();
        assert_eq!(position_in_ring((2.0, 2.0), &square), CoordPos::Inside);
        assert_eq!(position_in_ring((5.0, 2.0), &square), CoordPos::Outside);
        assert_eq!(position_in_ring((2.0, 0.0), &square), CoordPos::OnBoundary);
        assert_eq!(position_in_ring((0.0, 0.0), &square), CoordPos::OnBoundary);
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // Diamond: a horizontal ray from the centre leaves through the
        // right-hand vertex.
        let diamond = ring(&[0.0, 0.0, 2.0, -2.0, 4.0, 0.0, 2.0, 2.0, 0.0, 0.0]);
        assert_eq!(position_in_ring((1.0, 0.0), &diamond), CoordPos::Inside);
        assert_eq!(position_in_ring((-1.0, 0.0), &diamond), CoordPos::Outside);
    }

    #[test]
    fn unclosed_ring_gets_an_implicit_closing_edge() {
        let open = ring(&[0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0]);
        assert_eq!(position_in_ring((2.0, 2.0), &open), CoordPos::Inside);
        assert_eq!(position_in_ring((0.0, 2.0), &open), CoordPos::OnBoundary);
    }

    #[test]
    fn polygon_with_hole() {
        let polygon = crate::geometry::Polygon::new_unchecked(vec![
            LineString::new_unchecked(unit_square()),
            LineString::new_unchecked(ring(&[1.0, 1.0, 3.0, 1.0, 3.0, 3.0, 1.0, 3.0, 1.0, 1.0])),
        ]);
        assert_eq!(position_in_polygon((0.5, 0.5), &polygon), CoordPos::Inside);
        assert_eq!(position_in_polygon((2.0, 2.0), &polygon), CoordPos::Outside);
        assert_eq!(position_in_polygon((1.0, 2.0), &polygon), CoordPos::OnBoundary);
        assert_eq!(position_in_polygon((4.0, 2.0), &polygon), CoordPos::OnBoundary);
        assert_eq!(position_in_polygon((9.0, 9.0), &polygon), CoordPos::Outside);
    }
}
