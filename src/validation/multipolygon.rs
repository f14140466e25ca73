//! The MultiPolygon rule engine.

use rstar::{RTree, RTreeObject};

use crate::algorithm::coordinate_position::{position_in_polygon, CoordPos};
use crate::algorithm::line_intersection::{segment_intersection, SegmentIntersection};
use crate::error::{Result, ValidationError};
use crate::geometry::{MultiPolygon, Polygon};
use crate::index::{envelope_tree, sequence_segments, SegmentItem};

/// Runs the full MultiPolygon rule set: every member individually, then
/// the pairwise touching constraints over members with intersecting
/// envelopes.
pub(crate) fn validate_multi_polygon(multi: &MultiPolygon) -> Result<()> {
    let polygons = multi.polygons();
    for polygon in polygons {
        polygon.validate()?;
    }

    let tree = envelope_tree(polygons.iter().map(Polygon::envelope));
    for (i, polygon) in polygons.iter().enumerate() {
        if polygon.is_empty() {
            continue;
        }
        for item in tree.locate_in_envelope_intersecting(&polygon.envelope().to_aabb()) {
            if item.index <= i {
                continue;
            }
            check_polygon_pair(polygon, &polygons[item.index], i, item.index)?;
        }
    }
    Ok(())
}

/// Two members may meet only at finitely many boundary points: no shared
/// boundary lines, no overlapping interiors, no nesting.
fn check_polygon_pair(a: &Polygon, b: &Polygon, first: usize, second: usize) -> Result<()> {
    let violation = ValidationError::PolysMultiTouch { first, second };

    let a_segments = boundary_segments(a);
    let b_segments = boundary_segments(b);
    let b_tree = RTree::bulk_load(b_segments.clone());

    let mut touches = false;
    for segment in &a_segments {
        for other in b_tree.locate_in_envelope_intersecting(&segment.envelope()) {
            match segment_intersection(segment.start, segment.end, other.start, other.end) {
                SegmentIntersection::None => {}
                SegmentIntersection::Segment(..) => return Err(violation),
                SegmentIntersection::Point(_) => touches = true,
            }
        }
    }

    if !touches {
        // Disjoint boundaries: at most one member could swallow the
        // other. A boundary point classifying interior means nesting; a
        // member sitting inside the other's hole classifies outside.
        if position_in_polygon(representative(a), b) == CoordPos::Inside
            || position_in_polygon(representative(b), a) == CoordPos::Inside
        {
            return Err(violation);
        }
        return Ok(());
    }

    // Boundaries meet at isolated points. Split each boundary segment at
    // those points and classify the midpoint of every piece: a midpoint
    // interior to the other member means the surfaces overlap or nest.
    let a_tree = RTree::bulk_load(a_segments.clone());
    if probe_midpoints(&a_segments, &b_tree, b) || probe_midpoints(&b_segments, &a_tree, a) {
        return Err(violation);
    }
    Ok(())
}

/// Every segment of every ring, in one list.
fn boundary_segments(polygon: &Polygon) -> Vec<SegmentItem> {
    let mut items = Vec::new();
    for ring in polygon.rings() {
        for segment in sequence_segments(ring.sequence()) {
            items.push(SegmentItem {
                index: items.len(),
                ..segment
            });
        }
    }
    items
}

fn representative(polygon: &Polygon) -> (f64, f64) {
    // Members were validated first, so rings exist and are non-empty.
    polygon.rings()[0].sequence().xy(0)
}

fn probe_midpoints(
    segments: &[SegmentItem],
    other_tree: &RTree<SegmentItem>,
    other: &Polygon,
) -> bool {
    for segment in segments {
        let mut cuts = vec![0.0, 1.0];
        for candidate in other_tree.locate_in_envelope_intersecting(&segment.envelope()) {
            if let SegmentIntersection::Point(point) =
                segment_intersection(segment.start, segment.end, candidate.start, candidate.end)
            {
                cuts.push(parameter_along(segment, point));
            }
        }
        cuts.sort_by(f64::total_cmp);
        cuts.dedup();
        for pair in cuts.windows(2) {
            let t = (pair[0] + pair[1]) / 2.0;
            let mid = (
                segment.start.0 + t * (segment.end.0 - segment.start.0),
                segment.start.1 + t * (segment.end.1 - segment.start.1),
            );
            if position_in_polygon(mid, other) == CoordPos::Inside {
                return true;
            }
        }
    }
    false
}

/// Parameter of `point` along the segment, measured on its dominant axis.
fn parameter_along(segment: &SegmentItem, point: (f64, f64)) -> f64 {
    let dx = segment.end.0 - segment.start.0;
    let dy = segment.end.1 - segment.start.1;
    if dx.abs() >= dy.abs() {
        (point.0 - segment.start.0) / dx
    } else {
        (point.1 - segment.start.1) / dy
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::LineString;
    use crate::test::linestring::line_string;
    use crate::test::polygon::{square, square_ring};

    fn multi(polygons: Vec<Polygon>) -> MultiPolygon {
        MultiPolygon::new_unchecked(polygons)
    }

    #[test]
    fn disjoint_members_are_valid() {
        let multi = multi(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]);
        assert!(validate_multi_polygon(&multi).is_ok());
    }

    #[test]
    fn corner_touch_is_valid() {
        let multi = multi(vec![square(0.0, 0.0, 1.0), square(1.0, 1.0, 1.0)]);
        assert!(validate_multi_polygon(&multi).is_ok());
    }

    #[test]
    fn shared_edge_reported() {
        let multi = multi(vec![square(0.0, 0.0, 2.0), square(2.0, 0.0, 2.0)]);
        assert_eq!(
            validate_multi_polygon(&multi),
            Err(ValidationError::PolysMultiTouch {
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn overlapping_members_reported() {
        let multi = multi(vec![square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]);
        assert_eq!(
            validate_multi_polygon(&multi),
            Err(ValidationError::PolysMultiTouch {
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn nested_members_reported() {
        let multi = multi(vec![square(0.0, 0.0, 4.0), square(1.0, 1.0, 1.0)]);
        assert_eq!(
            validate_multi_polygon(&multi),
            Err(ValidationError::PolysMultiTouch {
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn member_inside_a_hole_is_valid() {
        let donut = Polygon::new_unchecked(vec![
            square_ring(0.0, 0.0, 6.0),
            square_ring(1.0, 1.0, 4.0),
        ]);
        let multi = multi(vec![donut, square(2.0, 2.0, 1.0)]);
        assert!(validate_multi_polygon(&multi).is_ok());
    }

    #[test]
    fn nested_member_touching_at_one_point_reported() {
        // A diamond inside the square, one vertex on the square's left
        // edge: the boundaries meet at a single point, but the diamond's
        // surface sits inside the square.
        let diamond = Polygon::new_unchecked(vec![line_string(&[
            0.0, 2.0, 1.0, 1.0, 2.0, 2.0, 1.0, 3.0, 0.0, 2.0,
        ])]);
        let multi = multi(vec![square(0.0, 0.0, 4.0), diamond]);
        assert_eq!(
            validate_multi_polygon(&multi),
            Err(ValidationError::PolysMultiTouch {
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn invalid_member_reported_before_pairwise_rules() {
        let open = Polygon::new_unchecked(vec![LineString::new_unchecked(
            crate::test::linestring::xy_sequence(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0]),
        )]);
        assert_eq!(
            validate_multi_polygon(&multi(vec![open])),
            Err(ValidationError::RingNotClosed { ring: 0 })
        );
    }

    #[test]
    fn empty_members_are_skipped() {
        let multi = multi(vec![
            square(0.0, 0.0, 1.0),
            Polygon::empty(crate::datatypes::CoordinatesType::XY),
        ]);
        assert!(validate_multi_polygon(&multi).is_ok());
    }
}
