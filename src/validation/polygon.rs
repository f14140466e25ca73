//! The polygon rule engine.

use rstar::RTreeObject;

use crate::algorithm::coordinate_position::{position_in_ring, CoordPos};
use crate::algorithm::line_intersection::{segment_intersection, SegmentIntersection};
use crate::coord::Coord;
use crate::error::{Result, ValidationError};
use crate::geometry::{LineString, Polygon};
use crate::index::{envelope_tree, segment_tree, sequence_segments};
use crate::sequence::Sequence;
use crate::validation::graph::ConnectivityGraph;
use crate::validation::is_simple::is_simple_sequence;

/// How the boundaries of two rings meet.
pub(crate) enum BoundaryContact {
    /// No shared positions.
    Disjoint,
    /// Exactly one shared position.
    OnePoint((f64, f64)),
    /// A shared line, or two or more distinct shared positions.
    Several,
}

/// Runs the full polygon rule set, reporting the first violation.
pub(crate) fn validate_polygon(polygon: &Polygon) -> Result<()> {
    if polygon.is_empty() {
        return Ok(());
    }
    let rings = polygon.rings();
    for (index, ring) in rings.iter().enumerate() {
        validate_ring(ring, index)?;
    }

    // Ring pairs are found through an R-tree over ring envelopes and
    // examined once each; every single-point contact feeds the
    // connectivity graph.
    let tree = envelope_tree(rings.iter().map(LineString::envelope));
    let mut graph = ConnectivityGraph::new(rings.len());
    for (i, ring) in rings.iter().enumerate() {
        for item in tree.locate_in_envelope_intersecting(&ring.envelope().to_aabb()) {
            if item.index <= i {
                continue;
            }
            check_ring_pair(rings, i, item.index, &mut graph)?;
        }
    }

    let exterior = rings[0].sequence();
    for (offset, hole) in polygon.interiors().enumerate() {
        check_hole_within_exterior(exterior, hole, offset + 1)?;
    }

    if graph.has_cycle() {
        return Err(ValidationError::DisconnectedInterior);
    }
    Ok(())
}

/// One ring: non-empty, a valid LineString, closed, simple.
fn validate_ring(ring: &LineString, index: usize) -> Result<()> {
    if ring.is_empty() {
        return Err(ValidationError::RingEmpty { ring: index });
    }
    ring.validate()?;
    if !ring.is_closed() {
        return Err(ValidationError::RingNotClosed { ring: index });
    }
    if let Err(location) = is_simple_sequence(ring.sequence()) {
        return Err(ValidationError::RingNotSimple {
            ring: index,
            location: Coord::xy(location.0, location.1),
        });
    }
    Ok(())
}

fn check_ring_pair(
    rings: &[LineString],
    i: usize,
    j: usize,
    graph: &mut ConnectivityGraph,
) -> Result<()> {
    // Two holes may not nest. Start points decide: a hole starting
    // strictly inside another is nested (a start point on the other's
    // boundary is an expected touch).
    if i > 0 && j > 0 {
        let start_j = rings[j].sequence().xy(0);
        if position_in_ring(start_j, rings[i].sequence()) == CoordPos::Inside {
            return Err(ValidationError::NestedRings { inner: j, outer: i });
        }
        let start_i = rings[i].sequence().xy(0);
        if position_in_ring(start_i, rings[j].sequence()) == CoordPos::Inside {
            return Err(ValidationError::NestedRings { inner: i, outer: j });
        }
    }

    match boundary_contact(rings[i].sequence(), rings[j].sequence()) {
        BoundaryContact::Disjoint => {}
        BoundaryContact::OnePoint(point) => graph.add_touch(i, j, point),
        BoundaryContact::Several => {
            return Err(ValidationError::RingsMultiTouch {
                first: i,
                second: j,
            })
        }
    }
    Ok(())
}

/// Classifies the boundary-boundary intersection of two rings: disjoint,
/// one isolated position, or more. Stops at the second distinct find.
pub(crate) fn boundary_contact(a: &Sequence, b: &Sequence) -> BoundaryContact {
    let tree = segment_tree(b);
    let mut found: Option<(f64, f64)> = None;
    for segment in sequence_segments(a) {
        for other in tree.locate_in_envelope_intersecting(&segment.envelope()) {
            match segment_intersection(segment.start, segment.end, other.start, other.end) {
                SegmentIntersection::None => {}
                SegmentIntersection::Segment(..) => return BoundaryContact::Several,
                SegmentIntersection::Point(point) => match found {
                    None => found = Some(point),
                    Some(seen) if seen == point => {}
                    Some(_) => return BoundaryContact::Several,
                },
            }
        }
    }
    match found {
        None => BoundaryContact::Disjoint,
        Some(point) => BoundaryContact::OnePoint(point),
    }
}

/// Walks a hole's points until one classifies strictly inside or outside
/// the exterior ring; boundary touches are expected and skipped.
fn check_hole_within_exterior(
    exterior: &Sequence,
    hole: &LineString,
    index: usize,
) -> Result<()> {
    for point in hole.sequence().iter_xy() {
        match position_in_ring(point, exterior) {
            CoordPos::Inside => return Ok(()),
            CoordPos::Outside => {
                return Err(ValidationError::InteriorRingOutside { ring: index })
            }
            CoordPos::OnBoundary => {}
        }
    }
    Ok(())
}
