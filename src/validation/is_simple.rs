//! LineString simplicity.

use rstar::{RTree, RTreeObject};

use crate::algorithm::line_intersection::{segment_intersection, SegmentIntersection};
use crate::index::{sequence_segments, SegmentItem};
use crate::sequence::Sequence;

/// Decides whether a curve never revisits a position, except that a
/// closed curve may share its start/end point.
///
/// The curve's non-degenerate segments are bulk-loaded into an R-tree;
/// each segment is range-queried against it and every candidate pair is
/// classified once (higher index against lower). The walk stops at the
/// first violation, whose position is returned.
pub(crate) fn is_simple_sequence(seq: &Sequence) -> Result<(), (f64, f64)> {
    // Re-tag the surviving segments with their rank along the curve:
    // adjacency below means consecutive *non-degenerate* segments.
    let segments: Vec<SegmentItem> = sequence_segments(seq)
        .into_iter()
        .enumerate()
        .map(|(rank, item)| SegmentItem {
            start: item.start,
            end: item.end,
            index: rank,
        })
        .collect();
    if segments.len() <= 1 {
        return Ok(());
    }

    let closed = seq.is_closed();
    let last = segments.len() - 1;
    let tree = RTree::bulk_load(segments.clone());

    for a in &segments {
        for b in tree.locate_in_envelope_intersecting(&a.envelope()) {
            if b.index <= a.index {
                continue;
            }
            match segment_intersection(a.start, a.end, b.start, b.end) {
                SegmentIntersection::None => {}
                SegmentIntersection::Segment(p, _) => return Err(p),
                SegmentIntersection::Point(p) => {
                    let adjacent = b.index == a.index + 1;
                    if adjacent && p == a.end {
                        continue;
                    }
                    let ring_closure = closed && a.index == 0 && b.index == last;
                    if ring_closure && p == a.start {
                        continue;
                    }
                    return Err(p);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::CoordinatesType;

    fn seq(floats: &[f64]) -> Sequence {
        Sequence::new(floats.to_vec(), CoordinatesType::XY)
    }

    #[test]
    fn open_chain_is_simple() {
        assert!(is_simple_sequence(&seq(&[0.0, 0.0, 1.0, 0.0, 2.0, 1.0])).is_ok());
    }

    #[test]
    fn closed_square_is_simple() {
        assert!(is_simple_sequence(&seq(&[
            0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0
        ]))
        .is_ok());
    }

    #[test]
    fn repeated_interior_point() {
        // LINESTRING(1 1, 0 0, 1 1, 2 2, 1 1) revisits (1 1).
        let result = is_simple_sequence(&seq(&[
            1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0,
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn proper_self_crossing() {
        let result = is_simple_sequence(&seq(&[
            0.0, 0.0, 2.0, 2.0, 2.0, 0.0, 0.0, 2.0,
        ]));
        assert_eq!(result, Err((1.0, 1.0)));
    }

    #[test]
    fn spike_is_not_simple() {
        assert!(is_simple_sequence(&seq(&[0.0, 0.0, 2.0, 0.0, 1.0, 0.0])).is_err());
    }

    #[test]
    fn open_curve_passing_through_its_start_is_not_simple() {
        // The curve runs through (0 0) again mid-way but does not end
        // there, so the start/end allowance does not apply.
        let result = is_simple_sequence(&seq(&[
            0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 0.0, -2.0, 0.0,
        ]));
        assert_eq!(result, Err((0.0, 0.0)));
    }

    #[test]
    fn duplicate_consecutive_points_are_ignored() {
        assert!(is_simple_sequence(&seq(&[
            0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 2.0, 1.0
        ]))
        .is_ok());
    }

    #[test]
    fn two_point_line_is_simple() {
        assert!(is_simple_sequence(&seq(&[0.0, 0.0, 1.0, 1.0])).is_ok());
    }

    #[test]
    fn empty_is_simple() {
        assert!(is_simple_sequence(&Sequence::empty(CoordinatesType::XY)).is_ok());
    }
}
