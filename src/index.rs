//! Static spatial-index items.
//!
//! Validation and the derived algorithms query bulk-loaded, read-only
//! [`rstar::RTree`]s. The items here tag a bounding box with the index of
//! the segment or geometry it came from; range queries go through
//! [`rstar::RTree::locate_in_envelope_intersecting`], whose lazy
//! iteration lets callers stop at the first hit.

use rstar::{RTree, RTreeObject, AABB};

use crate::envelope::Envelope;
use crate::sequence::Sequence;

/// A line segment tagged with its position within a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentItem {
    /// XY of the segment start.
    pub start: (f64, f64),
    /// XY of the segment end.
    pub end: (f64, f64),
    /// Index of the segment (its start point) within the sequence.
    pub index: usize,
}

impl RTreeObject for SegmentItem {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.start.0.min(self.end.0), self.start.1.min(self.end.1)],
            [self.start.0.max(self.end.0), self.start.1.max(self.end.1)],
        )
    }
}

/// A geometry bounding box tagged with the index of the geometry it
/// bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeItem {
    /// The non-empty bounding box.
    pub envelope: Envelope,
    /// Index of the bounded geometry in its parent.
    pub index: usize,
}

impl RTreeObject for EnvelopeItem {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope.to_aabb()
    }
}

/// The non-degenerate segments of a sequence: consecutive point pairs
/// whose XY positions differ.
pub fn sequence_segments(seq: &Sequence) -> Vec<SegmentItem> {
    seq.segments_xy()
        .enumerate()
        .filter(|(_, (start, end))| start != end)
        .map(|(index, (start, end))| SegmentItem { start, end, index })
        .collect()
}

/// Bulk-loads a static tree over the non-degenerate segments of a
/// sequence.
pub fn segment_tree(seq: &Sequence) -> RTree<SegmentItem> {
    RTree::bulk_load(sequence_segments(seq))
}

/// Bulk-loads a static tree over tagged envelopes, skipping empty ones
/// (an empty envelope bounds no positions and can never match a query).
pub fn envelope_tree<I>(envelopes: I) -> RTree<EnvelopeItem>
where
    I: IntoIterator<Item = Envelope>,
{
    RTree::bulk_load(
        envelopes
            .into_iter()
            .enumerate()
            .filter(|(_, envelope)| !envelope.is_empty())
            .map(|(index, envelope)| EnvelopeItem { envelope, index })
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::CoordinatesType;

    #[test]
    fn degenerate_segments_are_skipped() {
        let seq = Sequence::new(
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 2.0, 2.0],
            CoordinatesType::XY,
        );
        let segments = sequence_segments(&seq);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].index, 1);
        assert_eq!(segments[1].index, 3);
    }

    #[test]
    fn range_query_finds_overlapping_segments() {
        let seq = Sequence::new(
            vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0],
            CoordinatesType::XY,
        );
        let tree = segment_tree(&seq);
        let query = AABB::from_corners([0.9, -0.1], [1.1, 0.1]);
        let hits: Vec<usize> = tree
            .locate_in_envelope_intersecting(&query)
            .map(|item| item.index)
            .collect();
        // The bottom edge and the right edge both touch the query box.
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&0));
        assert!(hits.contains(&1));
    }

    #[test]
    fn empty_envelopes_never_indexed() {
        let tree = envelope_tree(vec![
            Envelope::of_xy(0.0, 0.0),
            Envelope::empty(),
            Envelope::of_xy(5.0, 5.0),
        ]);
        assert_eq!(tree.size(), 2);
    }
}
