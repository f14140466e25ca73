//! Exact-classification segment intersection.

use crate::algorithm::orientation::{orientation, Orientation};

/// How two line segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments share no position.
    None,
    /// The segments share exactly one position.
    Point((f64, f64)),
    /// The segments overlap along a collinear sub-segment.
    Segment((f64, f64), (f64, f64)),
}

/// True iff `p` lies on the closed segment `s0 → s1`.
pub(crate) fn point_on_segment(p: (f64, f64), s0: (f64, f64), s1: (f64, f64)) -> bool {
    orientation(s0, s1, p) == Orientation::Collinear
        && s0.0.min(s1.0) <= p.0
        && p.0 <= s0.0.max(s1.0)
        && s0.1.min(s1.1) <= p.1
        && p.1 <= s0.1.max(s1.1)
}

/// Computes the intersection of the closed segments `a0 → a1` and
/// `b0 → b1`.
///
/// Classification (none / single point / collinear overlap) is decided
/// by the exact orientation predicate. When the segments properly cross,
/// the returned position is the parametric crossing point evaluated in
/// floats; when they touch at an input endpoint, that endpoint is
/// returned exactly.
pub fn segment_intersection(
    a0: (f64, f64),
    a1: (f64, f64),
    b0: (f64, f64),
    b1: (f64, f64),
) -> SegmentIntersection {
    if a0 == a1 {
        return degenerate_intersection(a0, b0, b1);
    }
    if b0 == b1 {
        return degenerate_intersection(b0, a0, a1);
    }

    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);

    if o1 == Orientation::Collinear && o2 == Orientation::Collinear {
        return collinear_overlap(a0, a1, b0, b1);
    }

    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    if o1 != o2 && o3 != o4 {
        // Touching configurations return the touched endpoint verbatim so
        // callers can compare it against sequence vertices.
        let point = if o1 == Orientation::Collinear {
            b0
        } else if o2 == Orientation::Collinear {
            b1
        } else if o3 == Orientation::Collinear {
            a0
        } else if o4 == Orientation::Collinear {
            a1
        } else {
            cross_point(a0, a1, b0, b1)
        };
        return SegmentIntersection::Point(point);
    }

    SegmentIntersection::None
}

fn degenerate_intersection(
    p: (f64, f64),
    s0: (f64, f64),
    s1: (f64, f64),
) -> SegmentIntersection {
    if s0 == s1 {
        if p == s0 {
            SegmentIntersection::Point(p)
        } else {
            SegmentIntersection::None
        }
    } else if point_on_segment(p, s0, s1) {
        SegmentIntersection::Point(p)
    } else {
        SegmentIntersection::None
    }
}

fn collinear_overlap(
    a0: (f64, f64),
    a1: (f64, f64),
    b0: (f64, f64),
    b1: (f64, f64),
) -> SegmentIntersection {
    // All four points sit on one line; compare along its dominant axis.
    let use_x = (a1.0 - a0.0).abs() >= (a1.1 - a0.1).abs();
    let key = |p: (f64, f64)| if use_x { p.0 } else { p.1 };

    let (a_lo, a_hi) = if key(a0) <= key(a1) { (a0, a1) } else { (a1, a0) };
    let (b_lo, b_hi) = if key(b0) <= key(b1) { (b0, b1) } else { (b1, b0) };

    let lo = if key(a_lo) >= key(b_lo) { a_lo } else { b_lo };
    let hi = if key(a_hi) <= key(b_hi) { a_hi } else { b_hi };

    if key(lo) > key(hi) {
        SegmentIntersection::None
    } else if key(lo) == key(hi) {
        SegmentIntersection::Point(lo)
    } else {
        SegmentIntersection::Segment(lo, hi)
    }
}

fn cross_point(a0: (f64, f64), a1: (f64, f64), b0: (f64, f64), b1: (f64, f64)) -> (f64, f64) {
    let d1 = (a1.0 - a0.0, a1.1 - a0.1);
    let d2 = (b1.0 - b0.0, b1.1 - b0.1);
    let denom = d1.0 * d2.1 - d1.1 * d2.0;
    let t = ((b0.0 - a0.0) * d2.1 - (b0.1 - a0.1) * d2.0) / denom;
    (a0.0 + t * d1.0, a0.1 + t * d1.1)
}
