//! Deterministic ring winding.

use crate::algorithm::orientation::{orientation, Orientation};
use crate::geometry::{Geometry, GeometryCollection, MultiPolygon, Polygon};
use crate::sequence::Sequence;

/// Reorients polygon rings to a fixed winding convention.
///
/// `force_cw` turns exteriors clockwise and holes counter-clockwise;
/// `force_ccw` is the mirror image. Rings already winding the right way
/// are kept verbatim; reoriented rings reverse their control-point
/// order. Non-areal geometries pass through unchanged.
pub trait Orient {
    /// A copy with exteriors clockwise and holes counter-clockwise.
    fn force_cw(&self) -> Self;

    /// A copy with exteriors counter-clockwise and holes clockwise.
    fn force_ccw(&self) -> Self;
}

/// Whether a closed ring winds counter-clockwise.
///
/// The winding is judged with the exact predicate at the bottom-most,
/// then left-most vertex, whose interior angle is guaranteed convex.
pub(crate) fn ring_is_ccw(ring: &Sequence) -> bool {
    let n = if ring.is_closed() {
        ring.len() - 1
    } else {
        ring.len()
    };
    if n < 3 {
        return false;
    }

    let mut pivot = 0;
    for i in 1..n {
        let (x, y) = ring.xy(i);
        let (px, py) = ring.xy(pivot);
        if y < py || (y == py && x < px) {
            pivot = i;
        }
    }
    let vertex = ring.xy(pivot);

    // Nearest distinct neighbours around the cycle; duplicated
    // positions are stepped over.
    let mut prev = (pivot + n - 1) % n;
    while ring.xy(prev) == vertex && prev != pivot {
        prev = (prev + n - 1) % n;
    }
    let mut next = (pivot + 1) % n;
    while ring.xy(next) == vertex && next != pivot {
        next = (next + 1) % n;
    }

    orientation(ring.xy(prev), vertex, ring.xy(next)) == Orientation::LeftTurn
}

fn oriented(polygon: &Polygon, exterior_ccw: bool) -> Polygon {
    if polygon.is_empty() {
        return polygon.clone();
    }
    Polygon::new_unchecked(
        polygon
            .rings()
            .iter()
            .enumerate()
            .map(|(index, ring)| {
                let want_ccw = if index == 0 {
                    exterior_ccw
                } else {
                    !exterior_ccw
                };
                if ring.is_empty() || ring_is_ccw(ring.sequence()) == want_ccw {
                    ring.clone()
                } else {
                    ring.reversed()
                }
            })
            .collect(),
    )
}

impl Orient for Polygon {
    fn force_cw(&self) -> Polygon {
        oriented(self, false)
    }

    fn force_ccw(&self) -> Polygon {
        oriented(self, true)
    }
}

impl Orient for MultiPolygon {
    fn force_cw(&self) -> MultiPolygon {
        if self.is_empty() {
            return self.clone();
        }
        MultiPolygon::new_unchecked(self.polygons().iter().map(Orient::force_cw).collect())
    }

    fn force_ccw(&self) -> MultiPolygon {
        if self.is_empty() {
            return self.clone();
        }
        MultiPolygon::new_unchecked(self.polygons().iter().map(Orient::force_ccw).collect())
    }
}

impl Orient for GeometryCollection {
    fn force_cw(&self) -> GeometryCollection {
        if self.is_empty() {
            return self.clone();
        }
        GeometryCollection::new_unchecked(
            self.geometries().iter().map(Orient::force_cw).collect(),
        )
    }

    fn force_ccw(&self) -> GeometryCollection {
        if self.is_empty() {
            return self.clone();
        }
        GeometryCollection::new_unchecked(
            self.geometries().iter().map(Orient::force_ccw).collect(),
        )
    }
}

impl Orient for Geometry {
    fn force_cw(&self) -> Geometry {
        match self {
            Geometry::Polygon(g) => g.force_cw().into(),
            Geometry::MultiPolygon(g) => g.force_cw().into(),
            Geometry::GeometryCollection(g) => g.force_cw().into(),
            other => other.clone(),
        }
    }

    fn force_ccw(&self) -> Geometry {
        match self {
            Geometry::Polygon(g) => g.force_ccw().into(),
            Geometry::MultiPolygon(g) => g.force_ccw().into(),
            Geometry::GeometryCollection(g) => g.force_ccw().into(),
            other => other.clone(),
        }
    }
}
