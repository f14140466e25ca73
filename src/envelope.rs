//! Axis-aligned XY bounding boxes.

use rstar::AABB;

/// An axis-aligned bounding box over XY.
///
/// An envelope is either empty or a (min, max) pair. A non-empty envelope
/// may degenerate to a single point (`min == max`) or to an axis-aligned
/// line (exactly one degenerate axis).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Envelope {
    bounds: Option<([f64; 2], [f64; 2])>,
}

impl Envelope {
    /// The empty envelope.
    pub fn empty() -> Self {
        Self { bounds: None }
    }

    /// The degenerate envelope covering a single position.
    pub fn of_xy(x: f64, y: f64) -> Self {
        Self {
            bounds: Some(([x, y], [x, y])),
        }
    }

    /// True iff the envelope covers no positions.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// True iff the envelope covers exactly one position.
    pub fn is_point(&self) -> bool {
        self.bounds.is_some_and(|(min, max)| min == max)
    }

    /// True iff exactly one axis is degenerate.
    pub fn is_line(&self) -> bool {
        self.bounds
            .is_some_and(|(min, max)| (min[0] == max[0]) != (min[1] == max[1]))
    }

    /// The (min x, min y) corner, unless empty.
    pub fn min(&self) -> Option<(f64, f64)> {
        self.bounds.map(|(min, _)| (min[0], min[1]))
    }

    /// The (max x, max y) corner, unless empty.
    pub fn max(&self) -> Option<(f64, f64)> {
        self.bounds.map(|(_, max)| (max[0], max[1]))
    }

    /// The center position, unless empty.
    pub fn center(&self) -> Option<(f64, f64)> {
        self.bounds
            .map(|(min, max)| ((min[0] + max[0]) / 2.0, (min[1] + max[1]) / 2.0))
    }

    /// Extent along X; 0 when empty.
    pub fn width(&self) -> f64 {
        self.bounds.map_or(0.0, |(min, max)| max[0] - min[0])
    }

    /// Extent along Y; 0 when empty.
    pub fn height(&self) -> f64 {
        self.bounds.map_or(0.0, |(min, max)| max[1] - min[1])
    }

    /// The smallest envelope covering `self` and the given position.
    pub fn expanded_to_include_xy(&self, x: f64, y: f64) -> Self {
        match self.bounds {
            None => Self::of_xy(x, y),
            Some((min, max)) => Self {
                bounds: Some((
                    [min[0].min(x), min[1].min(y)],
                    [max[0].max(x), max[1].max(y)],
                )),
            },
        }
    }

    /// The smallest envelope covering both operands.
    pub fn union(&self, other: &Envelope) -> Self {
        match (self.bounds, other.bounds) {
            (None, _) => *other,
            (_, None) => *self,
            (Some((amin, amax)), Some((bmin, bmax))) => Self {
                bounds: Some((
                    [amin[0].min(bmin[0]), amin[1].min(bmin[1])],
                    [amax[0].max(bmax[0]), amax[1].max(bmax[1])],
                )),
            },
        }
    }

    /// True iff the operands share at least one position. Empty envelopes
    /// intersect nothing.
    pub fn intersects(&self, other: &Envelope) -> bool {
        match (self.bounds, other.bounds) {
            (Some((amin, amax)), Some((bmin, bmax))) => {
                amin[0] <= bmax[0]
                    && bmin[0] <= amax[0]
                    && amin[1] <= bmax[1]
                    && bmin[1] <= amax[1]
            }
            _ => false,
        }
    }

    /// True iff the position lies inside or on the boundary.
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.bounds.is_some_and(|(min, max)| {
            min[0] <= x && x <= max[0] && min[1] <= y && y <= max[1]
        })
    }

    /// The equivalent `rstar` bounding box.
    ///
    /// # Panics
    ///
    /// Panics when the envelope is empty: an empty envelope covers no
    /// positions and has no spatial-index representation.
    pub fn to_aabb(&self) -> AABB<[f64; 2]> {
        let (min, max) = self.bounds.expect("empty envelope has no AABB");
        AABB::from_corners(min, max)
    }
}
