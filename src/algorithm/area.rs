//! Planar area.

use crate::geometry::{Geometry, MultiPolygon, Polygon};
use crate::sequence::Sequence;

/// Signed shoelace area of the region enclosed by `ring`; positive for
/// counter-clockwise winding. The ring is taken as closed whether or not
/// its last point repeats the first.
pub(crate) fn ring_signed_area(ring: &Sequence) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let (x0, y0) = ring.xy(i);
        let (x1, y1) = ring.xy((i + 1) % n);
        sum += x0 * y1 - x1 * y0;
    }
    sum / 2.0
}

/// Planar surface area.
pub trait Area {
    /// The unsigned area: for a polygon, the exterior's area minus the
    /// holes'; independent of ring winding.
    fn unsigned_area(&self) -> f64;
}

impl Area for Polygon {
    fn unsigned_area(&self) -> f64 {
        let Some(exterior) = self.exterior() else {
            return 0.0;
        };
        let holes: f64 = self
            .interiors()
            .map(|ring| ring_signed_area(ring.sequence()).abs())
            .sum();
        ring_signed_area(exterior.sequence()).abs() - holes
    }
}

impl Area for MultiPolygon {
    fn unsigned_area(&self) -> f64 {
        self.polygons().iter().map(Area::unsigned_area).sum()
    }
}

impl Area for Geometry {
    fn unsigned_area(&self) -> f64 {
        match self {
            Geometry::Polygon(g) => g.unsigned_area(),
            Geometry::MultiPolygon(g) => g.unsigned_area(),
            Geometry::GeometryCollection(g) => {
                g.geometries().iter().map(Area::unsigned_area).sum()
            }
            _ => 0.0,
        }
    }
}
