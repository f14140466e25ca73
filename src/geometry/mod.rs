//! The seven Simple Features geometry types and the [`Geometry`] sum type
//! over them.

pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use crate::datatypes::CoordinatesType;
use crate::envelope::Envelope;
use crate::error::Result;

/// Any Simple Features geometry value.
///
/// Each variant owns its member value directly. The default `Geometry`
/// is the empty [`GeometryCollection`] — an explicit constructor
/// contract, never an uninitialized state.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A GeometryCollection.
    GeometryCollection(GeometryCollection),
    /// A Point.
    Point(Point),
    /// A LineString.
    LineString(LineString),
    /// A Polygon.
    Polygon(Polygon),
    /// A MultiPoint.
    MultiPoint(MultiPoint),
    /// A MultiLineString.
    MultiLineString(MultiLineString),
    /// A MultiPolygon.
    MultiPolygon(MultiPolygon),
}

/// Applies one expression to whichever member a [`Geometry`] holds.
macro_rules! dispatch {
    ($value:expr, $geom:ident => $body:expr) => {
        match $value {
            Geometry::GeometryCollection($geom) => $body,
            Geometry::Point($geom) => $body,
            Geometry::LineString($geom) => $body,
            Geometry::Polygon($geom) => $body,
            Geometry::MultiPoint($geom) => $body,
            Geometry::MultiLineString($geom) => $body,
            Geometry::MultiPolygon($geom) => $body,
        }
    };
}

pub(crate) use dispatch;

impl Geometry {
    /// True iff the held geometry is empty.
    pub fn is_empty(&self) -> bool {
        dispatch!(self, g => g.is_empty())
    }

    /// The layout of the held geometry.
    pub fn coordinates_type(&self) -> CoordinatesType {
        dispatch!(self, g => g.coordinates_type())
    }

    /// The bounding box of the held geometry.
    pub fn envelope(&self) -> Envelope {
        dispatch!(self, g => g.envelope())
    }

    /// Re-runs the full rule set on the held geometry.
    pub fn validate(&self) -> Result<()> {
        dispatch!(self, g => g.validate())
    }

    /// True iff [`validate`](Self::validate) reports no violation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// A copy coerced to `coordinates_type`.
    pub fn forced_coordinates_type(&self, coordinates_type: CoordinatesType) -> Self {
        match self {
            Geometry::GeometryCollection(g) => {
                Geometry::GeometryCollection(g.forced_coordinates_type(coordinates_type))
            }
            Geometry::Point(g) => Geometry::Point(g.forced_coordinates_type(coordinates_type)),
            Geometry::LineString(g) => {
                Geometry::LineString(g.forced_coordinates_type(coordinates_type))
            }
            Geometry::Polygon(g) => Geometry::Polygon(g.forced_coordinates_type(coordinates_type)),
            Geometry::MultiPoint(g) => {
                Geometry::MultiPoint(g.forced_coordinates_type(coordinates_type))
            }
            Geometry::MultiLineString(g) => {
                Geometry::MultiLineString(g.forced_coordinates_type(coordinates_type))
            }
            Geometry::MultiPolygon(g) => {
                Geometry::MultiPolygon(g.forced_coordinates_type(coordinates_type))
            }
        }
    }

    /// A copy with Z and M dropped.
    pub fn force_2d(&self) -> Self {
        self.forced_coordinates_type(CoordinatesType::XY)
    }

    /// A copy with every curve's control-point order reversed; punctal
    /// geometries pass through unchanged.
    pub fn reversed(&self) -> Self {
        match self {
            Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.reversed()),
            Geometry::Point(g) => Geometry::Point(g.clone()),
            Geometry::LineString(g) => Geometry::LineString(g.reversed()),
            Geometry::Polygon(g) => Geometry::Polygon(g.reversed()),
            Geometry::MultiPoint(g) => Geometry::MultiPoint(g.clone()),
            Geometry::MultiLineString(g) => Geometry::MultiLineString(g.reversed()),
            Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.reversed()),
        }
    }
}

impl Default for Geometry {
    /// The empty XY GeometryCollection.
    fn default() -> Self {
        Geometry::GeometryCollection(GeometryCollection::default())
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_empty_collection() {
        let geometry = Geometry::default();
        assert_eq!(
            geometry,
            Geometry::GeometryCollection(GeometryCollection::default())
        );
        assert!(geometry.is_empty());
        assert!(geometry.is_valid());
        assert_eq!(geometry.coordinates_type(), CoordinatesType::XY);
    }

    #[test]
    fn from_member_types() {
        let geometry: Geometry = Point::default().into();
        assert!(matches!(geometry, Geometry::Point(_)));
        assert!(geometry.is_empty());
    }
}
