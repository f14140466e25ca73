//! The Point geometry type.

use crate::coord::Coord;
use crate::datatypes::CoordinatesType;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::validation::check_coord_finite;

/// A single position, or the empty point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
    coordinates_type: CoordinatesType,
}

impl Point {
    /// Builds a validated point from one tuple.
    pub fn try_new(coord: Coord) -> Result<Self> {
        let point = Self::new_unchecked(coord);
        point.validate()?;
        Ok(point)
    }

    /// Builds a point without validating it. The value may carry NaN or
    /// infinite positions; validity-dependent operations then have
    /// undefined (non-crashing) results.
    pub fn new_unchecked(coord: Coord) -> Self {
        Self {
            coordinates_type: coord.coordinates_type(),
            coord: Some(coord),
        }
    }

    /// The empty point of the given layout.
    pub fn empty(coordinates_type: CoordinatesType) -> Self {
        Self {
            coord: None,
            coordinates_type,
        }
    }

    /// Re-runs the validity rules on this value.
    pub fn validate(&self) -> Result<()> {
        match &self.coord {
            Some(coord) => check_coord_finite(coord, 0),
            None => Ok(()),
        }
    }

    /// The position, unless the point is empty.
    pub fn coord(&self) -> Option<Coord> {
        self.coord
    }

    /// True iff the point holds no position.
    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    /// The layout of the point's tuple.
    pub fn coordinates_type(&self) -> CoordinatesType {
        self.coordinates_type
    }

    /// The point's bounding box; empty for the empty point.
    pub fn envelope(&self) -> Envelope {
        match &self.coord {
            Some(coord) => Envelope::of_xy(coord.x, coord.y),
            None => Envelope::empty(),
        }
    }

    /// A copy coerced to `coordinates_type`.
    pub fn forced_coordinates_type(&self, coordinates_type: CoordinatesType) -> Self {
        Self {
            coord: self.coord.map(|c| c.forced(coordinates_type)),
            coordinates_type,
        }
    }
}

impl Default for Point {
    /// The empty XY point.
    fn default() -> Self {
        Self::empty(CoordinatesType::XY)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn validated_construction() {
        let point = Point::try_new(Coord::xy(1.0, 2.0)).unwrap();
        assert!(!point.is_empty());
        assert_eq!(point.coord(), Some(Coord::xy(1.0, 2.0)));
        assert_eq!(point.coordinates_type(), CoordinatesType::XY);
    }

    #[test]
    fn non_finite_rejected() {
        assert_eq!(
            Point::try_new(Coord::xy(f64::NAN, 0.0)),
            Err(ValidationError::NaNCoord { index: 0 })
        );
        assert_eq!(
            Point::try_new(Coord::xy(0.0, f64::NEG_INFINITY)),
            Err(ValidationError::InfCoord { index: 0 })
        );
    }

    #[test]
    fn unchecked_bypasses_rules() {
        let point = Point::new_unchecked(Coord::xy(f64::NAN, 0.0));
        assert!(point.validate().is_err());
    }

    #[test]
    fn empty_point() {
        let point = Point::empty(CoordinatesType::XYZ);
        assert!(point.is_empty());
        assert!(point.envelope().is_empty());
        assert_eq!(point.coordinates_type(), CoordinatesType::XYZ);
        assert!(point.validate().is_ok());
    }

    #[test]
    fn forced_coordinates_type() {
        let point = Point::new_unchecked(Coord::xyz(1.0, 2.0, 3.0));
        let forced = point.forced_coordinates_type(CoordinatesType::XYM);
        assert_eq!(forced.coord(), Some(Coord::xym(1.0, 2.0, 0.0)));
    }
}
