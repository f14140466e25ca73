//! The MultiPoint geometry type.

use crate::datatypes::CoordinatesType;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::geometry::Point;

/// An ordered collection of points; members may independently be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    coordinates_type: CoordinatesType,
}

impl MultiPoint {
    /// Builds a validated MultiPoint.
    pub fn try_new(points: Vec<Point>) -> Result<Self> {
        let multi = Self::new_unchecked(points);
        multi.validate()?;
        Ok(multi)
    }

    /// Builds a MultiPoint without validating its members. Member layouts
    /// are still unified to their common [`CoordinatesType`].
    pub fn new_unchecked(points: Vec<Point>) -> Self {
        let coordinates_type = points
            .iter()
            .map(Point::coordinates_type)
            .reduce(|a, b| a.intersection(b))
            .unwrap_or_default();
        let points = points
            .into_iter()
            .map(|point| point.forced_coordinates_type(coordinates_type))
            .collect();
        Self {
            points,
            coordinates_type,
        }
    }

    /// The empty MultiPoint of the given layout.
    pub fn empty(coordinates_type: CoordinatesType) -> Self {
        Self {
            points: Vec::new(),
            coordinates_type,
        }
    }

    /// Re-runs the validity rules on every member.
    pub fn validate(&self) -> Result<()> {
        self.points.iter().try_for_each(Point::validate)
    }

    /// The member points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of member points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The `i`-th member.
    ///
    /// # Panics
    ///
    /// Panics when `i` is out of range.
    pub fn point_n(&self, i: usize) -> &Point {
        &self.points[i]
    }

    /// True iff there are no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The layout shared by every member.
    pub fn coordinates_type(&self) -> CoordinatesType {
        self.coordinates_type
    }

    /// The bounding box of all members.
    pub fn envelope(&self) -> Envelope {
        self.points
            .iter()
            .fold(Envelope::empty(), |env, p| env.union(&p.envelope()))
    }

    /// A copy coerced to `coordinates_type`.
    pub fn forced_coordinates_type(&self, coordinates_type: CoordinatesType) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| p.forced_coordinates_type(coordinates_type))
                .collect(),
            coordinates_type,
        }
    }
}

impl Default for MultiPoint {
    /// The empty XY MultiPoint.
    fn default() -> Self {
        Self::empty(CoordinatesType::XY)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coord;

    #[test]
    fn members_may_be_empty() {
        let multi = MultiPoint::try_new(vec![
            Point::new_unchecked(Coord::xy(0.0, 0.0)),
            Point::empty(CoordinatesType::XY),
            Point::new_unchecked(Coord::xy(2.0, 3.0)),
        ])
        .unwrap();
        assert_eq!(multi.num_points(), 3);
        assert!(multi.point_n(1).is_empty());
        assert_eq!(multi.envelope().max(), Some((2.0, 3.0)));
    }

    #[test]
    fn member_layouts_unify() {
        let multi = MultiPoint::new_unchecked(vec![
            Point::new_unchecked(Coord::xyz(0.0, 0.0, 1.0)),
            Point::new_unchecked(Coord::xyzm(1.0, 1.0, 2.0, 3.0)),
        ]);
        assert_eq!(multi.coordinates_type(), CoordinatesType::XYZ);
        assert_eq!(multi.point_n(1).coord(), Some(Coord::xyz(1.0, 1.0, 2.0)));
    }

    #[test]
    fn invalid_member_rejected() {
        assert!(MultiPoint::try_new(vec![Point::new_unchecked(Coord::xy(f64::NAN, 0.0))]).is_err());
    }
}
