//! The MultiPolygon geometry type.

use crate::datatypes::CoordinatesType;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::geometry::Polygon;
use crate::validation::validate_multi_polygon;

/// An ordered collection of polygons.
///
/// Validated members may touch each other only at finitely many boundary
/// points: no shared boundary lines, no overlapping interiors, no
/// nesting.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    coordinates_type: CoordinatesType,
}

impl MultiPolygon {
    /// Builds a validated MultiPolygon.
    pub fn try_new(polygons: Vec<Polygon>) -> Result<Self> {
        let multi = Self::new_unchecked(polygons);
        multi.validate()?;
        Ok(multi)
    }

    /// Builds a MultiPolygon without validating its members or their
    /// pairwise constraints. Member layouts are still unified to their
    /// common [`CoordinatesType`].
    pub fn new_unchecked(polygons: Vec<Polygon>) -> Self {
        let coordinates_type = polygons
            .iter()
            .map(Polygon::coordinates_type)
            .reduce(|a, b| a.intersection(b))
            .unwrap_or_default();
        let polygons = polygons
            .into_iter()
            .map(|p| p.forced_coordinates_type(coordinates_type))
            .collect();
        Self {
            polygons,
            coordinates_type,
        }
    }

    /// The empty MultiPolygon of the given layout.
    pub fn empty(coordinates_type: CoordinatesType) -> Self {
        Self {
            polygons: Vec::new(),
            coordinates_type,
        }
    }

    /// Re-runs the full rule set: every member individually, then the
    /// pairwise touching constraints.
    pub fn validate(&self) -> Result<()> {
        validate_multi_polygon(self)
    }

    /// The member polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of members.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// The `i`-th member.
    ///
    /// # Panics
    ///
    /// Panics when `i` is out of range.
    pub fn polygon_n(&self, i: usize) -> &Polygon {
        &self.polygons[i]
    }

    /// True iff there are no members.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The layout shared by every member.
    pub fn coordinates_type(&self) -> CoordinatesType {
        self.coordinates_type
    }

    /// The bounding box of all members.
    pub fn envelope(&self) -> Envelope {
        self.polygons
            .iter()
            .fold(Envelope::empty(), |env, p| env.union(&p.envelope()))
    }

    /// A copy coerced to `coordinates_type`.
    pub fn forced_coordinates_type(&self, coordinates_type: CoordinatesType) -> Self {
        Self {
            polygons: self
                .polygons
                .iter()
                .map(|p| p.forced_coordinates_type(coordinates_type))
                .collect(),
            coordinates_type,
        }
    }

    /// A copy with every ring of every member reversed.
    pub fn reversed(&self) -> Self {
        Self {
            polygons: self.polygons.iter().map(Polygon::reversed).collect(),
            coordinates_type: self.coordinates_type,
        }
    }
}

impl Default for MultiPolygon {
    /// The empty XY MultiPolygon.
    fn default() -> Self {
        Self::empty(CoordinatesType::XY)
    }
}
