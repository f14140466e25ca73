//! The GeometryCollection geometry type.

use crate::datatypes::CoordinatesType;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::geometry::Geometry;

/// An ordered collection of arbitrary geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    coordinates_type: CoordinatesType,
}

impl GeometryCollection {
    /// Builds a validated GeometryCollection.
    pub fn try_new(geometries: Vec<Geometry>) -> Result<Self> {
        let collection = Self::new_unchecked(geometries);
        collection.validate()?;
        Ok(collection)
    }

    /// Builds a GeometryCollection without validating its members. Member
    /// layouts are still unified to their common [`CoordinatesType`].
    pub fn new_unchecked(geometries: Vec<Geometry>) -> Self {
        let coordinates_type = geometries
            .iter()
            .map(Geometry::coordinates_type)
            .reduce(|a, b| a.intersection(b))
            .unwrap_or_default();
        let geometries = geometries
            .into_iter()
            .map(|g| g.forced_coordinates_type(coordinates_type))
            .collect();
        Self {
            geometries,
            coordinates_type,
        }
    }

    /// The empty GeometryCollection of the given layout.
    pub fn empty(coordinates_type: CoordinatesType) -> Self {
        Self {
            geometries: Vec::new(),
            coordinates_type,
        }
    }

    /// Re-runs the validity rules on every member, recursively.
    pub fn validate(&self) -> Result<()> {
        self.geometries.iter().try_for_each(Geometry::validate)
    }

    /// The member geometries.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Number of members.
    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// The `i`-th member.
    ///
    /// # Panics
    ///
    /// Panics when `i` is out of range.
    pub fn geometry_n(&self, i: usize) -> &Geometry {
        &self.geometries[i]
    }

    /// True iff there are no members.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// The layout shared by every member.
    pub fn coordinates_type(&self) -> CoordinatesType {
        self.coordinates_type
    }

    /// The bounding box of all members.
    pub fn envelope(&self) -> Envelope {
        self.geometries
            .iter()
            .fold(Envelope::empty(), |env, g| env.union(&g.envelope()))
    }

    /// A copy coerced to `coordinates_type`.
    pub fn forced_coordinates_type(&self, coordinates_type: CoordinatesType) -> Self {
        Self {
            geometries: self
                .geometries
                .iter()
                .map(|g| g.forced_coordinates_type(coordinates_type))
                .collect(),
            coordinates_type,
        }
    }

    /// A copy with every member reversed.
    pub fn reversed(&self) -> Self {
        Self {
            geometries: self.geometries.iter().map(Geometry::reversed).collect(),
            coordinates_type: self.coordinates_type,
        }
    }
}

impl Default for GeometryCollection {
    /// The empty XY GeometryCollection.
    fn default() -> Self {
        Self::empty(CoordinatesType::XY)
    }
}
