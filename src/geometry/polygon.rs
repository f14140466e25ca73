//! The Polygon geometry type.

use crate::datatypes::CoordinatesType;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::geometry::LineString;
use crate::validation::validate_polygon;

/// An areal geometry bounded by one exterior ring and zero or more
/// interior rings (holes).
///
/// A validated non-empty polygon has closed, simple, pairwise
/// compatible rings and a connected interior. The polygon's
/// [`CoordinatesType`] is the logical AND of its ring types; rings are
/// coerced to it on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    coordinates_type: CoordinatesType,
}

impl Polygon {
    /// Builds a validated polygon from its rings (exterior first).
    pub fn try_new(rings: Vec<LineString>) -> Result<Self> {
        let polygon = Self::new_unchecked(rings);
        polygon.validate()?;
        Ok(polygon)
    }

    /// Builds a polygon without running the ring rules. Ring layouts are
    /// still unified to their common [`CoordinatesType`].
    pub fn new_unchecked(rings: Vec<LineString>) -> Self {
        let coordinates_type = rings
            .iter()
            .map(LineString::coordinates_type)
            .reduce(|a, b| a.intersection(b))
            .unwrap_or_default();
        let rings = rings
            .into_iter()
            .map(|ring| ring.forced_coordinates_type(coordinates_type))
            .collect();
        Self {
            rings,
            coordinates_type,
        }
    }

    /// The empty polygon of the given layout.
    pub fn empty(coordinates_type: CoordinatesType) -> Self {
        Self {
            rings: Vec::new(),
            coordinates_type,
        }
    }

    /// Re-runs the full rule set on this value.
    pub fn validate(&self) -> Result<()> {
        validate_polygon(self)
    }

    /// The exterior ring, unless the polygon is empty.
    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// Number of rings, the exterior included.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The `i`-th ring (0 is the exterior).
    ///
    /// # Panics
    ///
    /// Panics when `i` is out of range.
    pub fn ring_n(&self, i: usize) -> &LineString {
        &self.rings[i]
    }

    /// Number of interior rings.
    pub fn num_interior_rings(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// The `i`-th interior ring.
    ///
    /// # Panics
    ///
    /// Panics when `i` is out of range.
    pub fn interior_n(&self, i: usize) -> &LineString {
        &self.rings[i + 1]
    }

    /// Iterates over the interior rings.
    pub fn interiors(&self) -> impl Iterator<Item = &LineString> {
        self.rings.iter().skip(1)
    }

    /// True iff the polygon has no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// The layout shared by every ring.
    pub fn coordinates_type(&self) -> CoordinatesType {
        self.coordinates_type
    }

    /// The bounding box of all rings.
    pub fn envelope(&self) -> Envelope {
        self.rings
            .iter()
            .fold(Envelope::empty(), |env, ring| env.union(&ring.envelope()))
    }

    /// A copy coerced to `coordinates_type`.
    pub fn forced_coordinates_type(&self, coordinates_type: CoordinatesType) -> Self {
        Self {
            rings: self
                .rings
                .iter()
                .map(|ring| ring.forced_coordinates_type(coordinates_type))
                .collect(),
            coordinates_type,
        }
    }

    /// A copy with every ring's control-point order reversed.
    pub fn reversed(&self) -> Self {
        Self {
            rings: self.rings.iter().map(LineString::reversed).collect(),
            coordinates_type: self.coordinates_type,
        }
    }
}

impl Default for Polygon {
    /// The empty XY polygon.
    fn default() -> Self {
        Self::empty(CoordinatesType::XY)
    }
}
