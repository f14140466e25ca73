//! The coordinate layouts supported by every geometry type.

use std::fmt::Display;

/// Which of the optional Z and M values each control point of a geometry
/// carries.
///
/// The layout determines the per-tuple stride of a [`Sequence`]'s flat
/// buffer: 2 for XY, 3 for XYZ and XYM, 4 for XYZM.
///
/// [`Sequence`]: crate::sequence::Sequence
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinatesType {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl CoordinatesType {
    /// Builds the layout from its two independent flags.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => CoordinatesType::XY,
            (true, false) => CoordinatesType::XYZ,
            (false, true) => CoordinatesType::XYM,
            (true, true) => CoordinatesType::XYZM,
        }
    }

    /// Whether each tuple carries a Z value.
    pub fn has_z(&self) -> bool {
        matches!(self, CoordinatesType::XYZ | CoordinatesType::XYZM)
    }

    /// Whether each tuple carries an M value.
    pub fn has_m(&self) -> bool {
        matches!(self, CoordinatesType::XYM | CoordinatesType::XYZM)
    }

    /// Number of floats per tuple.
    pub fn dimension(&self) -> usize {
        match self {
            CoordinatesType::XY => 2,
            CoordinatesType::XYZ => 3,
            CoordinatesType::XYM => 3,
            CoordinatesType::XYZM => 4,
        }
    }

    /// The logical AND of the Z and M flags of `self` and `other`.
    ///
    /// This is the layout shared by two geometries when they are combined
    /// into one value, e.g. rings into a polygon.
    pub fn intersection(&self, other: Self) -> Self {
        Self::from_flags(
            self.has_z() && other.has_z(),
            self.has_m() && other.has_m(),
        )
    }
}

impl Display for CoordinatesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinatesType::XY => write!(f, "XY"),
            CoordinatesType::XYZ => write!(f, "XYZ"),
            CoordinatesType::XYM => write!(f, "XYM"),
            CoordinatesType::XYZM => write!(f, "XYZM"),
        }
    }
}
