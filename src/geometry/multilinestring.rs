//! The MultiLineString geometry type.

use crate::datatypes::CoordinatesType;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::geometry::LineString;

/// An ordered collection of LineStrings; members may independently be
/// empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    coordinates_type: CoordinatesType,
}

impl MultiLineString {
    /// Builds a validated MultiLineString.
    pub fn try_new(line_strings: Vec<LineString>) -> Result<Self> {
        let multi = Self::new_unchecked(line_strings);
        multi.validate()?;
        Ok(multi)
    }

    /// Builds a MultiLineString without validating its members. Member
    /// layouts are still unified to their common [`CoordinatesType`].
    pub fn new_unchecked(line_strings: Vec<LineString>) -> Self {
        let coordinates_type = line_strings
            .iter()
            .map(LineString::coordinates_type)
            .reduce(|a, b| a.intersection(b))
            .unwrap_or_default();
        let line_strings = line_strings
            .into_iter()
            .map(|ls| ls.forced_coordinates_type(coordinates_type))
            .collect();
        Self {
            line_strings,
            coordinates_type,
        }
    }

    /// The empty MultiLineString of the given layout.
    pub fn empty(coordinates_type: CoordinatesType) -> Self {
        Self {
            line_strings: Vec::new(),
            coordinates_type,
        }
    }

    /// Re-runs the validity rules on every member.
    pub fn validate(&self) -> Result<()> {
        self.line_strings.iter().try_for_each(LineString::validate)
    }

    /// The member LineStrings.
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// Number of members.
    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    /// The `i`-th member.
    ///
    /// # Panics
    ///
    /// Panics when `i` is out of range.
    pub fn line_string_n(&self, i: usize) -> &LineString {
        &self.line_strings[i]
    }

    /// True iff there are no members.
    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    /// The layout shared by every member.
    pub fn coordinates_type(&self) -> CoordinatesType {
        self.coordinates_type
    }

    /// The bounding box of all members.
    pub fn envelope(&self) -> Envelope {
        self.line_strings
            .iter()
            .fold(Envelope::empty(), |env, ls| env.union(&ls.envelope()))
    }

    /// A copy coerced to `coordinates_type`.
    pub fn forced_coordinates_type(&self, coordinates_type: CoordinatesType) -> Self {
        Self {
            line_strings: self
                .line_strings
                .iter()
                .map(|ls| ls.forced_coordinates_type(coordinates_type))
                .collect(),
            coordinates_type,
        }
    }

    /// A copy with every member's control-point order reversed.
    pub fn reversed(&self) -> Self {
        Self {
            line_strings: self.line_strings.iter().map(LineString::reversed).collect(),
            coordinates_type: self.coordinates_type,
        }
    }
}

impl Default for MultiLineString {
    /// The empty XY MultiLineString.
    fn default() -> Self {
        Self::empty(CoordinatesType::XY)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sequence::Sequence;

    fn ls(floats: &[f64]) -> LineString {
        LineString::new_unchecked(Sequence::new(floats.to_vec(), CoordinatesType::XY))
    }

    #[test]
    fn construction_and_accessors() {
        let multi = MultiLineString::try_new(vec![
            ls(&[0.0, 0.0, 1.0, 1.0]),
            LineString::empty(CoordinatesType::XY),
        ])
        .unwrap();
        assert_eq!(multi.num_line_strings(), 2);
        assert!(multi.line_string_n(1).is_empty());
    }

    #[test]
    fn invalid_member_rejected() {
        assert!(MultiLineString::try_new(vec![ls(&[5.0, 5.0])]).is_err());
    }
}
