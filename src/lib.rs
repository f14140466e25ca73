//! An OGC Simple Features geometry model with a topology validation
//! engine and exact-predicate planar algorithms.
//!
//! The seven geometry kinds (Point, LineString, Polygon, MultiPoint,
//! MultiLineString, MultiPolygon, GeometryCollection) are immutable
//! values over flat coordinate [`Sequence`]s, each optionally carrying Z
//! and M dimensions. Construction either validates
//! ([`try_new`](geometry::Polygon::try_new)) or is explicitly unchecked;
//! validation itself is a pure pass that bulk-loads a private R-tree,
//! classifies with adaptive-precision predicates, and reports the first
//! rule violation as a [`ValidationError`].
//!
//! ```
//! use geo_features::{CoordinatesType, LineString, Sequence};
//!
//! let ring = LineString::try_new(Sequence::new(
//!     vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0],
//!     CoordinatesType::XY,
//! ))?;
//! assert!(ring.is_closed());
//! assert!(ring.is_simple());
//! # Ok::<(), geo_features::ValidationError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use coord::Coord;
pub use datatypes::CoordinatesType;
pub use envelope::Envelope;
pub use error::{Result, ValidationError};
pub use geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
pub use sequence::Sequence;

pub mod algorithm;
pub mod coord;
pub mod datatypes;
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod index;
pub mod sequence;
#[cfg(test)]
pub(crate) mod test;
mod validation;
