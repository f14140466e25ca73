//! Predicates and derived algorithms over the geometry types.
//!
//! Every algorithm is a single synchronous pass: it reads an immutable
//! value, allocates whatever index or scratch state it needs, and
//! returns a new value. Robustness-critical classifications all go
//! through the exact [`orientation`] predicate.

pub mod area;
pub mod convex_hull;
pub mod coordinate_position;
pub mod densify;
pub mod euclidean_length;
pub mod line_intersection;
pub mod line_interpolate_point;
pub mod map_coords;
pub mod orient;
pub mod orientation;
pub mod point_on_surface;
pub mod simplify;
pub mod snap_to_grid;

pub use area::Area;
pub use convex_hull::ConvexHull;
pub use coordinate_position::{position_in_polygon, position_in_ring, CoordPos};
pub use densify::Densify;
pub use euclidean_length::EuclideanLength;
pub use line_intersection::{segment_intersection, SegmentIntersection};
pub use line_interpolate_point::{LineInterpolatePoint, LinearInterpolator};
pub use map_coords::TransformXy;
pub use orient::Orient;
pub use orientation::{orientation, Orientation};
pub use point_on_surface::PointOnSurface;
pub use simplify::Simplify;
pub use snap_to_grid::SnapToGrid;
