//! Defines [`ValidationError`], the closed set of rule violations reported
//! by geometry validation.

use thiserror::Error;

use crate::coord::Coord;

/// A violation of the geometry validity rules.
///
/// Validation reports the *first* violation found and stops; it never
/// aggregates. Variants carry the offending coordinate and/or ring or
/// member index where one exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A control point has an infinite X or Y value.
    #[error("coordinate {index} has an infinite X or Y value")]
    InfCoord {
        /// Position of the coordinate within its sequence.
        index: usize,
    },

    /// A control point has a NaN X or Y value.
    #[error("coordinate {index} has a NaN X or Y value")]
    NaNCoord {
        /// Position of the coordinate within its sequence.
        index: usize,
    },

    /// A non-empty LineString contains fewer than two distinct points.
    #[error("line string contains fewer than two distinct points")]
    TooFewPoints,

    /// A polygon ring is an empty LineString.
    #[error("ring {ring} is empty")]
    RingEmpty {
        /// Ring index within the polygon (0 is the exterior).
        ring: usize,
    },

    /// A polygon ring does not end at its start point.
    #[error("ring {ring} is not closed")]
    RingNotClosed {
        /// Ring index within the polygon (0 is the exterior).
        ring: usize,
    },

    /// A polygon ring intersects itself.
    #[error("ring {ring} is not simple: self-intersection at {location}")]
    RingNotSimple {
        /// Ring index within the polygon (0 is the exterior).
        ring: usize,
        /// A point where the ring meets itself.
        location: Coord,
    },

    /// An interior ring lies strictly inside another interior ring.
    #[error("ring {inner} is nested inside ring {outer}")]
    NestedRings {
        /// Index of the nested ring.
        inner: usize,
        /// Index of the ring containing it.
        outer: usize,
    },

    /// An interior ring strays outside the exterior ring.
    #[error("interior ring {ring} is not contained in the exterior ring")]
    InteriorRingOutside {
        /// Index of the interior ring.
        ring: usize,
    },

    /// Ring touch points pinch the polygon interior into more than one
    /// connected piece.
    #[error("polygon interior is disconnected by ring touch points")]
    DisconnectedInterior,

    /// Two rings of one polygon meet at more than one point.
    #[error("rings {first} and {second} intersect at more than one point")]
    RingsMultiTouch {
        /// Index of the lower-numbered ring.
        first: usize,
        /// Index of the higher-numbered ring.
        second: usize,
    },

    /// Two member polygons of a MultiPolygon share boundary lines, overlap,
    /// or nest.
    #[error("polygons {first} and {second} interact beyond a finite set of boundary points")]
    PolysMultiTouch {
        /// Index of the lower-numbered member.
        first: usize,
        /// Index of the higher-numbered member.
        second: usize,
    },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, ValidationError>;
