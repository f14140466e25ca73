//! The exact orientation predicate.

use robust::{orient2d, Coord as RobustCoord};

/// How a point sits relative to a directed line through two others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The point lies to the left of the directed line.
    LeftTurn,
    /// The point lies to the right of the directed line.
    RightTurn,
    /// The three points are collinear.
    Collinear,
}

/// Classifies `s` against the directed line `p → q` by the sign of the
/// 2D cross product `(q - p) × (s - q)`.
///
/// The sign is computed with adaptive-precision arithmetic, so the
/// classification is exact for all finite inputs; near-degenerate
/// triples never misclassify.
pub fn orientation(p: (f64, f64), q: (f64, f64), s: (f64, f64)) -> Orientation {
    let det = orient2d(
        RobustCoord { x: p.0, y: p.1 },
        RobustCoord { x: q.0, y: q.1 },
        RobustCoord { x: s.0, y: s.1 },
    );
    if det > 0.0 {
        Orientation::LeftTurn
    } else if det < 0.0 {
        Orientation::RightTurn
    } else {
        Orientation::Collinear
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classification() {
        let p = (0.0, 0.0);
        let q = (4.0, 0.0);
        assert_eq!(orientation(p, q, (2.0, 1.0)), Orientation::LeftTurn);
        assert_eq!(orientation(p, q, (2.0, -1.0)), Orientation::RightTurn);
        assert_eq!(orientation(p, q, (8.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn exactly_collinear() {
        assert_eq!(
            orientation((0.0, 0.0), (3.0, 3.0), (19.0, 19.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn one_ulp_off_the_line() {
        // One ulp above y = x must classify as a strict left turn.
        let above = f64::from_bits(19.0_f64.to_bits() + 1);
        assert_eq!(
            orientation((0.0, 0.0), (3.0, 3.0), (19.0, above)),
            Orientation::LeftTurn
        );
        let below = f64::from_bits(19.0_f64.to_bits() - 1);
        assert_eq!(
            orientation((0.0, 0.0), (3.0, 3.0), (19.0, below)),
            Orientation::RightTurn
        );
    }

    #[test]
    fn reversing_the_line_flips_the_turn() {
        let s = (2.0, 1.0);
        assert_eq!(orientation((0.0, 0.0), (4.0, 0.0), s), Orientation::LeftTurn);
        assert_eq!(orientation((4.0, 0.0), (0.0, 0.0), s), Orientation::RightTurn);
    }
}
