//! Polygon orientation from the signed edge sum.

use outline_core::Tolerance;
use outline_math::Point;
use serde::{Deserialize, Serialize};

/// Orientation of a face loop in the xy plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Negative edge sum: an outer boundary.
    CounterClockwise,
    /// Positive edge sum: a hole.
    Clockwise,
    /// Edge sum within tolerance of zero: no usable area.
    Degenerate,
}

impl Winding {
    /// Classify an edge sum computed over geometry with the given extent.
    pub fn classify(sum: f64, extent: f64, tolerance: Tolerance) -> Self {
        if tolerance.is_degenerate(sum, extent) {
            Winding::Degenerate
        } else if sum < 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::Degenerate => Winding::Degenerate,
        }
    }
}

/// Accumulate `(x[k+1] - x[k]) * (y[k+1] + y[k])` around the loop.
///
/// The sum is twice the negated signed area, so its sign does not depend on
/// which vertex the loop starts from. Indices must be valid for `coords`.
pub fn winding_sum<P: Point>(coords: &[P], face: &[usize]) -> f64 {
    let len = face.len();
    (0..len)
        .map(|k| {
            let a = coords[face[k]];
            let b = coords[face[(k + 1) % len]];
            (b.x() - a.x()) * (b.y() + a.y())
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_math::{DVec2, DVec3};

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_ccw_negative() {
        let sum = winding_sum(&square(), &[0, 1, 2, 3]);
        assert_eq!(sum, -200.0);
        assert_eq!(
            Winding::classify(sum, 10.0, Tolerance::default()),
            Winding::CounterClockwise
        );
    }

    #[test]
    fn test_cw_positive() {
        let sum = winding_sum(&square(), &[3, 2, 1, 0]);
        assert_eq!(sum, 200.0);
        assert_eq!(
            Winding::classify(sum, 10.0, Tolerance::default()),
            Winding::Clockwise
        );
    }

    #[test]
    fn test_colinear_degenerate() {
        let coords = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 2.0),
        ];
        let sum = winding_sum(&coords, &[0, 1, 2]);
        assert_eq!(
            Winding::classify(sum, 2.0, Tolerance::default()),
            Winding::Degenerate
        );
    }

    #[test]
    fn test_ignores_z() {
        let coords = vec![
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::new(4.0, 0.0, -1.0),
            DVec3::new(0.0, 4.0, 2.0),
        ];
        assert_eq!(winding_sum(&coords, &[0, 1, 2]), -16.0);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Winding::Clockwise.opposite(), Winding::CounterClockwise);
        assert_eq!(Winding::Degenerate.opposite(), Winding::Degenerate);
    }
}
