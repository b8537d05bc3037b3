//! Knots: one control vertex of a piecewise cubic Bezier curve.

use outline_math::Point;
use serde::{Deserialize, Serialize};

pub(crate) const ONE_THIRD: f64 = 1.0 / 3.0;
pub(crate) const TWO_THIRDS: f64 = 2.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;

/// A coordinate plus the handles shaping the segments entering (rear) and
/// leaving (fore) it.
///
/// The segment from knot `a` to knot `b` has control points `a.coord`,
/// `a.fore_handle`, `b.rear_handle`, `b.coord`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Knot<P> {
    pub coord: P,
    pub rear_handle: P,
    pub fore_handle: P,
}

impl<P: Point> Knot<P> {
    /// A knot whose handles both sit on its coordinate.
    pub fn new(coord: P) -> Self {
        Self {
            coord,
            rear_handle: coord,
            fore_handle: coord,
        }
    }

    pub fn with_handles(coord: P, rear_handle: P, fore_handle: P) -> Self {
        Self {
            coord,
            rear_handle,
            fore_handle,
        }
    }

    /// Set the fore handle to the rear handle reflected through the coordinate.
    pub fn mirror_forward(&mut self) -> &mut Self {
        self.fore_handle = self.rear_handle.reflect(self.coord);
        self
    }

    /// Set the rear handle to the fore handle reflected through the coordinate.
    pub fn mirror_backward(&mut self) -> &mut Self {
        self.rear_handle = self.fore_handle.reflect(self.coord);
        self
    }

    /// Swap fore and rear handles, for traversing the curve the other way.
    pub fn reverse(&mut self) -> &mut Self {
        std::mem::swap(&mut self.fore_handle, &mut self.rear_handle);
        self
    }

    /// Move the coordinate to `p`, carrying both handles along.
    pub fn relocate(&mut self, p: P) -> &mut Self {
        let offset = p - self.coord;
        self.translate(offset)
    }

    pub fn translate(&mut self, v: P) -> &mut Self {
        self.coord = self.coord + v;
        self.rear_handle = self.rear_handle + v;
        self.fore_handle = self.fore_handle + v;
        self
    }

    /// Uniform scale about the origin.
    pub fn scale(&mut self, s: f64) -> &mut Self {
        self.coord = self.coord * s;
        self.rear_handle = self.rear_handle * s;
        self.fore_handle = self.fore_handle * s;
        self
    }

    pub fn fore_vec(&self) -> P {
        self.fore_handle - self.coord
    }

    pub fn rear_vec(&self) -> P {
        self.rear_handle - self.coord
    }

    pub fn is_finite(&self) -> bool {
        self.coord.all_finite() && self.rear_handle.all_finite() && self.fore_handle.all_finite()
    }

    /// Straight segment from `prev` to `next`.
    ///
    /// Handles land at 1/3 and 2/3 along the chord so the cubic reproduces
    /// the line exactly.
    pub fn from_seg_linear(next: P, prev: &mut Knot<P>) -> Knot<P> {
        prev.fore_handle = prev.coord.mix(next, ONE_THIRD);
        Knot {
            coord: next,
            rear_handle: next.mix(prev.coord, ONE_THIRD),
            fore_handle: next,
        }
    }

    /// Quadratic segment elevated to cubic form.
    pub fn from_seg_quadratic(control: P, next: P, prev: &mut Knot<P>) -> Knot<P> {
        prev.fore_handle = prev.coord.mix(control, TWO_THIRDS);
        Knot {
            coord: next,
            rear_handle: next.mix(control, TWO_THIRDS),
            fore_handle: next,
        }
    }

    pub fn from_seg_cubic(control0: P, control1: P, next: P, prev: &mut Knot<P>) -> Knot<P> {
        prev.fore_handle = control0;
        Knot {
            coord: next,
            rear_handle: control1,
            fore_handle: next,
        }
    }

    /// Cubic segment whose first control point mirrors the previous knot's
    /// rear handle, as in SVG's smooth curve-to.
    pub fn from_seg_cubic_reflected(control1: P, next: P, prev: &mut Knot<P>) -> Knot<P> {
        prev.mirror_forward();
        Knot {
            coord: next,
            rear_handle: control1,
            fore_handle: next,
        }
    }

    /// Cardinal spline segment from `window[1]` to `window[2]`.
    ///
    /// `window` holds the anchors before, at, after and beyond the segment;
    /// `window[1]` is expected to equal `prev.coord`. A `tightness` of 0 gives
    /// a Catmull-Rom spline, 1 a straight line.
    pub fn from_seg_catmull(window: [P; 4], tightness: f64, prev: &mut Knot<P>) -> Knot<P> {
        let [before, curr, next, beyond] = window;
        if (tightness - 1.0).abs() < f64::EPSILON {
            return Self::from_seg_linear(next, prev);
        }

        let fac = (1.0 - tightness) * ONE_SIXTH;
        prev.fore_handle = curr + (next - before) * fac;
        Knot {
            coord: next,
            rear_handle: next - (beyond - curr) * fac,
            fore_handle: next,
        }
    }

    /// Point on the cubic segment from `a` to `b` at `t` in `[0, 1]`.
    pub fn bezier_point(a: &Knot<P>, b: &Knot<P>, t: f64) -> P {
        let u = 1.0 - t;
        let tsq = t * t;
        let usq = u * u;
        a.coord * (usq * u)
            + a.fore_handle * (3.0 * usq * t)
            + b.rear_handle * (3.0 * u * tsq)
            + b.coord * (tsq * t)
    }

    /// First derivative of the cubic segment from `a` to `b` at `t`.
    pub fn bezier_tangent(a: &Knot<P>, b: &Knot<P>, t: f64) -> P {
        let u = 1.0 - t;
        (a.fore_handle - a.coord) * (3.0 * u * u)
            + (b.rear_handle - a.fore_handle) * (6.0 * u * t)
            + (b.coord - b.rear_handle) * (3.0 * t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use outline_math::{DVec2, DVec3};

    fn v(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    #[test]
    fn test_mirror_forward() {
        let mut k = Knot::with_handles(v(1.0, 1.0), v(0.0, 1.0), v(1.0, 1.0));
        k.mirror_forward();
        assert_eq!(k.fore_handle, v(2.0, 1.0));
        assert_eq!(k.rear_handle, v(0.0, 1.0));
    }

    #[test]
    fn test_mirror_backward() {
        let mut k = Knot::with_handles(v(0.0, 0.0), v(9.0, 9.0), v(0.0, 2.0));
        k.mirror_backward();
        assert_eq!(k.rear_handle, v(0.0, -2.0));
        assert_eq!(k.fore_handle, v(0.0, 2.0));
    }

    #[test]
    fn test_linear_handles() {
        let mut prev = Knot::new(v(0.0, 0.0));
        let next = Knot::from_seg_linear(v(9.0, 0.0), &mut prev);
        assert_abs_diff_eq!(prev.fore_handle.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(next.rear_handle.x, 6.0, epsilon = 1e-12);

        // The cubic stays on the chord
        for i in 0..=8 {
            let p = Knot::bezier_point(&prev, &next, i as f64 / 8.0);
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(p.x, 9.0 * i as f64 / 8.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_catmull_tight_is_linear() {
        let mut a = Knot::new(v(0.0, 0.0));
        let mut b = Knot::new(v(0.0, 0.0));
        let window = [v(-5.0, 3.0), v(0.0, 0.0), v(6.0, 0.0), v(8.0, 7.0)];
        let catmull = Knot::from_seg_catmull(window, 1.0, &mut a);
        let linear = Knot::from_seg_linear(v(6.0, 0.0), &mut b);
        assert_eq!(catmull, linear);
        assert_eq!(a, b);
    }

    #[test]
    fn test_catmull_tangent_third() {
        let mut prev = Knot::new(v(1.0, 0.0));
        let window = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)];
        let next = Knot::from_seg_catmull(window, 0.0, &mut prev);
        // Tangent (p2 - p0) / 2 = 1, handle at a third of it
        assert_abs_diff_eq!(prev.fore_handle.x, 1.0 + 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(next.rear_handle.x, 2.0 - 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(next.coord, v(2.0, 0.0));
    }

    #[test]
    fn test_reflected_cubic() {
        let mut prev = Knot::with_handles(v(0.0, 0.0), v(-1.0, -1.0), v(0.0, 0.0));
        let next = Knot::from_seg_cubic_reflected(v(3.0, 1.0), v(4.0, 0.0), &mut prev);
        assert_eq!(prev.fore_handle, v(1.0, 1.0));
        assert_eq!(next.rear_handle, v(3.0, 1.0));
    }

    #[test]
    fn test_relocate_keeps_offsets() {
        let mut k = Knot::with_handles(
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
            DVec3::new(2.0, 1.0, 1.0),
        );
        k.relocate(DVec3::new(5.0, 5.0, 5.0));
        assert_eq!(k.rear_vec(), DVec3::new(-1.0, 0.0, 0.0));
        assert_eq!(k.fore_vec(), DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_tangent_endpoints() {
        let a = Knot::with_handles(v(0.0, 0.0), v(0.0, 0.0), v(1.0, 2.0));
        let b = Knot::with_handles(v(4.0, 0.0), v(3.0, 2.0), v(4.0, 0.0));
        let t0 = Knot::bezier_tangent(&a, &b, 0.0);
        let t1 = Knot::bezier_tangent(&a, &b, 1.0);
        assert_eq!(t0, v(3.0, 6.0));
        assert_eq!(t1, v(3.0, -6.0));
    }
}
