//! Piecewise cubic Bezier curves built from knots.

use outline_core::error::{OutlineError, Result};
use outline_core::traits::{BoundingBox, Validate};
use outline_math::{Aabb, Point};
use serde::{Deserialize, Serialize};

use crate::knot::Knot;

/// An ordered chain of knots, optionally closed back onto its first knot.
///
/// A curve always holds at least one knot, including one read back through
/// serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "CurveData<P>",
    bound(deserialize = "P: Point + Deserialize<'de>")
)]
pub struct Curve<P> {
    name: String,
    knots: Vec<Knot<P>>,
    closed_loop: bool,
}

/// Unchecked serde form of [`Curve`].
#[derive(Deserialize)]
struct CurveData<P> {
    name: String,
    knots: Vec<Knot<P>>,
    closed_loop: bool,
}

impl<P: Point> TryFrom<CurveData<P>> for Curve<P> {
    type Error = OutlineError;

    fn try_from(data: CurveData<P>) -> Result<Self> {
        Curve::new(data.name, data.knots, data.closed_loop)
    }
}

impl<P: Point> Curve<P> {
    pub fn new(name: impl Into<String>, knots: Vec<Knot<P>>, closed_loop: bool) -> Result<Self> {
        let name = name.into();
        if knots.is_empty() {
            return Err(OutlineError::EmptyCurve(name));
        }
        Ok(Self {
            name,
            knots,
            closed_loop,
        })
    }

    /// An open curve holding a single knot at `start`.
    pub(crate) fn starting_at(name: String, start: P) -> Self {
        Self {
            name,
            knots: vec![Knot::new(start)],
            closed_loop: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn knots(&self) -> &[Knot<P>] {
        &self.knots
    }

    pub fn into_knots(self) -> Vec<Knot<P>> {
        self.knots
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// False for every curve obtained through [`Curve::new`], the builder or
    /// serde.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed_loop
    }

    pub fn first(&self) -> &Knot<P> {
        &self.knots[0]
    }

    pub fn last(&self) -> &Knot<P> {
        &self.knots[self.knots.len() - 1]
    }

    pub(crate) fn knots_mut(&mut self) -> &mut Vec<Knot<P>> {
        &mut self.knots
    }

    pub(crate) fn set_closed(&mut self, closed: bool) {
        self.closed_loop = closed;
    }

    /// Number of cubic segments, counting the closing segment of a loop.
    pub fn segment_count(&self) -> usize {
        if self.closed_loop {
            self.knots.len()
        } else {
            self.knots.len() - 1
        }
    }

    /// Iterate the `(from, to)` knot pairs of every segment.
    pub fn segments(&self) -> impl Iterator<Item = (&Knot<P>, &Knot<P>)> + '_ {
        let len = self.knots.len();
        (0..self.segment_count()).map(move |i| (&self.knots[i], &self.knots[(i + 1) % len]))
    }

    /// Evaluate the curve at `t` in `[0, 1]` across all segments.
    pub fn eval(&self, t: f64) -> P {
        let segments = self.segment_count();
        if segments == 0 {
            return self.knots[0].coord;
        }

        let t = t.clamp(0.0, 1.0);
        if !self.closed_loop && t >= 1.0 {
            return self.last().coord;
        }

        let scaled = t * segments as f64;
        let i = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - i as f64;
        let a = &self.knots[i];
        let b = &self.knots[(i + 1) % self.knots.len()];
        Knot::bezier_point(a, b, local)
    }

    /// Reverse traversal direction: knot order and every knot's handles.
    pub fn reverse(&mut self) -> &mut Self {
        self.knots.reverse();
        for knot in &mut self.knots {
            knot.reverse();
        }
        self
    }

    pub fn translate(&mut self, v: P) -> &mut Self {
        for knot in &mut self.knots {
            knot.translate(v);
        }
        self
    }

    pub fn scale(&mut self, s: f64) -> &mut Self {
        for knot in &mut self.knots {
            knot.scale(s);
        }
        self
    }

    /// Bounds of the coordinates only, ignoring handles.
    pub fn coord_bounds(&self) -> Aabb<P> {
        let first = self.knots[0].coord;
        self.knots
            .iter()
            .fold(Aabb::new(first, first), |bb, k| bb.include(k.coord))
    }

    /// Bounds of the control polygon: coordinates and both handles.
    ///
    /// Contains the curve, though not tightly.
    pub fn bounds(&self) -> Aabb<P> {
        let first = self.knots[0].coord;
        self.knots.iter().fold(Aabb::new(first, first), |bb, k| {
            bb.include(k.coord)
                .include(k.rear_handle)
                .include(k.fore_handle)
        })
    }
}

impl<P: Point> Validate for Curve<P> {
    fn validate(&self) -> Result<()> {
        if self.knots.is_empty() {
            return Err(OutlineError::EmptyCurve(self.name.clone()));
        }
        if let Some(i) = self.knots.iter().position(|k| !k.is_finite()) {
            return Err(OutlineError::NonFinite(format!(
                "knot {} of curve '{}'",
                i, self.name
            )));
        }
        Ok(())
    }
}

impl<P: Point> BoundingBox for Curve<P> {
    type Point = P;

    fn bounding_box(&self) -> Option<(P, P)> {
        let bb = self.bounds();
        Some((bb.min, bb.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use outline_math::DVec2;

    fn v(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    fn open_line() -> Curve<DVec2> {
        let mut a = Knot::new(v(0.0, 0.0));
        let b = Knot::from_seg_linear(v(10.0, 0.0), &mut a);
        Curve::new("line", vec![a, b], false).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        let err = Curve::<DVec2>::new("nothing", Vec::new(), true).unwrap_err();
        assert!(matches!(err, OutlineError::EmptyCurve(ref n) if n == "nothing"));
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let json = r#"{"name":"x","knots":[],"closed_loop":false}"#;
        let err = serde_json::from_str::<Curve<DVec2>>(json).unwrap_err();
        assert!(err.to_string().contains("Empty curve: x"));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let curve = open_line();
        let json = serde_json::to_string(&curve).unwrap();
        let back: Curve<DVec2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
        assert!(!back.is_empty());
    }

    #[test]
    fn test_segment_count() {
        let mut curve = open_line();
        assert_eq!(curve.segment_count(), 1);
        curve.set_closed(true);
        assert_eq!(curve.segment_count(), 2);
        assert_eq!(curve.segments().count(), 2);
    }

    #[test]
    fn test_eval_open() {
        let curve = open_line();
        assert_eq!(curve.eval(0.0), v(0.0, 0.0));
        assert_eq!(curve.eval(1.0), v(10.0, 0.0));
        let mid = curve.eval(0.5);
        assert_abs_diff_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eval_single_knot() {
        let curve = Curve::new("dot", vec![Knot::new(v(2.0, 3.0))], false).unwrap();
        assert_eq!(curve.eval(0.7), v(2.0, 3.0));
    }

    #[test]
    fn test_reverse_swaps_handles() {
        let mut curve = open_line();
        curve.reverse();
        assert_eq!(curve.first().coord, v(10.0, 0.0));
        // Former rear handle now leads out of the first knot
        assert_abs_diff_eq!(curve.first().fore_handle.x, 20.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.last().rear_handle.x, 10.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_translate_scale() {
        let mut curve = open_line();
        curve.translate(v(1.0, 1.0)).scale(2.0);
        assert_eq!(curve.first().coord, v(2.0, 2.0));
        assert_eq!(curve.last().coord, v(22.0, 2.0));
    }

    #[test]
    fn test_bounds() {
        let mut a = Knot::new(v(0.0, 0.0));
        let b = Knot::from_seg_quadratic(v(5.0, 10.0), v(10.0, 0.0), &mut a);
        let curve = Curve::new("arch", vec![a, b], false).unwrap();
        let bb = curve.bounds();
        assert_abs_diff_eq!(bb.max.y, 20.0 / 3.0, epsilon = 1e-12);
        assert_eq!(curve.coord_bounds().max, v(10.0, 0.0));
        assert!(curve.bounding_box().is_some());
    }

    #[test]
    fn test_validate_non_finite() {
        let curve = Curve::new("bad", vec![Knot::new(v(f64::NAN, 0.0))], false).unwrap();
        assert!(matches!(curve.validate(), Err(OutlineError::NonFinite(_))));
        assert!(open_line().validate().is_ok());
    }
}
