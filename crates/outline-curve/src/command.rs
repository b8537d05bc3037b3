use outline_math::Point;
use serde::{Deserialize, Serialize};

/// One instruction of an outline path, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand<P> {
    /// Start a new curve at a point.
    MoveTo(P),
    LineTo(P),
    /// Quadratic segment: shared control point, then end point.
    QuadTo(P, P),
    /// Cubic segment: two control points, then end point.
    CubicTo(P, P, P),
    /// Cubic segment whose first control point reflects the previous one.
    SmoothCubicTo(P, P),
    /// Catmull-Rom segment through the next point.
    CatmullTo(P),
    ClosePath,
}

impl<P: Point> PathCommand<P> {
    /// The point the pen ends on, if the command moves it.
    pub fn end_point(&self) -> Option<P> {
        match *self {
            PathCommand::MoveTo(p)
            | PathCommand::LineTo(p)
            | PathCommand::QuadTo(_, p)
            | PathCommand::CubicTo(_, _, p)
            | PathCommand::SmoothCubicTo(_, p)
            | PathCommand::CatmullTo(p) => Some(p),
            PathCommand::ClosePath => None,
        }
    }

    /// True for commands that extend an existing curve.
    pub fn is_segment(&self) -> bool {
        !matches!(self, PathCommand::MoveTo(_) | PathCommand::ClosePath)
    }

    /// Anchor that continues the current curve after this command, used as
    /// look-ahead for Catmull-Rom tangents.
    pub(crate) fn continuation(&self) -> Option<P> {
        if self.is_segment() {
            self.end_point()
        } else {
            None
        }
    }
}
