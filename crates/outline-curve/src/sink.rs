//! Receiving outline commands from an external extractor.
//!
//! Font and SVG readers drive a [`PathSink`] with plain coordinates; a
//! [`PathRecorder`] collects them as [`PathCommand`]s ready for the builder.

use outline_math::Point2;

use crate::command::PathCommand;

/// Receiver for 2D outline drawing calls.
pub trait PathSink {
    /// Start a new contour at the given point.
    fn move_to(&mut self, x: f64, y: f64);
    /// Draw a straight line to the given point.
    fn line_to(&mut self, x: f64, y: f64);
    /// Draw a quadratic Bezier curve (TrueType-style).
    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64);
    /// Draw a cubic Bezier curve (CFF/OpenType-style).
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);
    /// Draw a Catmull-Rom segment through the given point.
    fn catmull_to(&mut self, x: f64, y: f64);
    /// Close the current contour.
    fn close(&mut self);
}

/// Collects sink calls into a command list.
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    commands: Vec<PathCommand<Point2>>,
    flip_y: bool,
    scale: Option<f64>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Negate y on every incoming point, for y-down sources.
    pub fn flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }

    /// Multiply every incoming coordinate, e.g. to map font units to points.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn commands(&self) -> &[PathCommand<Point2>] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand<Point2>> {
        self.commands
    }

    fn point(&self, x: f64, y: f64) -> Point2 {
        let s = self.scale.unwrap_or(1.0);
        let y = if self.flip_y { -y } else { y };
        Point2::new(x * s, y * s)
    }
}

impl PathSink for PathRecorder {
    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.point(x, y);
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.point(x, y);
        self.commands.push(PathCommand::LineTo(p));
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        let c = self.point(x1, y1);
        let p = self.point(x, y);
        self.commands.push(PathCommand::QuadTo(c, p));
    }

    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let c0 = self.point(x1, y1);
        let c1 = self.point(x2, y2);
        let p = self.point(x, y);
        self.commands.push(PathCommand::CubicTo(c0, c1, p));
    }

    fn catmull_to(&mut self, x: f64, y: f64) {
        let p = self.point(x, y);
        self.commands.push(PathCommand::CatmullTo(p));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }
}
