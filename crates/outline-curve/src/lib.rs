//! Outline curves: knots, curves, and the path command builder.

pub mod builder;
pub mod command;
pub mod curve;
pub mod knot;
pub mod options;
pub mod sink;

pub use builder::CurveBuilder;
pub use command::PathCommand;
pub use curve::Curve;
pub use knot::Knot;
pub use options::CurveOptions;
pub use sink::{PathRecorder, PathSink};
