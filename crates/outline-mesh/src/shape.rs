use outline_core::{Diagnostic, Outcome};
use outline_curve::{Curve, CurveBuilder, PathCommand};
use outline_math::Point;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::pool::{Face, MeshFacePool};

/// One outer boundary and the holes cut out of it.
///
/// Faces are index loops into the pool the shape was grouped from; the shape
/// never owns coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeWithHoles {
    pub outer: Face,
    pub holes: Vec<Face>,
}

impl ShapeWithHoles {
    pub fn new(outer: Face) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Outer boundary first, then holes in the order they were added.
    pub fn loops(&self) -> impl Iterator<Item = &Face> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Straight-edged closed curves for the outer boundary and each hole.
    ///
    /// Each curve runs in the same direction as its face. A loop that cannot
    /// be resolved against `pool` yields no curve and is reported as
    /// [`Diagnostic::MalformedFace`], numbered by its position in
    /// [`loops`](Self::loops).
    pub fn to_curves<P: Point>(
        &self,
        pool: &MeshFacePool<P>,
        builder: &CurveBuilder,
    ) -> Outcome<Curve<P>> {
        let mut commands = Vec::new();
        let mut diagnostics = Vec::new();
        for (index, face) in self.loops().enumerate() {
            if let Err(reason) = pool.check_loop(face) {
                warn!(face = index, "skipping loop: {reason}");
                diagnostics.push(Diagnostic::MalformedFace {
                    face: index,
                    reason,
                });
                continue;
            }
            // The builder reverses closed curves, so feed the loop backwards.
            let mut points = face.iter().rev().map(|&i| pool.coords[i]);
            let Some(start) = points.next() else {
                continue;
            };
            commands.push(PathCommand::MoveTo(start));
            commands.extend(points.map(PathCommand::LineTo));
            commands.push(PathCommand::LineTo(start));
            commands.push(PathCommand::ClosePath);
        }

        if commands.is_empty() {
            return Outcome::new(Vec::new(), diagnostics);
        }
        let (curves, built) = builder.build(&commands).into_parts();
        diagnostics.extend(built);
        Outcome::new(curves, diagnostics)
    }
}
