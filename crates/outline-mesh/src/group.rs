//! Grouping faces into shapes with holes.
//!
//! Faces are read in order. A counter-clockwise face opens a new shape; each
//! clockwise face after it becomes a hole of that shape until the next
//! counter-clockwise face arrives. Nesting is taken from face order alone,
//! never from geometric containment.

use outline_core::{Diagnostic, Outcome, Tolerance};
use outline_math::Point;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::pool::MeshFacePool;
use crate::shape::ShapeWithHoles;
use crate::winding::{winding_sum, Winding};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContourGrouper {
    tolerance: Tolerance,
}

impl ContourGrouper {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Group the faces of `pool` into shapes, skipping faces that cannot be
    /// classified.
    ///
    /// A clockwise face that arrives while no shape is open is emitted as a
    /// shape of its own and reported as [`Diagnostic::UnmatchedHole`].
    pub fn group<P: Point>(&self, pool: &MeshFacePool<P>) -> Outcome<ShapeWithHoles> {
        if pool.faces.is_empty() {
            debug!("no faces to group");
            return Outcome::new(Vec::new(), vec![Diagnostic::EmptyInput]);
        }

        let mut shapes = Vec::new();
        let mut diagnostics = Vec::new();
        let mut open: Option<ShapeWithHoles> = None;

        let mut report = |diagnostic: Diagnostic| {
            warn!("{diagnostic}");
            diagnostics.push(diagnostic);
        };

        for (index, face) in pool.faces.iter().enumerate() {
            if let Err(reason) = pool.check_face(index) {
                report(Diagnostic::MalformedFace {
                    face: index,
                    reason,
                });
                continue;
            }

            let sum = winding_sum(&pool.coords, face);
            let extent = pool
                .face_bounds(index)
                .map(|bb| bb.max_extent())
                .unwrap_or(0.0);

            match Winding::classify(sum, extent, self.tolerance) {
                Winding::CounterClockwise => {
                    if let Some(shape) = open.take() {
                        shapes.push(shape);
                    }
                    open = Some(ShapeWithHoles::new(face.clone()));
                }
                Winding::Clockwise => match open.as_mut() {
                    Some(shape) => shape.holes.push(face.clone()),
                    None => {
                        report(Diagnostic::UnmatchedHole { face: index });
                        shapes.push(ShapeWithHoles::new(face.clone()));
                    }
                },
                Winding::Degenerate => {
                    report(Diagnostic::DegenerateFace {
                        face: index,
                        winding: sum,
                    });
                }
            }
        }

        if let Some(shape) = open {
            shapes.push(shape);
        }

        debug!(
            shapes = shapes.len(),
            skipped = diagnostics.len(),
            "grouped {} faces",
            pool.faces.len()
        );
        Outcome::new(shapes, diagnostics)
    }

    /// Group many independent pools in parallel.
    pub fn group_all<P: Point>(&self, pools: &[MeshFacePool<P>]) -> Vec<Outcome<ShapeWithHoles>> {
        pools.par_iter().map(|pool| self.group(pool)).collect()
    }
}
