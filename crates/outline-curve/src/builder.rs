//! Path command interpretation.
//!
//! Commands are folded left to right through a [`BuildState`] that carries
//! the open curve, the finished curves and the diagnostics gathered so far.
//! Each command reads only the state and, for Catmull-Rom segments, the
//! command after it.
//!
//! Closed curves are emitted with their knot order reversed. Outline
//! sources wind outer contours clockwise in a y-down frame; after the caller
//! flips y, reversal restores counter-clockwise outer contours.

use outline_core::{Diagnostic, Outcome};
use outline_math::Point;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::command::PathCommand;
use crate::curve::Curve;
use crate::knot::Knot;
use crate::options::CurveOptions;

/// Converts path command streams into curves.
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    options: CurveOptions,
}

impl CurveBuilder {
    pub fn new(options: CurveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CurveOptions {
        &self.options
    }

    /// Build every curve described by `commands`.
    ///
    /// Never fails: commands that cannot be applied are skipped and reported
    /// in the outcome's diagnostics.
    pub fn build<P: Point>(&self, commands: &[PathCommand<P>]) -> Outcome<Curve<P>> {
        if commands.is_empty() {
            debug!("no path commands to build");
            return Outcome::new(Vec::new(), vec![Diagnostic::EmptyInput]);
        }

        let state = commands
            .iter()
            .enumerate()
            .fold(BuildState::default(), |state, (index, command)| {
                let next = commands.get(index + 1);
                state.apply(&self.options, index, command, next)
            });

        let outcome = state.finish();
        debug!(
            curves = outcome.output.len(),
            skipped = outcome.diagnostics.len(),
            "built curves from {} commands",
            commands.len()
        );
        outcome
    }

    /// Build many independent command streams in parallel.
    pub fn build_all<P: Point>(&self, inputs: &[Vec<PathCommand<P>>]) -> Vec<Outcome<Curve<P>>> {
        inputs.par_iter().map(|commands| self.build(commands)).collect()
    }
}

/// Cursor state threaded through the command fold.
struct BuildState<P> {
    current: Option<Curve<P>>,
    curves: Vec<Curve<P>>,
    diagnostics: Vec<Diagnostic>,
    started: usize,
}

impl<P> Default for BuildState<P> {
    fn default() -> Self {
        Self {
            current: None,
            curves: Vec::new(),
            diagnostics: Vec::new(),
            started: 0,
        }
    }
}

impl<P: Point> BuildState<P> {
    fn apply(
        mut self,
        options: &CurveOptions,
        index: usize,
        command: &PathCommand<P>,
        next: Option<&PathCommand<P>>,
    ) -> Self {
        trace!(index, ?command, "path command");

        match *command {
            PathCommand::MoveTo(p) => {
                if let Some(abandoned) = self.current.take() {
                    self.report(Diagnostic::AbandonedCurve {
                        command: index,
                        name: abandoned.name().to_string(),
                    });
                }
                let name = format!("{}{}", options.name_prefix, self.started);
                self.started += 1;
                self.current = Some(Curve::starting_at(name, p));
            }
            PathCommand::ClosePath => match self.current.take() {
                Some(curve) => {
                    let closed = close_curve(curve, options);
                    debug!(name = closed.name(), knots = closed.len(), "closed curve");
                    self.curves.push(closed);
                }
                None => trace!(index, "close with no open curve"),
            },
            segment => {
                let Some(curve) = self.current.as_mut() else {
                    self.report(Diagnostic::OrphanSegment { command: index });
                    return self;
                };
                let knots = curve.knots_mut();
                let before = knots.len().checked_sub(2).map(|i| knots[i].coord);
                let Some(prev) = knots.last_mut() else {
                    return self;
                };

                let knot = match segment {
                    PathCommand::LineTo(p) => Knot::from_seg_linear(p, prev),
                    PathCommand::QuadTo(c, p) => Knot::from_seg_quadratic(c, p, prev),
                    PathCommand::CubicTo(c0, c1, p) => Knot::from_seg_cubic(c0, c1, p, prev),
                    PathCommand::SmoothCubicTo(c1, p) => {
                        Knot::from_seg_cubic_reflected(c1, p, prev)
                    }
                    PathCommand::CatmullTo(p) => {
                        let curr = prev.coord;
                        let window = [
                            before.unwrap_or(curr),
                            curr,
                            p,
                            next.and_then(PathCommand::continuation).unwrap_or(p),
                        ];
                        Knot::from_seg_catmull(window, options.tightness, prev)
                    }
                    PathCommand::MoveTo(_) | PathCommand::ClosePath => return self,
                };
                knots.push(knot);
            }
        }

        self
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn finish(mut self) -> Outcome<Curve<P>> {
        if let Some(mut curve) = self.current.take() {
            open_ends(&mut curve);
            debug!(name = curve.name(), knots = curve.len(), "finished open curve");
            self.curves.push(curve);
        }
        Outcome::new(self.curves, self.diagnostics)
    }
}

/// Synthesize the missing handles at the two free ends of an open curve.
fn open_ends<P: Point>(curve: &mut Curve<P>) {
    let knots = curve.knots_mut();
    if let Some(first) = knots.first_mut() {
        first.mirror_backward();
    }
    if let Some(last) = knots.last_mut() {
        last.mirror_forward();
    }
}

/// Join the ends of `curve`, mark it closed and reverse it.
///
/// When the path returned to its start, the leading knot duplicates the
/// trailing one: it is dropped and its fore handle moves onto the trailing
/// knot, which already holds the rear handle of the final segment.
/// Otherwise both ends get mirrored handles.
fn close_curve<P: Point>(mut curve: Curve<P>, options: &CurveOptions) -> Curve<P> {
    let merge = options.tolerance.merge_for(curve.coord_bounds().max_extent());
    let knots = curve.knots_mut();
    let len = knots.len();

    if len > 1 {
        let first = knots[0];
        if first.coord.approx(knots[len - 1].coord, merge) {
            knots.remove(0);
            if let Some(last) = knots.last_mut() {
                last.fore_handle = first.fore_handle;
                // Outlines that reach the start with a line-free curve can
                // leave the rear handle collapsed onto the coordinate.
                if last.rear_handle.approx(last.coord, merge) {
                    last.mirror_backward();
                }
            }
        } else {
            knots[0].mirror_backward();
            knots[len - 1].mirror_forward();
        }
    }

    curve.set_closed(true);
    curve.reverse();
    curve
}
