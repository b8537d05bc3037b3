//! Recoverable conditions reported alongside partial conversion output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A skipped or repaired input item.
///
/// None of these abort a conversion. They are accumulated in order of
/// discovery and handed back with whatever output could be produced.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum Diagnostic {
    /// A segment command arrived while no curve was open.
    #[error("command #{command} continues a path, but no curve is open")]
    OrphanSegment { command: usize },

    /// An open curve was left behind by a later move-to.
    #[error("command #{command} starts a new curve while curve '{name}' is still open")]
    AbandonedCurve { command: usize, name: String },

    /// A face's winding sum is within tolerance of zero.
    #[error("face #{face} is degenerate (winding sum {winding})")]
    DegenerateFace { face: usize, winding: f64 },

    /// A clockwise face arrived with no open outer boundary.
    #[error("clockwise face #{face} has no open boundary, promoted to its own shape")]
    UnmatchedHole { face: usize },

    /// A face is too short or refers to coordinates outside the pool.
    #[error("face #{face} is malformed: {reason}")]
    MalformedFace { face: usize, reason: String },

    /// Nothing to convert.
    #[error("input is empty")]
    EmptyInput,
}

/// Best-effort output of a conversion plus everything that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub output: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Outcome<T> {
    pub fn new(output: Vec<T>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            output,
            diagnostics,
        }
    }

    /// True when no item was skipped or repaired.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Count diagnostics matching a predicate.
    pub fn count(&self, pred: impl Fn(&Diagnostic) -> bool) -> usize {
        self.diagnostics.iter().filter(|d| pred(d)).count()
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<Diagnostic>) {
        (self.output, self.diagnostics)
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
