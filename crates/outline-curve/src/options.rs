use outline_core::Tolerance;
use serde::{Deserialize, Serialize};

/// Settings for turning path commands into curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    pub tolerance: Tolerance,
    /// Cardinal spline tightness for Catmull-Rom segments, 0 to 1
    pub tightness: f64,
    /// Curves are named `{name_prefix}{n}` in the order they are started
    pub name_prefix: String,
}

impl CurveOptions {
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_tightness(mut self, tightness: f64) -> Self {
        self.tightness = tightness;
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            tightness: 0.0,
            name_prefix: "curve".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let opts: CurveOptions =
            serde_json::from_str(r#"{ "name_prefix": "glyph.", "tolerance": { "merge": 0.01 } }"#)
                .unwrap();
        assert_eq!(opts.name_prefix, "glyph.");
        assert_eq!(opts.tolerance.merge, 0.01);
        assert_eq!(opts.tolerance.winding, Tolerance::DEFAULT_WINDING);
        assert_eq!(opts.tightness, 0.0);
    }

    #[test]
    fn test_builders() {
        let opts = CurveOptions::default()
            .with_tightness(0.5)
            .with_name_prefix("g")
            .with_tolerance(Tolerance::loose());
        assert_eq!(opts.tightness, 0.5);
        assert_eq!(opts.name_prefix, "g");
        assert_eq!(opts.tolerance, Tolerance::loose());
    }
}
