use serde::{Deserialize, Serialize};

/// Scale-relative epsilons for curve closure and face winding.
///
/// Both values are expressed for unit-sized input and scaled by the extent of
/// the geometry they are applied to, so glyphs in font units and meshes in
/// metres are treated alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Distance under which the first and last knot of a closing curve merge
    pub merge: f64,
    /// Winding sum magnitude under which a face is degenerate
    pub winding: f64,
}

impl Tolerance {
    pub const DEFAULT_MERGE: f64 = 1e-6;
    pub const DEFAULT_WINDING: f64 = 1e-9;

    pub fn new(merge: f64, winding: f64) -> Self {
        Self { merge, winding }
    }

    pub fn default_precision() -> Self {
        Self {
            merge: Self::DEFAULT_MERGE,
            winding: Self::DEFAULT_WINDING,
        }
    }

    pub fn loose() -> Self {
        Self {
            merge: 1e-3,
            winding: 1e-6,
        }
    }

    pub fn tight() -> Self {
        Self {
            merge: 1e-10,
            winding: 1e-14,
        }
    }

    /// Merge distance for geometry whose largest side is `extent`.
    pub fn merge_for(self, extent: f64) -> f64 {
        self.merge * extent.abs().max(1.0)
    }

    /// Degenerate-winding cutoff for geometry whose largest side is `extent`.
    ///
    /// The winding sum has units of area, hence the square.
    pub fn winding_for(self, extent: f64) -> f64 {
        self.winding * (extent * extent).max(1.0)
    }

    /// Check if a winding sum is zero for geometry of the given extent
    pub fn is_degenerate(self, winding: f64, extent: f64) -> bool {
        winding.abs() < self.winding_for(extent)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tol = Tolerance::default();
        assert_eq!(tol.merge, 1e-6);
        assert_eq!(tol.winding, 1e-9);
    }

    #[test]
    fn test_scaling() {
        let tol = Tolerance::default();
        // Small geometry never shrinks the epsilon below its unit value
        assert_eq!(tol.merge_for(0.01), 1e-6);
        assert!((tol.merge_for(1000.0) - 1e-3).abs() < 1e-15);
        assert!((tol.winding_for(100.0) - 1e-5).abs() < 1e-18);
    }

    #[test]
    fn test_is_degenerate() {
        let tol = Tolerance::default();
        assert!(tol.is_degenerate(0.0, 10.0));
        assert!(!tol.is_degenerate(-200.0, 10.0));
        assert!(tol.is_degenerate(5e-8, 10.0));
    }

    #[test]
    fn test_partial_json() {
        let tol: Tolerance = serde_json::from_str(r#"{ "merge": 0.5 }"#).unwrap();
        assert_eq!(tol.merge, 0.5);
        assert_eq!(tol.winding, Tolerance::DEFAULT_WINDING);
    }
}
