use crate::Point;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box over any point dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb<P> {
    pub min: P,
    pub max: P,
}

impl<P: Point> Aabb<P> {
    pub fn new(min: P, max: P) -> Self {
        Self { min, max }
    }

    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |bb, p| bb.include(p)))
    }

    /// Grow to contain `p`.
    pub fn include(self, p: P) -> Self {
        Self {
            min: self.min.component_min(p),
            max: self.max.component_max(p),
        }
    }

    pub fn center(&self) -> P {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> P {
        self.max - self.min
    }

    /// Length of the longest side.
    pub fn max_extent(&self) -> f64 {
        self.extents().max_component()
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.component_min(other.min),
            max: self.max.component_max(other.max),
        }
    }
}
