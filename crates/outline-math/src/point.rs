//! Dimension-generic point arithmetic.
//!
//! Curves and face pools are written once against [`Point`] and work for
//! both planar (`DVec2`) and spatial (`DVec3`) coordinates. Winding analysis
//! only looks at the `x` and `y` components.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{DVec2, DVec3};

/// A coordinate value with the vector arithmetic curves need.
pub trait Point:
    Copy
    + Debug
    + PartialEq
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Neg<Output = Self>
    + 'static
{
    fn x(self) -> f64;
    fn y(self) -> f64;

    /// Linear interpolation, `self` at `t = 0`, `other` at `t = 1`.
    fn mix(self, other: Self, t: f64) -> Self;

    fn component_min(self, other: Self) -> Self;

    fn component_max(self, other: Self) -> Self;

    /// Largest component.
    fn max_component(self) -> f64;

    fn all_finite(self) -> bool;

    /// Component-wise comparison within an absolute tolerance.
    fn approx(self, other: Self, tolerance: f64) -> bool;

    /// Reflect `self` through `center`.
    fn reflect(self, center: Self) -> Self {
        center + (center - self)
    }
}

impl Point for DVec2 {
    fn x(self) -> f64 {
        self.x
    }

    fn y(self) -> f64 {
        self.y
    }

    fn mix(self, other: Self, t: f64) -> Self {
        self.lerp(other, t)
    }

    fn component_min(self, other: Self) -> Self {
        self.min(other)
    }

    fn component_max(self, other: Self) -> Self {
        self.max(other)
    }

    fn max_component(self) -> f64 {
        self.max_element()
    }

    fn all_finite(self) -> bool {
        self.is_finite()
    }

    fn approx(self, other: Self, tolerance: f64) -> bool {
        self.abs_diff_eq(other, tolerance)
    }
}

impl Point for DVec3 {
    fn x(self) -> f64 {
        self.x
    }

    fn y(self) -> f64 {
        self.y
    }

    fn mix(self, other: Self, t: f64) -> Self {
        self.lerp(other, t)
    }

    fn component_min(self, other: Self) -> Self {
        self.min(other)
    }

    fn component_max(self, other: Self) -> Self {
        self.max(other)
    }

    fn max_component(self) -> f64 {
        self.max_element()
    }

    fn all_finite(self) -> bool {
        self.is_finite()
    }

    fn approx(self, other: Self, tolerance: f64) -> bool {
        self.abs_diff_eq(other, tolerance)
    }
}
