pub mod aabb;
pub mod point;

pub use aabb::Aabb;
pub use glam::{DVec2, DVec3};
pub use point::Point;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
