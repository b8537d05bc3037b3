pub mod group;
pub mod pool;
pub mod shape;
pub mod winding;

pub use group::ContourGrouper;
pub use pool::{Face, MeshFacePool};
pub use shape::ShapeWithHoles;
pub use winding::{winding_sum, Winding};
