pub mod collision_detection;
pub mod error;
pub mod quadtree;

pub use common::{coordinate, shapes};
pub use error::{QuadtreeError, QuadtreeResult};
