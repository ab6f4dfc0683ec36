pub mod error;
pub mod hull;
pub mod math;

pub use error::{HullisError, Result};
pub use hull::{ConcaveHull2D, ConvexHull2D, Hull};
