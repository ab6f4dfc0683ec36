pub mod angle_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Used only where a tolerance is genuinely wanted (canonical-start
/// rotation, test assertions). Hull membership and loop closure compare
/// coordinates exactly; callers must pre-quantize if fuzzy matching is
/// desired.
pub const TOLERANCE: f64 = 1e-10;
