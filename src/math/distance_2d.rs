use super::Point2;

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn point_point_dist(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
