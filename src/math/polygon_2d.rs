use super::intersect_2d::segments_properly_intersect;
use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    if best == 0 {
        return points.to_vec();
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Exhaustively checks a polyline for properly crossing edges.
///
/// When `closed` is true, the wrap-around edge from the last vertex back to
/// the first is included. Edge pairs that share an endpoint never count as
/// crossing (see [`segments_properly_intersect`]), so adjacent edges need no
/// special casing.
#[must_use]
pub fn has_self_intersection(points: &[Point2], closed: bool) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let edge_count = if closed { n } else { n - 1 };
    for i in 0..edge_count {
        let (a0, a1) = (&points[i], &points[(i + 1) % n]);
        for j in (i + 1)..edge_count {
            let (b0, b1) = (&points[j], &points[(j + 1) % n]);
            if segments_properly_intersect(a0, a1, b0, b1) {
                return true;
            }
        }
    }
    false
}
