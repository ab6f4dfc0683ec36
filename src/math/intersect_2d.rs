use super::Point2;

/// Signed turn test for the path `p → q → r`.
///
/// Returns `(r.x - p.x) * (q.y - p.y) - (q.x - p.x) * (r.y - p.y)`:
/// positive for a clockwise (right) turn, negative for a counter-clockwise
/// (left) turn, zero when the three points are collinear.
#[must_use]
pub fn orientation(p: &Point2, q: &Point2, r: &Point2) -> f64 {
    (r.x - p.x) * (q.y - p.y) - (q.x - p.x) * (r.y - p.y)
}

/// Proper segment-segment intersection test.
///
/// Returns `true` iff segment `p1–p2` and segment `p3–p4` cross at a single
/// point interior to both. The test is a strict sign-change check on both
/// orientation pairs, so segments that merely touch at an endpoint or
/// overlap collinearly do NOT count as intersecting.
#[must_use]
pub fn segments_properly_intersect(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);

    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}
