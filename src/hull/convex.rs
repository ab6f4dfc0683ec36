use std::cmp::Ordering;

use super::Hull;
use crate::error::{HullisError, Result};
use crate::math::intersect_2d::orientation;
use crate::math::Point2;

/// Convex hull of a 2D point set via Andrew's monotone chain.
///
/// Sorts the points by (x, y), builds the lower and upper chains with the
/// orientation predicate, and concatenates them. O(n log n), deterministic
/// for a given point set regardless of input order.
pub struct ConvexHull2D<'a> {
    points: &'a [Point2],
}

impl<'a> ConvexHull2D<'a> {
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the hull construction.
    ///
    /// The result is always closed, its vertices are listed counter-clockwise,
    /// and every vertex is a genuine extreme point (collinear points interior
    /// to an edge are dropped).
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for fewer than 3 input points, and
    /// `DegenerateInput` when the points are all collinear or collapse to
    /// fewer than 3 distinct positions.
    pub fn execute(&self) -> Result<Hull> {
        if self.points.len() < 3 {
            return Err(HullisError::EmptyInput {
                required: 3,
                actual: self.points.len(),
            });
        }

        // Private sorted copy; exact duplicates contribute nothing to the
        // hull and would produce zero-length chain edges.
        let mut sorted: Vec<Point2> = self.points.to_vec();
        sorted.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(Ordering::Equal)
                .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
        });
        sorted.dedup();
        if sorted.len() < 3 {
            return Err(HullisError::DegenerateInput(format!(
                "only {} distinct point(s), a polygon needs 3",
                sorted.len()
            )));
        }

        let mut lower = chain(sorted.iter());
        let mut upper = chain(sorted.iter().rev());

        // Each chain ends where the other begins.
        lower.pop();
        upper.pop();
        lower.append(&mut upper);

        if lower.len() < 3 {
            return Err(HullisError::DegenerateInput(format!(
                "all {} points are collinear",
                self.points.len()
            )));
        }
        Ok(Hull::new(lower, true))
    }
}

/// Builds one monotone chain, popping every non-left turn.
///
/// `orientation` is positive for a clockwise turn and zero for collinear
/// points, so popping on `>= 0` keeps strictly counter-clockwise corners.
fn chain<'a, I>(points: I) -> Vec<Point2>
where
    I: Iterator<Item = &'a Point2>,
{
    let mut out: Vec<Point2> = Vec::new();
    for &pt in points {
        while out.len() >= 2 && orientation(&out[out.len() - 2], &out[out.len() - 1], &pt) >= 0.0 {
            out.pop();
        }
        out.push(pt);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::{has_self_intersection, rotate_to_canonical_start, signed_area_2d};
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn square_hull_is_ccw() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let hull = ConvexHull2D::new(&pts).execute().unwrap();
        assert!(hull.is_closed());
        assert_eq!(hull.len(), 4);
        assert!(signed_area_2d(hull.points()) > 0.0);
    }

    #[test]
    fn interior_point_is_excluded() {
        let pts = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(1.0, 1.0)];
        let hull = ConvexHull2D::new(&pts).execute().unwrap();
        assert_eq!(hull.len(), 4);
        assert!(!hull.points().contains(&p(1.0, 1.0)));
    }

    #[test]
    fn collinear_point_on_edge_is_excluded() {
        let pts = vec![p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(1.0, 2.0)];
        let hull = ConvexHull2D::new(&pts).execute().unwrap();
        assert_eq!(hull.len(), 3);
        assert!(!hull.points().contains(&p(1.0, 0.0)));
    }

    #[test]
    fn all_vertices_come_from_input() {
        let pts = vec![
            p(0.3, 0.1),
            p(4.0, 0.6),
            p(3.2, 3.7),
            p(0.5, 2.9),
            p(2.0, 1.5),
            p(1.1, 0.4),
        ];
        let hull = ConvexHull2D::new(&pts).execute().unwrap();
        for v in hull.points() {
            assert!(pts.contains(v), "invented vertex {v:?}");
        }
        assert!(!has_self_intersection(hull.points(), true));
    }

    #[test]
    fn hull_is_idempotent() {
        let pts = vec![
            p(0.0, 0.0),
            p(5.0, 1.0),
            p(6.0, 4.0),
            p(2.0, 6.0),
            p(-1.0, 3.0),
            p(2.0, 2.0),
            p(3.0, 3.0),
        ];
        let first = ConvexHull2D::new(&pts).execute().unwrap();
        let second = ConvexHull2D::new(first.points()).execute().unwrap();
        assert_eq!(
            rotate_to_canonical_start(first.points()),
            rotate_to_canonical_start(second.points()),
        );
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let pts = vec![p(0.0, 0.0), p(3.0, 0.5), p(2.0, 3.0), p(0.5, 2.0)];
        let mut shuffled = pts.clone();
        shuffled.reverse();
        shuffled.swap(0, 2);
        let a = ConvexHull2D::new(&pts).execute().unwrap();
        let b = ConvexHull2D::new(&shuffled).execute().unwrap();
        assert_eq!(
            rotate_to_canonical_start(a.points()),
            rotate_to_canonical_start(b.points()),
        );
    }

    #[test]
    fn duplicates_collapse_before_chain_building() {
        let pts = vec![
            p(0.0, 0.0),
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 0.0),
            p(0.5, 1.0),
        ];
        let hull = ConvexHull2D::new(&pts).execute().unwrap();
        assert_eq!(hull.len(), 3);
        approx::assert_relative_eq!(signed_area_2d(hull.points()), 0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn too_few_points_is_empty_input() {
        let pts = vec![p(0.0, 0.0), p(1.0, 1.0)];
        let err = ConvexHull2D::new(&pts).execute().unwrap_err();
        assert_eq!(
            err,
            HullisError::EmptyInput {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let pts = vec![p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0)];
        let err = ConvexHull2D::new(&pts).execute().unwrap_err();
        assert!(matches!(err, HullisError::DegenerateInput(_)));
    }

    #[test]
    fn duplicate_only_input_is_degenerate() {
        let pts = vec![p(1.0, 1.0), p(1.0, 1.0), p(2.0, 2.0)];
        let err = ConvexHull2D::new(&pts).execute().unwrap_err();
        assert!(matches!(err, HullisError::DegenerateInput(_)));
    }
}
