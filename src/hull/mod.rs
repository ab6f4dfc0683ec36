pub mod concave;
pub mod convex;

pub use concave::ConcaveHull2D;
pub use convex::ConvexHull2D;

use crate::math::Point2;

/// An ordered polygon boundary extracted from a point set.
///
/// Every vertex is an exact member of the input set, and no two
/// non-adjacent edges properly cross. `closed` records whether the
/// construction walk returned to its starting vertex; a concave sweep can
/// legitimately stall and return an open partial boundary, which callers
/// must check via [`Hull::is_closed`] before treating the result as a
/// polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    points: Vec<Point2>,
    closed: bool,
}

impl Hull {
    pub(crate) fn new(points: Vec<Point2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// The boundary vertices in walk order. For a closed hull the starting
    /// vertex is not repeated at the end.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Whether the walk returned to its starting vertex.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of boundary vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over boundary edges as vertex pairs, including the
    /// wrap-around edge when the hull is closed.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        let n = self.points.len();
        let edge_count = match (self.closed, n) {
            (_, 0 | 1) => 0,
            (true, _) => n,
            (false, _) => n - 1,
        };
        (0..edge_count).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }

    /// Consumes the hull, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}
