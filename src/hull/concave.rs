use std::cmp::Ordering;

use super::Hull;
use crate::error::{HullisError, Result};
use crate::math::angle_2d::{heading, normalize_angle};
use crate::math::distance_2d::point_point_dist;
use crate::math::intersect_2d::segments_properly_intersect;
use crate::math::Point2;

/// Concave hull of a 2D point set via a k-nearest-neighbour angular sweep.
///
/// Starting from the lowest point, each step considers the `k` nearest
/// remaining points, sorted by the smallest clockwise-relative turn from the
/// previous edge heading, and accepts the first candidate whose edge does
/// not properly cross the boundary built so far. The crossing guard is the
/// heuristic's only simplicity safeguard; it checks a necessary condition
/// against the existing edges, it is not a proof.
///
/// Larger `k` makes the result converge toward the convex hull; a `k` that
/// is too small can strand the walk before it returns to its start, in which
/// case the partial boundary is returned with
/// [`Hull::is_closed`] reporting `false`.
pub struct ConcaveHull2D<'a> {
    points: &'a [Point2],
    k: usize,
}

impl<'a> ConcaveHull2D<'a> {
    #[must_use]
    pub fn new(points: &'a [Point2], k: usize) -> Self {
        Self { points, k }
    }

    /// Executes the sweep.
    ///
    /// The caller's slice is never mutated; the sweep consumes a private
    /// working copy. Early, non-closing termination is a normal result, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNeighbourhood` for `k < 1` and `EmptyInput` for an
    /// empty point set.
    pub fn execute(&self) -> Result<Hull> {
        if self.k < 1 {
            return Err(HullisError::InvalidNeighbourhood(self.k));
        }
        if self.points.is_empty() {
            return Err(HullisError::EmptyInput {
                required: 1,
                actual: 0,
            });
        }

        let mut working: Vec<Point2> = self.points.to_vec();
        let start = lowest_point(&working);
        // Every exact copy of the start must go: a surviving duplicate would
        // be accepted as "the start" on the first step and close the walk
        // before the hull can form a polygon. The start only re-enters the
        // working set once the hull has 3 vertices.
        working.retain(|pt| pt != &start);

        let mut hull = vec![start];
        let mut prev_heading = 0.0;
        let mut start_readmitted = false;
        let mut closed = false;

        loop {
            // The start point becomes a legal target again once the hull
            // is large enough to close into a polygon.
            if !start_readmitted && hull.len() >= 3 {
                working.push(start);
                start_readmitted = true;
            }
            if working.is_empty() {
                break;
            }

            let current = hull[hull.len() - 1];
            let mut candidates = nearest_neighbours(&working, &current, self.k);
            candidates.sort_by(|a, b| {
                let turn_a = normalize_angle(heading(&current, a) - prev_heading);
                let turn_b = normalize_angle(heading(&current, b) - prev_heading);
                turn_a.partial_cmp(&turn_b).unwrap_or(Ordering::Equal)
            });

            let Some(next) = candidates
                .into_iter()
                .find(|c| !crosses_hull(&hull, c))
            else {
                // No candidate yields a non-crossing edge: the walk stalls.
                break;
            };

            if next == start {
                closed = true;
                break;
            }
            prev_heading = heading(&current, &next);
            remove_point(&mut working, &next);
            hull.push(next);
        }

        Ok(Hull::new(hull, closed))
    }
}

/// Would the edge from the last hull vertex to `candidate` properly cross
/// any edge already in the hull?
///
/// Edges sharing an endpoint with the probe edge (the previous edge always,
/// and the first edge when the candidate closes the loop) can never properly
/// cross it, so every hull edge is scanned without exception.
fn crosses_hull(hull: &[Point2], candidate: &Point2) -> bool {
    let last = &hull[hull.len() - 1];
    hull.windows(2)
        .any(|edge| segments_properly_intersect(&edge[0], &edge[1], last, candidate))
}

/// The point with minimum y, ties broken by minimum x.
fn lowest_point(points: &[Point2]) -> Point2 {
    let mut best = points[0];
    for &pt in &points[1..] {
        if pt.y < best.y || (pt.y == best.y && pt.x < best.x) {
            best = pt;
        }
    }
    best
}

/// The `k` points of `working` nearest to `from` (all of them if fewer
/// than `k` remain), closest first.
fn nearest_neighbours(working: &[Point2], from: &Point2, k: usize) -> Vec<Point2> {
    let mut sorted = working.to_vec();
    sorted.sort_by(|a, b| {
        point_point_dist(from, a)
            .partial_cmp(&point_point_dist(from, b))
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(k);
    sorted
}

/// Removes the first exact-coordinate match of `target`, if present.
fn remove_point(working: &mut Vec<Point2>, target: &Point2) {
    if let Some(i) = working.iter().position(|pt| pt == target) {
        working.remove(i);
    }
}
