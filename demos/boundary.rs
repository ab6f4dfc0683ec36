//! Boundary demo — runs the concave sweep on a scattered terrain point set,
//! then the convex hull of the concave result, and logs both boundaries.
//!
//! ```text
//! cargo run --example boundary
//! ```
//!
//! This stands in for the drafting host: where the original workflow created
//! polyline entities from the returned hulls, the demo prints them.

use hullis::math::Point2;
use hullis::{ConcaveHull2D, ConvexHull2D};

fn main() -> hullis::Result<()> {
    // Default: INFO for the demo. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let points: Vec<Point2> = [
        (1.0, 1.0),
        (2.0, 5.0),
        (4.0, 3.0),
        (6.0, 6.0),
        (5.0, 2.0),
        (3.0, 3.0),
        (7.0, 8.0),
        (9.0, 5.0),
        (11.0, 3.0),
        (13.0, 7.0),
        (10.0, 2.0),
        (8.0, 4.0),
        (12.0, 6.0),
        (14.0, 1.0),
        (15.0, 5.0),
        (16.0, 3.0),
        (18.0, 6.0),
        (17.0, 2.0),
        (19.0, 4.0),
        (20.0, 7.0),
        (21.0, 1.0),
        (22.0, 5.0),
        (23.0, 3.0),
        (24.0, 6.0),
        (25.0, 2.0),
        (26.0, 4.0),
    ]
    .into_iter()
    .map(|(x, y)| Point2::new(x, y))
    .collect();
    tracing::info!(count = points.len(), "input point set");

    // k controls how many nearest neighbours each sweep step considers;
    // larger values trade boundary detail for robustness.
    let k = 5;
    let concave = ConcaveHull2D::new(&points, k).execute()?;
    tracing::info!(
        vertices = concave.len(),
        closed = concave.is_closed(),
        "concave boundary"
    );
    let boundary = concave.into_points();
    for v in &boundary {
        println!("concave ({}, {})", v.x, v.y);
    }

    let convex = ConvexHull2D::new(&boundary).execute()?;
    tracing::info!(vertices = convex.len(), "convex boundary of the concave hull");
    for v in convex.points() {
        println!("convex  ({}, {})", v.x, v.y);
    }

    Ok(())
}
