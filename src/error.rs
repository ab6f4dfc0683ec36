use thiserror::Error;

/// Top-level error type for the Hullis kernel.
///
/// Every variant is a precondition failure detected before any algorithmic
/// work begins. Hull construction itself never fails once inputs pass
/// validation; an early, non-closing concave sweep is a normal result
/// reported through [`Hull::is_closed`](crate::hull::Hull::is_closed),
/// not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HullisError {
    #[error("point set has {actual} point(s), at least {required} required")]
    EmptyInput { required: usize, actual: usize },

    #[error("invalid neighbourhood size k = {0}, must be at least 1")]
    InvalidNeighbourhood(usize),

    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Convenience type alias for results using [`HullisError`].
pub type Result<T> = std::result::Result<T, HullisError>;
