use thiserror::Error;

/// Errors raised at the boundary of the hull and triangulation entry points.
///
/// Geometric "no result" outcomes (parallel lines, a crossing outside a
/// segment's span) are `None`, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("insufficient points: need at least 3 distinct points, got {got}")]
    InsufficientPoints { got: usize },

    #[error("degenerate input: all {count} points are collinear, no triangulation possible")]
    DegenerateInput { count: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
