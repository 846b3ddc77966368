use thiserror::Error;

/// Errors raised when constructing geometry that would violate a
/// structural invariant. Construction is the only fallible surface of
/// the kernel; algorithms handle degenerate but well-formed inputs with
/// documented fallbacks instead of errors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("axis count {0} is out of range [2, 4]")]
    AxisCountOutOfRange(usize),

    #[error("ordinate array length {len} is not a multiple of axis count {axis_count}")]
    RaggedOrdinates { len: usize, axis_count: usize },

    #[error("point allows at most one vertex, got {0}")]
    TooManyPointVertices(usize),

    #[error("line string needs zero or at least two vertices")]
    SingleVertexLineString,

    #[error("ring needs zero or at least four vertices, got {0}")]
    TooFewRingVertices(usize),

    #[error("ring is not closed: first vertex ({x0}, {y0}) != last vertex ({x1}, {y1})")]
    UnclosedRing { x0: f64, y0: f64, x1: f64, y1: f64 },

    #[error("polygon with an empty shell cannot have holes")]
    HolesWithoutShell,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
