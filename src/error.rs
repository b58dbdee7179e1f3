use thiserror::Error;

/// Errors raised while validating dimension constraints at construction.
///
/// These are the only recoverable failures in the crate. Out-of-range
/// coordinate access and use after [`erase`](crate::grid::DenseGrid::erase)
/// are deliberately unchecked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("got {got} constraints for a rank-{expected} grid")]
    DimensionCountMismatch { expected: usize, got: usize },

    #[error("axis {axis} constrained to zero")]
    ZeroExtent { axis: usize },
}
