use thiserror::Error;

/// Errors raised by the matrix operations.
///
/// Both variants are contract errors: the element-wise operations require
/// operands of identical dimensions, and multiplication requires the left
/// operand's column count to match the right operand's row count. The checks
/// are vacuous while every matrix in this crate is a fixed 3x3 or 4x4, but
/// the `Result` contract is kept so callers do not change shape if
/// dynamically sized matrices are ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("matrices must have the same dimensions ({lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols})")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("matrices cannot be multiplied ({lhs_cols} columns vs {rhs_rows} rows)")]
    IncompatibleDimensions { lhs_cols: usize, rhs_rows: usize },
}
