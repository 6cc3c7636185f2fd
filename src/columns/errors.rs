use thiserror::Error;

use crate::matrices::Column;
use crate::matrices::structures::StructuralCategory;

/**
 * The ways creating or assigning to a [ColumnView](crate::columns::ColumnView) can fail.
 *
 * Every error is detected before anything is written, so a failed operation leaves the
 * backing matrix unchanged.
 */
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Error)]
#[non_exhaustive]
pub enum ColumnViewError {
    /// The column index is not less than the number of columns in the matrix.
    #[error("invalid column access index {index} for a matrix with {columns} columns")]
    InvalidIndex { index: Column, columns: Column },
    /// The source vector has a different number of elements than the column.
    #[error("column sizes do not match: column has {expected} elements but source has {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// The assignment would put a nonzero value where the structure requires zero.
    #[error("invalid assignment to column {column} of a {category} matrix")]
    InvariantViolation {
        category: StructuralCategory,
        column: Column,
    },
}
