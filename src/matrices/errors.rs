use thiserror::Error;

use crate::matrices::{Column, Row};
use crate::matrices::structures::StructuralCategory;

/**
 * An error indicating failure to build or modify a structured matrix because the data does
 * not fit its [StructuralCategory].
 */
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Error)]
#[non_exhaustive]
pub enum StructureError {
    /// Only square matrices can be triangular, diagonal or symmetric.
    #[error("{category} matrix must be square but was {rows}x{columns}")]
    NotSquare {
        category: StructuralCategory,
        rows: Row,
        columns: Column,
    },
    /// The element at this position would break the structure.
    #[error("element at ({row}, {column}) does not fit a {category} matrix")]
    Violation {
        category: StructuralCategory,
        row: Row,
        column: Column,
    },
}
