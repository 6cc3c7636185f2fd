/*!
 * Square matrices with a structural constraint.
 *
 * A [StructuredMatrix] owns a plain [Matrix] and only hands out write access that keeps the
 * constraint: its own checked [set](StructuredMatrix::set) and the validating assignments of a
 * [ColumnView]. It never implements [MatrixMut](crate::matrices::views::MatrixMut), the
 * unchecked write path is only reachable through
 * [derestrict](crate::matrices::views::Derestrict).
 *
 * ```
 * use column_views::matrices::Matrix;
 * use column_views::matrices::structured::LowerMatrix;
 * use column_views::columns::errors::ColumnViewError;
 *
 * let mut lower: LowerMatrix<i32> = LowerMatrix::from(Matrix::from(vec![
 *     vec![ 1, 0, 0 ],
 *     vec![ 2, 3, 0 ],
 *     vec![ 4, 5, 6 ]])).unwrap();
 * let mut column = lower.column_view_mut(1).unwrap();
 * // the first element of column 1 lies above the diagonal
 * assert!(matches!(
 *     column.assign(&[ 9, 8, 7 ]),
 *     Err(ColumnViewError::InvariantViolation { .. })
 * ));
 * column.assign(&[ 0, 8, 7 ]).unwrap();
 * assert_eq!(lower.get(2, 1), 7);
 * ```
 */

use std::marker::PhantomData;

use crate::columns::ColumnView;
use crate::columns::errors::ColumnViewError;
use crate::matrices::errors::StructureError;
use crate::matrices::structures::{Diagonal, Lower, Structure, StructuralCategory, Symmetric, Upper};
use crate::matrices::{Column, Matrix, Row, RowMajor, StorageOrder};
use crate::numeric::Scalar;

/**
 * A square matrix whose elements are constrained by the [Structure] `S`.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredMatrix<T, S, O = RowMajor> {
    matrix: Matrix<T, O>,
    _structure: PhantomData<S>,
}

/// A matrix with only zeros above the diagonal.
pub type LowerMatrix<T, O = RowMajor> = StructuredMatrix<T, Lower, O>;
/// A matrix with only zeros below the diagonal.
pub type UpperMatrix<T, O = RowMajor> = StructuredMatrix<T, Upper, O>;
/// A matrix with only zeros off the diagonal.
pub type DiagonalMatrix<T, O = RowMajor> = StructuredMatrix<T, Diagonal, O>;
/// A matrix equal to its own transpose.
pub type SymmetricMatrix<T, O = RowMajor> = StructuredMatrix<T, Symmetric, O>;

impl <T, S: Structure, O: StorageOrder> StructuredMatrix<T, S, O> {
    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        self.matrix.rows()
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        self.matrix.columns()
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        self.matrix.size()
    }

    /**
     * The structural category of this matrix.
     */
    pub fn category(&self) -> StructuralCategory {
        S::CATEGORY
    }

    /**
     * Gets a reference to the value at this row and column. Rows and Columns are 0 indexed.
     */
    pub fn get_reference(&self, row: Row, column: Column) -> &T {
        self.matrix.get_reference(row, column)
    }

    /**
     * Returns the underlying unrestricted matrix for reading.
     */
    pub fn matrix(&self) -> &Matrix<T, O> {
        &self.matrix
    }

    /**
     * Consumes this structured matrix, returning the underlying matrix.
     */
    pub fn into_inner(self) -> Matrix<T, O> {
        self.matrix
    }

    /**
     * Creates a view of a column of this matrix.
     */
    pub fn column_view(
        &self,
        column: Column,
    ) -> Result<ColumnView<T, &StructuredMatrix<T, S, O>>, ColumnViewError> {
        ColumnView::from(self, column)
    }

    /**
     * Creates a mutable view of a column of this matrix. Assignments through the view are
     * validated against the structure before anything is written.
     */
    pub fn column_view_mut(
        &mut self,
        column: Column,
    ) -> Result<ColumnView<T, &mut StructuredMatrix<T, S, O>>, ColumnViewError> {
        ColumnView::from(self, column)
    }

    pub(crate) fn inner_mut(&mut self) -> &mut Matrix<T, O> {
        &mut self.matrix
    }
}

impl <T: Scalar, S: Structure, O: StorageOrder> StructuredMatrix<T, S, O> {
    /**
     * Wraps a matrix after checking it is square and fits the structure.
     */
    pub fn from(matrix: Matrix<T, O>) -> Result<Self, StructureError> {
        let category = S::CATEGORY;
        let (rows, columns) = matrix.size();
        if rows != columns {
            tracing::debug!(%category, rows, columns, "rejected non square matrix");
            return Err(StructureError::NotSquare {
                category,
                rows,
                columns,
            });
        }
        if let Some((row, column)) = S::violation(&matrix) {
            tracing::debug!(%category, row, column, "rejected unstructured matrix");
            return Err(StructureError::Violation {
                category,
                row,
                column,
            });
        }
        Ok(StructuredMatrix {
            matrix,
            _structure: PhantomData,
        })
    }

    /**
     * Creates a square matrix of zeros, which fits every structure.
     *
     * # Panics
     *
     * If the size is zero.
     */
    pub fn zeros(size: usize) -> Self {
        StructuredMatrix {
            matrix: Matrix::zeros((size, size)),
            _structure: PhantomData,
        }
    }

    /**
     * Gets a copy of the value at this row and column. Rows and Columns are 0 indexed.
     */
    pub fn get(&self, row: Row, column: Column) -> T {
        self.matrix.get(row, column)
    }

    /**
     * Sets a new value to this row and column if the structure allows it. Setting a zero is
     * always allowed. In a symmetric matrix the transposed element is set as well.
     *
     * # Panics
     *
     * If the row or column is out of range.
     */
    pub fn set(&mut self, row: Row, column: Column, value: T) -> Result<(), StructureError> {
        if !S::allows(row, column) && !value.is_default() {
            let category = S::CATEGORY;
            tracing::debug!(%category, row, column, "rejected structured write");
            return Err(StructureError::Violation {
                category,
                row,
                column,
            });
        }
        if matches!(S::CATEGORY, StructuralCategory::Symmetric) {
            self.matrix.set(column, row, value.clone());
        }
        self.matrix.set(row, column, value);
        Ok(())
    }
}
