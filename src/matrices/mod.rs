/*!
 * Dense matrix storage
 *
 * A [Matrix] keeps its elements in one contiguous buffer, laid out either one row after another
 * ([RowMajor], the default) or one column after another ([ColumnMajor]). The layout is part of
 * the type so that a [ColumnView](crate::columns::ColumnView) can pick how to walk a column at
 * compile time: a column of a column major matrix is a contiguous run of the buffer, a column of
 * a row major matrix is strided across every row.
 *
 * Matrices with a structural constraint on which elements may be nonzero are in
 * [structured].
 */

use std::fmt::Debug;
use std::marker::PhantomData;

pub mod errors;
pub mod structured;
pub mod structures;
pub mod views;

use crate::columns::addressing::{
    Addressing, ColumnMajorColumn, RowMajorColumn, SymmetricRowMajorColumn,
};
use crate::columns::errors::ColumnViewError;
use crate::columns::ColumnView;
use crate::numeric::ZeroOne;

/// The maximum row and column lengths are usize, due to the internal storage being backed by
/// a Vec
pub type Row = usize;
pub type Column = usize;

/**
 * The order in which the elements of a matrix are stored in its buffer.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DataLayout {
    /// Each row is contiguous, rows follow one another.
    RowMajor,
    /// Each column is contiguous, columns follow one another.
    ColumnMajor,
}

mod sealed {
    pub trait Sealed {}
}

/**
 * A compile time marker for the [DataLayout] of a matrix. This trait is sealed, the only
 * implementations are [RowMajor] and [ColumnMajor].
 *
 * The markers are zero sized, so the derived traits of a [Matrix] only depend on its
 * element type.
 */
pub trait StorageOrder: sealed::Sealed + Clone + Copy + Debug + Default + PartialEq + Eq {
    /**
     * The runtime equivalent of this marker.
     */
    const LAYOUT: DataLayout;

    /**
     * How a column view walks a column of an unconstrained matrix in this order.
     */
    type General: Addressing;

    /**
     * How a column view walks a column of a symmetric matrix in this order.
     */
    type Symmetric: Addressing;

    /**
     * The position of `(row, column)` in a buffer of this order holding `rows` by `columns`
     * elements.
     */
    fn offset(row: Row, column: Column, rows: Row, columns: Column) -> usize;
}

/**
 * Marker for matrices stored one row after another.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RowMajor;

/**
 * Marker for matrices stored one column after another.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ColumnMajor;

impl sealed::Sealed for RowMajor {}
impl sealed::Sealed for ColumnMajor {}

impl StorageOrder for RowMajor {
    const LAYOUT: DataLayout = DataLayout::RowMajor;
    type General = RowMajorColumn;
    // the row of the same index holds the same values by symmetry and is contiguous
    type Symmetric = SymmetricRowMajorColumn;

    #[inline]
    fn offset(row: Row, column: Column, _rows: Row, columns: Column) -> usize {
        row * columns + column
    }
}

impl StorageOrder for ColumnMajor {
    const LAYOUT: DataLayout = DataLayout::ColumnMajor;
    type General = ColumnMajorColumn;
    type Symmetric = ColumnMajorColumn;

    #[inline]
    fn offset(row: Row, column: Column, rows: Row, _columns: Column) -> usize {
        column * rows + row
    }
}

/**
 * A general purpose dense matrix of some type.
 *
 * If the type implements [`Clone`](https://doc.rust-lang.org/std/clone/trait.Clone.html)
 * most storage and accessor methods are defined and if the type implements
 * [`Scalar`](crate::numeric::Scalar) then column views over the matrix can be assigned to.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T, O = RowMajor> {
    data: Vec<T>,
    rows: Row,
    columns: Column,
    _order: PhantomData<O>,
}

/**
 * Methods for matrices of any type, including non numerical types such as bool.
 */
impl <T, O: StorageOrder> Matrix<T, O> {
    /**
     * Creates a matrix from a nested array of values, each inner vector
     * being a row, and hence the outer vector containing all rows in sequence, the
     * same way as when writing matrices in mathematics. The values are stored in the
     * matrix's [StorageOrder] regardless.
     *
     * Example of a 2 x 3 matrix in both notations:
     * ```ignore
     *   [
     *      1, 2, 4
     *      8, 9, 3
     *   ]
     * ```
     * ```
     * use column_views::matrices::{Matrix, ColumnMajor};
     * let matrix: Matrix<i32, ColumnMajor> = Matrix::from(vec![
     *     vec![ 1, 2, 4 ],
     *     vec![ 8, 9, 3 ]]);
     * assert_eq!(matrix.get(1, 2), 3);
     * ```
     *
     * # Panics
     *
     * If there are no rows, no columns, or the rows are of different lengths.
     */
    pub fn from(values: Vec<Vec<T>>) -> Matrix<T, O> {
        assert!(!values.is_empty(), "No rows defined");
        // check length of first row is > 1
        assert!(!values[0].is_empty(), "No column defined");
        // check length of each row is the same
        assert!(values.iter().map(|x| x.len()).all(|x| x == values[0].len()), "Inconsistent size");
        let rows = values.len();
        let columns = values[0].len();
        let data = match O::LAYOUT {
            DataLayout::RowMajor => values.into_iter().flatten().collect(),
            DataLayout::ColumnMajor => {
                let mut transposed: Vec<Vec<T>> = (0..columns)
                    .map(|_| Vec::with_capacity(rows))
                    .collect();
                for row in values {
                    for (column, value) in row.into_iter().enumerate() {
                        transposed[column].push(value);
                    }
                }
                transposed.into_iter().flatten().collect()
            }
        };
        Matrix {
            data,
            rows,
            columns,
            _order: PhantomData,
        }
    }

    /**
     * Creates a matrix with the specified size from a row major vec of data.
     *
     * ```
     * use column_views::matrices::Matrix;
     * let matrix: Matrix<_> = Matrix::from_flat_row_major((2, 3), vec![
     *     1, 2, 4,
     *     8, 9, 3]);
     * assert_eq!(matrix, Matrix::from(vec![vec![1, 2, 4], vec![8, 9, 3]]));
     * ```
     *
     * # Panics
     *
     * If the size is zero in either dimension or does not match the length of the data.
     */
    pub fn from_flat_row_major(size: (Row, Column), values: Vec<T>) -> Matrix<T, O> {
        let (rows, columns) = size;
        assert!(rows > 0 && columns > 0, "Matrix must have at least one row and column");
        assert!(rows * columns == values.len(), "Inconsistent size");
        let mut values = values.into_iter();
        Matrix::from(
            (0..rows)
                .map(|_| values.by_ref().take(columns).collect())
                .collect(),
        )
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.rows, self.columns)
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        self.rows
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        self.columns
    }

    /**
     * Returns the order the elements of this matrix are stored in.
     */
    pub fn data_layout(&self) -> DataLayout {
        O::LAYOUT
    }

    #[inline]
    fn offset(&self, row: Row, column: Column) -> usize {
        O::offset(row, column, self.rows, self.columns)
    }

    /**
     * Gets a reference to the value at this row and column. Rows and Columns are 0 indexed.
     */
    pub fn get_reference(&self, row: Row, column: Column) -> &T {
        assert!(row < self.rows(), "Row out of index");
        assert!(column < self.columns(), "Column out of index");
        &self.data[self.offset(row, column)]
    }

    /**
     * Sets a new value to this row and column. Rows and Columns are 0 indexed.
     */
    pub fn set(&mut self, row: Row, column: Column, value: T) {
        assert!(row < self.rows(), "Row out of index");
        assert!(column < self.columns(), "Column out of index");
        let offset = self.offset(row, column);
        self.data[offset] = value;
    }

    /**
     * Returns the buffer of this matrix in its [DataLayout].
     */
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /**
     * Creates a view of a column of this matrix.
     *
     * ```
     * use column_views::matrices::Matrix;
     * let matrix: Matrix<_> = Matrix::from(vec![
     *     vec![ 1, 2 ],
     *     vec![ 3, 4 ]]);
     * let column = matrix.column_view(1).unwrap();
     * assert_eq!(column.to_vec(), vec![ 2, 4 ]);
     * assert!(matrix.column_view(2).is_err());
     * ```
     */
    pub fn column_view(&self, column: Column) -> Result<ColumnView<T, &Matrix<T, O>>, ColumnViewError> {
        ColumnView::from(self, column)
    }

    /**
     * Creates a mutable view of a column of this matrix.
     */
    pub fn column_view_mut(
        &mut self,
        column: Column,
    ) -> Result<ColumnView<T, &mut Matrix<T, O>>, ColumnViewError> {
        ColumnView::from(self, column)
    }
}

/**
 * Methods for matrices with types that can be copied, but still not neccessarily numerical.
 */
impl <T: Clone, O: StorageOrder> Matrix<T, O> {
    /**
     * Creates a matrix of the provided size with all elements initialised to the provided value
     */
    pub fn empty(value: T, size: (Row, Column)) -> Matrix<T, O> {
        let (rows, columns) = size;
        assert!(rows > 0 && columns > 0, "Matrix must have at least one row and column");
        Matrix {
            data: vec![value; rows * columns],
            rows,
            columns,
            _order: PhantomData,
        }
    }

    /**
     * Gets a copy of the value at this row and column. Rows and Columns are 0 indexed.
     */
    pub fn get(&self, row: Row, column: Column) -> T {
        self.get_reference(row, column).clone()
    }
}

impl <T: Clone + ZeroOne, O: StorageOrder> Matrix<T, O> {
    /**
     * Creates a matrix of the provided size with every element zero.
     */
    pub fn zeros(size: (Row, Column)) -> Matrix<T, O> {
        Matrix::empty(T::zero(), size)
    }
}
