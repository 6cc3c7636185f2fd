/*!
 * How the elements of a column are laid out in a matrix buffer.
 *
 * There are exactly three layouts a column can have:
 *
 * - [ColumnMajorColumn]: element `i` is `(i, column)` and the column is one contiguous run of
 *   the buffer.
 * - [RowMajorColumn]: element `i` is `(i, column)` and consecutive elements are a whole row
 *   apart. Such a column can only be walked element by element, so views over row major
 *   matrices are inherently slower for column access. Prefer column major storage if columns
 *   are accessed a lot.
 * - [SymmetricRowMajorColumn]: element `i` is `(column, i)`, the row of the same index, which
 *   holds the same values as the column in a symmetric matrix and is contiguous.
 */

use std::ops::Range;

use crate::matrices::{Column, Row};

mod sealed {
    pub trait Sealed {}
}

/**
 * A column layout. This trait is sealed, see the [module docs](self) for the implementations.
 */
pub trait Addressing: sealed::Sealed {
    /**
     * Whether the elements of a column are adjacent in the buffer.
     */
    const CONTIGUOUS: bool;

    /**
     * The matrix coordinates of element `index` of `column`.
     */
    fn coordinates(column: Column, index: usize) -> (Row, Column);

    /**
     * The buffer position of element `index` of `column` in a `rows` by `columns` matrix.
     */
    fn offset(column: Column, index: usize, rows: Row, columns: Column) -> usize;

    /**
     * The buffer position of the element at the transpose of the coordinates of element
     * `index` of `column`.
     */
    fn transposed_offset(column: Column, index: usize, rows: Row, columns: Column) -> usize;

    /**
     * The distance in the buffer between consecutive elements of a column.
     */
    fn stride(rows: Row, columns: Column) -> usize;

    /**
     * The buffer range holding `column` when the layout is contiguous.
     */
    #[inline]
    fn lane(column: Column, rows: Row, columns: Column) -> Option<Range<usize>> {
        if Self::CONTIGUOUS {
            let start = Self::offset(column, 0, rows, columns);
            Some(start..start + rows)
        } else {
            None
        }
    }
}

/**
 * A column of a column major matrix.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ColumnMajorColumn;

/**
 * A column of a row major matrix, strided across its rows.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RowMajorColumn;

/**
 * A column of a symmetric row major matrix, read from the row of the same index.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SymmetricRowMajorColumn;

impl sealed::Sealed for ColumnMajorColumn {}
impl sealed::Sealed for RowMajorColumn {}
impl sealed::Sealed for SymmetricRowMajorColumn {}

impl Addressing for ColumnMajorColumn {
    const CONTIGUOUS: bool = true;

    #[inline]
    fn coordinates(column: Column, index: usize) -> (Row, Column) {
        (index, column)
    }

    #[inline]
    fn offset(column: Column, index: usize, rows: Row, _columns: Column) -> usize {
        column * rows + index
    }

    #[inline]
    fn transposed_offset(column: Column, index: usize, rows: Row, _columns: Column) -> usize {
        index * rows + column
    }

    #[inline]
    fn stride(_rows: Row, _columns: Column) -> usize {
        1
    }
}

impl Addressing for RowMajorColumn {
    const CONTIGUOUS: bool = false;

    #[inline]
    fn coordinates(column: Column, index: usize) -> (Row, Column) {
        (index, column)
    }

    #[inline]
    fn offset(column: Column, index: usize, _rows: Row, columns: Column) -> usize {
        index * columns + column
    }

    #[inline]
    fn transposed_offset(column: Column, index: usize, _rows: Row, columns: Column) -> usize {
        column * columns + index
    }

    #[inline]
    fn stride(_rows: Row, columns: Column) -> usize {
        columns
    }
}

impl Addressing for SymmetricRowMajorColumn {
    const CONTIGUOUS: bool = true;

    #[inline]
    fn coordinates(column: Column, index: usize) -> (Row, Column) {
        (column, index)
    }

    #[inline]
    fn offset(column: Column, index: usize, _rows: Row, columns: Column) -> usize {
        column * columns + index
    }

    #[inline]
    fn transposed_offset(column: Column, index: usize, _rows: Row, columns: Column) -> usize {
        index * columns + column
    }

    #[inline]
    fn stride(_rows: Row, _columns: Column) -> usize {
        1
    }
}
