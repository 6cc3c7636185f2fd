/*!
 * Generic access to matrix storage.
 *
 * These traits are the contract a [ColumnView](crate::columns::ColumnView) consumes. They are
 * implemented by [Matrix](crate::matrices::Matrix), by the
 * [structured matrices](crate::matrices::structured::StructuredMatrix) and forwarded through
 * references and boxes, so a view may borrow or own its matrix.
 */

use crate::columns::addressing::Addressing;
use crate::matrices::structures::Structure;
use crate::matrices::{Column, DataLayout, Row};

pub mod traits;

/**
* A shared/immutable reference to a dense matrix of some type.
*
* # Indexing
*
* Valid indexes into a MatrixRef range from 0 inclusive to `view_rows` exclusive for rows and
* from 0 inclusive to `view_columns` for columns.
*
* # Safety
*
* In order to support returning references without bounds checking in a useful way, the
* implementing type is required to uphold several invariants.
*
* 1 - Any valid index as described in Indexing will yield a safe reference when calling
* `get_reference_unchecked` and `get_reference_unchecked_mut` - It is the caller's responsbility
* to check `view_rows`/`view_columns`/`view_size` and request only indexes in range.
*
* 2 - `storage` returns a buffer of exactly `view_rows() * view_columns()` elements, and for
* every valid column and every row index, the offset given by `Self::Addressing` is the
* position of an element of that column in this buffer.
*
* 3 - Either the `view_rows`/`view_columns`/`view_size` that define which indexes are valid may not
* be changed by a shared reference to the MatrixRef, or `get_reference_unchecked` and
* `get_reference_unchecked_mut` must panic if the index is invalid.
*
* Essentially, interior mutability causes problems, since a column view checks its column
* index once at construction and then relies on the range of valid indexes not changing.
* This is trivially the case by default since a [Matrix](crate::matrices::Matrix) does not have any form of
* interior mutability, and therefore a view holding a shared reference to a Matrix prevents
* that matrix being resized.
*/
pub unsafe trait MatrixRef<T> {
    /**
     * The structural constraint on the elements of this matrix.
     */
    type Structure: Structure;

    /**
     * How a column of this matrix is laid out in its buffer.
     */
    type Addressing: Addressing;

    /**
     * Gets a reference to the value at the index if the index is in range. Otherwise returns None.
     */
    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T>;

    /**
     * The number of rows that this reference can view.
     */
    fn view_rows(&self) -> Row;

    /**
     * The number of columns that this reference can view.
     */
    fn view_columns(&self) -> Column;

    /**
     * The size of the matrix that this reference can view.
     */
    fn view_size(&self) -> (Row, Column) {
        (self.view_rows(), self.view_columns())
    }

    /**
     * Gets a reference to the value at the index without doing any bounds checking. For a safe
     * alternative see [try_get_reference](MatrixRef::try_get_reference).
     *
     * # Safety
     *
     * Calling this method with an out-of-bounds index is *[undefined behavior]* even if the
     * resulting reference is not used. Valid indexes are defined as in [MatrixRef].
     *
     * [undefined behavior]: https://doc.rust-lang.org/reference/behavior-considered-undefined.html
     * [MatrixRef]: MatrixRef
     */
    unsafe fn get_reference_unchecked(&self, row: Row, column: Column) -> &T;

    /**
     * The order the elements are stored in.
     */
    fn data_layout(&self) -> DataLayout;

    /**
     * The whole contiguous buffer backing this matrix.
     */
    fn storage(&self) -> &[T];
}

/**
 * A unique/mutable reference to a matrix of some type with no structural restrictions on
 * writes.
 *
 * # Safety
 *
 * See [MatrixRef](MatrixRef). `storage_mut` must return the same buffer as `storage`.
 */
pub unsafe trait MatrixMut<T>: MatrixRef<T> {
    /**
     * Gets a mutable reference to the value at the index, if the index is in range. Otherwise
     * returns None.
     */
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T>;

    /**
     * Gets a mutable reference to the value at the index without doing any bounds checking.
     * For a safe alternative see [try_get_reference_mut](MatrixMut::try_get_reference_mut).
     *
     * # Safety
     *
     * Calling this method with an out-of-bounds index is *[undefined behavior]* even if the
     * resulting reference is not used. Valid indexes are defined as in [MatrixRef].
     *
     * [undefined behavior]: https://doc.rust-lang.org/reference/behavior-considered-undefined.html
     * [MatrixRef]: MatrixRef
     */
    unsafe fn get_reference_unchecked_mut(&mut self, row: Row, column: Column) -> &mut T;

    /**
     * The whole contiguous buffer backing this matrix.
     */
    fn storage_mut(&mut self) -> &mut [T];
}

/**
 * Access to the same data as a matrix without its structural write restrictions.
 *
 * An unrestricted matrix derestricts to itself. A structured matrix derestricts to the plain
 * matrix it wraps, so anything written through the result bypasses the structure checks.
 * Column views only write through the derestricted handle after validating the write.
 */
pub trait Derestrict<T>: MatrixRef<T> {
    /**
     * The unrestricted matrix type.
     */
    type Unrestricted: MatrixMut<T>;

    /**
     * Returns the same data without structural write restrictions.
     */
    fn derestrict(&mut self) -> &mut Self::Unrestricted;
}
