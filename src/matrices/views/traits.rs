/*!
 * Trait implementations for [MatrixRef](MatrixRef), [MatrixMut](MatrixMut) and
 * [Derestrict](Derestrict).
 *
 * These implementations are written here but Rust docs will display them on the
 * traits' pages.
 *
 * An owned or referenced [Matrix](Matrix) is a MatrixRef, and a MatrixMut if not a shared
 * reference. Therefore, a column view can borrow a matrix or take ownership of it.
 *
 * A [StructuredMatrix](StructuredMatrix) is only a MatrixRef. Writing to it goes through
 * [Derestrict](Derestrict), which exclusive references and boxes forward.
 */

use crate::matrices::structured::StructuredMatrix;
use crate::matrices::structures::{Structure, Unconstrained};
use crate::matrices::views::{Derestrict, MatrixMut, MatrixRef};
use crate::matrices::{Column, DataLayout, Matrix, Row, StorageOrder};

// # Safety
//
// The buffer is created with rows * columns elements and the dimensions of a Matrix never
// change after construction, so any index in range of rows and columns is in range of the
// buffer. The general addressing of O computes exactly the offsets O::offset does.
/**
 * An owned Matrix implements MatrixRef.
 */
unsafe impl <T, O: StorageOrder> MatrixRef<T> for Matrix<T, O> {
    type Structure = Unconstrained;
    type Addressing = O::General;

    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        if row < self.rows() && column < self.columns() {
            Some(self.get_reference(row, column))
        } else {
            None
        }
    }

    fn view_rows(&self) -> Row {
        self.rows()
    }

    fn view_columns(&self) -> Column {
        self.columns()
    }

    unsafe fn get_reference_unchecked(&self, row: Row, column: Column) -> &T {
        let offset = O::offset(row, column, self.rows(), self.columns());
        // Safety: the caller is responsible for the index being in range
        unsafe { self.as_slice().get_unchecked(offset) }
    }

    fn data_layout(&self) -> DataLayout {
        O::LAYOUT
    }

    fn storage(&self) -> &[T] {
        self.as_slice()
    }
}

// # Safety
//
// See MatrixRef impl for Matrix
/**
 * An owned Matrix implements MatrixMut.
 */
unsafe impl <T, O: StorageOrder> MatrixMut<T> for Matrix<T, O> {
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        if row < self.rows() && column < self.columns() {
            let offset = O::offset(row, column, self.rows(), self.columns());
            Some(&mut self.as_mut_slice()[offset])
        } else {
            None
        }
    }

    unsafe fn get_reference_unchecked_mut(&mut self, row: Row, column: Column) -> &mut T {
        let offset = O::offset(row, column, self.rows(), self.columns());
        // Safety: the caller is responsible for the index being in range
        unsafe { self.as_mut_slice().get_unchecked_mut(offset) }
    }

    fn storage_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/**
 * A Matrix has no restrictions and derestricts to itself.
 */
impl <T, O: StorageOrder> Derestrict<T> for Matrix<T, O> {
    type Unrestricted = Matrix<T, O>;

    fn derestrict(&mut self) -> &mut Matrix<T, O> {
        self
    }
}

// # Safety
//
// The wrapped matrix is square and never resized, see MatrixRef impl for Matrix. The
// addressing of a symmetric structure transposes the coordinates, which stays in range of the
// buffer because the matrix is square.
/**
 * An owned StructuredMatrix implements MatrixRef.
 */
unsafe impl <T, S: Structure, O: StorageOrder> MatrixRef<T> for StructuredMatrix<T, S, O> {
    type Structure = S;
    type Addressing = S::Addressing<O>;

    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        self.matrix().try_get_reference(row, column)
    }

    fn view_rows(&self) -> Row {
        self.rows()
    }

    fn view_columns(&self) -> Column {
        self.columns()
    }

    unsafe fn get_reference_unchecked(&self, row: Row, column: Column) -> &T {
        // Safety: forwarded contract
        unsafe { self.matrix().get_reference_unchecked(row, column) }
    }

    fn data_layout(&self) -> DataLayout {
        O::LAYOUT
    }

    fn storage(&self) -> &[T] {
        self.matrix().as_slice()
    }
}

/**
 * A StructuredMatrix derestricts to the Matrix it wraps.
 */
impl <T, S: Structure, O: StorageOrder> Derestrict<T> for StructuredMatrix<T, S, O> {
    type Unrestricted = Matrix<T, O>;

    fn derestrict(&mut self) -> &mut Matrix<T, O> {
        self.inner_mut()
    }
}

// # Safety
//
// Since we hold a shared reference to a source that does not implement interior mutability
// we know it is not possible to mutate the size of the matrix out from under us.
/**
 * A shared reference to a MatrixRef implements MatrixRef.
 */
unsafe impl <'source, T, S> MatrixRef<T> for &'source S
where
    S: MatrixRef<T>,
{
    type Structure = S::Structure;
    type Addressing = S::Addressing;

    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        S::try_get_reference(self, row, column)
    }

    fn view_rows(&self) -> Row {
        S::view_rows(self)
    }

    fn view_columns(&self) -> Column {
        S::view_columns(self)
    }

    unsafe fn get_reference_unchecked(&self, row: Row, column: Column) -> &T {
        // Safety: forwarded contract
        unsafe { S::get_reference_unchecked(self, row, column) }
    }

    fn data_layout(&self) -> DataLayout {
        S::data_layout(self)
    }

    fn storage(&self) -> &[T] {
        S::storage(self)
    }
}

// # Safety
//
// Since we hold an exclusive reference to a source we know it is not possible to mutate
// the size of the matrix out from under us.
/**
 * An exclusive reference to a MatrixRef implements MatrixRef.
 */
unsafe impl <'source, T, S> MatrixRef<T> for &'source mut S
where
    S: MatrixRef<T>,
{
    type Structure = S::Structure;
    type Addressing = S::Addressing;

    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        S::try_get_reference(self, row, column)
    }

    fn view_rows(&self) -> Row {
        S::view_rows(self)
    }

    fn view_columns(&self) -> Column {
        S::view_columns(self)
    }

    unsafe fn get_reference_unchecked(&self, row: Row, column: Column) -> &T {
        // Safety: forwarded contract
        unsafe { S::get_reference_unchecked(self, row, column) }
    }

    fn data_layout(&self) -> DataLayout {
        S::data_layout(self)
    }

    fn storage(&self) -> &[T] {
        S::storage(self)
    }
}

// # Safety
//
// Since we hold an exclusive reference to a source we know it is not possible to mutate
// the size of the matrix out from under us.
/**
 * An exclusive reference to a MatrixMut implements MatrixMut.
 */
unsafe impl <'source, T, S> MatrixMut<T> for &'source mut S
where
    S: MatrixMut<T>,
{
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        S::try_get_reference_mut(self, row, column)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, row: Row, column: Column) -> &mut T {
        // Safety: forwarded contract
        unsafe { S::get_reference_unchecked_mut(self, row, column) }
    }

    fn storage_mut(&mut self) -> &mut [T] {
        S::storage_mut(self)
    }
}

/**
 * An exclusive reference to a Derestrict implements Derestrict.
 */
impl <'source, T, S> Derestrict<T> for &'source mut S
where
    S: Derestrict<T>,
{
    type Unrestricted = S::Unrestricted;

    fn derestrict(&mut self) -> &mut S::Unrestricted {
        S::derestrict(self)
    }
}

// # Safety
//
// Since we hold an owned source we know it is not possible to mutate the size of the matrix
// out from under us.
/**
 * A box of a MatrixRef also implements MatrixRef.
 */
unsafe impl <T, S> MatrixRef<T> for Box<S>
where
    S: MatrixRef<T>,
{
    type Structure = S::Structure;
    type Addressing = S::Addressing;

    fn try_get_reference(&self, row: Row, column: Column) -> Option<&T> {
        self.as_ref().try_get_reference(row, column)
    }

    fn view_rows(&self) -> Row {
        self.as_ref().view_rows()
    }

    fn view_columns(&self) -> Column {
        self.as_ref().view_columns()
    }

    unsafe fn get_reference_unchecked(&self, row: Row, column: Column) -> &T {
        // Safety: forwarded contract
        unsafe { self.as_ref().get_reference_unchecked(row, column) }
    }

    fn data_layout(&self) -> DataLayout {
        self.as_ref().data_layout()
    }

    fn storage(&self) -> &[T] {
        self.as_ref().storage()
    }
}

// # Safety
//
// See MatrixRef impl for Box
/**
 * A box of a MatrixMut also implements MatrixMut.
 */
unsafe impl <T, S> MatrixMut<T> for Box<S>
where
    S: MatrixMut<T>,
{
    fn try_get_reference_mut(&mut self, row: Row, column: Column) -> Option<&mut T> {
        self.as_mut().try_get_reference_mut(row, column)
    }

    unsafe fn get_reference_unchecked_mut(&mut self, row: Row, column: Column) -> &mut T {
        // Safety: forwarded contract
        unsafe { self.as_mut().get_reference_unchecked_mut(row, column) }
    }

    fn storage_mut(&mut self) -> &mut [T] {
        self.as_mut().storage_mut()
    }
}

/**
 * A box of a Derestrict also implements Derestrict.
 */
impl <T, S> Derestrict<T> for Box<S>
where
    S: Derestrict<T>,
{
    type Unrestricted = S::Unrestricted;

    fn derestrict(&mut self) -> &mut S::Unrestricted {
        self.as_mut().derestrict()
    }
}
