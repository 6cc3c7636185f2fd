/*!
 * Structural categories of matrices.
 *
 * A structure is a compile time marker stating which elements of a square matrix may be
 * nonzero. It decides which part of a column a homogeneous assignment touches and which
 * elements of a source vector must be zero for a full column assignment to keep the matrix in
 * its category.
 */

use std::fmt;
use std::ops::Range;

use crate::columns::addressing::Addressing;
use crate::columns::invariants;
use crate::matrices::{Column, Matrix, Row, StorageOrder};
use crate::numeric::Scalar;
use crate::vectors::DenseVector;
use crate::vectors::sparse::SparseVector;

/**
 * The runtime name of a [Structure].
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StructuralCategory {
    Unconstrained,
    LowerTriangular,
    UpperTriangular,
    Diagonal,
    Symmetric,
}

impl fmt::Display for StructuralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructuralCategory::Unconstrained => "unconstrained",
            StructuralCategory::LowerTriangular => "lower triangular",
            StructuralCategory::UpperTriangular => "upper triangular",
            StructuralCategory::Diagonal => "diagonal",
            StructuralCategory::Symmetric => "symmetric",
        };
        write!(f, "{}", name)
    }
}

mod sealed {
    pub trait Sealed {}
}

/**
 * A structural constraint on a square matrix. This trait is sealed, the implementations are
 * [Unconstrained], [Lower], [Upper], [Diagonal] and [Symmetric].
 */
pub trait Structure: sealed::Sealed + Clone + Copy + fmt::Debug + Default + PartialEq + Eq {
    /**
     * The runtime name of this structure.
     */
    const CATEGORY: StructuralCategory;

    /**
     * How a column view walks a column of a matrix with this structure stored in order `O`.
     */
    type Addressing<O: StorageOrder>: Addressing;

    /**
     * Whether the element at `(row, column)` may hold a nonzero value.
     */
    fn allows(row: Row, column: Column) -> bool;

    /**
     * The indexes of a column of length `size` that a homogeneous assignment writes to.
     */
    fn homogeneous_range(column: Column, size: usize) -> Range<usize>;

    /**
     * Checks if assigning the dense vector to this column keeps the structure intact.
     */
    fn preserves_dense<T, V>(column: Column, rhs: &V) -> bool
    where
        T: Scalar,
        V: DenseVector<T> + ?Sized;

    /**
     * Checks if assigning the sparse vector to this column keeps the structure intact.
     */
    fn preserves_sparse<T, V>(column: Column, rhs: &V) -> bool
    where
        T: Scalar,
        V: SparseVector<T> + ?Sized;

    /**
     * Restores the structure of the whole matrix after the elements of a column were written
     * through `A`. Only needed by structures that tie elements to each other.
     */
    #[inline]
    fn settle<T: Clone, A: Addressing>(
        _storage: &mut [T],
        _rows: Row,
        _columns: Column,
        _column: Column,
    ) {
    }

    /**
     * Returns the first position in the matrix that does not fit this structure, if any.
     */
    fn violation<T: Scalar, O: StorageOrder>(matrix: &Matrix<T, O>) -> Option<(Row, Column)> {
        for row in 0..matrix.rows() {
            for column in 0..matrix.columns() {
                if !Self::allows(row, column) && !matrix.get_reference(row, column).is_default() {
                    return Some((row, column));
                }
            }
        }
        None
    }
}

/**
 * No constraint on the elements, the structure of a plain [Matrix].
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Unconstrained;

/**
 * Lower triangular: every element above the diagonal is zero.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lower;

/**
 * Upper triangular: every element below the diagonal is zero.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Upper;

/**
 * Diagonal: every element off the diagonal is zero.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Diagonal;

/**
 * Symmetric: the element at `(i, j)` always equals the element at `(j, i)`.
 *
 * Column assignments cannot break this structure because every written element is mirrored
 * to its transposed position.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symmetric;

impl sealed::Sealed for Unconstrained {}
impl sealed::Sealed for Lower {}
impl sealed::Sealed for Upper {}
impl sealed::Sealed for Diagonal {}
impl sealed::Sealed for Symmetric {}

impl Structure for Unconstrained {
    const CATEGORY: StructuralCategory = StructuralCategory::Unconstrained;
    type Addressing<O: StorageOrder> = O::General;

    #[inline]
    fn allows(_row: Row, _column: Column) -> bool {
        true
    }

    #[inline]
    fn homogeneous_range(_column: Column, size: usize) -> Range<usize> {
        0..size
    }

    #[inline]
    fn preserves_dense<T: Scalar, V: DenseVector<T> + ?Sized>(_column: Column, _rhs: &V) -> bool {
        true
    }

    #[inline]
    fn preserves_sparse<T: Scalar, V: SparseVector<T> + ?Sized>(_column: Column, _rhs: &V) -> bool {
        true
    }
}

impl Structure for Lower {
    const CATEGORY: StructuralCategory = StructuralCategory::LowerTriangular;
    type Addressing<O: StorageOrder> = O::General;

    #[inline]
    fn allows(row: Row, column: Column) -> bool {
        row >= column
    }

    #[inline]
    fn homogeneous_range(column: Column, size: usize) -> Range<usize> {
        column.min(size)..size
    }

    fn preserves_dense<T: Scalar, V: DenseVector<T> + ?Sized>(column: Column, rhs: &V) -> bool {
        invariants::lower_preserved_dense(column, rhs)
    }

    fn preserves_sparse<T: Scalar, V: SparseVector<T> + ?Sized>(column: Column, rhs: &V) -> bool {
        invariants::lower_preserved_sparse(column, rhs)
    }
}

impl Structure for Upper {
    const CATEGORY: StructuralCategory = StructuralCategory::UpperTriangular;
    type Addressing<O: StorageOrder> = O::General;

    #[inline]
    fn allows(row: Row, column: Column) -> bool {
        row <= column
    }

    #[inline]
    fn homogeneous_range(column: Column, size: usize) -> Range<usize> {
        0..(column + 1).min(size)
    }

    fn preserves_dense<T: Scalar, V: DenseVector<T> + ?Sized>(column: Column, rhs: &V) -> bool {
        invariants::upper_preserved_dense(column, rhs)
    }

    fn preserves_sparse<T: Scalar, V: SparseVector<T> + ?Sized>(column: Column, rhs: &V) -> bool {
        invariants::upper_preserved_sparse(column, rhs)
    }
}

impl Structure for Diagonal {
    const CATEGORY: StructuralCategory = StructuralCategory::Diagonal;
    type Addressing<O: StorageOrder> = O::General;

    #[inline]
    fn allows(row: Row, column: Column) -> bool {
        row == column
    }

    #[inline]
    fn homogeneous_range(column: Column, size: usize) -> Range<usize> {
        column.min(size)..(column + 1).min(size)
    }

    fn preserves_dense<T: Scalar, V: DenseVector<T> + ?Sized>(column: Column, rhs: &V) -> bool {
        invariants::diagonal_preserved_dense(column, rhs)
    }

    fn preserves_sparse<T: Scalar, V: SparseVector<T> + ?Sized>(column: Column, rhs: &V) -> bool {
        invariants::diagonal_preserved_sparse(column, rhs)
    }
}

impl Structure for Symmetric {
    const CATEGORY: StructuralCategory = StructuralCategory::Symmetric;
    type Addressing<O: StorageOrder> = O::Symmetric;

    #[inline]
    fn allows(_row: Row, _column: Column) -> bool {
        true
    }

    #[inline]
    fn homogeneous_range(_column: Column, size: usize) -> Range<usize> {
        0..size
    }

    #[inline]
    fn preserves_dense<T: Scalar, V: DenseVector<T> + ?Sized>(_column: Column, _rhs: &V) -> bool {
        true
    }

    #[inline]
    fn preserves_sparse<T: Scalar, V: SparseVector<T> + ?Sized>(_column: Column, _rhs: &V) -> bool {
        true
    }

    fn settle<T: Clone, A: Addressing>(
        storage: &mut [T],
        rows: Row,
        columns: Column,
        column: Column,
    ) {
        for index in 0..rows {
            let written = A::offset(column, index, rows, columns);
            let mirrored = A::transposed_offset(column, index, rows, columns);
            if written != mirrored {
                storage[mirrored] = storage[written].clone();
            }
        }
    }

    fn violation<T: Scalar, O: StorageOrder>(matrix: &Matrix<T, O>) -> Option<(Row, Column)> {
        for row in 0..matrix.rows() {
            for column in 0..row {
                if matrix.get_reference(row, column) != matrix.get_reference(column, row) {
                    return Some((row, column));
                }
            }
        }
        None
    }
}
