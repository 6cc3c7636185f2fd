/*!
 * Column views
 *
 * A [ColumnView] presents one column of a matrix as a vector without copying it. Reads go
 * straight to the matrix buffer and writes go straight back to it, following the layout of the
 * matrix: a column of a column major matrix, or of a symmetric row major matrix, is contiguous
 * in the buffer while a column of a general row major matrix is strided across all the rows.
 *
 * Every assignment through a view runs the same stages before writing anything:
 *
 * 1. the source must have as many elements as the column, else
 *    [SizeMismatch](errors::ColumnViewError::SizeMismatch)
 * 2. the source must keep the structure of a restricted matrix, else
 *    [InvariantViolation](errors::ColumnViewError::InvariantViolation)
 * 3. a source that may share memory with the matrix is copied first
 * 4. the elements are transferred by the assignment engine, in blocks where possible
 *
 * so a failed assignment leaves the matrix untouched.
 *
 * ```
 * use column_views::matrices::{Matrix, ColumnMajor};
 * use column_views::columns;
 *
 * let mut matrix: Matrix<f32, ColumnMajor> = Matrix::zeros((4, 4));
 * let mut column = matrix.column_view_mut(2).unwrap();
 * column.assign(&[ 1.0, 2.0, 3.0, 4.0 ]).unwrap();
 * column.add_assign(&vec![ 1.0; 4 ]).unwrap();
 * column *= 0.5;
 * assert_eq!(column.to_vec(), vec![ 1.0, 1.5, 2.0, 2.5 ]);
 * columns::reset(&mut column);
 * assert!(columns::is_default(&column));
 * ```
 *
 * # Debug only checks
 *
 * Some misuse is only caught by debug assertions so release builds pay nothing for it:
 * indexing a view past its size and dividing a view by zero. In release builds indexing past
 * the size still cannot read outside the matrix buffer but may return an element of another
 * column. [get_unchecked](ColumnView::get_unchecked) skips even that and is undefined behavior
 * on misuse.
 */

use std::marker::PhantomData;
use std::ops::{DivAssign, Index, IndexMut, MulAssign, Range};

pub mod addressing;
pub mod errors;
pub mod invariants;
pub mod iterators;
mod alias;
mod assign;

use crate::columns::addressing::Addressing;
use crate::columns::assign::{Lane, Operation};
use crate::columns::errors::ColumnViewError;
use crate::columns::iterators::{ColumnIterator, ColumnIteratorMut};
use crate::matrices::structures::{StructuralCategory, Structure};
use crate::matrices::views::{Derestrict, MatrixMut, MatrixRef};
use crate::matrices::{Column, DataLayout};
use crate::numeric::Scalar;
use crate::simd;
use crate::tuning::Tuning;
use crate::vectors::DenseVector;
use crate::vectors::address_range_of;
use crate::vectors::sparse::SparseVector;

pub use crate::columns::alias::overlaps;

/**
 * A view of one column of a matrix.
 *
 * The source `S` can be anything implementing [MatrixRef], such as `&Matrix<T>`,
 * `&mut Matrix<T>`, a [structured matrix](crate::matrices::structured) or a `Box` of one of
 * these. Which operations are available depends on the source:
 *
 * - any source can be read
 * - a source that can be [derestricted](Derestrict) can be assigned to, with assignments
 *   validated against the source's [Structure]
 * - a source without any restrictions ([MatrixMut]) can also be written through `IndexMut`
 *   and [iter_mut](ColumnView::iter_mut)
 *
 * The column index is checked once when the view is created. The view borrows or owns its
 * source, so the matrix cannot be resized or dropped while the view exists.
 */
#[derive(Debug)]
pub struct ColumnView<T, S> {
    source: S,
    column: Column,
    _type: PhantomData<T>,
}

impl <T, S: Clone> Clone for ColumnView<T, S> {
    fn clone(&self) -> Self {
        ColumnView {
            source: self.source.clone(),
            column: self.column,
            _type: PhantomData,
        }
    }
}

/**
 * Creates a view of a column of a matrix, see [ColumnView::from].
 */
pub fn column<T, S>(source: S, index: Column) -> Result<ColumnView<T, S>, ColumnViewError>
where
    S: MatrixRef<T>,
{
    ColumnView::from(source, index)
}

/**
 * Views over any source: construction, queries and reads.
 */
impl <T, S> ColumnView<T, S>
where
    S: MatrixRef<T>,
{
    /**
     * Whether the matrix forbids some writes because of its structure.
     */
    pub const IS_RESTRICTED: bool =
        !matches!(S::Structure::CATEGORY, StructuralCategory::Unconstrained);

    /**
     * Creates a view of the column at `index` of the source.
     *
     * # Errors
     *
     * [InvalidIndex](ColumnViewError::InvalidIndex) if the index is not less than the number of
     * columns in the source.
     */
    pub fn from(source: S, index: Column) -> Result<ColumnView<T, S>, ColumnViewError> {
        let columns = source.view_columns();
        if index >= columns {
            tracing::debug!(index, columns, "rejected column view");
            return Err(ColumnViewError::InvalidIndex { index, columns });
        }
        Ok(ColumnView {
            source,
            column: index,
            _type: PhantomData,
        })
    }

    /**
     * The number of elements in the column, which is the number of rows of the matrix.
     */
    pub fn size(&self) -> usize {
        self.source.view_rows()
    }

    /**
     * The index of the viewed column.
     */
    pub fn index(&self) -> Column {
        self.column
    }

    /**
     * Returns a reference to the source of this view.
     */
    pub fn source(&self) -> &S {
        &self.source
    }

    /**
     * Consumes this view, returning its source.
     */
    pub fn into_source(self) -> S {
        self.source
    }

    /**
     * The order the elements of the matrix are stored in.
     */
    pub fn data_layout(&self) -> DataLayout {
        self.source.data_layout()
    }

    /**
     * The structural category of the matrix.
     */
    pub fn category(&self) -> StructuralCategory {
        S::Structure::CATEGORY
    }

    #[inline]
    fn lane(&self) -> Lane {
        let (rows, columns) = self.source.view_size();
        Lane::of::<S::Addressing>(self.column, rows, columns)
    }

    /**
     * Gets a reference to the element at the index without any bounds checking.
     *
     * # Safety
     *
     * Calling this method with an index not less than [size](ColumnView::size) is
     * *[undefined behavior]*.
     *
     * [undefined behavior]: https://doc.rust-lang.org/reference/behavior-considered-undefined.html
     */
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size(), "Invalid column access index");
        let offset = self.lane().offset(index);
        // Safety: for an index in range the addressing offset is inside the buffer, see the
        // contract of MatrixRef
        unsafe { self.source.storage().get_unchecked(offset) }
    }

    /**
     * Returns an iterator over references to the elements of the column.
     */
    pub fn iter(&self) -> ColumnIterator<'_, T> {
        let lane = self.lane();
        ColumnIterator::new(self.source.storage(), lane.start, lane.stride, lane.length)
    }

    /**
     * Returns the elements of the column as a slice if they are contiguous in the matrix
     * buffer, which is the case for column major and symmetric row major matrices. A column of
     * a general row major matrix is never contiguous.
     */
    pub fn as_slice(&self) -> Option<&[T]> {
        let (rows, columns) = self.source.view_size();
        S::Addressing::lane(self.column, rows, columns).map(|range| &self.source.storage()[range])
    }

    /**
     * The number of elements the column can hold. Dense storage has no padding, so this is
     * always the size.
     */
    pub fn capacity(&self) -> usize {
        self.size()
    }

    /**
     * Whether the first element of the column is aligned for block loads and stores. Always
     * false for a strided column.
     */
    pub fn is_aligned(&self) -> bool {
        S::Addressing::CONTIGUOUS
            && simd::is_aligned(&self.source.storage()[self.lane().start] as *const T)
    }

    /**
     * Checks if the matrix buffer overlaps the address range.
     */
    pub fn is_aliased(&self, range: &Range<usize>) -> bool {
        overlaps(&address_range_of(self.source.storage()), range)
    }

    /**
     * Checks if this view and the other one are of the same column of the same matrix, in
     * which case writing through one changes what the other reads.
     */
    pub fn can_alias<S2: MatrixRef<T>>(&self, other: &ColumnView<T, S2>) -> bool {
        is_same(self, other)
    }

    /**
     * Whether an assignment to this view is large enough to be worth handing to a parallel
     * backend, according to the current [Tuning].
     */
    pub fn can_smp_assign(&self) -> bool {
        self.size() > Tuning::current().smp_assign_threshold
    }
}

/**
 * Reading copies of elements.
 */
impl <T, S> ColumnView<T, S>
where
    T: Scalar,
    S: MatrixRef<T>,
{
    /**
     * Whether assignments to this view can use block transfers: the element type supports
     * them and the column is contiguous.
     */
    pub const VECTORIZABLE: bool = T::VECTORIZABLE && <S::Addressing as Addressing>::CONTIGUOUS;

    /**
     * Whether assignments to this view may be split across threads. Column views hold no
     * shared state besides the destination column, so this is always true.
     */
    pub const SMP_ASSIGNABLE: bool = true;

    /**
     * Gets a copy of the element at the index.
     */
    pub fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    /**
     * Copies the column into a new Vec.
     */
    pub fn to_vec(&self) -> Vec<T> {
        match self.as_slice() {
            Some(lane) => lane.to_vec(),
            None => self.iter().cloned().collect(),
        }
    }

    /**
     * The number of elements that are not zero.
     */
    pub fn non_zeros(&self) -> usize {
        match self.as_slice() {
            Some(lane) => lane.iter().filter(|x| !x.is_default()).count(),
            None => self.iter().filter(|x| !x.is_default()).count(),
        }
    }
}

impl <T, S> Index<usize> for ColumnView<T, S>
where
    S: MatrixRef<T>,
{
    type Output = T;

    /**
     * Returns the element at the index. Indexing past the size is only checked in debug
     * builds, see the [module docs](self).
     */
    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.size(), "Invalid column access index");
        &self.source.storage()[self.lane().offset(index)]
    }
}

/**
 * Writes to views of matrices without restrictions.
 */
impl <T, S> ColumnView<T, S>
where
    S: MatrixMut<T>,
{
    /**
     * Returns an iterator over mutable references to the elements of the column.
     */
    pub fn iter_mut(&mut self) -> ColumnIteratorMut<'_, T> {
        let lane = self.lane();
        ColumnIteratorMut::new(self.source.storage_mut(), lane.start, lane.stride, lane.length)
    }

    /**
     * Returns the elements of the column as a mutable slice if they are contiguous in the
     * matrix buffer.
     */
    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        let (rows, columns) = self.source.view_size();
        let range = S::Addressing::lane(self.column, rows, columns)?;
        Some(&mut self.source.storage_mut()[range])
    }
}

impl <T, S> IndexMut<usize> for ColumnView<T, S>
where
    S: MatrixMut<T>,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size(), "Invalid column access index");
        let offset = self.lane().offset(index);
        &mut self.source.storage_mut()[offset]
    }
}

/**
 * Validated writes to views of any matrix that can be derestricted.
 */
impl <T, S> ColumnView<T, S>
where
    T: Scalar,
    S: Derestrict<T>,
{
    fn check_size(&self, actual: usize) -> Result<(), ColumnViewError> {
        let expected = self.size();
        if expected != actual {
            tracing::debug!(expected, actual, column = self.column, "rejected column assignment");
            return Err(ColumnViewError::SizeMismatch { expected, actual });
        }
        Ok(())
    }

    fn violation(&self) -> ColumnViewError {
        let category = S::Structure::CATEGORY;
        tracing::debug!(%category, column = self.column, "rejected assignment to restricted matrix");
        ColumnViewError::InvariantViolation {
            category,
            column: self.column,
        }
    }

    fn check_dense<V>(&self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: DenseVector<T> + ?Sized,
    {
        self.check_size(rhs.size())?;
        if !S::Structure::preserves_dense::<T, V>(self.column, rhs) {
            return Err(self.violation());
        }
        Ok(())
    }

    fn check_sparse<V>(&self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: SparseVector<T> + ?Sized,
    {
        self.check_size(rhs.size())?;
        if !S::Structure::preserves_sparse::<T, V>(self.column, rhs) {
            return Err(self.violation());
        }
        Ok(())
    }

    /// A product lands outside the structure only where the current element is zero, which
    /// still gives a nonzero result for infinite or NaN factors.
    fn check_dense_product<V>(&self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: DenseVector<T> + ?Sized,
    {
        self.check_size(rhs.size())?;
        let preserved = (0..rhs.size())
            .filter(|i| !S::Structure::allows(*i, self.column))
            .all(|i| (self.get(i) * rhs.element(i)).is_default());
        if !preserved {
            return Err(self.violation());
        }
        Ok(())
    }

    fn check_sparse_product<V>(&self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: SparseVector<T> + ?Sized,
    {
        self.check_size(rhs.size())?;
        let preserved = rhs.entries()
            .iter()
            .filter(|(i, _)| !S::Structure::allows(*i, self.column))
            .all(|(i, value)| (self.get(*i) * value.clone()).is_default());
        if !preserved {
            return Err(self.violation());
        }
        Ok(())
    }

    /// Restores structures that tie elements together after the column was written.
    fn settle(&mut self) {
        let (rows, columns) = self.source.view_size();
        let column = self.column;
        let storage = self.source.derestrict().storage_mut();
        S::Structure::settle::<T, S::Addressing>(storage, rows, columns, column);
    }

    fn transfer_dense<O, V>(&mut self, rhs: &V)
    where
        O: Operation,
        V: DenseVector<T> + ?Sized,
    {
        let destination = address_range_of(self.source.storage());
        let rhs = alias::resolve(&destination, rhs);
        let lane = self.lane();
        let tuning = Tuning::current();
        let storage = self.source.derestrict().storage_mut();
        assign::dense::<T, O, S::Addressing, _>(storage, lane, &rhs, &tuning);
        self.settle();
    }

    fn transfer_sparse<O, V>(&mut self, rhs: &V)
    where
        O: Operation,
        V: SparseVector<T> + ?Sized,
    {
        let destination = address_range_of(self.source.storage());
        let rhs = alias::resolve_sparse(&destination, rhs);
        let lane = self.lane();
        let storage = self.source.derestrict().storage_mut();
        assign::sparse::<T, O, _>(storage, lane, &rhs);
        self.settle();
    }

    /**
     * Sets every element of the column to the value of the dense vector.
     *
     * # Errors
     *
     * - [SizeMismatch](ColumnViewError::SizeMismatch) if the vector is not the same size as
     *   the column
     * - [InvariantViolation](ColumnViewError::InvariantViolation) if the vector has a nonzero
     *   value where the structure of the matrix requires a zero
     */
    pub fn assign<V>(&mut self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: DenseVector<T> + ?Sized,
    {
        self.check_dense(rhs)?;
        self.transfer_dense::<assign::Assign, V>(rhs);
        Ok(())
    }

    /**
     * Adds the dense vector to the column element-wise. Errors as for
     * [assign](ColumnView::assign).
     */
    pub fn add_assign<V>(&mut self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: DenseVector<T> + ?Sized,
    {
        self.check_dense(rhs)?;
        self.transfer_dense::<assign::AddAssign, V>(rhs);
        Ok(())
    }

    /**
     * Subtracts the dense vector from the column element-wise. Errors as for
     * [assign](ColumnView::assign).
     */
    pub fn sub_assign<V>(&mut self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: DenseVector<T> + ?Sized,
    {
        self.check_dense(rhs)?;
        self.transfer_dense::<assign::SubAssign, V>(rhs);
        Ok(())
    }

    /**
     * Multiplies the column by the dense vector element-wise. A vector that may alias the
     * matrix is multiplied into a temporary which is then assigned.
     *
     * # Errors
     *
     * - [SizeMismatch](ColumnViewError::SizeMismatch) if the vector is not the same size as
     *   the column
     * - [InvariantViolation](ColumnViewError::InvariantViolation) if a product would be
     *   nonzero where the structure of the matrix requires a zero, such as a zero element
     *   multiplied by infinity or NaN
     */
    pub fn mul_assign<V>(&mut self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: DenseVector<T> + ?Sized,
    {
        self.check_dense_product(rhs)?;
        if self.is_aliased(&rhs.address_range()) {
            tracing::trace!(column = self.column, "materializing aliased product");
            let product: Vec<T> = (0..rhs.size())
                .map(|i| self[i].clone() * rhs.element(i))
                .collect();
            self.transfer_dense::<assign::Assign, _>(&product);
        } else {
            self.transfer_dense::<assign::MulAssign, V>(rhs);
        }
        Ok(())
    }

    /**
     * Sets the column to the sparse vector, every index without a stored entry becomes zero.
     * Errors as for [assign](ColumnView::assign).
     *
     * ```
     * use column_views::matrices::Matrix;
     * use column_views::vectors::sparse::CompressedVector;
     * let mut matrix: Matrix<i32> = Matrix::empty(1, (5, 2));
     * let mut column = matrix.column_view_mut(1).unwrap();
     * column.assign_sparse(&CompressedVector::from(5, vec![ (2, 7) ])).unwrap();
     * assert_eq!(column.to_vec(), vec![ 0, 0, 7, 0, 0 ]);
     * ```
     */
    pub fn assign_sparse<V>(&mut self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: SparseVector<T> + ?Sized,
    {
        self.check_sparse(rhs)?;
        self.transfer_sparse::<assign::Assign, V>(rhs);
        Ok(())
    }

    /**
     * Adds the stored entries of the sparse vector to the column. Errors as for
     * [assign](ColumnView::assign).
     */
    pub fn add_assign_sparse<V>(&mut self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: SparseVector<T> + ?Sized,
    {
        self.check_sparse(rhs)?;
        self.transfer_sparse::<assign::AddAssign, V>(rhs);
        Ok(())
    }

    /**
     * Subtracts the stored entries of the sparse vector from the column. Errors as for
     * [assign](ColumnView::assign).
     */
    pub fn sub_assign_sparse<V>(&mut self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: SparseVector<T> + ?Sized,
    {
        self.check_sparse(rhs)?;
        self.transfer_sparse::<assign::SubAssign, V>(rhs);
        Ok(())
    }

    /**
     * Multiplies the column by the sparse vector element-wise, so every index without a
     * stored entry becomes zero. Errors as for [mul_assign](ColumnView::mul_assign).
     */
    pub fn mul_assign_sparse<V>(&mut self, rhs: &V) -> Result<(), ColumnViewError>
    where
        V: SparseVector<T> + ?Sized,
    {
        self.check_sparse_product(rhs)?;
        self.transfer_sparse::<assign::MulAssign, V>(rhs);
        Ok(())
    }

    /// Copies another column of the same matrix, which always shares the buffer of this one.
    fn sibling(&self, source_column: Column) -> Result<Vec<T>, ColumnViewError> {
        let sibling = ColumnView::<T, &S>::from(&self.source, source_column)?;
        tracing::trace!(source_column, column = self.column, "materializing sibling column");
        Ok(alias::materialize(&sibling))
    }

    /**
     * Sets this column to the values of another column of the same matrix. Assigning a
     * column to itself does nothing.
     *
     * # Errors
     *
     * - [InvalidIndex](ColumnViewError::InvalidIndex) if there is no such column
     * - [InvariantViolation](ColumnViewError::InvariantViolation) as for
     *   [assign](ColumnView::assign)
     */
    pub fn assign_column(&mut self, source_column: Column) -> Result<(), ColumnViewError> {
        if source_column == self.column {
            return Ok(());
        }
        let source = self.sibling(source_column)?;
        self.assign(&source)
    }

    /**
     * Adds another column of the same matrix to this column, see
     * [assign_column](ColumnView::assign_column).
     */
    pub fn add_assign_column(&mut self, source_column: Column) -> Result<(), ColumnViewError> {
        let source = self.sibling(source_column)?;
        self.add_assign(&source)
    }

    /**
     * Subtracts another column of the same matrix from this column, see
     * [assign_column](ColumnView::assign_column).
     */
    pub fn sub_assign_column(&mut self, source_column: Column) -> Result<(), ColumnViewError> {
        let source = self.sibling(source_column)?;
        self.sub_assign(&source)
    }

    /**
     * Multiplies this column element-wise by another column of the same matrix, see
     * [assign_column](ColumnView::assign_column).
     */
    pub fn mul_assign_column(&mut self, source_column: Column) -> Result<(), ColumnViewError> {
        let source = self.sibling(source_column)?;
        self.mul_assign(&source)
    }

    /**
     * Sets every element of the column that the structure allows to be nonzero to the value:
     * the whole column of an unconstrained or symmetric matrix, the diagonal element and
     * below in a lower triangular matrix, the diagonal element and above in an upper
     * triangular matrix and only the diagonal element in a diagonal matrix.
     */
    pub fn fill(&mut self, value: T) {
        let range = S::Structure::homogeneous_range(self.column, self.size());
        let lane = self.lane();
        assign::fill(self.source.derestrict().storage_mut(), lane, range, &value);
        self.settle();
    }

    /**
     * Sets the element at the index to the value.
     *
     * # Errors
     *
     * [InvariantViolation](ColumnViewError::InvariantViolation) if the value is nonzero and
     * the structure requires a zero at the index.
     *
     * # Panics
     *
     * If the index is not less than the size.
     */
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ColumnViewError> {
        assert!(index < self.size(), "Invalid column access index");
        let (row, column) = <S::Addressing as Addressing>::coordinates(self.column, index);
        if !S::Structure::allows(row, column) && !value.is_default() {
            return Err(self.violation());
        }
        let offset = self.lane().offset(index);
        self.source.derestrict().storage_mut()[offset] = value;
        self.settle();
        Ok(())
    }

    /**
     * Sets every element of the column to zero. Zero fits every structure.
     */
    pub fn reset(&mut self) {
        let lane = self.lane();
        assign::reset(self.source.derestrict().storage_mut(), lane);
        self.settle();
    }

    /**
     * Sets every element of the column to zero, the same as [reset](ColumnView::reset).
     */
    pub fn clear(&mut self) {
        self.reset();
    }

    /**
     * Multiplies every element the structure allows to be nonzero by the factor.
     */
    pub fn scale(&mut self, factor: &T) {
        let range = S::Structure::homogeneous_range(self.column, self.size());
        let lane = self.lane();
        assign::transform(self.source.derestrict().storage_mut(), lane, range, |x| {
            x * factor.clone()
        });
        self.settle();
    }
}

/**
 * Scales the column, see [scale](ColumnView::scale).
 */
impl <T, S> MulAssign<T> for ColumnView<T, S>
where
    T: Scalar,
    S: Derestrict<T>,
{
    fn mul_assign(&mut self, rhs: T) {
        self.scale(&rhs);
    }
}

/**
 * Divides every element the structure allows to be nonzero by the divisor. Dividing by zero
 * is only checked in debug builds.
 */
impl <T, S> DivAssign<T> for ColumnView<T, S>
where
    T: Scalar,
    S: Derestrict<T>,
{
    fn div_assign(&mut self, rhs: T) {
        debug_assert!(!rhs.is_default(), "Division by zero detected");
        let range = S::Structure::homogeneous_range(self.column, self.size());
        let lane = self.lane();
        assign::transform(self.source.derestrict().storage_mut(), lane, range, |x| {
            x / rhs.clone()
        });
        self.settle();
    }
}

impl <T, S> DenseVector<T> for ColumnView<T, S>
where
    T: Clone,
    S: MatrixRef<T>,
{
    #[inline]
    fn size(&self) -> usize {
        ColumnView::size(self)
    }

    #[inline]
    fn element(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[T]> {
        self.as_slice()
    }

    /// A column may alias anything in its matrix.
    fn address_range(&self) -> Range<usize> {
        address_range_of(self.source.storage())
    }
}

impl <'a, T, S> IntoIterator for &'a ColumnView<T, S>
where
    S: MatrixRef<T>,
{
    type Item = &'a T;
    type IntoIter = ColumnIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/**
 * Sets every element of the column to zero.
 */
pub fn reset<T, S>(view: &mut ColumnView<T, S>)
where
    T: Scalar,
    S: Derestrict<T>,
{
    view.reset();
}

/**
 * Sets every element of the column to zero, the same as [reset].
 */
pub fn clear<T, S>(view: &mut ColumnView<T, S>)
where
    T: Scalar,
    S: Derestrict<T>,
{
    view.clear();
}

/**
 * Checks if every element of the column is zero, stopping at the first that is not.
 */
pub fn is_default<T, S>(view: &ColumnView<T, S>) -> bool
where
    T: Scalar,
    S: MatrixRef<T>,
{
    match view.as_slice() {
        Some(lane) => lane.iter().all(|x| x.is_default()),
        None => view.iter().all(|x| x.is_default()),
    }
}

/**
 * Checks if both views are of the same column of the same matrix. This compares identity, not
 * values: two columns holding equal values in different matrices are not the same.
 *
 * ```
 * use column_views::matrices::Matrix;
 * use column_views::columns::{column, is_same};
 * let matrix: Matrix<i32> = Matrix::zeros((4, 4));
 * assert!(is_same(&column(&matrix, 2).unwrap(), &column(&matrix, 2).unwrap()));
 * assert!(!is_same(&column(&matrix, 2).unwrap(), &column(&matrix, 3).unwrap()));
 * ```
 */
pub fn is_same<T, S1, S2>(a: &ColumnView<T, S1>, b: &ColumnView<T, S2>) -> bool
where
    S1: MatrixRef<T>,
    S2: MatrixRef<T>,
{
    let a_storage = a.source.storage();
    let b_storage = b.source.storage();
    std::ptr::eq(a_storage, b_storage)
        && a.source.view_size() == b.source.view_size()
        && a.column == b.column
}

/**
 * Returns a view of the same column without the structural restrictions of the matrix.
 * Writes through the returned view are not validated against the structure.
 */
pub fn derestrict<T, S>(view: &mut ColumnView<T, S>) -> ColumnView<T, &mut S::Unrestricted>
where
    S: Derestrict<T>,
{
    ColumnView {
        source: view.source.derestrict(),
        column: view.column,
        _type: PhantomData,
    }
}
