/*!
 * Source vectors for column assignments.
 *
 * A column view can be assigned from anything implementing [DenseVector], such as slices,
 * arrays, Vecs and other column views, or from a [SparseVector](sparse::SparseVector) that
 * only stores its nonzero entries.
 */

use std::marker::PhantomData;
use std::ops::Range;

pub mod sparse;

/**
 * A vector with a value at every index.
 */
pub trait DenseVector<T> {
    /**
     * The number of elements in this vector.
     */
    fn size(&self) -> usize;

    /**
     * Returns a copy of the element at the index. Indexes are 0 based.
     *
     * # Panics
     *
     * Implementations may panic if the index is not less than [size](DenseVector::size).
     */
    fn element(&self, index: usize) -> T;

    /**
     * Returns the elements of this vector as a slice if they are adjacent in memory. Only
     * contiguous sources of the destination's own element type are eligible for block
     * transfers.
     */
    fn as_contiguous(&self) -> Option<&[T]> {
        None
    }

    /**
     * The range of memory addresses this vector reads from. An assignment whose destination
     * matrix overlaps this range copies the vector before writing anything. Vectors that do not
     * read from memory return an empty range.
     */
    fn address_range(&self) -> Range<usize>;
}

/**
 * The memory addresses covered by a slice.
 */
pub fn address_range_of<T>(slice: &[T]) -> Range<usize> {
    let start = slice.as_ptr() as usize;
    start..start + std::mem::size_of_val(slice)
}

impl <T: Clone> DenseVector<T> for [T] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[T]> {
        Some(self)
    }

    fn address_range(&self) -> Range<usize> {
        address_range_of(self)
    }
}

impl <T: Clone> DenseVector<T> for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn element(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }

    fn address_range(&self) -> Range<usize> {
        address_range_of(self.as_slice())
    }
}

impl <T: Clone, const N: usize> DenseVector<T> for [T; N] {
    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn element(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }

    fn address_range(&self) -> Range<usize> {
        address_range_of(self.as_slice())
    }
}

/**
 * A dense vector of `U` elements read as a vector of another type through [From].
 *
 * Conversions happen one element at a time, so assignments from a Converted vector always
 * take the element by element path.
 *
 * ```
 * use column_views::matrices::{Matrix, ColumnMajor};
 * use column_views::vectors::Converted;
 * let mut matrix: Matrix<f64, ColumnMajor> = Matrix::zeros((3, 2));
 * let integers: Vec<i32> = vec![ 1, 2, 3 ];
 * matrix.column_view_mut(0).unwrap().assign(&Converted::from(&integers)).unwrap();
 * assert_eq!(matrix.get(2, 0), 3.0);
 * ```
 */
#[derive(Debug)]
pub struct Converted<'source, U, V: ?Sized> {
    source: &'source V,
    _type: PhantomData<U>,
}

impl <'source, U, V> Converted<'source, U, V>
where
    V: DenseVector<U> + ?Sized,
{
    /**
     * Creates a converting vector over the source.
     */
    pub fn from(source: &'source V) -> Converted<'source, U, V> {
        Converted {
            source,
            _type: PhantomData,
        }
    }
}

impl <'source, T, U, V> DenseVector<T> for Converted<'source, U, V>
where
    T: From<U>,
    V: DenseVector<U> + ?Sized,
{
    #[inline]
    fn size(&self) -> usize {
        self.source.size()
    }

    #[inline]
    fn element(&self, index: usize) -> T {
        T::from(self.source.element(index))
    }

    fn address_range(&self) -> Range<usize> {
        self.source.address_range()
    }
}
