/*!
 * The element transfer behind every column assignment.
 *
 * Each operation (assign, add, subtract, multiply) has two dense code paths behind one entry
 * point, [dense]:
 *
 * - blocks: used when the element type is [vectorizable](Scalar::VECTORIZABLE), the column is
 *   contiguous and the source is a contiguous run of the same element type. The transfer
 *   proceeds in blocks of [LANES](Scalar::LANES) elements, four blocks per iteration, then the
 *   remaining whole blocks and a final partial block. Each block is plain slice arithmetic
 *   that the compiler is left to turn into SIMD instructions. Large plain assignments stream
 *   instead, see [Tuning](crate::tuning::Tuning), which is the only path written with
 *   explicit `std::arch` intrinsics.
 * - element by element: used otherwise, unrolled by two.
 *
 * The choice is made from associated constants so the path that does not apply is never
 * instantiated. Sparse sources go through [sparse], which only visits the stored entries.
 *
 * Nothing here validates anything. Sizes, structure and aliasing are checked by the column
 * view before it calls into the engine.
 */

use std::ops::Range;

use crate::columns::addressing::Addressing;
use crate::matrices::{Column, Row};
use crate::numeric::Scalar;
use crate::tuning::Tuning;
use crate::vectors::DenseVector;
use crate::vectors::sparse::SparseVector;

/**
 * Where a column lives in a matrix buffer.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Lane {
    pub(crate) start: usize,
    pub(crate) stride: usize,
    pub(crate) length: usize,
}

impl Lane {
    pub(crate) fn of<A: Addressing>(column: Column, rows: Row, columns: Column) -> Lane {
        Lane {
            start: A::offset(column, 0, rows, columns),
            stride: A::stride(rows, columns),
            length: rows,
        }
    }

    #[inline]
    pub(crate) fn offset(&self, index: usize) -> usize {
        self.start + index * self.stride
    }
}

/**
 * An element-wise operation of the engine.
 */
pub(crate) trait Operation {
    const NAME: &'static str;

    /**
     * Whether large transfers of this operation may bypass the cache. Only plain assignment
     * writes without reading the destination.
     */
    const STREAMABLE: bool = false;

    fn apply<T: Scalar>(destination: &mut T, value: T);

    /**
     * Applies the operation to one block of equal length slices.
     */
    #[inline]
    fn block<T: Scalar>(destination: &mut [T], source: &[T]) {
        for (d, s) in destination.iter_mut().zip(source) {
            Self::apply(d, s.clone());
        }
    }

    /**
     * Applies the operation for every stored entry of a sparse source.
     */
    fn scatter<T, V>(storage: &mut [T], lane: Lane, rhs: &V)
    where
        T: Scalar,
        V: SparseVector<T> + ?Sized,
    {
        for (index, value) in rhs.entries() {
            Self::apply(&mut storage[lane.offset(*index)], value.clone());
        }
    }
}

pub(crate) struct Assign;
pub(crate) struct AddAssign;
pub(crate) struct SubAssign;
pub(crate) struct MulAssign;

impl Operation for Assign {
    const NAME: &'static str = "assign";
    const STREAMABLE: bool = true;

    #[inline]
    fn apply<T: Scalar>(destination: &mut T, value: T) {
        *destination = value;
    }

    #[inline]
    fn block<T: Scalar>(destination: &mut [T], source: &[T]) {
        destination.clone_from_slice(source);
    }

    /// Entries that are not stored are zero, so the column is reset before the scatter.
    fn scatter<T, V>(storage: &mut [T], lane: Lane, rhs: &V)
    where
        T: Scalar,
        V: SparseVector<T> + ?Sized,
    {
        reset(storage, lane);
        for (index, value) in rhs.entries() {
            storage[lane.offset(*index)] = value.clone();
        }
    }
}

impl Operation for AddAssign {
    const NAME: &'static str = "add";

    #[inline]
    fn apply<T: Scalar>(destination: &mut T, value: T) {
        let current = std::mem::replace(destination, T::zero());
        *destination = current + value;
    }
}

impl Operation for SubAssign {
    const NAME: &'static str = "subtract";

    #[inline]
    fn apply<T: Scalar>(destination: &mut T, value: T) {
        let current = std::mem::replace(destination, T::zero());
        *destination = current - value;
    }
}

impl Operation for MulAssign {
    const NAME: &'static str = "multiply";

    #[inline]
    fn apply<T: Scalar>(destination: &mut T, value: T) {
        let current = std::mem::replace(destination, T::zero());
        *destination = current * value;
    }

    /// Entries that are not stored are zero and zero the destination, so the column is
    /// snapshotted and reset and only the stored products are written back.
    fn scatter<T, V>(storage: &mut [T], lane: Lane, rhs: &V)
    where
        T: Scalar,
        V: SparseVector<T> + ?Sized,
    {
        let snapshot: Vec<T> = rhs
            .entries()
            .iter()
            .map(|(index, _)| storage[lane.offset(*index)].clone())
            .collect();
        reset(storage, lane);
        for ((index, value), current) in rhs.entries().iter().zip(snapshot) {
            storage[lane.offset(*index)] = current * value.clone();
        }
    }
}

/**
 * Applies the operation between every element of the column and the dense source, which
 * must have `lane.length` elements and must not alias the buffer.
 */
pub(crate) fn dense<T, O, A, V>(storage: &mut [T], lane: Lane, rhs: &V, tuning: &Tuning)
where
    T: Scalar,
    O: Operation,
    A: Addressing,
    V: DenseVector<T> + ?Sized,
{
    debug_assert_eq!(lane.length, rhs.size(), "Column sizes do not match");
    if T::VECTORIZABLE && A::CONTIGUOUS {
        if let Some(source) = rhs.as_contiguous() {
            let destination = &mut storage[lane.start..lane.start + lane.length];
            if O::STREAMABLE && tuning.should_stream::<T>(lane.length) {
                tracing::trace!(
                    operation = O::NAME,
                    length = lane.length,
                    "streaming column assignment"
                );
                T::stream(destination, source);
            } else {
                blocks::<T, O>(destination, source);
            }
            return;
        }
    }
    elementwise::<T, O, V>(storage, lane, rhs);
}

fn blocks<T: Scalar, O: Operation>(destination: &mut [T], source: &[T]) {
    let width = T::LANES;
    let unrolled = width * 4;
    let split = destination.len() - destination.len() % unrolled;
    let (body, rest) = destination.split_at_mut(split);
    let (source_body, source_rest) = source.split_at(split);
    for (d, s) in body.chunks_exact_mut(unrolled).zip(source_body.chunks_exact(unrolled)) {
        for (block, values) in d.chunks_exact_mut(width).zip(s.chunks_exact(width)) {
            O::block(block, values);
        }
    }
    // whole blocks then the final partial one
    for (block, values) in rest.chunks_mut(width).zip(source_rest.chunks(width)) {
        O::block(block, values);
    }
}

fn elementwise<T, O, V>(storage: &mut [T], lane: Lane, rhs: &V)
where
    T: Scalar,
    O: Operation,
    V: DenseVector<T> + ?Sized,
{
    let length = lane.length;
    let ipos = length & !1;
    let mut i = 0;
    while i < ipos {
        O::apply(&mut storage[lane.offset(i)], rhs.element(i));
        O::apply(&mut storage[lane.offset(i + 1)], rhs.element(i + 1));
        i += 2;
    }
    if ipos < length {
        O::apply(&mut storage[lane.offset(ipos)], rhs.element(ipos));
    }
}

/**
 * Applies the operation for the stored entries of the sparse source, which must have
 * `lane.length` elements and must not alias the buffer.
 */
pub(crate) fn sparse<T, O, V>(storage: &mut [T], lane: Lane, rhs: &V)
where
    T: Scalar,
    O: Operation,
    V: SparseVector<T> + ?Sized,
{
    debug_assert_eq!(lane.length, rhs.size(), "Column sizes do not match");
    O::scatter(storage, lane, rhs);
}

/**
 * Sets every element of the column to zero.
 */
pub(crate) fn reset<T: Scalar>(storage: &mut [T], lane: Lane) {
    if lane.stride == 1 {
        storage[lane.start..lane.start + lane.length].fill(T::zero());
    } else {
        for i in 0..lane.length {
            storage[lane.offset(i)] = T::zero();
        }
    }
}

/**
 * Sets the elements of the column in the index range to the value.
 */
pub(crate) fn fill<T: Scalar>(storage: &mut [T], lane: Lane, range: Range<usize>, value: &T) {
    for i in range {
        storage[lane.offset(i)] = value.clone();
    }
}

/**
 * Replaces each element of the column in the index range with the result of the function.
 */
pub(crate) fn transform<T, F>(storage: &mut [T], lane: Lane, range: Range<usize>, function: F)
where
    T: Scalar,
    F: Fn(T) -> T,
{
    for i in range {
        let element = &mut storage[lane.offset(i)];
        let current = std::mem::replace(element, T::zero());
        *element = function(current);
    }
}
