/*!
 * Deciding whether a source may share memory with the destination of an assignment.
 *
 * The check compares the source's address range with the whole buffer of the destination
 * matrix, not just the destination column, matching the granularity at which a matrix can
 * report aliasing. An overlapping source is copied into a temporary before the first write,
 * any other source is read in place.
 */

use std::ops::Range;

use crate::vectors::DenseVector;
use crate::vectors::sparse::{CompressedVector, SparseVector};

/**
 * Checks if two address ranges share at least one byte. An empty range overlaps nothing.
 */
#[inline]
pub fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    !a.is_empty() && !b.is_empty() && a.start < b.end && b.start < a.end
}

/**
 * A dense source ready to be consumed by the assignment engine.
 */
#[derive(Debug)]
pub(crate) enum Resolved<'a, T, V: ?Sized> {
    /// The source cannot alias the destination and is read in place.
    Direct(&'a V),
    /// The source aliased the destination and was copied.
    Materialized(Vec<T>),
}

impl <'a, T, V> Resolved<'a, T, V>
where
    T: Clone,
    V: DenseVector<T> + ?Sized,
{
    /**
     * Whether the source was copied into a temporary.
     */
    #[cfg(test)]
    pub(crate) fn is_materialized(&self) -> bool {
        matches!(self, Resolved::Materialized(_))
    }
}

impl <'a, T, V> DenseVector<T> for Resolved<'a, T, V>
where
    T: Clone,
    V: DenseVector<T> + ?Sized,
{
    #[inline]
    fn size(&self) -> usize {
        match self {
            Resolved::Direct(source) => source.size(),
            Resolved::Materialized(copy) => copy.len(),
        }
    }

    #[inline]
    fn element(&self, index: usize) -> T {
        match self {
            Resolved::Direct(source) => source.element(index),
            Resolved::Materialized(copy) => copy[index].clone(),
        }
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[T]> {
        match self {
            Resolved::Direct(source) => source.as_contiguous(),
            Resolved::Materialized(copy) => Some(copy.as_slice()),
        }
    }

    fn address_range(&self) -> Range<usize> {
        match self {
            Resolved::Direct(source) => source.address_range(),
            Resolved::Materialized(copy) => crate::vectors::address_range_of(copy.as_slice()),
        }
    }
}

/**
 * Copies every element of a dense vector.
 */
pub(crate) fn materialize<T, V>(source: &V) -> Vec<T>
where
    V: DenseVector<T> + ?Sized,
{
    (0..source.size()).map(|i| source.element(i)).collect()
}

/**
 * Prepares a dense source for writing into a matrix whose buffer spans `destination`.
 */
pub(crate) fn resolve<'a, T, V>(destination: &Range<usize>, source: &'a V) -> Resolved<'a, T, V>
where
    V: DenseVector<T> + ?Sized,
{
    if overlaps(destination, &source.address_range()) {
        tracing::trace!(size = source.size(), "materializing aliased dense source");
        Resolved::Materialized(materialize(source))
    } else {
        Resolved::Direct(source)
    }
}

/**
 * A sparse source ready to be consumed by the assignment engine.
 */
#[derive(Debug)]
pub(crate) enum ResolvedSparse<'a, T, V: ?Sized> {
    Direct(&'a V),
    Materialized(CompressedVector<T>),
}

impl <'a, T, V> SparseVector<T> for ResolvedSparse<'a, T, V>
where
    V: SparseVector<T> + ?Sized,
{
    #[inline]
    fn size(&self) -> usize {
        match self {
            ResolvedSparse::Direct(source) => source.size(),
            ResolvedSparse::Materialized(copy) => copy.size(),
        }
    }

    #[inline]
    fn entries(&self) -> &[(usize, T)] {
        match self {
            ResolvedSparse::Direct(source) => source.entries(),
            ResolvedSparse::Materialized(copy) => copy.entries(),
        }
    }
}

/**
 * Prepares a sparse source for writing into a matrix whose buffer spans `destination`.
 */
pub(crate) fn resolve_sparse<'a, T, V>(
    destination: &Range<usize>,
    source: &'a V,
) -> ResolvedSparse<'a, T, V>
where
    T: Clone,
    V: SparseVector<T> + ?Sized,
{
    if overlaps(destination, &source.address_range()) {
        tracing::trace!(size = source.size(), "materializing aliased sparse source");
        ResolvedSparse::Materialized(CompressedVector::from(
            source.size(),
            source.entries().to_vec(),
        ))
    } else {
        ResolvedSparse::Direct(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::address_range_of;

    #[test]
    fn overlapping_ranges() {
        assert!(overlaps(&(0..10), &(9..12)));
        assert!(overlaps(&(4..6), &(0..10)));
        assert!(!overlaps(&(0..10), &(10..12)));
        assert!(!overlaps(&(0..10), &(3..3)));
        assert!(!overlaps(&(5..5), &(0..10)));
    }

    #[test]
    fn empty_sources_are_read_in_place() {
        let buffer = vec![1, 2, 3, 4];
        let empty: &[i32] = &buffer[2..2];
        let resolved = resolve(&address_range_of(&buffer), empty);
        assert!(!resolved.is_materialized());
    }

    #[test]
    fn separate_buffers_are_read_in_place() {
        let destination = vec![0.0; 8];
        let source = vec![1.0, 2.0, 3.0];
        let resolved = resolve(&address_range_of(&destination), &source);
        assert!(!resolved.is_materialized());
        assert_eq!(resolved.as_contiguous(), Some(source.as_slice()));
    }

    #[test]
    fn shared_buffers_are_copied() {
        let buffer = vec![1, 2, 3, 4, 5, 6];
        let resolved = resolve(&address_range_of(&buffer), &buffer[2..5]);
        assert!(resolved.is_materialized());
        assert_eq!(materialize(&resolved), vec![3, 4, 5]);
        // the copy lives in its own allocation
        assert!(!overlaps(&resolved.address_range(), &address_range_of(&buffer)));
    }

    #[test]
    fn sparse_sources() {
        let destination = vec![0; 4];
        let source = CompressedVector::from(4, vec![(2, 9)]);
        match resolve_sparse(&address_range_of(&destination), &source) {
            ResolvedSparse::Direct(_) => (),
            ResolvedSparse::Materialized(_) => panic!("separate buffers should not be copied"),
        }
        let resolved = resolve_sparse(&address_range_of(source.entries()), &source);
        assert!(matches!(resolved, ResolvedSparse::Materialized(_)));
        assert_eq!(resolved.entries(), &[(2, 9)]);
    }
}
