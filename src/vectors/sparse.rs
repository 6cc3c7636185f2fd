/*!
 * Sparse source vectors.
 */

use std::ops::Range;

use crate::vectors::address_range_of;

/**
 * A vector that only stores some of its entries. Every index without a stored entry holds the
 * default (zero) value.
 */
pub trait SparseVector<T> {
    /**
     * The number of elements in this vector, stored or not.
     */
    fn size(&self) -> usize;

    /**
     * The stored entries as `(index, value)` pairs, in strictly increasing index order.
     */
    fn entries(&self) -> &[(usize, T)];

    /**
     * The position in [entries](SparseVector::entries) of the first entry whose index is not
     * less than `index`, or the number of entries if there is none.
     */
    fn lower_bound(&self, index: usize) -> usize {
        self.entries().partition_point(|(i, _)| *i < index)
    }

    /**
     * The range of memory addresses this vector reads from.
     */
    fn address_range(&self) -> Range<usize> {
        address_range_of(self.entries())
    }
}

/**
 * A sparse vector storing its entries sorted by index in a Vec.
 *
 * ```
 * use column_views::vectors::sparse::{CompressedVector, SparseVector};
 * let mut vector = CompressedVector::new(5);
 * vector.set(3, 1.5);
 * vector.set(1, 2.0);
 * assert_eq!(vector.entries(), &[ (1, 2.0), (3, 1.5) ]);
 * assert_eq!(vector.get(2), None);
 * ```
 */
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedVector<T> {
    size: usize,
    entries: Vec<(usize, T)>,
}

impl <T> CompressedVector<T> {
    /**
     * Creates a vector of the given size with no stored entries.
     */
    pub fn new(size: usize) -> CompressedVector<T> {
        CompressedVector {
            size,
            entries: Vec::new(),
        }
    }

    /**
     * Creates a vector of the given size from `(index, value)` entries in any order.
     *
     * # Panics
     *
     * If an index is not less than the size or appears more than once.
     */
    pub fn from(size: usize, mut entries: Vec<(usize, T)>) -> CompressedVector<T> {
        entries.sort_by_key(|(index, _)| *index);
        assert!(entries.iter().all(|(index, _)| *index < size), "Entry index out of range");
        assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0), "Duplicate entry index");
        CompressedVector { size, entries }
    }

    /**
     * Stores a value at the index, replacing any value already stored there.
     *
     * # Panics
     *
     * If the index is not less than the size.
     */
    pub fn set(&mut self, index: usize, value: T) {
        assert!(index < self.size, "Entry index out of range");
        match self.entries.binary_search_by_key(&index, |(i, _)| *i) {
            Ok(position) => self.entries[position].1 = value,
            Err(position) => self.entries.insert(position, (index, value)),
        }
    }

    /**
     * Gets a reference to the value stored at the index, if any.
     */
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .ok()
            .map(|position| &self.entries[position].1)
    }

    /**
     * The number of stored entries.
     */
    pub fn stored(&self) -> usize {
        self.entries.len()
    }
}

impl <T> SparseVector<T> for CompressedVector<T> {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn entries(&self) -> &[(usize, T)] {
        &self.entries
    }
}
