/*!
 * Iterators over the elements of a column view.
 */

use std::cmp::Ordering;
use std::iter::{FusedIterator, StepBy, Take};

/**
 * An iterator over references to the elements of a column.
 *
 * The iterator walks the matrix buffer with a fixed stride, which is 1 for contiguous columns
 * and the number of columns for a column of a row major matrix. Besides the standard iterator
 * traits it supports random access: it can be moved by any number of positions in constant
 * time, the distance between two iterators over the same column can be measured and iterators
 * over the same column are ordered by position.
 *
 * ```
 * use column_views::matrices::Matrix;
 * let matrix: Matrix<_> = Matrix::from(vec![
 *     vec![ 1, 2 ],
 *     vec![ 3, 4 ],
 *     vec![ 5, 6 ]]);
 * let column = matrix.column_view(1).unwrap();
 * let mut iterator = column.iter();
 * let start = iterator.clone();
 * iterator.advance(2);
 * assert_eq!(iterator.distance_from(&start), 2);
 * assert!(start < iterator);
 * assert_eq!(iterator.next(), Some(&6));
 * assert_eq!(start.peek(1), Some(&4));
 * ```
 */
#[derive(Debug)]
pub struct ColumnIterator<'a, T> {
    storage: &'a [T],
    start: usize,
    stride: usize,
    front: usize,
    back: usize,
}

impl <'a, T> ColumnIterator<'a, T> {
    /**
     * Constructs an iterator over `length` elements of the buffer, the first at `start` and
     * each following one `stride` positions after the previous.
     *
     * # Panics
     *
     * If the last element would lie outside the buffer.
     */
    pub(crate) fn new(storage: &'a [T], start: usize, stride: usize, length: usize) -> Self {
        if length > 0 {
            assert!(
                start + (length - 1) * stride < storage.len(),
                "Column extends past the matrix buffer"
            );
        }
        ColumnIterator {
            storage,
            start,
            stride,
            front: 0,
            back: length,
        }
    }

    /**
     * The index in the column of the element [next](Iterator::next) would return.
     */
    pub fn position(&self) -> usize {
        self.front
    }

    /**
     * Moves this iterator forward by `n` positions, stopping at the end.
     */
    pub fn advance(&mut self, n: usize) {
        self.front = self.front.saturating_add(n).min(self.back);
    }

    /**
     * Moves this iterator back by `n` positions, stopping at the start of the column.
     */
    pub fn retreat(&mut self, n: usize) {
        self.front = self.front.saturating_sub(n);
    }

    /**
     * The number of positions this iterator is ahead of `other`. Both iterators should be over
     * the same column.
     */
    pub fn distance_from(&self, other: &ColumnIterator<'a, T>) -> isize {
        debug_assert!(self.same_column(other), "Iterators are over different columns");
        self.front as isize - other.front as isize
    }

    /**
     * Returns the element `n` positions ahead of the current position without moving.
     */
    pub fn peek(&self, n: usize) -> Option<&'a T> {
        let index = self.front.checked_add(n)?;
        if index < self.back {
            Some(&self.storage[self.start + index * self.stride])
        } else {
            None
        }
    }

    fn same_column(&self, other: &ColumnIterator<'a, T>) -> bool {
        std::ptr::eq(self.storage, other.storage)
            && self.start == other.start
            && self.stride == other.stride
    }
}

impl <'a, T> Clone for ColumnIterator<'a, T> {
    fn clone(&self) -> Self {
        ColumnIterator { ..*self }
    }
}

impl <'a, T> Iterator for ColumnIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None
        }
        let value = &self.storage[self.start + self.front * self.stride];
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.advance(n);
        self.next()
    }
}

impl <'a, T> DoubleEndedIterator for ColumnIterator<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None
        }
        self.back -= 1;
        Some(&self.storage[self.start + self.back * self.stride])
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl <'a, T> FusedIterator for ColumnIterator<'a, T> {}
impl <'a, T> ExactSizeIterator for ColumnIterator<'a, T> {}

impl <'a, T> PartialEq for ColumnIterator<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_column(other) && self.front == other.front
    }
}

impl <'a, T> PartialOrd for ColumnIterator<'a, T> {
    /**
     * Iterators over the same column are ordered by position, iterators over different
     * columns are unordered.
     */
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_column(other) {
            Some(self.front.cmp(&other.front))
        } else {
            None
        }
    }
}

/**
 * An iterator over mutable references to the elements of a column of an unrestricted matrix.
 */
#[derive(Debug)]
pub struct ColumnIteratorMut<'a, T> {
    elements: Take<StepBy<std::slice::IterMut<'a, T>>>,
}

impl <'a, T> ColumnIteratorMut<'a, T> {
    /**
     * Constructs an iterator over `length` elements of the buffer, see
     * [ColumnIterator](ColumnIterator).
     */
    pub(crate) fn new(storage: &'a mut [T], start: usize, stride: usize, length: usize) -> Self {
        let elements = storage[start..].iter_mut().step_by(stride).take(length);
        ColumnIteratorMut { elements }
    }
}

impl <'a, T> Iterator for ColumnIteratorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.elements.nth(n)
    }
}

impl <'a, T> DoubleEndedIterator for ColumnIteratorMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl <'a, T> FusedIterator for ColumnIteratorMut<'a, T> {}
impl <'a, T> ExactSizeIterator for ColumnIteratorMut<'a, T> {}
