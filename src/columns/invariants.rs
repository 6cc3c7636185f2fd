/*!
 * Checks that an assignment to a column keeps the structure of its matrix.
 *
 * Each predicate answers whether assigning the whole source vector to `column` would leave
 * every element that the structure requires to be zero at zero. The sparse variants only visit
 * the stored entries inside the forbidden index range, found with a lower bound seek.
 */

use crate::matrices::Column;
use crate::numeric::Scalar;
use crate::vectors::DenseVector;
use crate::vectors::sparse::SparseVector;

/// Every element above `column` must be zero.
pub fn lower_preserved_dense<T, V>(column: Column, rhs: &V) -> bool
where
    T: Scalar,
    V: DenseVector<T> + ?Sized,
{
    let end = column.min(rhs.size());
    (0..end).all(|i| rhs.element(i).is_default())
}

/// Every stored entry above `column` must be zero.
pub fn lower_preserved_sparse<T, V>(column: Column, rhs: &V) -> bool
where
    T: Scalar,
    V: SparseVector<T> + ?Sized,
{
    let end = rhs.lower_bound(column);
    rhs.entries()[..end].iter().all(|(_, value)| value.is_default())
}

/// Every element below `column` must be zero.
pub fn upper_preserved_dense<T, V>(column: Column, rhs: &V) -> bool
where
    T: Scalar,
    V: DenseVector<T> + ?Sized,
{
    (column + 1..rhs.size()).all(|i| rhs.element(i).is_default())
}

/// Every stored entry below `column` must be zero.
pub fn upper_preserved_sparse<T, V>(column: Column, rhs: &V) -> bool
where
    T: Scalar,
    V: SparseVector<T> + ?Sized,
{
    let start = rhs.lower_bound(column + 1);
    rhs.entries()[start..].iter().all(|(_, value)| value.is_default())
}

/// Every element except the one at `column` must be zero.
pub fn diagonal_preserved_dense<T, V>(column: Column, rhs: &V) -> bool
where
    T: Scalar,
    V: DenseVector<T> + ?Sized,
{
    (0..rhs.size())
        .filter(|i| *i != column)
        .all(|i| rhs.element(i).is_default())
}

/// Every stored entry except the one at `column` must be zero.
pub fn diagonal_preserved_sparse<T, V>(column: Column, rhs: &V) -> bool
where
    T: Scalar,
    V: SparseVector<T> + ?Sized,
{
    rhs.entries()
        .iter()
        .filter(|(i, _)| *i != column)
        .all(|(_, value)| value.is_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::sparse::CompressedVector;

    #[test]
    fn lower_needs_zeros_above_the_column() {
        assert!(lower_preserved_dense(2, &[0, 0, 3, 4]));
        assert!(!lower_preserved_dense(2, &[0, 1, 3, 4]));
        // every element of column 0 may be nonzero
        assert!(lower_preserved_dense(0, &[5, 1, 3, 4]));
        let sparse = CompressedVector::from(4, vec![(1, 0), (2, 7)]);
        assert!(lower_preserved_sparse(2, &sparse));
        let sparse = CompressedVector::from(4, vec![(1, 2), (2, 7)]);
        assert!(!lower_preserved_sparse(2, &sparse));
    }

    #[test]
    fn upper_needs_zeros_below_the_column() {
        assert!(upper_preserved_dense(1, &[1, 2, 0, 0]));
        assert!(!upper_preserved_dense(1, &[1, 2, 0, 9]));
        assert!(upper_preserved_dense(3, &[1, 2, 3, 4]));
        let sparse = CompressedVector::from(4, vec![(0, 1), (1, 2)]);
        assert!(upper_preserved_sparse(1, &sparse));
        let sparse = CompressedVector::from(4, vec![(0, 1), (2, 2)]);
        assert!(!upper_preserved_sparse(1, &sparse));
    }

    #[test]
    fn diagonal_needs_zeros_off_the_column() {
        assert!(diagonal_preserved_dense(1, &[0.0, 5.0, 0.0]));
        assert!(!diagonal_preserved_dense(1, &[1.0, 5.0, 0.0]));
        let sparse = CompressedVector::from(3, vec![(1, 5.0)]);
        assert!(diagonal_preserved_sparse(1, &sparse));
        let sparse = CompressedVector::from(3, vec![(1, 5.0), (2, 0.5)]);
        assert!(!diagonal_preserved_sparse(1, &sparse));
        // explicitly stored zeros are allowed anywhere
        let sparse = CompressedVector::from(3, vec![(0, 0.0), (1, 5.0)]);
        assert!(diagonal_preserved_sparse(1, &sparse));
    }
}
