extern crate column_views;

#[cfg(test)]
mod tests {
    use column_views::matrices::structured::LowerMatrix;
    use column_views::matrices::views::{Derestrict, MatrixMut, MatrixRef};
    use column_views::matrices::{ColumnMajor, DataLayout, Matrix};

    fn sum_of_diagonal<S: MatrixRef<i32>>(source: &S) -> i32 {
        let (rows, columns) = source.view_size();
        (0..rows.min(columns))
            .map(|i| unsafe { *source.get_reference_unchecked(i, i) })
            .sum()
    }

    #[test]
    fn matrices_are_matrix_refs() {
        let matrix: Matrix<i32, ColumnMajor> = Matrix::from(vec![
            vec![ 1, 2, 3 ],
            vec![ 4, 5, 6 ]]);
        assert_eq!(matrix.view_size(), (2, 3));
        assert_eq!(matrix.try_get_reference(1, 2), Some(&6));
        assert_eq!(matrix.try_get_reference(2, 0), None);
        assert_eq!(matrix.try_get_reference(0, 3), None);
        assert_eq!(MatrixRef::data_layout(&matrix), DataLayout::ColumnMajor);
        assert_eq!(matrix.storage(), &[ 1, 4, 2, 5, 3, 6 ]);
        assert_eq!(sum_of_diagonal(&matrix), 6);
        assert_eq!(sum_of_diagonal(&&matrix), 6);
        assert_eq!(sum_of_diagonal(&Box::new(matrix)), 6);
    }

    #[test]
    fn matrices_are_matrix_muts() {
        let mut matrix: Matrix<i32> = Matrix::zeros((2, 2));
        if let Some(x) = matrix.try_get_reference_mut(0, 1) {
            *x = 3;
        }
        assert!(matrix.try_get_reference_mut(2, 1).is_none());
        unsafe {
            *matrix.get_reference_unchecked_mut(1, 0) = 4;
        }
        {
            let reference = &mut matrix;
            reference.storage_mut()[3] = 5;
            assert_eq!(reference.view_rows(), 2);
        }
        let mut boxed = Box::new(matrix);
        *boxed.try_get_reference_mut(0, 0).unwrap() = 2;
        assert_eq!(boxed.storage(), &[ 2, 3, 4, 5 ]);
    }

    #[test]
    fn structured_matrices_only_write_through_derestrict() {
        let mut lower: LowerMatrix<i32> = LowerMatrix::zeros(3);
        assert_eq!(lower.view_columns(), 3);
        assert_eq!(lower.try_get_reference(2, 2), Some(&0));
        assert_eq!(sum_of_diagonal(&lower), 0);
        lower.derestrict().set(0, 2, 1);
        assert_eq!(lower.get(0, 2), 1);
        assert_eq!(lower.matrix().get(0, 2), 1);
    }
}
