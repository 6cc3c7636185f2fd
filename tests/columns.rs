extern crate column_views;

#[cfg(test)]
mod tests {
    use column_views::columns::{self, ColumnView, column, is_same};
    use column_views::columns::errors::ColumnViewError;
    use column_views::matrices::{ColumnMajor, DataLayout, Matrix, RowMajor};
    use column_views::tuning::Tuning;
    use column_views::vectors::{Converted, DenseVector};
    use column_views::vectors::sparse::CompressedVector;

    use num_complex::Complex;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn numbered<O: column_views::matrices::StorageOrder>(rows: usize, columns: usize) -> Matrix<i32, O> {
        Matrix::from_flat_row_major((rows, columns), (0..(rows * columns) as i32).collect())
    }

    #[test]
    fn create_views_of_valid_columns() {
        let matrix: Matrix<i32> = numbered(3, 4);
        let view = matrix.column_view(3).unwrap();
        assert_eq!(view.size(), 3);
        assert_eq!(view.index(), 3);
        assert_eq!(view.capacity(), 3);
        assert_eq!(view.data_layout(), DataLayout::RowMajor);
        assert_eq!(view.to_vec(), vec![ 3, 7, 11 ]);
    }

    #[test]
    fn reject_invalid_column_indexes() {
        let mut matrix: Matrix<i32> = numbered(3, 4);
        assert_eq!(
            matrix.column_view(4).unwrap_err(),
            ColumnViewError::InvalidIndex { index: 4, columns: 4 }
        );
        assert!(matrix.column_view_mut(100).is_err());
        assert!(column(&matrix, 4).is_err());
        let error = column(&matrix, 7).unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid column access index 7 for a matrix with 4 columns"
        );
    }

    #[test]
    fn read_columns_in_both_layouts() {
        let row_major: Matrix<i32, RowMajor> = numbered(4, 3);
        let column_major: Matrix<i32, ColumnMajor> = numbered(4, 3);
        for j in 0..3 {
            let strided = row_major.column_view(j).unwrap();
            let contiguous = column_major.column_view(j).unwrap();
            assert!(strided.as_slice().is_none());
            assert!(!strided.is_aligned());
            assert_eq!(contiguous.as_slice().map(|s| s.to_vec()), Some(strided.to_vec()));
            for i in 0..4 {
                let expected = (i * 3 + j) as i32;
                assert_eq!(strided[i], expected);
                assert_eq!(contiguous.get(i), expected);
                assert_eq!(unsafe { *contiguous.get_unchecked(i) }, expected);
            }
            assert!(Iterator::eq(strided.iter(), contiguous.iter()));
            assert_eq!((&strided).into_iter().count(), 4);
        }
    }

    #[test]
    fn assign_to_a_column_major_column() {
        let mut matrix: Matrix<f64, ColumnMajor> = Matrix::zeros((4, 4));
        {
            let mut view = matrix.column_view_mut(2).unwrap();
            view.assign(&[ 1.0, 2.0, 3.0, 4.0 ]).unwrap();
        }
        for i in 0..4 {
            assert_eq!(matrix.get(i, 2), (i + 1) as f64);
            for j in [0, 1, 3] {
                assert_eq!(matrix.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn assign_sparse_clears_unstored_indexes() {
        let mut matrix: Matrix<i32> = Matrix::empty(3, (5, 3));
        let mut view = matrix.column_view_mut(1).unwrap();
        view.assign_sparse(&CompressedVector::from(5, vec![ (2, 7) ])).unwrap();
        assert_eq!(view.to_vec(), vec![ 0, 0, 7, 0, 0 ]);
        assert_eq!(view.non_zeros(), 1);
        // neighbouring columns untouched
        assert_eq!(matrix.column_view(0).unwrap().to_vec(), vec![ 3; 5 ]);
        assert_eq!(matrix.column_view(2).unwrap().to_vec(), vec![ 3; 5 ]);
    }

    #[test]
    fn size_mismatches_leave_the_column_unchanged() {
        let mut matrix: Matrix<i32> = numbered(3, 3);
        let mut view = matrix.column_view_mut(0).unwrap();
        assert_eq!(
            view.assign(&[ 1, 2 ]),
            Err(ColumnViewError::SizeMismatch { expected: 3, actual: 2 })
        );
        assert!(view.add_assign(&vec![ 1; 4 ]).is_err());
        assert!(view.mul_assign(&vec![ 1; 4 ]).is_err());
        assert!(view.assign_sparse(&CompressedVector::<i32>::new(2)).is_err());
        assert!(view.mul_assign_sparse(&CompressedVector::<i32>::new(5)).is_err());
        assert_eq!(view.to_vec(), vec![ 0, 3, 6 ]);
    }

    #[test]
    fn arithmetic_assignments() {
        let mut matrix: Matrix<i32> = numbered(3, 2);
        let mut view = matrix.column_view_mut(1).unwrap();
        assert_eq!(view.to_vec(), vec![ 1, 3, 5 ]);
        view.add_assign(&[ 10, 10, 10 ]).unwrap();
        assert_eq!(view.to_vec(), vec![ 11, 13, 15 ]);
        view.sub_assign(&vec![ 1, 2, 3 ]).unwrap();
        assert_eq!(view.to_vec(), vec![ 10, 11, 12 ]);
        view.mul_assign(&[ 2, 0, -1 ]).unwrap();
        assert_eq!(view.to_vec(), vec![ 20, 0, -12 ]);
        view *= 3;
        assert_eq!(view.to_vec(), vec![ 60, 0, -36 ]);
        view /= 6;
        assert_eq!(view.to_vec(), vec![ 10, 0, -6 ]);
        assert_eq!(matrix.column_view(0).unwrap().to_vec(), vec![ 0, 2, 4 ]);
    }

    #[test]
    fn sparse_arithmetic_assignments() {
        let mut matrix: Matrix<i32, ColumnMajor> = Matrix::empty(2, (4, 2));
        let mut view = matrix.column_view_mut(0).unwrap();
        let entries = CompressedVector::from(4, vec![ (3, 5), (0, 1) ]);
        view.add_assign_sparse(&entries).unwrap();
        assert_eq!(view.to_vec(), vec![ 3, 2, 2, 7 ]);
        view.sub_assign_sparse(&entries).unwrap();
        assert_eq!(view.to_vec(), vec![ 2, 2, 2, 2 ]);
        view.mul_assign_sparse(&entries).unwrap();
        assert_eq!(view.to_vec(), vec![ 2, 0, 0, 10 ]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn division_by_zero_is_detected_in_debug_builds() {
        let mut matrix: Matrix<i32> = numbered(2, 2);
        let mut view = matrix.column_view_mut(0).unwrap();
        view /= 0;
    }

    #[test]
    fn reset_and_clear() {
        let mut matrix: Matrix<f32> = Matrix::empty(1.5, (3, 3));
        let mut view = matrix.column_view_mut(1).unwrap();
        assert!(!columns::is_default(&view));
        columns::reset(&mut view);
        assert!(columns::is_default(&view));
        view.assign(&[ 1.0, 0.0, 0.0 ]).unwrap();
        assert!(!columns::is_default(&view));
        columns::clear(&mut view);
        assert!(columns::is_default(&view));
        assert_eq!(matrix.get(0, 0), 1.5);
        assert_eq!(matrix.get(2, 2), 1.5);
    }

    #[test]
    fn assign_between_columns_of_the_same_matrix() {
        let mut matrix: Matrix<i32> = numbered(3, 3);
        let mut view = matrix.column_view_mut(0).unwrap();
        view.assign_column(0).unwrap();
        assert_eq!(view.to_vec(), vec![ 0, 3, 6 ]);
        view.assign_column(2).unwrap();
        assert_eq!(view.to_vec(), vec![ 2, 5, 8 ]);
        view.add_assign_column(0).unwrap();
        assert_eq!(view.to_vec(), vec![ 4, 10, 16 ]);
        view.sub_assign_column(1).unwrap();
        assert_eq!(view.to_vec(), vec![ 3, 6, 9 ]);
        view.mul_assign_column(0).unwrap();
        assert_eq!(view.to_vec(), vec![ 9, 36, 81 ]);
        assert_eq!(
            view.assign_column(3),
            Err(ColumnViewError::InvalidIndex { index: 3, columns: 3 })
        );
        assert_eq!(matrix.column_view(1).unwrap().to_vec(), vec![ 1, 4, 7 ]);
        assert_eq!(matrix.column_view(2).unwrap().to_vec(), vec![ 2, 5, 8 ]);
    }

    #[test]
    fn identity_not_equality() {
        let a: Matrix<i32> = Matrix::zeros((3, 3));
        let b: Matrix<i32> = Matrix::zeros((3, 3));
        let first = a.column_view(1).unwrap();
        let second = column(&a, 1).unwrap();
        assert!(is_same(&first, &second));
        assert!(first.can_alias(&second));
        assert!(!is_same(&first, &a.column_view(2).unwrap()));
        assert!(!is_same(&first, &b.column_view(1).unwrap()));
        assert_eq!(first.to_vec(), b.column_view(1).unwrap().to_vec());
    }

    #[test]
    fn aliasing_queries() {
        let matrix: Matrix<i32> = numbered(3, 3);
        let other = vec![ 0; 3 ];
        let view = matrix.column_view(1).unwrap();
        assert!(view.is_aliased(&matrix.as_slice().address_range()));
        assert!(view.is_aliased(&view.address_range()));
        assert!(!view.is_aliased(&other.address_range()));
        assert!(columns::overlaps(&view.address_range(), &matrix.as_slice().address_range()));
    }

    #[test]
    fn write_through_unrestricted_views() {
        let mut matrix: Matrix<i32> = numbered(3, 2);
        let mut view = matrix.column_view_mut(0).unwrap();
        view[1] = 100;
        for x in view.iter_mut() {
            *x += 1;
        }
        assert!(view.as_mut_slice().is_none());
        assert_eq!(view.to_vec(), vec![ 1, 101, 5 ]);

        let mut contiguous: Matrix<i32, ColumnMajor> = numbered(3, 2);
        let mut view = contiguous.column_view_mut(1).unwrap();
        if let Some(lane) = view.as_mut_slice() {
            lane.reverse();
        }
        assert_eq!(contiguous.column_view(1).unwrap().to_vec(), vec![ 5, 3, 1 ]);
    }

    #[test]
    fn set_fill_and_scale() {
        let mut matrix: Matrix<i32> = numbered(3, 3);
        let mut view = matrix.column_view_mut(2).unwrap();
        view.set(0, -1).unwrap();
        assert_eq!(view.to_vec(), vec![ -1, 5, 8 ]);
        view.fill(4);
        assert_eq!(view.to_vec(), vec![ 4, 4, 4 ]);
        view.scale(&2);
        assert_eq!(view.to_vec(), vec![ 8, 8, 8 ]);
    }

    #[test]
    fn derestricted_views_write_the_same_column() {
        let mut matrix: Matrix<i32> = numbered(2, 2);
        let mut view = matrix.column_view_mut(1).unwrap();
        {
            let mut unrestricted = columns::derestrict(&mut view);
            unrestricted[0] = 9;
            assert_eq!(unrestricted.index(), 1);
        }
        assert_eq!(view.to_vec(), vec![ 9, 3 ]);
    }

    #[test]
    fn owned_sources() {
        let matrix: Matrix<i32> = numbered(2, 3);
        let mut view: ColumnView<i32, Box<Matrix<i32>>> =
            ColumnView::from(Box::new(matrix), 2).unwrap();
        view.assign(&[ 7, 8 ]).unwrap();
        let cloned = view.clone();
        let matrix = view.into_source();
        assert_eq!(matrix.get(1, 2), 8);
        assert_eq!(cloned.to_vec(), vec![ 7, 8 ]);
    }

    #[test]
    fn mixed_element_types() {
        let mut matrix: Matrix<f64> = Matrix::zeros((3, 2));
        let integers: Vec<i32> = vec![ 1, -2, 3 ];
        let singles: [f32; 3] = [ 0.5, 0.25, 0.125 ];
        let mut view = matrix.column_view_mut(1).unwrap();
        view.assign(&Converted::from(&integers)).unwrap();
        view.add_assign(&Converted::from(&singles)).unwrap();
        assert_eq!(view.to_vec(), vec![ 1.5, -1.75, 3.125 ]);
    }

    #[test]
    fn complex_columns() {
        let mut matrix: Matrix<Complex<f64>, ColumnMajor> = Matrix::zeros((2, 2));
        let mut view = matrix.column_view_mut(0).unwrap();
        view.assign(&[ Complex::new(1.0, 1.0), Complex::new(0.0, 2.0) ]).unwrap();
        view.mul_assign(&[ Complex::new(0.0, 1.0), Complex::new(2.0, 0.0) ]).unwrap();
        assert_eq!(view.to_vec(), vec![ Complex::new(-1.0, 1.0), Complex::new(0.0, 4.0) ]);
        assert!(!ColumnView::<Complex<f64>, &mut Matrix<Complex<f64>, ColumnMajor>>::VECTORIZABLE);
    }

    #[test]
    fn compile_time_properties() {
        assert!(ColumnView::<f64, &Matrix<f64, ColumnMajor>>::VECTORIZABLE);
        assert!(!ColumnView::<f64, &Matrix<f64, RowMajor>>::VECTORIZABLE);
        assert!(!ColumnView::<u128, &Matrix<u128, ColumnMajor>>::VECTORIZABLE);
        assert!(ColumnView::<f64, &Matrix<f64>>::SMP_ASSIGNABLE);
        assert!(!ColumnView::<f64, &Matrix<f64>>::IS_RESTRICTED);
    }

    #[test]
    fn parallel_assignment_threshold() {
        let threshold = Tuning::current().smp_assign_threshold;
        let small: Matrix<u8, ColumnMajor> = Matrix::zeros((threshold, 1));
        let large: Matrix<u8, ColumnMajor> = Matrix::zeros((threshold + 1, 1));
        assert!(!small.column_view(0).unwrap().can_smp_assign());
        assert!(large.column_view(0).unwrap().can_smp_assign());
    }

    #[test]
    fn random_access_iterators() {
        let matrix: Matrix<i32> = numbered(6, 2);
        let view = matrix.column_view(1).unwrap();
        let mut iterator = view.iter();
        assert_eq!(iterator.len(), 6);
        let start = iterator.clone();
        iterator.advance(4);
        assert_eq!(iterator.position(), 4);
        assert_eq!(iterator.distance_from(&start), 4);
        assert_eq!(start.distance_from(&iterator), -4);
        assert!(start < iterator);
        iterator.retreat(1);
        assert_eq!(iterator.next(), Some(&7));
        assert_eq!(iterator.next_back(), Some(&11));
        assert_eq!(iterator.nth(0), Some(&9));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
        assert_eq!(start.peek(5), Some(&11));
        assert_eq!(start.peek(6), None);
        let other = matrix.column_view(0).unwrap();
        assert_eq!(PartialOrd::partial_cmp(&start, &other.iter()), None);
        assert!(view.iter().rev().copied().eq([ 11, 9, 7, 5, 3, 1 ]));
    }

    fn random_values(generator: &mut ChaCha8Rng, n: usize) -> Vec<f64> {
        (0..n).map(|_| generator.random_range(-64..64) as f64 * 0.5).collect()
    }

    fn check_against_elementwise<O: column_views::matrices::StorageOrder>(rows: usize) {
        let mut generator = ChaCha8Rng::seed_from_u64(rows as u64);
        let columns = 3;
        let initial = random_values(&mut generator, rows * columns);
        let source = random_values(&mut generator, rows);
        let mut matrix: Matrix<f64, O> = Matrix::from_flat_row_major((rows, columns), initial);
        let before = matrix.column_view(1).unwrap().to_vec();

        let mut view = matrix.column_view_mut(1).unwrap();
        view.add_assign(&source).unwrap();
        let added: Vec<f64> = before.iter().zip(&source).map(|(a, b)| a + b).collect();
        assert_eq!(view.to_vec(), added, "add with {} rows", rows);

        view.mul_assign(&source).unwrap();
        let multiplied: Vec<f64> = added.iter().zip(&source).map(|(a, b)| a * b).collect();
        assert_eq!(view.to_vec(), multiplied, "multiply with {} rows", rows);

        view.sub_assign(&source).unwrap();
        let subtracted: Vec<f64> = multiplied.iter().zip(&source).map(|(a, b)| a - b).collect();
        assert_eq!(view.to_vec(), subtracted, "subtract with {} rows", rows);

        view.assign(&source).unwrap();
        assert_eq!(view.to_vec(), source, "assign with {} rows", rows);
    }

    #[test]
    fn random_assignments_match_elementwise_results() {
        for rows in [1, 3, 8, 13, 64, 257] {
            check_against_elementwise::<RowMajor>(rows);
            check_against_elementwise::<ColumnMajor>(rows);
        }
    }

    #[test]
    fn columns_larger_than_the_streaming_threshold() {
        let rows = Tuning::default().streaming_threshold::<f64>() + 5;
        let mut generator = ChaCha8Rng::seed_from_u64(29);
        let source = random_values(&mut generator, rows);
        let mut matrix: Matrix<f64, ColumnMajor> = Matrix::empty(1.0, (rows, 2));
        {
            let mut view = matrix.column_view_mut(1).unwrap();
            view.assign(&source).unwrap();
            assert_eq!(view.to_vec(), source);
        }
        assert!(matrix.column_view(0).unwrap().iter().all(|x| *x == 1.0));
    }
}
