/*!
 * Column views over dense matrix storage.
 *
 * A [ColumnView](columns::ColumnView) exposes one column of a [Matrix](matrices::Matrix) as a
 * fixed size vector that reads and writes the matrix buffer in place. Assignments to a view are
 * validated before anything is written: the source must be the right size, must not break the
 * structure of a [structured matrix](matrices::structured), and is copied first if it may
 * share memory with the matrix. The transfer itself is done by an engine that moves
 * contiguous columns in blocks and streams very large ones past the cache.
 *
 * ```
 * use column_views::matrices::Matrix;
 * use column_views::vectors::sparse::CompressedVector;
 *
 * let mut matrix: Matrix<f64> = Matrix::from(vec![
 *     vec![ 1.0, 2.0 ],
 *     vec![ 3.0, 4.0 ],
 *     vec![ 5.0, 6.0 ]]);
 * let mut column = matrix.column_view_mut(0).unwrap();
 * column.add_assign_column(1).unwrap();
 * assert_eq!(column.to_vec(), vec![ 3.0, 7.0, 11.0 ]);
 * column.assign_sparse(&CompressedVector::from(3, vec![ (1, 9.0) ])).unwrap();
 * assert_eq!(matrix.get(1, 0), 9.0);
 * assert_eq!(matrix.get(0, 0), 0.0);
 * ```
 *
 * # Modules
 * - [matrices]: dense storage, structured matrices and the traits views read them through
 * - [columns]: the column view and its assignment protocol
 * - [vectors]: dense and sparse sources of assignments
 * - [tuning]: thresholds of the assignment engine
 */

pub mod numeric;
pub mod simd;
pub mod tuning;
pub mod matrices;
pub mod vectors;
pub mod columns;
