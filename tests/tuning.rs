extern crate column_views;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use column_views::matrices::{ColumnMajor, Matrix};
    use column_views::tuning::{
        CACHE_SIZE_VARIABLE, SMP_ASSIGN_THRESHOLD_VARIABLE, Tuning, USE_STREAMING_VARIABLE,
    };

    #[test]
    fn defaults() {
        let tuning = Tuning::default();
        assert!(tuning.use_streaming);
        assert_eq!(tuning.cache_size, 3_145_728);
        assert_eq!(tuning.smp_assign_threshold, 38_000);
        assert_eq!(tuning.streaming_threshold::<f64>(), 131_072);
        assert_eq!(tuning.streaming_threshold::<f32>(), 262_144);
        assert!(!tuning.should_stream::<f64>(131_072));
        assert!(tuning.should_stream::<f64>(131_073));
        let disabled = Tuning { use_streaming: false, ..Tuning::default() };
        assert!(!disabled.should_stream::<f64>(10_000_000));
    }

    #[test]
    fn read_from_a_lookup() {
        let variables: HashMap<&str, &str> = HashMap::from([
            (USE_STREAMING_VARIABLE, "false"),
            (CACHE_SIZE_VARIABLE, " 1048576 "),
            (SMP_ASSIGN_THRESHOLD_VARIABLE, "not a number"),
        ]);
        let tuning = Tuning::from_lookup(|key| variables.get(key).map(|value| value.to_string()));
        assert_eq!(
            tuning,
            Tuning {
                use_streaming: false,
                cache_size: 1_048_576,
                smp_assign_threshold: Tuning::default().smp_assign_threshold,
            }
        );
        assert_eq!(Tuning::from_lookup(|_| None), Tuning::default());
    }

    // Installing changes process wide state, so every check that depends on it lives in this
    // one test.
    #[test]
    fn installed_tuning_is_used_by_views() {
        assert_eq!(Tuning::current(), Tuning::default());
        let matrix: Matrix<f64, ColumnMajor> = Matrix::zeros((10, 2));
        assert!(!matrix.column_view(0).unwrap().can_smp_assign());

        Tuning {
            use_streaming: true,
            cache_size: 0,
            smp_assign_threshold: 4,
        }.install();
        assert_eq!(Tuning::current().smp_assign_threshold, 4);
        assert!(matrix.column_view(0).unwrap().can_smp_assign());

        // every assignment streams now and must still produce the same values
        let mut matrix = matrix;
        let source: Vec<f64> = (0..10).map(|x| x as f64).collect();
        matrix.column_view_mut(1).unwrap().assign(&source).unwrap();
        assert_eq!(matrix.column_view(1).unwrap().to_vec(), source);
        assert!(matrix.column_view(0).unwrap().iter().all(|x| *x == 0.0));

        Tuning::default().install();
        assert_eq!(Tuning::current(), Tuning::default());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn read_from_toml() {
        let tuning: Tuning = toml::from_str("cache_size = 8388608\nuse_streaming = false\n").unwrap();
        assert_eq!(tuning.cache_size, 8_388_608);
        assert!(!tuning.use_streaming);
        assert_eq!(tuning.smp_assign_threshold, Tuning::default().smp_assign_threshold);
        let text = toml::to_string(&tuning).unwrap();
        assert_eq!(toml::from_str::<Tuning>(&text).unwrap(), tuning);
    }
}
