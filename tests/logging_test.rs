use classort::prelude::*;
use tracing_subscriber::EnvFilter;

// Sorting with a subscriber installed must behave exactly as without one.
#[test]
fn test_sorts_with_subscriber_installed() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("classort=trace"))
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut data = vec![1, 1, 4, 2, 2, 3, 7];
        bubble_sort(&mut data);
        assert_eq!(data, vec![1, 1, 2, 2, 3, 4, 7]);

        let mut small = vec![1u32, 1, 4, 2, 2, 3, 7];
        counting_sort(&mut small, 7).unwrap();
        assert_eq!(small, vec![1, 1, 2, 2, 3, 4, 7]);

        let mut wide = vec![40_000u32, 3, 12];
        counting_sort(&mut wide, 40_000).unwrap();
        assert_eq!(wide, vec![3, 12, 40_000]);

        let mut bad = vec![1u32, 8];
        assert!(counting_sort(&mut bad, 7).is_err());
    });
}
