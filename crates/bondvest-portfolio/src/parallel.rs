//! Parallel processing utilities for portfolio aggregation.
//!
//! Provides conditional parallel iteration based on configuration
//! and collection size. Uses rayon when the `parallel` feature is enabled.

use crate::config::AggregationConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
///
/// Output order always matches input order.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &AggregationConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_parallel_map() {
        let config = AggregationConfig::sequential();
        let items = vec![1, 2, 3, 4, 5];
        let results: Vec<i32> = maybe_parallel_map(&items, &config, |x| x * 2);
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_order_preserved_above_threshold() {
        let config = AggregationConfig::default().with_threshold(10);
        let items: Vec<u32> = (0..500).collect();
        let results = maybe_parallel_map(&items, &config, |x| x + 1);
        assert_eq!(results, (1..501).collect::<Vec<u32>>());
    }
}
