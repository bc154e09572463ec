//! Configuration for portfolio aggregation.

use bondvest_accrual::AccrualConfig;
use serde::{Deserialize, Serialize};

/// Number of chart points: 23 month-ends plus the as-of time.
pub const DEFAULT_SERIES_POINTS: usize = 24;

/// Configuration for portfolio aggregation.
///
/// Controls parallelism, series length and the accrual rules applied to each
/// investment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum item count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Points in the earnings series, the last one being the as-of time.
    pub series_points: usize,

    /// Accrual rules for each investment.
    pub accrual: AccrualConfig,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100,
            series_points: DEFAULT_SERIES_POINTS,
            accrual: AccrualConfig::default(),
        }
    }
}

impl AggregationConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the number of series points.
    #[must_use]
    pub fn with_series_points(mut self, points: usize) -> Self {
        self.series_points = points;
        self
    }

    /// Sets the accrual rules.
    #[must_use]
    pub fn with_accrual(mut self, accrual: AccrualConfig) -> Self {
        self.accrual = accrual;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
