//! Forward transform configuration.

use crate::lyndon::TrailingRun;

/// Forward transform configuration.
///
/// None of these settings change the transform output; they only trade
/// memory and threads for speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BwstConfig {
    /// How a trailing run of one repeated byte is factored.
    pub trailing_run: TrailingRun,
    /// Sort rotation buckets on the rayon thread pool.
    /// Only takes effect when the `parallel` feature is enabled.
    pub parallel: bool,
    /// Minimum input length for the parallel bucket sort.
    pub parallel_threshold: usize,
}

impl BwstConfig {
    /// Default configuration.
    ///
    /// - Trailing single-byte run merged into one word
    /// - Parallel bucket sort for inputs of 64 KiB and more
    pub const DEFAULT: Self = Self {
        trailing_run: TrailingRun::Merge,
        parallel: true,
        parallel_threshold: 64 * 1024,
    };

    /// Single-threaded configuration.
    pub const SEQUENTIAL: Self = Self {
        trailing_run: TrailingRun::Merge,
        parallel: false,
        parallel_threshold: usize::MAX,
    };

    /// Set the trailing-run policy.
    pub fn with_trailing_run(mut self, trailing_run: TrailingRun) -> Self {
        self.trailing_run = trailing_run;
        self
    }

    /// Enable or disable the parallel bucket sort.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the minimum input length for the parallel bucket sort.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether an input of `len` bytes is sorted in parallel.
    pub fn use_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && len >= self.parallel_threshold
    }
}

impl Default for BwstConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
