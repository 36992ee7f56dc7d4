//! Burrows-Wheeler-Scott transform for OxiBWST.
//!
//! The Burrows-Wheeler-Scott transform (BWST, also known as the bijective
//! BWT) permutes a byte string the way the classic BWT does, but needs
//! neither a sentinel byte nor an origin pointer to be undone: it is a
//! bijection on strings of each length.
//!
//! The forward transform is a pipeline:
//! 1. Lyndon factorization - split the input into non-increasing Lyndon words
//! 2. Rotation location - bucket every rotation of every word by first byte
//! 3. Cyclic sort - order each bucket by infinite repetition (in parallel
//!    with the `parallel` feature)
//! 4. Assembly - emit the byte preceding each rotation, bucket by bucket
//!
//! The inverse links the sorted column to the output, splits the link
//! permutation into cycles (one per word) and writes the words back in
//! non-increasing order.
//!
//! ## Example
//!
//! ```rust
//! use oxibwst::{inverse_transform, lyndon_factors, transform};
//!
//! let data = b"mississippi";
//! let bwst = transform(data);
//! assert_eq!(bwst.len(), data.len());
//! assert_eq!(inverse_transform(&bwst), data);
//!
//! let factors = lyndon_factors(data);
//! assert_eq!(factors, [&b"m"[..], b"iss", b"iss", b"ipp", b"i"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod forward;
mod inverse;
pub mod locate;
/// Lyndon factorization.
pub mod lyndon;
mod sort;

pub use config::BwstConfig;
pub use forward::{transform, transform_with_config};
pub use inverse::inverse_transform;
pub use locate::{Rotation, RotationBuckets};
pub use lyndon::{
    Factorization, TrailingRun, factor_bounds, is_lyndon_word, lyndon_factors, lyndon_factors_mut,
};
pub use oxibwst_core::{BlockTransform, BwstError, Result};
pub use sort::{cyclic_cmp, cyclic_less, sort_bucket};

/// The Burrows-Wheeler-Scott transform as a [`BlockTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bwst {
    config: BwstConfig,
}

impl Bwst {
    /// Create a transform with the given configuration.
    pub fn new(config: BwstConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &BwstConfig {
        &self.config
    }
}

impl BlockTransform for Bwst {
    fn name(&self) -> &'static str {
        "bwst"
    }

    fn forward(&self, input: &[u8]) -> Vec<u8> {
        transform_with_config(input, &self.config)
    }

    fn inverse(&self, input: &[u8]) -> Vec<u8> {
        inverse_transform(input)
    }
}
