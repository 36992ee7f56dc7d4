//! Forward Burrows-Wheeler-Scott transform.
//!
//! The input is split into Lyndon words, every rotation of every word is
//! sorted in necklace order, and the byte preceding each rotation (cyclically
//! within its word) is emitted in that order. No sentinel or origin pointer
//! is needed to undo it.

use crate::config::BwstConfig;
use crate::locate::RotationBuckets;
use crate::lyndon::Factorization;
use tracing::debug;

impl RotationBuckets {
    /// Emit the transform output from sorted buckets.
    ///
    /// Buckets are read from byte 0 to 255, each in its sorted order. For a
    /// rotation at offset `o` of word `w` the output byte is `w[o - 1]`, or
    /// the last byte of `w` when `o == 0`.
    pub fn assemble(&self, factors: &Factorization<'_>) -> Vec<u8> {
        let mut output = Vec::with_capacity(factors.data().len());

        for rot in self.iter() {
            let word = factors.word(rot.word);
            let prev = match rot.offset {
                0 => word.len() - 1,
                o => o - 1,
            };
            output.push(word[prev]);
        }

        output
    }
}

/// Perform the forward transform with the default configuration.
///
/// # Example
///
/// ```rust
/// use oxibwst::{inverse_transform, transform};
///
/// let bwst = transform(b"banana");
/// assert_eq!(bwst, b"annbaa");
/// assert_eq!(inverse_transform(&bwst), b"banana");
/// ```
pub fn transform(data: &[u8]) -> Vec<u8> {
    transform_with_config(data, &BwstConfig::default())
}

/// Perform the forward transform with an explicit configuration.
///
/// The output is the same for every configuration.
pub fn transform_with_config(data: &[u8], config: &BwstConfig) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let factors = Factorization::with_trailing_run(data, config.trailing_run);
    let mut buckets = RotationBuckets::locate(&factors);
    buckets.sort(&factors, config);

    debug!(
        len = data.len(),
        words = factors.len(),
        parallel = config.use_parallel(data.len()),
        "bwst forward transform"
    );

    buckets.assemble(&factors)
}
