//! Rotation locator.
//!
//! Every input position starts exactly one rotation of the word that
//! contains it. Rotations are grouped by their first byte, so sorting each
//! group on its own sorts all of them.

use crate::lyndon::Factorization;

/// A rotation of one Lyndon word, identified without materializing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    /// Index of the word in its factorization.
    pub word: usize,
    /// Offset of the rotation's first byte within the word.
    pub offset: usize,
}

impl Rotation {
    /// Create a rotation reference.
    pub fn new(word: usize, offset: usize) -> Self {
        Self { word, offset }
    }
}

/// All rotations of a factorization, bucketed by first byte.
#[derive(Debug, Clone)]
pub struct RotationBuckets {
    pub(crate) buckets: [Vec<Rotation>; 256],
}

impl RotationBuckets {
    /// Record one rotation per byte of the factored input.
    ///
    /// Within a bucket, rotations appear in input order.
    pub fn locate(factors: &Factorization<'_>) -> Self {
        let mut counts = [0usize; 256];
        for &byte in factors.data() {
            counts[byte as usize] += 1;
        }

        let mut buckets: [Vec<Rotation>; 256] =
            std::array::from_fn(|byte| Vec::with_capacity(counts[byte]));

        for (word, bytes) in factors.words().enumerate() {
            for (offset, &byte) in bytes.iter().enumerate() {
                buckets[byte as usize].push(Rotation::new(word, offset));
            }
        }

        Self { buckets }
    }

    /// The rotations starting with `byte`.
    pub fn bucket(&self, byte: u8) -> &[Rotation] {
        &self.buckets[byte as usize]
    }

    /// Total number of rotations.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether there are no rotations.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Iterate over all rotations, bucket 0 first.
    pub fn iter(&self) -> impl Iterator<Item = &Rotation> {
        self.buckets.iter().flatten()
    }
}
