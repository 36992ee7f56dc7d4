//! Cyclic rotation sorter.
//!
//! Rotations are ordered by their infinite repetition (necklace order), so
//! a rotation of `w` compares as `w^∞` read from its offset. Buckets are
//! independent and may be sorted in parallel.

use crate::config::BwstConfig;
use crate::locate::{Rotation, RotationBuckets};
use crate::lyndon::Factorization;
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compare two rotations by the infinite repetition of their words.
///
/// `a` is read cyclically from `a_offset` and `b` from `b_offset`. Two
/// periodic sequences with periods `|a|` and `|b|` that agree for
/// `lcm(|a|, |b|)` positions agree forever, so at most that many bytes are
/// compared. Offsets are taken modulo the word length. Empty words compare
/// by length only.
///
/// # Example
///
/// ```rust
/// use oxibwst::cyclic_cmp;
/// use std::cmp::Ordering;
///
/// // AXYAAXYA... < AXYAXYAX...
/// assert_eq!(cyclic_cmp(b"AXYA", 0, b"AXY", 0), Ordering::Less);
/// // "ab" and "abab" repeat to the same sequence.
/// assert_eq!(cyclic_cmp(b"ab", 0, b"abab", 2), Ordering::Equal);
/// ```
pub fn cyclic_cmp(a: &[u8], a_offset: usize, b: &[u8], b_offset: usize) -> Ordering {
    if a.is_empty() || b.is_empty() {
        return a.len().cmp(&b.len());
    }

    let span = lcm(a.len(), b.len());
    let mut x = a_offset % a.len();
    let mut y = b_offset % b.len();

    for _ in 0..span {
        match a[x].cmp(&b[y]) {
            Ordering::Equal => {}
            other => return other,
        }
        x += 1;
        if x == a.len() {
            x = 0;
        }
        y += 1;
        if y == b.len() {
            y = 0;
        }
    }

    Ordering::Equal
}

/// Whether rotation `(a, a_offset)` sorts strictly before `(b, b_offset)`.
pub fn cyclic_less(a: &[u8], a_offset: usize, b: &[u8], b_offset: usize) -> bool {
    cyclic_cmp(a, a_offset, b, b_offset) == Ordering::Less
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// Both arguments are non-zero.
fn lcm(a: usize, b: usize) -> usize {
    (a / gcd(a, b)).saturating_mul(b)
}

/// Sort one bucket in necklace order.
///
/// The sort is stable, so rotations with identical infinite repetitions
/// keep their input order.
pub fn sort_bucket(bucket: &mut [Rotation], factors: &Factorization<'_>) {
    if bucket.len() < 2 {
        return;
    }
    bucket.sort_by(|p, q| {
        cyclic_cmp(
            factors.word(p.word),
            p.offset,
            factors.word(q.word),
            q.offset,
        )
    });
}

impl RotationBuckets {
    /// Sort every bucket in necklace order.
    ///
    /// With the `parallel` feature and a config that allows it, buckets are
    /// sorted on the rayon thread pool; the call returns once all of them
    /// are done. The result is the same either way.
    pub fn sort(&mut self, factors: &Factorization<'_>, config: &BwstConfig) {
        if config.use_parallel(factors.data().len()) {
            tracing::trace!(len = factors.data().len(), "sorting buckets in parallel");
            self.sort_parallel(factors);
        } else {
            self.sort_sequential(factors);
        }
    }

    fn sort_sequential(&mut self, factors: &Factorization<'_>) {
        for bucket in &mut self.buckets {
            sort_bucket(bucket, factors);
        }
    }

    #[cfg(feature = "parallel")]
    fn sort_parallel(&mut self, factors: &Factorization<'_>) {
        self.buckets
            .as_mut_slice()
            .par_iter_mut()
            .for_each(|bucket| sort_bucket(bucket, factors));
    }

    #[cfg(not(feature = "parallel"))]
    fn sort_parallel(&mut self, factors: &Factorization<'_>) {
        self.sort_sequential(factors);
    }
}
