//! Lyndon factorization (Duval's algorithm).
//!
//! Every byte string splits uniquely into a non-increasing sequence of
//! Lyndon words, each strictly smaller than all of its own nontrivial
//! rotations. The factorization is computed in linear time and reported as
//! a boundary list, so no word is ever copied.

/// How a trailing run of one repeated byte is factored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingRun {
    /// Keep a trailing run `c^r` as one word.
    ///
    /// The word is not a Lyndon word when `r > 1`, but it has the same
    /// infinite repetition as `r` copies of `c`, so the transform output is
    /// unchanged while the rotation set shrinks to one word.
    #[default]
    Merge,
    /// Emit a trailing run as `r` single-byte words (exact factorization).
    Split,
}

/// Compute the factor boundaries of `data`.
///
/// The result starts at `0` and ends at `data.len()`; word `i` is
/// `data[bounds[i]..bounds[i + 1]]`. Empty input yields `[0]`.
///
/// # Example
///
/// ```rust
/// use oxibwst::lyndon::{TrailingRun, factor_bounds};
///
/// assert_eq!(factor_bounds(b"banana", TrailingRun::Split), [0, 1, 3, 5, 6]);
/// assert_eq!(factor_bounds(b"zaaa", TrailingRun::Split), [0, 1, 2, 3, 4]);
/// assert_eq!(factor_bounds(b"zaaa", TrailingRun::Merge), [0, 1, 4]);
/// ```
pub fn factor_bounds(data: &[u8], trailing: TrailingRun) -> Vec<usize> {
    let n = data.len();
    let mut bounds = vec![0];
    let mut start = 0;

    while start < n {
        // `k` trails `m` by one period of the current candidate word.
        let mut k = start;
        let mut m = start + 1;
        while m < n && data[k] <= data[m] {
            if data[k] < data[m] {
                k = start;
            } else {
                k += 1;
            }
            m += 1;
        }

        let period = m - k;
        if trailing == TrailingRun::Merge && m == n && period == 1 {
            bounds.push(n);
            break;
        }

        // Emit every full repetition; a partial one is factored again.
        while start <= k {
            start += period;
            bounds.push(start);
        }
    }

    bounds
}

/// Check whether `word` is a Lyndon word.
///
/// The empty string is not a Lyndon word.
pub fn is_lyndon_word(word: &[u8]) -> bool {
    if word.is_empty() {
        return false;
    }
    (1..word.len()).all(|r| word.iter().lt(word[r..].iter().chain(&word[..r])))
}

/// A byte string together with its Lyndon factorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization<'a> {
    data: &'a [u8],
    bounds: Vec<usize>,
}

impl<'a> Factorization<'a> {
    /// Factor `data` exactly.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_trailing_run(data, TrailingRun::Split)
    }

    /// Factor `data` with the given trailing-run policy.
    pub fn with_trailing_run(data: &'a [u8], trailing: TrailingRun) -> Self {
        Self {
            data,
            bounds: factor_bounds(data, trailing),
        }
    }

    /// The factored input.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The boundary list, including both endpoints.
    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Whether there are no words (empty input).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn word(&self, index: usize) -> &'a [u8] {
        &self.data[self.bounds[index]..self.bounds[index + 1]]
    }

    /// Iterate over the words in input order.
    pub fn words(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        let data = self.data;
        self.bounds.windows(2).map(move |w| &data[w[0]..w[1]])
    }
}

/// Split `data` into its Lyndon factors.
///
/// The factors borrow from `data` and concatenate back to it.
///
/// # Example
///
/// ```rust
/// use oxibwst::lyndon_factors;
///
/// let factors = lyndon_factors(b"banana");
/// assert_eq!(factors, [&b"b"[..], b"an", b"an", b"a"]);
/// ```
pub fn lyndon_factors(data: &[u8]) -> Vec<&[u8]> {
    Factorization::new(data).words().collect()
}

/// Split `data` into mutable Lyndon factors.
///
/// Writing through a factor writes the corresponding region of `data`.
pub fn lyndon_factors_mut(data: &mut [u8]) -> Vec<&mut [u8]> {
    let bounds = factor_bounds(data, TrailingRun::Split);
    let mut factors = Vec::with_capacity(bounds.len() - 1);
    let mut rest = data;

    for w in bounds.windows(2) {
        let (word, tail) = std::mem::take(&mut rest).split_at_mut(w[1] - w[0]);
        factors.push(word);
        rest = tail;
    }

    factors
}
