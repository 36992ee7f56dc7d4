//! Inverse Burrows-Wheeler-Scott transform.
//!
//! The sorted column and the transform output are linked rank by rank, as
//! in the classic BWT. Following the links splits the positions into
//! cycles, one per Lyndon word; reading each cycle from its lowest rank
//! gives the word itself. Writing the words in non-increasing order
//! restores the input.

use bitvec::prelude::*;
use tracing::debug;

/// Perform the inverse transform.
///
/// Every byte string of a given length is the transform of exactly one
/// string of that length, so any input is accepted. Input that did not
/// come from [`transform`](crate::transform) simply decodes to the string
/// whose transform it is.
///
/// # Example
///
/// ```rust
/// use oxibwst::inverse_transform;
///
/// assert_eq!(inverse_transform(b"annbaa"), b"banana");
/// ```
pub fn inverse_transform(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let n = data.len();

    // Count occurrences of each byte
    let mut counts = [0usize; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    // Sorted column: the first byte of every sorted rotation
    let mut sorted = Vec::with_capacity(n);
    let mut starts = [0usize; 256];
    for (byte, &count) in counts.iter().enumerate() {
        starts[byte] = sorted.len();
        sorted.extend(std::iter::repeat_n(byte as u8, count));
    }

    // links[rank] is the output position holding the same occurrence of the
    // byte at `rank` in the sorted column; occurrences of one byte are
    // claimed in increasing position order.
    let mut links = vec![0usize; n];
    let mut next = starts;
    for (pos, &byte) in data.iter().enumerate() {
        links[next[byte as usize]] = pos;
        next[byte as usize] += 1;
    }

    // Each cycle spells one word, stored as a range of `letters`.
    let mut visited = bitvec![0; n];
    let mut letters = Vec::with_capacity(n);
    let mut words: Vec<(usize, usize)> = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let begin = letters.len();
        let mut x = start;
        while !visited[x] {
            visited.set(x, true);
            letters.push(sorted[x]);
            x = links[x];
        }
        words.push((begin, letters.len()));
    }

    // Later cycles go first, then the list is put in non-decreasing order.
    words.reverse();
    let word = |&(begin, end): &(usize, usize)| &letters[begin..end];
    let reordered = !words.is_sorted_by(|a, b| word(a) <= word(b));
    if reordered {
        words.sort_by(|a, b| word(a).cmp(word(b)));
    }

    debug!(
        len = n,
        words = words.len(),
        reordered,
        "bwst inverse transform"
    );

    // The smallest word ends the output; larger words are placed leftwards.
    let mut output = vec![0u8; n];
    let mut end = n;
    for w in &words {
        let bytes = word(w);
        output[end - bytes.len()..end].copy_from_slice(bytes);
        end -= bytes.len();
    }

    output
}
