//! Core traits for reversible block transforms.
//!
//! A block transform permutes a whole buffer at once and can be undone
//! from its output alone. Implementations are infallible; the only
//! fallible step is checking that an inverse really undid a forward pass.

use crate::error::{BwstError, Result};

/// A reversible, length-preserving transform over a complete byte block.
pub trait BlockTransform {
    /// Short human-readable name of the transform.
    fn name(&self) -> &'static str;

    /// Apply the forward transform.
    fn forward(&self, input: &[u8]) -> Vec<u8>;

    /// Apply the inverse transform.
    ///
    /// Input that was not produced by [`forward`](Self::forward) is not
    /// detected; the result is deterministic but otherwise unspecified.
    fn inverse(&self, input: &[u8]) -> Vec<u8>;

    /// Apply the forward transform and check that inverting it restores
    /// `input` exactly.
    fn forward_verified(&self, input: &[u8]) -> Result<Vec<u8>> {
        let output = self.forward(input);
        let recovered = self.inverse(&output);
        verify_roundtrip(input, &recovered).inspect_err(|err| {
            tracing::warn!(transform = self.name(), %err, "round-trip verification failed");
        })?;
        Ok(output)
    }
}

/// Compare a recovered buffer against the original.
///
/// Returns the first difference as an error.
pub fn verify_roundtrip(original: &[u8], recovered: &[u8]) -> Result<()> {
    if let Some(offset) = original
        .iter()
        .zip(recovered)
        .position(|(expected, found)| expected != found)
    {
        return Err(BwstError::round_trip_mismatch(
            offset,
            original[offset],
            recovered[offset],
        ));
    }

    if original.len() != recovered.len() {
        return Err(BwstError::length_mismatch(original.len(), recovered.len()));
    }

    Ok(())
}
