//! # OxiBWST Core
//!
//! Core components shared by the OxiBWST crates.
//!
//! - [`traits`]: the [`BlockTransform`] trait for reversible block transforms
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use oxibwst_core::{BwstError, verify_roundtrip};
//!
//! assert!(verify_roundtrip(b"banana", b"banana").is_ok());
//! assert!(matches!(
//!     verify_roundtrip(b"banana", b"bandana"),
//!     Err(BwstError::RoundTripMismatch { offset: 3, .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-exports for convenience
pub use error::{BwstError, Result};
pub use traits::{BlockTransform, verify_roundtrip};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BwstError, Result};
    pub use crate::traits::{BlockTransform, verify_roundtrip};
}
