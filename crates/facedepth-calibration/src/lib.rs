#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Lens distortion lookup tables and point correction.
pub mod distortion;

/// Error types for the calibration crate.
pub mod error;

/// Pinhole camera intrinsics and per-device calibration records.
pub mod intrinsics;

/// Common calibration data types.
pub mod types;

pub use error::CalibrationError;
