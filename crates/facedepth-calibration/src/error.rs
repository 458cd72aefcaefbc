/// An error type for the calibration crate.
#[derive(thiserror::Error, Debug)]
pub enum CalibrationError {
    /// Error when the lookup table has too few samples to interpolate.
    #[error("Lens distortion lookup table needs at least 2 samples, got {0}")]
    InvalidLookupTable(usize),

    /// Error when the reference image size has a zero dimension.
    #[error("Invalid reference image size ({0}x{1})")]
    InvalidReferenceSize(usize, usize),

    /// Error when rescaling intrinsics to a zero-width target.
    #[error("Cannot rescale intrinsics to a zero target width")]
    InvalidTargetWidth,
}
