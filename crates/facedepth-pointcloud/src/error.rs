use facedepth_calibration::CalibrationError;

/// An error type for the pointcloud crate.
#[derive(thiserror::Error, Debug)]
pub enum PointCloudError {
    /// Error when requesting output before any depth frame was set.
    #[error("No depth frame has been set")]
    NotPrepared,

    /// Error when the depth frame has a zero dimension.
    #[error("Invalid depth frame size ({0}x{1})")]
    InvalidFrameSize(usize, usize),

    /// Error when the depth data length does not match the frame size.
    #[error("Depth data length ({0}) does not match the frame size ({1})")]
    InvalidDepthLength(usize, usize),

    /// Error from the camera calibration data.
    #[error("Invalid camera calibration data")]
    Calibration(#[from] CalibrationError),
}
