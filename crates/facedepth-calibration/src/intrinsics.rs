use serde::{Deserialize, Serialize};

use crate::distortion::LensDistortionLookupTable;
use crate::error::CalibrationError;
use crate::types::ImageSize;

/// Represents the intrinsic parameters of a pinhole camera
///
/// # Fields
///
/// * `fx` - The focal length in the x direction
/// * `fy` - The focal length in the y direction
/// * `cx` - The x coordinate of the principal point
/// * `cy` - The y coordinate of the principal point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// The focal length in the x direction
    pub fx: f32,
    /// The focal length in the y direction
    pub fy: f32,
    /// The x coordinate of the principal point
    pub cx: f32,
    /// The y coordinate of the principal point
    pub cy: f32,
}

impl CameraIntrinsics {
    /// Creates a new CameraIntrinsics with the given parameters.
    pub fn new(fx: f32, fy: f32, cx: f32, cy: f32) -> Self {
        Self { fx, fy, cx, cy }
    }

    /// Returns the camera matrix as a 3x3 row-major array.
    pub fn matrix(&self) -> [[f32; 3]; 3] {
        [
            [self.fx, 0.0, self.cx],
            [0.0, self.fy, self.cy],
            [0.0, 0.0, 1.0],
        ]
    }

    /// Bring intrinsics measured at `reference_width` into the pixel grid of
    /// a map with `target_width` columns.
    ///
    /// Depth maps are typically delivered at a lower resolution than the
    /// video frames the intrinsic matrix references, so the focal lengths
    /// and principal point are divided by the width ratio before
    /// unprojection.
    ///
    /// # Errors
    ///
    /// Returns an error if `target_width` is zero.
    pub fn scaled_to_width(
        &self,
        reference_width: f32,
        target_width: usize,
    ) -> Result<Self, CalibrationError> {
        if target_width == 0 {
            return Err(CalibrationError::InvalidTargetWidth);
        }
        let ratio = reference_width / target_width as f32;
        Ok(Self {
            fx: self.fx / ratio,
            fy: self.fy / ratio,
            cx: self.cx / ratio,
            cy: self.cy / ratio,
        })
    }
}

/// Per-device camera calibration record.
///
/// Bundles the intrinsic matrix, the image dimensions it was measured at,
/// and the lens distortion lookup table when the device provides one.
/// Captured once per recording session and persisted alongside it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraCalibration {
    /// The intrinsic matrix, in `reference_size` pixel coordinates.
    pub intrinsics: CameraIntrinsics,
    /// The image dimensions the intrinsic matrix references.
    pub reference_size: ImageSize,
    /// The lens distortion lookup table, if the device is calibrated for it.
    pub lens_distortion: Option<LensDistortionLookupTable>,
}
