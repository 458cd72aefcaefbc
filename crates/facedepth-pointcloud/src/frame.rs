use facedepth_calibration::intrinsics::{CameraCalibration, CameraIntrinsics};

use crate::error::PointCloudError;

/// A single captured depth frame.
///
/// A row-major grid of per-pixel depth values in meters, together with the
/// camera intrinsic parameters valid for that frame, already expressed in
/// the depth map's pixel coordinate system. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct DepthFrame {
    /// The width of the depth map
    width: usize,
    /// The height of the depth map
    height: usize,
    /// The depth values, row-major
    depth: Vec<f32>,
    /// The intrinsics for unprojecting this frame
    intrinsics: CameraIntrinsics,
}

impl DepthFrame {
    /// Creates a new DepthFrame from a depth grid and its intrinsics.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the depth data length
    /// does not equal `width * height`.
    pub fn new(
        width: usize,
        height: usize,
        depth: Vec<f32>,
        intrinsics: CameraIntrinsics,
    ) -> Result<Self, PointCloudError> {
        if width == 0 || height == 0 {
            return Err(PointCloudError::InvalidFrameSize(width, height));
        }
        if depth.len() != width * height {
            return Err(PointCloudError::InvalidDepthLength(
                depth.len(),
                width * height,
            ));
        }
        Ok(Self {
            width,
            height,
            depth,
            intrinsics,
        })
    }

    /// Creates a new DepthFrame taking its intrinsics from a device
    /// calibration record, rescaled from the calibration's reference
    /// dimensions to this frame's width.
    pub fn with_calibration(
        width: usize,
        height: usize,
        depth: Vec<f32>,
        calibration: &CameraCalibration,
    ) -> Result<Self, PointCloudError> {
        let intrinsics = calibration
            .intrinsics
            .scaled_to_width(calibration.reference_size.width as f32, width)?;
        Self::new(width, height, depth, intrinsics)
    }

    /// The width of the depth map in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the depth map in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The intrinsics used to unproject this frame.
    #[inline]
    pub fn intrinsics(&self) -> &CameraIntrinsics {
        &self.intrinsics
    }

    /// Get the depth value at a specific pixel.
    #[inline]
    pub fn depth_at(&self, u: usize, v: usize) -> f32 {
        self.depth[v * self.width + u]
    }

    /// The raw depth values, row-major.
    #[inline]
    pub fn depth(&self) -> &[f32] {
        &self.depth
    }
}
