use facedepth_calibration::distortion::LensDistortionLookupTable;
use glam::{Vec2, Vec3};

use crate::cloud::PointCloud;
use crate::error::PointCloudError;
use crate::frame::DepthFrame;
use crate::ops;

/// Stateful point cloud generator with a set-then-get protocol.
///
/// Holds the most recently supplied depth frame and landmark set and
/// computes output on demand, for callers whose control flow delivers
/// frames and drains results in separate steps. The underlying computation
/// lives in [`crate::ops`]; callers that own both sides of the exchange can
/// use those pure functions directly.
///
/// Access from multiple threads must be serialized externally: the
/// processor is single-slot mutable state, and "latest frame wins".
#[derive(Debug, Default)]
pub struct PointCloudProcessor {
    lookup_table: Option<LensDistortionLookupTable>,
    pending: Option<(DepthFrame, Vec<Vec2>)>,
}

impl PointCloudProcessor {
    /// Creates a new processor without distortion correction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new processor that corrects landmarks with the given
    /// lookup table before unprojection.
    pub fn with_lookup_table(lookup_table: LensDistortionLookupTable) -> Self {
        Self {
            lookup_table: Some(lookup_table),
            pending: None,
        }
    }

    /// Whether a depth frame has been set and output can be requested.
    #[inline]
    pub fn is_prepared(&self) -> bool {
        self.pending.is_some()
    }

    /// Store a depth frame and its landmark set, replacing any previous
    /// pending input.
    ///
    /// An empty landmark set is valid; the next output request reflects
    /// this input.
    pub fn set_depth_frame(&mut self, frame: DepthFrame, landmarks: Vec<Vec2>) {
        self.pending = Some((frame, landmarks));
    }

    /// Compute the point cloud for the most recently set depth frame.
    ///
    /// Repeated calls without an intervening [`Self::set_depth_frame`]
    /// return pointwise equal clouds.
    ///
    /// # Errors
    ///
    /// Returns [`PointCloudError::NotPrepared`] if no depth frame has ever
    /// been set.
    pub fn get_output(&self) -> Result<PointCloud, PointCloudError> {
        let (frame, _) = self.pending.as_ref().ok_or(PointCloudError::NotPrepared)?;
        Ok(ops::compute_point_cloud(frame))
    }

    /// Compute camera-space positions for the pending landmark set,
    /// corrected for lens distortion when the processor holds a lookup
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`PointCloudError::NotPrepared`] if no depth frame has ever
    /// been set.
    pub fn landmark_output(&self) -> Result<Vec<Vec3>, PointCloudError> {
        let (frame, landmarks) = self.pending.as_ref().ok_or(PointCloudError::NotPrepared)?;
        Ok(ops::unproject_landmarks(
            frame,
            landmarks,
            self.lookup_table.as_ref(),
        ))
    }

    /// Drop any pending input, returning to the unprepared state.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
