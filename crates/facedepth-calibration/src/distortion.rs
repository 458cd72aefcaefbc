use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::CalibrationError;
use crate::types::ImageSize;

/// A radially sampled lens distortion lookup table for one device.
///
/// The table holds magnification factors sampled at evenly spaced radii from
/// the optical center out to the farthest corner of the reference image.
/// It is calibration data: built once per device and read-only afterwards,
/// so a shared reference can be used concurrently from any number of threads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LensDistortionLookupTable {
    /// Magnification factors, index 0 at the optical center.
    magnifications: Vec<f32>,
    /// The distortion center in reference image coordinates.
    optical_center: Vec2,
    /// The image dimensions the table was calibrated against.
    reference_size: ImageSize,
}

impl LensDistortionLookupTable {
    /// Create a new lookup table from its calibration data.
    ///
    /// # Errors
    ///
    /// Returns an error if the table has fewer than two samples (linear
    /// interpolation needs a bracket) or the reference size has a zero
    /// dimension.
    pub fn new(
        magnifications: Vec<f32>,
        optical_center: Vec2,
        reference_size: ImageSize,
    ) -> Result<Self, CalibrationError> {
        if magnifications.len() < 2 {
            return Err(CalibrationError::InvalidLookupTable(magnifications.len()));
        }
        if reference_size.width == 0 || reference_size.height == 0 {
            return Err(CalibrationError::InvalidReferenceSize(
                reference_size.width,
                reference_size.height,
            ));
        }
        Ok(Self {
            magnifications,
            optical_center,
            reference_size,
        })
    }

    /// The number of magnification samples in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.magnifications.len()
    }

    /// Always false, a valid table has at least two samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.magnifications.is_empty()
    }

    /// The distortion center in reference image coordinates.
    #[inline]
    pub fn optical_center(&self) -> Vec2 {
        self.optical_center
    }

    /// The image dimensions the table was calibrated against.
    #[inline]
    pub fn reference_size(&self) -> ImageSize {
        self.reference_size
    }

    /// Distance from the optical center to the farthest corner of the
    /// reference image, the radius the last table sample corresponds to.
    fn max_radius(&self) -> f32 {
        let center = self.optical_center;
        let delta_x = center.x.max(self.reference_size.width as f32 - center.x);
        let delta_y = center.y.max(self.reference_size.height as f32 - center.y);
        (delta_x * delta_x + delta_y * delta_y).sqrt()
    }

    /// Magnification for a radius normalized to `[0, 1]`.
    ///
    /// A position falling exactly on a sample reads it directly, otherwise
    /// the two bracketing samples are linearly interpolated. Radii past the
    /// covered range clamp to the last sample.
    fn magnification_at(&self, normalized_radius: f32) -> f32 {
        let last = self.magnifications.len() - 1;
        let position = normalized_radius * last as f32;
        if position <= 0.0 {
            return self.magnifications[0];
        }
        if position >= last as f32 {
            return self.magnifications[last];
        }
        let index = position as usize;
        let frac = position - index as f32;
        let lower = self.magnifications[index];
        let upper = self.magnifications[index + 1];
        lower + frac * (upper - lower)
    }

    /// Correct a point in reference image coordinates for lens distortion.
    ///
    /// The vector from the optical center to the point is scaled by
    /// `1 + magnification`, where the magnification is read from the table
    /// at the point's normalized radius. A point at the optical center is
    /// returned unchanged.
    pub fn correct_point(&self, point: Vec2) -> Vec2 {
        let offset = point - self.optical_center;
        let radius = offset.length();
        if radius == 0.0 {
            return point;
        }
        let magnification = self.magnification_at(radius / self.max_radius());
        self.optical_center + offset * (1.0 + magnification)
    }

    /// Correct an ordered sequence of points, preserving order.
    pub fn correct_points(&self, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|&point| self.correct_point(point)).collect()
    }
}
