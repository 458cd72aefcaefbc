use facedepth_calibration::distortion::LensDistortionLookupTable;
use facedepth_calibration::intrinsics::CameraIntrinsics;
use glam::{Vec2, Vec3};

use crate::cloud::PointCloud;
use crate::frame::DepthFrame;

/// Whether a depth sample can produce a point.
#[inline]
fn is_valid_depth(depth: f32) -> bool {
    depth.is_finite() && depth > 0.0
}

/// Back-project a pixel coordinate with its depth into camera space.
///
/// `x = (u - cx) * depth / fx`, `y = (v - cy) * depth / fy`, `z = depth`,
/// with depth in meters.
#[inline]
pub fn unproject(u: f32, v: f32, depth: f32, intrinsics: &CameraIntrinsics) -> Vec3 {
    Vec3::new(
        (u - intrinsics.cx) * depth / intrinsics.fx,
        (v - intrinsics.cy) * depth / intrinsics.fy,
        depth,
    )
}

/// Convert a depth frame into a camera-space point cloud.
///
/// Pixels are scanned in row-major order, one output point per valid depth
/// sample. Invalid samples (non-finite or zero/negative depth) are skipped,
/// so the output can be shorter than `width * height`; a frame with only
/// valid samples yields exactly `width * height` points.
pub fn compute_point_cloud(frame: &DepthFrame) -> PointCloud {
    let intrinsics = frame.intrinsics();
    let mut points = Vec::with_capacity(frame.width() * frame.height());
    for v in 0..frame.height() {
        for u in 0..frame.width() {
            let depth = frame.depth_at(u, v);
            if !is_valid_depth(depth) {
                continue;
            }
            points.push(unproject(u as f32, v as f32, depth, intrinsics));
        }
    }
    PointCloud::new(points)
}

/// Compute camera-space positions for an ordered set of 2D landmarks.
///
/// Each landmark is optionally corrected for lens distortion, its depth is
/// sampled at the nearest pixel (clamped to the frame bounds), and the
/// corrected position is unprojected with the frame's intrinsics. A landmark
/// over an invalid depth sample yields the zero vector, so the output always
/// has one entry per input landmark and downstream per-frame records keep a
/// fixed arity.
pub fn unproject_landmarks(
    frame: &DepthFrame,
    landmarks: &[Vec2],
    lookup_table: Option<&LensDistortionLookupTable>,
) -> Vec<Vec3> {
    let intrinsics = frame.intrinsics();
    landmarks
        .iter()
        .map(|&landmark| {
            let point = match lookup_table {
                Some(table) => table.correct_point(landmark),
                None => landmark,
            };
            let u = (point.x.round() as isize).clamp(0, frame.width() as isize - 1) as usize;
            let v = (point.y.round() as isize).clamp(0, frame.height() as isize - 1) as usize;
            let depth = frame.depth_at(u, v);
            if is_valid_depth(depth) {
                unproject(point.x, point.y, depth, intrinsics)
            } else {
                log::warn!(
                    "no valid depth sample for landmark at ({:.1}, {:.1})",
                    point.x,
                    point.y
                );
                Vec3::ZERO
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use facedepth_calibration::types::ImageSize;

    fn centered_intrinsics(width: usize, height: usize) -> CameraIntrinsics {
        CameraIntrinsics::new(
            500.0,
            500.0,
            width as f32 / 2.0,
            height as f32 / 2.0,
        )
    }

    #[test]
    fn test_unproject_principal_point() {
        let intrinsics = CameraIntrinsics::new(500.0, 500.0, 320.0, 240.0);
        let point = unproject(320.0, 240.0, 1.5, &intrinsics);
        assert_eq!(point, Vec3::new(0.0, 0.0, 1.5));
    }

    #[test]
    fn test_unproject_off_center() {
        let intrinsics = CameraIntrinsics::new(500.0, 250.0, 320.0, 240.0);
        let point = unproject(420.0, 140.0, 2.0, &intrinsics);
        assert_relative_eq!(point.x, 100.0 * 2.0 / 500.0);
        assert_relative_eq!(point.y, -100.0 * 2.0 / 250.0);
        assert_eq!(point.z, 2.0);
    }

    #[test]
    fn test_constant_depth_grid() {
        // every point of a constant-depth frame must sit on the z = k plane
        let frame =
            DepthFrame::new(4, 4, vec![0.75; 16], centered_intrinsics(4, 4)).unwrap();
        let cloud = compute_point_cloud(&frame);
        assert_eq!(cloud.len(), 16);
        for point in cloud.points() {
            assert_eq!(point.z, 0.75);
        }
    }

    #[test]
    fn test_invalid_samples_are_skipped() {
        let mut depth = vec![1.0; 16];
        depth[0] = 0.0;
        depth[5] = f32::NAN;
        depth[10] = -2.0;
        let frame = DepthFrame::new(4, 4, depth, centered_intrinsics(4, 4)).unwrap();
        let cloud = compute_point_cloud(&frame);
        assert_eq!(cloud.len(), 13);
        for point in cloud.points() {
            assert_eq!(point.z, 1.0);
        }
    }

    #[test]
    fn test_row_major_scan_order() {
        let frame =
            DepthFrame::new(2, 2, vec![1.0; 4], CameraIntrinsics::new(1.0, 1.0, 0.0, 0.0))
                .unwrap();
        let cloud = compute_point_cloud(&frame);
        let points = cloud.points();
        assert_eq!(points[0], Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(points[1], Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(points[2], Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(points[3], Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_landmarks_keep_arity_with_zero_sentinel() {
        let mut depth = vec![2.0; 16];
        depth[0] = 0.0;
        let frame = DepthFrame::new(4, 4, depth, centered_intrinsics(4, 4)).unwrap();
        let landmarks = vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0)];
        let points = unproject_landmarks(&frame, &landmarks, None);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Vec3::ZERO);
        assert_eq!(points[1], Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_landmarks_clamp_to_frame_bounds() {
        let frame =
            DepthFrame::new(4, 4, vec![1.0; 16], centered_intrinsics(4, 4)).unwrap();
        // samples the nearest in-bounds pixel, unprojects the raw position
        let points = unproject_landmarks(&frame, &[Vec2::new(10.0, -3.0)], None);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].z, 1.0);
    }

    #[test]
    fn test_landmarks_with_distortion_correction() {
        let table = LensDistortionLookupTable::new(
            vec![0.0, 0.5],
            Vec2::ZERO,
            ImageSize {
                width: 4,
                height: 4,
            },
        )
        .unwrap();
        let frame =
            DepthFrame::new(4, 4, vec![1.0; 16], CameraIntrinsics::new(1.0, 1.0, 0.0, 0.0))
                .unwrap();
        // the corrected position, not the raw landmark, is unprojected
        let points = unproject_landmarks(&frame, &[Vec2::new(2.0, 2.0)], Some(&table));
        let corrected = table.correct_point(Vec2::new(2.0, 2.0));
        assert_relative_eq!(points[0].x, corrected.x);
        assert_relative_eq!(points[0].y, corrected.y);
    }
}
