use glam::Vec3;

/// An ordered camera-space point cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    // The points in the point cloud.
    points: Vec<Vec3>,
}

impl PointCloud {
    /// Create a new point cloud from camera-space points.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Consume the point cloud and return its points.
    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }

    /// Get the minimum bound of the point cloud.
    pub fn min_bound(&self) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        self.points
            .iter()
            .fold(self.points[0], |acc, &point| acc.min(point))
    }

    /// Get the maximum bound of the point cloud.
    pub fn max_bound(&self) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        self.points
            .iter()
            .fold(self.points[0], |acc, &point| acc.max(point))
    }
}
