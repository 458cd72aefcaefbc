//! Binding slot indices shared between the host-side data producer and the
//! GPU compute/render kernels. These values are the single source of truth
//! for both sides of the handoff; a mismatch reads the wrong buffer with no
//! runtime error, so the numeric values are pinned by tests and must never
//! be duplicated as literals elsewhere.

/// Buffer argument slots for the point cloud compute kernel.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferIndex {
    /// Depth-to-grayscale converter parameters.
    ConverterParameters = 0,
    /// Landmark positions input, one vec2 per landmark.
    LandmarksInput = 1,
    /// Camera intrinsic 3x3 matrix input.
    CameraIntrinsicsInput = 2,
    /// Point cloud output, one vec3 per landmark.
    PointCloudOutput = 3,
}

/// Texture argument slots for the compute kernels.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureIndex {
    /// The depth map input texture.
    DepthInput = 0,
    /// The rendered grayscale output texture.
    GrayscaleOutput = 1,
}

/// Vertex stage argument slots for the point cloud render pipeline.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexInputIndex {
    /// Landmark positions.
    Landmarks = 0,
    /// Camera intrinsic matrix.
    CameraIntrinsics = 1,
    /// Point cloud vertex buffer.
    PointCloud = 2,
}

impl BufferIndex {
    /// The raw binding slot value.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }
}

impl TextureIndex {
    /// The raw binding slot value.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }
}

impl VertexInputIndex {
    /// The raw binding slot value.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }
}
