#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Point cloud container type.
pub mod cloud;

/// Error types for the pointcloud crate.
pub mod error;

/// Depth frame type.
pub mod frame;

/// Unprojection operations on depth frames.
pub mod ops;

/// Stateful set-then-get point cloud adapter.
pub mod processor;

/// Buffer and texture binding indices shared with the render backend.
pub mod shader_types;

pub use error::PointCloudError;
