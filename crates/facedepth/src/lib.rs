#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use facedepth_calibration as calibration;

#[doc(inline)]
pub use facedepth_pointcloud as pointcloud;
