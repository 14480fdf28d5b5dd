//! Spatial primitives for world-space poses
//!
//! Uses a right-handed coordinate system:
//! - X: Right (+) / Left (-)
//! - Y: Up (+) / Down (-)
//! - Z: Forward (+) / Backward (-)

mod point3d;
mod pose;
mod quaternion;
mod vector3d;

pub use point3d::Point3D;
pub use pose::Pose;
pub use quaternion::Quaternion;
pub use vector3d::Vector3D;
