//! World-space pose: position plus orientation

use serde::{Deserialize, Serialize};

use super::{Point3D, Quaternion, Vector3D};

/// A position and an orientation in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point3D,
    pub rotation: Quaternion,
}

impl Pose {
    /// Origin, no rotation
    pub const IDENTITY: Self = Self {
        position: Point3D::ORIGIN,
        rotation: Quaternion::IDENTITY,
    };

    pub fn new(position: Point3D, rotation: Quaternion) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Point3D) -> Self {
        Self::new(position, Quaternion::IDENTITY)
    }

    pub fn up(&self) -> Vector3D {
        self.rotation.up()
    }

    pub fn forward(&self) -> Vector3D {
        self.rotation.forward()
    }

    /// Same orientation, shifted by `offset`
    pub fn translated(&self, offset: Vector3D) -> Self {
        Self::new(self.position + offset, self.rotation)
    }

    /// Apply `delta` on top of the current orientation (world-space rotation)
    pub fn rotated(&self, delta: Quaternion) -> Self {
        Self::new(self.position, (delta * self.rotation).normalize())
    }
}
