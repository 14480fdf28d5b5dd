//! Magnifying lens camera orientation

use crate::spatial::{Point3D, Pose, Quaternion};

/// Material parameter receiving the lens roll
pub const ROTATION_PARAM: &str = "_Rotation";

/// Per-frame output for the lens renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensFrame {
    /// Orientation for the auxiliary lens camera
    pub camera_rotation: Quaternion,
    /// Value for [`ROTATION_PARAM`], radians
    pub rotation_param: f32,
}

impl Default for LensFrame {
    fn default() -> Self {
        Self {
            camera_rotation: Quaternion::IDENTITY,
            rotation_param: 0.0,
        }
    }
}

/// Points a lens camera away from the viewer and tracks the lens roll
#[derive(Debug, Clone, Default)]
pub struct LensRig {
    last: LensFrame,
}

impl LensRig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, lens: &Pose, main_camera: Point3D) -> LensFrame {
        let to_viewer = main_camera - lens.position;
        let camera_rotation = Quaternion::look_rotation(-to_viewer.normalize());

        let lens_up = lens.up();
        let roll = lens_up.x.atan2(lens_up.y);

        self.last = LensFrame {
            camera_rotation,
            rotation_param: -roll,
        };
        self.last
    }

    /// Most recent frame
    pub fn frame(&self) -> &LensFrame {
        &self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Vector3D;
    use std::f32::consts::PI;

    #[test]
    fn test_camera_faces_away_from_viewer() {
        let mut rig = LensRig::new();
        let lens = Pose::from_position(Point3D::new(0.0, 1.5, 0.5));
        let frame = rig.update(&lens, Point3D::new(0.0, 1.5, 0.0));

        let forward = frame.camera_rotation.forward();
        assert!((forward - Vector3D::FORWARD).magnitude() < 0.0001);
        assert_eq!(frame.rotation_param, 0.0);
    }

    #[test]
    fn test_rotation_param_tracks_roll() {
        let mut rig = LensRig::new();
        // Roll about forward by +30deg tips up toward -X
        let roll = Quaternion::from_axis_angle(Vector3D::FORWARD, PI / 6.0);
        let lens = Pose::new(Point3D::new(0.0, 0.0, 1.0), roll);
        let frame = rig.update(&lens, Point3D::ORIGIN);

        let up = lens.up();
        assert!((frame.rotation_param + up.x.atan2(up.y)).abs() < 0.0001);
        assert!((frame.rotation_param - PI / 6.0).abs() < 0.0001);
        assert_eq!(rig.frame(), &frame);
    }
}
