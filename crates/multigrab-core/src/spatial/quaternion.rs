//! Quaternion representation for 3D rotations

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use super::Vector3D;

/// Below this vector-part length a rotation is treated as having no axis
const AXIS_EPSILON: f32 = 1.0e-6;

/// A quaternion for representing 3D rotations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a quaternion rotating `angle_radians` about `axis`
    pub fn from_axis_angle(axis: Vector3D, angle_radians: f32) -> Self {
        let half_angle = angle_radians / 2.0;
        let sin_half = half_angle.sin();
        let normalized = axis.normalize();

        Self {
            x: normalized.x * sin_half,
            y: normalized.y * sin_half,
            z: normalized.z * sin_half,
            w: half_angle.cos(),
        }
    }

    /// Decompose into `(angle_radians, unit_axis)`.
    ///
    /// The angle lies in `[0, 2π]`. A rotation without a meaningful axis
    /// (identity, or numerically indistinguishable from it) reports +X.
    pub fn to_axis_angle(&self) -> (f32, Vector3D) {
        let q = self.normalize();
        let v = Vector3D::new(q.x, q.y, q.z);
        let sin_half = v.magnitude();
        let angle = 2.0 * sin_half.atan2(q.w);

        if sin_half < AXIS_EPSILON {
            (angle, Vector3D::RIGHT)
        } else {
            (angle, v / sin_half)
        }
    }

    /// Orientation whose forward (+Z) axis points along `forward`, keeping
    /// world up. Yaw is applied about Y after pitch about X, so the result
    /// never rolls. A zero direction yields the identity.
    pub fn look_rotation(forward: Vector3D) -> Self {
        let f = forward.normalize();
        if f.magnitude_squared() < AXIS_EPSILON {
            return Self::IDENTITY;
        }

        let yaw = f.x.atan2(f.z);
        let pitch = (-f.y).clamp(-1.0, 1.0).asin();
        Self::from_axis_angle(Vector3D::UP, yaw) * Self::from_axis_angle(Vector3D::RIGHT, pitch)
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Unit-length copy; a degenerate quaternion collapses to identity
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self::new(self.x / mag, self.y / mag, self.z / mag, self.w / mag)
        } else {
            Self::IDENTITY
        }
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn inverse(&self) -> Self {
        let mag_sq = self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w;
        if mag_sq > 0.0 {
            let c = self.conjugate();
            let inv_mag_sq = 1.0 / mag_sq;
            Self::new(c.x * inv_mag_sq, c.y * inv_mag_sq, c.z * inv_mag_sq, c.w * inv_mag_sq)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotate a vector by this quaternion
    pub fn rotate_vector(&self, v: Vector3D) -> Vector3D {
        let q_vec = Vector3D::new(self.x, self.y, self.z);
        let uv = q_vec.cross(&v);
        let uuv = q_vec.cross(&uv);
        v + (uv * self.w + uuv) * 2.0
    }

    pub fn forward(&self) -> Vector3D {
        self.rotate_vector(Vector3D::FORWARD)
    }

    pub fn right(&self) -> Vector3D {
        self.rotate_vector(Vector3D::RIGHT)
    }

    pub fn up(&self) -> Vector3D {
        self.rotate_vector(Vector3D::UP)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl Mul<Vector3D> for Quaternion {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Self::Output {
        self.rotate_vector(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn assert_vec_eq(a: Vector3D, b: Vector3D) {
        assert!((a - b).magnitude() < 0.0001, "{a:?} != {b:?}");
    }

    #[test]
    fn test_90_degree_rotation() {
        // Rotating FORWARD a quarter turn about UP lands on RIGHT
        let q = Quaternion::from_axis_angle(Vector3D::UP, PI / 2.0);
        assert_vec_eq(q * Vector3D::FORWARD, Vector3D::RIGHT);
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::from_axis_angle(Vector3D::UP, PI / 4.0);
        let result = q * q.inverse();
        assert!((result.w - 1.0).abs() < 0.0001);
        assert!(result.x.abs() < 0.0001);
        assert!(result.y.abs() < 0.0001);
        assert!(result.z.abs() < 0.0001);
    }

    #[test]
    fn test_inverse_scales_conjugate() {
        let unit = Quaternion::from_axis_angle(Vector3D::RIGHT, 0.7);
        let (inv, conj) = (unit.inverse(), unit.conjugate());
        let dot = inv.x * conj.x + inv.y * conj.y + inv.z * conj.z + inv.w * conj.w;
        assert!((dot - 1.0).abs() < 0.0001);

        let scaled = Quaternion::new(0.0, 2.0, 0.0, 2.0);
        assert_eq!(scaled.inverse(), Quaternion::new(0.0, -0.25, 0.0, 0.25));
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let axis = Vector3D::new(1.0, 1.0, 0.0).normalize();
        let (angle, out_axis) = Quaternion::from_axis_angle(axis, 0.7).to_axis_angle();
        assert!((angle - 0.7).abs() < 0.0001);
        assert_vec_eq(out_axis, axis);
    }

    #[test]
    fn test_identity_axis_angle() {
        let (angle, axis) = Quaternion::IDENTITY.to_axis_angle();
        assert_eq!(angle, 0.0);
        assert_eq!(axis, Vector3D::RIGHT);
    }

    #[test]
    fn test_look_rotation_points_forward() {
        let dir = Vector3D::new(1.0, -1.0, 2.0).normalize();
        let q = Quaternion::look_rotation(dir);
        assert_vec_eq(q.forward(), dir);
        // No roll: the right axis stays horizontal
        assert!(q.right().y.abs() < 0.0001);
    }

    #[test]
    fn test_look_rotation_zero_is_identity() {
        assert_eq!(Quaternion::look_rotation(Vector3D::ZERO), Quaternion::IDENTITY);
    }

    #[test]
    fn test_composition_order() {
        let yaw = Quaternion::from_axis_angle(Vector3D::UP, PI / 2.0);
        let pitch = Quaternion::from_axis_angle(Vector3D::RIGHT, PI / 2.0);
        // pitch first: FORWARD -> DOWN, yaw leaves DOWN alone
        assert_vec_eq((yaw * pitch) * Vector3D::FORWARD, Vector3D::new(0.0, -1.0, 0.0));
        // yaw first: FORWARD -> RIGHT, pitch leaves RIGHT alone
        assert_vec_eq((pitch * yaw) * Vector3D::FORWARD, Vector3D::RIGHT);
    }
}
