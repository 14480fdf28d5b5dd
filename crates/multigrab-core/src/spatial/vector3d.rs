//! 3D vector representation for offsets and deltas

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A vector in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3D {
    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector pointing right (+X)
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector pointing up (+Y)
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector pointing forward (+Z)
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Length of the vector
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Unit-length copy; the zero vector stays zero
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            *self / mag
        } else {
            Self::ZERO
        }
    }

    pub fn dot(&self, other: &Vector3D) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3D) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Interpret the vector as an offset from the origin
    pub fn to_point(&self) -> super::Point3D {
        super::Point3D::new(self.x, self.y, self.z)
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector3D::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vector3D {
    type Output = Vector3D;

    fn div(self, rhs: f32) -> Self::Output {
        Vector3D::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let v = Vector3D::new(3.0, 4.0, 0.0);
        assert!((v.magnitude() - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        assert_eq!(Vector3D::ZERO.normalize(), Vector3D::ZERO);

        let n = Vector3D::new(0.0, 0.0, -7.0).normalize();
        assert_eq!(n, Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cross_product() {
        // (1,0,0) x (0,1,0) = (0,0,1) in a right-handed system
        let result = Vector3D::RIGHT.cross(&Vector3D::UP);
        assert_eq!(result, Vector3D::FORWARD);
    }

    #[test]
    fn test_add_assign_accumulates() {
        let mut total = Vector3D::ZERO;
        total += Vector3D::new(1.0, 0.0, 0.0);
        total += Vector3D::new(0.5, 2.0, 0.0);
        assert_eq!(total, Vector3D::new(1.5, 2.0, 0.0));
    }
}
