//! Keeps the object within reach of the grabbing inputs

use tracing::debug;

use crate::spatial::Point3D;

/// Max-distance constraint between the object and the contact centroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceClamp {
    pub max_distance: f32,
}

impl DistanceClamp {
    pub fn new(max_distance: f32) -> Self {
        Self { max_distance }
    }

    /// See [`clamp_position`]
    pub fn clamp(&self, proposed: Point3D, centroid: Point3D) -> Point3D {
        clamp_position(proposed, centroid, self.max_distance)
    }
}

/// Pull `proposed` back onto the sphere of radius `max_distance` around
/// `centroid` if it lies outside. Points on or inside the sphere are returned
/// unchanged. Rotation is never affected.
pub fn clamp_position(proposed: Point3D, centroid: Point3D, max_distance: f32) -> Point3D {
    let offset = proposed - centroid;
    let distance = offset.magnitude();

    if distance > max_distance {
        let clamped = centroid + offset.normalize() * max_distance;
        debug!(distance, max_distance, "object clamped to grab distance");
        clamped
    } else {
        proposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Vector3D;

    #[test]
    fn test_clamps_to_boundary() {
        let centroid = Point3D::new(1.0, 1.0, 1.0);
        let clamp = DistanceClamp::new(0.5);

        let proposed = centroid + Vector3D::RIGHT * 1.0;
        assert_eq!(clamp.clamp(proposed, centroid), Point3D::new(1.5, 1.0, 1.0));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let centroid = Point3D::new(1.0, 1.0, 1.0);
        let proposed = centroid + Vector3D::UP * 0.5;
        assert_eq!(clamp_position(proposed, centroid, 0.5), proposed);
    }

    #[test]
    fn test_clamp_keeps_direction() {
        let centroid = Point3D::ORIGIN;
        let direction = Vector3D::new(1.0, 2.0, -2.0);
        let clamped = clamp_position(centroid + direction, centroid, 0.5);

        let expected = centroid + direction.normalize() * 0.5;
        assert!(clamped.distance(&expected) < 0.0001);
        assert!((clamped.distance(&centroid) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_inside_and_coincident_untouched() {
        let centroid = Point3D::new(0.0, 1.0, 0.0);
        assert_eq!(clamp_position(centroid, centroid, 0.5), centroid);

        let inside = Point3D::new(0.1, 1.1, 0.0);
        assert_eq!(clamp_position(inside, centroid, 0.5), inside);
    }
}
