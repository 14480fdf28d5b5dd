//! Combines per-contact motion into one rigid delta for the object

use tracing::{trace, warn};

use crate::input::{ContactId, PoseSource};
use crate::spatial::{Point3D, Pose, Quaternion, Vector3D};

use super::{Contact, GrabSessionRegistry};

/// Live pose observed for a contact this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSample {
    pub id: ContactId,
    pub pose: Pose,
}

/// Proposed object delta plus the samples to commit afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Summed contact translation, including orbital correction
    pub translation: Vector3D,
    /// Composed contact rotation deltas (world space)
    pub rotation: Quaternion,
    /// Live pose per contact, in aggregation order
    pub samples: Vec<ContactSample>,
}

impl Default for Aggregate {
    fn default() -> Self {
        Self {
            translation: Vector3D::ZERO,
            rotation: Quaternion::IDENTITY,
            samples: Vec::new(),
        }
    }
}

impl Aggregate {
    /// Object pose after applying this delta (before clamping)
    pub fn apply_to(&self, object: &Pose) -> Pose {
        Pose::new(
            object.position + self.translation,
            (self.rotation * object.rotation).normalize(),
        )
    }
}

/// Stateless per-tick aggregation over all active contacts
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformAggregator;

impl TransformAggregator {
    /// Read-only pass over `registry`, in its aggregation order.
    ///
    /// Each contact contributes its translation since the previous tick and
    /// its incremental rotation. Because the contact rotates the object about
    /// the contact point rather than the object's pivot, the pivot's
    /// displacement under that rotation is added to the translation.
    /// Later contacts' rotations compose outside earlier ones.
    pub fn aggregate<S: PoseSource + ?Sized>(
        registry: &GrabSessionRegistry,
        source: &S,
        object: &Pose,
        double_rotation: bool,
    ) -> Aggregate {
        let mut result = Aggregate {
            samples: Vec::with_capacity(registry.count()),
            ..Aggregate::default()
        };

        for contact in registry.contacts() {
            let Some(current) = source.current_pose(contact.id) else {
                warn!(id = %contact.id, "no live pose, contact held stationary this tick");
                continue;
            };

            let (translation, rotation) =
                Self::contact_delta(contact, &current, object.position, double_rotation);
            result.translation += translation;
            result.rotation = rotation * result.rotation;
            result.samples.push(ContactSample { id: contact.id, pose: current });
        }

        trace!(
            contacts = registry.count(),
            translation = ?result.translation,
            rotation = ?result.rotation,
            "aggregated grab delta"
        );
        result
    }

    /// Translation (with orbital term) and rotation delta for one contact
    pub fn contact_delta(
        contact: &Contact,
        current: &Pose,
        object_position: Point3D,
        double_rotation: bool,
    ) -> (Vector3D, Quaternion) {
        let mut translation = current.position - contact.previous_position;

        let mut rotation = current.rotation * contact.previous_rotation.inverse();
        if double_rotation {
            rotation = Self::amplify(rotation);
        }

        let to_object = object_position - current.position;
        translation += rotation * to_object - to_object;

        (translation, rotation)
    }

    /// Same axis, twice the angle
    pub fn amplify(rotation: Quaternion) -> Quaternion {
        let (angle, axis) = rotation.to_axis_angle();
        Quaternion::from_axis_angle(axis, angle * 2.0)
    }
}
