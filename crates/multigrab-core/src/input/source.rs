//! Live pose sampling

use std::collections::BTreeMap;

use crate::spatial::Pose;

use super::ContactId;

/// Host-side sampler of the current pose of each tracked input.
///
/// Returns `None` when the host no longer tracks `id`.
pub trait PoseSource {
    fn current_pose(&self, id: ContactId) -> Option<Pose>;
}

impl<S: PoseSource + ?Sized> PoseSource for &S {
    fn current_pose(&self, id: ContactId) -> Option<Pose> {
        (**self).current_pose(id)
    }
}

/// In-memory pose source, updated by the host before each tick
#[derive(Debug, Clone, Default)]
pub struct PoseTable {
    poses: BTreeMap<ContactId, Pose>,
}

impl PoseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest pose for `id`
    pub fn set_pose(&mut self, id: ContactId, pose: Pose) {
        self.poses.insert(id, pose);
    }

    pub fn remove(&mut self, id: ContactId) -> Option<Pose> {
        self.poses.remove(&id)
    }

    pub fn get(&self, id: ContactId) -> Option<&Pose> {
        self.poses.get(&id)
    }

    pub fn get_mut(&mut self, id: ContactId) -> Option<&mut Pose> {
        self.poses.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

impl PoseSource for PoseTable {
    fn current_pose(&self, id: ContactId) -> Option<Pose> {
        self.poses.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Point3D;

    #[test]
    fn test_table_tracks_latest_pose() {
        let mut table = PoseTable::new();
        let id = ContactId(3);
        assert!(table.current_pose(id).is_none());

        table.set_pose(id, Pose::from_position(Point3D::new(1.0, 0.0, 0.0)));
        table.set_pose(id, Pose::from_position(Point3D::new(2.0, 0.0, 0.0)));

        assert_eq!(table.len(), 1);
        assert_eq!(table.current_pose(id).map(|p| p.position.x), Some(2.0));

        table.remove(id);
        assert!(table.is_empty());
    }
}
