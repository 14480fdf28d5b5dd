//! Active grab contacts and their pose history

use tracing::{debug, warn};

use crate::input::{ContactId, PoseSource};
use crate::spatial::{Point3D, Pose, Quaternion, Vector3D};

use super::ContactSample;

/// One input currently holding the object
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    /// Assigned on first grab; orders aggregation
    pub sequence: u64,
    pub initial_position: Point3D,
    pub initial_rotation: Quaternion,
    pub previous_position: Point3D,
    pub previous_rotation: Quaternion,
}

impl Contact {
    fn new(id: ContactId, sequence: u64, pose: Pose) -> Self {
        Self {
            id,
            sequence,
            initial_position: pose.position,
            initial_rotation: pose.rotation,
            previous_position: pose.position,
            previous_rotation: pose.rotation,
        }
    }

    /// Pose at the end of the previous tick
    pub fn previous_pose(&self) -> Pose {
        Pose::new(self.previous_position, self.previous_rotation)
    }

    /// Pose captured at grab start
    pub fn initial_pose(&self) -> Pose {
        Pose::new(self.initial_position, self.initial_rotation)
    }
}

/// Insertion-ordered set of active contacts, unique per `ContactId`
#[derive(Debug, Clone, Default)]
pub struct GrabSessionRegistry {
    contacts: Vec<Contact>,
    next_sequence: u64,
}

impl GrabSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `id` at `pose`.
    ///
    /// A repeated begin for an active id resets its history in place and
    /// keeps its position in the aggregation order.
    pub fn begin_contact(&mut self, id: ContactId, pose: Pose) {
        if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == id) {
            debug!(%id, "re-grab, resetting contact history");
            *existing = Contact::new(id, existing.sequence, pose);
            return;
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.contacts.push(Contact::new(id, sequence, pose));
        debug!(%id, sequence, active = self.contacts.len(), "contact began");
    }

    /// Stop tracking `id`. Returns whether a contact was removed.
    pub fn end_contact(&mut self, id: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        let removed = self.contacts.len() != before;
        if removed {
            debug!(%id, active = self.contacts.len(), "contact ended");
        }
        removed
    }

    /// Active contacts in aggregation order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Mean of the contacts' live positions, or `fallback` when none are active.
    ///
    /// A contact the source no longer tracks counts at its previous position.
    pub fn centroid<S: PoseSource + ?Sized>(&self, source: &S, fallback: Point3D) -> Point3D {
        if self.contacts.is_empty() {
            return fallback;
        }

        let mut sum = Vector3D::ZERO;
        for contact in &self.contacts {
            let position = match source.current_pose(contact.id) {
                Some(pose) => pose.position,
                None => {
                    warn!(id = %contact.id, "no live pose, using previous position for centroid");
                    contact.previous_position
                }
            };
            sum += position.to_vector();
        }
        (sum / self.contacts.len() as f32).to_point()
    }

    /// Write phase: store each sample as its contact's previous pose.
    ///
    /// Samples for contacts that are no longer active are ignored.
    pub fn commit(&mut self, samples: &[ContactSample]) {
        for sample in samples {
            if let Some(contact) = self.contacts.iter_mut().find(|c| c.id == sample.id) {
                contact.previous_position = sample.pose.position;
                contact.previous_rotation = sample.pose.rotation;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PoseTable;

    fn at(x: f32, y: f32, z: f32) -> Pose {
        Pose::from_position(Point3D::new(x, y, z))
    }

    #[test]
    fn test_begin_records_initial_and_previous() {
        let mut registry = GrabSessionRegistry::new();
        let pose = at(1.0, 2.0, 3.0);
        registry.begin_contact(ContactId(9), pose);

        let contact = registry.get(ContactId(9)).expect("contact");
        assert_eq!(contact.initial_pose(), pose);
        assert_eq!(contact.previous_pose(), pose);
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_count_matches_open_contacts() {
        let mut registry = GrabSessionRegistry::new();
        let script: &[(bool, u64)] = &[
            (true, 1),
            (true, 2),
            (true, 1),
            (false, 3),
            (true, 3),
            (false, 1),
            (false, 1),
            (true, 4),
            (false, 2),
        ];

        let mut open = std::collections::BTreeSet::new();
        for &(begin, raw) in script {
            let id = ContactId(raw);
            if begin {
                registry.begin_contact(id, Pose::IDENTITY);
                open.insert(id);
            } else {
                registry.end_contact(id);
                open.remove(&id);
            }
            assert_eq!(registry.count(), open.len());
        }
    }

    #[test]
    fn test_end_contact_is_idempotent() {
        let mut registry = GrabSessionRegistry::new();
        registry.begin_contact(ContactId(1), Pose::IDENTITY);
        registry.begin_contact(ContactId(2), Pose::IDENTITY);

        assert!(registry.end_contact(ContactId(1)));
        assert!(!registry.end_contact(ContactId(1)));
        assert!(!registry.end_contact(ContactId(42)));

        let ids: Vec<_> = registry.contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ContactId(2)]);
    }

    #[test]
    fn test_regrab_overwrites_in_place() {
        let mut registry = GrabSessionRegistry::new();
        registry.begin_contact(ContactId(1), at(0.0, 0.0, 0.0));
        registry.begin_contact(ContactId(2), at(1.0, 0.0, 0.0));
        registry.begin_contact(ContactId(1), at(5.0, 0.0, 0.0));

        let order: Vec<_> = registry.contacts().iter().map(|c| (c.id, c.sequence)).collect();
        assert_eq!(order, vec![(ContactId(1), 0), (ContactId(2), 1)]);
        assert_eq!(
            registry.get(ContactId(1)).map(|c| c.initial_position),
            Some(Point3D::new(5.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_centroid_reads_live_positions() {
        let mut registry = GrabSessionRegistry::new();
        registry.begin_contact(ContactId(1), at(0.0, 0.0, 0.0));
        registry.begin_contact(ContactId(2), at(0.0, 0.0, 0.0));

        let mut live = PoseTable::new();
        live.set_pose(ContactId(1), at(2.0, 0.0, 0.0));
        live.set_pose(ContactId(2), at(0.0, 4.0, 0.0));

        let centroid = registry.centroid(&live, Point3D::ORIGIN);
        assert_eq!(centroid, Point3D::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_centroid_falls_back_when_idle() {
        let registry = GrabSessionRegistry::new();
        let fallback = Point3D::new(7.0, 8.0, 9.0);
        assert_eq!(registry.centroid(&PoseTable::new(), fallback), fallback);
    }

    #[test]
    fn test_centroid_uses_previous_for_untracked_contact() {
        let mut registry = GrabSessionRegistry::new();
        registry.begin_contact(ContactId(1), at(2.0, 0.0, 0.0));
        registry.begin_contact(ContactId(2), at(0.0, 0.0, 0.0));

        let mut live = PoseTable::new();
        live.set_pose(ContactId(2), at(0.0, 2.0, 0.0));

        assert_eq!(registry.centroid(&live, Point3D::ORIGIN), Point3D::new(1.0, 1.0, 0.0));
    }
}
