//! Host events delivered to the grab session

use crate::spatial::Pose;

use super::ContactId;

/// Event from the host environment
#[derive(Debug, Clone, PartialEq)]
pub enum GrabEvent {
    /// An input started holding the object
    ContactBegin {
        id: ContactId,
        /// Pose of the input at grab start
        pose: Pose,
    },

    /// An input released the object
    ContactEnd { id: ContactId },

    /// Flip rotation amplification
    ToggleDoubleRotation,

    /// Recolor the ambient light
    RecolorLight,

    /// Toggle the player between its two fixed positions
    Teleport,

    /// Simulation frame
    Tick,

    /// Leave the session
    Quit,
}

impl GrabEvent {
    pub fn is_tick(&self) -> bool {
        matches!(self, GrabEvent::Tick)
    }

    /// Grab start or release
    pub fn is_contact(&self) -> bool {
        matches!(self, GrabEvent::ContactBegin { .. } | GrabEvent::ContactEnd { .. })
    }

    /// Contact this event refers to, if any
    pub fn contact_id(&self) -> Option<ContactId> {
        match self {
            GrabEvent::ContactBegin { id, .. } | GrabEvent::ContactEnd { id } => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let begin = GrabEvent::ContactBegin { id: ContactId(1), pose: Pose::IDENTITY };
        assert!(begin.is_contact());
        assert!(!begin.is_tick());
        assert_eq!(begin.contact_id(), Some(ContactId(1)));

        assert!(GrabEvent::Tick.is_tick());
        assert_eq!(GrabEvent::Quit.contact_id(), None);
    }
}
