//! Contact handles and simulated hands

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable handle identifying one grabbing input source.
///
/// Hosts assign these; the core only compares and orders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contact#{}", self.0)
    }
}

/// Which simulated hand controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    /// Contact handle the simulator uses for this hand
    pub fn contact_id(self) -> ContactId {
        match self {
            Hand::Left => ContactId(0),
            Hand::Right => ContactId(1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}
