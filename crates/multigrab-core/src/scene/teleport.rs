//! Two-position toggle for the player rig

use tracing::debug;

use crate::spatial::Point3D;

/// Alternates an entity between its starting position and a fixed target
#[derive(Debug, Clone)]
pub struct PositionToggle {
    home: Point3D,
    target: Point3D,
    at_home: bool,
}

impl PositionToggle {
    /// `home` is where the entity starts
    pub fn new(home: Point3D, target: Point3D) -> Self {
        Self { home, target, at_home: true }
    }

    /// Flip sides and return the new position
    pub fn toggle(&mut self) -> Point3D {
        self.at_home = !self.at_home;
        let position = self.position();
        debug!(at_home = self.at_home, ?position, "teleported");
        position
    }

    pub fn position(&self) -> Point3D {
        if self.at_home {
            self.home
        } else {
            self.target
        }
    }

    pub fn is_at_home(&self) -> bool {
        self.at_home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        let home = Point3D::new(0.0, 0.0, 0.0);
        let target = Point3D::new(5.0, 0.0, 2.0);
        let mut toggle = PositionToggle::new(home, target);

        assert!(toggle.is_at_home());
        assert_eq!(toggle.toggle(), target);
        assert_eq!(toggle.toggle(), home);
        assert_eq!(toggle.toggle(), target);
        assert!(!toggle.is_at_home());
    }
}
