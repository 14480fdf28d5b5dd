//! Input simulator for terminal development
//!
//! Maps keyboard inputs to two simulated hand controllers so the grab core
//! can be exercised without XR hardware.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::spatial::{Point3D, Pose, Quaternion, Vector3D};

use super::{GrabEvent, Hand, PoseTable};

/// Simulates two tracked hands from keyboard input
pub struct HandSimulator {
    /// Live poses of both hands
    poses: PoseTable,
    /// Grab state per hand, indexed like `Hand::BOTH`
    grabbing: [bool; 2],
    /// Translation per key press (meters)
    move_step: f32,
    /// Rotation per key press (radians)
    twist_step: f32,
}

impl Default for HandSimulator {
    fn default() -> Self {
        let mut poses = PoseTable::new();
        poses.set_pose(
            Hand::Left.contact_id(),
            Pose::from_position(Point3D::new(-0.2, 1.0, 0.4)),
        );
        poses.set_pose(
            Hand::Right.contact_id(),
            Pose::from_position(Point3D::new(0.2, 1.0, 0.4)),
        );

        Self {
            poses,
            grabbing: [false; 2],
            move_step: 0.02,
            twist_step: 5.0_f32.to_radians(),
        }
    }
}

impl HandSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event, moving hands and emitting host events
    pub fn process_key(&mut self, key: KeyEvent) -> Vec<GrabEvent> {
        let mut events = Vec::new();

        if key.kind != KeyEventKind::Press {
            return events;
        }

        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        let step = self.move_step;
        match code {
            // WASD + QE: left hand
            KeyCode::Char('w') => self.nudge(Hand::Left, Vector3D::FORWARD * step),
            KeyCode::Char('s') => self.nudge(Hand::Left, Vector3D::FORWARD * -step),
            KeyCode::Char('a') => self.nudge(Hand::Left, Vector3D::RIGHT * -step),
            KeyCode::Char('d') => self.nudge(Hand::Left, Vector3D::RIGHT * step),
            KeyCode::Char('q') => self.nudge(Hand::Left, Vector3D::UP * -step),
            KeyCode::Char('e') => self.nudge(Hand::Left, Vector3D::UP * step),

            // IJKL + UO: right hand
            KeyCode::Char('i') => self.nudge(Hand::Right, Vector3D::FORWARD * step),
            KeyCode::Char('k') => self.nudge(Hand::Right, Vector3D::FORWARD * -step),
            KeyCode::Char('j') => self.nudge(Hand::Right, Vector3D::RIGHT * -step),
            KeyCode::Char('l') => self.nudge(Hand::Right, Vector3D::RIGHT * step),
            KeyCode::Char('u') => self.nudge(Hand::Right, Vector3D::UP * -step),
            KeyCode::Char('o') => self.nudge(Hand::Right, Vector3D::UP * step),

            // Wrist twists about world up
            KeyCode::Char('z') => self.twist(Hand::Left, self.twist_step),
            KeyCode::Char('x') => self.twist(Hand::Left, -self.twist_step),
            KeyCode::Char('n') => self.twist(Hand::Right, self.twist_step),
            KeyCode::Char('m') => self.twist(Hand::Right, -self.twist_step),

            KeyCode::Char('1') => events.push(self.toggle_grab(Hand::Left)),
            KeyCode::Char('2') => events.push(self.toggle_grab(Hand::Right)),

            KeyCode::Char('r') => events.push(GrabEvent::ToggleDoubleRotation),
            KeyCode::Char('c') => events.push(GrabEvent::RecolorLight),
            KeyCode::Char('t') => events.push(GrabEvent::Teleport),
            KeyCode::Esc => events.push(GrabEvent::Quit),

            _ => {}
        }

        events
    }

    /// Live pose source for the grab core
    pub fn poses(&self) -> &PoseTable {
        &self.poses
    }

    pub fn hand_pose(&self, hand: Hand) -> Pose {
        self.poses
            .get(hand.contact_id())
            .copied()
            .unwrap_or_default()
    }

    pub fn is_grabbing(&self, hand: Hand) -> bool {
        self.grabbing[Self::slot(hand)]
    }

    /// Release both hands and return them to their rest poses
    pub fn reset(&mut self) -> Vec<GrabEvent> {
        let events = Hand::BOTH
            .iter()
            .filter(|hand| self.is_grabbing(**hand))
            .map(|hand| GrabEvent::ContactEnd { id: hand.contact_id() })
            .collect();
        let (move_step, twist_step) = (self.move_step, self.twist_step);
        *self = Self { move_step, twist_step, ..Self::default() };
        events
    }

    fn slot(hand: Hand) -> usize {
        match hand {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    fn nudge(&mut self, hand: Hand, offset: Vector3D) {
        if let Some(pose) = self.poses.get_mut(hand.contact_id()) {
            *pose = pose.translated(offset);
        }
    }

    fn twist(&mut self, hand: Hand, angle: f32) {
        if let Some(pose) = self.poses.get_mut(hand.contact_id()) {
            *pose = pose.rotated(Quaternion::from_axis_angle(Vector3D::UP, angle));
        }
    }

    fn toggle_grab(&mut self, hand: Hand) -> GrabEvent {
        let slot = Self::slot(hand);
        self.grabbing[slot] = !self.grabbing[slot];

        let id = hand.contact_id();
        if self.grabbing[slot] {
            GrabEvent::ContactBegin { id, pose: self.hand_pose(hand) }
        } else {
            GrabEvent::ContactEnd { id }
        }
    }
}
