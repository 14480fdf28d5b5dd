//! Scripted two-hand sessions for headless runs

use clap::ValueEnum;
use multigrab_core::{GrabEvent, Hand, Point3D, Pose, PoseTable, Quaternion, Vector3D};

/// Hand offset from the object when grabbing with both hands (meters)
const GRIP_HALF_WIDTH: f32 = 0.15;

/// Canned hand motions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Right hand carries the object forward
    Carry,
    /// Both hands turn the object like a steering wheel lying flat
    Twist,
    /// Both hands push forward; the summed motion outruns the hands and the clamp engages
    Stretch,
}

impl Scenario {
    pub fn hands(self) -> &'static [Hand] {
        match self {
            Scenario::Carry => &[Hand::Right],
            Scenario::Twist | Scenario::Stretch => &Hand::BOTH,
        }
    }

    /// Hand pose at `tick` for an object grabbed around `anchor`
    pub fn hand_pose(self, hand: Hand, anchor: Point3D, tick: u64) -> Pose {
        let side = match hand {
            Hand::Left => -1.0,
            Hand::Right => 1.0,
        };
        let t = tick as f32;

        match self {
            Scenario::Carry => Pose::from_position(
                anchor + Vector3D::RIGHT * 0.1 + Vector3D::FORWARD * (0.01 * t),
            ),
            Scenario::Twist => {
                let turn = Quaternion::from_axis_angle(Vector3D::UP, 2.0_f32.to_radians() * t);
                let grip = Vector3D::RIGHT * (side * GRIP_HALF_WIDTH);
                Pose::new(anchor + turn * grip, turn)
            }
            Scenario::Stretch => Pose::from_position(
                anchor
                    + Vector3D::RIGHT * (side * (GRIP_HALF_WIDTH + 0.005 * t))
                    + Vector3D::FORWARD * (0.01 * t),
            ),
        }
    }
}

/// Drives a scenario tick by tick, publishing hand poses into a `PoseTable`
#[derive(Debug, Clone)]
pub struct ScriptedSession {
    scenario: Scenario,
    anchor: Point3D,
    total_ticks: u64,
    hands: PoseTable,
}

impl ScriptedSession {
    pub fn new(scenario: Scenario, anchor: Point3D, total_ticks: u64) -> Self {
        Self {
            scenario,
            anchor,
            total_ticks,
            hands: PoseTable::new(),
        }
    }

    /// Live hand poses
    pub fn poses(&self) -> &PoseTable {
        &self.hands
    }

    /// Move the hands for `tick` and return the events of that frame:
    /// grab on the first frame, a tick on every frame after it, release after the last.
    pub fn advance(&mut self, tick: u64) -> Vec<GrabEvent> {
        let mut events = Vec::new();
        for &hand in self.scenario.hands() {
            let pose = self.scenario.hand_pose(hand, self.anchor, tick);
            self.hands.set_pose(hand.contact_id(), pose);
            if tick == 0 {
                events.push(GrabEvent::ContactBegin { id: hand.contact_id(), pose });
            }
        }

        if tick > 0 {
            events.push(GrabEvent::Tick);
        }

        if tick + 1 == self.total_ticks {
            events.extend(
                self.scenario
                    .hands()
                    .iter()
                    .map(|hand| GrabEvent::ContactEnd { id: hand.contact_id() }),
            );
        }
        events
    }
}
