//! multigrab-app: demo host for the multigrab core
//!
//! Hosts one grabbable magnifying lens in a small scene:
//! - Scripted headless sessions (carry, twist, stretch)
//! - Interactive terminal session with two simulated hands
//! - Light recolor and teleport triggers, lens camera update per frame

pub mod config;
mod handlers;
mod runner;
pub mod scenario;
mod state;

use anyhow::Context;
use multigrab_core::{GrabState, Pose};

pub use config::{AppConfig, ConfigError};
pub use handlers::handle_event;
pub use runner::InteractiveRunner;
pub use scenario::{Scenario, ScriptedSession};
pub use state::DemoState;

/// Outcome of a headless session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub scenario: Scenario,
    pub ticks: u64,
    pub start: Pose,
    pub end: Pose,
    pub final_state: GrabState,
}

impl SessionReport {
    /// Straight-line distance the object travelled
    pub fn displacement(&self) -> f32 {
        self.start.position.distance(&self.end.position)
    }

    /// Net rotation angle, radians
    pub fn rotation_angle(&self) -> f32 {
        (self.end.rotation * self.start.rotation.inverse()).to_axis_angle().0
    }
}

/// Play `scenario` for `ticks` frames without a terminal
pub fn run_scripted(
    config: &AppConfig,
    scenario: Scenario,
    ticks: u64,
    seed: Option<u64>,
) -> anyhow::Result<SessionReport> {
    let mut state = DemoState::new(config, seed).context("Invalid grab configuration")?;
    let start = *state.controller.pose();
    let mut session = ScriptedSession::new(scenario, config.object_position(), ticks);

    tracing::info!(?scenario, ticks, "Starting scripted session");
    for tick in 0..ticks {
        for event in session.advance(tick) {
            handle_event(event, &mut state, session.poses());
        }
    }

    let report = SessionReport {
        scenario,
        ticks,
        start,
        end: *state.controller.pose(),
        final_state: state.controller.state(),
    };
    tracing::info!(
        displacement = report.displacement(),
        rotation_deg = report.rotation_angle().to_degrees(),
        "Scripted session finished"
    );
    Ok(report)
}

/// Run the keyboard-driven session
pub fn run_interactive(config: AppConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let state = DemoState::new(&config, seed).context("Invalid grab configuration")?;
    let mut runner = InteractiveRunner::new(state, config);
    runner.run().context("Terminal session failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_grab_distance: f32) -> AppConfig {
        let mut config = AppConfig::default();
        config.grab.max_grab_distance = max_grab_distance;
        config
    }

    #[test]
    fn test_carry_follows_hand() {
        let report = run_scripted(&config(0.5), Scenario::Carry, 21, Some(1)).expect("run");
        // 20 moving frames of 1cm each
        assert!((report.displacement() - 0.2).abs() < 0.001);
        assert!(report.rotation_angle() < 0.001);
        assert_eq!(report.final_state, GrabState::Idle);
    }

    #[test]
    fn test_twist_rotates_in_place() {
        let report = run_scripted(&config(0.5), Scenario::Twist, 11, Some(1)).expect("run");
        // Both hands contribute 2deg per frame over 10 frames
        assert!((report.rotation_angle().to_degrees() - 40.0).abs() < 0.05);
        assert!(report.displacement() < 0.001);
    }

    #[test]
    fn test_stretch_is_clamped() {
        let ticks = 101;
        let report = run_scripted(&config(0.5), Scenario::Stretch, ticks, Some(1)).expect("run");

        let anchor = AppConfig::default().object_position();
        let last = ticks - 1;
        let left = Scenario::Stretch.hand_pose(multigrab_core::Hand::Left, anchor, last).position;
        let right = Scenario::Stretch.hand_pose(multigrab_core::Hand::Right, anchor, last).position;
        let centroid = ((left.to_vector() + right.to_vector()) / 2.0).to_point();

        assert!((report.end.position.distance(&centroid) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(run_scripted(&config(0.0), Scenario::Carry, 3, None).is_err());
    }
}
