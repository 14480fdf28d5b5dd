//! Demo event handlers

use multigrab_core::{GrabEvent, PoseSource};

use crate::state::DemoState;

/// Route one host event. Returns `false` when the session should end.
pub fn handle_event<S: PoseSource + ?Sized>(
    event: GrabEvent,
    state: &mut DemoState,
    source: &S,
) -> bool {
    match event {
        GrabEvent::Quit => return false,
        GrabEvent::Tick => {
            state.update(source);
        }
        GrabEvent::RecolorLight => state.recolor_light(),
        GrabEvent::Teleport => state.teleport(),
        GrabEvent::ToggleDoubleRotation => {
            let enabled = state.controller.toggle_double_rotation();
            state.status_message = Some(format!(
                "Double rotation {}",
                if enabled { "on" } else { "off" }
            ));
        }
        event @ (GrabEvent::ContactBegin { .. } | GrabEvent::ContactEnd { .. }) => {
            state.controller.handle(&event, source);
        }
    }
    true
}
