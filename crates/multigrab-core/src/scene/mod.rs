//! Scene collaborators driven by host triggers
//!
//! None of these touch the grab session; they share the host loop only.

mod lens;
mod light;
mod teleport;

pub use lens::{LensFrame, LensRig, ROTATION_PARAM};
pub use light::{AmbientLight, Color};
pub use teleport::PositionToggle;
