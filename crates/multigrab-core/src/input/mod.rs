//! Input abstraction for grab manipulation
//!
//! Provides:
//! - Stable contact handles for tracked inputs
//! - The live pose sampler the core reads every tick
//! - Host events (grab start/end, mode toggle, scene triggers)
//! - A keyboard-driven two-hand simulator for terminal development

mod event;
mod hand;
mod simulator;
mod source;

pub use event::GrabEvent;
pub use hand::{ContactId, Hand};
pub use simulator::HandSimulator;
pub use source::{PoseSource, PoseTable};
