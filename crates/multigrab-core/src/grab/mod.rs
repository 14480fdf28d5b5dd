//! Multi-contact grab manipulation
//!
//! Per tick, the controller runs:
//! 1. `TransformAggregator` over the registry (read-only pass)
//! 2. `DistanceClamp` against the centroid of the live contacts
//! 3. Commit of the object pose, then of each contact's previous pose

mod aggregator;
mod clamp;
mod controller;
mod registry;

pub use aggregator::{Aggregate, ContactSample, TransformAggregator};
pub use clamp::{clamp_position, DistanceClamp};
pub use controller::{GrabController, GrabState, UpdatePhase};
pub use registry::{Contact, GrabSessionRegistry};
