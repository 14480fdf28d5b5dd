//! multigrab-core: multi-contact grab manipulation for XR
//!
//! Lets several tracked inputs (e.g. two hand controllers) hold one rigid
//! object at once:
//! - Contact registry with per-input pose history
//! - Aggregation of per-contact deltas into one translation + rotation,
//!   with orbital correction for the offset pivot
//! - Optional rotation amplification
//! - Distance clamp keeping the object near the grabbing inputs
//! - Scene collaborators (light recolor, teleport toggle, lens camera)
//!   and a keyboard hand simulator for terminal development

pub mod config;
pub mod error;
pub mod grab;
pub mod input;
pub mod scene;
pub mod spatial;

// Re-export commonly used types
pub use config::GrabConfig;
pub use error::GrabConfigError;
pub use grab::{
    DistanceClamp, GrabController, GrabSessionRegistry, GrabState, TransformAggregator,
    UpdatePhase,
};
pub use input::{ContactId, GrabEvent, Hand, HandSimulator, PoseSource, PoseTable};
pub use scene::{AmbientLight, Color, LensRig, PositionToggle};
pub use spatial::{Point3D, Pose, Quaternion, Vector3D};
