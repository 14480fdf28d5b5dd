//! Error types for grab configuration

/// Invalid grab configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrabConfigError {
    #[error("max_grab_distance must be a positive finite number, got {0}")]
    InvalidMaxGrabDistance(f32),
}

pub type Result<T> = std::result::Result<T, GrabConfigError>;
