//! Grab session orchestration for one manipulable object

use tracing::{debug, info, trace};

use crate::config::GrabConfig;
use crate::error::Result;
use crate::input::{ContactId, GrabEvent, PoseSource};
use crate::spatial::Pose;

use super::{DistanceClamp, GrabSessionRegistry, TransformAggregator};

/// Whether any input currently holds the object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabState {
    Idle,
    Grabbed,
}

/// Host update loop phase. Manipulation runs once per frame, in `Dynamic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    Fixed,
    Dynamic,
    Late,
    OnBeforeRender,
}

/// Owns the object pose and the contact registry, and advances both per tick
#[derive(Debug, Clone)]
pub struct GrabController {
    pose: Pose,
    registry: GrabSessionRegistry,
    clamp: DistanceClamp,
    config: GrabConfig,
}

impl GrabController {
    /// Create a controller for an object resting at `pose`
    pub fn new(pose: Pose, config: GrabConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pose,
            registry: GrabSessionRegistry::new(),
            clamp: DistanceClamp::new(config.max_grab_distance),
            config,
        })
    }

    pub fn on_contact_begin(&mut self, id: ContactId, pose: Pose) {
        let was_idle = self.registry.is_empty();
        self.registry.begin_contact(id, pose);
        if was_idle {
            debug!(%id, "grab session started");
        }
    }

    pub fn on_contact_end(&mut self, id: ContactId) {
        if self.registry.end_contact(id) && self.registry.is_empty() {
            debug!(%id, position = ?self.pose.position, "grab session ended");
        }
    }

    /// Flip rotation amplification; returns the new setting
    pub fn toggle_double_rotation(&mut self) -> bool {
        self.config.double_rotation = !self.config.double_rotation;
        info!(enabled = self.config.double_rotation, "double rotation toggled");
        self.config.double_rotation
    }

    /// Advance one simulation frame. Returns `false` when idle.
    pub fn tick<S: PoseSource + ?Sized>(&mut self, source: &S) -> bool {
        if self.registry.is_empty() {
            return false;
        }

        let aggregate = TransformAggregator::aggregate(
            &self.registry,
            source,
            &self.pose,
            self.config.double_rotation,
        );
        let proposed = aggregate.apply_to(&self.pose);
        let centroid = self.registry.centroid(source, self.pose.position);
        let position = self.clamp.clamp(proposed.position, centroid);

        self.pose = Pose::new(position, proposed.rotation);
        self.registry.commit(&aggregate.samples);

        trace!(
            position = ?self.pose.position,
            rotation = ?self.pose.rotation,
            "object pose updated"
        );
        true
    }

    /// Run the tick only in the dynamic phase
    pub fn process<S: PoseSource + ?Sized>(&mut self, phase: UpdatePhase, source: &S) -> bool {
        match phase {
            UpdatePhase::Dynamic => self.tick(source),
            _ => false,
        }
    }

    /// Apply a host event. Returns `false` for events outside the grab core.
    pub fn handle<S: PoseSource + ?Sized>(&mut self, event: &GrabEvent, source: &S) -> bool {
        match event {
            GrabEvent::ContactBegin { id, pose } => self.on_contact_begin(*id, *pose),
            GrabEvent::ContactEnd { id } => self.on_contact_end(*id),
            GrabEvent::ToggleDoubleRotation => {
                self.toggle_double_rotation();
            }
            GrabEvent::Tick => {
                self.tick(source);
            }
            GrabEvent::RecolorLight | GrabEvent::Teleport | GrabEvent::Quit => return false,
        }
        true
    }

    /// Current object pose
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn state(&self) -> GrabState {
        if self.registry.is_empty() {
            GrabState::Idle
        } else {
            GrabState::Grabbed
        }
    }

    pub fn registry(&self) -> &GrabSessionRegistry {
        &self.registry
    }

    pub fn double_rotation_enabled(&self) -> bool {
        self.config.double_rotation
    }

    /// Active settings, including the current double rotation mode
    pub fn config(&self) -> &GrabConfig {
        &self.config
    }
}
