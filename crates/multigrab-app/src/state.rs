//! Demo session state: the grabbed lens plus scene collaborators

use multigrab_core::{
    scene::LensFrame, AmbientLight, GrabConfigError, GrabController, LensRig, Point3D, Pose,
    PoseSource, PositionToggle, UpdatePhase, Vector3D,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;

/// Everything the demo host owns
#[derive(Debug)]
pub struct DemoState {
    /// Grab session for the lens object
    pub controller: GrabController,
    pub light: AmbientLight,
    pub teleport: PositionToggle,
    pub lens: LensRig,
    /// Frames simulated so far
    pub tick: u64,
    /// Last notable event, for display
    pub status_message: Option<String>,
    rng: StdRng,
    eye_height: f32,
}

impl DemoState {
    pub fn new(config: &AppConfig, seed: Option<u64>) -> Result<Self, GrabConfigError> {
        let controller =
            GrabController::new(Pose::from_position(config.object_position()), config.grab)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            controller,
            light: AmbientLight::default(),
            teleport: PositionToggle::new(config.player_home(), config.teleport_target()),
            lens: LensRig::new(),
            tick: 0,
            status_message: None,
            rng,
            eye_height: config.eye_height,
        })
    }

    /// Advance one frame: grab manipulation, then the lens camera
    pub fn update<S: PoseSource + ?Sized>(&mut self, source: &S) -> LensFrame {
        self.controller.process(UpdatePhase::Dynamic, source);
        self.tick = self.tick.wrapping_add(1);
        self.lens.update(self.controller.pose(), self.main_camera())
    }

    pub fn recolor_light(&mut self) {
        let color = self.light.recolor(&mut self.rng);
        let (r, g, b) = color.to_rgb8();
        self.status_message = Some(format!("Light #{r:02x}{g:02x}{b:02x}"));
    }

    pub fn teleport(&mut self) {
        let position = self.teleport.toggle();
        self.status_message = Some(format!(
            "Player at ({:.1}, {:.1}, {:.1})",
            position.x, position.y, position.z
        ));
    }

    pub fn player_position(&self) -> Point3D {
        self.teleport.position()
    }

    /// Viewer eye position
    pub fn main_camera(&self) -> Point3D {
        self.player_position() + Vector3D::UP * self.eye_height
    }
}
