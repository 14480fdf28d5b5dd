pub use multigrab_core::{config, error, grab, input, scene, spatial};
pub use multigrab_core::{
    ContactId, GrabConfig, GrabController, GrabEvent, GrabSessionRegistry, GrabState, Point3D,
    Pose, PoseSource, PoseTable, Quaternion, TransformAggregator, Vector3D,
};

pub use multigrab_app as app;
