use crate::camera::{PerspectiveCamera, Quat, Vec3};
use webvr_stereo_api::{VRPose, VRStageParameters};

/// Drives the scene camera from the head pose of the current frame.
///
/// Missing orientation or position leaves the previous value in place. When the display
/// reports a stage, the seated-space pose is lifted into standing space on
/// top of the local pose matrix.
pub fn apply_pose(camera: &mut PerspectiveCamera, pose: &VRPose, stage: Option<&VRStageParameters>) {
    if let Some(o) = pose.orientation {
        camera.orientation = Quat::quaternion(o[0], o[1], o[2], o[3]);
    }
    if let Some(p) = pose.position {
        camera.position = Vec3::new(p[0], p[1], p[2]);
    }

    camera.update_matrix();

    if let Some(stage) = stage {
        camera.apply_matrix(&stage.standing_transform().to_untyped());
    }
}
