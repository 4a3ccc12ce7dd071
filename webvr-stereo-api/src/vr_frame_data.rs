#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};
use crate::{VREye, VRPose};

// Represents all the information needed to render a single frame of a VR scene
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRFrameData {
    // Monotonically increasing value that allows the author
    // to determine if position state data been updated from the hardware
    pub timestamp: f64,

    // major order column matrix describing the projection to be used for the left eye's rendering
    pub left_projection_matrix: [f32; 16],

    // major order column matrix describing the view transform to be used for the left eye's rendering
    pub left_view_matrix: [f32; 16],

    // major order column matrix describing the projection to be used for the right eye's rendering
    pub right_projection_matrix: [f32; 16],

    // major order column matrix describing the view transform to be used for the right eye's rendering
    pub right_view_matrix: [f32; 16],

    // VRPose containing the future predicted pose of the VRDisplay
    // when the current frame will be presented.
    pub pose: VRPose,
}

impl Default for VRFrameData {
    fn default() -> VRFrameData {
        VRFrameData {
            timestamp: 0f64,
            left_projection_matrix: identity_matrix!(),
            left_view_matrix: identity_matrix!(),
            right_projection_matrix: identity_matrix!(),
            right_view_matrix: identity_matrix!(),
            pose: VRPose::default(),
        }
    }
}

impl VRFrameData {
    pub fn projection_matrix(&self, eye: VREye) -> &[f32; 16] {
        match eye {
            VREye::Left => &self.left_projection_matrix,
            VREye::Right => &self.right_projection_matrix,
        }
    }
}
