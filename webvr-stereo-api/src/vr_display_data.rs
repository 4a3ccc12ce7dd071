#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};
use crate::{VRDisplayCapabilities, VREye, VREyeParameters, VRStageParameters};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRDisplayData {
    pub display_id: u32,
    pub display_name: String,
    pub connected: bool,
    pub capabilities: VRDisplayCapabilities,
    pub stage_parameters: Option<VRStageParameters>,
    pub left_eye_parameters: VREyeParameters,
    pub right_eye_parameters: VREyeParameters,
}

impl VRDisplayData {
    pub fn eye_parameters(&self, eye: VREye) -> &VREyeParameters {
        match eye {
            VREye::Left => &self.left_eye_parameters,
            VREye::Right => &self.right_eye_parameters,
        }
    }
}
