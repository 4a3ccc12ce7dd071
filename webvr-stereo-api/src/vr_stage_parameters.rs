use euclid::Transform3D;
#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};
use crate::utils;

/// The seated tracking space poses are reported in.
#[derive(Clone, Copy, Debug)]
pub enum Seated {}

/// The room-scale, floor-referenced space of the play area.
#[derive(Clone, Copy, Debug)]
pub enum Standing {}

// The VRStageParameters interface represents the values describing the
// stage/play area for displays that support room-scale experiences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRStageParameters {
    // matrix that transforms the sitting-space view matrices of VRFrameData to standing-space.
    pub sitting_to_standing_transform: [f32; 16],
    // Width of the play-area bounds in meters.
    pub size_x: f32,
    // Depth of the play-area bounds in meters
    pub size_z: f32,
}

impl VRStageParameters {
    pub fn standing_transform(&self) -> Transform3D<f32, Seated, Standing> {
        utils::transform_from_array(&self.sitting_to_standing_transform)
    }
}
