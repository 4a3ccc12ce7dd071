#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};

// Data provided to a VRDisplay and presented in the HMD.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRLayer {
    // Surface whose contents will be presented by the
    // VRDisplay when VRDisplay.submit_frame() is called.
    pub source: u32,

    // UVs defining the texture bounds to present to the eye in UV space: [x,y,w,h]
    // Kept as reported; devices may leave it out or send the wrong arity.
    pub left_bounds: Option<Vec<f32>>,

    // UVs defining the texture bounds to present to the eye in UV space: [x,y,w,h]
    pub right_bounds: Option<Vec<f32>>,
}

impl VRLayer {
    pub fn new(source: u32) -> VRLayer {
        VRLayer {
            source,
            left_bounds: None,
            right_bounds: None,
        }
    }

    pub fn with_bounds(source: u32, left: &[f32], right: &[f32]) -> VRLayer {
        VRLayer {
            source,
            left_bounds: Some(left.to_vec()),
            right_bounds: Some(right.to_vec()),
        }
    }
}
