#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};

// The VRPose struct represents a sensor's state at a given timestamp.
// Fields left as None mean "unknown this frame": consumers keep whatever
// value they had before.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRPose {
    // Position of the VRDisplay as a 3D vector.
    // May be None if the sensor is incapable of providing positional data.
    pub position: Option<[f32; 3]>,

    // Orientation of the sensor as a quaternion in [x, y, z, w] order.
    // May be None if the sensor is incapable of providing orientation.
    pub orientation: Option<[f32; 4]>,
}

impl VRPose {
    pub fn new(position: Option<[f32; 3]>, orientation: Option<[f32; 4]>) -> VRPose {
        VRPose { position, orientation }
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.orientation.is_none()
    }
}
