#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};

// The VRFieldOfView interface represents a field of view,
// as given by 4 degrees describing the view from a center point.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRFieldOfView {
    pub up_degrees: f64,
    pub right_degrees: f64,
    pub down_degrees: f64,
    pub left_degrees: f64,
}

impl VRFieldOfView {
    pub fn symmetric(horizontal_degrees: f64, vertical_degrees: f64) -> VRFieldOfView {
        VRFieldOfView {
            up_degrees: vertical_degrees,
            right_degrees: horizontal_degrees,
            down_degrees: vertical_degrees,
            left_degrees: horizontal_degrees,
        }
    }
}
