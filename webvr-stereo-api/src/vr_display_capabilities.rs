#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};

/// describes the capabilities of a VRDisplay. These are expected to be static per-device/per-user.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRDisplayCapabilities {
    /// true if the VRDisplay is capable of tracking its position.
    pub has_position: bool,

    /// true if the VRDisplay is capable of tracking its orientation.
    pub has_orientation: bool,

    /// true if the VRDisplay is separate from the device's primary display
    pub has_external_display: bool,

    /// true if the VRDisplay is capable of presenting content to an HMD or similar device.
    pub can_present: bool,

    /// true if the VRDisplay paces frames itself through `sync_poses`.
    /// Displays without it are driven by the host display refresh.
    pub has_frame_pacing: bool,

    /// Indicates the maximum length of the array that request_present() will accept,
    /// Must be 1 if can_present is true, 0 otherwise.
    pub max_layers: u64,
}
