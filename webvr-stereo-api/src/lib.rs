//! Device-facing data model for stereo presentation on a head-mounted display.
//!
//! Matrices crossing the device boundary are flat `[f32; 16]` arrays in the
//! column-major order WebVR devices report them in.

/// A flat 4x4 identity matrix.
#[macro_export]
macro_rules! identity_matrix {
    () => ([1.0, 0.0, 0.0, 0.0,  0.0, 1.0, 0.0, 0.0,  0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0, 1.0]);
}

pub mod utils;

pub mod vr_display;
pub mod vr_service;
pub mod vr_display_data;
pub mod vr_display_capabilities;
pub mod vr_error;
pub mod vr_eye;
pub mod vr_eye_parameters;
pub mod vr_frame_data;
pub mod vr_layer;
pub mod vr_pose;
pub mod vr_stage_parameters;
pub mod vr_event;
pub mod vr_field_view;

pub use vr_display::{VRDisplay, VRDisplayPtr};
pub use vr_service::{VRService, VRServiceCreator};
pub use vr_display_data::VRDisplayData;
pub use vr_display_capabilities::VRDisplayCapabilities;
pub use vr_error::VRError;
pub use vr_eye::VREye;
pub use vr_eye_parameters::VREyeParameters;
pub use vr_frame_data::VRFrameData;
pub use vr_layer::VRLayer;
pub use vr_pose::VRPose;
pub use vr_stage_parameters::{Seated, Standing, VRStageParameters};
pub use vr_event::VRDisplayEvent;
pub use vr_field_view::VRFieldOfView;
