//! Stereo presentation for head-mounted displays.
//!
//! A [`FrameLoop`] reads the head pose every frame, moves the scene camera,
//! and either draws a desktop preview or two eye views side by side, which it
//! then submits to the display in step with the display's own refresh.

pub mod api;
pub mod camera;
pub mod config;
pub mod eye;
pub mod frame_loop;
pub mod pose;
pub mod renderer;
pub mod scheduler;
pub mod viewport;
mod vr_manager;

pub use webvr_stereo_api::*;

pub use camera::{Layers, PerspectiveCamera};
pub use config::StereoConfig;
pub use eye::StereoCameras;
pub use frame_loop::{FrameLoop, LoopState, RenderMode};
pub use renderer::{Renderer, Scene};
pub use scheduler::{DevicePacedScheduler, FrameScheduler, HostPacedScheduler};
pub use viewport::{LayerBounds, NormalizedBounds, SurfaceSize, VRViewport};
pub use vr_manager::VRServiceManager;
