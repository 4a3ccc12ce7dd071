use crate::{VRDisplayData, VRDisplayEvent, VRError, VREye, VREyeParameters, VRFrameData, VRLayer, VRStageParameters};
use std::cell::RefCell;
use std::rc::Rc;

/// Displays are driven from a single frame loop, so the handle is not `Send`.
pub type VRDisplayPtr = Rc<RefCell<dyn VRDisplay>>;

/// The VRDisplay trait forms the base of all VR device implementations
pub trait VRDisplay {

    /// Returns unique device identifier
    fn id(&self) -> u32;

    /// Returns the current display data.
    fn data(&self) -> VRDisplayData;

    /// Returns the parameters of one eye. Offsets may change from frame to frame.
    fn eye_parameters(&self, eye: VREye) -> VREyeParameters {
        self.data().eye_parameters(eye).clone()
    }

    /// Returns the room-scale stage description, if the display has one.
    fn stage_parameters(&self) -> Option<VRStageParameters> {
        self.data().stage_parameters
    }

    /// Sets the depth range and returns the VRFrameData for the current frame.
    /// Projection matrices reflect `near_z`/`far_z`.
    fn frame_data(&mut self, near_z: f64, far_z: f64) -> VRFrameData;

    /// Resets the pose for this display
    fn reset_pose(&mut self);

    /// Synchronization point to keep in step with the HMD.
    /// Returns once the display is ready for the next frame.
    fn sync_poses(&mut self);

    /// Returns the layers currently being presented, including their bounds hints.
    fn layers(&self) -> Vec<VRLayer>;

    /// Asks the display to start presenting the given layers.
    fn request_present(&mut self, layers: &[VRLayer]) -> Result<(), VRError>;

    /// Stops presenting. No-op if the display isn't presenting.
    fn exit_present(&mut self);

    fn is_presenting(&self) -> bool;

    /// Submits frame to the display.
    /// Must be called once per presenting frame or the compositor stalls.
    fn submit_frame(&mut self) -> Result<(), VRError>;

    /// Drains the events raised since the last call.
    fn poll_events(&mut self) -> Vec<VRDisplayEvent>;
}

impl PartialEq for dyn VRDisplay {
    fn eq(&self, other: &dyn VRDisplay) -> bool {
        self.id() == other.id()
    }
}
