mod display;
mod service;

pub use self::display::{MockVRDisplay, MockVRDisplayPtr, MockVRState};

use std::sync::mpsc::{channel, Sender};
use webvr_stereo_api::{VREyeParameters, VRService, VRServiceCreator, VRStageParameters};

pub struct MockServiceCreator;

impl MockServiceCreator {
    pub fn new() -> Box<dyn VRServiceCreator> {
        Box::new(MockServiceCreator)
    }

    /// A mock service steered from the returned sender.
    pub fn new_service_with_remote() -> (Box<dyn VRService>, Sender<MockVRControlMsg>) {
        let (send, rcv) = channel();
        let service = service::MockVRService::new_with_receiver(rcv);
        (Box::new(service), send)
    }

    /// A mock service along with a handle to its display, for inspection.
    pub fn new_service_with_display() -> (Box<dyn VRService>, MockVRDisplayPtr) {
        let service = service::MockVRService::new();
        let display = service.display();
        (Box::new(service), display)
    }
}

impl VRServiceCreator for MockServiceCreator {
    fn new_service(&self) -> Box<dyn VRService> {
        Box::new(service::MockVRService::new())
    }
}

#[derive(Debug, Clone)]
pub enum MockVRControlMsg {
    SetViewerPose(Option<[f32; 3]>, Option<[f32; 4]>),
    SetEyeParameters(VREyeParameters, VREyeParameters),
    SetProjectionMatrices([f32; 16], [f32; 16]),
    SetStageParameters(Option<VRStageParameters>),
    SetLayerBounds(Option<Vec<f32>>, Option<Vec<f32>>),
    RejectPresent(bool),
    FailSubmit(bool),
    ExitPresent,
    Focus,
    Blur,
}
