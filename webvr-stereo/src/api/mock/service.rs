use super::display::{MockVRDisplay, MockVRDisplayPtr};
use super::MockVRControlMsg;
use std::sync::mpsc::Receiver;
use webvr_stereo_api::{VRDisplayPtr, VRError, VRService};

pub struct MockVRService {
    display: MockVRDisplayPtr,
}

impl VRService for MockVRService {
    fn initialize(&mut self) -> Result<(), VRError> {
        Ok(())
    }

    fn fetch_displays(&mut self) -> Result<Vec<VRDisplayPtr>, VRError> {
        let display: VRDisplayPtr = self.display.clone();
        Ok(vec![display])
    }

    fn is_available(&self) -> bool {
        true
    }
}

impl MockVRService {
    pub fn new() -> MockVRService {
        MockVRService {
            display: MockVRDisplay::new(),
        }
    }

    pub fn new_with_receiver(rcv: Receiver<MockVRControlMsg>) -> MockVRService {
        // Messages are drained by the display itself at the start of each
        // call, so no thread is needed to keep its state current.
        MockVRService {
            display: MockVRDisplay::new_with_receiver(rcv),
        }
    }

    pub fn display(&self) -> MockVRDisplayPtr {
        self.display.clone()
    }
}
