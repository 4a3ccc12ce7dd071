use super::MockVRControlMsg;
use log::debug;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::thread;
use std::time::Duration;
use webvr_stereo_api::{utils, VRDisplay, VRDisplayData, VRDisplayEvent, VRError, VREyeParameters,
                       VRFrameData, VRLayer, VRPose, VRStageParameters};

pub type MockVRDisplayPtr = Rc<RefCell<MockVRDisplay>>;

pub struct MockVRDisplay {
    display_id: u32,
    state: MockVRState,
    receiver: Option<Receiver<MockVRControlMsg>>,
}

/// Everything the mock reports, plus a record of what it was asked to do.
#[derive(Debug, Clone)]
pub struct MockVRState {
    pub pose: VRPose,
    pub left_eye_parameters: VREyeParameters,
    pub right_eye_parameters: VREyeParameters,
    pub left_projection_matrix: [f32; 16],
    pub right_projection_matrix: [f32; 16],
    pub stage_parameters: Option<VRStageParameters>,
    pub left_bounds: Option<Vec<f32>>,
    pub right_bounds: Option<Vec<f32>>,
    pub reject_present: bool,
    pub fail_submit: bool,
    pub presenting: bool,
    pub layers: Vec<VRLayer>,
    pub focused: bool,
    pub depth_near: f64,
    pub depth_far: f64,
    pub frame_data_requests: u32,
    pub synced_frames: u32,
    pub submitted_frames: u32,
    pub events: VecDeque<VRDisplayEvent>,
}

impl Default for MockVRState {
    // Simulates a virtual HTC Vive
    fn default() -> MockVRState {
        let mut left_eye_parameters = VREyeParameters::default();
        left_eye_parameters.offset = [-0.035949998, 0.0, 0.015];
        left_eye_parameters.render_width = 1512;
        left_eye_parameters.render_height = 1680;
        left_eye_parameters.field_of_view.up_degrees = 55.82093048095703;
        left_eye_parameters.field_of_view.right_degrees = 51.26948547363281;
        left_eye_parameters.field_of_view.down_degrees = 55.707801818847656;
        left_eye_parameters.field_of_view.left_degrees = 54.42263412475586;

        let mut right_eye_parameters = VREyeParameters::default();
        right_eye_parameters.offset = [0.035949998, 0.0, 0.015];
        right_eye_parameters.render_width = 1512;
        right_eye_parameters.render_height = 1680;
        right_eye_parameters.field_of_view.up_degrees = 55.898048400878906;
        right_eye_parameters.field_of_view.right_degrees = 54.37410354614258;
        right_eye_parameters.field_of_view.down_degrees = 55.614715576171875;
        right_eye_parameters.field_of_view.left_degrees = 51.304901123046875;

        MockVRState {
            pose: VRPose {
                position: Some([0.5, -0.7, -0.3]),
                orientation: Some([0.9385081, -0.08066622, -0.3347714, 0.024972256]),
            },
            left_eye_parameters,
            right_eye_parameters,
            left_projection_matrix: [0.75620246, 0.0, 0.0, 0.0,
                                     0.0, 0.68050665, 0.0, 0.0,
                                    -0.05713458, -0.0021225351, -1.0000999, -1.0,
                                     0.0, 0.0, -0.10000999, 0.0],
            right_projection_matrix: [0.75646526, 0.0, 0.0, 0.0,
                                      0.0, 0.68069947, 0.0, 0.0,
                                      0.055611316, -0.005315368, -1.0000999, -1.0,
                                      0.0, 0.0, -0.10000999, 0.0],
            stage_parameters: Some(VRStageParameters {
                sitting_to_standing_transform: [-0.9317312, 0.0, 0.36314875, 0.0, 0.0, 0.99999994, 0.0, 0.0, -0.36314875,
                                                0.0, -0.9317312, 0.0, 0.23767996, 1.6813644, 0.45370483, 1.0],
                size_x: 2.0,
                size_z: 2.0,
            }),
            left_bounds: None,
            right_bounds: None,
            reject_present: false,
            fail_submit: false,
            presenting: false,
            layers: Vec::new(),
            focused: true,
            depth_near: 0.01,
            depth_far: 10000.0,
            frame_data_requests: 0,
            synced_frames: 0,
            submitted_frames: 0,
            events: VecDeque::new(),
        }
    }
}

impl MockVRDisplay {
    pub fn new() -> MockVRDisplayPtr {
        Rc::new(RefCell::new(MockVRDisplay {
            display_id: utils::new_id(),
            state: MockVRState::default(),
            receiver: None,
        }))
    }

    pub fn new_with_receiver(receiver: Receiver<MockVRControlMsg>) -> MockVRDisplayPtr {
        let display = MockVRDisplay::new();
        display.borrow_mut().receiver = Some(receiver);
        display
    }

    pub fn state(&self) -> &MockVRState {
        &self.state
    }

    pub fn handle_msg(&mut self, msg: MockVRControlMsg) {
        debug!("Mock VR message {:?}", msg);
        match msg {
            MockVRControlMsg::SetViewerPose(position, orientation) => {
                self.state.pose = VRPose { position, orientation };
            },
            MockVRControlMsg::SetEyeParameters(left, right) => {
                self.state.left_eye_parameters = left;
                self.state.right_eye_parameters = right;
                let data = self.data();
                self.state.events.push_back(VRDisplayEvent::Change(data));
            },
            MockVRControlMsg::SetProjectionMatrices(left, right) => {
                self.state.left_projection_matrix = left;
                self.state.right_projection_matrix = right;
            },
            MockVRControlMsg::SetStageParameters(stage) => {
                self.state.stage_parameters = stage;
                let data = self.data();
                self.state.events.push_back(VRDisplayEvent::Change(data));
            },
            MockVRControlMsg::SetLayerBounds(left, right) => {
                self.state.left_bounds = left;
                self.state.right_bounds = right;
            },
            MockVRControlMsg::RejectPresent(reject) => {
                self.state.reject_present = reject;
            },
            MockVRControlMsg::FailSubmit(fail) => {
                self.state.fail_submit = fail;
            },
            MockVRControlMsg::ExitPresent => {
                self.exit_present();
            },
            MockVRControlMsg::Focus => {
                self.state.focused = true;
                let data = self.data();
                self.state.events.push_back(VRDisplayEvent::Focus(data));
            },
            MockVRControlMsg::Blur => {
                self.state.focused = false;
                let data = self.data();
                self.state.events.push_back(VRDisplayEvent::Blur(data));
            },
        }
    }

    fn process_messages(&mut self) {
        let pending: Vec<MockVRControlMsg> = match self.receiver {
            Some(ref receiver) => receiver.try_iter().collect(),
            None => return,
        };
        for msg in pending {
            self.handle_msg(msg);
        }
    }

    fn present_changed(&mut self) {
        let data = self.data();
        let presenting = self.state.presenting;
        self.state.events.push_back(VRDisplayEvent::PresentChange(data, presenting));
    }
}

impl VRDisplay for MockVRDisplay {

    fn id(&self) -> u32 {
        self.display_id
    }

    fn data(&self) -> VRDisplayData {
        let mut data = VRDisplayData::default();

        data.display_name = "Mock VRDisplay".into();
        data.display_id = self.display_id;
        data.connected = true;

        data.capabilities.can_present = true;
        data.capabilities.has_orientation = true;
        data.capabilities.has_external_display = true;
        data.capabilities.has_position = true;
        data.capabilities.has_frame_pacing = true;
        data.capabilities.max_layers = 1;

        data.stage_parameters = self.state.stage_parameters.clone();
        data.left_eye_parameters = self.state.left_eye_parameters.clone();
        data.right_eye_parameters = self.state.right_eye_parameters.clone();

        data
    }

    fn frame_data(&mut self, near_z: f64, far_z: f64) -> VRFrameData {
        self.process_messages();
        self.state.depth_near = near_z;
        self.state.depth_far = far_z;
        self.state.frame_data_requests += 1;

        let left = self.state.left_eye_parameters.offset;
        let right = self.state.right_eye_parameters.offset;

        VRFrameData {
            timestamp: utils::timestamp(),
            left_projection_matrix: self.state.left_projection_matrix,
            left_view_matrix: [1.0, 0.0, 0.0, 0.0,
                               0.0, 1.0, 0.0, 0.0,
                               0.0, 0.0, 1.0, 0.0,
                               -left[0], -left[1], -left[2], 1.0],
            right_projection_matrix: self.state.right_projection_matrix,
            right_view_matrix: [1.0, 0.0, 0.0, 0.0,
                                0.0, 1.0, 0.0, 0.0,
                                0.0, 0.0, 1.0, 0.0,
                                -right[0], -right[1], -right[2], 1.0],
            pose: self.state.pose,
        }
    }

    fn reset_pose(&mut self) {
        self.state.pose = VRPose::default();
    }

    fn sync_poses(&mut self) {
        // Simulate Vsync
        thread::sleep(Duration::from_millis(1));
        self.state.synced_frames += 1;
    }

    fn layers(&self) -> Vec<VRLayer> {
        self.state.layers.clone()
    }

    fn request_present(&mut self, layers: &[VRLayer]) -> Result<(), VRError> {
        self.process_messages();
        if self.state.reject_present {
            return Err(VRError::PresentationRejected("mock display refused to present".into()));
        }
        if layers.is_empty() {
            return Err(VRError::PresentationRejected("no layers to present".into()));
        }
        if self.state.presenting {
            return Ok(());
        }

        // Bounds the caller left out are filled in from the display's own hints.
        self.state.layers = layers.iter().take(1).map(|layer| VRLayer {
            source: layer.source,
            left_bounds: layer.left_bounds.clone().or_else(|| self.state.left_bounds.clone()),
            right_bounds: layer.right_bounds.clone().or_else(|| self.state.right_bounds.clone()),
        }).collect();
        self.state.presenting = true;
        self.present_changed();
        Ok(())
    }

    fn exit_present(&mut self) {
        if !self.state.presenting {
            return;
        }
        self.state.presenting = false;
        self.state.layers.clear();
        self.present_changed();
    }

    fn is_presenting(&self) -> bool {
        self.state.presenting
    }

    fn submit_frame(&mut self) -> Result<(), VRError> {
        self.process_messages();
        if !self.state.presenting {
            return Err(VRError::SubmitFailed("display is not presenting".into()));
        }
        if self.state.fail_submit {
            return Err(VRError::SubmitFailed("mock frame dropped".into()));
        }
        self.state.submitted_frames += 1;
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<VRDisplayEvent> {
        self.process_messages();
        self.state.events.drain(..).collect()
    }
}
