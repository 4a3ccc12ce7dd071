use crate::{VRDisplayPtr, VRError};

pub trait VRService {
    /// Failures are reported as `VRError::Service`.
    fn initialize(&mut self) -> Result<(), VRError>;

    fn fetch_displays(&mut self) -> Result<Vec<VRDisplayPtr>, VRError>;

    fn is_available(&self) -> bool;
}

pub trait VRServiceCreator {
    fn new_service(&self) -> Box<dyn VRService>;
}
