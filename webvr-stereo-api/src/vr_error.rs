use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VRError {
    #[error("no VR display found")]
    NoDeviceFound,

    #[error("presentation request rejected: {0}")]
    PresentationRejected(String),

    #[error("layer bounds must have 4 components, got {0}")]
    MalformedLayerBounds(usize),

    #[error("frame submission failed: {0}")]
    SubmitFailed(String),

    #[error("VR service error: {0}")]
    Service(String),
}
