#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use self::mock::{MockServiceCreator, MockVRControlMsg, MockVRDisplay, MockVRDisplayPtr, MockVRState};
