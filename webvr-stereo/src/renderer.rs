use crate::camera::PerspectiveCamera;
use crate::viewport::{SurfaceSize, VRViewport};

/// Scene content drawn by a `Renderer`.
pub trait Scene {
    /// Advances animations by one frame. Called once per tick, after rendering.
    fn animate(&mut self) {}
}

/// The graphics backend the frame loop draws through.
///
/// Viewport and scissor state persist between calls, as they do on a GL
/// context.
pub trait Renderer<S: Scene> {
    /// Draws `scene` as seen from `camera` into the current viewport.
    fn render(&mut self, scene: &S, camera: &PerspectiveCamera);

    fn set_viewport(&mut self, viewport: VRViewport);

    fn set_scissor(&mut self, scissor: VRViewport);

    fn set_scissor_test(&mut self, enabled: bool);

    /// Current drawing buffer size in pixels. May change between frames.
    fn surface_size(&self) -> SurfaceSize;

    /// Identifies the surface handed to the display when presentation starts.
    fn surface_id(&self) -> u32 {
        0
    }

    /// True once the host has torn the surface down.
    fn surface_closed(&self) -> bool {
        false
    }
}
