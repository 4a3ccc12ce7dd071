use crate::camera::{PerspectiveCamera, Vec3};
use webvr_stereo_api::{VREye, VRFrameData};

/// Layer seen only by the left eye camera.
pub const LEFT_EYE_LAYER: u32 = 1;
/// Layer seen only by the right eye camera.
pub const RIGHT_EYE_LAYER: u32 = 2;

/// The pair of cameras used to render a stereo frame.
///
/// Both are rebuilt from the scene camera every frame and never edited on
/// their own.
#[derive(Debug, Clone)]
pub struct StereoCameras {
    left: PerspectiveCamera,
    right: PerspectiveCamera,
}

impl Default for StereoCameras {
    fn default() -> StereoCameras {
        StereoCameras::new()
    }
}

impl StereoCameras {
    pub fn new() -> StereoCameras {
        let mut left = PerspectiveCamera::default();
        left.name = "left eye".into();
        left.layers.enable(LEFT_EYE_LAYER);

        let mut right = PerspectiveCamera::default();
        right.name = "right eye".into();
        right.layers.enable(RIGHT_EYE_LAYER);

        StereoCameras { left, right }
    }

    pub fn camera(&self, eye: VREye) -> &PerspectiveCamera {
        match eye {
            VREye::Left => &self.left,
            VREye::Right => &self.right,
        }
    }

    /// Derives both eye cameras from `camera`.
    ///
    /// Each eye is decomposed from the world matrix on its own, moved along
    /// its offset in eye space, and handed the device projection as is.
    /// `frame` must have been fetched with the scene camera's depth range.
    pub fn update(&mut self, camera: &PerspectiveCamera, offsets: [[f32; 3]; 2], frame: &VRFrameData) {
        for eye in VREye::BOTH {
            let offset = offsets[eye.index()];
            let target = match eye {
                VREye::Left => &mut self.left,
                VREye::Right => &mut self.right,
            };
            target.near = camera.near;
            target.far = camera.far;
            target.set_from_matrix(camera.world_matrix());
            target.translate_on_axis(&Vec3::new(offset[0], offset[1], offset[2]), 1.0);
            target.set_projection_matrix(frame.projection_matrix(eye));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Quat;
    use euclid::Angle;

    fn frame() -> VRFrameData {
        let mut frame = VRFrameData::default();
        frame.left_projection_matrix[0] = 0.75620246;
        frame.left_projection_matrix[8] = -0.05713458;
        frame.right_projection_matrix[0] = 0.75646526;
        frame.right_projection_matrix[8] = 0.055611316;
        frame
    }

    #[test]
    fn eyes_sit_either_side_of_head() {
        let mut head = PerspectiveCamera::default();
        head.position = Vec3::new(0.0, 1.6, 0.0);
        head.update_matrix();

        let mut eyes = StereoCameras::new();
        eyes.update(&head, [[-0.032, 0.0, 0.0], [0.032, 0.0, 0.0]], &frame());

        assert!((eyes.camera(VREye::Left).position.x + 0.032).abs() < 1e-6);
        assert!((eyes.camera(VREye::Right).position.x - 0.032).abs() < 1e-6);
        assert!((eyes.camera(VREye::Left).position.y - 1.6).abs() < 1e-6);
    }

    #[test]
    fn offsets_follow_head_rotation() {
        let mut head = PerspectiveCamera::default();
        head.orientation = Quat::around_y(Angle::radians(std::f32::consts::PI));
        head.update_matrix();

        let mut eyes = StereoCameras::new();
        eyes.update(&head, [[-0.032, 0.0, 0.0], [0.032, 0.0, 0.0]], &frame());

        // Facing backwards, the left eye ends up on world +x.
        assert!((eyes.camera(VREye::Left).position.x - 0.032).abs() < 1e-6);
        assert!((eyes.camera(VREye::Right).position.x + 0.032).abs() < 1e-6);
    }

    #[test]
    fn projections_are_copied_bit_for_bit() {
        let head = PerspectiveCamera::default();
        let frame = frame();
        let mut eyes = StereoCameras::new();
        eyes.update(&head, [[0.0; 3]; 2], &frame);

        assert_eq!(eyes.camera(VREye::Left).projection_matrix(), &frame.left_projection_matrix);
        assert_eq!(eyes.camera(VREye::Right).projection_matrix(), &frame.right_projection_matrix);
    }

    #[test]
    fn eye_layers_are_exclusive() {
        let eyes = StereoCameras::new();
        let left = eyes.camera(VREye::Left).layers;
        let right = eyes.camera(VREye::Right).layers;
        assert!(left.is_enabled(LEFT_EYE_LAYER) && !left.is_enabled(RIGHT_EYE_LAYER));
        assert!(right.is_enabled(RIGHT_EYE_LAYER) && !right.is_enabled(LEFT_EYE_LAYER));
    }
}
