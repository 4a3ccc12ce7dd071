//! The scene camera and the math needed to derive eye cameras from it.
//!
//! Matrices use euclid's row-vector convention: `a.then(&b)` applies `a`
//! first. A flat device matrix maps onto it element for element.

use euclid::default::{Rotation3D, Transform3D, Vector3D};
use webvr_stereo_api::identity_matrix;

pub type Mat4 = Transform3D<f32>;
pub type Quat = Rotation3D<f32>;
pub type Vec3 = Vector3D<f32>;

/// Render layers a camera sees. Objects on layer 0 are visible to every camera.
///
/// Layers are numbered `0..Layers::COUNT`; anything past that is never enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layers(u32);

impl Default for Layers {
    fn default() -> Layers {
        Layers(1)
    }
}

impl Layers {
    pub const COUNT: u32 = u32::BITS;

    fn bit(layer: u32) -> u32 {
        1u32.checked_shl(layer).unwrap_or(0)
    }

    pub fn enable(&mut self, layer: u32) {
        self.0 |= Layers::bit(layer);
    }

    pub fn disable(&mut self, layer: u32) {
        self.0 &= !Layers::bit(layer);
    }

    pub fn is_enabled(&self, layer: u32) -> bool {
        self.0 & Layers::bit(layer) != 0
    }

    pub fn intersects(&self, other: &Layers) -> bool {
        self.0 & other.0 != 0
    }
}

#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub name: String,
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub layers: Layers,
    matrix: Mat4,
    projection: [f32; 16],
}

impl Default for PerspectiveCamera {
    fn default() -> PerspectiveCamera {
        PerspectiveCamera::new(50.0, 1.0, 0.1, 2000.0)
    }
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera {
            name: String::new(),
            position: Vec3::zero(),
            orientation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            fov,
            aspect,
            near,
            far,
            layers: Layers::default(),
            matrix: Mat4::identity(),
            projection: identity_matrix!(),
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recomputes the local matrix from position, orientation and scale,
    /// discarding anything previously applied with `apply_matrix`.
    pub fn update_matrix(&mut self) {
        self.matrix = compose(&self.position, &self.orientation, &self.scale);
    }

    /// Composes `transform` on top of the current matrix. Position,
    /// orientation and scale keep describing the untransformed pose.
    pub fn apply_matrix(&mut self, transform: &Mat4) {
        self.matrix = self.matrix.then(transform);
    }

    /// Cameras have no parent, so the local matrix is the world matrix.
    pub fn world_matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Resets position, orientation and scale from a world matrix.
    pub fn set_from_matrix(&mut self, matrix: &Mat4) {
        let (position, orientation, scale) = decompose(matrix);
        self.position = position;
        self.orientation = orientation;
        self.scale = scale;
        self.update_matrix();
    }

    /// Moves the camera by `distance` times `axis`, with `axis` expressed in
    /// the camera's own frame.
    pub fn translate_on_axis(&mut self, axis: &Vec3, distance: f32) {
        let offset = self.orientation.transform_vector3d(*axis) * distance;
        self.position += offset;
        self.update_matrix();
    }

    pub fn projection_matrix(&self) -> &[f32; 16] {
        &self.projection
    }

    /// Replaces the whole projection matrix with `elements`, unchanged.
    pub fn set_projection_matrix(&mut self, elements: &[f32; 16]) {
        self.projection = *elements;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 && aspect != self.aspect {
            self.aspect = aspect;
            self.update_projection_matrix();
        }
    }

    /// Rebuilds the projection from fov, aspect, near and far.
    pub fn update_projection_matrix(&mut self) {
        self.projection = perspective(self.fov.to_radians(), self.aspect, self.near, self.far);
    }
}

// https://github.com/toji/gl-matrix/blob/bd3307196563fbb331b40fc6ebecbbfcc2a4722c/src/mat4.js#L1271
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> [f32; 16] {
    let f = 1.0 / (fovy / 2.0).tan();
    let nf = 1.0 / (near - far);

    #[rustfmt::skip]
    let matrix = [
        f / aspect, 0.0, 0.0,                   0.0,
        0.0,        f,   0.0,                   0.0,
        0.0,        0.0, (far + near) * nf,     -1.0,
        0.0,        0.0, 2.0 * far * near * nf, 0.0,
    ];
    matrix
}

/// Scale, then rotate, then translate.
pub fn compose(position: &Vec3, orientation: &Quat, scale: &Vec3) -> Mat4 {
    Mat4::scale(scale.x, scale.y, scale.z)
        .then(&orientation.to_transform())
        .then(&Mat4::translation(position.x, position.y, position.z))
}

/// Splits an affine matrix into translation, rotation and scale.
/// A negative determinant is folded into the x scale.
pub fn decompose(m: &Mat4) -> (Vec3, Quat, Vec3) {
    let position = Vec3::new(m.m41, m.m42, m.m43);

    let mut sx = Vec3::new(m.m11, m.m12, m.m13).length();
    let sy = Vec3::new(m.m21, m.m22, m.m23).length();
    let sz = Vec3::new(m.m31, m.m32, m.m33).length();
    if m.determinant() < 0.0 {
        sx = -sx;
    }
    let scale = Vec3::new(sx, sy, sz);

    if sx == 0.0 || sy == 0.0 || sz == 0.0 {
        return (position, Quat::identity(), scale);
    }

    // Rotation in column-vector form: a[row][col].
    let a = [
        [m.m11 / sx, m.m21 / sy, m.m31 / sz],
        [m.m12 / sx, m.m22 / sy, m.m32 / sz],
        [m.m13 / sx, m.m23 / sy, m.m33 / sz],
    ];

    (position, rotation_to_quat(&a), scale)
}

// Adapted from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
fn rotation_to_quat(a: &[[f32; 3]; 3]) -> Quat {
    let trace = a[0][0] + a[1][1] + a[2][2];

    let (x, y, z, w) = if trace > 0.0 {
        let s = 0.5 / (trace + 1.0).sqrt();
        ((a[2][1] - a[1][2]) * s,
         (a[0][2] - a[2][0]) * s,
         (a[1][0] - a[0][1]) * s,
         0.25 / s)
    } else if a[0][0] > a[1][1] && a[0][0] > a[2][2] {
        let s = 2.0 * (1.0 + a[0][0] - a[1][1] - a[2][2]).sqrt();
        (0.25 * s,
         (a[0][1] + a[1][0]) / s,
         (a[0][2] + a[2][0]) / s,
         (a[2][1] - a[1][2]) / s)
    } else if a[1][1] > a[2][2] {
        let s = 2.0 * (1.0 + a[1][1] - a[0][0] - a[2][2]).sqrt();
        ((a[0][1] + a[1][0]) / s,
         0.25 * s,
         (a[1][2] + a[2][1]) / s,
         (a[0][2] - a[2][0]) / s)
    } else {
        let s = 2.0 * (1.0 + a[2][2] - a[0][0] - a[1][1]).sqrt();
        ((a[0][2] + a[2][0]) / s,
         (a[1][2] + a[2][1]) / s,
         0.25 * s,
         (a[1][0] - a[0][1]) / s)
    };

    Quat::quaternion(x, y, z, w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::Angle;

    const EPSILON: f32 = 1e-5;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPSILON, "{:?} != {:?}", a, b);
    }

    // q and -q are the same rotation.
    fn assert_quat_eq(a: &Quat, b: &Quat) {
        let dot = a.i * b.i + a.j * b.j + a.k * b.k + a.r * b.r;
        assert!((dot.abs() - 1.0).abs() < EPSILON, "{:?} != {:?}", a, b);
    }

    #[test]
    fn decompose_recovers_compose_inputs() {
        let position = Vec3::new(1.0, -2.0, 3.5);
        let orientation = Quat::around_axis(Vec3::new(1.0, 2.0, -0.5).normalize(), Angle::radians(2.3));
        let scale = Vec3::new(2.0, 0.5, 1.5);

        let (p, q, s) = decompose(&compose(&position, &orientation, &scale));

        assert_vec_eq(p, position);
        assert_quat_eq(&q, &orientation);
        assert_vec_eq(s, scale);
    }

    #[test]
    fn decompose_handles_half_turns() {
        // Trace is -1 here, exercising the non-trace branches.
        for axis in [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)] {
            let orientation = Quat::around_axis(axis, Angle::radians(std::f32::consts::PI));
            let (_, q, _) = decompose(&compose(&Vec3::zero(), &orientation, &Vec3::new(1.0, 1.0, 1.0)));
            assert_quat_eq(&q, &orientation);
        }
    }

    #[test]
    fn translate_on_axis_moves_in_camera_space() {
        let mut camera = PerspectiveCamera::default();
        camera.position = Vec3::new(0.0, 1.0, 0.0);
        camera.orientation = Quat::around_y(Angle::radians(std::f32::consts::FRAC_PI_2));
        camera.translate_on_axis(&Vec3::new(1.0, 0.0, 0.0), 1.0);

        // A quarter turn about +y maps local +x onto world -z.
        assert_vec_eq(camera.position, Vec3::new(0.0, 1.0, -1.0));
        assert_eq!(camera.world_matrix().m42, 1.0);
    }

    #[test]
    fn apply_matrix_keeps_pose_fields() {
        let mut camera = PerspectiveCamera::default();
        camera.position = Vec3::new(0.0, 0.0, 1.0);
        camera.update_matrix();
        camera.apply_matrix(&Mat4::translation(0.0, 1.6, 0.0));

        assert_vec_eq(camera.position, Vec3::new(0.0, 0.0, 1.0));
        let world = camera.world_matrix();
        assert_vec_eq(Vec3::new(world.m41, world.m42, world.m43), Vec3::new(0.0, 1.6, 1.0));
    }

    #[test]
    fn projection_replacement_is_exact() {
        let mut camera = PerspectiveCamera::default();
        let device = [0.75620246, 0.0, 0.0, 0.0,
                      0.0, 0.68050665, 0.0, 0.0,
                      -0.05713458, -0.0021225351, -1.0000999, -1.0,
                      0.0, 0.0, -0.10000999, 0.0];
        camera.set_projection_matrix(&device);
        assert_eq!(camera.projection_matrix(), &device);
    }

    #[test]
    fn aspect_change_rebuilds_projection() {
        let mut camera = PerspectiveCamera::new(60.0, 1.0, 0.1, 1000.0);
        let square = *camera.projection_matrix();
        camera.set_aspect(2.0);
        assert!((camera.projection_matrix()[0] - square[0] / 2.0).abs() < EPSILON);
        assert_eq!(camera.projection_matrix()[5], square[5]);
        assert_eq!(camera.projection_matrix()[11], -1.0);
    }

    #[test]
    fn layers_mask() {
        let mut left = Layers::default();
        left.enable(1);
        let mut only_right = Layers(0);
        only_right.enable(2);

        assert!(left.is_enabled(0));
        assert!(left.is_enabled(1));
        assert!(!left.intersects(&only_right));
        left.disable(1);
        assert!(!left.is_enabled(1));
    }

    #[test]
    fn layers_past_the_mask_are_ignored() {
        let mut layers = Layers::default();
        layers.enable(31);
        assert!(layers.is_enabled(31));

        layers.enable(Layers::COUNT);
        layers.enable(100);
        assert!(!layers.is_enabled(Layers::COUNT));
        assert!(!layers.is_enabled(100));

        layers.disable(Layers::COUNT);
        assert_eq!(layers, {
            let mut expected = Layers::default();
            expected.enable(31);
            expected
        });
    }
}
