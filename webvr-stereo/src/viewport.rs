//! Splitting the output surface between the two eyes.

use euclid::default::Size2D;
use log::debug;
#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};
use webvr_stereo_api::{VREye, VRError, VRLayer};

pub type SurfaceSize = Size2D<u32>;

pub const DEFAULT_LEFT_BOUNDS: NormalizedBounds = NormalizedBounds::new(0.0, 0.0, 0.5, 1.0);
pub const DEFAULT_RIGHT_BOUNDS: NormalizedBounds = NormalizedBounds::new(0.5, 0.0, 0.5, 1.0);

/// A pixel rectangle of the output surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRViewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl VRViewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn full(size: SurfaceSize) -> Self {
        Self::new(0, 0, size.width as i32, size.height as i32)
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}

/// A rectangle in fractions of the surface: [x, y, w, h].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct NormalizedBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NormalizedBounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_slice(bounds: &[f32]) -> Result<Self, VRError> {
        match *bounds {
            [x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(VRError::MalformedLayerBounds(bounds.len())),
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Scales the bounds to pixels, rounding each component to the nearest
    /// pixel. Negative results clamp to zero.
    pub fn to_viewport(&self, size: SurfaceSize) -> VRViewport {
        let w = size.width as f64;
        let h = size.height as f64;
        let px = |extent: f64, fraction: f32| (extent * fraction as f64).round().max(0.0) as i32;
        VRViewport::new(
            px(w, self.x),
            px(h, self.y),
            px(w, self.width),
            px(h, self.height),
        )
    }
}

/// Per-eye bounds of the presented layer.
///
/// Taken from the device when presentation starts or stops; anything missing
/// or malformed falls back to a side-by-side half split.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct LayerBounds {
    pub left: NormalizedBounds,
    pub right: NormalizedBounds,
}

impl Default for LayerBounds {
    fn default() -> LayerBounds {
        LayerBounds {
            left: DEFAULT_LEFT_BOUNDS,
            right: DEFAULT_RIGHT_BOUNDS,
        }
    }
}

impl LayerBounds {
    pub fn from_layer(layer: Option<&VRLayer>) -> LayerBounds {
        let left = layer.and_then(|layer| layer.left_bounds.as_deref());
        let right = layer.and_then(|layer| layer.right_bounds.as_deref());
        LayerBounds {
            left: Self::or_default(left, DEFAULT_LEFT_BOUNDS),
            right: Self::or_default(right, DEFAULT_RIGHT_BOUNDS),
        }
    }

    fn or_default(bounds: Option<&[f32]>, default: NormalizedBounds) -> NormalizedBounds {
        match bounds.map(NormalizedBounds::from_slice) {
            Some(Ok(bounds)) => bounds,
            Some(Err(err)) => {
                debug!("Ignoring layer bounds: {}", err);
                default
            },
            None => default,
        }
    }

    pub fn bounds(&self, eye: VREye) -> &NormalizedBounds {
        match eye {
            VREye::Left => &self.left,
            VREye::Right => &self.right,
        }
    }

    /// Pixel rectangles for the left and right eye at the given surface size.
    pub fn partition(&self, size: SurfaceSize) -> (VRViewport, VRViewport) {
        (self.left.to_viewport(size), self.right.to_viewport(size))
    }
}
