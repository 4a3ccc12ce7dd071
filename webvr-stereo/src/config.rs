#[cfg(feature = "serde-serialization")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the scene camera and the host frame cadence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde-serialization", serde(default))]
pub struct StereoConfig {
    /// Vertical field of view of the desktop preview, in degrees.
    pub fov: f32,
    /// Initial aspect ratio; replaced by the surface aspect on the first normal frame.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Refresh rate of the host display, used when the HMD doesn't pace frames.
    pub host_refresh_rate: f64,
}

impl Default for StereoConfig {
    fn default() -> StereoConfig {
        StereoConfig {
            fov: 60.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            host_refresh_rate: 60.0,
        }
    }
}

impl StereoConfig {
    pub fn host_frame_interval(&self) -> Duration {
        if self.host_refresh_rate > 0.0 {
            Duration::from_secs_f64(1.0 / self.host_refresh_rate)
        } else {
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_60hz() {
        let interval = StereoConfig::default().host_frame_interval();
        assert_eq!(interval.as_micros(), 16_666);
    }

    #[test]
    fn zero_rate_does_not_wait() {
        let config = StereoConfig { host_refresh_rate: 0.0, ..StereoConfig::default() };
        assert_eq!(config.host_frame_interval(), Duration::ZERO);
    }
}
