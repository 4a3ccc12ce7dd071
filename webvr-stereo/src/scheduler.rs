//! Frame pacing: when the frame loop gets to run its next tick.

use crate::config::StereoConfig;
use log::debug;
use std::thread;
use std::time::{Duration, Instant};
use webvr_stereo_api::{utils, VRDisplayPtr};

/// Hands control back to the host between ticks.
pub trait FrameScheduler {
    /// Arms the next frame. Called once at the end of every tick.
    fn request_frame(&mut self);

    /// Suspends until the armed frame is due and returns its timestamp in
    /// milliseconds. Returns None when no frame was requested.
    fn wait_frame(&mut self) -> Option<f64>;
}

/// Paces frames on the host display refresh.
pub struct HostPacedScheduler {
    interval: Duration,
    last_frame: Option<Instant>,
    pending: bool,
}

impl HostPacedScheduler {
    pub fn new(interval: Duration) -> HostPacedScheduler {
        HostPacedScheduler {
            interval,
            last_frame: None,
            pending: false,
        }
    }
}

impl FrameScheduler for HostPacedScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
    }

    fn wait_frame(&mut self) -> Option<f64> {
        if !self.pending {
            return None;
        }
        self.pending = false;

        if let Some(last) = self.last_frame {
            let due = last + self.interval;
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
        }
        self.last_frame = Some(Instant::now());
        Some(utils::timestamp())
    }
}

/// Paces frames on the display's own vsync while it presents, and on the
/// host refresh otherwise.
pub struct DevicePacedScheduler {
    display: VRDisplayPtr,
    host: HostPacedScheduler,
}

impl DevicePacedScheduler {
    pub fn new(display: VRDisplayPtr, host_interval: Duration) -> DevicePacedScheduler {
        DevicePacedScheduler {
            display,
            host: HostPacedScheduler::new(host_interval),
        }
    }
}

impl FrameScheduler for DevicePacedScheduler {
    fn request_frame(&mut self) {
        self.host.request_frame();
    }

    fn wait_frame(&mut self) -> Option<f64> {
        if !self.display.borrow().is_presenting() {
            return self.host.wait_frame();
        }
        if !self.host.pending {
            return None;
        }
        self.host.pending = false;
        self.display.borrow_mut().sync_poses();
        self.host.last_frame = Some(Instant::now());
        Some(utils::timestamp())
    }
}

/// Picks the scheduler for a display once, from its capabilities.
pub fn scheduler_for(display: &VRDisplayPtr, config: &StereoConfig) -> Box<dyn FrameScheduler> {
    let paced = display.borrow().data().capabilities.has_frame_pacing;
    if paced {
        debug!("Using device paced frames");
        Box::new(DevicePacedScheduler::new(display.clone(), config.host_frame_interval()))
    } else {
        debug!("Using host paced frames");
        Box::new(HostPacedScheduler::new(config.host_frame_interval()))
    }
}
