//! The per-frame driver: pose, mode branch, render, submit, reschedule.

use crate::camera::PerspectiveCamera;
use crate::config::StereoConfig;
use crate::eye::StereoCameras;
use crate::pose;
use crate::renderer::{Renderer, Scene};
use crate::scheduler::{self, FrameScheduler};
use crate::viewport::{LayerBounds, VRViewport};
use crate::vr_manager::VRServiceManager;
use log::{debug, error, info, warn};
use webvr_stereo_api::{VRDisplayEvent, VRDisplayPtr, VRError, VREye, VRFrameData, VRLayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No display. The loop never runs.
    Idle,
    /// A display was found and the loop is armed.
    Discovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One full-surface draw with the scene camera.
    Normal,
    /// Two scissored draws, one per eye, then a submit.
    Stereo,
}

pub struct FrameLoop<S: Scene, R: Renderer<S>> {
    scene: S,
    renderer: R,
    config: StereoConfig,
    camera: PerspectiveCamera,
    eyes: StereoCameras,
    bounds: LayerBounds,
    display: Option<VRDisplayPtr>,
    discovery_failed: bool,
    scheduler: Option<Box<dyn FrameScheduler>>,
    last_mode: Option<RenderMode>,
    frame_count: u64,
}

impl<S: Scene, R: Renderer<S>> FrameLoop<S, R> {
    pub fn new(config: StereoConfig, scene: S, renderer: R) -> FrameLoop<S, R> {
        let mut camera = PerspectiveCamera::new(config.fov, config.aspect, config.near, config.far);
        camera.name = "camera".into();
        FrameLoop {
            scene,
            renderer,
            config,
            camera,
            eyes: StereoCameras::new(),
            bounds: LayerBounds::default(),
            display: None,
            discovery_failed: false,
            scheduler: None,
            last_mode: None,
            frame_count: 0,
        }
    }

    /// Overrides the scheduler that would otherwise be picked at discovery.
    pub fn with_scheduler(mut self, scheduler: Box<dyn FrameScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Looks for a display. Without one the loop stays idle for good:
    /// later calls neither search again nor log again.
    pub fn discover(&mut self, vr: &mut VRServiceManager) -> Result<(), VRError> {
        if self.display.is_some() {
            return Ok(());
        }
        if self.discovery_failed {
            return Err(VRError::NoDeviceFound);
        }
        match vr.discover() {
            Ok(display) => {
                self.attach(display);
                Ok(())
            },
            Err(err) => {
                error!("HMD not found: {}", err);
                self.discovery_failed = true;
                Err(err)
            },
        }
    }

    fn attach(&mut self, display: VRDisplayPtr) {
        info!("Using VRDisplay {:?}", display.borrow().data().display_name);
        if self.scheduler.is_none() {
            self.scheduler = Some(scheduler::scheduler_for(&display, &self.config));
        }
        self.display = Some(display);
    }

    pub fn state(&self) -> LoopState {
        match self.display {
            Some(_) => LoopState::Discovered,
            None => LoopState::Idle,
        }
    }

    pub fn display(&self) -> Option<&VRDisplayPtr> {
        self.display.as_ref()
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    pub fn eyes(&self) -> &StereoCameras {
        &self.eyes
    }

    pub fn bounds(&self) -> &LayerBounds {
        &self.bounds
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Mode used by the most recent tick.
    pub fn last_mode(&self) -> Option<RenderMode> {
        self.last_mode
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Starts presenting the renderer's surface on the display.
    ///
    /// Does nothing without a display or while already presenting. A
    /// rejection leaves the loop in normal mode; the request may be repeated.
    pub fn request_present(&mut self) -> Result<(), VRError> {
        let display = match self.display {
            Some(ref display) => display,
            None => return Ok(()),
        };
        if display.borrow().is_presenting() {
            return Ok(());
        }

        let layer = VRLayer::new(self.renderer.surface_id());
        let result = display.borrow_mut().request_present(&[layer]);
        if let Err(ref err) = result {
            warn!("VR presentation not started: {}", err);
        }
        result
    }

    pub fn exit_present(&mut self) {
        if let Some(ref display) = self.display {
            display.borrow_mut().exit_present();
        }
    }

    pub fn handle_event(&mut self, event: &VRDisplayEvent) {
        match *event {
            VRDisplayEvent::PresentChange(_, presenting) => {
                let layers = match self.display {
                    Some(ref display) => display.borrow().layers(),
                    None => Vec::new(),
                };
                self.bounds = LayerBounds::from_layer(layers.first());
                info!("VR presentation {}, eye bounds {:?}",
                      if presenting { "started" } else { "stopped" }, self.bounds);
            },
            VRDisplayEvent::Disconnect(id) => {
                info!("VRDisplay {} disconnected", id);
            },
            ref event => {
                debug!("VR event {:?}", event);
            },
        }
    }

    /// Runs one frame. Does nothing while idle.
    pub fn tick(&mut self) {
        let display = match self.display {
            Some(ref display) => display.clone(),
            None => return,
        };

        let events = display.borrow_mut().poll_events();
        for event in &events {
            self.handle_event(event);
        }

        let near = self.camera.near as f64;
        let far = self.camera.far as f64;
        let frame = display.borrow_mut().frame_data(near, far);
        let stage = display.borrow().stage_parameters();
        pose::apply_pose(&mut self.camera, &frame.pose, stage.as_ref());

        let presenting = display.borrow().is_presenting();
        let mode = if presenting {
            self.render_stereo(&display, &frame);
            RenderMode::Stereo
        } else {
            self.render_normal();
            RenderMode::Normal
        };
        if self.last_mode != Some(mode) {
            debug!("Rendering in {:?} mode", mode);
        }
        self.last_mode = Some(mode);

        self.scene.animate();
        self.frame_count += 1;

        if let Some(ref mut scheduler) = self.scheduler {
            scheduler.request_frame();
        }
    }

    /// Ticks until the surface closes or the scheduler stops delivering frames.
    pub fn run(&mut self) {
        if self.state() == LoopState::Idle {
            return;
        }

        self.tick();
        loop {
            if self.renderer.surface_closed() {
                info!("Surface closed after {} frames", self.frame_count);
                break;
            }
            let scheduler = match self.scheduler {
                Some(ref mut scheduler) => scheduler,
                None => break,
            };
            if scheduler.wait_frame().is_none() {
                break;
            }
            self.tick();
        }
    }

    fn render_normal(&mut self) {
        let size = self.renderer.surface_size();
        if size.height > 0 {
            self.camera.set_aspect(size.width as f32 / size.height as f32);
        }

        self.renderer.set_scissor_test(false);
        self.renderer.set_viewport(VRViewport::full(size));
        self.renderer.render(&self.scene, &self.camera);
    }

    fn render_stereo(&mut self, display: &VRDisplayPtr, frame: &VRFrameData) {
        let offsets = {
            let display = display.borrow();
            [display.eye_parameters(VREye::Left).offset, display.eye_parameters(VREye::Right).offset]
        };

        let size = self.renderer.surface_size();
        let (left, right) = self.bounds.partition(size);

        self.eyes.update(&self.camera, offsets, frame);

        self.renderer.set_scissor_test(true);
        for (eye, rect) in [(VREye::Left, left), (VREye::Right, right)] {
            self.renderer.set_viewport(rect);
            self.renderer.set_scissor(rect);
            self.renderer.render(&self.scene, self.eyes.camera(eye));
        }
        self.renderer.set_scissor_test(false);

        if let Err(err) = display.borrow_mut().submit_frame() {
            warn!("Frame {} not delivered: {}", self.frame_count, err);
        }
    }
}
