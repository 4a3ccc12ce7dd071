use log::{debug, info, LevelFilter};
use webvr_stereo::{FrameLoop, PerspectiveCamera, Renderer, Scene, StereoConfig, SurfaceSize,
                   VRServiceManager, VRViewport};

// Frames drawn before the simulated "enter VR" click.
const PREVIEW_FRAMES: u32 = 30;
const TOTAL_FRAMES: u32 = 120;

/// A 1x1x1 red box spinning around its X axis.
struct Cube {
    rotation_x: f32,
    color: [f32; 3],
}

impl Scene for Cube {
    fn animate(&mut self) {
        self.rotation_x += 0.01;
    }
}

/// Stands in for a GPU backend: reports what it would draw.
struct LogRenderer {
    size: SurfaceSize,
    scissor: bool,
    viewport: VRViewport,
    draws: u32,
}

impl Renderer<Cube> for LogRenderer {
    fn render(&mut self, scene: &Cube, camera: &PerspectiveCamera) {
        self.draws += 1;
        debug!("draw {} rgb{:?} rx={:.2} with {:?} at {:?} (scissor {})", self.draws, scene.color,
               scene.rotation_x, camera.name, camera.position, self.scissor);
        debug!("  viewport {:?}", self.viewport);
    }

    fn set_viewport(&mut self, viewport: VRViewport) {
        self.viewport = viewport;
    }

    fn set_scissor(&mut self, _scissor: VRViewport) {}

    fn set_scissor_test(&mut self, enabled: bool) {
        self.scissor = enabled;
    }

    fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    fn surface_closed(&self) -> bool {
        self.draws >= TOTAL_FRAMES * 2
    }
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    match std::env::var("RUST_LOG") {
        Ok(filter) => {
            builder.parse_filters(&filter);
        },
        Err(_) => {
            builder.filter_level(LevelFilter::Info);
        },
    }
    builder.init();
}

fn main() {
    init_logging();

    let mut vr = VRServiceManager::new();
    vr.register_mock();

    let config = StereoConfig {
        fov: 75.0,
        ..StereoConfig::default()
    };

    let cube = Cube {
        rotation_x: 0.0,
        color: [1.0, 0.0, 0.0],
    };
    let renderer = LogRenderer {
        size: SurfaceSize::new(1000, 800),
        scissor: false,
        viewport: VRViewport::default(),
        draws: 0,
    };

    let mut frame_loop = FrameLoop::new(config, cube, renderer);
    if frame_loop.discover(&mut vr).is_err() {
        return;
    }

    // Desktop preview, then the user asks for VR.
    for _ in 0..PREVIEW_FRAMES {
        frame_loop.tick();
    }
    if frame_loop.request_present().is_err() {
        info!("Staying in preview mode");
    }

    frame_loop.run();
    info!("Rendered {} frames, cube at rx={:.2}", frame_loop.frame_count(),
          frame_loop.scene().rotation_x);
}
