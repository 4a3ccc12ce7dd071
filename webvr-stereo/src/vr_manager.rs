use log::{error, info};
use std::collections::HashMap;
use webvr_stereo_api::{VRDisplayPtr, VRError, VRService};

#[cfg(feature = "mock")]
use crate::api::MockServiceCreator;

// Single entry point all the VRServices and displays
pub struct VRServiceManager {
    initialized: bool,
    services: Vec<Box<dyn VRService>>,
    displays: HashMap<u32, VRDisplayPtr>,
}

impl Drop for VRServiceManager {
    fn drop(&mut self) {
        self.displays.clear();
        self.services.clear();
    }
}

impl Default for VRServiceManager {
    fn default() -> VRServiceManager {
        VRServiceManager::new()
    }
}

impl VRServiceManager {
    pub fn new() -> VRServiceManager {
        VRServiceManager {
            initialized: false,
            services: Vec::new(),
            displays: HashMap::new(),
        }
    }

    // Register mock VR Service
    // Usefull for testing
    #[cfg(feature = "mock")]
    pub fn register_mock(&mut self) {
        let creator = MockServiceCreator::new();
        self.register(creator.new_service());
    }

    // Register a new VR service
    pub fn register(&mut self, service: Box<dyn VRService>) {
        self.services.push(service);
    }

    // Initializes all the services
    pub fn initialize_services(&mut self) {
        if self.initialized {
            return;
        }

        for service in &mut self.services {
            if let Err(err) = service.initialize() {
                error!("Error initializing VRService: {}", err);
            }
        }
        self.initialized = true;
    }

    pub fn get_displays(&mut self) -> Vec<VRDisplayPtr> {
        self.fetch_displays();
        let mut result: Vec<VRDisplayPtr> = self.displays.values().cloned().collect();
        // Sort by display_id to match service initialization order
        result.sort_by_key(|display| display.borrow().id());
        result
    }

    pub fn get_display(&self, display_id: u32) -> Option<&VRDisplayPtr> {
        self.displays.get(&display_id)
    }

    /// Returns the first display found across all services.
    pub fn discover(&mut self) -> Result<VRDisplayPtr, VRError> {
        let displays = self.get_displays();
        info!("Found {} VRDisplays", displays.len());
        displays.into_iter().next().ok_or(VRError::NoDeviceFound)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl VRServiceManager {
    fn fetch_displays(&mut self) {
        self.initialize_services();

        for service in &mut self.services {
            if !service.is_available() {
                continue;
            }
            match service.fetch_displays() {
                Ok(displays) => {
                    for display in displays {
                        let key = display.borrow().id();
                        self.displays.entry(key).or_insert(display);
                    }
                },
                Err(err) => error!("Error fetching VRDisplays: {}", err),
            }
        }
    }
}
