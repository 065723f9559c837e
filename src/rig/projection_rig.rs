//! Dual-camera dome projection rig
//!
//! The rig binds two host-owned cameras:
//! - the **projection camera**, which the host renderer uses to present the
//!   fisheye-warped dome image and which should be the scene's main camera
//! - the **world camera**, whose orientation the rig drives from the pitch and
//!   roll parameters and from which the cubemap is captured

use crate::error::{ConfigWarning, RigError, RigResult};
use crate::scene::{same_node, NodeHandle};

use super::RigParameters;

pub const PROJECTION_CAMERA_NAME: &str = "Projection Camera";
pub const WORLD_CAMERA_NAME: &str = "World Camera";

/// Rig behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigConfig {
    /// Also clamp the fade profile during [`ProjectionRig::apply_constraints`].
    ///
    /// When `false` only field of view, pitch and roll are clamped.
    pub clamp_fade_parameters: bool,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            clamp_fade_parameters: true,
        }
    }
}

/// Camera handles passed to [`ProjectionRig::initialize`]
#[derive(Debug, Clone, Default)]
pub struct RigBindings {
    pub projection_camera: Option<NodeHandle>,
    pub world_camera: Option<NodeHandle>,
    /// The camera the host currently presents with
    pub main_camera: Option<NodeHandle>,
}

impl RigBindings {
    pub fn new(projection_camera: NodeHandle, world_camera: NodeHandle) -> Self {
        Self {
            main_camera: Some(projection_camera.clone()),
            projection_camera: Some(projection_camera),
            world_camera: Some(world_camera),
        }
    }

    pub fn with_main_camera(mut self, main_camera: Option<NodeHandle>) -> Self {
        self.main_camera = main_camera;
        self
    }
}

pub struct ProjectionRig {
    pub config: RigConfig,
    parameters: RigParameters,
    projection_camera: Option<NodeHandle>,
    world_camera: Option<NodeHandle>,
    warnings: Vec<ConfigWarning>,
}

impl Default for ProjectionRig {
    fn default() -> Self {
        Self::new(RigConfig::default())
    }
}

impl ProjectionRig {
    pub fn new(config: RigConfig) -> Self {
        Self {
            config,
            parameters: RigParameters::default(),
            projection_camera: None,
            world_camera: None,
            warnings: Vec::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: RigParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Bind the rig's cameras.
    ///
    /// Every problem is logged. Cameras that fail validation stay unbound and
    /// the first fatal error is returned; the rig remains usable, but updates
    /// needing the missing camera do nothing.
    pub fn initialize(&mut self, bindings: RigBindings) -> RigResult<()> {
        self.warnings.clear();
        let mut first_error = None;

        self.projection_camera =
            Self::bind_camera(bindings.projection_camera, PROJECTION_CAMERA_NAME, &mut first_error);

        if let Some(projection) = &self.projection_camera {
            let is_main = bindings
                .main_camera
                .as_ref()
                .is_some_and(|main| same_node(main, projection));
            if !is_main {
                self.warn(ConfigWarning::ProjectionCameraNotMain);
            }
        }

        self.world_camera =
            Self::bind_camera(bindings.world_camera, WORLD_CAMERA_NAME, &mut first_error);

        match first_error {
            Some(err) => Err(err),
            None => {
                log::info!("Dome projection rig initialized");
                Ok(())
            }
        }
    }

    fn bind_camera(
        handle: Option<NodeHandle>,
        name: &'static str,
        first_error: &mut Option<RigError>,
    ) -> Option<NodeHandle> {
        let result = match handle {
            None => Err(RigError::MissingNode(name)),
            Some(node) if !node.read().has_camera() => Err(RigError::MissingCamera(name)),
            Some(node) => Ok(node),
        };

        match result {
            Ok(node) => Some(node),
            Err(err) => {
                log::error!("ProjectionRig: {}", err);
                first_error.get_or_insert(err);
                None
            }
        }
    }

    fn warn(&mut self, warning: ConfigWarning) {
        log::warn!("ProjectionRig: {}", warning);
        self.warnings.push(warning);
    }

    /// Clamp the parameters and orient the world camera.
    ///
    /// Idempotent. Does nothing if no world camera is bound.
    pub fn apply_constraints(&mut self) {
        let Some(world_camera) = &self.world_camera else {
            return;
        };

        self.parameters.clamp_orientation();
        if self.config.clamp_fade_parameters {
            self.parameters.clamp_fades();
        }

        world_camera.write().transform.set_local_euler_degrees(
            self.parameters.world_pitch,
            0.0,
            self.parameters.world_roll,
        );
    }

    /// Per-frame update
    pub fn update(&mut self, _dt: f32) {
        self.apply_constraints();
    }

    pub fn parameters(&self) -> &RigParameters {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut RigParameters {
        &mut self.parameters
    }

    pub fn world_camera(&self) -> Option<&NodeHandle> {
        self.world_camera.as_ref()
    }

    pub fn projection_camera(&self) -> Option<&NodeHandle> {
        self.projection_camera.as_ref()
    }

    /// Whether both cameras are bound
    pub fn is_bound(&self) -> bool {
        self.world_camera.is_some() && self.projection_camera.is_some()
    }

    /// Non-fatal issues found by the last [`initialize`](Self::initialize)
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}
