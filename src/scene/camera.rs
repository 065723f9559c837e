//! Camera capability and shared scene nodes

use std::sync::Arc;

use glam::Mat4;
use parking_lot::RwLock;

use super::Transform;

/// Camera capability attached to a scene node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_degrees: 90.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect,
            near,
            far,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Update aspect ratio from a surface size
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}

/// A named object in the host scene
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub camera: Option<Camera>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a node carrying a camera capability
    pub fn with_camera(name: impl Into<String>, camera: Camera) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            camera: Some(camera),
        }
    }

    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    /// Wrap into a shared handle
    pub fn into_handle(self) -> NodeHandle {
        Arc::new(RwLock::new(self))
    }
}

/// Shared reference to a host-owned scene node.
///
/// The host keeps ownership; the rig and the demo controller only hold clones.
pub type NodeHandle = Arc<RwLock<SceneNode>>;

/// Whether two handles refer to the same node
pub fn same_node(a: &NodeHandle, b: &NodeHandle) -> bool {
    Arc::ptr_eq(a, b)
}
