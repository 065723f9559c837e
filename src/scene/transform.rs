//! Local transform of a scene node

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local position/rotation/scale of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Build a rotation from pitch (about X), yaw (about Y) and roll (about Z), in degrees.
    ///
    /// Roll is applied first, then pitch, then yaw.
    pub fn euler_degrees(pitch: f32, yaw: f32, roll: f32) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            yaw.to_radians(),
            pitch.to_radians(),
            roll.to_radians(),
        )
    }

    /// Replace the local rotation with the given euler angles (degrees)
    pub fn set_local_euler_degrees(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.rotation = Self::euler_degrees(pitch, yaw, roll);
    }

    /// Get the model matrix for this transform
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Get forward direction (local -Z)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get right direction (local +X)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get up direction (local +Y)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Translate by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }
}
