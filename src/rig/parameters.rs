//! Tunable dome projection parameters

use bytemuck::{Pod, Zeroable};

pub const DEFAULT_WORLD_PITCH: f32 = -80.0;
pub const MIN_WORLD_PITCH: f32 = -120.0;
pub const MAX_WORLD_PITCH: f32 = 120.0;

pub const DEFAULT_WORLD_ROLL: f32 = 0.0;
pub const MIN_WORLD_ROLL: f32 = -180.0;
pub const MAX_WORLD_ROLL: f32 = 180.0;

pub const DEFAULT_FOV: u32 = 270;
pub const MIN_FOV: u32 = 120;
pub const MAX_FOV: u32 = 270;

pub const DEFAULT_BACK_FADE: f32 = 0.1;
pub const DEFAULT_CRESCENT_FADE_INTENSITY: f32 = 0.5;
pub const DEFAULT_CRESCENT_FADE_RADIUS: f32 = 0.8;
pub const DEFAULT_CRESCENT_FADE_OFFSET: f32 = -0.2;

/// Face size of the cubemap captured from the scene.
///
/// Larger faces give a sharper dome image at a higher rendering cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CubeMapSize {
    Cube512,
    #[default]
    Cube1024,
    Cube2048,
    Cube4096,
    Cube8192,
}

impl CubeMapSize {
    pub const ALL: [CubeMapSize; 5] = [
        CubeMapSize::Cube512,
        CubeMapSize::Cube1024,
        CubeMapSize::Cube2048,
        CubeMapSize::Cube4096,
        CubeMapSize::Cube8192,
    ];

    /// Edge length of one cubemap face in pixels
    pub fn face_size(self) -> u32 {
        match self {
            CubeMapSize::Cube512 => 512,
            CubeMapSize::Cube1024 => 1024,
            CubeMapSize::Cube2048 => 2048,
            CubeMapSize::Cube4096 => 4096,
            CubeMapSize::Cube8192 => 8192,
        }
    }

    pub fn from_face_size(size: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.face_size() == size)
    }
}

/// Anti-aliasing applied when rendering the dome projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AntiAliasing {
    Off,
    #[default]
    Supersample2x,
    Supersample4x,
}

impl AntiAliasing {
    /// Per-axis supersampling factor
    pub fn supersample_factor(self) -> u32 {
        match self {
            AntiAliasing::Off => 1,
            AntiAliasing::Supersample2x => 2,
            AntiAliasing::Supersample4x => 4,
        }
    }
}

/// Parameters of the dome projection rig.
///
/// Fields are public and may be written with out-of-range values; the rig
/// clamps them on its next update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigParameters {
    /// World camera pitch in degrees, [-120, 120]
    pub world_pitch: f32,
    /// World camera roll in degrees, [-180, 180]
    pub world_roll: f32,
    /// Fisheye lens field of view in degrees, [120, 270]
    pub field_of_view: u32,
    pub cube_map_size: CubeMapSize,
    pub anti_aliasing: AntiAliasing,
    /// Linear front-to-back fade, [0, 1]
    pub back_fade: f32,
    /// [0, 1]
    pub crescent_fade_intensity: f32,
    /// [0, 1]
    pub crescent_fade_radius: f32,
    /// [-1, 1]
    pub crescent_fade_offset: f32,
}

impl Default for RigParameters {
    fn default() -> Self {
        Self {
            world_pitch: DEFAULT_WORLD_PITCH,
            world_roll: DEFAULT_WORLD_ROLL,
            field_of_view: DEFAULT_FOV,
            cube_map_size: CubeMapSize::default(),
            anti_aliasing: AntiAliasing::default(),
            back_fade: DEFAULT_BACK_FADE,
            crescent_fade_intensity: DEFAULT_CRESCENT_FADE_INTENSITY,
            crescent_fade_radius: DEFAULT_CRESCENT_FADE_RADIUS,
            crescent_fade_offset: DEFAULT_CRESCENT_FADE_OFFSET,
        }
    }
}

impl RigParameters {
    /// Clamp field of view, pitch and roll into their ranges
    ///
    /// A non-finite pitch or roll is reset to its default.
    pub fn clamp_orientation(&mut self) {
        self.field_of_view = self.field_of_view.clamp(MIN_FOV, MAX_FOV);
        self.world_pitch = clamp_finite(
            self.world_pitch,
            MIN_WORLD_PITCH,
            MAX_WORLD_PITCH,
            DEFAULT_WORLD_PITCH,
        );
        self.world_roll =
            clamp_finite(self.world_roll, MIN_WORLD_ROLL, MAX_WORLD_ROLL, DEFAULT_WORLD_ROLL);
    }

    /// Clamp the fade profile into its ranges; non-finite values fall back to defaults
    pub fn clamp_fades(&mut self) {
        self.back_fade = clamp_finite(self.back_fade, 0.0, 1.0, DEFAULT_BACK_FADE);
        self.crescent_fade_intensity = clamp_finite(
            self.crescent_fade_intensity,
            0.0,
            1.0,
            DEFAULT_CRESCENT_FADE_INTENSITY,
        );
        self.crescent_fade_radius =
            clamp_finite(self.crescent_fade_radius, 0.0, 1.0, DEFAULT_CRESCENT_FADE_RADIUS);
        self.crescent_fade_offset =
            clamp_finite(self.crescent_fade_offset, -1.0, 1.0, DEFAULT_CRESCENT_FADE_OFFSET);
    }

    /// Step the field of view by `delta` degrees, saturating at the range limits
    pub fn step_field_of_view(&mut self, delta: i32) {
        self.field_of_view = self
            .field_of_view
            .clamp(MIN_FOV, MAX_FOV)
            .saturating_add_signed(delta)
            .clamp(MIN_FOV, MAX_FOV);
    }

    /// Build the packed block consumed by the fisheye warp pass
    pub fn uniform_data(&self) -> ProjectionUniformData {
        ProjectionUniformData {
            fov_radians: (self.field_of_view as f32).to_radians(),
            cube_face_size: self.cube_map_size.face_size(),
            supersample_factor: self.anti_aliasing.supersample_factor(),
            back_fade: self.back_fade,
            crescent_fade_intensity: self.crescent_fade_intensity,
            crescent_fade_radius: self.crescent_fade_radius,
            crescent_fade_offset: self.crescent_fade_offset,
            _padding: 0.0,
        }
    }
}

fn clamp_finite(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

/// Projection uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ProjectionUniformData {
    pub fov_radians: f32,
    pub cube_face_size: u32,
    pub supersample_factor: u32,
    pub back_fade: f32,
    pub crescent_fade_intensity: f32,
    pub crescent_fade_radius: f32,
    pub crescent_fade_offset: f32,
    pub _padding: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = RigParameters::default();
        assert_eq!(p.world_pitch, -80.0);
        assert_eq!(p.world_roll, 0.0);
        assert_eq!(p.field_of_view, 270);
        assert_eq!(p.cube_map_size, CubeMapSize::Cube1024);
        assert_eq!(p.anti_aliasing, AntiAliasing::Supersample2x);
        assert_eq!(p.back_fade, 0.1);
        assert_eq!(p.crescent_fade_intensity, 0.5);
        assert_eq!(p.crescent_fade_radius, 0.8);
        assert_eq!(p.crescent_fade_offset, -0.2);
    }

    #[test]
    fn clamp_orientation_limits() {
        let mut p = RigParameters {
            world_pitch: 200.0,
            world_roll: -300.0,
            field_of_view: 100,
            ..Default::default()
        };
        p.clamp_orientation();
        assert_eq!(p.world_pitch, 120.0);
        assert_eq!(p.world_roll, -180.0);
        assert_eq!(p.field_of_view, 120);

        p.field_of_view = 300;
        p.clamp_orientation();
        assert_eq!(p.field_of_view, 270);
    }

    #[test]
    fn clamp_fades_limits() {
        let mut p = RigParameters {
            back_fade: -0.5,
            crescent_fade_intensity: 3.0,
            crescent_fade_radius: 1.5,
            crescent_fade_offset: -4.0,
            ..Default::default()
        };
        p.clamp_fades();
        assert_eq!(p.back_fade, 0.0);
        assert_eq!(p.crescent_fade_intensity, 1.0);
        assert_eq!(p.crescent_fade_radius, 1.0);
        assert_eq!(p.crescent_fade_offset, -1.0);
    }

    #[test]
    fn fov_step_saturates() {
        let mut p = RigParameters {
            field_of_view: 120,
            ..Default::default()
        };
        p.step_field_of_view(-5);
        assert_eq!(p.field_of_view, 120);

        p.field_of_view = 268;
        p.step_field_of_view(5);
        assert_eq!(p.field_of_view, 270);

        p.field_of_view = 200;
        p.step_field_of_view(-5);
        assert_eq!(p.field_of_view, 195);
    }

    #[test]
    fn fov_step_from_huge_values() {
        let mut p = RigParameters {
            field_of_view: u32::MAX,
            ..Default::default()
        };
        p.step_field_of_view(5);
        assert_eq!(p.field_of_view, 270);

        p.field_of_view = i32::MAX as u32 - 1;
        p.step_field_of_view(5);
        assert_eq!(p.field_of_view, 270);

        p.field_of_view = u32::MAX;
        p.step_field_of_view(-5);
        assert_eq!(p.field_of_view, 265);

        p.field_of_view = 0;
        p.step_field_of_view(-5);
        assert_eq!(p.field_of_view, 120);
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let mut p = RigParameters {
            world_pitch: f32::NAN,
            world_roll: f32::INFINITY,
            back_fade: f32::NAN,
            crescent_fade_offset: f32::NEG_INFINITY,
            ..Default::default()
        };
        p.clamp_orientation();
        p.clamp_fades();
        assert_eq!(p.world_pitch, DEFAULT_WORLD_PITCH);
        assert_eq!(p.world_roll, DEFAULT_WORLD_ROLL);
        assert_eq!(p.back_fade, DEFAULT_BACK_FADE);
        assert_eq!(p.crescent_fade_offset, DEFAULT_CRESCENT_FADE_OFFSET);
    }

    #[test]
    fn cube_map_sizes() {
        let sizes: Vec<u32> = CubeMapSize::ALL.iter().map(|c| c.face_size()).collect();
        assert_eq!(sizes, vec![512, 1024, 2048, 4096, 8192]);
        assert_eq!(CubeMapSize::from_face_size(4096), Some(CubeMapSize::Cube4096));
        assert_eq!(CubeMapSize::from_face_size(300), None);
    }

    #[test]
    fn uniform_data_packs_parameters() {
        let p = RigParameters {
            field_of_view: 180,
            anti_aliasing: AntiAliasing::Supersample4x,
            cube_map_size: CubeMapSize::Cube2048,
            ..Default::default()
        };
        let data = p.uniform_data();
        assert!((data.fov_radians - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(data.cube_face_size, 2048);
        assert_eq!(data.supersample_factor, 4);
        assert_eq!(data.crescent_fade_offset, -0.2);
        assert_eq!(bytemuck::bytes_of(&data).len(), 32);
    }
}
