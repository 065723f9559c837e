//! Keyboard harness for tuning a [`ProjectionRig`] at runtime
//!
//! Controls (first match wins, one action per frame):
//! - `[` / `]`: narrow / widen the fisheye field of view
//! - `1`..`5`: cubemap face size 512..8192
//! - `F1` / `F2` / `F3`: anti-aliasing off / 2x / 4x supersampling
//! - Up / Down: pitch the world camera up / down
//! - Right / Left: roll the world camera
//! - `D` / `A`, `W` / `S`: move the camera base along the world camera's
//!   right and forward axes
//! - `E` / `Q`: move the camera base along the world camera's up axis
//! - `R`: reset position, orientation, cubemap size and anti-aliasing
//! - `V`: toggle vsync

use glam::Vec3;

use crate::error::ConfigWarning;
use crate::input::{KeyCode, KeyboardState};
use crate::rig::{AntiAliasing, CubeMapSize, ProjectionRig};
use crate::scene::NodeHandle;

use super::{FrameTimeWindow, RenderSettings, TextSink};

pub const FOV_INCREMENT: i32 = 5;
pub const ROTATION_INCREMENT: f32 = 5.0;
pub const POSITION_INCREMENT: f32 = 0.1;

/// Axis of the world camera used for camera base movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAxis {
    Forward,
    Right,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    StepFov(i32),
    SetCubeMap(CubeMapSize),
    SetAntiAliasing(AntiAliasing),
    StepPitch(f32),
    StepRoll(f32),
    Move(MoveAxis, f32),
    Reset,
    ToggleVsync,
}

/// Key bindings in priority order
const BINDINGS: [(KeyCode, Command); 22] = [
    (KeyCode::BracketLeft, Command::StepFov(-FOV_INCREMENT)),
    (KeyCode::BracketRight, Command::StepFov(FOV_INCREMENT)),
    (KeyCode::Digit1, Command::SetCubeMap(CubeMapSize::Cube512)),
    (KeyCode::Digit2, Command::SetCubeMap(CubeMapSize::Cube1024)),
    (KeyCode::Digit3, Command::SetCubeMap(CubeMapSize::Cube2048)),
    (KeyCode::Digit4, Command::SetCubeMap(CubeMapSize::Cube4096)),
    (KeyCode::Digit5, Command::SetCubeMap(CubeMapSize::Cube8192)),
    (KeyCode::F1, Command::SetAntiAliasing(AntiAliasing::Off)),
    (KeyCode::F2, Command::SetAntiAliasing(AntiAliasing::Supersample2x)),
    (KeyCode::F3, Command::SetAntiAliasing(AntiAliasing::Supersample4x)),
    (KeyCode::ArrowUp, Command::StepPitch(-ROTATION_INCREMENT)),
    (KeyCode::ArrowDown, Command::StepPitch(ROTATION_INCREMENT)),
    (KeyCode::ArrowRight, Command::StepRoll(ROTATION_INCREMENT)),
    (KeyCode::ArrowLeft, Command::StepRoll(-ROTATION_INCREMENT)),
    (KeyCode::D, Command::Move(MoveAxis::Right, POSITION_INCREMENT)),
    (KeyCode::A, Command::Move(MoveAxis::Right, -POSITION_INCREMENT)),
    (KeyCode::W, Command::Move(MoveAxis::Forward, POSITION_INCREMENT)),
    (KeyCode::S, Command::Move(MoveAxis::Forward, -POSITION_INCREMENT)),
    (KeyCode::E, Command::Move(MoveAxis::Up, POSITION_INCREMENT)),
    (KeyCode::Q, Command::Move(MoveAxis::Up, -POSITION_INCREMENT)),
    (KeyCode::R, Command::Reset),
    (KeyCode::V, Command::ToggleVsync),
];

/// What a frame's input did, reported back to the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoAction {
    FieldOfView(u32),
    CubeMap(CubeMapSize),
    AntiAliasing(AntiAliasing),
    Pitch(f32),
    Roll(f32),
    /// New position offset of the camera base
    Move(Vec3),
    Reset,
    Vsync(bool),
}

/// Optional host collaborators of the demo controller
#[derive(Default)]
pub struct DemoBindings {
    /// Node moved by the W/A/S/D/Q/E keys, usually the world camera's parent
    pub camera_base: Option<NodeHandle>,
    pub fps_text: Option<Box<dyn TextSink>>,
    pub render_settings: Option<Box<dyn RenderSettings>>,
}

pub struct DemoInputController {
    camera_base: Option<NodeHandle>,
    base_origin: Vec3,
    position_offset: Vec3,
    fps_text: Option<Box<dyn TextSink>>,
    render_settings: Option<Box<dyn RenderSettings>>,
    initial_pitch: f32,
    initial_roll: f32,
    frame_times: FrameTimeWindow,
    warnings: Vec<ConfigWarning>,
}

impl DemoInputController {
    /// Create a controller for `rig`, remembering its current pitch and roll for resets.
    ///
    /// Missing bindings are logged and the features needing them are skipped.
    pub fn new(rig: &ProjectionRig, bindings: DemoBindings) -> Self {
        let mut warnings = Vec::new();
        if bindings.camera_base.is_none() {
            warnings.push(ConfigWarning::MissingCameraBase);
        }
        if bindings.fps_text.is_none() {
            warnings.push(ConfigWarning::MissingFpsText);
        }
        if bindings.render_settings.is_none() {
            warnings.push(ConfigWarning::MissingRenderSettings);
        }
        for warning in &warnings {
            log::warn!("DemoInputController: {}", warning);
        }

        let base_origin = bindings
            .camera_base
            .as_ref()
            .map(|base| base.read().transform.position)
            .unwrap_or(Vec3::ZERO);

        Self {
            camera_base: bindings.camera_base,
            base_origin,
            position_offset: Vec3::ZERO,
            fps_text: bindings.fps_text,
            render_settings: bindings.render_settings,
            initial_pitch: rig.parameters().world_pitch,
            initial_roll: rig.parameters().world_roll,
            frame_times: FrameTimeWindow::new(),
            warnings,
        }
    }

    /// Handle this frame's input, then refresh the frame rate display
    pub fn update(
        &mut self,
        rig: &mut ProjectionRig,
        input: &KeyboardState,
        dt: f32,
    ) -> Option<DemoAction> {
        let action = self.handle_input(rig, input);

        self.frame_times.push(dt);
        if let Some(text) = &mut self.fps_text {
            text.set_text(&self.frame_times.display_text());
        }

        action
    }

    /// Apply the highest-priority key pressed this frame.
    ///
    /// Ignored while the rig has no world camera.
    pub fn handle_input(
        &mut self,
        rig: &mut ProjectionRig,
        input: &KeyboardState,
    ) -> Option<DemoAction> {
        let axes = {
            let world = rig.world_camera()?.read();
            [
                world.transform.forward(),
                world.transform.right(),
                world.transform.up(),
            ]
        };

        let command = BINDINGS
            .iter()
            .find(|(key, _)| input.just_pressed(*key))
            .map(|(_, command)| *command)?;

        let params = rig.parameters_mut();
        let action = match command {
            Command::StepFov(delta) => {
                params.step_field_of_view(delta);
                DemoAction::FieldOfView(params.field_of_view)
            }
            Command::SetCubeMap(size) => {
                params.cube_map_size = size;
                DemoAction::CubeMap(size)
            }
            Command::SetAntiAliasing(aa) => {
                params.anti_aliasing = aa;
                DemoAction::AntiAliasing(aa)
            }
            Command::StepPitch(delta) => {
                params.world_pitch += delta;
                DemoAction::Pitch(params.world_pitch)
            }
            Command::StepRoll(delta) => {
                params.world_roll += delta;
                DemoAction::Roll(params.world_roll)
            }
            Command::Move(axis, step) => {
                let direction = match axis {
                    MoveAxis::Forward => axes[0],
                    MoveAxis::Right => axes[1],
                    MoveAxis::Up => axes[2],
                };
                self.position_offset += direction * step;
                DemoAction::Move(self.position_offset)
            }
            Command::Reset => {
                self.position_offset = Vec3::ZERO;
                params.world_pitch = self.initial_pitch;
                params.world_roll = self.initial_roll;
                params.cube_map_size = CubeMapSize::Cube1024;
                params.anti_aliasing = AntiAliasing::Off;
                DemoAction::Reset
            }
            Command::ToggleVsync => {
                let Some(settings) = &mut self.render_settings else {
                    log::debug!("Vsync toggle ignored, no render settings bound");
                    return None;
                };
                settings.toggle_vsync();
                DemoAction::Vsync(settings.vsync_count() != 0)
            }
        };

        if matches!(action, DemoAction::Move(_) | DemoAction::Reset) {
            self.sync_camera_base();
        }

        log::debug!("Demo action: {:?}", action);
        Some(action)
    }

    fn sync_camera_base(&self) {
        if let Some(base) = &self.camera_base {
            base.write().transform.position = self.base_origin + self.position_offset;
        }
    }

    /// Offset of the camera base from where it was at construction
    pub fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    pub fn initial_orientation(&self) -> (f32, f32) {
        (self.initial_pitch, self.initial_roll)
    }

    pub fn frame_times(&self) -> &FrameTimeWindow {
        &self.frame_times
    }

    /// Bindings that were missing at construction
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}
