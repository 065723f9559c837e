//! Host-agnostic frame driver
//!
//! Runs, once per frame and in order: the demo controller (if any) writing
//! rig parameters, then the rig clamping them and orienting the world camera.

use crate::demo::{DemoAction, DemoInputController};
use crate::input::KeyboardState;
use crate::rig::ProjectionRig;

pub struct FrameDriver {
    pub rig: ProjectionRig,
    pub controller: Option<DemoInputController>,
    frame_number: u64,
}

impl FrameDriver {
    pub fn new(rig: ProjectionRig) -> Self {
        Self {
            rig,
            controller: None,
            frame_number: 0,
        }
    }

    pub fn with_controller(mut self, controller: DemoInputController) -> Self {
        self.controller = Some(controller);
        self
    }

    /// Advance one frame.
    ///
    /// Consumes this frame's key presses from `input`.
    pub fn frame(&mut self, input: &mut KeyboardState, dt: f32) -> Option<DemoAction> {
        let action = self
            .controller
            .as_mut()
            .and_then(|controller| controller.update(&mut self.rig, input, dt));

        self.rig.update(dt);
        input.end_frame();
        self.frame_number += 1;

        action
    }

    /// Number of frames processed so far
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}
