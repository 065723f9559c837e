//! Runtime demo harness: keyboard control of the rig and a frame rate readout

mod controller;
mod fps;
mod sinks;

pub use controller::*;
pub use fps::*;
pub use sinks::*;
