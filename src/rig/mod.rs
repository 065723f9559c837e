//! Dome projection rig: parameters and camera wiring

mod parameters;
mod projection_rig;

pub use parameters::*;
pub use projection_rig::*;
