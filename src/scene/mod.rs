//! Scene objects the rig is wired to

mod camera;
mod transform;

pub use camera::*;
pub use transform::*;
