//! Dome Projection - a dual-camera rig for planetarium-style fisheye output
//!
//! The rig drives two host-owned cameras:
//! - **World camera**: captures the scene into a cubemap; oriented by the
//!   rig's pitch and roll parameters
//! - **Projection camera**: presents the fisheye-warped dome image
//!
//! # Features
//! - Range-checked projection parameters (field of view, cubemap size,
//!   anti-aliasing, back and crescent fades) clamped every frame
//! - Explicit camera binding with fatal/warning diagnostics
//! - A packed uniform block for the host's fisheye warp pass
//! - A keyboard demo harness with a smoothed frame rate readout
//!
//! The cubemap capture and fisheye warp themselves belong to the host renderer.

pub mod demo;
pub mod error;
pub mod frame;
pub mod input;
pub mod rig;
pub mod scene;

pub use demo::{DemoAction, DemoBindings, DemoInputController, FrameTimeWindow};
pub use error::{ConfigWarning, RigError, RigResult};
pub use frame::FrameDriver;
pub use input::{KeyCode, KeyboardState};
pub use rig::{AntiAliasing, CubeMapSize, ProjectionRig, RigBindings, RigConfig, RigParameters};
pub use scene::{Camera, NodeHandle, SceneNode, Transform};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging for native hosts.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    log::info!("Dome Projection v{} initialized", VERSION);
}
