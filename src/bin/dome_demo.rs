//! Interactive dome projection rig demo
//!
//! Run with:
//!   cargo run --bin dome_demo
//!   cargo run --bin dome_demo -- --pitch -60 --fov 220
//!
//! Controls:
//!   [ / ]        - Narrow / widen the fisheye field of view
//!   1-5          - Cubemap face size (512 .. 8192)
//!   F1 / F2 / F3 - Anti-aliasing off / 2x / 4x supersampling
//!   Up / Down    - Pitch the world camera
//!   Left / Right - Roll the world camera
//!   WASD, Q/E    - Move the camera base
//!   R            - Reset
//!   V            - Toggle vsync
//!   Escape       - Exit
//!
//! The window title shows the smoothed frame rate. Projection parameters are
//! logged whenever they change (set `RUST_LOG=debug` to see every key action).

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use dome_projection::demo::{SharedRenderSettings, TextSink};
use dome_projection::input::map_winit_key;
use dome_projection::rig::{
    MAX_FOV, MAX_WORLD_PITCH, MAX_WORLD_ROLL, MIN_FOV, MIN_WORLD_PITCH, MIN_WORLD_ROLL,
};
use dome_projection::{
    Camera, DemoBindings, DemoInputController, FrameDriver, KeyCode, KeyboardState, ProjectionRig,
    RigBindings, RigConfig, RigParameters, SceneNode,
};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

/// Dome projection rig demo.
#[derive(Parser, Debug)]
#[command(name = "dome_demo", about = "Interactive dome projection rig demo", version)]
struct Args {
    /// Initial window width in pixels.
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value = "720")]
    height: u32,

    /// Start with vertical sync disabled.
    #[arg(long)]
    no_vsync: bool,

    /// Exit after N frames (useful for testing).
    #[arg(long)]
    max_frames: Option<u64>,

    /// Initial world camera pitch in degrees.
    #[arg(long, default_value = "-80", allow_negative_numbers = true)]
    pitch: f32,

    /// Initial world camera roll in degrees.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    roll: f32,

    /// Initial fisheye field of view in degrees.
    #[arg(long, default_value = "270")]
    fov: u32,

    /// Only clamp field of view, pitch and roll each frame, leaving the fade profile as set.
    #[arg(long)]
    no_fade_clamp: bool,
}

/// Shows the FPS readout in the window title
struct WindowTitle(Arc<Window>);

impl TextSink for WindowTitle {
    fn set_text(&mut self, text: &str) {
        self.0.set_title(&format!("Dome Projection - {text} FPS"));
    }
}

fn main() {
    dome_projection::init_logging();
    let args = Args::parse();

    if !(MIN_WORLD_PITCH..=MAX_WORLD_PITCH).contains(&args.pitch)
        || !(MIN_WORLD_ROLL..=MAX_WORLD_ROLL).contains(&args.roll)
        || !(MIN_FOV..=MAX_FOV).contains(&args.fov)
    {
        log::warn!("Initial orientation or field of view out of range, it will be clamped");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };

    let window = match WindowBuilder::new()
        .with_title("Dome Projection")
        .with_inner_size(PhysicalSize::new(args.width, args.height))
        .build(&event_loop)
    {
        Ok(window) => Arc::new(window),
        Err(e) => {
            log::error!("Failed to create window: {}", e);
            return;
        }
    };

    // Host-owned scene objects
    let aspect = args.width as f32 / args.height.max(1) as f32;
    let projection_camera =
        SceneNode::with_camera("Projection Camera", Camera::perspective(90.0, aspect, 0.1, 1000.0))
            .into_handle();
    let world_camera =
        SceneNode::with_camera("World Camera", Camera::perspective(90.0, 1.0, 0.1, 1000.0))
            .into_handle();
    let camera_base = SceneNode::new("Demo Camera Base").into_handle();

    let mut rig = ProjectionRig::new(RigConfig {
        clamp_fade_parameters: !args.no_fade_clamp,
    })
    .with_parameters(RigParameters {
        world_pitch: args.pitch,
        world_roll: args.roll,
        field_of_view: args.fov,
        ..Default::default()
    });
    if let Err(e) = rig.initialize(RigBindings::new(projection_camera, world_camera)) {
        log::error!("Rig is not fully bound, continuing without it: {}", e);
    }

    let render_settings = SharedRenderSettings::new(!args.no_vsync);
    let controller = DemoInputController::new(
        &rig,
        DemoBindings {
            camera_base: Some(camera_base),
            fps_text: Some(Box::new(WindowTitle(Arc::clone(&window)))),
            render_settings: Some(Box::new(render_settings.clone())),
        },
    );
    let mut driver = FrameDriver::new(rig).with_controller(controller);

    println!("Starting Dome Projection Demo");
    println!("  [ / ]        - Field of view");
    println!("  1-5          - Cubemap size");
    println!("  F1 / F2 / F3 - Anti-aliasing");
    println!("  Arrows       - Pitch / roll");
    println!("  WASD, Q/E    - Move camera base");
    println!("  R            - Reset");
    println!("  V            - Toggle vsync");
    println!("  Escape       - Exit");

    let mut input = KeyboardState::new();
    let mut last_frame = Instant::now();
    let mut last_parameters = *driver.rig.parameters();
    let mut vsync = render_settings.vsync();

    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    log::info!("Close requested");
                    elwt.exit();
                }

                WindowEvent::Focused(false) => input.clear(),

                WindowEvent::KeyboardInput { event, .. } => {
                    let PhysicalKey::Code(code) = event.physical_key else {
                        return;
                    };
                    let Some(key) = map_winit_key(code) else {
                        return;
                    };
                    match event.state {
                        ElementState::Pressed if key == KeyCode::Escape => elwt.exit(),
                        ElementState::Pressed => input.key_pressed(key),
                        ElementState::Released => input.key_released(key),
                    }
                }

                WindowEvent::Resized(size) => {
                    if let Some(projection) = driver.rig.projection_camera() {
                        if let Some(camera) = &mut projection.write().camera {
                            camera.set_aspect(size.width as f32, size.height as f32);
                        }
                    }
                }

                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let dt = now.duration_since(last_frame).as_secs_f32();
                    last_frame = now;

                    driver.frame(&mut input, dt);

                    let parameters = *driver.rig.parameters();
                    if parameters != last_parameters {
                        log::info!("Projection parameters: {:?}", parameters);
                        last_parameters = parameters;
                    }
                    if render_settings.vsync() != vsync {
                        vsync = render_settings.vsync();
                        log::info!("Vsync {}", if vsync { "on" } else { "off" });
                    }

                    if let Some(max_frames) = args.max_frames {
                        if driver.frame_number() >= max_frames {
                            log::info!("Reached max frames limit ({}), exiting", max_frames);
                            elwt.exit();
                        }
                    }
                }

                _ => {}
            },

            Event::AboutToWait => window.request_redraw(),

            _ => {}
        }
    });

    if let Err(e) = result {
        log::error!("Event loop error: {}", e);
    }
}
