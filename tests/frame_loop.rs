use dome_projection::demo::{SharedRenderSettings, SharedText};
use dome_projection::{
    AntiAliasing, Camera, CubeMapSize, DemoAction, DemoBindings, DemoInputController,
    FrameDriver, KeyCode, KeyboardState, NodeHandle, ProjectionRig, RigBindings, RigError,
    SceneNode,
};
use glam::{Quat, Vec3};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Rig {
    driver: FrameDriver,
    world: NodeHandle,
    base: NodeHandle,
    fps: SharedText,
    settings: SharedRenderSettings,
}

fn build_rig(initial_pitch: f32, initial_roll: f32) -> Rig {
    let projection = SceneNode::with_camera("Projection Camera", Camera::default()).into_handle();
    let world = SceneNode::with_camera("World Camera", Camera::default()).into_handle();
    let base = SceneNode::new("Demo Camera Base").into_handle();

    let mut rig = ProjectionRig::default();
    rig.parameters_mut().world_pitch = initial_pitch;
    rig.parameters_mut().world_roll = initial_roll;
    rig.initialize(RigBindings::new(projection, world.clone()))
        .expect("both cameras bound");

    let fps = SharedText::new();
    let settings = SharedRenderSettings::new(true);
    let controller = DemoInputController::new(
        &rig,
        DemoBindings {
            camera_base: Some(base.clone()),
            fps_text: Some(Box::new(fps.clone())),
            render_settings: Some(Box::new(settings.clone())),
        },
    );

    Rig {
        driver: FrameDriver::new(rig).with_controller(controller),
        world,
        base,
        fps,
        settings,
    }
}

fn tap(rig: &mut Rig, key: KeyCode) -> Option<DemoAction> {
    let mut input = KeyboardState::new();
    input.key_pressed(key);
    rig.driver.frame(&mut input, 1.0 / 60.0)
}

// ---------------------------------------------------------------------------
// Full loop: input -> controller -> rig -> camera
// ---------------------------------------------------------------------------

#[test]
fn world_camera_follows_parameters() {
    let mut rig = build_rig(-80.0, 0.0);
    let mut input = KeyboardState::new();
    rig.driver.frame(&mut input, 0.016);

    let expected = Quat::from_rotation_x((-80.0f32).to_radians());
    assert!(rig.world.read().transform.rotation.abs_diff_eq(expected, 1e-5));

    tap(&mut rig, KeyCode::ArrowRight);
    let expected = Quat::from_rotation_x((-80.0f32).to_radians())
        * Quat::from_rotation_z(5.0f32.to_radians());
    assert!(rig.world.read().transform.rotation.abs_diff_eq(expected, 1e-5));
}

#[test]
fn parameters_stay_in_range_under_key_mashing() {
    let mut rig = build_rig(-80.0, 0.0);
    let keys = [
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::BracketRight,
        KeyCode::ArrowUp,
        KeyCode::BracketLeft,
    ];
    for i in 0..400 {
        let key = keys[(i * 7 + i / 3) % keys.len()];
        tap(&mut rig, key);

        let p = *rig.driver.rig.parameters();
        assert!((120..=270).contains(&p.field_of_view));
        assert!((-120.0..=120.0).contains(&p.world_pitch));
        assert!((-180.0..=180.0).contains(&p.world_roll));
    }
}

#[test]
fn reset_after_many_changes() {
    let mut rig = build_rig(-60.0, 15.0);
    for key in [
        KeyCode::ArrowUp,
        KeyCode::ArrowUp,
        KeyCode::ArrowLeft,
        KeyCode::Digit4,
        KeyCode::F3,
        KeyCode::D,
        KeyCode::E,
    ] {
        tap(&mut rig, key);
    }
    assert_ne!(rig.base.read().transform.position, Vec3::ZERO);

    assert_eq!(tap(&mut rig, KeyCode::R), Some(DemoAction::Reset));
    let p = rig.driver.rig.parameters();
    assert_eq!(p.world_pitch, -60.0);
    assert_eq!(p.world_roll, 15.0);
    assert_eq!(p.cube_map_size, CubeMapSize::Cube1024);
    assert_eq!(p.anti_aliasing, AntiAliasing::Off);
    assert_eq!(rig.base.read().transform.position, Vec3::ZERO);
}

#[test]
fn held_key_fires_once() {
    let mut rig = build_rig(-80.0, 0.0);
    let mut input = KeyboardState::new();
    input.key_pressed(KeyCode::BracketLeft);
    for _ in 0..5 {
        // Auto-repeat events while held
        input.key_pressed(KeyCode::BracketLeft);
        rig.driver.frame(&mut input, 0.016);
    }
    assert_eq!(rig.driver.rig.parameters().field_of_view, 265);
}

#[test]
fn fps_readout_and_vsync() {
    let mut rig = build_rig(-80.0, 0.0);
    let mut input = KeyboardState::new();
    for _ in 0..10 {
        rig.driver.frame(&mut input, 0.1);
    }
    assert_eq!(rig.fps.get(), "10");

    tap(&mut rig, KeyCode::V);
    assert!(!rig.settings.vsync());
}

#[test]
fn unbound_rig_is_inert() {
    let mut rig = ProjectionRig::default();
    let err = rig.initialize(RigBindings::default()).unwrap_err();
    assert!(matches!(err, RigError::MissingNode(_)));

    let controller = DemoInputController::new(&rig, DemoBindings::default());
    let mut driver = FrameDriver::new(rig).with_controller(controller);
    driver.rig.parameters_mut().world_pitch = 999.0;

    let mut input = KeyboardState::new();
    input.key_pressed(KeyCode::ArrowUp);
    assert_eq!(driver.frame(&mut input, 0.016), None);
    assert_eq!(driver.rig.parameters().world_pitch, 999.0);
}
