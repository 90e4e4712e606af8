use std::time::{Duration, Instant};

use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::{PresentMode, PrimaryWindow, WindowResolution};

use crate::configuration::config::WindowConfig;
use crate::simulation::interaction::{apply_pointer, PointerInput};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Particle};

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Sleeps at the end of each frame so frames are at least `frame` long
#[derive(Resource)]
struct FramePacer {
    frame: Duration,
    last: Instant,
}

/// Last cursor position seen inside the window, used when the button is
/// released outside of it
#[derive(Resource, Default)]
struct LastPointer(Option<NVec2>);

pub fn run_2d(scenario: Scenario, window: &WindowConfig) -> AppExit {
    let frame = Duration::from_secs_f64(1.0 / scenario.engine.target_fps);

    let mut app = App::new();
    app.insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(FramePacer { frame, last: Instant::now() })
        .init_resource::<LastPointer>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window.title.clone(),
                resolution: WindowResolution::new(window.width as f32, window.height as f32),
                resizable: false,
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_particles_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .add_systems(Last, frame_pacing_system);

    if window.log_fps {
        app.add_plugins((FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin::default()));
    }

    app.run()
}

/// World coordinates have the origin at the top-left with +y down, like the cursor
fn to_screen(x: &NVec2, z: f32) -> Vec3 {
    Vec3::new(x.x as f32, -(x.y as f32), z)
}

fn particle_color(p: &Particle) -> Color {
    let [r, g, b, a] = p.color;
    Color::srgba_u8(r, g, b, a)
}

fn setup_particles_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!(
        "starting 2D viewer with {} particles on {} workers",
        scenario.system.particles.len(),
        scenario.engine.workers
    );

    // Camera centred on the viewport so (0, 0) lands in the top-left corner
    let mut camera = Camera2dBundle::default();
    camera.transform.translation.x = (scenario.parameters.width * 0.5) as f32;
    camera.transform.translation.y = -(scenario.parameters.height * 0.5) as f32;
    commands.spawn(camera);

    for (i, p) in scenario.system.particles.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(p.radius as f32))),
                material: materials.add(ColorMaterial::from(particle_color(p))),
                transform: Transform::from_translation(to_screen(&p.x, 0.0)),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    mut last_pointer: ResMut<LastPointer>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    let dt = time.delta_seconds_f64();

    if let Some(cursor) = windows.get_single().ok().and_then(Window::cursor_position) {
        last_pointer.0 = Some(NVec2::new(cursor.x as f64, cursor.y as f64));
    }

    let input = PointerInput {
        position: last_pointer.0,
        pressed: buttons.just_pressed(MouseButton::Left),
        released: buttons.just_released(MouseButton::Left),
    };

    let before = scenario.system.dragged;
    apply_pointer(&mut scenario.system, input, dt);
    match (before, scenario.system.dragged) {
        (None, Some(i)) => debug!("dragging particle {i}"),
        (Some(i), None) => debug!("released particle {i}"),
        _ => {}
    }

    scenario.step(dt);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.system.particles.get(*i) {
            transform.translation = to_screen(&p.x, transform.translation.z);
        }
    }
}

fn frame_pacing_system(mut pacer: ResMut<FramePacer>) {
    let elapsed = pacer.last.elapsed();
    if elapsed < pacer.frame {
        std::thread::sleep(pacer.frame - elapsed);
    }
    pacer.last = Instant::now();
}
