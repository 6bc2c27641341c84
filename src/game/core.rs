use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::PHYSICS;
use crate::constants::{
    color_from_hex, Colors, CAMERA_FOV_DEGREES, CAMERA_POSITION,
};

use super::input::PointerState;
use super::state::GameState;

/// Frame-synchronous ordering of the authored systems: read input, drive
/// transforms/spawns, then refresh the HUD. The collision router runs in
/// PostUpdate after the physics writeback instead.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Track,
    Hud,
}

pub struct CorePlugin;

#[derive(Component)]
struct MainCamera;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            .init_resource::<PointerState>()
            .insert_resource(ClearColor(color_from_hex(Colors::BACKGROUND)))
            .configure_sets(
                Update,
                (UpdateSet::Input, UpdateSet::Track, UpdateSet::Hud).chain(),
            )
            .add_systems(
                Startup,
                (setup_camera, setup_lights, configure_physics).chain(),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    let [x, y, z] = CAMERA_POSITION;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

fn setup_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -10.0),
    ));

    commands.spawn((
        SpotLight {
            intensity: 50_000_000.0,
            range: 100.0,
            inner_angle: 0.0,
            outer_angle: 0.3,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn configure_physics(
    mut q_config: Query<&mut RapierConfiguration>,
    mut q_simulation: Query<&mut RapierContextSimulation>,
) {
    for mut config in &mut q_config {
        config.gravity = PHYSICS.gravity;
    }

    for mut simulation in &mut q_simulation {
        PHYSICS.apply(&mut simulation.integration_parameters);
    }
}
