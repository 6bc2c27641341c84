use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::PHYSICS;
use crate::constants::{color_from_hex, Colors, BALL_MASS, BALL_RADIUS, BALL_SPAWN_HEIGHT};

use super::state::GameState;
use super::UpdateSet;

pub struct BallPlugin;

#[derive(Component)]
pub(crate) struct Ball;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sync_ball_to_state.in_set(UpdateSet::Track));
    }
}

/// The ball exists only outside the welcome screen. Spawning a fresh one per
/// rally also resets its physics state.
fn sync_ball_to_state(
    mut commands: Commands,
    state: Res<GameState>,
    q_ball: Query<Entity, With<Ball>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !state.is_changed() {
        return;
    }

    if state.welcome() {
        for entity in &q_ball {
            commands.entity(entity).despawn();
        }
    } else if q_ball.is_empty() {
        spawn_ball(&mut commands, &mut meshes, &mut materials);
    }
}

fn spawn_ball(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        // Physics
        RigidBody::Dynamic,
        Collider::ball(BALL_RADIUS),
        ColliderMassProperties::Mass(BALL_MASS),
        Friction::coefficient(PHYSICS.material.friction),
        Restitution::coefficient(PHYSICS.material.restitution),
        ActiveEvents::COLLISION_EVENTS,
        Ccd::enabled(),
        Velocity::zero(),
        Transform::from_xyz(0.0, BALL_SPAWN_HEIGHT, 0.0),
        // Visual
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::BALL),
            ..default()
        })),
        Ball,
    ));
}
