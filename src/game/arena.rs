use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::PHYSICS;
use crate::constants::{
    BACKDROP_DEPTH, BACKDROP_HALF_SIZE, GROUND_HALF_EXTENT, GROUND_HALF_THICKNESS, GROUND_HEIGHT,
};

pub struct ArenaPlugin;

/// Marker for the rally-ending ground contact surface.
#[derive(Component)]
pub(crate) struct Ground;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_ground, spawn_backdrop));
    }
}

fn spawn_ground(mut commands: Commands) {
    // Solid and invisible; any ball contact here ends the rally.
    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(GROUND_HALF_EXTENT, GROUND_HALF_THICKNESS, GROUND_HALF_EXTENT),
        Friction::coefficient(PHYSICS.material.friction),
        Restitution::coefficient(PHYSICS.material.restitution),
        Transform::from_xyz(0.0, GROUND_HEIGHT, 0.0),
        Ground,
    ));
}

fn spawn_backdrop(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Z, Vec2::splat(BACKDROP_HALF_SIZE)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load("textures/backdrop.jpg")),
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, BACKDROP_DEPTH),
    ));
}
