use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::config::PHYSICS;
use crate::constants::{
    PADDLE_HALF_EXTENTS, PADDLE_TRAVEL_X, PADDLE_TRAVEL_Y, PADDLE_YAW_RANGE, POINTER_SMOOTHING,
};

use super::input::PointerState;
use super::state::GameState;
use super::UpdateSet;

pub struct PaddlePlugin;

#[derive(Component)]
pub(crate) struct Paddle;

/// Decorative held model. Not part of the collision shape; it only follows
/// the smoothed pointer and folds away on the welcome screen.
#[derive(Component)]
pub(crate) struct PaddleModel;

/// Rolling smoothed pointer-derived angles, persisted across frames.
#[derive(Default)]
pub(crate) struct SmoothedInput {
    yaw: f32,
    tilt: f32,
}

impl Plugin for PaddlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_paddle)
            .add_systems(Update, track_pointer.in_set(UpdateSet::Track));
    }
}

pub(crate) fn lerp(value: f32, target: f32, factor: f32) -> f32 {
    value + factor * (target - value)
}

fn spawn_paddle(mut commands: Commands, asset_server: Res<AssetServer>) {
    let [hx, hy, hz] = PADDLE_HALF_EXTENTS;

    commands
        .spawn((
            RigidBody::KinematicPositionBased,
            Collider::cuboid(hx, hy, hz),
            Friction::coefficient(PHYSICS.material.friction),
            Restitution::coefficient(PHYSICS.material.restitution),
            Transform::default(),
            Visibility::default(),
            Paddle,
        ))
        .with_children(|parent| {
            // Renders nothing until the asset resolves.
            parent.spawn((
                SceneRoot(
                    asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/paddle.glb")),
                ),
                Transform::default(),
                PaddleModel,
            ));
        });
}

/// Once per rendered frame: smooth the pointer-derived angles, write the
/// kinematic paddle pose (position raw, rotation smoothed), and steer the
/// decorative model. Both smoothed components track `pointer.x`.
fn track_pointer(
    pointer: Res<PointerState>,
    state: Res<GameState>,
    mut smoothed: Local<SmoothedInput>,
    mut q_paddle: Query<&mut Transform, With<Paddle>>,
    mut q_model: Query<&mut Transform, (With<PaddleModel>, Without<Paddle>)>,
) {
    let target = pointer.x * PADDLE_YAW_RANGE;
    smoothed.yaw = lerp(smoothed.yaw, target, POINTER_SMOOTHING);
    smoothed.tilt = lerp(smoothed.tilt, target, POINTER_SMOOTHING);

    if let Ok(mut transform) = q_paddle.single_mut() {
        transform.translation = Vec3::new(
            pointer.x * PADDLE_TRAVEL_X,
            pointer.y * PADDLE_TRAVEL_Y,
            0.0,
        );
        transform.rotation = Quat::from_rotation_z(smoothed.tilt);
    }

    if let Ok(mut transform) = q_model.single_mut() {
        let (pitch, _, _) = transform.rotation.to_euler(EulerRot::XYZ);
        let rest = if state.welcome() { FRAC_PI_2 } else { 0.0 };
        let pitch = lerp(pitch, rest, POINTER_SMOOTHING);
        transform.rotation = Quat::from_euler(EulerRot::XYZ, pitch, smoothed.yaw, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_moves_a_fifth_of_the_way() {
        assert!((lerp(0.0, 1.0, 0.2) - 0.2).abs() < 1e-6);
        assert!((lerp(1.0, 0.0, 0.2) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn lerp_matches_closed_form_decay() {
        // n repeated steps toward a constant target T leave
        // T + (v0 - T) * 0.8^n.
        let target = 3.0_f32;
        let v0 = -1.0_f32;
        let mut value = v0;
        for n in 1..=30 {
            value = lerp(value, target, 0.2);
            let expected = target + (v0 - target) * 0.8_f32.powi(n);
            assert!(
                (value - expected).abs() < 1e-4,
                "step {n}: {value} != {expected}"
            );
        }
    }

    #[test]
    fn lerp_converges_without_reaching_the_target() {
        let mut value = 0.0_f32;
        for _ in 0..100 {
            value = lerp(value, 1.0, 0.2);
            assert!(value < 1.0);
        }
        assert!((value - 1.0).abs() < 1e-6);
    }

    fn make_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<GameState>();
        app.init_resource::<PointerState>();
        app.add_systems(Update, track_pointer);
        app
    }

    #[test]
    fn paddle_position_tracks_the_raw_pointer() {
        let mut app = make_test_app();
        let paddle = app.world_mut().spawn((Paddle, Transform::default())).id();

        {
            let mut pointer = app.world_mut().resource_mut::<PointerState>();
            pointer.x = 1.0;
            pointer.y = -0.5;
        }
        app.update();

        let transform = app.world().get::<Transform>(paddle).unwrap();
        assert_eq!(
            transform.translation,
            Vec3::new(PADDLE_TRAVEL_X, -0.5 * PADDLE_TRAVEL_Y, 0.0)
        );
    }

    #[test]
    fn paddle_rotation_is_smoothed_not_snapped() {
        let mut app = make_test_app();
        let paddle = app.world_mut().spawn((Paddle, Transform::default())).id();

        app.world_mut().resource_mut::<PointerState>().x = 1.0;
        app.update();

        let target = PADDLE_YAW_RANGE;
        let transform = app.world().get::<Transform>(paddle).unwrap();
        let (_, _, tilt) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!((tilt - 0.2 * target).abs() < 1e-5);

        app.update();
        let transform = app.world().get::<Transform>(paddle).unwrap();
        let (_, _, tilt) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!((tilt - 0.36 * target).abs() < 1e-5);
    }

    #[test]
    fn paddle_rotation_converges_to_pointer_target() {
        let mut app = make_test_app();
        let paddle = app.world_mut().spawn((Paddle, Transform::default())).id();

        app.world_mut().resource_mut::<PointerState>().x = -1.0;
        for _ in 0..100 {
            app.update();
        }

        let transform = app.world().get::<Transform>(paddle).unwrap();
        let (_, _, tilt) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!((tilt + PADDLE_YAW_RANGE).abs() < 1e-4);
    }

    #[test]
    fn model_folds_up_on_welcome_screen() {
        let mut app = make_test_app();
        let model = app
            .world_mut()
            .spawn((PaddleModel, Transform::default()))
            .id();

        for _ in 0..100 {
            app.update();
        }

        let transform = app.world().get::<Transform>(model).unwrap();
        let (pitch, _, _) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!((pitch - FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn model_unfolds_once_the_game_starts() {
        let mut app = make_test_app();
        let model = app
            .world_mut()
            .spawn((PaddleModel, Transform::default()))
            .id();

        for _ in 0..100 {
            app.update();
        }
        app.world_mut().resource_mut::<GameState>().reset(false);
        for _ in 0..100 {
            app.update();
        }

        let transform = app.world().get::<Transform>(model).unwrap();
        let (pitch, _, _) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!(pitch.abs() < 1e-3);
    }

    #[test]
    fn model_yaw_follows_the_smoothed_pointer() {
        let mut app = make_test_app();
        let model = app
            .world_mut()
            .spawn((PaddleModel, Transform::default()))
            .id();

        app.world_mut().resource_mut::<PointerState>().x = 1.0;
        app.update();

        let transform = app.world().get::<Transform>(model).unwrap();
        let (_, yaw, _) = transform.rotation.to_euler(EulerRot::XYZ);
        assert!((yaw - 0.2 * PADDLE_YAW_RANGE).abs() < 1e-5);
    }
}
