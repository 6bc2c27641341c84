use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::arena::Ground;
use super::audio::{CueAssets, PongCue, SpawnCue};
use super::ball::Ball;
use super::paddle::Paddle;
use super::state::GameState;

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            collision_system.after(PhysicsSet::Writeback),
        );
    }
}

/// Routes physics contact reports onto the two store operations. Every
/// reported contact goes through; the engine's own contact generation is the
/// only throttle.
fn collision_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut state: ResMut<GameState>,
    cue_assets: Res<CueAssets>,
    q_cue: Query<Entity, With<PongCue>>,
    q_ball: Query<&Velocity, With<Ball>>,
    q_paddle: Query<(), With<Paddle>>,
    q_ground: Query<(), With<Ground>>,
) {
    for event in collision_events.read() {
        let CollisionEvent::Started(a, b, _) = *event else {
            continue;
        };

        let (a_ball, b_ball) = (q_ball.get(a).is_ok(), q_ball.get(b).is_ok());
        let (a_paddle, b_paddle) = (q_paddle.get(a).is_ok(), q_paddle.get(b).is_ok());
        let (a_ground, b_ground) = (q_ground.get(a).is_ok(), q_ground.get(b).is_ok());

        if (a_ball && b_paddle) || (b_ball && a_paddle) {
            let ball = if a_ball { a } else { b };
            if let Ok(velocity) = q_ball.get(ball) {
                let impact = velocity.linvel.length();
                let mut cue =
                    SpawnCue::new(&mut commands, cue_assets.ping.clone(), q_cue.iter().next());
                state.pong(impact, &mut cue);
            }
        }

        if (a_ball && b_ground) || (b_ball && a_ground) {
            state.reset(true);
        }
    }
}
