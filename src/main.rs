mod config;
mod constants;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_rapier3d::prelude::*;

use game::{
    ArenaPlugin, BallPlugin, CollisionPlugin, CorePlugin, CuePlugin, HudPlugin, InputPlugin,
    PaddlePlugin,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ping Pong".to_string(),
                resolution: WindowResolution::new(1280, 720),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(CorePlugin)
        .add_plugins(ArenaPlugin)
        .add_plugins(PaddlePlugin)
        .add_plugins(BallPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(CuePlugin)
        .add_plugins(CollisionPlugin)
        .add_plugins(HudPlugin)
        .run();
}
