use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::state::GameState;
use super::UpdateSet;

pub struct HudPlugin;

#[derive(Component)]
pub(crate) struct ScoreText;

#[derive(Component)]
pub(crate) struct WelcomeOverlay;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            (update_score_text, update_welcome_overlay).in_set(UpdateSet::Hud),
        );
    }
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(30.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("0"),
                TextFont::from_font_size(64.0),
                TextColor(color_from_hex(Colors::SCORE)),
                ScoreText,
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Visibility::Visible,
            WelcomeOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Click to start"),
                TextFont::from_font_size(28.0),
                TextColor(color_from_hex(Colors::OVERLAY)),
            ));
        });
}

fn update_score_text(state: Res<GameState>, mut q_score: Query<&mut Text, With<ScoreText>>) {
    if !state.is_changed() {
        return;
    }
    if let Ok(mut text) = q_score.single_mut() {
        text.0 = state.count().to_string();
    }
}

fn update_welcome_overlay(
    state: Res<GameState>,
    mut q_overlay: Query<&mut Visibility, With<WelcomeOverlay>>,
) {
    if !state.is_changed() {
        return;
    }
    if let Ok(mut visibility) = q_overlay.single_mut() {
        *visibility = if state.welcome() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::test_support::RecordingCue;
    use super::*;

    fn make_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<GameState>();
        app.add_systems(Update, (update_score_text, update_welcome_overlay));
        app
    }

    #[test]
    fn score_text_follows_the_count() {
        let mut app = make_test_app();
        let score = app.world_mut().spawn((ScoreText, Text::new(""))).id();

        app.update();
        assert_eq!(&app.world().get::<Text>(score).unwrap().0, "0");

        {
            let mut state = app.world_mut().resource_mut::<GameState>();
            let mut cue = RecordingCue::default();
            state.reset(false);
            state.pong(10.0, &mut cue);
            state.pong(10.0, &mut cue);
        }
        app.update();
        assert_eq!(&app.world().get::<Text>(score).unwrap().0, "2");
    }

    #[test]
    fn score_text_clears_on_return_to_welcome() {
        let mut app = make_test_app();
        let score = app.world_mut().spawn((ScoreText, Text::new(""))).id();

        {
            let mut state = app.world_mut().resource_mut::<GameState>();
            let mut cue = RecordingCue::default();
            state.reset(false);
            state.pong(10.0, &mut cue);
        }
        app.update();
        assert_eq!(&app.world().get::<Text>(score).unwrap().0, "1");

        app.world_mut().resource_mut::<GameState>().reset(true);
        app.update();
        assert_eq!(&app.world().get::<Text>(score).unwrap().0, "0");
    }

    #[test]
    fn overlay_tracks_the_welcome_flag() {
        let mut app = make_test_app();
        let overlay = app
            .world_mut()
            .spawn((WelcomeOverlay, Visibility::Visible))
            .id();

        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(overlay).unwrap(),
            Visibility::Visible
        );

        app.world_mut().resource_mut::<GameState>().reset(false);
        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(overlay).unwrap(),
            Visibility::Hidden
        );

        app.world_mut().resource_mut::<GameState>().reset(true);
        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(overlay).unwrap(),
            Visibility::Visible
        );
    }
}
