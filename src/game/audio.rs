use bevy::audio::Volume;
use bevy::prelude::*;

use super::state::ImpactCue;

pub struct CuePlugin;

/// Marker for the currently playing impact-cue entity.
#[derive(Component)]
pub(crate) struct PongCue;

#[derive(Resource)]
pub(crate) struct CueAssets {
    pub(crate) ping: Handle<AudioSource>,
}

impl Plugin for CuePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_cue);
    }
}

fn load_cue(mut commands: Commands, asset_server: Res<AssetServer>) {
    // Missing file degrades to silence with an asset warning.
    commands.insert_resource(CueAssets {
        ping: asset_server.load("sounds/ping.ogg"),
    });
}

/// Production cue: restart-from-zero with last-writer-wins semantics.
/// Rewinding despawns the cue entity still playing (if any); play spawns a
/// fresh one at the recorded volume, despawned by the engine when done.
pub(crate) struct SpawnCue<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    source: Handle<AudioSource>,
    previous: Option<Entity>,
    volume: f32,
}

impl<'a, 'w, 's> SpawnCue<'a, 'w, 's> {
    pub(crate) fn new(
        commands: &'a mut Commands<'w, 's>,
        source: Handle<AudioSource>,
        previous: Option<Entity>,
    ) -> Self {
        Self {
            commands,
            source,
            previous,
            volume: 1.0,
        }
    }
}

impl ImpactCue for SpawnCue<'_, '_, '_> {
    fn rewind(&mut self) {
        if let Some(entity) = self.previous.take() {
            self.commands.entity(entity).despawn();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn play(&mut self) {
        self.commands.spawn((
            PongCue,
            AudioPlayer::new(self.source.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(self.volume)),
        ));
    }
}
