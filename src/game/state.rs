use bevy::prelude::*;

use crate::constants::{CUE_VOLUME_DIVISOR, SCORE_VELOCITY_THRESHOLD};

/// The one sound-device surface the score logic needs: rewind to the start,
/// set a linear volume, start playback. Production impl lives in
/// `game::audio`; tests use a recording fake.
pub(crate) trait ImpactCue {
    fn rewind(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn play(&mut self);
}

/// Score and welcome-screen state. Fields are private so the two named
/// operations below are the only mutation surface.
#[derive(Resource)]
pub(crate) struct GameState {
    count: u32,
    welcome: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            count: 0,
            welcome: true,
        }
    }
}

impl GameState {
    pub(crate) fn count(&self) -> u32 {
        self.count
    }

    pub(crate) fn welcome(&self) -> bool {
        self.welcome
    }

    /// Paddle impact: always restart the cue at a volume proportional to the
    /// impact velocity, then score the hit if it was fast enough.
    pub(crate) fn pong(&mut self, velocity: f32, cue: &mut dyn ImpactCue) {
        cue.rewind();
        cue.set_volume((velocity / CUE_VOLUME_DIVISOR).clamp(0.0, 1.0));
        cue.play();

        if velocity > SCORE_VELOCITY_THRESHOLD {
            self.count += 1;
        }
    }

    /// Enter or leave the welcome screen. Returning to the welcome screen
    /// clears the score; starting a game keeps it.
    pub(crate) fn reset(&mut self, welcome: bool) {
        self.welcome = welcome;
        if welcome {
            self.count = 0;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ImpactCue;

    #[derive(Debug, PartialEq)]
    pub(crate) enum CueCall {
        Rewind,
        SetVolume(f32),
        Play,
    }

    #[derive(Default)]
    pub(crate) struct RecordingCue {
        pub(crate) calls: Vec<CueCall>,
    }

    impl ImpactCue for RecordingCue {
        fn rewind(&mut self) {
            self.calls.push(CueCall::Rewind);
        }

        fn set_volume(&mut self, volume: f32) {
            self.calls.push(CueCall::SetVolume(volume));
        }

        fn play(&mut self) {
            self.calls.push(CueCall::Play);
        }
    }
}
