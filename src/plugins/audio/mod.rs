//! Audio plugin (render-only): plays `PlaySfx` requests.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::common::messages::PlaySfx;
use crate::common::tunables::Tunables;
use crate::plugins::assets::GameAssets;

pub fn plugin(app: &mut App) {
    app.add_systems(PostUpdate, play_sfx.run_if(resource_exists::<GameAssets>));
}

/// One short-lived audio entity per request; it despawns when playback ends.
fn play_sfx(
    mut commands: Commands,
    mut requests: MessageReader<PlaySfx>,
    assets: Res<GameAssets>,
    tunables: Res<Tunables>,
) {
    for PlaySfx(key) in requests.read() {
        let Some(sound) = assets.sound(*key) else {
            debug!("No sound registered for {key:?}");
            continue;
        };
        commands.spawn((
            AudioPlayer::new(sound.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(tunables.sfx_volume)),
        ));
    }
}
