//! Asset plugin (render-only): loads the manifest once and skins sprites.
//!
//! Gameplay spawns plain coloured sprites tagged with `Skin`. Once the handles
//! exist, each skinned sprite is switched to its image at its display size.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::common::manifest::{AssetKey, MANIFEST, Skin};

#[derive(Resource, Debug, Default)]
pub struct GameAssets {
    images: HashMap<AssetKey, Handle<Image>>,
    sounds: HashMap<AssetKey, Handle<AudioSource>>,
}

impl GameAssets {
    pub fn image(&self, key: AssetKey) -> Option<&Handle<Image>> {
        self.images.get(&key)
    }

    pub fn sound(&self, key: AssetKey) -> Option<&Handle<AudioSource>> {
        self.sounds.get(&key)
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, load_manifest).add_systems(
        Update,
        apply_skins.run_if(resource_exists::<GameAssets>),
    );
}

fn load_manifest(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut assets = GameAssets::default();
    for (key, desc) in MANIFEST.iter() {
        assets.images.insert(*key, asset_server.load(desc.image));
        if let Some(sound) = desc.sound {
            assets.sounds.insert(*key, asset_server.load(sound));
        }
    }
    info!("Requested {} images, {} sounds", assets.images.len(), assets.sounds.len());
    commands.insert_resource(assets);
}

fn apply_skins(assets: Res<GameAssets>, mut q: Query<(&Skin, &mut Sprite), Changed<Skin>>) {
    for (skin, mut sprite) in &mut q {
        let Some(image) = assets.image(skin.0) else {
            continue;
        };
        sprite.image = image.clone();
        sprite.color = Color::WHITE;
        sprite.custom_size = Some(skin.0.descriptor().display_size());
    }
}
