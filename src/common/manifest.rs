//! Declarative asset manifest.
//!
//! Entity kinds name the assets they need here; a single loader (render-only)
//! turns the manifest into handles. Gameplay code never touches the asset server.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Ball,
    Brick,
    Paddle,
}

#[derive(Debug, Clone, Copy)]
pub struct AssetDescriptor {
    pub image: &'static str,
    pub sound: Option<&'static str>,
    /// Native image size in pixels.
    pub size: Vec2,
    pub scale: f32,
}

impl AssetDescriptor {
    /// On-screen size, also used for the collider.
    #[inline]
    pub fn display_size(&self) -> Vec2 {
        self.size * self.scale
    }
}

pub static MANIFEST: [(AssetKey, AssetDescriptor); 3] = [
    (
        AssetKey::Ball,
        AssetDescriptor {
            image: "bomb.png",
            sound: None,
            size: Vec2::new(14.0, 14.0),
            scale: 1.0,
        },
    ),
    (
        AssetKey::Brick,
        AssetDescriptor {
            image: "star.png",
            sound: Some("flagdrop.wav"),
            size: Vec2::new(24.0, 22.0),
            scale: 1.0,
        },
    ),
    (
        AssetKey::Paddle,
        AssetDescriptor {
            image: "platform.png",
            sound: Some("itempick1.wav"),
            size: Vec2::new(400.0, 32.0),
            scale: 0.5,
        },
    ),
];

impl AssetKey {
    pub fn descriptor(self) -> &'static AssetDescriptor {
        MANIFEST
            .iter()
            .find_map(|(key, desc)| (*key == self).then_some(desc))
            .expect("every AssetKey has a manifest entry")
    }
}

/// Which manifest entry skins this entity's sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin(pub AssetKey);
