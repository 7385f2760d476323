//! Buffered gameplay messages.
//!
//! Input is sampled by render-only systems and written as intent here, so
//! gameplay systems (and headless tests) only ever read messages.

use bevy::prelude::*;

use super::manifest::AssetKey;

/// Pointer moved to world-space `x`.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct PointerMoved {
    pub x: f32,
}

/// Primary pointer button released.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct PointerReleased;

/// Play the sound registered for this manifest entry.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaySfx(pub AssetKey);
