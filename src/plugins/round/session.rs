//! Score and combo for the current round.

use bevy::prelude::*;

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    pub combo: u32,
}

impl Session {
    /// A brick fell: the combo grows first, then scores as the multiplier.
    /// Returns the points awarded.
    pub fn brick_broken(&mut self, points_per_combo: u32) -> u32 {
        self.combo = self.combo.saturating_add(1);
        let points = points_per_combo.saturating_mul(self.combo);
        self.score = self.score.saturating_add(points);
        points
    }

    #[inline]
    pub fn paddle_touched(&mut self) {
        self.combo = 0;
    }

    /// Serving clears the score; the combo only resets on the paddle.
    #[inline]
    pub fn clear_score(&mut self) {
        self.score = 0;
    }
}
