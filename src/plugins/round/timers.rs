//! Deferred return to `Waiting` after a round ends.
//!
//! Each end of round pushes its own one-shot timer. Timers are never cancelled:
//! if two are pending (loss and win in the same frame) both fire, and the
//! second one simply re-enters `Waiting`.

use bevy::prelude::*;
use bevy::time::Real;

use crate::common::state::RoundState;

#[derive(Resource, Debug, Default)]
pub struct ReturnTimers(Vec<Timer>);

impl ReturnTimers {
    pub fn schedule(&mut self, secs: f32) {
        self.0.push(Timer::from_seconds(secs, TimerMode::Once));
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.0.len()
    }
}

/// Tick on wall-clock time so the delay does not depend on frame rate or
/// virtual time speed.
pub fn tick_return_timers(
    real_time: Res<Time<Real>>,
    mut timers: ResMut<ReturnTimers>,
    mut next: ResMut<NextState<RoundState>>,
) {
    if timers.0.is_empty() {
        return;
    }

    let dt = real_time.delta();
    let before = timers.0.len();
    timers.0.retain_mut(|t| !t.tick(dt).just_finished());

    for _ in timers.0.len()..before {
        info!("Round over; back to waiting");
        next.set(RoundState::Waiting);
    }
}
