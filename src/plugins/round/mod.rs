//! Round plugin: the breakout state machine.
//!
//! Pipeline:
//! - Update / Input: a pointer release while `Waiting` requests `Playing`
//! - OnEnter(Playing): launch the ball
//! - Update / Round: per-state duties (serve, end-of-round checks, return timers)
//! - FixedPostUpdate: collision rules, after Avian has written `CollisionStart`
//!
//! Score, combo and pending timers live in resources owned by this plugin;
//! the HUD only reads them.

pub mod collision;
pub mod session;
pub mod timers;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::messages::PointerReleased;
use crate::common::state::{FrameSystems, GameState, RoundState};
use crate::common::tunables::Tunables;
use crate::plugins::ball::{Ball, launch_ball};
use crate::plugins::bricks::{Brick, reset_brick};
use crate::plugins::paddle::Paddle;

pub use session::Session;
pub use timers::ReturnTimers;

pub fn plugin(app: &mut App) {
    app.init_resource::<Session>()
        .init_resource::<ReturnTimers>();

    app.add_systems(Update, start_on_release.in_set(FrameSystems::Input))
        .add_systems(OnEnter(RoundState::Playing), launch_ball)
        .add_systems(
            Update,
            (
                hold_for_serve.run_if(in_state(RoundState::Waiting)),
                detect_round_end.run_if(in_state(RoundState::Playing)),
                timers::tick_return_timers,
            )
                .chain()
                .in_set(FrameSystems::Round),
        );

    app.add_systems(
        FixedPostUpdate,
        collision::resolve_ball_contacts
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}

/// Reads releases in every state so stale clicks never leak into the next serve.
fn start_on_release(
    mut released: MessageReader<PointerReleased>,
    state: Res<State<RoundState>>,
    mut next: ResMut<NextState<RoundState>>,
) {
    if released.read().count() == 0 {
        return;
    }
    if *state.get() != RoundState::Waiting {
        debug!("Pointer release ignored in {:?}", state.get());
        return;
    }
    info!("Serve");
    next.set(RoundState::Playing);
}

/// Every frame while waiting: clear the score, restore every brick and hold
/// the ball still above the paddle.
fn hold_for_serve(
    tunables: Res<Tunables>,
    mut session: ResMut<Session>,
    q_paddle: Query<&Transform, (With<Paddle>, Without<Ball>, Without<Brick>)>,
    mut q_ball: Query<(&mut Transform, &mut LinearVelocity), (With<Ball>, Without<Paddle>, Without<Brick>)>,
    mut q_bricks: Query<
        (&mut Brick, &mut Transform, &mut Visibility, &mut CollisionLayers),
        (Without<Ball>, Without<Paddle>),
    >,
) {
    session.clear_score();

    for (mut brick, mut tf, mut vis, mut layers) in &mut q_bricks {
        reset_brick(&mut brick, &mut tf, &mut vis, &mut layers);
    }

    let Ok(paddle_tf) = q_paddle.single() else {
        return;
    };
    let Ok((mut ball_tf, mut vel)) = q_ball.single_mut() else {
        return;
    };
    let rest = Ball::rest_position(paddle_tf.translation.x, &tunables);
    ball_tf.translation.x = rest.x;
    ball_tf.translation.y = rest.y;
    vel.0 = Vec2::ZERO;
}

/// Loss is checked before win; if both hold in one frame both timers are
/// scheduled and the later request (`Win`) is the one applied.
fn detect_round_end(
    tunables: Res<Tunables>,
    mut timers: ResMut<ReturnTimers>,
    mut next: ResMut<NextState<RoundState>>,
    q_ball: Query<&Transform, With<Ball>>,
    q_bricks: Query<&Brick>,
) {
    if let Ok(ball_tf) = q_ball.single() {
        if ball_tf.translation.y < tunables.lower_bound() {
            info!("Ball lost; game over");
            next.set(RoundState::GameOver);
            timers.schedule(tunables.return_delay_secs);
        }
    }

    if q_bricks.iter().all(|b| !b.is_enabled()) {
        info!("All bricks cleared; win");
        next.set(RoundState::Win);
        timers.schedule(tunables.return_delay_secs);
    }
}
