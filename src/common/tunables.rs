//! Tunable gameplay constants.
//!
//! Positions are given in canvas space (origin top-left, y down) to match the
//! host page; `canvas_to_world` maps them into the y-up world the camera frames.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Playfield size in world units; the camera is centred on it.
    pub playfield: Vec2,

    pub paddle_canvas_y: f32,
    pub ball_rest_canvas_y: f32,
    /// World-space launch velocity (canvas (-75, 300) points down-left).
    pub launch_velocity: Vec2,
    pub nudge_factor: f32,

    pub brick_columns: u32,
    pub brick_rows: u32,
    pub brick_origin: Vec2,
    pub brick_spacing: Vec2,
    pub oscillation_amplitude: f32,
    /// Column x with no horizontal sway; amplitude scales with distance from it.
    pub oscillation_pivot_x: f32,

    pub points_per_combo: u32,
    pub return_delay_secs: f32,
    pub sfx_volume: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            playfield: Vec2::new(800.0, 600.0),
            paddle_canvas_y: 550.0,
            ball_rest_canvas_y: 450.0,
            launch_velocity: Vec2::new(-75.0, -300.0),
            nudge_factor: 2.0,
            brick_columns: 18,
            brick_rows: 4,
            brick_origin: Vec2::new(50.0, 50.0),
            brick_spacing: Vec2::new(40.0, 75.0),
            oscillation_amplitude: 50.0,
            oscillation_pivot_x: 400.0,
            points_per_combo: 10,
            return_delay_secs: 5.0,
            sfx_volume: 0.5,
        }
    }
}

impl Tunables {
    #[inline]
    pub fn canvas_to_world(&self, canvas: Vec2) -> Vec2 {
        Vec2::new(canvas.x, self.playfield.y - canvas.y)
    }

    /// World y under which the ball has left the playfield.
    #[inline]
    pub fn lower_bound(&self) -> f32 {
        self.canvas_to_world(Vec2::new(0.0, self.playfield.y)).y
    }

    pub fn brick_count(&self) -> usize {
        (self.brick_columns * self.brick_rows) as usize
    }
}
