//! Movement behaviors beyond "velocity set once at spawn".
//!
//! - `Expiry`: linear drifters (bullets, plain enemies) live for a fixed time,
//!   fade out, then destroy themselves.
//! - `SnakeMotion`: vertical position is a pure function of the current x, so
//!   the waveform is locked to space, not time. Snakes are destroyed when
//!   they cross the left edge of the playfield instead of expiring.
//!
//! Both state machines are advanced by the fixed tick; nothing here relies on
//! tween callbacks.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::world::{Lifecycle, PendingDespawn};

#[derive(Component, Debug, Clone)]
pub enum Expiry {
    Alive { ttl: Timer, fade_secs: f32 },
    Fading { timer: Timer },
}

impl Expiry {
    pub fn new(ttl_secs: f32, fade_secs: f32) -> Self {
        Self::Alive {
            ttl: Timer::from_seconds(ttl_secs, TimerMode::Once),
            fade_secs,
        }
    }

    pub fn is_fading(&self) -> bool {
        matches!(self, Self::Fading { .. })
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct SnakeMotion {
    pub spawn_y: f32,
    pub amplitude: f32,
    pub wavelength: f32,
}

impl SnakeMotion {
    #[inline]
    pub fn y_at(&self, x: f32) -> f32 {
        self.spawn_y + self.amplitude * (x / self.wavelength).sin()
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (tick_expiry, snake_motion, leave_playfield.after(snake_motion))
            .run_if(in_state(GameState::InGame)),
    );
}

/// Alive -> Fading when the TTL runs out, then destroy once fully faded.
pub fn tick_expiry(
    time: Res<Time>,
    mut lifecycle: Lifecycle,
    mut q: Query<(Entity, &mut Expiry, &mut Sprite), Without<PendingDespawn>>,
) {
    let dt = time.delta();

    for (e, mut expiry, mut sprite) in &mut q {
        let next = match &mut *expiry {
            Expiry::Alive { ttl, fade_secs } => {
                ttl.tick(dt);
                ttl.is_finished().then(|| Expiry::Fading {
                    timer: Timer::from_seconds(*fade_secs, TimerMode::Once),
                })
            }
            Expiry::Fading { timer } => {
                timer.tick(dt);

                let mut c = sprite.color.to_srgba();
                c.alpha = 1.0 - timer.fraction();
                sprite.color = c.into();

                if timer.is_finished() {
                    lifecycle.destroy(e);
                }
                None
            }
        };

        if let Some(next) = next {
            *expiry = next;
        }
    }
}

pub fn snake_motion(mut q: Query<(&mut Transform, &SnakeMotion), Without<PendingDespawn>>) {
    for (mut tf, snake) in &mut q {
        tf.translation.y = snake.y_at(tf.translation.x);
    }
}

pub fn leave_playfield(
    tunables: Res<Tunables>,
    mut lifecycle: Lifecycle,
    q: Query<(Entity, &Transform), (With<SnakeMotion>, Without<PendingDespawn>)>,
) {
    for (e, tf) in &q {
        if tf.translation.x < tunables.playfield_left {
            lifecycle.destroy(e);
        }
    }
}

#[cfg(test)]
mod tests;
