//! Enemies plugin: hostile spawns and spawn waves.
//!
//! Two kinds enter from the right edge:
//! - `Enemy` drifts left at constant speed and expires after a TTL.
//! - `SnakeEnemy` drifts left while weaving on a sine of its own x, and is
//!   destroyed once it leaves the playfield.
//!
//! Movement itself lives in `plugins::movement`; this module only decides
//! what spawns where and when.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::combat::EntityKind;
use crate::plugins::movement::{Expiry, SnakeMotion};
use crate::plugins::world::Lifecycle;

/// Vertical lanes cycled by the wave spawner.
const LANES: [f32; 5] = [-220.0, 120.0, -60.0, 240.0, 40.0];

#[derive(Component)]
pub struct Enemy;

/// Repeating spawn schedule for one session.
#[derive(Resource, Debug, Clone)]
pub struct WaveSpawner {
    timer: Timer,
    spawned: u32,
}

impl WaveSpawner {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs, TimerMode::Repeating),
            spawned: 0,
        }
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Kind and lane of the next spawn, alternating kinds.
    fn next(&mut self) -> (EntityKind, f32) {
        let n = self.spawned;
        self.spawned += 1;
        let kind = if n % 2 == 0 {
            EntityKind::Enemy
        } else {
            EntityKind::SnakeEnemy
        };
        (kind, LANES[n as usize % LANES.len()])
    }
}

impl Default for WaveSpawner {
    fn default() -> Self {
        Self::new(Tunables::default().wave_interval_secs)
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<WaveSpawner>();

    app.add_systems(
        OnEnter(GameState::InGame),
        (reset_waves, spawn_initial_scenario),
    );

    app.add_systems(
        FixedUpdate,
        spawn_waves.run_if(in_state(GameState::InGame)),
    );
}

fn reset_waves(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(WaveSpawner::new(tunables.wave_interval_secs));
}

/// Hostiles present as soon as a session begins.
fn spawn_initial_scenario(mut lifecycle: Lifecycle, tunables: Res<Tunables>) {
    spawn_enemy(&mut lifecycle, &tunables, Vec2::new(900.0, -150.0));
    spawn_snake(&mut lifecycle, &tunables, Vec2::new(1100.0, 150.0));
}

fn spawn_waves(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut spawner: ResMut<WaveSpawner>,
    mut lifecycle: Lifecycle,
) {
    spawner.timer.tick(time.delta());

    for _ in 0..spawner.timer.times_finished_this_tick() {
        let (kind, lane) = spawner.next();
        let pos = Vec2::new(tunables.spawn_x, lane);
        match kind {
            EntityKind::SnakeEnemy => spawn_snake(&mut lifecycle, &tunables, pos),
            _ => spawn_enemy(&mut lifecycle, &tunables, pos),
        };
    }
}

fn enemy_body(name: &'static str, color: Color, pos: Vec2, vel: Vec2) -> impl Bundle {
    (
        Name::new(name),
        Enemy,
        Sprite {
            color,
            custom_size: Some(Vec2::splat(40.0)),
            ..default()
        },
        Transform::from_translation(pos.extend(1.0)),
        RigidBody::Dynamic,
        LockedAxes::ROTATION_LOCKED,
        Collider::rectangle(40.0, 40.0),
        LinearVelocity(vel),
        CollisionEventsEnabled,
    )
}

pub fn spawn_enemy(lifecycle: &mut Lifecycle, tunables: &Tunables, pos: Vec2) -> Entity {
    lifecycle.spawn(
        EntityKind::Enemy,
        (
            enemy_body(
                "Enemy",
                Color::srgb(0.2, 0.8, 0.3),
                pos,
                Vec2::new(-tunables.enemy_speed, 0.0),
            ),
            Expiry::new(tunables.enemy_ttl_secs, tunables.enemy_fade_secs),
        ),
    )
}

pub fn spawn_snake(lifecycle: &mut Lifecycle, tunables: &Tunables, pos: Vec2) -> Entity {
    let motion = SnakeMotion {
        spawn_y: pos.y,
        amplitude: tunables.snake_amplitude,
        wavelength: tunables.snake_wavelength,
    };
    let start = Vec2::new(pos.x, motion.y_at(pos.x));

    lifecycle.spawn(
        EntityKind::SnakeEnemy,
        (
            enemy_body(
                "SnakeEnemy",
                Color::srgb(0.6, 0.3, 0.9),
                start,
                Vec2::new(-tunables.snake_speed, 0.0),
            ),
            motion,
        ),
    )
}
