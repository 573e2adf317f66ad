//! Projectiles plugin: message-based producer -> consumer bullet spawning.
//!
//! ```text
//! FixedUpdate
//!   (A) Producer: weapons::fire_gun
//!       - reads: PlayerInput, Gun (WeaponTimer)
//!       - writes: one SpawnBulletRequest per due shot
//!   (B) Consumer: spawn_requested_bullets
//!       - reads: SpawnBulletRequest
//!       - spawns + registers a Bullet through Lifecycle
//!   (C) movement::tick_expiry fades and destroys bullets after their TTL
//! ```

pub mod messages;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::combat::EntityKind;
use crate::plugins::movement::Expiry;
use crate::plugins::weapons;
use crate::plugins::world::Lifecycle;

use messages::SpawnBulletRequest;

pub fn plugin(app: &mut App) {
    app.add_message::<SpawnBulletRequest>();

    app.add_systems(
        FixedUpdate,
        spawn_requested_bullets
            .after(weapons::fire_gun)
            .run_if(in_state(GameState::InGame)),
    );
}

/// Consumer: one bullet per request, all with the same straight-line drift.
pub fn spawn_requested_bullets(
    mut reader: MessageReader<SpawnBulletRequest>,
    tunables: Res<Tunables>,
    mut lifecycle: Lifecycle,
) {
    for req in reader.read() {
        lifecycle.spawn(
            EntityKind::Bullet,
            (
                Name::new("Bullet"),
                Expiry::new(tunables.bullet_ttl_secs, tunables.bullet_fade_secs),
                Sprite {
                    color: Color::srgb(1.0, 0.9, 0.1),
                    custom_size: Some(Vec2::splat(10.0)),
                    ..default()
                },
                Transform::from_translation(req.pos.extend(2.0)),
                RigidBody::Kinematic,
                Collider::rectangle(10.0, 10.0),
                Sensor,
                LinearVelocity(req.vel),
                // Opt-in collision events: Avian only emits CollisionStart if one collider has this marker.
                CollisionEventsEnabled,
            ),
        );
    }
}
