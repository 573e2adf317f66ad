//! Weapons plugin: the player's gun and sword.
//!
//! Both run in `FixedUpdate` off the `PlayerInput` snapshot:
//! - `fire_gun` asks the `WeaponTimer` how many shots are due and writes one
//!   `SpawnBulletRequest` per shot. Bullets of one tick share a position.
//! - `swing_sword` drives the sword's `PathFollower` around the player.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::{Player, PlayerInput};
use crate::plugins::projectiles::messages::SpawnBulletRequest;
use crate::plugins::world::PendingDespawn;

pub mod path;
pub mod timer;

pub use path::PathFollower;
pub use timer::WeaponTimer;

/// Ranged weapon carried by its owner.
#[derive(Component, Debug, Clone)]
pub struct Gun {
    pub timer: WeaponTimer,
    /// Bullet spawn point relative to the owner.
    pub muzzle: Vec2,
}

impl Gun {
    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self {
            timer: WeaponTimer::new(tunables.fire_rate_hz),
            muzzle: tunables.muzzle_offset,
        }
    }
}

/// Marker for the sword hit-volume.
#[derive(Component, Debug, Clone, Copy)]
pub struct Sword;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (fire_gun, swing_sword).run_if(in_state(GameState::InGame)),
    );
}

pub fn fire_gun(
    time: Res<Time>,
    input: Res<PlayerInput>,
    tunables: Res<Tunables>,
    mut q: Query<(&Transform, &mut Gun)>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let now = time.elapsed();
    let vel = Vec2::new(tunables.bullet_speed, 0.0);

    for (tf, mut gun) in &mut q {
        let shots = gun.timer.fire_bullets(now, input.fire);
        let pos = tf.translation.truncate() + gun.muzzle;
        for _ in 0..shots {
            writer.write(SpawnBulletRequest { pos, vel });
        }
    }
}

pub fn swing_sword(
    time: Res<Time>,
    input: Res<PlayerInput>,
    // Disjointness proof: the player is not a sword.
    q_player: Query<&Transform, (With<Player>, Without<Sword>)>,
    mut q_sword: Query<
        (&mut Transform, &mut PathFollower),
        (With<Sword>, Without<Player>, Without<PendingDespawn>),
    >,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let anchor = player_tf.translation.truncate();
    let dt = time.delta_secs();

    for (mut tf, mut follower) in &mut q_sword {
        let (pos, facing_deg) = follower.advance(input.swing, anchor, dt);
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;
        tf.rotation = Quat::from_rotation_z(facing_deg.to_radians());
    }
}
