//! Player plugin.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn the player (carrying a `Gun`) and its sword
//! - Update: sample keys into the `PlayerInput` snapshot
//! - FixedUpdate: apply velocity to the kinematic body
//!
//! The player never leaves the registry: lethal damage restarts the session.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::combat::EntityKind;
use crate::plugins::weapons::{Gun, PathFollower, Sword};
use crate::plugins::world::Lifecycle;

pub const SPAWN_POS: Vec2 = Vec2::new(100.0, 0.0);

#[derive(Component)]
pub struct Player;

/// Key state sampled once per frame.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerInput {
    pub move_axis: Vec2,
    pub fire: bool,
    pub swing: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(OnExit(GameState::InGame), reset_input)
        .add_systems(Update, gather_input)
        .add_systems(
            FixedUpdate,
            apply_movement.run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut lifecycle: Lifecycle, tunables: Res<Tunables>) {
    lifecycle.spawn(
        EntityKind::Player,
        (
            Name::new("Player"),
            Player,
            Gun::from_tunables(&tunables),
            Sprite {
                color: Color::srgb(0.9, 0.15, 0.15),
                custom_size: Some(Vec2::new(100.0, 50.0)),
                ..default()
            },
            Transform::from_translation(SPAWN_POS.extend(1.0)),
            RigidBody::Kinematic,
            Collider::rectangle(100.0, 50.0),
            // Contacts only raise events; hostiles are never pushed off course.
            Sensor,
            LinearVelocity::ZERO,
        ),
    );

    lifecycle.spawn(
        EntityKind::Sword,
        (
            Name::new("Sword"),
            Sword,
            PathFollower::swing(tunables.swing_duration_secs),
            Sprite {
                color: Color::srgb(0.85, 0.85, 0.95),
                custom_size: Some(Vec2::new(10.0, 70.0)),
                ..default()
            },
            Transform::from_translation(SPAWN_POS.extend(1.5)),
            RigidBody::Kinematic,
            Collider::rectangle(10.0, 70.0),
            Sensor,
            CollisionEventsEnabled,
        ),
    );
}

fn reset_input(mut input: ResMut<PlayerInput>) {
    *input = PlayerInput::default();
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    // Headless apps have no keyboard.
    let Some(keys) = keys else {
        return;
    };

    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = if axis.length_squared() > 0.0 {
        axis.normalize()
    } else {
        Vec2::ZERO
    };
    input.fire = keys.pressed(KeyCode::Space);
    input.swing = keys.pressed(KeyCode::KeyJ);
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.player_speed;
}

#[cfg(test)]
mod tests;
