//! Combat plugin: entity kinds, combat profiles and collision resolution.
//!
//! ```text
//! FixedPostUpdate
//!   (A) Avian emits CollisionStart messages (cross-faction pairs only)
//!   (B) resolve_collisions
//!       - reads: CollisionStart, CombatProfile, EntityRegistry
//!       - snapshots both profiles, then applies take_damage to each side
//!       - destroys via Lifecycle (registry removal is immediate)
//! ```
//!
//! Unknown colliders are reported and skipped. Entities destroyed earlier in
//! the same tick are skipped silently.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub mod collision;
pub mod components;

pub use components::{CombatProfile, DamageExchange, DamageReaction, EntityKind};

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedPostUpdate,
        collision::resolve_collisions
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}
