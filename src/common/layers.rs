//! Collision layers and the per-faction category table.
//!
//! Every combatant belongs to exactly one faction. The physics layer only ever
//! reports cross-faction pairs: enemies never collide with enemies, and
//! player-owned bodies (player, bullets, sword) never collide with each other.

use avian2d::prelude::*;
use bevy::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Faction {
    Player,
    Enemy,
}

/// Category table allocated once when the world is built.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CollisionCategories {
    player: CollisionLayers,
    enemy: CollisionLayers,
}

impl CollisionCategories {
    pub fn allocate() -> Self {
        Self {
            player: CollisionLayers::new(Layer::Player, [Layer::Enemy]),
            enemy: CollisionLayers::new(Layer::Enemy, [Layer::Player]),
        }
    }

    #[inline]
    pub fn layers(&self, faction: Faction) -> CollisionLayers {
        match faction {
            Faction::Player => self.player,
            Faction::Enemy => self.enemy,
        }
    }
}

impl Default for CollisionCategories {
    fn default() -> Self {
        Self::allocate()
    }
}
