use bevy::prelude::*;

use crate::common::layers::Faction;

/// What a combatant is. Fixed at spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    SnakeEnemy,
    Bullet,
    Sword,
}

impl EntityKind {
    #[inline]
    pub fn faction(self) -> Faction {
        match self {
            Self::Player | Self::Bullet | Self::Sword => Faction::Player,
            Self::Enemy | Self::SnakeEnemy => Faction::Enemy,
        }
    }

    /// Capability table for this kind.
    pub fn profile(self) -> CombatProfile {
        match self {
            Self::Player => CombatProfile::new(0, DamageReaction::DestroyUnlessInvulnerable),
            Self::Enemy | Self::SnakeEnemy | Self::Bullet => {
                CombatProfile::new(1, DamageReaction::Destroy)
            }
            Self::Sword => CombatProfile::new(1, DamageReaction::Ignore),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageReaction {
    Ignore,
    Destroy,
    /// Gated by `Tunables::player_invulnerable`.
    DestroyUnlessInvulnerable,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatProfile {
    pub deals: u32,
    pub reaction: DamageReaction,
}

impl CombatProfile {
    pub const fn new(deals: u32, reaction: DamageReaction) -> Self {
        Self { deals, reaction }
    }

    #[inline]
    pub fn deal_damage(&self) -> u32 {
        self.deals
    }

    /// Whether receiving `amount` should destroy the owner.
    #[inline]
    pub fn is_lethal(&self, amount: u32, invulnerable: bool) -> bool {
        if amount == 0 {
            return false;
        }
        match self.reaction {
            DamageReaction::Ignore => false,
            DamageReaction::Destroy => true,
            DamageReaction::DestroyUnlessInvulnerable => !invulnerable,
        }
    }
}

/// Damage each side receives from one contact, computed from both profiles
/// before either reaction is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageExchange {
    pub to_a: u32,
    pub to_b: u32,
}

impl DamageExchange {
    pub fn between(a: &CombatProfile, b: &CombatProfile) -> Self {
        Self {
            to_a: b.deal_damage(),
            to_b: a.deal_damage(),
        }
    }
}
