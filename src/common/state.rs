//! Global state machine.
//!
//! `InGame` is one play session. A restart bounces through `Restarting` so
//! every `DespawnOnExit(InGame)` entity is cleared and `OnEnter(InGame)`
//! rebuilds the initial scenario.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    Restarting,
}
