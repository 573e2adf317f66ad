//! Buffered spawn requests.
//!
//! Producers (the gun) write intent; a single consumer turns each request
//! into a registered bullet. Producers never touch the registry.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnBulletRequest {
    pub pos: Vec2,
    pub vel: Vec2,
}
