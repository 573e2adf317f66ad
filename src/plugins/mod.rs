//! Feature plugins.

use bevy::prelude::*;

pub mod combat;
pub mod core;
pub mod enemies;
pub mod movement;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod weapons;
pub mod world;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    weapons::plugin(app);
    projectiles::plugin(app);
    movement::plugin(app);
    enemies::plugin(app);
    combat::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}
