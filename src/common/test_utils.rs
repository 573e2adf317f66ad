//! Test helpers.
//!
//! Systems are exercised on a bare `World` through `RunSystemOnce`, without a
//! schedule. Systems that use `Commands` only enqueue structural changes, so we
//! call `world.flush()` after running to apply them before assertions.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::layers::CollisionCategories;
use crate::common::tunables::Tunables;
use crate::plugins::world::EntityRegistry;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A world holding the per-session resources every lifecycle-aware system needs.
pub fn session_world(tunables: Tunables) -> World {
    let mut world = World::new();
    world.insert_resource(tunables);
    world.insert_resource(CollisionCategories::allocate());
    world.insert_resource(EntityRegistry::default());
    world
}

/// Inject a `CollisionStart` between two single-collider bodies.
pub fn write_collision(world: &mut World, a: Entity, b: Entity) {
    if world.get_resource::<Messages<CollisionStart>>().is_none() {
        world.init_resource::<Messages<CollisionStart>>();
    }
    world.write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    });
}
