//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `scroll_shooter::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use scroll_shooter::common::tunables::Tunables;
use scroll_shooter::plugins::combat::EntityKind;
use scroll_shooter::plugins::world::EntityRegistry;

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

/// Headless app with tunables set before the core plugin sees them.
pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(tunables);

    scroll_shooter::game::configure_headless(&mut app);
    app
}

pub fn count(app: &App, kind: EntityKind) -> usize {
    app.world().resource::<EntityRegistry>().count(kind)
}

/// Any entity of `kind`.
pub fn find(app: &mut App, kind: EntityKind) -> Entity {
    let world = app.world_mut();
    let mut q = world.query::<(Entity, &EntityKind)>();
    q.iter(world)
        .find(|(_, k)| **k == kind)
        .map(|(e, _)| e)
        .expect("entity of requested kind")
}
