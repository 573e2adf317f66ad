use std::time::Duration;

use bevy::prelude::*;

use crate::common::test_utils::{run_system_once, session_world};
use crate::common::tunables::Tunables;
use crate::plugins::combat::EntityKind;
use crate::plugins::world::{EntityRegistry, PendingDespawn};

use super::*;

fn time_with_delta(dt: f32) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

fn spawn_registered(world: &mut World, kind: EntityKind, bundle: impl Bundle) -> Entity {
    let e = world.spawn((kind, kind.profile(), bundle)).id();
    world.resource_mut::<EntityRegistry>().register(e, kind);
    e
}

#[test]
fn snake_height_is_a_function_of_x_only() {
    let snake = SnakeMotion {
        spawn_y: 40.0,
        amplitude: 80.0,
        wavelength: 60.0,
    };
    let mut world = World::new();
    let e = world
        .spawn((snake, Transform::from_xyz(900.0, 40.0, 1.0)))
        .id();

    for x in [900.0_f32, 612.5, 300.0, 1.0, -50.0] {
        world.get_mut::<Transform>(e).unwrap().translation.x = x;
        // Running more than once at the same x must not drift.
        run_system_once(&mut world, snake_motion);
        run_system_once(&mut world, snake_motion);

        let y = world.get::<Transform>(e).unwrap().translation.y;
        assert_eq!(y, 40.0 + 80.0 * (x / 60.0).sin());
    }
}

#[test]
fn snake_leaving_playfield_is_destroyed() {
    let mut world = session_world(Tunables { playfield_left: -100.0, ..Tunables::default() });
    let motion = SnakeMotion {
        spawn_y: 0.0,
        amplitude: 10.0,
        wavelength: 10.0,
    };
    let inside = spawn_registered(
        &mut world,
        EntityKind::SnakeEnemy,
        (motion, Transform::from_xyz(-99.0, 0.0, 0.0)),
    );
    let outside = spawn_registered(
        &mut world,
        EntityKind::SnakeEnemy,
        (motion, Transform::from_xyz(-101.0, 0.0, 0.0)),
    );

    run_system_once(&mut world, leave_playfield);

    let registry = world.resource::<EntityRegistry>();
    assert!(registry.contains(inside));
    assert!(!registry.contains(outside));
    assert!(world.get::<PendingDespawn>(outside).is_some());
}

#[test]
fn expiry_fades_then_destroys() {
    let mut world = session_world(Tunables::default());
    let bullet = spawn_registered(
        &mut world,
        EntityKind::Bullet,
        (Expiry::new(0.4, 0.2), Sprite::default()),
    );

    world.insert_resource(time_with_delta(0.3));
    run_system_once(&mut world, tick_expiry);
    assert!(!world.get::<Expiry>(bullet).unwrap().is_fading());

    world.insert_resource(time_with_delta(0.15));
    run_system_once(&mut world, tick_expiry);
    assert!(world.get::<Expiry>(bullet).unwrap().is_fading());

    world.insert_resource(time_with_delta(0.1));
    run_system_once(&mut world, tick_expiry);
    let alpha = world.get::<Sprite>(bullet).unwrap().color.to_srgba().alpha;
    assert!((alpha - 0.5).abs() < 1e-3, "alpha {alpha}");
    assert!(world.resource::<EntityRegistry>().contains(bullet));

    world.insert_resource(time_with_delta(0.15));
    run_system_once(&mut world, tick_expiry);
    assert!(!world.resource::<EntityRegistry>().contains(bullet));
    assert!(world.get::<PendingDespawn>(bullet).is_some());
}
