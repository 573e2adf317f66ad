use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::{CollisionCategories, Faction};
use crate::common::test_utils::{run_system_once, session_world};
use crate::common::tunables::Tunables;
use crate::plugins::combat::{CombatProfile, EntityKind};
use crate::plugins::weapons::{Gun, Sword};
use crate::plugins::world::EntityRegistry;

#[test]
fn spawn_registers_player_and_sword() {
    let mut world = session_world(Tunables::default());
    run_system_once(&mut world, super::spawn);

    let registry = world.resource::<EntityRegistry>();
    assert_eq!(registry.count(EntityKind::Player), 1);
    assert_eq!(registry.count(EntityKind::Sword), 1);

    let player_layers = CollisionCategories::allocate().layers(Faction::Player);
    let (kind, profile, layers, _gun) = world
        .query_filtered::<(&EntityKind, &CombatProfile, &CollisionLayers, &Gun), With<super::Player>>()
        .single(&world)
        .unwrap();
    assert_eq!(*kind, EntityKind::Player);
    assert_eq!(*profile, EntityKind::Player.profile());
    assert_eq!(*layers, player_layers);

    let sword_layers = world
        .query_filtered::<&CollisionLayers, With<Sword>>()
        .single(&world)
        .unwrap();
    assert_eq!(*sword_layers, player_layers);
}

#[test]
fn player_hitbox_is_a_sensor() {
    let mut world = session_world(Tunables::default());
    run_system_once(&mut world, super::spawn);

    let mut q = world.query_filtered::<(&RigidBody, Has<Sensor>), With<super::Player>>();
    let (body, is_sensor) = q.single(&world).unwrap();
    assert_eq!(*body, RigidBody::Kinematic);
    assert!(is_sensor);
}

#[test]
fn apply_movement_sets_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, ..Tunables::default() });
    world.insert_resource(super::PlayerInput {
        move_axis: Vec2::new(1.0, 0.0),
        ..default()
    });
    world.spawn((super::Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
}

#[test]
fn gather_input_without_keyboard_keeps_snapshot() {
    let mut world = World::new();
    world.insert_resource(super::PlayerInput { fire: true, ..default() });

    run_system_once(&mut world, super::gather_input);

    assert!(world.resource::<super::PlayerInput>().fire);
}

#[test]
fn gather_input_reads_held_keys() {
    let mut world = World::new();
    world.insert_resource(super::PlayerInput::default());
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyD);
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::Space);
    world.insert_resource(keys);

    run_system_once(&mut world, super::gather_input);

    let input = *world.resource::<super::PlayerInput>();
    assert!(input.fire);
    assert!(!input.swing);
    assert!((input.move_axis - Vec2::new(1.0, 1.0).normalize()).length() < 1e-6);
}
