//! Camera plugin (render-only).
//!
//! The view is fixed on the playfield: x in `[0, 1280]`, y in `[-360, 360]`.
//! The camera lives for the whole app, not per session.

use bevy::prelude::*;

pub const PLAYFIELD_CENTER: Vec2 = Vec2::new(640.0, 0.0);

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Camera"),
        Camera2d,
        Transform::from_translation(PLAYFIELD_CENTER.extend(999.0)),
    ));
}
