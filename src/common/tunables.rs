//! Tunable gameplay constants.
//!
//! Coordinates are screen pixels with the playfield spanning x in
//! `[0, 1280]` and y in `[-360, 360]`; enemies enter from the right.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    /// When set, the player shrugs off all damage.
    pub player_invulnerable: bool,

    pub bullet_speed: f32,
    pub fire_rate_hz: f64,
    /// Bullet spawn point relative to the player.
    pub muzzle_offset: Vec2,
    pub bullet_ttl_secs: f32,
    pub bullet_fade_secs: f32,

    pub swing_duration_secs: f32,

    pub enemy_speed: f32,
    pub enemy_ttl_secs: f32,
    pub enemy_fade_secs: f32,

    pub snake_speed: f32,
    pub snake_amplitude: f32,
    pub snake_wavelength: f32,

    /// Snakes crossing this x have left the playfield.
    pub playfield_left: f32,
    pub spawn_x: f32,
    pub wave_interval_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            player_invulnerable: false,

            bullet_speed: 1200.0,
            fire_rate_hz: 10.0,
            muzzle_offset: Vec2::new(70.0, 0.0),
            bullet_ttl_secs: 0.4,
            bullet_fade_secs: 0.2,

            swing_duration_secs: 0.25,

            enemy_speed: 180.0,
            enemy_ttl_secs: 8.0,
            enemy_fade_secs: 0.3,

            snake_speed: 240.0,
            snake_amplitude: 80.0,
            snake_wavelength: 60.0,

            playfield_left: -100.0,
            spawn_x: 1380.0,
            wave_interval_secs: 1.5,
        }
    }
}
