//! Core plugin: shared resources and global settings.

use crate::common::layers::CollisionCategories;
use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.insert_resource(CollisionCategories::allocate());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}
