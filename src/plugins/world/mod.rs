//! World plugin: the per-session entity registry, spawn/destroy lifecycle and
//! the session restart loop.
//!
//! ```text
//! spawn:   Lifecycle::spawn  -> body + tags + layers, registry.register
//! destroy: Lifecycle::destroy -> registry.unregister, PendingDespawn
//!          (player)           -> registry.request_restart
//! PostUpdate: apply_restart_request, despawn_marked
//! OnExit(InGame): end_session clears the registry
//! OnEnter(Restarting): straight back to InGame
//! ```
//!
//! The registry is the source of truth for "is this entity alive". Removal is
//! immediate, while the ECS despawn is deferred to `PostUpdate`, so any later
//! collision in the same tick sees a destroyed entity as absent.

use bevy::ecs::system::SystemParam;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::CollisionCategories;
use crate::common::state::GameState;
use crate::plugins::combat::EntityKind;

/// Live entities of the current session, keyed by ECS handle.
#[derive(Resource, Debug, Default)]
pub struct EntityRegistry {
    live: HashMap<Entity, EntityKind>,
    restart_requested: bool,
}

impl EntityRegistry {
    pub fn register(&mut self, entity: Entity, kind: EntityKind) {
        self.live.insert(entity, kind);
    }

    pub fn unregister(&mut self, entity: Entity) -> Option<EntityKind> {
        self.live.remove(&entity)
    }

    #[inline]
    pub fn kind(&self, entity: Entity) -> Option<EntityKind> {
        self.live.get(&entity).copied()
    }

    #[inline]
    pub fn contains(&self, entity: Entity) -> bool {
        self.live.contains_key(&entity)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.live.values().filter(|k| **k == kind).count()
    }

    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    /// Returns whether a restart was pending and clears the request.
    pub fn take_restart_request(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    pub fn clear(&mut self) {
        self.live.clear();
        self.restart_requested = false;
    }
}

/// Marker: entity was destroyed and will be despawned in `PostUpdate`.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Spawn/destroy access for systems that create or remove combatants.
#[derive(SystemParam)]
pub struct Lifecycle<'w, 's> {
    commands: Commands<'w, 's>,
    registry: ResMut<'w, EntityRegistry>,
    categories: Res<'w, CollisionCategories>,
}

impl Lifecycle<'_, '_> {
    /// Spawn a combatant: build the body, register it, tag it with its kind,
    /// combat profile and faction layers.
    pub fn spawn(&mut self, kind: EntityKind, body: impl Bundle) -> Entity {
        let layers = self.categories.layers(kind.faction());
        let entity = self
            .commands
            .spawn((
                body,
                kind,
                kind.profile(),
                layers,
                DespawnOnExit(GameState::InGame),
            ))
            .id();
        self.registry.register(entity, kind);
        entity
    }

    /// Destroy a combatant. Returns `false` if it was already gone.
    ///
    /// The player is never removed; destroying it restarts the session.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        match self.registry.kind(entity) {
            None => false,
            Some(EntityKind::Player) => {
                self.registry.request_restart();
                true
            }
            Some(kind) => {
                self.registry.unregister(entity);
                self.commands.entity(entity).insert(PendingDespawn);
                debug!("destroyed {kind:?} {entity}");
                true
            }
        }
    }

    #[inline]
    pub fn is_live(&self, entity: Entity) -> bool {
        self.registry.contains(entity)
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<EntityRegistry>()
        .add_systems(OnExit(GameState::InGame), end_session)
        .add_systems(OnEnter(GameState::Restarting), resume_play)
        .add_systems(
            PostUpdate,
            (despawn_marked, apply_restart_request).run_if(in_state(GameState::InGame)),
        );
}

fn apply_restart_request(
    mut registry: ResMut<EntityRegistry>,
    mut next: ResMut<NextState<GameState>>,
) {
    if registry.take_restart_request() {
        info!("player destroyed, restarting session");
        next.set(GameState::Restarting);
    }
}

fn end_session(mut registry: ResMut<EntityRegistry>) {
    debug!("session ended with {} live entities", registry.len());
    registry.clear();
}

fn resume_play(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::InGame);
}

/// Despawn destroyed entities.
///
/// Centralizing despawn here keeps structural changes out of the fixed step.
fn despawn_marked(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
