use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use thiserror::Error;

use crate::common::tunables::Tunables;
use crate::plugins::world::Lifecycle;

use super::components::{CombatProfile, DamageExchange};

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    #[error("collider {collider} (body {owner}) has no owning combatant")]
    Untagged { collider: Entity, owner: Entity },
}

/// One side of a contact after lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Live(Entity, CombatProfile),
    /// Destroyed earlier in this tick; ignored without noise.
    Stale(Entity),
}

fn resolve_side(
    target: CollisionTarget,
    profiles: &Query<&CombatProfile>,
    lifecycle: &Lifecycle,
) -> Result<Side, ResolveError> {
    let owner = target.gameplay_owner();
    let Ok(profile) = profiles.get(owner) else {
        return Err(ResolveError::Untagged {
            collider: target.collider,
            owner,
        });
    };
    if lifecycle.is_live(owner) {
        Ok(Side::Live(owner, *profile))
    } else {
        Ok(Side::Stale(owner))
    }
}

/// Resolve each started contact into a symmetric damage exchange.
///
/// Both sides' outgoing damage is read before either reaction runs, so the
/// outcome does not depend on which collider Avian lists first.
pub fn resolve_collisions(
    mut started: MessageReader<CollisionStart>,
    profiles: Query<&CombatProfile>,
    tunables: Res<Tunables>,
    mut lifecycle: Lifecycle,
) {
    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let sides = resolve_side(t1, &profiles, &lifecycle)
            .and_then(|a| Ok((a, resolve_side(t2, &profiles, &lifecycle)?)));

        let (a, b) = match sides {
            Ok((Side::Live(a, pa), Side::Live(b, pb))) => ((a, pa), (b, pb)),
            Ok((Side::Stale(e), _)) | Ok((_, Side::Stale(e))) => {
                debug!("ignoring contact with destroyed entity {e}");
                continue;
            }
            Err(err) => {
                warn!("unresolved collision: {err}");
                continue;
            }
        };

        let exchange = DamageExchange::between(&a.1, &b.1);
        take_damage(&mut lifecycle, a, exchange.to_a, tunables.player_invulnerable);
        take_damage(&mut lifecycle, b, exchange.to_b, tunables.player_invulnerable);
    }
}

fn take_damage(
    lifecycle: &mut Lifecycle,
    (entity, profile): (Entity, CombatProfile),
    amount: u32,
    invulnerable: bool,
) {
    if profile.is_lethal(amount, invulnerable) {
        lifecycle.destroy(entity);
    }
}
