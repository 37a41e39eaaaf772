//! Combat module: оружие, пули, pickup/drop
//!
//! ECS ответственность:
//! - Weapon state: ammo counters, fire interval, ownership (HeldBy/Armament)
//! - Projectile pool: движение и время жизни пуль
//! - Events: ShotFired, HandAttackStarted, WeaponPickedUp/Dropped
//!
//! Host ответственность:
//! - Collision callbacks → WeaponContact
//! - Animation/VFX по ShotFired/HandAttackStarted

use bevy::prelude::*;

pub mod events;
pub mod projectile;
pub mod systems;
pub mod weapon;

// Re-export основных типов
pub use events::*;
pub use projectile::{advance_projectiles, nearest_projectile_in_radius, spawn_projectile, Projectile};
pub use weapon::{muzzle_position, weapon_world_transform, Armament, HeldBy, Weapon};

use crate::BehaviorSet;

/// Combat Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. Intake: process_weapon_contacts → process_drop_intents
/// 2. Timers: tick_weapon_timers
/// 3. Actuation: advance_projectiles
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShotFired>()
            .add_event::<HandAttackStarted>()
            .add_event::<WeaponContact>()
            .add_event::<DropWeaponIntent>()
            .add_event::<WeaponPickedUp>()
            .add_event::<WeaponDropped>();

        app.add_systems(
            FixedUpdate,
            (
                (systems::process_weapon_contacts, systems::process_drop_intents)
                    .chain()
                    .in_set(BehaviorSet::Intake),
                systems::tick_weapon_timers.in_set(BehaviorSet::Timers),
                advance_projectiles.in_set(BehaviorSet::Actuation),
            ),
        );
    }
}
