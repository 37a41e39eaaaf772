//! Combat events
//!
//! Host → ECS: WeaponContact (collision с лежащим оружием)
//! ECS → host: ShotFired, HandAttackStarted, WeaponPickedUp, WeaponDropped
//! ECS → ECS: DropWeaponIntent

use bevy::prelude::*;

/// Event: враг выстрелил (projectile уже заспавнен)
#[derive(Event, Debug, Clone)]
pub struct ShotFired {
    pub shooter: Entity,
    pub weapon: Entity,
    pub target: Entity,
    /// Мировая позиция дула
    pub origin: Vec3,
    pub direction: Vec3,
    pub projectile: Entity,
}

/// Event: начался удар рукой (host запускает анимацию)
#[derive(Event, Debug, Clone)]
pub struct HandAttackStarted {
    pub attacker: Entity,
    pub target: Entity,
}

/// Event: актор коснулся оружия (host collision callback)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct WeaponContact {
    pub actor: Entity,
    pub weapon: Entity,
}

/// Intent: выбросить оружие из рук
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct DropWeaponIntent {
    pub holder: Entity,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct WeaponPickedUp {
    pub holder: Entity,
    pub weapon: Entity,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct WeaponDropped {
    pub holder: Entity,
    pub weapon: Entity,
}
