//! Spawn helpers: игрок, враг (опционально с оружием), лежащее оружие, препятствие

use bevy::prelude::*;

use crate::ai::PatrolRoute;
use crate::combat::{Armament, HeldBy, Weapon};
use crate::components::{Enemy, Player, SightBlocker};
use crate::config::EnemyConfig;

pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((Player, Transform::from_translation(position)))
        .id()
}

/// Spawn врага
///
/// `weapon` — стартовое оружие, создаётся в руках на `config.weapon_offset`.
/// Пустой `patrol_points` → враг стоит на месте (Idle) до обнаружения игрока.
pub fn spawn_enemy(
    commands: &mut Commands,
    position: Vec3,
    config: EnemyConfig,
    patrol_points: Vec<Vec3>,
    weapon: Option<Weapon>,
) -> Entity {
    let weapon_offset = config.weapon_offset;
    let enemy = commands
        .spawn((
            Enemy,
            Transform::from_translation(position),
            config,
            PatrolRoute::new(patrol_points),
        ))
        .id();

    if let Some(weapon) = weapon {
        let weapon_entity = commands
            .spawn((weapon, HeldBy(enemy), Transform::from_translation(weapon_offset)))
            .id();
        commands
            .entity(enemy)
            .insert(Armament {
                weapon: Some(weapon_entity),
            })
            .add_child(weapon_entity);
    }

    enemy
}

/// Spawn оружия, лежащего в мире (можно подобрать)
pub fn spawn_loose_weapon(commands: &mut Commands, position: Vec3, weapon: Weapon) -> Entity {
    commands
        .spawn((weapon, Transform::from_translation(position)))
        .id()
}

pub fn spawn_sight_blocker(commands: &mut Commands, position: Vec3, radius: f32) -> Entity {
    commands
        .spawn((SightBlocker { radius }, Transform::from_translation(position)))
        .id()
}
