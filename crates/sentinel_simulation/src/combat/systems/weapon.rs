//! Weapon lifecycle systems: fire interval, pickup, drop.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::combat::{
    weapon_world_transform, Armament, DropWeaponIntent, HeldBy, Weapon, WeaponContact,
    WeaponDropped, WeaponPickedUp,
};
use crate::components::Enemy;
use crate::config::EnemyConfig;

/// System: тикаем fire interval у всех оружий
pub fn tick_weapon_timers(mut weapons: Query<&mut Weapon>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut weapon in weapons.iter_mut() {
        weapon.tick(delta);
    }
}

/// System: WeaponContact → подобрать оружие
///
/// Подбираем только если:
/// - актор — враг без оружия
/// - оружие ни у кого не в руках (в том числе не занято в этом же тике)
/// - в оружии остались патроны
pub fn process_weapon_contacts(
    mut commands: Commands,
    mut contacts: EventReader<WeaponContact>,
    mut enemies: Query<(&mut Armament, &EnemyConfig), With<Enemy>>,
    weapons: Query<(&Weapon, Option<&HeldBy>)>,
    mut picked_events: EventWriter<WeaponPickedUp>,
) {
    // HeldBy вставляется через Commands — до sync point его не видно
    let mut claimed: HashSet<Entity> = HashSet::new();

    for contact in contacts.read() {
        let Ok((mut armament, config)) = enemies.get_mut(contact.actor) else {
            continue;
        };
        if armament.weapon.is_some() {
            continue;
        }

        let Ok((weapon, held_by)) = weapons.get(contact.weapon) else {
            continue;
        };
        if held_by.is_some() || claimed.contains(&contact.weapon) || weapon.is_depleted() {
            continue;
        }

        claimed.insert(contact.weapon);
        armament.weapon = Some(contact.weapon);

        commands
            .entity(contact.weapon)
            .insert((HeldBy(contact.actor), Transform::from_translation(config.weapon_offset)));
        commands.entity(contact.actor).add_child(contact.weapon);

        picked_events.write(WeaponPickedUp {
            holder: contact.actor,
            weapon: contact.weapon,
        });

        crate::log_info(&format!(
            "🔫 {:?} picked up weapon {:?} (ammo {}/{})",
            contact.actor, contact.weapon, weapon.ammo_in_store, weapon.all_ammo
        ));
    }
}

/// System: DropWeaponIntent → выбросить оружие в мир
///
/// Оружие остаётся на месте где было в руках (world transform).
pub fn process_drop_intents(
    mut commands: Commands,
    mut intents: EventReader<DropWeaponIntent>,
    mut holders: Query<(&mut Armament, &Transform)>,
    weapons: Query<&Transform, With<Weapon>>,
    mut dropped_events: EventWriter<WeaponDropped>,
) {
    for intent in intents.read() {
        let Ok((mut armament, holder_transform)) = holders.get_mut(intent.holder) else {
            continue;
        };
        let Some(weapon_entity) = armament.weapon.take() else {
            continue;
        };

        let Ok(weapon_local) = weapons.get(weapon_entity) else {
            // Оружие уже despawned — просто очищаем Armament
            crate::log_warning(&format!(
                "{:?} drop: weapon {:?} missing, clearing Armament",
                intent.holder, weapon_entity
            ));
            continue;
        };

        let world = weapon_world_transform(holder_transform, weapon_local);
        commands
            .entity(weapon_entity)
            .remove::<(HeldBy, ChildOf)>()
            .insert(world);

        dropped_events.write(WeaponDropped {
            holder: intent.holder,
            weapon: weapon_entity,
        });

        crate::log_info(&format!(
            "🗑️ {:?} dropped weapon {:?} at {:?}",
            intent.holder, weapon_entity, world.translation
        ));
    }
}
