//! Отложенные callbacks controller'а (identification, dwell, freeze, hand attack).
//!
//! Таймеры тикают всегда, в том числе во время Cooldown.
//! На срабатывании проверяем флаги — это единственная "отмена".

use bevy::prelude::*;

use crate::ai::{tick_timer, BehaviorFlags, BehaviorTimers, EnemyState, EnemyStateChanged, PatrolRoute};
use crate::ai::systems::transition;
use crate::combat::{Armament, DropWeaponIntent, Weapon};

pub fn tick_behavior_timers(
    mut enemies: Query<(
        Entity,
        &mut BehaviorTimers,
        &mut BehaviorFlags,
        &mut EnemyState,
        &mut PatrolRoute,
        &Armament,
    )>,
    weapons: Query<&Weapon>,
    mut drop_intents: EventWriter<DropWeaponIntent>,
    mut state_events: EventWriter<EnemyStateChanged>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut timers, mut flags, mut state, mut route, armament) in enemies.iter_mut() {
        // Identification: игрок всё ещё в радиусе → Pursuit
        if tick_timer(&mut timers.identification, delta) && flags.target_in_radius {
            flags.target_in_radius = false;
            transition(entity, &mut state, EnemyState::Pursuit, &mut state_events);
        }

        // Dwell на patrol point закончился → следующая точка
        if tick_timer(&mut timers.patrol_dwell, delta) {
            route.advance();
            flags.is_moving_on_patrol = true;
        }

        // Freeze после выстрела закончился
        if tick_timer(&mut timers.fire_freeze, delta) {
            let depleted = armament
                .weapon
                .and_then(|weapon| weapons.get(weapon).ok())
                .map(|weapon| weapon.is_depleted())
                .unwrap_or(false);

            if depleted {
                // Патронов нет совсем — выбрасываем, дальше бьём рукой
                drop_intents.write(DropWeaponIntent { holder: entity });
                crate::log_info(&format!("AI: {:?} out of ammo → dropping weapon", entity));
            }
            flags.is_moving = true;
        }

        if tick_timer(&mut timers.hand_attack, delta) {
            flags.in_hand_attack = false;
        }
    }
}
