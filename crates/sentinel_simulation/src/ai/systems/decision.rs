//! State controller: EnemyState → NavAgent destination + fire/hand attack.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::{BehaviorFlags, BehaviorTimers, Cooldown, EnemyState, PatrolRoute};
use crate::combat::{
    muzzle_position, spawn_projectile, Armament, DropWeaponIntent, HandAttackStarted, ShotFired,
    Weapon,
};
use crate::components::{planar_distance, Enemy, NavAgent, PursuitTarget, SightLine};
use crate::config::EnemyConfig;
use crate::DeterministicRng;

/// Время стоянки на patrol point: dwell_delay ± jitter, не меньше 0
///
/// Offset = jitter * u, u ∈ [-1, 1): без Uniform range, не переполняется.
/// Невалидный (не конечный) jitter игнорируется.
pub fn dwell_duration(config: &EnemyConfig, rng: &mut impl Rng) -> f32 {
    let jitter = if config.dwell_jitter.is_finite() {
        config.dwell_jitter.abs()
    } else {
        0.0
    };
    let offset = if jitter > 0.0 {
        jitter * (2.0 * rng.gen::<f32>() - 1.0)
    } else {
        0.0
    };
    (config.dwell_delay + offset).max(0.0)
}

/// System: update status (каждый тик, кроме Cooldown и freeze после выстрела)
///
/// - Idle: держим позицию
/// - Patrolling: идём к текущей точке, на точке — стоим dwell_duration
/// - Pursuit: бежим к цели на pursuit_speed, стреляем или бьём рукой
#[allow(clippy::type_complexity)]
pub fn update_status(
    mut commands: Commands,
    mut enemies: Query<
        (
            Entity,
            &Transform,
            &EnemyConfig,
            &EnemyState,
            &SightLine,
            &mut Armament,
            Option<&PursuitTarget>,
            &mut PatrolRoute,
            &mut BehaviorFlags,
            &mut BehaviorTimers,
            &mut NavAgent,
        ),
        (With<Enemy>, Without<Cooldown>),
    >,
    targets: Query<&Transform, (Without<Enemy>, Without<Weapon>)>,
    mut weapons: Query<(&mut Weapon, &Transform)>,
    mut rng: ResMut<DeterministicRng>,
    mut shot_events: EventWriter<ShotFired>,
    mut hand_events: EventWriter<HandAttackStarted>,
    mut drop_intents: EventWriter<DropWeaponIntent>,
) {
    for (
        entity,
        transform,
        config,
        state,
        sight,
        mut armament,
        target,
        mut route,
        mut flags,
        mut timers,
        mut agent,
    ) in enemies.iter_mut()
    {
        if !flags.is_moving {
            continue;
        }

        let position = transform.translation;

        match state {
            EnemyState::Idle => {
                agent.look_at = None;
                agent.hold(position);
            }

            EnemyState::Patrolling => {
                agent.look_at = None;
                agent.speed = config.patrol_speed;

                if !flags.is_moving_on_patrol {
                    continue;
                }

                let Some(point) = route.current_point() else {
                    continue;
                };
                agent.destination = Some(point);

                if planar_distance(point, position) < config.stay_radius {
                    flags.is_moving_on_patrol = false;
                    let dwell = dwell_duration(config, &mut rng.rng);
                    timers.patrol_dwell = Some(dwell);
                    crate::log(&format!(
                        "AI: {:?} reached patrol point #{} → waiting {:.2}s",
                        entity,
                        route.index % route.points.len(),
                        dwell
                    ));
                }
            }

            EnemyState::Pursuit => {
                let Some(PursuitTarget(target)) = target.copied() else {
                    continue;
                };
                let Ok(target_transform) = targets.get(target) else {
                    continue;
                };
                let target_position = target_transform.translation;

                agent.destination = Some(target_position);
                agent.speed = config.pursuit_speed;
                agent.look_at = Some(target_position);

                // Оружие despawned — считаем врага безоружным
                if let Some(weapon_entity) = armament.weapon {
                    if !weapons.contains(weapon_entity) {
                        armament.weapon = None;
                        crate::log_warning(&format!(
                            "AI: {:?} weapon {:?} missing, fighting unarmed",
                            entity, weapon_entity
                        ));
                    }
                }

                match armament.weapon {
                    Some(weapon_entity) => {
                        let Ok((mut weapon, weapon_local)) = weapons.get_mut(weapon_entity) else {
                            continue;
                        };

                        // Пустое оружие: во время freeze его выбросит таймер,
                        // без freeze (например, выдали пустым) — выбрасываем сразу
                        if weapon.is_depleted() {
                            if timers.fire_freeze.is_none() {
                                drop_intents.write(DropWeaponIntent { holder: entity });
                            }
                            continue;
                        }

                        let in_range = position.distance(target_position) < weapon.radius_to_fire();
                        if !in_range || sight.muzzle_hit != Some(target) {
                            continue;
                        }

                        if weapon.check_and_fire() {
                            let origin = muzzle_position(transform, weapon_local);
                            let direction = *transform.forward();
                            let projectile = spawn_projectile(
                                &mut commands,
                                entity,
                                origin,
                                direction,
                                weapon.projectile_speed,
                                weapon.projectile_lifetime,
                            );
                            shot_events.write(ShotFired {
                                shooter: entity,
                                weapon: weapon_entity,
                                target,
                                origin,
                                direction,
                                projectile,
                            });
                            crate::log(&format!(
                                "💥 {:?} fired at {:?} (ammo {}/{})",
                                entity, target, weapon.ammo_in_store, weapon.all_ammo
                            ));
                        }

                        // Стоим на месте delay_after_fire, потом продолжаем
                        flags.is_moving = false;
                        agent.hold(position);
                        timers.fire_freeze = Some(config.delay_after_fire);
                    }
                    None => {
                        let close_enough =
                            planar_distance(position, target_position) < config.hand_attack_distance;
                        if close_enough && sight.target_visible && !flags.in_hand_attack {
                            flags.in_hand_attack = true;
                            timers.hand_attack = Some(config.hand_attack_duration);
                            hand_events.write(HandAttackStarted {
                                attacker: entity,
                                target,
                            });
                            crate::log(&format!("👊 {:?} hand attack on {:?}", entity, target));
                        }
                    }
                }
            }
        }
    }
}
