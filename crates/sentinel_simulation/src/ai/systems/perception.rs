//! Perception: обнаружение игрока (дистанция + пули игрока рядом).

use bevy::prelude::*;

use crate::ai::{BehaviorFlags, BehaviorTimers, Cooldown, EnemyState, EnemyStateChanged};
use crate::ai::systems::transition;
use crate::combat::{nearest_projectile_in_radius, Projectile};
use crate::components::{planar_distance, Enemy, Player, PursuitTarget};
use crate::config::EnemyConfig;

/// Результат одного тика perception (чистая функция для тестов)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// В identification radius — взвести/держать подтверждение
    Identifying,
    /// В view radius и рядом пуля игрока — сразу Pursuit
    UnderFire,
    /// Вне view radius — патруль
    OutOfView,
    /// В view radius, но ни то ни другое
    InViewIdle,
}

/// Порядок проверок важен: identification → огонь → вне обзора → остальное
pub fn classify_detection(distance: f32, config: &EnemyConfig, hostile_fire_nearby: bool) -> Detection {
    if distance < config.identification_radius {
        Detection::Identifying
    } else if distance < config.view_radius && hostile_fire_nearby {
        Detection::UnderFire
    } else if distance >= config.view_radius {
        Detection::OutOfView
    } else {
        Detection::InViewIdle
    }
}

/// System: target detection (каждый тик, кроме Cooldown)
///
/// - Identifying: если ещё не ждём и не в Pursuit — взводим identification timer
/// - UnderFire: Pursuit немедленно
/// - OutOfView: Patrolling, сбрасываем ожидание
/// - InViewIdle: сбрасываем ожидание (timer сработает вхолостую)
pub fn target_detection(
    mut enemies: Query<
        (
            Entity,
            &Transform,
            &PursuitTarget,
            &EnemyConfig,
            &mut EnemyState,
            &mut BehaviorFlags,
            &mut BehaviorTimers,
        ),
        (With<Enemy>, Without<Cooldown>),
    >,
    targets: Query<&Transform, Without<Enemy>>,
    projectiles: Query<(&Transform, &Projectile)>,
    players: Query<(), With<Player>>,
    mut state_events: EventWriter<EnemyStateChanged>,
) {
    for (entity, transform, target, config, mut state, mut flags, mut timers) in enemies.iter_mut() {
        // Цель уничтожена — пропускаем тик
        let Ok(target_transform) = targets.get(target.0) else {
            continue;
        };

        let position = transform.translation;
        let distance = planar_distance(position, target_transform.translation);

        // Пули ищем только когда это может повлиять на решение
        let hostile_fire_nearby = distance >= config.identification_radius
            && distance < config.view_radius
            && nearest_projectile_in_radius(
                position,
                config.projectile_detection_radius,
                projectiles.iter().map(|(t, p)| (t.translation, p)),
            )
            .is_some_and(|projectile| players.contains(projectile.owner));

        match classify_detection(distance, config, hostile_fire_nearby) {
            Detection::Identifying => {
                if *state != EnemyState::Pursuit && !flags.target_in_radius {
                    flags.target_in_radius = true;
                    timers.identification = Some(config.identification_delay);
                    crate::log(&format!(
                        "👁️ {:?} noticed target at {:.1}m, confirming in {:.2}s",
                        entity, distance, config.identification_delay
                    ));
                }
            }
            Detection::UnderFire => {
                if *state != EnemyState::Pursuit {
                    crate::log(&format!("🔊 {:?} under player fire at {:.1}m", entity, distance));
                }
                transition(entity, &mut state, EnemyState::Pursuit, &mut state_events);
            }
            Detection::OutOfView => {
                flags.target_in_radius = false;
                transition(entity, &mut state, EnemyState::Patrolling, &mut state_events);
            }
            Detection::InViewIdle => {
                flags.target_in_radius = false;
            }
        }
    }
}
