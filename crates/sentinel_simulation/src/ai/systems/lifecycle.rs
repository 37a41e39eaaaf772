//! Lifecycle systems: инициализация врага, поиск цели, cooldown.

use bevy::prelude::*;

use crate::ai::{BehaviorFlags, Cooldown, EnemyState, ImposeCooldown, PatrolRoute};
use crate::components::{Enemy, NavAgent, Player, PursuitTarget};
use crate::config::EnemyConfig;

/// System: первичная настройка врага (один раз)
///
/// - Маршрут пустой → `[spawn position]`, остаёмся в Idle
/// - Маршрут есть → сразу Patrolling
pub fn initialize_enemies(
    mut enemies: Query<
        (
            Entity,
            &Transform,
            &EnemyConfig,
            &mut PatrolRoute,
            &mut EnemyState,
            &mut BehaviorFlags,
            &mut NavAgent,
        ),
        With<Enemy>,
    >,
) {
    for (entity, transform, config, mut route, mut state, mut flags, mut agent) in enemies.iter_mut() {
        if flags.initialized {
            continue;
        }
        flags.initialized = true;
        agent.speed = config.patrol_speed;

        if route.points.is_empty() {
            route.points.push(transform.translation);
            crate::log(&format!(
                "AI: {:?} has no patrol points, holding at {:?}",
                entity, transform.translation
            ));
        } else {
            *state = EnemyState::Patrolling;
            crate::log(&format!(
                "AI: {:?} starts patrolling ({} points)",
                entity,
                route.points.len()
            ));
        }
    }
}

/// System: resolve PursuitTarget = единственный Player
///
/// Если игрока ещё нет (или их несколько) — повторим на следующем тике.
pub fn resolve_pursuit_targets(
    mut commands: Commands,
    enemies: Query<Entity, (With<Enemy>, Without<PursuitTarget>)>,
    players: Query<Entity, With<Player>>,
) {
    if enemies.is_empty() {
        return;
    }

    let Ok(player) = players.single() else {
        return;
    };

    for enemy in enemies.iter() {
        commands.entity(enemy).insert(PursuitTarget(player));
        crate::log(&format!("AI: {:?} target resolved → {:?}", enemy, player));
    }
}

/// System: ImposeCooldown → Cooldown компонент + остановка агента
///
/// Несколько команд на одного врага → берём максимум.
pub fn apply_cooldowns(
    mut commands: Commands,
    mut requests: EventReader<ImposeCooldown>,
    mut enemies: Query<(&Transform, &mut NavAgent, Option<&mut Cooldown>), With<Enemy>>,
) {
    // Порядок — как пришли события (детерминированный лог)
    let mut merged: Vec<(Entity, f32)> = Vec::new();
    for request in requests.read() {
        let duration = request.duration.max(0.0);
        match merged.iter_mut().find(|(enemy, _)| *enemy == request.enemy) {
            Some((_, existing)) => *existing = existing.max(duration),
            None => merged.push((request.enemy, duration)),
        }
    }

    for (enemy, duration) in merged {
        let Ok((transform, mut agent, cooldown)) = enemies.get_mut(enemy) else {
            continue;
        };

        agent.hold(transform.translation);

        match cooldown {
            Some(mut cooldown) => {
                cooldown.remaining = cooldown.remaining.max(duration);
            }
            None => {
                commands.entity(enemy).insert(Cooldown { remaining: duration });
            }
        }

        crate::log_info(&format!("💫 {:?} cooldown for {:.2}s", enemy, duration));
    }
}

/// System: тикаем Cooldown, снимаем по истечении
pub fn tick_cooldowns(
    mut commands: Commands,
    mut cooling: Query<(Entity, &mut Cooldown)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut cooldown) in cooling.iter_mut() {
        cooldown.remaining -= delta;
        if cooldown.remaining <= 0.0 {
            commands.entity(entity).remove::<Cooldown>();
            crate::log(&format!("AI: {:?} cooldown finished", entity));
        }
    }
}
