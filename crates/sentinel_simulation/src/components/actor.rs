//! Базовые компоненты акторов: Enemy, Player, PursuitTarget

use bevy::prelude::*;

/// Враг под управлением behavior controller
///
/// Автоматически добавляет всё состояние контроллера через Required Components.
/// `PatrolRoute` пустой → при первом тике станет `[spawn position]`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    Transform,
    crate::ai::EnemyState,
    crate::ai::PatrolRoute,
    crate::ai::BehaviorFlags,
    crate::ai::BehaviorTimers,
    crate::config::EnemyConfig,
    crate::components::SightLine,
    crate::components::NavAgent,
    crate::components::AnimatorParams,
    crate::combat::Armament
)]
pub struct Enemy;

/// Marker component для player-controlled entity
///
/// Враги ищут единственный entity с этим компонентом и преследуют его.
/// Projectile с owner == Player считается враждебным.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Player;

/// Non-owning ссылка на цель (resolved один раз при старте)
///
/// Entity может быть despawned — системы проверяют через Query::get каждый тик.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PursuitTarget(pub Entity);

/// Планарная (XZ) дистанция — высоту игнорируем
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}
