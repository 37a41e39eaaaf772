//! Projectile pool — пули в мире и запрос "ближайшая пуля рядом"

use bevy::prelude::*;

/// Летящая пуля
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Projectile {
    /// Кто выстрелил (для детекции враждебного огня)
    pub owner: Entity,
    pub velocity: Vec3,
    /// Секунды до despawn
    pub remaining_life: f32,
}

/// Ближайший projectile в радиусе от `position` (3D дистанция)
///
/// Возвращает только ОДИН — ближайший. Вызывающий сам решает по owner.
pub fn nearest_projectile_in_radius<'a>(
    position: Vec3,
    radius: f32,
    projectiles: impl IntoIterator<Item = (Vec3, &'a Projectile)>,
) -> Option<&'a Projectile> {
    projectiles
        .into_iter()
        .map(|(pos, projectile)| (pos.distance(position), projectile))
        .filter(|(distance, _)| *distance <= radius)
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, projectile)| projectile)
}

pub fn spawn_projectile(
    commands: &mut Commands,
    owner: Entity,
    origin: Vec3,
    direction: Vec3,
    speed: f32,
    lifetime: f32,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(origin),
            Projectile {
                owner,
                velocity: direction.normalize_or_zero() * speed,
                remaining_life: lifetime,
            },
        ))
        .id()
}

/// System: движение пуль + despawn по истечении времени жизни
pub fn advance_projectiles(
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut Transform, &mut Projectile)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut transform, mut projectile) in projectiles.iter_mut() {
        transform.translation += projectile.velocity * delta;
        projectile.remaining_life -= delta;

        if projectile.remaining_life <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
