//! Open-field host: sight rays и weapon contacts без physics engine
//!
//! Геометрия упрощена: цель и препятствия — сферы, земля плоская.
//! Используется headless binary и интеграционными тестами.

use bevy::prelude::*;

use crate::combat::{muzzle_position, Armament, HeldBy, Weapon, WeaponContact};
use crate::components::{planar_distance, Enemy, PursuitTarget, SightBlocker, SightLine};
use crate::physics::{EYE_HEIGHT, MUZZLE_RAY_LENGTH, TARGET_CENTER_HEIGHT, TARGET_RADIUS};

/// Дистанция (XZ) на которой враг "касается" лежащего оружия
pub const PICKUP_RADIUS: f32 = 1.0;

/// Пересечение луча со сферой
///
/// `direction` должен быть нормализован. Возвращает дистанцию до первой точки
/// пересечения впереди origin (выход из сферы если origin внутри).
pub fn ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }

    let half_chord = (radius_sq - closest_sq).sqrt();
    let entry = along - half_chord;
    let hit = if entry >= 0.0 { entry } else { along + half_chord };
    (hit >= 0.0).then_some(hit)
}

/// System: SightLine из сферической геометрии
///
/// - muzzle_hit: ближайшая сфера (цель или SightBlocker) на луче дула вперёд
/// - target_visible: отрезок глаз → центр цели не пересекает SightBlocker
pub fn open_field_sight(
    mut enemies: Query<(&Transform, &Armament, Option<&PursuitTarget>, &mut SightLine), With<Enemy>>,
    targets: Query<&Transform, Without<Enemy>>,
    weapons: Query<&Transform, With<Weapon>>,
    blockers: Query<(Entity, &Transform, &SightBlocker)>,
) {
    for (transform, armament, target, mut sight) in enemies.iter_mut() {
        let target_sphere = target.and_then(|PursuitTarget(target)| {
            targets
                .get(*target)
                .ok()
                .map(|t| (*target, t.translation + Vec3::Y * TARGET_CENTER_HEIGHT))
        });

        let eye = transform.translation + Vec3::Y * EYE_HEIGHT;
        let muzzle = armament
            .weapon
            .and_then(|weapon| weapons.get(weapon).ok())
            .map(|weapon_local| muzzle_position(transform, weapon_local))
            .unwrap_or(eye);
        let forward = *transform.forward();

        // Луч из дула: ближайшее попадание среди цели и препятствий
        let mut muzzle_hit: Option<(Entity, f32)> = None;
        let mut consider = |entity: Entity, distance: Option<f32>| {
            if let Some(distance) = distance.filter(|d| *d <= MUZZLE_RAY_LENGTH) {
                if muzzle_hit.is_none_or(|(_, best)| distance < best) {
                    muzzle_hit = Some((entity, distance));
                }
            }
        };
        if let Some((target, center)) = target_sphere {
            consider(target, ray_sphere(muzzle, forward, center, TARGET_RADIUS));
        }
        for (entity, blocker_transform, blocker) in blockers.iter() {
            consider(
                entity,
                ray_sphere(muzzle, forward, blocker_transform.translation, blocker.radius),
            );
        }

        // Глаз → цель
        let target_visible = target_sphere.is_some_and(|(_, center)| {
            let to_target = center - eye;
            let length = to_target.length();
            if length <= f32::EPSILON {
                return true;
            }
            let direction = to_target / length;
            !blockers.iter().any(|(_, blocker_transform, blocker)| {
                ray_sphere(eye, direction, blocker_transform.translation, blocker.radius)
                    .is_some_and(|d| d < length)
            })
        });

        let next = SightLine {
            muzzle_hit: muzzle_hit.map(|(entity, _)| entity),
            target_visible,
        };
        if *sight != next {
            *sight = next;
        }
    }
}

/// System: WeaponContact для безоружных врагов рядом с лежащим оружием
pub fn open_field_contacts(
    enemies: Query<(Entity, &Transform, &Armament), With<Enemy>>,
    weapons: Query<(Entity, &Transform, &Weapon), Without<HeldBy>>,
    mut contacts: EventWriter<WeaponContact>,
) {
    for (actor, transform, armament) in enemies.iter() {
        if armament.weapon.is_some() {
            continue;
        }

        for (weapon_entity, weapon_transform, weapon) in weapons.iter() {
            if weapon.is_depleted() {
                continue;
            }
            if planar_distance(transform.translation, weapon_transform.translation) < PICKUP_RADIUS {
                contacts.write(WeaponContact {
                    actor,
                    weapon: weapon_entity,
                });
            }
        }
    }
}
