//! Rapier host: sight rays через RapierContext + weapon contacts из CollisionEvent

use bevy::prelude::*;
use bevy_rapier3d::prelude::{
    ActiveCollisionTypes, ActiveEvents, Collider, CollisionEvent, QueryFilter, ReadRapierContext,
    RigidBody, Sensor,
};

use crate::combat::{muzzle_position, Armament, HeldBy, Weapon, WeaponContact};
use crate::components::{Enemy, PursuitTarget, SightLine};
use crate::physics::{EYE_HEIGHT, MUZZLE_RAY_LENGTH, TARGET_CENTER_HEIGHT};

/// System: SightLine через Rapier raycast
///
/// Свой collider и collider оружия исключаем из запроса.
pub fn cast_sight_rays(
    rapier: ReadRapierContext,
    mut enemies: Query<
        (Entity, &Transform, &Armament, Option<&PursuitTarget>, &mut SightLine),
        With<Enemy>,
    >,
    targets: Query<&Transform, Without<Enemy>>,
    weapons: Query<&Transform, With<Weapon>>,
) {
    let Ok(context) = rapier.single() else {
        return;
    };

    for (entity, transform, armament, target, mut sight) in enemies.iter_mut() {
        // Sensor'ы (лежащее оружие) обзор не перекрывают
        let mut filter = QueryFilter::default()
            .exclude_sensors()
            .exclude_rigid_body(entity)
            .exclude_collider(entity);
        if let Some(weapon) = armament.weapon {
            filter = filter.exclude_collider(weapon);
        }

        let eye = transform.translation + Vec3::Y * EYE_HEIGHT;
        let muzzle = armament
            .weapon
            .and_then(|weapon| weapons.get(weapon).ok())
            .map(|weapon_local| muzzle_position(transform, weapon_local))
            .unwrap_or(eye);

        let muzzle_hit = context
            .cast_ray(muzzle, *transform.forward(), MUZZLE_RAY_LENGTH, true, filter)
            .map(|(hit, _)| hit);

        let target_visible = target
            .and_then(|PursuitTarget(target)| targets.get(*target).ok().map(|t| (*target, t)))
            .is_some_and(|(target, target_transform)| {
                let center = target_transform.translation + Vec3::Y * TARGET_CENTER_HEIGHT;
                let to_target = center - eye;
                let length = to_target.length();
                if length <= f32::EPSILON {
                    return true;
                }
                match context.cast_ray(eye, to_target / length, length, true, filter) {
                    None => true,
                    Some((hit, _)) => hit == target,
                }
            });

        let next = SightLine {
            muzzle_hit,
            target_visible,
        };
        if *sight != next {
            *sight = next;
        }
    }
}

/// System: CollisionEvent::Started (враг × лежащее оружие) → WeaponContact
pub fn forward_weapon_contacts(
    mut collisions: EventReader<CollisionEvent>,
    enemies: Query<(), With<Enemy>>,
    loose_weapons: Query<(), (With<Weapon>, Without<HeldBy>)>,
    mut contacts: EventWriter<WeaponContact>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        for (actor, weapon) in [(*a, *b), (*b, *a)] {
            if enemies.contains(actor) && loose_weapons.contains(weapon) {
                contacts.write(WeaponContact { actor, weapon });
            }
        }
    }
}

/// Радиус капсулы актора
pub const ACTOR_RADIUS: f32 = 0.5;
/// Половина высоты цилиндрической части капсулы
pub const ACTOR_HALF_HEIGHT: f32 = 0.5;

/// Collider для актора (врага или игрока): kinematic capsule
///
/// Transform актора стоит на земле, центр капсулы на TARGET_CENTER_HEIGHT
/// (как у сферы цели в open-field): капсула занимает y ∈ [0, 2].
pub fn actor_collider() -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::compound(vec![(
            Vec3::Y * TARGET_CENTER_HEIGHT,
            Quat::IDENTITY,
            Collider::capsule_y(ACTOR_HALF_HEIGHT, ACTOR_RADIUS),
        )]),
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
    )
}

/// Collider для оружия: sensor (pickup по касанию)
pub fn weapon_collider() -> impl Bundle {
    (
        Collider::cuboid(0.1, 0.1, 0.4),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
    )
}

/// Collider для препятствия, перекрывающего обзор
pub fn blocker_collider(radius: f32) -> impl Bundle {
    (RigidBody::Fixed, Collider::ball(radius))
}
