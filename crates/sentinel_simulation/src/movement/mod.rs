//! Movement domain — navigation host stand-in + animator params
//!
//! Настоящий navmesh живёт в движке. Здесь — прямолинейный steering
//! к NavAgent.destination (headless симуляция, тесты).

use bevy::prelude::*;

use crate::ai::BehaviorFlags;
use crate::combat::Armament;
use crate::components::{AnimatorParams, NavAgent};
use crate::BehaviorSet;

/// Планарный yaw: смотреть из `from` на `to` (высоту игнорируем)
fn face_towards(transform: &mut Transform, to: Vec3) {
    let direction = Vec3::new(to.x - transform.translation.x, 0.0, to.z - transform.translation.z);
    if direction.length_squared() > 1e-6 {
        transform.look_to(direction, Vec3::Y);
    }
}

/// System: двигаем агентов к destination по прямой (XZ)
///
/// - Не дальше speed * dt за тик, без overshoot
/// - Ближе stopping_distance — стоим (velocity = 0)
/// - Поворот: к look_at если задан, иначе по направлению движения
pub fn steer_nav_agents(
    mut agents: Query<(&mut Transform, &mut NavAgent)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut agent) in agents.iter_mut() {
        let mut velocity = Vec3::ZERO;

        if let Some(destination) = agent.destination {
            let offset = Vec3::new(
                destination.x - transform.translation.x,
                0.0,
                destination.z - transform.translation.z,
            );
            let distance = offset.length();

            if distance > agent.stopping_distance && delta > 0.0 {
                let step = (agent.speed * delta).min(distance);
                let movement = offset / distance * step;
                transform.translation += movement;
                velocity = movement / delta;
            }
        }

        agent.velocity = velocity;

        if let Some(look_at) = agent.look_at {
            face_towards(&mut transform, look_at);
        } else if velocity.length_squared() > 1e-6 {
            let ahead = transform.translation + velocity;
            face_towards(&mut transform, ahead);
        }
    }
}

/// System: AnimatorParams из состояния агента и controller'а
pub fn update_animator_params(
    mut actors: Query<(&NavAgent, &BehaviorFlags, &Armament, &mut AnimatorParams)>,
) {
    for (agent, flags, armament, mut params) in actors.iter_mut() {
        let speed = Vec2::new(agent.velocity.x, agent.velocity.z).length();
        let next = AnimatorParams {
            speed,
            is_moving: speed > 0.01,
            is_firing: !flags.is_moving,
            hand_attack: flags.in_hand_attack,
            armed: armament.weapon.is_some(),
        };

        // Не трогаем компонент без изменений (Changed<AnimatorParams> для host)
        if *params != next {
            *params = next;
        }
    }
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                steer_nav_agents.in_set(BehaviorSet::Actuation),
                update_animator_params.in_set(BehaviorSet::Presentation),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_towards_points_forward_at_target() {
        let mut transform = Transform::from_xyz(0.0, 0.0, 0.0);
        face_towards(&mut transform, Vec3::new(5.0, 3.0, 0.0));

        let forward = *transform.forward();
        assert!((forward - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn test_face_towards_ignores_degenerate_direction() {
        let mut transform = Transform::from_xyz(1.0, 0.0, 1.0);
        let before = transform.rotation;
        face_towards(&mut transform, Vec3::new(1.0, 10.0, 1.0));
        assert_eq!(transform.rotation, before);
    }
}
