//! Physics host module
//!
//! Два варианта tactical layer для SightLine + WeaponContact:
//! - `OpenFieldPlugin` — сферическая геометрия без physics engine (headless, тесты)
//! - `PhysicsBridgePlugin` — Rapier raycasts + collision events
//!
//! Подключать ровно один.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{NoUserData, PhysicsSet, RapierPhysicsPlugin, TimestepMode};

pub mod open_field;
pub mod rapier_bridge;

pub use open_field::{open_field_contacts, open_field_sight, ray_sphere, PICKUP_RADIUS};
pub use rapier_bridge::{
    actor_collider, blocker_collider, weapon_collider, ACTOR_HALF_HEIGHT, ACTOR_RADIUS,
};

use crate::{BehaviorSet, TICK_HZ};

/// Высота глаз над Transform.translation актора
pub const EYE_HEIGHT: f32 = 1.6;
/// Центр "тела" цели над её Transform.translation
pub const TARGET_CENTER_HEIGHT: f32 = 1.0;
/// Радиус сферы цели для open-field raycast
pub const TARGET_RADIUS: f32 = 0.6;
/// Максимальная длина луча из дула
pub const MUZZLE_RAY_LENGTH: f32 = 100.0;

pub struct OpenFieldPlugin;

impl Plugin for OpenFieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                open_field_contacts
                    .in_set(BehaviorSet::Intake)
                    .before(crate::combat::systems::process_weapon_contacts),
                open_field_sight.in_set(BehaviorSet::Sense),
            ),
        );
    }
}

/// Rapier physics + bridge systems
///
/// Rapier шагает в FixedUpdate вместе с симуляцией: SyncBackend строго после
/// Actuation (steering уже сдвинул Transform), Writeback до Presentation.
/// Иначе Writeback затирает kinematic Transform старой позицией body.
pub struct PhysicsBridgePlugin;

impl Plugin for PhysicsBridgePlugin {
    fn build(&self, app: &mut App) {
        // MinimalPlugins не содержит TransformPlugin, а Rapier читает GlobalTransform
        if !app.is_plugin_added::<bevy::transform::TransformPlugin>() {
            app.add_plugins(bevy::transform::TransformPlugin);
        }
        if !app.is_plugin_added::<RapierPhysicsPlugin<NoUserData>>() {
            // До плагина: он делает init_resource и проверяет режим
            app.insert_resource(TimestepMode::Fixed {
                dt: (1.0 / TICK_HZ) as f32,
                substeps: 1,
            });
            app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule());
        }

        app.configure_sets(
            FixedUpdate,
            (
                PhysicsSet::SyncBackend.after(BehaviorSet::Actuation),
                PhysicsSet::Writeback.before(BehaviorSet::Presentation),
            ),
        );

        app.add_systems(
            FixedUpdate,
            (
                rapier_bridge::forward_weapon_contacts
                    .in_set(BehaviorSet::Intake)
                    .before(crate::combat::systems::process_weapon_contacts),
                rapier_bridge::cast_sight_rays.in_set(BehaviorSet::Sense),
            ),
        );
    }
}
