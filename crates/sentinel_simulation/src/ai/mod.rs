//! AI decision-making module
//!
//! Enemy behavior controller: Idle → Patrolling → Pursuit
//! (+ fire freeze / hand attack / cooldown sub-states).

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use events::*;

use crate::BehaviorSet;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. Intake: initialize_enemies → resolve_pursuit_targets → apply_cooldowns
/// 2. Timers: tick_behavior_timers → tick_cooldowns
/// 3. Perception: target_detection
/// 4. Decision: update_status
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ImposeCooldown>()
            .add_event::<EnemyStateChanged>();

        app.add_systems(
            FixedUpdate,
            (
                (
                    systems::initialize_enemies,
                    systems::resolve_pursuit_targets,
                    systems::apply_cooldowns,
                )
                    .chain()
                    .in_set(BehaviorSet::Intake),
                (systems::tick_behavior_timers, systems::tick_cooldowns)
                    .chain()
                    .in_set(BehaviorSet::Timers),
                systems::target_detection.in_set(BehaviorSet::Perception),
                systems::update_status.in_set(BehaviorSet::Decision),
            ),
        );
    }
}
