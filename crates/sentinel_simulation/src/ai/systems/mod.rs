//! AI systems (behavior controller logic)

pub mod decision;
pub mod lifecycle;
pub mod perception;
pub mod timers;


// Re-export all systems
pub use decision::*;
pub use lifecycle::*;
pub use perception::*;
pub use timers::*;

use bevy::prelude::*;
use crate::ai::{EnemyState, EnemyStateChanged};

/// Смена состояния + событие + лог (ничего не делает если состояние то же)
pub fn transition(
    entity: Entity,
    state: &mut Mut<EnemyState>,
    to: EnemyState,
    events: &mut EventWriter<EnemyStateChanged>,
) {
    let from = **state;
    if from == to {
        return;
    }

    **state = to;
    events.write(EnemyStateChanged { enemy: entity, from, to });
    crate::log_info(&format!("AI: {:?} {:?} → {:?}", entity, from, to));
}
