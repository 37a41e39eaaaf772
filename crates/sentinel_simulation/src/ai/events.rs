//! AI Events — внешние команды и уведомления behavior controller

use bevy::prelude::*;
use crate::ai::EnemyState;

/// Команда: подавить поведение врага на `duration` секунд
///
/// Отправляет внешний код (попадание, оглушение). Повторная команда
/// продлевает cooldown до максимума из оставшегося и нового.
#[derive(Event, Debug, Clone)]
pub struct ImposeCooldown {
    pub enemy: Entity,
    pub duration: f32,
}

/// Уведомление: состояние врага изменилось
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemyStateChanged {
    pub enemy: Entity,
    pub from: EnemyState,
    pub to: EnemyState,
}
