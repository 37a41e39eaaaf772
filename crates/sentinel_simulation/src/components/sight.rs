//! Sight компоненты — результаты raycast от physics host

use bevy::prelude::*;

/// Результаты raycast'ов врага за текущий тик
///
/// Пишется в `BehaviorSet::Sense` (OpenFieldPlugin или PhysicsBridgePlugin),
/// читается perception/decision системами.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SightLine {
    /// Первый entity на луче из дула оружия вперёд (None = не во что)
    pub muzzle_hit: Option<Entity>,
    /// Луч глаза → цель не перекрыт препятствием
    pub target_visible: bool,
}

/// Сферическое препятствие для open-field sight (стены, колонны)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct SightBlocker {
    pub radius: f32,
}
