//! Параметры animator (читает host animation blending)

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimatorParams {
    /// Планарная скорость (blend tree locomotion)
    pub speed: f32,
    pub is_moving: bool,
    /// true пока длится freeze после выстрела
    pub is_firing: bool,
    /// true пока играет анимация удара рукой
    pub hand_attack: bool,
    pub armed: bool,
}
