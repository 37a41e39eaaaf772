//! Movement компоненты: NavAgent (контракт с navigation host)

use bevy::prelude::*;

/// Navigation agent актора
///
/// Архитектура:
/// - Behavior controller пишет destination/speed/look_at (high-level intent)
/// - Host (navmesh или `steer_nav_agents`) двигает Transform и пишет velocity
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    /// Куда идём (None = стоим)
    pub destination: Option<Vec3>,
    /// Скорость (м/с)
    pub speed: f32,
    /// Ближе этой дистанции к destination считаем что пришли
    pub stopping_distance: f32,
    /// Куда смотреть вместо направления движения (Pursuit → позиция цели)
    pub look_at: Option<Vec3>,
    /// Фактическая скорость за последний тик (пишет host)
    pub velocity: Vec3,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            speed: 2.5,
            stopping_distance: 0.1,
            look_at: None,
            velocity: Vec3::ZERO,
        }
    }
}

impl NavAgent {
    /// Остановиться на текущей позиции
    pub fn hold(&mut self, position: Vec3) {
        self.destination = Some(position);
    }
}
