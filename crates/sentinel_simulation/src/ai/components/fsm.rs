//! FSM AI components (state, patrol route, flags, delayed timers).

use bevy::prelude::*;

/// Состояние behavior controller
///
/// Переходы делает только perception (`target_detection` + identification timer).
/// Терминального состояния нет.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum EnemyState {
    /// Стоим на месте (начальное состояние если маршрута нет)
    #[default]
    Idle,
    /// Обходим patrol points по кругу
    Patrolling,
    /// Преследуем цель, стреляем/бьём
    Pursuit,
}

/// Маршрут патруля
///
/// Порядок точек важен. Индекс растёт бесконечно, точка берётся по модулю длины.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolRoute {
    pub points: Vec<Vec3>,
    pub index: usize,
}

impl PatrolRoute {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points, index: 0 }
    }

    /// Текущая patrol point (None только если маршрут пустой)
    pub fn current_point(&self) -> Option<Vec3> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points[self.index % self.points.len()])
    }

    pub fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
    }
}

/// Флаги controller'а (проверяются при срабатывании отложенных таймеров)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BehaviorFlags {
    /// Игрок в identification radius, ждём подтверждения
    pub target_in_radius: bool,
    /// false во время freeze после выстрела — state update пропускается
    pub is_moving: bool,
    /// false пока стоим на patrol point
    pub is_moving_on_patrol: bool,
    /// Анимация удара рукой в процессе
    pub in_hand_attack: bool,
    /// Маршрут/начальное состояние уже выставлены
    pub initialized: bool,
}

impl Default for BehaviorFlags {
    fn default() -> Self {
        Self {
            target_in_radius: false,
            is_moving: true,
            is_moving_on_patrol: true,
            in_hand_attack: false,
            initialized: false,
        }
    }
}

/// Отложенные callbacks (секунды до срабатывания, None = не взведён)
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BehaviorTimers {
    /// Подтверждение identification → Pursuit
    pub identification: Option<f32>,
    /// Стоянка на patrol point → следующая точка
    pub patrol_dwell: Option<f32>,
    /// Freeze после выстрела → снова двигаемся
    pub fire_freeze: Option<f32>,
    /// Анимация удара рукой → снимаем флаг
    pub hand_attack: Option<f32>,
}

/// Тикает таймер, возвращает true ровно один раз — в тик срабатывания
pub fn tick_timer(timer: &mut Option<f32>, delta: f32) -> bool {
    let Some(remaining) = timer.as_mut() else {
        return false;
    };

    *remaining -= delta;
    if *remaining <= 0.0 {
        *timer = None;
        return true;
    }
    false
}

/// Временное подавление поведения (stun после попадания и т.п.)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Cooldown {
    pub remaining: f32,
}
