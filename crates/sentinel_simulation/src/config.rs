//! EnemyConfig — параметры врага, которые выставляет level designer
//!
//! Загружается из RON (`EnemyConfig::from_ron`) или создаётся в коде.
//! Patrol points живут отдельно в `PatrolRoute`, но RON файл может их содержать
//! (см. `EnemyProfile`).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Верхняя граница радиусов (identification / view)
pub const MAX_RADIUS: f32 = 100.0;
/// Верхняя граница разброса стоянки на patrol point (секунды)
pub const MAX_DWELL_JITTER: f32 = 60.0;

/// Ошибки загрузки/валидации конфига
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse enemy config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("{field} must be within [0, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        max: f32,
    },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}

/// Параметры поведения врага
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct EnemyConfig {
    /// Радиус, внутри которого игрок замечается после identification_delay
    pub identification_radius: f32,
    /// Радиус, внутри которого срабатывает детекция по пулям игрока
    pub view_radius: f32,
    /// Задержка подтверждения перед переходом в Pursuit (секунды)
    pub identification_delay: f32,
    /// Сколько стоим на месте после выстрела (секунды)
    pub delay_after_fire: f32,
    /// Радиус "дошёл до patrol point" (планарный)
    pub stay_radius: f32,
    /// Базовое время стоянки на patrol point (секунды)
    pub dwell_delay: f32,
    /// Разброс стоянки: dwell_delay ± dwell_jitter
    pub dwell_jitter: f32,
    pub pursuit_speed: f32,
    pub patrol_speed: f32,
    /// Точка крепления оружия относительно врага (local space)
    pub weapon_offset: Vec3,
    /// Дистанция удара рукой
    pub hand_attack_distance: f32,
    /// Длительность анимации удара рукой (секунды)
    pub hand_attack_duration: f32,
    /// Радиус поиска ближайшего projectile вокруг врага
    pub projectile_detection_radius: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            identification_radius: 8.0,
            view_radius: 20.0,
            identification_delay: 0.5,
            delay_after_fire: 0.6,
            stay_radius: 0.5,
            dwell_delay: 2.0,
            dwell_jitter: 0.5,
            pursuit_speed: 5.0,
            patrol_speed: 2.5,
            weapon_offset: Vec3::new(0.4, 1.2, -0.5),
            hand_attack_distance: 1.5,
            hand_attack_duration: 0.8,
            projectile_detection_radius: 4.0,
        }
    }
}

impl EnemyConfig {
    /// Парсит и валидирует конфиг из RON строки
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: EnemyConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value, max) in [
            ("identification_radius", self.identification_radius, MAX_RADIUS),
            ("view_radius", self.view_radius, MAX_RADIUS),
            ("dwell_jitter", self.dwell_jitter, MAX_DWELL_JITTER),
        ] {
            if !(0.0..=max).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value, max });
            }
        }

        for (field, value) in [
            ("weapon_offset.x", self.weapon_offset.x),
            ("weapon_offset.y", self.weapon_offset.y),
            ("weapon_offset.z", self.weapon_offset.z),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("identification_delay", self.identification_delay),
            ("delay_after_fire", self.delay_after_fire),
            ("stay_radius", self.stay_radius),
            ("dwell_delay", self.dwell_delay),
            ("dwell_jitter", self.dwell_jitter),
            ("pursuit_speed", self.pursuit_speed),
            ("patrol_speed", self.patrol_speed),
            ("hand_attack_distance", self.hand_attack_distance),
            ("hand_attack_duration", self.hand_attack_duration),
            ("projectile_detection_radius", self.projectile_detection_radius),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        Ok(())
    }
}

/// Полный профиль врага в RON: параметры + маршрут патруля
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyProfile {
    pub config: EnemyConfig,
    pub patrol_points: Vec<Vec3>,
}

impl EnemyProfile {
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let profile: EnemyProfile = ron::from_str(source)?;
        profile.config.validate()?;
        Ok(profile)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
