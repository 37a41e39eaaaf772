//! Weapon — оружие как отдельный entity с ammo counters
//!
//! Architecture:
//! - `Weapon` живёт на своём entity (может лежать в мире или быть в руках)
//! - `HeldBy(holder)` на оружии + `Armament { weapon }` на враге = exclusive ownership
//! - В руках оружие — child врага, Transform локальный (`EnemyConfig::weapon_offset`)

use bevy::prelude::*;

/// Оружие (ranged)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Weapon {
    /// Ёмкость магазина
    pub magazine_size: u32,
    /// Патроны в магазине
    pub ammo_in_store: u32,
    /// Патроны в запасе (вне магазина)
    pub all_ammo: u32,
    /// Дальше этой дистанции до цели не стреляем (метры)
    pub fire_radius: f32,
    /// Минимальный интервал между выстрелами (секунды)
    pub fire_interval: f32,
    /// Текущий интервал (уменьшается до 0)
    pub fire_timer: f32,
    /// Скорость projectile (м/с)
    pub projectile_speed: f32,
    /// Время жизни projectile (секунды)
    pub projectile_lifetime: f32,
}

impl Default for Weapon {
    fn default() -> Self {
        Self::rifle()
    }
}

impl Weapon {
    pub fn rifle() -> Self {
        Self {
            magazine_size: 10,
            ammo_in_store: 10,
            all_ammo: 30,
            fire_radius: 15.0,
            fire_interval: 0.25,
            fire_timer: 0.0,
            projectile_speed: 40.0,
            projectile_lifetime: 2.0,
        }
    }

    pub fn pistol() -> Self {
        Self {
            magazine_size: 6,
            ammo_in_store: 6,
            all_ammo: 12,
            fire_radius: 10.0,
            fire_interval: 0.5,
            fire_timer: 0.0,
            projectile_speed: 30.0,
            projectile_lifetime: 1.5,
        }
    }

    pub fn radius_to_fire(&self) -> f32 {
        self.fire_radius
    }

    /// Патронов нет ни в магазине, ни в запасе
    pub fn is_depleted(&self) -> bool {
        self.ammo_in_store == 0 && self.all_ammo == 0
    }

    /// Перезарядка из запаса, возвращает сколько патронов переложили
    pub fn reload(&mut self) -> u32 {
        let moved = self
            .magazine_size
            .saturating_sub(self.ammo_in_store)
            .min(self.all_ammo);
        self.ammo_in_store += moved;
        self.all_ammo -= moved;
        moved
    }

    /// Выстрел если интервал прошёл и есть патроны
    ///
    /// Пустой магазин перезаряжается из запаса в том же вызове.
    /// Возвращает true если выстрел произошёл.
    pub fn check_and_fire(&mut self) -> bool {
        if self.ammo_in_store == 0 {
            self.reload();
        }

        if self.fire_timer > 0.0 || self.ammo_in_store == 0 {
            return false;
        }

        self.ammo_in_store -= 1;
        self.fire_timer = self.fire_interval;
        true
    }

    pub fn tick(&mut self, delta: f32) {
        if self.fire_timer > 0.0 {
            self.fire_timer = (self.fire_timer - delta).max(0.0);
        }
    }
}

/// На оружии: кто держит
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct HeldBy(pub Entity);

/// На враге: какое оружие в руках (None = безоружен, бьёт рукой)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Armament {
    pub weapon: Option<Entity>,
}

/// Мировая позиция дула: holder transform * локальный offset оружия
pub fn muzzle_position(holder: &Transform, weapon_local: &Transform) -> Vec3 {
    holder.transform_point(weapon_local.translation)
}

/// Мировой transform оружия в руках (для drop)
pub fn weapon_world_transform(holder: &Transform, weapon_local: &Transform) -> Transform {
    Transform {
        translation: muzzle_position(holder, weapon_local),
        rotation: holder.rotation * weapon_local.rotation,
        scale: weapon_local.scale,
    }
}
