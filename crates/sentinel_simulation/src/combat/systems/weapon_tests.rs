//! Tests for weapon state.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::combat::{muzzle_position, nearest_projectile_in_radius, Projectile, Weapon};

    #[test]
    fn test_check_and_fire_spends_ammo_and_respects_interval() {
        let mut weapon = Weapon::rifle();

        assert!(weapon.check_and_fire());
        assert_eq!(weapon.ammo_in_store, 9);

        // Интервал ещё не прошёл
        assert!(!weapon.check_and_fire());
        assert_eq!(weapon.ammo_in_store, 9);

        weapon.tick(weapon.fire_interval);
        assert!(weapon.check_and_fire());
        assert_eq!(weapon.ammo_in_store, 8);
    }

    #[test]
    fn test_empty_magazine_reloads_from_reserve() {
        let mut weapon = Weapon {
            ammo_in_store: 0,
            all_ammo: 4,
            ..Weapon::pistol()
        };

        assert!(weapon.check_and_fire());
        assert_eq!(weapon.ammo_in_store, 3);
        assert_eq!(weapon.all_ammo, 0);
        assert!(!weapon.is_depleted());
    }

    #[test]
    fn test_depleted_weapon_never_fires() {
        let mut weapon = Weapon {
            ammo_in_store: 0,
            all_ammo: 0,
            ..Weapon::rifle()
        };

        assert!(weapon.is_depleted());
        assert!(!weapon.check_and_fire());
    }

    #[test]
    fn test_reload_caps_at_magazine_size() {
        let mut weapon = Weapon {
            ammo_in_store: 7,
            all_ammo: 30,
            ..Weapon::rifle()
        };

        assert_eq!(weapon.reload(), 3);
        assert_eq!(weapon.ammo_in_store, 10);
        assert_eq!(weapon.all_ammo, 27);
    }

    #[test]
    fn test_muzzle_follows_holder_rotation() {
        // Повернули holder на 180° вокруг Y — offset по -Z уходит в +Z
        let holder = Transform::from_xyz(1.0, 0.0, 1.0)
            .with_rotation(Quat::from_rotation_y(std::f32::consts::PI));
        let local = Transform::from_xyz(0.0, 1.0, -0.5);

        let muzzle = muzzle_position(&holder, &local);
        assert!((muzzle - Vec3::new(1.0, 1.0, 1.5)).length() < 1e-4);
    }

    #[test]
    fn test_nearest_projectile_ignores_out_of_radius() {
        let owner_a = Entity::from_raw(1);
        let owner_b = Entity::from_raw(2);
        let near = Projectile { owner: owner_a, velocity: Vec3::ZERO, remaining_life: 1.0 };
        let far = Projectile { owner: owner_b, velocity: Vec3::ZERO, remaining_life: 1.0 };

        let pool = [(Vec3::new(2.0, 0.0, 0.0), &far), (Vec3::new(1.0, 0.0, 0.0), &near)];

        let found = nearest_projectile_in_radius(Vec3::ZERO, 3.0, pool);
        assert_eq!(found.map(|p| p.owner), Some(owner_a));

        let found = nearest_projectile_in_radius(Vec3::ZERO, 0.5, pool);
        assert!(found.is_none());
    }
}
