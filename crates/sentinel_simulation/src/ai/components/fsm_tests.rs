//! Tests for FSM AI components.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use super::super::fsm::{tick_timer, BehaviorFlags, EnemyState, PatrolRoute};

    #[test]
    fn test_enemy_state_default() {
        assert_eq!(EnemyState::default(), EnemyState::Idle);
    }

    #[test]
    fn test_behavior_flags_default() {
        let flags = BehaviorFlags::default();
        assert!(flags.is_moving);
        assert!(flags.is_moving_on_patrol);
        assert!(!flags.target_in_radius);
        assert!(!flags.in_hand_attack);
    }

    #[test]
    fn test_patrol_route_wraps_around() {
        let mut route = PatrolRoute::new(vec![Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(route.current_point(), Some(Vec3::X));

        route.advance();
        route.advance();
        assert_eq!(route.current_point(), Some(Vec3::Z));

        route.advance();
        assert_eq!(route.current_point(), Some(Vec3::X));
        assert_eq!(route.index, 3); // индекс растёт, точка по модулю
    }

    #[test]
    fn test_empty_patrol_route() {
        let route = PatrolRoute::default();
        assert_eq!(route.current_point(), None);
    }

    #[test]
    fn test_tick_timer_fires_once() {
        let mut timer = Some(1.0);

        assert!(!tick_timer(&mut timer, 0.5));
        assert_eq!(timer, Some(0.5));

        assert!(tick_timer(&mut timer, 0.5));
        assert_eq!(timer, None);

        // Не взведён — не срабатывает
        assert!(!tick_timer(&mut timer, 0.5));
    }
}
