//! SENTINEL Simulation Core
//!
//! ECS-симуляция поведения врагов на Bevy 0.16 (strategic layer):
//! perception → state controller (Idle / Patrolling / Pursuit) → fire / hand attack.
//!
//! Tactical layer (navmesh, raycasts, collisions, анимация) — host.
//! Контракт с host: NavAgent, SightLine, AnimatorParams, WeaponContact.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;
pub mod movement;
pub mod physics;
pub mod spawn;

// Re-export базовых компонентов для удобства
pub use ai::{AIPlugin, BehaviorFlags, BehaviorTimers, Cooldown, EnemyState, EnemyStateChanged, ImposeCooldown, PatrolRoute};
pub use combat::{Armament, CombatPlugin, HeldBy, Projectile, Weapon};
pub use components::*;
pub use config::{ConfigError, EnemyConfig, EnemyProfile};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use movement::MovementPlugin;
pub use physics::{OpenFieldPlugin, PhysicsBridgePlugin};

/// Частота simulation tick
pub const TICK_HZ: f64 = 60.0;

/// Порядок фаз тика (FixedUpdate, строго последовательно)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorSet {
    /// Внешние события: init, цель, cooldown, pickup/drop
    Intake,
    /// Отложенные callbacks
    Timers,
    /// Host пишет SightLine
    Sense,
    /// target_detection
    Perception,
    /// update_status: destination, fire, hand attack
    Decision,
    /// Navigation host, пули
    Actuation,
    /// AnimatorParams
    Presentation,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Sight/contact host подключается отдельно: `OpenFieldPlugin` или `PhysicsBridgePlugin`.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ));

        // Seed мог выставить create_headless_app — не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.configure_sets(
            FixedUpdate,
            (
                BehaviorSet::Intake,
                BehaviorSet::Timers,
                BehaviorSet::Sense,
                BehaviorSet::Perception,
                BehaviorSet::Decision,
                BehaviorSet::Actuation,
                BehaviorSet::Presentation,
            )
                .chain(),
        )
        .add_plugins((AIPlugin, CombatPlugin, MovementPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает ровно на 1/60 сек за `app.update()` — один FixedUpdate на update.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / TICK_HZ,
        )));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
