//! Headless симуляция SENTINEL
//!
//! Патрулирующий враг + игрок, который подходит, стреляет и уходит.
//! `--rapier` — sight/contact через Rapier вместо open-field геометрии.

use bevy::ecs::world::CommandQueue;
use bevy::prelude::*;
use sentinel_simulation::physics::{actor_collider, weapon_collider};
use sentinel_simulation::spawn::{spawn_enemy, spawn_loose_weapon, spawn_player};
use sentinel_simulation::{
    create_headless_app, log_info, EnemyConfig, EnemyState, EnemyStateChanged, OpenFieldPlugin,
    PhysicsBridgePlugin, SimulationPlugin, Weapon,
};

const TICKS: usize = 1000;

/// Маршрут игрока: подходит к врагу, потом уходит далеко
fn player_position(tick: usize) -> Vec3 {
    match tick {
        0..=299 => Vec3::new(40.0 - tick as f32 * 0.1, 0.0, 0.0),
        300..=599 => Vec3::new(10.0, 0.0, 0.0),
        _ => Vec3::new(10.0 + (tick - 600) as f32 * 0.2, 0.0, 0.0),
    }
}

fn log_state_changes(mut events: EventReader<EnemyStateChanged>) {
    for event in events.read() {
        println!("  {:?}: {:?} → {:?}", event.enemy, event.from, event.to);
    }
}

fn main() {
    let use_rapier = std::env::args().any(|arg| arg == "--rapier");
    let seed = 42;
    println!(
        "Starting SENTINEL headless simulation (seed: {}, host: {})",
        seed,
        if use_rapier { "rapier" } else { "open field" }
    );

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .add_systems(PostUpdate, log_state_changes);
    if use_rapier {
        app.add_plugins(PhysicsBridgePlugin);
    } else {
        app.add_plugins(OpenFieldPlugin);
    }

    let mut queue = CommandQueue::default();
    let mut commands = Commands::new(&mut queue, app.world());
    let player = spawn_player(&mut commands, player_position(0));
    let enemy = spawn_enemy(
        &mut commands,
        Vec3::ZERO,
        EnemyConfig::default(),
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(-5.0, 0.0, 5.0),
        ],
        Some(Weapon::pistol()),
    );
    let spare = spawn_loose_weapon(&mut commands, Vec3::new(3.0, 0.0, 2.0), Weapon::rifle());
    if use_rapier {
        commands.entity(player).insert(actor_collider());
        commands.entity(enemy).insert(actor_collider());
        commands.entity(spare).insert(weapon_collider());
    }
    queue.apply(app.world_mut());

    for tick in 0..TICKS {
        if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
            transform.translation = player_position(tick);
        }

        app.update();

        if tick % 100 == 0 {
            let state = app.world().get::<EnemyState>(enemy).copied();
            log_info(&format!("Tick {}: enemy state {:?}", tick, state));
        }
    }

    println!("Simulation complete!");
}
