//! DUSKWALK Simulation Core
//!
//! ECS-симуляция движения персонажа на Bevy 0.16 (engine-independent)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = movement state + per-tick updater (детерминированная логика)
//! - Godot = tactical layer (collision resolution, rendering, input polling)
//!
//! Граница между слоями — trait `MovementResolver`: симуляция отдаёт
//! желаемую velocity, внешний resolver (CharacterBody3D или headless stub)
//! возвращает post-collision velocity + grounded флаг.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

// Публичные модули
pub mod components;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use components::*;
pub use logger::*;
pub use movement::*;

/// Частота simulation tick (Hz)
pub const TICK_RATE_HZ: f64 = 60.0;

/// Длительность одного fixed tick
///
/// ВАЖНО: один и тот же Duration используется и для Time<Fixed>, и для
/// TimeUpdateStrategy::ManualDuration — иначе накопитель fixed timestep
/// может разойтись на наносекунду и tick не сработает.
pub fn simulation_tick() -> Duration {
    Duration::from_secs_f64(1.0 / TICK_RATE_HZ)
}

/// Главный plugin симуляции
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_duration(simulation_tick()))
            // Параметры движения (speed, fall_acceleration)
            .init_resource::<MovementParams>()
            .add_plugins(MovementPlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Каждый `app.update()` продвигает виртуальное время ровно на один tick
/// (не зависит от wall clock) — headless прогоны детерминированы, а Godot
/// bridge получает ровно один FixedUpdate на один physics frame.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_duration(simulation_tick()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(simulation_tick()));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Собирает все компоненты типа T в детерминированный байтовый формат
/// (сортировка по Entity ID, сериализация через Debug).
pub fn world_snapshot<T: Component + std::fmt::Debug>(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entries: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entries.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entries {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
