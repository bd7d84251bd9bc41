//! Movement компоненты: input snapshot, целевая velocity, facing
//!
//! Всё состояние пересчитывается/мутируется раз в tick:
//! - MoveInput перезаписывается в начале тика (input sampling)
//! - CharacterMotion.velocity: горизонталь из input, вертикаль — gravity + resolver
//! - Facing меняется только на тиках с ненулевым input

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Параметры движения (process-wide, задаются один раз, читаются каждый tick)
///
/// Инвариант: оба значения неотрицательны (ответственность caller'а,
/// не проверяется в рантайме).
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovementParams {
    /// Горизонтальная скорость (m/s)
    pub speed: f32,
    /// Ускорение падения (m/s²)
    pub fall_acceleration: f32,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            speed: 14.0,
            fall_acceleration: 75.0,
        }
    }
}

/// Input snapshot: четыре независимых directional сигнала
///
/// Сигналы суммируются, а не приоритизируются: left+right одновременно
/// дают нулевой вклад по оси X.
///
/// Для headless тестов — mock input через этот компонент.
/// Для игры — заполняется из Godot Input (sample_player_input).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct MoveInput {
    /// +X
    pub right: bool,
    /// -X
    pub left: bool,
    /// +Z
    pub back: bool,
    /// -Z (вперёд в Godot convention)
    pub forward: bool,
}

impl MoveInput {
    /// Хоть один сигнал активен?
    pub fn any(&self) -> bool {
        self.right || self.left || self.back || self.forward
    }
}

/// Состояние движения тела (персистентно между тиками)
///
/// `velocity` — целевая velocity: горизонталь перезаписывается каждый tick
/// из input, вертикаль аккумулирует gravity в воздухе. После move_and_resolve
/// сюда записывается post-collision velocity от resolver'а.
///
/// `grounded` — результат ПРЕДЫДУЩЕГО resolve (стоим ли на опоре).
/// Никто кроме updater'а его не пишет.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CharacterMotion {
    pub velocity: Vec3,
    pub grounded: bool,
}

/// Направление взгляда персонажа (unit, горизонтальное)
///
/// Обновляется только на тиках с ненулевым input — персонаж сохраняет
/// последний facing когда стоит.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Facing {
    pub direction: Vec3,
}

impl Default for Facing {
    fn default() -> Self {
        Self {
            direction: Vec3::NEG_Z,
        }
    }
}
