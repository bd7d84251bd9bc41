//! Player input events
//!
//! События генерируются из Godot Input API (PlayerInputController)
//! и сворачиваются в MoveInput компонент системой sample_player_input.

use bevy::prelude::Event;

/// Player input event — эмитится каждый physics frame
///
/// # Архитектура
/// - Emit: PlayerInputController (Godot node) в `physics_process()`
/// - Consume: sample_player_input (ECS system)
///
/// Четыре независимых directional сигнала; названия совпадают с actions
/// в Godot input map. Сигналы не нормализуются здесь — суммирование и
/// normalize делает movement updater.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlayerInputEvent {
    /// Action "move_right" (+X)
    pub move_right: bool,
    /// Action "move_left" (-X)
    pub move_left: bool,
    /// Action "move_back" (+Z)
    pub move_back: bool,
    /// Action "move_forward" (-Z)
    pub move_forward: bool,
}
