//! Player input systems (ECS)
//!
//! Snapshot семантика: последний PlayerInputEvent за frame сворачивается
//! в MoveInput в начале тика; дальше updater читает только MoveInput
//! (никакого re-sampling внутри тика).

use bevy::prelude::*;
use duskwalk_simulation::{MoveInput, Player};

use super::events::PlayerInputEvent;

/// Сворачивает input events в MoveInput компонент player'а
///
/// Нет events за frame (окно без фокуса, controller ещё не создан) —
/// MoveInput сохраняет предыдущее значение; controller эмитит event каждый
/// physics frame, включая «все сигналы выключены».
pub fn sample_player_input(
    mut input_events: EventReader<PlayerInputEvent>,
    mut query: Query<&mut MoveInput, With<Player>>,
) {
    let Some(event) = input_events.read().last().copied() else {
        return;
    };

    for mut input in query.iter_mut() {
        input.right = event.move_right;
        input.left = event.move_left;
        input.back = event.move_back;
        input.forward = event.move_forward;
    }
}
