//! ECS systems registration
//!
//! Регистрация bridge events и систем в Bevy App.

use bevy::prelude::*;

/// Регистрация всех bridge ECS систем
///
/// Порядок в Update фиксированный (chain):
/// spawn визуалов → input snapshot → движение тел
pub fn register_systems(app: &mut App) {
    app.add_event::<crate::input::PlayerInputEvent>();

    app.add_systems(
        Update,
        (
            super::spawn::spawn_player_visuals_main_thread,
            crate::input::sample_player_input,
            crate::movement::drive_player_bodies_main_thread,
        )
            .chain(),
    );
}
