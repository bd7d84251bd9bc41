//! Movement domain — per-tick updater и граница с collision resolver
//!
//! Содержит:
//! - MovementResolver (trait-граница: sweep-and-slide выполняет внешний движок)
//! - FlatGroundResolver (headless stub для тестов и demo)
//! - movement_tick (сам updater: input → direction → velocity → gravity → resolve)
//! - drive_player_motion (FixedUpdate система для headless прогонов)

pub mod resolver;
pub mod update;

#[cfg(test)]
mod update_tests;

// Re-export all
pub use resolver::*;
pub use update::*;

use bevy::prelude::*;

/// Plugin движения: регистрирует updater в FixedUpdate
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, drive_player_motion);
    }
}
