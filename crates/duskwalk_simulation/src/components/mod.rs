//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - movement: состояние движения (MoveInput, CharacterMotion, Facing, MovementParams)
//! - player: player control marker (Player)

pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use movement::*;
pub use player::*;
