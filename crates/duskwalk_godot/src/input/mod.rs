//! Player input module
//!
//! Обрабатывает input от игрока и преобразует его в ECS snapshot.
//!
//! # Архитектура
//!
//! ```text
//! Godot Input (move_* actions)
//!     ↓
//! PlayerInputController (Godot node) - controller.rs
//!     ↓
//! PlayerInputEvent (ECS event) - events.rs
//!     ↓
//! sample_player_input (ECS) - systems.rs
//!     ↓
//! MoveInput компонент (snapshot на начало тика)
//! ```

pub mod controller;
pub mod events;
pub mod systems;

// Re-exports для external use
pub use controller::*;
pub use events::*;
pub use systems::*;
