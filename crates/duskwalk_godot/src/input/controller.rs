//! PlayerInputController — Godot node для чтения player input
//!
//! Архитектура:
//! - Godot Node (child of SimulationBridge)
//! - Читает Input::singleton() каждый physics frame
//! - Emit PlayerInputEvent в ECS через SimulationBridge
//!
//! Flow:
//! 1. physics_process() вызывается каждый physics frame (до тика симуляции
//!    следующего frame — input попадает в ECS с задержкой в один тик)
//! 2. Опрашиваем четыре move_* action через Input API
//! 3. Emit PlayerInputEvent через SimulationBridge::emit_player_input_event()
//!
//! ВАЖНО: actions move_right/move_left/move_back/move_forward должны быть
//! определены в project input map (настройка input map вне скоупа кода).

use godot::classes::{INode, Input, Node};
use godot::prelude::*;

use super::events::PlayerInputEvent;

/// PlayerInputController — читает Godot Input и эмитит ECS events
#[derive(GodotClass)]
#[class(base=Node)]
pub struct PlayerInputController {
    /// Путь к SimulationBridge (parent node, для emit events)
    #[var]
    pub simulation_bridge_path: NodePath,

    base: Base<Node>,
}

#[godot_api]
impl INode for PlayerInputController {
    fn init(base: Base<Node>) -> Self {
        Self {
            simulation_bridge_path: NodePath::from(""),
            base,
        }
    }

    fn ready(&mut self) {
        duskwalk_simulation::log("PlayerInputController ready");
    }

    fn physics_process(&mut self, _delta: f64) {
        // Guard: SimulationBridge path не установлен
        if self.simulation_bridge_path.is_empty() {
            return;
        }

        let input = Input::singleton();

        // Четыре именованных directional сигнала из input map
        let input_event = PlayerInputEvent {
            move_right: input.is_action_pressed("move_right"),
            move_left: input.is_action_pressed("move_left"),
            move_back: input.is_action_pressed("move_back"),
            move_forward: input.is_action_pressed("move_forward"),
        };

        self.emit_player_input_event(input_event);
    }
}

impl PlayerInputController {
    /// Emit PlayerInputEvent в ECS через SimulationBridge
    ///
    /// Находит SimulationBridge через NodePath и отдаёт event в Bevy world.
    fn emit_player_input_event(&mut self, input_event: PlayerInputEvent) {
        let Some(mut bridge) = self
            .base()
            .get_tree()
            .and_then(|tree| tree.get_root())
            .and_then(|root| {
                root.try_get_node_as::<crate::simulation_bridge::SimulationBridge>(
                    &self.simulation_bridge_path,
                )
            })
        else {
            duskwalk_simulation::log_error(&format!(
                "PlayerInputController: SimulationBridge not found at path: {}",
                self.simulation_bridge_path
            ));
            return;
        };

        bridge.bind_mut().emit_player_input_event(input_event);
    }
}
