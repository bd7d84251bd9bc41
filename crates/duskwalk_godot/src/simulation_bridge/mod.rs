//! Мост между Godot и Rust ECS симуляцией (100% Rust, no GDScript)
//!
//! Архитектура:
//! - Создаёт всю 3D сцену программно в ready() (пол, свет, камера)
//! - Владеет Bevy App; каждый physics frame: delta → ECS update →
//!   движение CharacterBody3D → поворот Pivot

mod logger;
mod scene;
mod spawn;
mod systems_setup;

use crate::shared::{GodotDeltaTime, SceneRoot, VisualRegistry};
use duskwalk_simulation::{
    create_headless_app, CharacterMotion, Facing, LogLevel, MoveInput, Player, SimulationPlugin,
};
use godot::classes::{INode, INode3D, Node};
use godot::prelude::*;
use logger::GodotLogger;

/// SimulationBridge: главный node для Godot ↔ ECS интеграции
#[derive(GodotClass)]
#[class(base=Node3D)]
pub struct SimulationBridge {
    base: Base<Node3D>,

    /// Bevy ECS App (симуляция + NonSend visual registry)
    simulation: Option<bevy::app::App>,
}

#[godot_api]
impl INode3D for SimulationBridge {
    fn init(base: Base<Node3D>) -> Self {
        Self {
            base,
            simulation: None,
        }
    }

    fn ready(&mut self) {
        GodotLogger::clear_log_file();
        duskwalk_simulation::set_logger(Box::new(GodotLogger));
        duskwalk_simulation::set_log_level(LogLevel::Debug);
        duskwalk_simulation::log("SimulationBridge ready — building 3D scene in Rust");

        // 1. Сцена: пол, свет, камера
        self.create_ground();
        self.create_lights();
        self.create_camera();

        // 2. Инициализируем ECS симуляцию
        let mut app = create_headless_app();
        app.add_plugins(SimulationPlugin);

        // 2.1 NonSend resources (main thread only)
        app.insert_non_send_resource(VisualRegistry::default());
        app.insert_non_send_resource(SceneRoot {
            node: self.base().clone().upcast::<Node3D>(),
        });

        // 2.2 Bridge events + systems
        systems_setup::register_systems(&mut app);

        // 3. Player entity (визуал создаст spawn_player_visuals_main_thread)
        app.world_mut().spawn((
            Player,
            MoveInput::default(),
            CharacterMotion::default(),
            Facing::default(),
        ));

        self.simulation = Some(app);

        // 4. Input controller (child node, эмитит PlayerInputEvent)
        self.create_input_controller();

        duskwalk_simulation::log("Scene ready: move_* actions двигают персонажа");
    }

    fn physics_process(&mut self, delta: f64) {
        if let Some(app) = &mut self.simulation {
            // Передаём physics delta в Bevy (для movement систем)
            app.world_mut().insert_resource(GodotDeltaTime(delta as f32));

            app.update();
        }
    }
}

impl SimulationBridge {
    /// Emit PlayerInputEvent в ECS (вызывается PlayerInputController через bind_mut)
    pub fn emit_player_input_event(&mut self, input_event: crate::input::PlayerInputEvent) {
        let Some(app) = &mut self.simulation else {
            return;
        };

        app.world_mut().send_event(input_event);
    }

    /// Создать PlayerInputController как child node
    fn create_input_controller(&mut self) {
        use crate::input::PlayerInputController;

        let mut controller = Gd::<PlayerInputController>::from_init_fn(|base| {
            <PlayerInputController as INode>::init(base)
        });
        controller.set_name("PlayerInputController");
        controller.bind_mut().simulation_bridge_path = self.base().get_path();

        self.base_mut().add_child(&controller.upcast::<Node>());
    }
}
