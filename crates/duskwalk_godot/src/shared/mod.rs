//! Shared NonSend resources для Godot visual слоя
//!
//! Gd<T> не Send+Sync — всё что держит Godot nodes живёт в NonSend
//! resources и трогается только системами на main thread.

use bevy::prelude::*;
use godot::classes::CharacterBody3D;
use godot::prelude::*;
use std::collections::HashMap;

/// Registry: маппинг Entity → Godot nodes персонажа
///
/// NonSend resource — main thread only.
#[derive(Default)]
pub struct VisualRegistry {
    /// CharacterBody3D тела (sweep-and-slide выполняет движок)
    pub bodies: HashMap<Entity, Gd<CharacterBody3D>>,
    /// Pivot — visual sub-part, поворачивается look_at (collision shape не вращаем)
    pub pivots: HashMap<Entity, Gd<Node3D>>,
}

/// Scene root — Godot Node3D для добавления visual child nodes
///
/// NonSend resource — main thread only.
/// Инициализируется SimulationBridge и передаётся в spawn системы.
pub struct SceneRoot {
    pub node: Gd<Node3D>,
}

/// Godot physics delta (обновляется каждый physics frame в SimulationBridge)
#[derive(Resource)]
pub struct GodotDeltaTime(pub f32);
