//! Player visual spawning system

use bevy::prelude::*;
use duskwalk_simulation::{logger, Player};
use godot::classes::{
    CapsuleMesh, CapsuleShape3D, CharacterBody3D, CollisionShape3D, Mesh, MeshInstance3D, Node,
    Shape3D,
};
use godot::prelude::*;

use crate::shared::{SceneRoot, VisualRegistry};

/// Spawn визуалов для новых player entity
///
/// Строит тело программно (без TSCN prefab):
///
/// ```text
/// CharacterBody3D "Player"
///   ├─ CollisionShape3D (capsule 0.4×1.8) — НЕ вращается с facing
///   └─ Pivot (Node3D) — вращается look_at
///        └─ MeshInstance3D (capsule)
/// ```
///
/// NAMING: `_main_thread` суффикс = Godot API calls (NonSend resources)
pub fn spawn_player_visuals_main_thread(
    query: Query<Entity, Added<Player>>,
    mut visuals: NonSendMut<VisualRegistry>,
    scene_root: NonSend<SceneRoot>,
) {
    for entity in query.iter() {
        let mut body = CharacterBody3D::new_alloc();
        body.set_name("Player");

        let mut capsule = CapsuleShape3D::new_gd();
        capsule.set_radius(0.4);
        capsule.set_height(1.8);
        let mut collision = CollisionShape3D::new_alloc();
        collision.set_name("CollisionShape3D");
        collision.set_position(Vector3::new(0.0, 0.9, 0.0));
        collision.set_shape(&capsule.upcast::<Shape3D>());
        body.add_child(&collision.upcast::<Node>());

        // Pivot — visual sub-part; поворачиваем его, а не collision shape
        let mut pivot = Node3D::new_alloc();
        pivot.set_name("Pivot");
        let mut mesh = CapsuleMesh::new_gd();
        mesh.set_radius(0.4);
        mesh.set_height(1.8);
        let mut mesh_instance = MeshInstance3D::new_alloc();
        mesh_instance.set_mesh(&mesh.upcast::<Mesh>());
        mesh_instance.set_position(Vector3::new(0.0, 0.9, 0.0));
        pivot.add_child(&mesh_instance.upcast::<Node>());
        body.add_child(&pivot.clone().upcast::<Node>());

        // Spawn чуть над полом — первый тик тело в воздухе, move_and_slide
        // прижмёт к опоре и выставит is_on_floor
        body.set_position(Vector3::new(0.0, 0.5, 0.0));

        // СНАЧАЛА добавляем в дерево, потом регистрируем
        let mut root = scene_root.node.clone();
        root.add_child(&body.clone().upcast::<Node>());

        visuals.bodies.insert(entity, body);
        visuals.pivots.insert(entity, pivot);

        logger::log(&format!("✅ Player visual spawned for entity {:?}", entity));
    }
}
