//! Scene creation (ground, lights, camera)
//!
//! Extension методы для SimulationBridge (создание 3D сцены программно).

use super::SimulationBridge;
use godot::classes::{
    light_3d::Param as LightParam, BoxMesh, BoxShape3D, Camera3D, CollisionShape3D,
    DirectionalLight3D, Mesh, MeshInstance3D, Node, Shape3D, StaticBody3D,
};
use godot::prelude::*;

impl SimulationBridge {
    /// Пол: StaticBody3D плита 60×1×60, верхняя грань на y=0
    pub(super) fn create_ground(&mut self) {
        let mut ground = StaticBody3D::new_alloc();
        ground.set_name("Ground");

        let mut shape = BoxShape3D::new_gd();
        shape.set_size(Vector3::new(60.0, 1.0, 60.0));
        let mut collision = CollisionShape3D::new_alloc();
        collision.set_shape(&shape.upcast::<Shape3D>());
        ground.add_child(&collision.upcast::<Node>());

        let mut mesh = BoxMesh::new_gd();
        mesh.set_size(Vector3::new(60.0, 1.0, 60.0));
        let mut mesh_instance = MeshInstance3D::new_alloc();
        mesh_instance.set_mesh(&mesh.upcast::<Mesh>());
        ground.add_child(&mesh_instance.upcast::<Node>());

        ground.set_position(Vector3::new(0.0, -0.5, 0.0));
        self.base_mut().add_child(&ground.upcast::<Node>());
    }

    /// Создать lights (directional sun)
    pub(super) fn create_lights(&mut self) {
        let mut light = DirectionalLight3D::new_alloc();
        light.set_rotation_degrees(Vector3::new(-45.0, 0.0, 0.0));
        light.set_param(LightParam::ENERGY, 1.0);

        self.base_mut().add_child(&light.upcast::<Node>());
    }

    /// Статичная камера над сценой (camera rigging вне скоупа)
    pub(super) fn create_camera(&mut self) {
        let mut camera = Camera3D::new_alloc();
        camera.set_position(Vector3::new(0.0, 19.0, 19.0));
        camera.set_rotation_degrees(Vector3::new(-45.0, 0.0, 0.0));

        self.base_mut().add_child(&camera.clone().upcast::<Node>());
        camera.make_current();
    }
}
