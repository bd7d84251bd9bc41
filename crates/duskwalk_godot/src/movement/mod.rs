//! Player movement — CharacterBody3D как MovementResolver
//!
//! Flow:
//! 1. sample_player_input записал MoveInput (snapshot на начало тика)
//! 2. drive_player_bodies_main_thread: movement_tick с BodyResolver
//! 3. BodyResolver: set_velocity → move_and_slide() → get_velocity/is_on_floor
//! 4. Pivot look_at по facing (только на тиках с ненулевым направлением)
//!
//! NAMING: `_main_thread` суффикс = Godot API calls (NonSend resources)

use bevy::prelude::*;
use duskwalk_simulation::{
    input_direction, movement_tick, CharacterMotion, Facing, MoveInput, MovementParams,
    MovementResolver, Player, ResolvedMotion,
};
use godot::classes::CharacterBody3D;
use godot::prelude::*;

use crate::shared::{GodotDeltaTime, VisualRegistry};

/// MovementResolver поверх CharacterBody3D
///
/// move_and_slide() сам интегрирует перемещение за physics frame, скользит
/// вдоль препятствий и обновляет world transform + floor flags тела.
pub struct BodyResolver {
    pub body: Gd<CharacterBody3D>,
}

impl MovementResolver for BodyResolver {
    fn move_and_resolve(&mut self, velocity: Vec3, _delta: f32) -> ResolvedMotion {
        self.body
            .set_velocity(Vector3::new(velocity.x, velocity.y, velocity.z));
        self.body.move_and_slide();

        // Post-collision velocity: заблокированные компоненты уже поглощены
        let resolved = self.body.get_velocity();
        ResolvedMotion {
            velocity: Vec3::new(resolved.x, resolved.y, resolved.z),
            grounded: self.body.is_on_floor(),
        }
    }
}

/// Движение player-тел через движок (main thread)
pub fn drive_player_bodies_main_thread(
    params: Res<MovementParams>,
    delta: Res<GodotDeltaTime>,
    mut visuals: NonSendMut<VisualRegistry>,
    mut query: Query<(Entity, &MoveInput, &mut CharacterMotion, &mut Facing), With<Player>>,
) {
    for (entity, input, mut motion, mut facing) in query.iter_mut() {
        let Some(body) = visuals.bodies.get(&entity).cloned() else {
            continue;
        };

        let mut resolver = BodyResolver { body };
        movement_tick(
            &params,
            input,
            &mut motion,
            &mut facing,
            &mut resolver,
            delta.0,
        );

        // Orientation-set: поворачиваем Pivot только когда направление ненулевое
        // (idle и взаимно-погашенные сигналы не трогают facing)
        if input_direction(input) != Vec3::ZERO {
            let Some(pivot) = visuals.pivots.get_mut(&entity) else {
                continue;
            };
            let position = resolver.body.get_global_position();
            let target = position
                + Vector3::new(facing.direction.x, facing.direction.y, facing.direction.z);
            pivot.look_at(target);
        }
    }
}
