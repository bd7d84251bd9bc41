//! Per-tick movement updater
//!
//! Порядок внутри тика (input уже снят в MoveInput до вызова):
//! 1. Суммируем directional сигналы в raw direction
//! 2. Ненулевой → normalize + обновляем Facing; нулевой → Facing не трогаем
//! 3. Горизонталь velocity = direction * speed (диагональ не быстрее осевой)
//! 4. В воздухе: velocity.y -= fall_acceleration * delta (explicit Euler,
//!    без terminal velocity). На земле: velocity.y оставляем как поставил resolver
//! 5. Отдаём velocity resolver'у, сохраняем его результат (velocity + grounded)

use bevy::prelude::*;

use crate::components::{CharacterMotion, Facing, MoveInput, MovementParams, Player};
use crate::movement::resolver::{ActiveResolver, MovementResolver};

/// Raw direction из directional сигналов (шаг 1)
///
/// Вклады суммируются: right +X, left -X, back +Z, forward -Z.
/// Противоположные сигналы взаимно уничтожаются по построению.
pub fn input_direction(input: &MoveInput) -> Vec3 {
    let mut direction = Vec3::ZERO;

    if input.right {
        direction.x += 1.0;
    }
    if input.left {
        direction.x -= 1.0;
    }
    if input.back {
        direction.z += 1.0;
    }
    if input.forward {
        direction.z -= 1.0;
    }

    direction
}

/// Один tick движения (шаги 1-5)
///
/// Арифметика тотальна — ошибок нет; degenerate geometry и прочие сбои
/// collision resolution принадлежат resolver'у.
pub fn movement_tick(
    params: &MovementParams,
    input: &MoveInput,
    motion: &mut CharacterMotion,
    facing: &mut Facing,
    resolver: &mut dyn MovementResolver,
    delta: f32,
) {
    let mut direction = input_direction(input);

    if direction != Vec3::ZERO {
        direction = direction.normalize();
        facing.direction = direction;
    }

    // Горизонталь перезаписываем каждый tick (post-normalization direction)
    motion.velocity.x = direction.x * params.speed;
    motion.velocity.z = direction.z * params.speed;

    // Gravity только в воздухе; на земле velocity.y владеет resolver
    if !motion.grounded {
        motion.velocity.y -= params.fall_acceleration * delta;
    }

    let resolved = resolver.move_and_resolve(motion.velocity, delta);
    motion.velocity = resolved.velocity;
    motion.grounded = resolved.grounded;
}

/// FixedUpdate система: гоняет movement_tick для player entity
///
/// Работает только когда установлен ActiveResolver (headless прогоны).
/// Godot bridge двигает CharacterBody3D сам — там slot отсутствует
/// и система молча выходит.
pub fn drive_player_motion(
    params: Res<MovementParams>,
    time: Res<Time<Fixed>>,
    resolver: Option<NonSendMut<ActiveResolver>>,
    mut query: Query<(&MoveInput, &mut CharacterMotion, &mut Facing), With<Player>>,
) {
    let Some(mut resolver) = resolver else {
        return;
    };

    let delta = time.delta_secs();

    for (input, mut motion, mut facing) in query.iter_mut() {
        movement_tick(
            &params,
            input,
            &mut motion,
            &mut facing,
            resolver.0.as_mut(),
            delta,
        );
    }
}
