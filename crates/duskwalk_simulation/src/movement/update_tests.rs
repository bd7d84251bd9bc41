//! Tests for the per-tick movement updater.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::components::{CharacterMotion, Facing, MoveInput, MovementParams};
    use crate::movement::resolver::{MovementResolver, ResolvedMotion};
    use crate::movement::update::{input_direction, movement_tick};

    const TICK: f32 = 1.0 / 60.0;
    const EPSILON: f32 = 1e-4;

    /// Pass-through resolver: записывает submitted velocity, grounded задаётся тестом
    struct MockResolver {
        grounded: bool,
        /// Если задано — resolver возвращает эту velocity вместо submitted
        override_velocity: Option<Vec3>,
        submitted: Vec<Vec3>,
    }

    impl MockResolver {
        fn airborne() -> Self {
            Self {
                grounded: false,
                override_velocity: None,
                submitted: Vec::new(),
            }
        }

        fn grounded() -> Self {
            Self {
                grounded: true,
                override_velocity: None,
                submitted: Vec::new(),
            }
        }
    }

    impl MovementResolver for MockResolver {
        fn move_and_resolve(&mut self, velocity: Vec3, _delta: f32) -> ResolvedMotion {
            self.submitted.push(velocity);
            ResolvedMotion {
                velocity: self.override_velocity.unwrap_or(velocity),
                grounded: self.grounded,
            }
        }
    }

    fn tick(
        input: MoveInput,
        motion: &mut CharacterMotion,
        facing: &mut Facing,
        resolver: &mut MockResolver,
    ) {
        let params = MovementParams::default();
        movement_tick(&params, &input, motion, facing, resolver, TICK);
    }

    #[test]
    fn test_input_direction_all_combinations() {
        // Все 16 комбинаций сигналов: direction = знаковая сумма вкладов
        for bits in 0..16u8 {
            let input = MoveInput {
                right: bits & 1 != 0,
                left: bits & 2 != 0,
                back: bits & 4 != 0,
                forward: bits & 8 != 0,
            };

            let direction = input_direction(&input);

            let expected_x = (input.right as i8 - input.left as i8) as f32;
            let expected_z = (input.back as i8 - input.forward as i8) as f32;
            assert_eq!(direction, Vec3::new(expected_x, 0.0, expected_z));
        }
    }

    #[test]
    fn test_opposing_signals_cancel() {
        let input = MoveInput {
            right: true,
            left: true,
            forward: true,
            ..Default::default()
        };

        // left+right уничтожаются, остаётся только forward
        assert_eq!(input_direction(&input), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_normalized_direction_is_unit_length() {
        let input = MoveInput {
            right: true,
            forward: true,
            ..Default::default()
        };
        let mut motion = CharacterMotion::default();
        let mut facing = Facing::default();
        let mut resolver = MockResolver::grounded();

        tick(input, &mut motion, &mut facing, &mut resolver);

        assert!((facing.direction.length() - 1.0).abs() < EPSILON);
        // Направление сохранено: компоненты равны по модулю, знаки как у raw
        assert!((facing.direction.x - (-facing.direction.z)).abs() < EPSILON);
        assert!(facing.direction.x > 0.0 && facing.direction.z < 0.0);
    }

    #[test]
    fn test_horizontal_speed_invariance() {
        // Любая ненулевая комбинация сигналов даёт горизонтальную скорость == speed
        let params = MovementParams::default();

        for bits in 0..16u8 {
            let input = MoveInput {
                right: bits & 1 != 0,
                left: bits & 2 != 0,
                back: bits & 4 != 0,
                forward: bits & 8 != 0,
            };
            if input_direction(&input) == Vec3::ZERO {
                continue;
            }

            let mut motion = CharacterMotion::default();
            let mut facing = Facing::default();
            let mut resolver = MockResolver::grounded();
            movement_tick(&params, &input, &mut motion, &mut facing, &mut resolver, TICK);

            let horizontal = Vec3::new(motion.velocity.x, 0.0, motion.velocity.z);
            assert!(
                (horizontal.length() - params.speed).abs() < EPSILON,
                "combo {:#06b}: horizontal speed {} != {}",
                bits,
                horizontal.length(),
                params.speed
            );
        }
    }

    #[test]
    fn test_idle_keeps_facing() {
        let mut motion = CharacterMotion::default();
        let mut facing = Facing::default();
        let mut resolver = MockResolver::grounded();

        // Тик вправо — facing повернулся
        let right = MoveInput {
            right: true,
            ..Default::default()
        };
        tick(right, &mut motion, &mut facing, &mut resolver);
        assert_eq!(facing.direction, Vec3::X);

        // Idle тик — facing не тронут, горизонталь обнулена
        tick(MoveInput::default(), &mut motion, &mut facing, &mut resolver);
        assert_eq!(facing.direction, Vec3::X);
        assert_eq!(motion.velocity.x, 0.0);
        assert_eq!(motion.velocity.z, 0.0);
    }

    #[test]
    fn test_opposing_pair_keeps_facing() {
        // left+right: raw direction нулевой → facing как при idle
        let mut motion = CharacterMotion::default();
        let mut facing = Facing::default();
        let mut resolver = MockResolver::grounded();

        let cancelled = MoveInput {
            right: true,
            left: true,
            ..Default::default()
        };
        tick(cancelled, &mut motion, &mut facing, &mut resolver);

        assert_eq!(facing.direction, Vec3::NEG_Z);
        assert_eq!(motion.velocity.x, 0.0);
    }

    #[test]
    fn test_gravity_accumulates_while_airborne() {
        // fall_acceleration = 75, tick = 1/60: за 2 тика velocity.y ≈ -2.5
        let mut motion = CharacterMotion::default();
        let mut facing = Facing::default();
        let mut resolver = MockResolver::airborne();

        tick(MoveInput::default(), &mut motion, &mut facing, &mut resolver);
        assert!((motion.velocity.y + 1.25).abs() < EPSILON);

        tick(MoveInput::default(), &mut motion, &mut facing, &mut resolver);
        assert!((motion.velocity.y + 2.5).abs() < EPSILON);

        // Линейная аккумуляция без terminal velocity: ещё 58 тиков → ровно -75.0
        for _ in 0..58 {
            tick(MoveInput::default(), &mut motion, &mut facing, &mut resolver);
        }
        assert!((motion.velocity.y + 75.0).abs() < 1e-2);
    }

    #[test]
    fn test_gravity_skipped_when_grounded() {
        let mut motion = CharacterMotion {
            velocity: Vec3::ZERO,
            grounded: true,
        };
        let mut facing = Facing::default();
        let mut resolver = MockResolver::grounded();

        tick(MoveInput::default(), &mut motion, &mut facing, &mut resolver);

        // На земле velocity.y остаётся как поставил resolver (0)
        assert_eq!(motion.velocity.y, 0.0);
    }

    #[test]
    fn test_forward_velocity_is_speed() {
        // speed = 14, только forward: submitted velocity (0, 0, -14)
        let mut motion = CharacterMotion {
            velocity: Vec3::ZERO,
            grounded: true,
        };
        let mut facing = Facing::default();
        let mut resolver = MockResolver::grounded();

        let forward = MoveInput {
            forward: true,
            ..Default::default()
        };
        tick(forward, &mut motion, &mut facing, &mut resolver);

        assert_eq!(resolver.submitted.len(), 1);
        let submitted = resolver.submitted[0];
        assert!((submitted - Vec3::new(0.0, 0.0, -14.0)).length() < EPSILON);
    }

    #[test]
    fn test_diagonal_velocity_magnitude() {
        // forward+right: ≈ (9.9, 0, -9.9), горизонтальная скорость 14
        let mut motion = CharacterMotion {
            velocity: Vec3::ZERO,
            grounded: true,
        };
        let mut facing = Facing::default();
        let mut resolver = MockResolver::grounded();

        let diagonal = MoveInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        tick(diagonal, &mut motion, &mut facing, &mut resolver);

        let submitted = resolver.submitted[0];
        assert!((submitted.x - 9.899495).abs() < 1e-3);
        assert!((submitted.z + 9.899495).abs() < 1e-3);
        let horizontal = Vec3::new(submitted.x, 0.0, submitted.z);
        assert!((horizontal.length() - 14.0).abs() < EPSILON);
    }

    #[test]
    fn test_resolver_result_is_stored() {
        // Updater сохраняет РОВНО то что вернул resolver (post-collision velocity)
        let mut motion = CharacterMotion::default();
        let mut facing = Facing::default();
        let mut resolver = MockResolver {
            grounded: true,
            override_velocity: Some(Vec3::new(1.0, 0.0, -3.0)),
            submitted: Vec::new(),
        };

        let forward = MoveInput {
            forward: true,
            ..Default::default()
        };
        tick(forward, &mut motion, &mut facing, &mut resolver);

        assert_eq!(motion.velocity, Vec3::new(1.0, 0.0, -3.0));
        assert!(motion.grounded);
    }

    #[test]
    fn test_zero_delta_tick() {
        // delta = 0: gravity не меняется, но resolver всё равно вызывается
        let params = MovementParams::default();
        let mut motion = CharacterMotion::default();
        let mut facing = Facing::default();
        let mut resolver = MockResolver::airborne();

        movement_tick(
            &params,
            &MoveInput::default(),
            &mut motion,
            &mut facing,
            &mut resolver,
            0.0,
        );

        assert_eq!(motion.velocity.y, 0.0);
        assert_eq!(resolver.submitted.len(), 1);
    }
}
