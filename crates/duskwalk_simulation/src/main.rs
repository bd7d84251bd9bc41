//! Headless walking demo
//!
//! Запускает Bevy App без рендера: персонаж падает на пол, ходит вперёд,
//! потом по диагонали, потом стоит. Прогон детерминирован (fixed tick).

use bevy::prelude::*;
use duskwalk_simulation::{
    create_headless_app, ActiveResolver, CharacterMotion, Facing, FlatGroundResolver, MoveInput,
    Player, SimulationPlugin,
};

fn main() {
    println!("Starting DUSKWALK headless walk");

    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);

    // Headless stub вместо Godot CharacterBody3D; spawn в 4м над полом
    app.insert_non_send_resource(ActiveResolver(Box::new(FlatGroundResolver::new(
        Vec3::new(0.0, 4.0, 0.0),
    ))));

    let player = app
        .world_mut()
        .spawn((
            Player,
            MoveInput::default(),
            CharacterMotion::default(),
            Facing::default(),
        ))
        .id();

    // Сценарий: 0-199 падение + вперёд, 200-399 вперёд+вправо, 400+ idle
    for tick in 0..600u32 {
        let input = match tick {
            0..=199 => MoveInput {
                forward: true,
                ..Default::default()
            },
            200..=399 => MoveInput {
                forward: true,
                right: true,
                ..Default::default()
            },
            _ => MoveInput::default(),
        };

        if let Some(mut move_input) = app.world_mut().get_mut::<MoveInput>(player) {
            *move_input = input;
        }

        app.update();

        if tick % 100 == 0 {
            let Some(motion) = app.world().get::<CharacterMotion>(player) else {
                continue;
            };
            let Some(facing) = app.world().get::<Facing>(player) else {
                continue;
            };
            println!(
                "Tick {}: velocity {:?}, grounded {}, facing {:?}",
                tick, motion.velocity, motion.grounded, facing.direction
            );
        }
    }

    println!("Walk complete");
}
