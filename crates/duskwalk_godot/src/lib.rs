use godot::prelude::*;

mod input;
mod movement;
mod shared;
mod simulation_bridge;

/// GDExtension entry point
struct DuskwalkExtension;

#[gdextension]
unsafe impl ExtensionLibrary for DuskwalkExtension {}
