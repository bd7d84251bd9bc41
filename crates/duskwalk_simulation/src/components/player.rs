//! Player control marker component

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Движение entity с этим маркером управляется player input
/// (MoveInput обновляется из внешнего input polling или напрямую тестами).
///
/// # Single-player
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
