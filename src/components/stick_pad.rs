use bevy::picking::pointer::PointerId;
use bevy::prelude::*;

/// The touch-sensitive region of a stick. Owns the drag session.
///
/// One entity per stick instance; nothing is shared between sticks.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct StickPad {
    /// Region half-extent per axis in logical pixels, measured from the
    /// layout each frame.
    pub radius: Vec2,
    /// The pointer that grabbed this stick, until it is released.
    pub active_pointer: Option<PointerId>,
}
