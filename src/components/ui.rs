use bevy::prelude::*;

/// The visual base circle of a stick. Child of the pad entity.
#[derive(Component)]
pub struct StickBody;

/// The moving knob. Child of the body.
#[derive(Component)]
pub struct StickKnob;

/// A debug text node that mirrors one stick's reported direction.
#[derive(Component)]
pub struct DirectionReadout {
    /// The stick pad entity to read from.
    pub stick: Entity,
}
