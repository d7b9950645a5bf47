//! Error types for rejected stick geometry.

use bevy::prelude::*;
use thiserror::Error;

/// Geometry that would make the drag mapping divide by zero or worse.
///
/// These only surface from [`DragFrame::new`](crate::mapper::DragFrame::new);
/// the built-in systems log the rejection once and skip the frame, so a
/// degenerate layout never panics the host.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StickError {
    /// Region radius with a zero, negative, or non-finite component.
    #[error("stick region radius must be positive and finite, got {0}")]
    InvalidRegion(Vec2),

    /// Zero, negative, or non-finite display scale factor.
    #[error("stick scale factor must be positive and finite, got {0}")]
    InvalidScale(f32),
}
