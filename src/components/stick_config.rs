use bevy::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mapper::AxisMode;

/// Whether the stick stays put or follows the first touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StickBehavior {
    /// The body sits at its themed position and is always visible.
    #[default]
    Fixed,
    /// The body is hidden until a press lands somewhere in the pad region,
    /// re-anchors to the press point, and hides again on release.
    Floating,
}

/// Per-instance mapper configuration.
///
/// Set it at spawn time and tweak it at runtime (e.g. through the
/// inspector); changes mid-drag take effect on the next update. Negative
/// `handle_range`/`dead_zone` values are treated as their absolute value.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StickConfig {
    /// Multiplier on the visual knob displacement.
    /// `1.0` lets the knob center reach the body rim at full deflection.
    pub handle_range: f32,

    /// Magnitude threshold (0.0 to 1.0) below which input is ignored.
    /// Prevents drifting or jitter when a finger is resting near the center.
    pub dead_zone: f32,

    /// Restricts reporting to one axis, or keeps both.
    pub axis_mode: AxisMode,

    /// Discretize the reported horizontal value to {-1, 0, 1}.
    pub snap_x: bool,

    /// Discretize the reported vertical value to {-1, 0, 1}.
    pub snap_y: bool,

    /// Fixed placement or floating (re-anchor on press).
    pub behavior: StickBehavior,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            handle_range: 1.0,
            dead_zone: 0.05,
            axis_mode: AxisMode::Both,
            snap_x: false,
            snap_y: false,
            behavior: StickBehavior::Fixed,
        }
    }
}

impl StickConfig {
    /// A floating stick with the default mapping.
    pub fn floating() -> Self {
        Self {
            behavior: StickBehavior::Floating,
            ..Default::default()
        }
    }
}
