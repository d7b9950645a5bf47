use bevy::prelude::*;

use crate::components::stick_config::StickConfig;
use crate::mapper::{snapped_axis, Axis};

/// The public state of a stick. Read this from your movement systems.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct StickOutput {
    /// Clamped direction vector, components in [-1.0, 1.0], y-up.
    /// (0,0) represents the centered/idle state. Never snapped: this is
    /// what positions the knob.
    pub raw: Vec2,
    /// Whether a drag past the dead zone is in progress.
    pub active: bool,
}

impl StickOutput {
    /// The direction to hand to gameplay: `raw` with the configured
    /// per-axis snapping applied.
    ///
    /// Pure accessor; the stored vector (and so the knob) stays
    /// continuous even when both snap flags are on.
    pub fn direction(&self, config: &StickConfig) -> Vec2 {
        Vec2::new(
            if config.snap_x {
                snapped_axis(self.raw, Axis::X, config.axis_mode)
            } else {
                self.raw.x
            },
            if config.snap_y {
                snapped_axis(self.raw, Axis::Y, config.axis_mode)
            } else {
                self.raw.y
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::AxisMode;

    #[test]
    fn direction_passes_raw_through_without_snap() {
        let output = StickOutput {
            raw: Vec2::new(0.3, -0.4),
            active: true,
        };
        let config = StickConfig::default();
        assert_eq!(output.direction(&config), Vec2::new(0.3, -0.4));
    }

    #[test]
    fn direction_snaps_only_flagged_axes() {
        let output = StickOutput {
            raw: Vec2::new(0.7, 0.7),
            active: true,
        };
        let config = StickConfig {
            snap_x: true,
            ..Default::default()
        };
        assert_eq!(output.direction(&config), Vec2::new(1.0, 0.7));

        let config = StickConfig {
            snap_x: true,
            snap_y: true,
            ..Default::default()
        };
        assert_eq!(output.direction(&config), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn direction_snap_respects_angular_bands() {
        // Nearly straight up: horizontal snap mutes x, vertical keeps sign.
        let output = StickOutput {
            raw: Vec2::new(0.01, 0.9),
            active: true,
        };
        let config = StickConfig {
            snap_x: true,
            snap_y: true,
            ..Default::default()
        };
        assert_eq!(output.direction(&config), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn direction_snap_in_single_axis_mode_signs() {
        let output = StickOutput {
            raw: Vec2::new(-0.2, 0.0),
            active: true,
        };
        let config = StickConfig {
            axis_mode: AxisMode::Horizontal,
            snap_x: true,
            ..Default::default()
        };
        assert_eq!(output.direction(&config), Vec2::new(-1.0, 0.0));
    }
}
