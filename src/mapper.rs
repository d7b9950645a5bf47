//! # Drag-to-direction mapper
//!
//! The core of the widget: converts a pointer displacement inside a bounded
//! region into a clamped, optionally axis-restricted direction vector, plus
//! the per-axis snapping used for 4/8-direction input schemes.
//!
//! Everything in this module is a pure function over an immutable
//! [`DragFrame`] snapshot; the systems in `plugins::stick` feed it geometry
//! and store the result on the stick entity.

use bevy::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StickError;

/// Which axes the stick reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisMode {
    /// Report both axes.
    #[default]
    Both,
    /// Horizontal only; the vertical component is forced to zero.
    Horizontal,
    /// Vertical only; the horizontal component is forced to zero.
    Vertical,
}

/// Selects a component of the direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
}

/// Immutable geometric snapshot for one drag update.
///
/// Positions are screen-space, y-up. `radius` is the region half-extent per
/// axis after DPI normalization, `scale_factor` converts pointer space into
/// radius space (1.0 when both are measured in the same units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFrame {
    pub pointer: Vec2,
    pub anchor: Vec2,
    pub radius: Vec2,
    pub scale_factor: f32,
}

impl DragFrame {
    /// Builds a frame, rejecting degenerate geometry.
    ///
    /// A zero, negative, or non-finite radius component or scale factor
    /// would turn the mapping into a division by zero, so construction
    /// fails instead. Non-finite *positions* are accepted here and
    /// neutralized by [`map_drag`].
    pub fn new(
        pointer: Vec2,
        anchor: Vec2,
        radius: Vec2,
        scale_factor: f32,
    ) -> Result<Self, StickError> {
        if !(radius.x > 0.0 && radius.y > 0.0) || !radius.is_finite() {
            return Err(StickError::InvalidRegion(radius));
        }
        if !(scale_factor > 0.0) || !scale_factor.is_finite() {
            return Err(StickError::InvalidScale(scale_factor));
        }
        Ok(Self {
            pointer,
            anchor,
            radius,
            scale_factor,
        })
    }
}

/// Result of one mapping step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    /// Clamped direction vector, magnitude <= 1.
    pub raw: Vec2,
    /// False while the displacement sits inside the dead zone.
    pub active: bool,
}

impl DragSample {
    /// The centered, inactive sample.
    pub const IDLE: Self = Self {
        raw: Vec2::ZERO,
        active: false,
    };
}

/// Maps one drag update to a direction sample.
///
/// ### Constraints:
/// - **Dead zone:** displacement magnitude <= `dead_zone` reports
///   `Vec2::ZERO` and deactivates the session.
/// - **Clamping:** magnitude above 1.0 is normalized to the unit circle,
///   direction only; inside the unit disk the response is linear.
/// - **Axis restriction:** applied before the magnitude test, so a locked
///   axis never contributes to the dead-zone check.
pub fn map_drag(frame: &DragFrame, axis_mode: AxisMode, dead_zone: f32) -> DragSample {
    if !frame.pointer.is_finite() || !frame.anchor.is_finite() {
        return DragSample::IDLE;
    }

    let mut delta = (frame.pointer - frame.anchor) / (frame.radius * frame.scale_factor);
    match axis_mode {
        AxisMode::Both => {}
        AxisMode::Horizontal => delta.y = 0.0,
        AxisMode::Vertical => delta.x = 0.0,
    }

    let magnitude = delta.length();
    if magnitude <= dead_zone {
        return DragSample::IDLE;
    }

    let raw = if magnitude > 1.0 {
        delta / magnitude
    } else {
        delta
    };
    DragSample { raw, active: true }
}

/// Discretizes one component of `raw` to {-1, 0, 1}.
///
/// In single-axis mode any non-zero value snaps straight to its sign. In
/// dual-axis mode the angle against straight-up carves four 45°-wide
/// snap-to-zero bands per axis, centered on the orthogonal direction:
/// near-vertical motion does not register horizontally and vice versa.
pub fn snapped_axis(raw: Vec2, axis: Axis, axis_mode: AxisMode) -> f32 {
    let value = match axis {
        Axis::X => raw.x,
        Axis::Y => raw.y,
    };
    if value == 0.0 {
        return 0.0;
    }
    if axis_mode != AxisMode::Both {
        return value.signum();
    }

    let angle = raw.angle_to(Vec2::Y).abs().to_degrees();
    match axis {
        Axis::X => {
            if angle < 22.5 || angle > 157.5 {
                0.0
            } else {
                value.signum()
            }
        }
        Axis::Y => {
            if angle > 67.5 && angle < 112.5 {
                0.0
            } else {
                value.signum()
            }
        }
    }
}

/// Visual knob displacement for a direction sample.
///
/// Uses the un-snapped vector: the knob stays continuous even when the
/// reported direction is discretized.
pub fn handle_offset(raw: Vec2, radius: Vec2, handle_range: f32) -> Vec2 {
    raw * radius * handle_range
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(pointer: Vec2) -> DragFrame {
        DragFrame::new(pointer, Vec2::ZERO, Vec2::splat(100.0), 1.0).unwrap()
    }

    #[test]
    fn linear_inside_unit_disk() {
        let sample = map_drag(&frame(Vec2::new(50.0, 0.0)), AxisMode::Both, 0.1);
        assert_eq!(sample.raw, Vec2::new(0.5, 0.0));
        assert!(sample.active);
    }

    #[test]
    fn normalized_outside_unit_disk() {
        let sample = map_drag(&frame(Vec2::new(200.0, 0.0)), AxisMode::Both, 0.1);
        assert_eq!(sample.raw, Vec2::new(1.0, 0.0));
        assert!(sample.active);
    }

    #[test]
    fn magnitude_never_exceeds_one() {
        for pointer in [
            Vec2::new(300.0, -450.0),
            Vec2::new(-101.0, 99.0),
            Vec2::new(1e6, 1e6),
        ] {
            let sample = map_drag(&frame(pointer), AxisMode::Both, 0.0);
            assert!(sample.raw.length() <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn dead_zone_swallows_small_displacement() {
        let sample = map_drag(&frame(Vec2::new(50.0, 0.0)), AxisMode::Both, 0.6);
        assert_eq!(sample, DragSample::IDLE);
    }

    #[test]
    fn dead_zone_boundary_is_inclusive() {
        // magnitude == dead_zone still reports zero
        let sample = map_drag(&frame(Vec2::new(50.0, 0.0)), AxisMode::Both, 0.5);
        assert_eq!(sample, DragSample::IDLE);
    }

    #[test]
    fn zero_delta_with_zero_dead_zone_is_idle() {
        let sample = map_drag(&frame(Vec2::ZERO), AxisMode::Both, 0.0);
        assert_eq!(sample, DragSample::IDLE);
    }

    #[test]
    fn horizontal_mode_zeroes_vertical() {
        let sample = map_drag(&frame(Vec2::new(60.0, 80.0)), AxisMode::Horizontal, 0.1);
        assert_eq!(sample.raw, Vec2::new(0.6, 0.0));
    }

    #[test]
    fn vertical_mode_zeroes_horizontal() {
        let sample = map_drag(&frame(Vec2::new(60.0, 80.0)), AxisMode::Vertical, 0.1);
        assert_eq!(sample.raw, Vec2::new(0.0, 0.8));
    }

    #[test]
    fn locked_axis_does_not_feed_dead_zone() {
        // A big vertical displacement must not rescue a tiny horizontal one.
        let sample = map_drag(&frame(Vec2::new(5.0, 99.0)), AxisMode::Horizontal, 0.1);
        assert_eq!(sample, DragSample::IDLE);
    }

    #[test]
    fn non_finite_pointer_maps_to_idle() {
        let f = DragFrame::new(
            Vec2::new(f32::NAN, 0.0),
            Vec2::ZERO,
            Vec2::splat(100.0),
            1.0,
        )
        .unwrap();
        assert_eq!(map_drag(&f, AxisMode::Both, 0.1), DragSample::IDLE);

        let f = DragFrame::new(
            Vec2::new(f32::INFINITY, 0.0),
            Vec2::ZERO,
            Vec2::splat(100.0),
            1.0,
        )
        .unwrap();
        assert_eq!(map_drag(&f, AxisMode::Both, 0.1), DragSample::IDLE);
    }

    #[test]
    fn frame_rejects_degenerate_region() {
        assert!(matches!(
            DragFrame::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, 1.0),
            Err(StickError::InvalidRegion(_))
        ));
        assert!(matches!(
            DragFrame::new(Vec2::ZERO, Vec2::ZERO, Vec2::new(100.0, -1.0), 1.0),
            Err(StickError::InvalidRegion(_))
        ));
        assert!(matches!(
            DragFrame::new(Vec2::ZERO, Vec2::ZERO, Vec2::new(f32::NAN, 100.0), 1.0),
            Err(StickError::InvalidRegion(_))
        ));
    }

    #[test]
    fn frame_rejects_degenerate_scale() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                DragFrame::new(Vec2::ZERO, Vec2::ZERO, Vec2::splat(100.0), scale),
                Err(StickError::InvalidScale(_))
            ));
        }
    }

    #[test]
    fn snap_zero_value_stays_zero() {
        assert_eq!(snapped_axis(Vec2::new(0.0, 1.0), Axis::X, AxisMode::Both), 0.0);
        assert_eq!(snapped_axis(Vec2::ZERO, Axis::Y, AxisMode::Both), 0.0);
    }

    #[test]
    fn snap_single_axis_mode_always_signs() {
        // No angular band in single-axis mode, only sign.
        let raw = Vec2::new(0.05, 0.0);
        assert_eq!(snapped_axis(raw, Axis::X, AxisMode::Horizontal), 1.0);
        let raw = Vec2::new(-0.7, 0.0);
        assert_eq!(snapped_axis(raw, Axis::X, AxisMode::Horizontal), -1.0);
        let raw = Vec2::new(0.0, -0.2);
        assert_eq!(snapped_axis(raw, Axis::Y, AxisMode::Vertical), -1.0);
    }

    #[test]
    fn snap_straight_up_drops_horizontal() {
        // angle 0°: too vertical to register horizontally
        let raw = Vec2::new(1e-4, 1.0);
        assert_eq!(snapped_axis(raw, Axis::X, AxisMode::Both), 0.0);
        assert_eq!(snapped_axis(raw, Axis::Y, AxisMode::Both), 1.0);
    }

    #[test]
    fn snap_straight_right_drops_vertical() {
        // angle 90°: too horizontal to register vertically
        let raw = Vec2::new(1.0, 1e-4);
        assert_eq!(snapped_axis(raw, Axis::X, AxisMode::Both), 1.0);
        assert_eq!(snapped_axis(raw, Axis::Y, AxisMode::Both), 0.0);
    }

    #[test]
    fn snap_diagonal_signs_both_axes() {
        // angle 45°: inside the live band of both axes
        let raw = Vec2::new(0.7, 0.7);
        assert_eq!(snapped_axis(raw, Axis::X, AxisMode::Both), 1.0);
        assert_eq!(snapped_axis(raw, Axis::Y, AxisMode::Both), 1.0);

        let raw = Vec2::new(-0.7, -0.7);
        assert_eq!(snapped_axis(raw, Axis::X, AxisMode::Both), -1.0);
        assert_eq!(snapped_axis(raw, Axis::Y, AxisMode::Both), -1.0);
    }

    #[test]
    fn snap_down_band_mirrors_up_band() {
        // angle ~180°: straight down, horizontal still drops
        let raw = Vec2::new(1e-4, -1.0);
        assert_eq!(snapped_axis(raw, Axis::X, AxisMode::Both), 0.0);
        assert_eq!(snapped_axis(raw, Axis::Y, AxisMode::Both), -1.0);
    }

    #[test]
    fn handle_offset_scales_with_radius_and_range() {
        let offset = handle_offset(Vec2::new(0.5, -0.25), Vec2::new(100.0, 80.0), 1.0);
        assert_eq!(offset, Vec2::new(50.0, -20.0));

        let offset = handle_offset(Vec2::new(0.5, -0.25), Vec2::new(100.0, 80.0), 0.5);
        assert_eq!(offset, Vec2::new(25.0, -10.0));

        assert_eq!(
            handle_offset(Vec2::ZERO, Vec2::new(100.0, 80.0), 1.0),
            Vec2::ZERO
        );
    }
}
