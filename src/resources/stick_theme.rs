use bevy::prelude::*;

/// Visual defaults shared by every stick spawned through
/// [`spawn_stick`](crate::plugins::stick::spawn_stick).
///
/// By updating this resource (via code or the `dev`-feature inspector),
/// sticks react instantly to changes in size, placement, or appearance.
#[derive(Resource, Reflect, Debug)]
#[reflect(Resource)]
pub struct StickTheme {
    /// Target width/height of the body circle relative to the smaller
    /// screen dimension. 30.0 means 30% of the screen's `VMin`.
    pub body_size_vmin: f32,

    /// Hard ceiling for the body size in pixels.
    /// Prevents the stick from becoming massive on large 4K monitors.
    pub body_max_px: f32,

    /// Hard floor for the body size in pixels.
    /// Ensures the stick is always big enough for a human thumb on small
    /// phones.
    pub body_min_px: f32,

    /// Target size of the moving knob relative to the smaller screen
    /// dimension.
    pub knob_size_vmin: f32,

    /// Hard ceiling for the knob size in pixels.
    pub knob_max_px: f32,

    /// Hard floor for the knob size in pixels.
    pub knob_min_px: f32,

    /// Distance of a fixed stick from the left edge in responsive `VMin`
    /// units.
    pub pos_left_vmin: f32,

    /// Distance of a fixed stick from the bottom edge in responsive
    /// `VMin` units.
    pub pos_bottom_vmin: f32,

    /// Width of the touch region a floating stick listens on, anchored to
    /// the bottom-left corner.
    pub region_width: Val,

    /// Height of the floating touch region.
    pub region_height: Val,

    /// Transparency of the stick when it is NOT being touched (0.0 to 1.0).
    pub alpha_idle: f32,

    /// Transparency of the stick while actively being dragged (0.0 to 1.0).
    pub alpha_active: f32,

    /// Tint of the body circle.
    pub body_color: Color,

    /// Color of the inner moving knob.
    pub knob_color: Color,
}

impl Default for StickTheme {
    fn default() -> Self {
        Self {
            body_size_vmin: 30.0,
            body_max_px: 250.0,
            body_min_px: 120.0,
            knob_size_vmin: 10.0,
            knob_max_px: 80.0,
            knob_min_px: 40.0,
            pos_left_vmin: 20.0,
            pos_bottom_vmin: 15.0,
            region_width: Val::Percent(50.0),
            region_height: Val::Percent(100.0),
            alpha_idle: 0.3,
            alpha_active: 0.8,
            body_color: Color::srgba(1.0, 1.0, 1.0, 1.0),
            knob_color: Color::WHITE,
        }
    }
}
