//! # screenstick
//!
//! An on-screen virtual joystick widget for touch and mouse input in Bevy
//! UI. Drag gestures inside a bounded circular region become a normalized,
//! dead-zone-filtered 2D direction vector, with optional per-axis locking
//! and angle-snapping to cardinal directions.
//!
//! ```no_run
//! use bevy::prelude::*;
//! use screenstick::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins((DefaultPlugins, ScreenStickPlugin))
//!         .add_systems(Startup, setup)
//!         .add_systems(Update, drive)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands, theme: Res<StickTheme>) {
//!     commands.spawn(Camera2d);
//!     spawn_stick(&mut commands, &theme, StickConfig::default());
//! }
//!
//! fn drive(q_stick: Query<(&StickOutput, &StickConfig)>) {
//!     for (output, config) in &q_stick {
//!         let dir: Vec2 = output.direction(config);
//!         // feed `dir` into your movement code
//!     }
//! }
//! ```

use bevy::prelude::*;

pub mod components;
pub mod error;
pub mod mapper;
pub mod plugins;
pub mod resources;

pub mod prelude {
    pub use crate::components::stick_config::{StickBehavior, StickConfig};
    pub use crate::components::stick_output::StickOutput;
    pub use crate::components::stick_pad::StickPad;
    pub use crate::components::ui::{DirectionReadout, StickBody, StickKnob};
    pub use crate::error::StickError;
    pub use crate::mapper::{
        handle_offset, map_drag, snapped_axis, Axis, AxisMode, DragFrame, DragSample,
    };
    pub use crate::plugins::readout::spawn_direction_readout;
    pub use crate::plugins::stick::spawn_stick;
    pub use crate::resources::stick_theme::StickTheme;
    pub use crate::ScreenStickPlugin;
}

/// Main entry point. Call `.add_plugins(ScreenStickPlugin)` in your App
/// setup, then spawn sticks with
/// [`spawn_stick`](plugins::stick::spawn_stick).
pub struct ScreenStickPlugin;

impl Plugin for ScreenStickPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((plugins::stick::plugin, plugins::readout::plugin));
        #[cfg(feature = "dev")]
        app.add_plugins(plugins::debug::plugin);
    }
}
