//! Debug direction readout: a UI text node mirroring what one stick
//! reports, snapping included. Handy while tuning dead zones and snap
//! flags; not meant to ship in a release HUD.

use bevy::prelude::*;

use crate::components::stick_config::StickConfig;
use crate::components::stick_output::StickOutput;
use crate::components::ui::DirectionReadout;

pub(crate) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        direction_readout_system.run_if(any_with_component::<DirectionReadout>),
    );
}

/// Spawns a text node that tracks the reported direction of `stick`.
pub fn spawn_direction_readout(commands: &mut Commands, stick: Entity) -> Entity {
    commands
        .spawn((
            DirectionReadout { stick },
            Text::new("Direction: (0.00, 0.00)"),
            TextFont {
                font_size: 20.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                top: Val::VMin(5.0),
                left: Val::VMin(5.0),
                ..default()
            },
            ZIndex(100),
        ))
        .id()
}

fn direction_readout_system(
    q_stick: Query<(&StickOutput, &StickConfig)>,
    mut q_readout: Query<(&DirectionReadout, &mut Text)>,
) {
    for (readout, mut text) in &mut q_readout {
        // Stale target entity: leave the last text in place.
        let Ok((output, config)) = q_stick.get(readout.stick) else {
            continue;
        };
        let dir = output.direction(config);
        text.0 = format!("Direction: ({:.2}, {:.2})", dir.x, dir.y);
    }
}
