//! # Virtual stick systems
//!
//! Spawning, pointer tracking, and rendering for the on-screen stick.
//!
//! This module manages:
//! 1. Spawning the pad → body → knob UI hierarchy.
//! 2. Capturing mouse and touch input and mapping it through
//!    [`map_drag`] into each stick's [`StickOutput`].
//! 3. Rendering the visual knob movement and idle/active transparency.
//!
//! ## Requirements
//! - Requires a `Camera2d` or `Camera3d` to be present in the world for UI
//!   rendering.
//! - A stick entity must be spawned with [`spawn_stick`] (or an equivalent
//!   hierarchy: a pad with a `StickBody` child holding a `StickKnob`).

use bevy::log::warn_once;
use bevy::picking::pointer::PointerId;
use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::components::stick_config::{StickBehavior, StickConfig};
use crate::components::stick_output::StickOutput;
use crate::components::stick_pad::StickPad;
use crate::components::ui::{StickBody, StickKnob};
use crate::mapper::{handle_offset, map_drag, DragFrame};
use crate::resources::stick_theme::StickTheme;

pub(crate) fn plugin(app: &mut App) {
    app.init_resource::<StickTheme>()
        .register_type::<StickTheme>()
        .register_type::<StickPad>()
        .register_type::<StickConfig>()
        .register_type::<StickOutput>()
        .add_systems(
            Update,
            (stick_input_system, stick_render_system)
                .chain()
                .run_if(any_with_component::<StickPad>),
        );
}

/// Spawns the UI hierarchy of one stick and returns the pad entity.
///
/// The pad is the touch-sensitive region and owns the session state; its
/// `StickBody` child is the visual circle, which in turn holds the
/// `StickKnob`. Fixed sticks size the pad to the body and park it at the
/// themed corner offset; floating sticks stretch the pad over the themed
/// touch region and keep the body hidden until a press.
pub fn spawn_stick(commands: &mut Commands, theme: &StickTheme, config: StickConfig) -> Entity {
    let behavior = config.behavior;

    let pad_node = match behavior {
        StickBehavior::Fixed => Node {
            width: Val::VMin(theme.body_size_vmin),
            height: Val::VMin(theme.body_size_vmin),
            max_width: Val::Px(theme.body_max_px),
            max_height: Val::Px(theme.body_max_px),
            min_width: Val::Px(theme.body_min_px),
            min_height: Val::Px(theme.body_min_px),
            position_type: PositionType::Absolute,
            left: Val::VMin(theme.pos_left_vmin),
            bottom: Val::VMin(theme.pos_bottom_vmin),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        StickBehavior::Floating => Node {
            width: theme.region_width,
            height: theme.region_height,
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
    };

    let body_node = match behavior {
        StickBehavior::Fixed => Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        StickBehavior::Floating => Node {
            width: Val::VMin(theme.body_size_vmin),
            height: Val::VMin(theme.body_size_vmin),
            max_width: Val::Px(theme.body_max_px),
            max_height: Val::Px(theme.body_max_px),
            min_width: Val::Px(theme.body_min_px),
            min_height: Val::Px(theme.body_min_px),
            position_type: PositionType::Absolute,
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
    };

    let body_visibility = match behavior {
        StickBehavior::Fixed => Visibility::default(),
        StickBehavior::Floating => Visibility::Hidden,
    };

    commands
        .spawn((
            StickPad::default(),
            StickOutput::default(),
            config,
            Interaction::default(),
            RelativeCursorPosition::default(),
            pad_node,
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    StickBody,
                    RelativeCursorPosition::default(),
                    body_node,
                    body_visibility,
                    BackgroundColor(theme.body_color.with_alpha(theme.alpha_idle)),
                    BorderRadius::all(Val::Percent(50.0)),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        StickKnob,
                        Node {
                            width: Val::VMin(theme.knob_size_vmin),
                            height: Val::VMin(theme.knob_size_vmin),
                            max_width: Val::Px(theme.knob_max_px),
                            max_height: Val::Px(theme.knob_max_px),
                            min_width: Val::Px(theme.knob_min_px),
                            min_height: Val::Px(theme.knob_min_px),
                            position_type: PositionType::Relative,
                            ..default()
                        },
                        BackgroundColor(theme.knob_color.with_alpha(theme.alpha_idle)),
                        BorderRadius::all(Val::Percent(50.0)),
                    ));
                });
        })
        .id()
}

/// Tracks the grabbing pointer of each stick and maps its drag into the
/// stick's [`StickOutput`].
///
/// Acquisition is edge-triggered: a stick with no active pointer takes the
/// mouse on `Interaction::Pressed`, or the first touch that lands over the
/// pad. The stick then follows that pointer exclusively until it is
/// released (or the touch is canceled), at which point the output resets
/// to zero unconditionally.
fn stick_input_system(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut q_pad: Query<(
        &Interaction,
        &RelativeCursorPosition,
        &ComputedNode,
        &StickConfig,
        &Children,
        &mut StickPad,
        &mut StickOutput,
    )>,
    mut q_body: Query<
        (
            &mut Node,
            &mut Visibility,
            &ComputedNode,
            &RelativeCursorPosition,
        ),
        (With<StickBody>, Without<StickPad>),
    >,
) {
    for (interaction, pad_cursor, pad_computed, config, children, mut pad, mut output) in
        &mut q_pad
    {
        let mut body_entity = None;
        for &child in children {
            if q_body.contains(child) {
                body_entity = Some(child);
                break;
            }
        }
        let Some(body_entity) = body_entity else {
            continue;
        };
        let Ok((mut body_node, mut body_visibility, body_computed, body_cursor)) =
            q_body.get_mut(body_entity)
        else {
            continue;
        };

        let inverse_scale = body_computed.inverse_scale_factor();
        pad.radius = body_computed.size() * inverse_scale / 2.0;

        let mut just_grabbed = false;
        if pad.active_pointer.is_none() {
            if *interaction == Interaction::Pressed {
                pad.active_pointer = Some(PointerId::Mouse);
            }
            for touch in touches.iter_just_pressed() {
                if pad_cursor.cursor_over() {
                    pad.active_pointer = Some(PointerId::Touch(touch.id()));
                }
            }
            if let Some(pointer) = pad.active_pointer {
                debug!("stick grabbed by {pointer:?}");
                if config.behavior == StickBehavior::Floating {
                    anchor_body_to_press(pad_cursor, pad_computed, body_computed, &mut body_node);
                    *body_visibility = Visibility::Inherited;
                    // The body rect moves next layout pass; mapping against
                    // the old rect this frame would report a phantom jump.
                    just_grabbed = true;
                }
            }
        }

        let mut released = false;
        if let Some(pointer) = pad.active_pointer {
            match pointer {
                PointerId::Mouse => {
                    if !mouse_buttons.pressed(MouseButton::Left) {
                        released = true;
                    }
                }
                PointerId::Touch(id) => {
                    if touches.get_released(id).is_some() || touches.just_canceled(id) {
                        released = true;
                    }
                }
                // Custom pointers never grab a stick in the first place.
                _ => released = true,
            }

            if !released && !just_grabbed {
                if let Some(pos) = body_cursor.normalized {
                    // RelativeCursorPosition is center-origin with the node
                    // edges at +-0.5 and y pointing down; the mapper works
                    // y-up in physical pixels.
                    let pointer_px = Vec2::new(pos.x, -pos.y) * body_computed.size();
                    match DragFrame::new(pointer_px, Vec2::ZERO, pad.radius, 1.0 / inverse_scale) {
                        Ok(frame) => {
                            let sample = map_drag(&frame, config.axis_mode, config.dead_zone.abs());
                            output.raw = sample.raw;
                            output.active = sample.active;
                        }
                        Err(err) => warn_once!("stick update skipped: {err}"),
                    }
                }
            }
        }

        if released {
            debug!("stick released");
            pad.active_pointer = None;
            output.raw = Vec2::ZERO;
            output.active = false;
            if config.behavior == StickBehavior::Floating {
                *body_visibility = Visibility::Hidden;
            }
        }
    }
}

/// Re-anchors a floating body so its center sits under the press point.
fn anchor_body_to_press(
    pad_cursor: &RelativeCursorPosition,
    pad_computed: &ComputedNode,
    body_computed: &ComputedNode,
    body_node: &mut Node,
) {
    let Some(press) = pad_cursor.normalized else {
        return;
    };
    let pad_size = pad_computed.size() * pad_computed.inverse_scale_factor();
    let body_size = body_computed.size() * body_computed.inverse_scale_factor();
    // press is center-origin; convert to a top-left inset within the pad
    let center = pad_size / 2.0 + press * pad_size;
    body_node.left = Val::Px(center.x - body_size.x / 2.0);
    body_node.top = Val::Px(center.y - body_size.y / 2.0);
}

/// Updates the visual position of each knob and the idle/active
/// transparency, and keeps node sizing in sync with the [`StickTheme`] so
/// live theme edits apply instantly.
///
/// The knob follows the un-snapped vector: snapping only discretizes what
/// [`StickOutput::direction`] reports, never the visuals.
fn stick_render_system(
    theme: Res<StickTheme>,
    mut q_pad: Query<
        (
            &StickPad,
            &StickConfig,
            &StickOutput,
            &mut Node,
            &Children,
        ),
        (Without<StickBody>, Without<StickKnob>),
    >,
    mut q_body: Query<
        (&mut Node, &mut BackgroundColor, &Children),
        (With<StickBody>, Without<StickPad>, Without<StickKnob>),
    >,
    mut q_knob: Query<
        (&mut Node, &mut BackgroundColor),
        (With<StickKnob>, Without<StickPad>, Without<StickBody>),
    >,
) {
    for (pad, config, output, mut pad_node, children) in &mut q_pad {
        let mut body_entity = None;
        for &child in children {
            if q_body.contains(child) {
                body_entity = Some(child);
                break;
            }
        }
        let Some(body_entity) = body_entity else {
            continue;
        };
        let Ok((mut body_node, mut body_color, body_children)) = q_body.get_mut(body_entity)
        else {
            continue;
        };

        let mut knob_entity = None;
        for &child in body_children {
            if q_knob.contains(child) {
                knob_entity = Some(child);
                break;
            }
        }
        let Some(knob_entity) = knob_entity else {
            continue;
        };
        let Ok((mut knob_node, mut knob_color)) = q_knob.get_mut(knob_entity) else {
            continue;
        };

        match config.behavior {
            StickBehavior::Fixed => {
                pad_node.width = Val::VMin(theme.body_size_vmin);
                pad_node.height = Val::VMin(theme.body_size_vmin);
                pad_node.max_width = Val::Px(theme.body_max_px);
                pad_node.max_height = Val::Px(theme.body_max_px);
                pad_node.min_width = Val::Px(theme.body_min_px);
                pad_node.min_height = Val::Px(theme.body_min_px);
                pad_node.left = Val::VMin(theme.pos_left_vmin);
                pad_node.bottom = Val::VMin(theme.pos_bottom_vmin);
            }
            StickBehavior::Floating => {
                pad_node.width = theme.region_width;
                pad_node.height = theme.region_height;
                body_node.width = Val::VMin(theme.body_size_vmin);
                body_node.height = Val::VMin(theme.body_size_vmin);
                body_node.max_width = Val::Px(theme.body_max_px);
                body_node.max_height = Val::Px(theme.body_max_px);
                body_node.min_width = Val::Px(theme.body_min_px);
                body_node.min_height = Val::Px(theme.body_min_px);
            }
        }
        knob_node.width = Val::VMin(theme.knob_size_vmin);
        knob_node.height = Val::VMin(theme.knob_size_vmin);
        knob_node.max_width = Val::Px(theme.knob_max_px);
        knob_node.max_height = Val::Px(theme.knob_max_px);
        knob_node.min_width = Val::Px(theme.knob_min_px);
        knob_node.min_height = Val::Px(theme.knob_min_px);

        let offset = handle_offset(output.raw, pad.radius, config.handle_range.abs());
        knob_node.left = Val::Px(offset.x);
        knob_node.top = Val::Px(-offset.y);

        let target_alpha = if pad.active_pointer.is_some() {
            theme.alpha_active
        } else {
            theme.alpha_idle
        };
        body_color.0.set_alpha(target_alpha);
        knob_color.0.set_alpha(target_alpha);
    }
}
