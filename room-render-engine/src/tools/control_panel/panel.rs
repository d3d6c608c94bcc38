use bevy::prelude::*;

use super::state::{
    OBJECT_PANEL_BUTTONS, PanelButton, PanelKind, PanelRoot, TexturePickerRoot, TextureSwatch,
    WALL_PANEL_BUTTONS,
};
use crate::engine::layout::objects::ObjectKind;
use constants::textures::{DEFAULT_WALL_TEXTURE, WALL_TEXTURE_MAP};

pub const BUTTON_WIDTH: f32 = 64.0;
pub const BUTTON_HEIGHT: f32 = 26.0;
pub const BUTTON_GAP: f32 = 6.0;
pub const PANEL_PADDING: f32 = 6.0;
pub const PANEL_HEIGHT: f32 = BUTTON_HEIGHT + 2.0 * PANEL_PADDING;
pub const PICKER_WIDTH: f32 = 140.0;
pub const PICKER_ROW_HEIGHT: f32 = 24.0;
/// Vertical gap between the wall panel and the texture picker below it.
pub const PICKER_GAP: f32 = 8.0;

pub const PANEL_BACKGROUND: Color = Color::srgb(0.10, 0.11, 0.13);
pub const BUTTON_BASE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVERED: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);

/// On-screen width of a panel, derived from its button strip.
pub fn panel_width(kind: ObjectKind) -> f32 {
    let buttons = match PanelKind::of(kind) {
        PanelKind::Wall => WALL_PANEL_BUTTONS.len(),
        PanelKind::Object => OBJECT_PANEL_BUTTONS.len(),
    } as f32;
    buttons * BUTTON_WIDTH + (buttons - 1.0) * BUTTON_GAP + 2.0 * PANEL_PADDING
}

/// Spawns one hidden panel per object category plus the texture picker.
/// The anchor system decides each frame which of them are visible and
/// where they sit.
pub fn spawn_control_panels(mut commands: Commands) {
    for kind in [ObjectKind::Wall, ObjectKind::Shelf, ObjectKind::Column] {
        spawn_panel(&mut commands, kind);
    }
    spawn_texture_picker(&mut commands);
}

fn spawn_panel(commands: &mut Commands, kind: ObjectKind) {
    let strip = match PanelKind::of(kind) {
        PanelKind::Wall => WALL_PANEL_BUTTONS,
        PanelKind::Object => OBJECT_PANEL_BUTTONS,
    };

    commands
        .spawn((
            PanelRoot { kind },
            Name::new(format!("ControlPanel:{}", kind.label())),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                height: Val::Px(PANEL_HEIGHT),
                padding: UiRect::all(Val::Px(PANEL_PADDING)),
                column_gap: Val::Px(BUTTON_GAP),
                display: Display::None,
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|panel| {
            for entry in strip {
                panel
                    .spawn((
                        PanelButton {
                            kind,
                            action: entry.action,
                        },
                        Button,
                        Name::new(format!("PanelButton:{}", entry.label)),
                        BackgroundColor(BUTTON_BASE),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Px(BUTTON_WIDTH),
                            height: Val::Px(BUTTON_HEIGHT),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(entry.label),
                            TextFont {
                                font_size: 13.0,
                                ..default()
                            },
                            TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        ));
                    });
            }
        });
}

fn spawn_texture_picker(commands: &mut Commands) {
    commands
        .spawn((
            TexturePickerRoot,
            Name::new("TexturePicker"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Px(PICKER_WIDTH),
                padding: UiRect::all(Val::Px(PANEL_PADDING)),
                row_gap: Val::Px(4.0),
                display: Display::None,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|picker| {
            let entries = WALL_TEXTURE_MAP
                .iter()
                .chain(std::iter::once(&DEFAULT_WALL_TEXTURE));
            for info in entries {
                picker
                    .spawn((
                        TextureSwatch { key: info.key },
                        Button,
                        Name::new(format!("TextureSwatch:{}", info.key)),
                        BackgroundColor(BUTTON_BASE),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(PICKER_ROW_HEIGHT),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            column_gap: Val::Px(6.0),
                            padding: UiRect::axes(Val::Px(6.0), Val::Px(0.0)),
                            ..default()
                        },
                    ))
                    .with_children(|row| {
                        row.spawn((
                            Name::new("SwatchColour"),
                            BackgroundColor(info.colour(false)),
                            Node {
                                width: Val::Px(14.0),
                                height: Val::Px(14.0),
                                ..default()
                            },
                        ));
                        row.spawn((
                            Text::new(info.key),
                            TextFont {
                                font_size: 12.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.92, 0.93, 0.95)),
                        ));
                    });
            }
        });
}
