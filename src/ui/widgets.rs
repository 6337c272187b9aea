//! Shared menu builder helpers.
//!
//! Provides the button/title/footer spawners used by every screen, plus
//! the one interaction-tint system. Buttons are flat-colored UI nodes
//! (no image assets ship with the game) identified by a [`MenuButton`]
//! action component; each screen's handler reads presses for the actions
//! it owns.

use bevy::prelude::*;

// ═══════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 48.0;
pub const BUTTON_FONT_SIZE: f32 = 22.0;
pub const TITLE_FONT_SIZE: f32 = 52.0;
pub const HINT_FONT_SIZE: f32 = 14.0;

pub const BUTTON_BG: Color = Color::srgb(0.16, 0.30, 0.14);
pub const BUTTON_BG_HOVER: Color = Color::srgb(0.24, 0.42, 0.20);
pub const BUTTON_BG_PRESSED: Color = Color::srgb(0.10, 0.22, 0.10);
pub const TITLE_COLOR: Color = Color::srgb(1.0, 0.9, 0.5);
pub const HINT_COLOR: Color = Color::srgb(0.6, 0.68, 0.55);

// ═══════════════════════════════════════════════════════════════════════
// COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

/// What a menu button does when pressed. Screens query for the actions
/// they own; a button only exists while its screen is spawned, which is
/// what makes invalid state transitions structurally impossible.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Save,
    Load,
    Credits,
    Quit,
    Back,
    Pause,
}

// ═══════════════════════════════════════════════════════════════════════
// BUILDER HELPERS
// ═══════════════════════════════════════════════════════════════════════

/// Spawns a flat-colored menu button with a centered text label.
pub fn spawn_menu_button(parent: &mut ChildBuilder, action: MenuButton, label: &str) -> Entity {
    parent
        .spawn((
            action,
            Button,
            Node {
                width: Val::Px(BUTTON_WIDTH),
                height: Val::Px(BUTTON_HEIGHT),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_BG),
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: BUTTON_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        })
        .id()
}

/// Spawns a title text node.
pub fn spawn_menu_title(parent: &mut ChildBuilder, text: &str) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: TITLE_FONT_SIZE,
            ..default()
        },
        TextColor(TITLE_COLOR),
    ));
}

/// Spawns a hint/footer text node.
pub fn spawn_menu_footer(parent: &mut ChildBuilder, text: &str) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: HINT_FONT_SIZE,
            ..default()
        },
        TextColor(HINT_COLOR),
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Tints every menu button by its interaction state.
pub fn tint_buttons_on_interaction(
    mut query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<MenuButton>),
    >,
) {
    for (interaction, mut bg) in query.iter_mut() {
        bg.0 = match *interaction {
            Interaction::Pressed => BUTTON_BG_PRESSED,
            Interaction::Hovered => BUTTON_BG_HOVER,
            Interaction::None => BUTTON_BG,
        };
    }
}
