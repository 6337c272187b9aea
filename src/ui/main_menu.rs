use bevy::prelude::*;

use super::widgets::{self, MenuButton};
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct MainMenuRoot;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

/// Dimmed full-screen overlay; the court and any bouncing balls stay
/// visible behind it. The first button reads "Resume" once a session has
/// begun.
pub fn spawn_main_menu(mut commands: Commands, flags: Res<SessionFlags>) {
    let start_label = if flags.resumable { "Resume" } else { "Start" };

    commands
        .spawn((
            MainMenuRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(14.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            widgets::spawn_menu_title(parent, "COURTSIDE");
            parent.spawn((
                Text::new("A Tennis Idle Clicker"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.8, 0.6)),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(8.0),
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                })
                .with_children(|menu| {
                    widgets::spawn_menu_button(menu, MenuButton::Start, start_label);
                    widgets::spawn_menu_button(menu, MenuButton::Save, "Save");
                    widgets::spawn_menu_button(menu, MenuButton::Load, "Load");
                    widgets::spawn_menu_button(menu, MenuButton::Credits, "Credits");
                    widgets::spawn_menu_button(menu, MenuButton::Quit, "Quit");
                });

            widgets::spawn_menu_footer(parent, "Click the ball. Buy machines. Profit.");
        });
}

pub fn despawn_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION
// ═══════════════════════════════════════════════════════════════════════

pub fn handle_menu_buttons(
    query: Query<(&Interaction, &MenuButton), Changed<Interaction>>,
    mut flags: ResMut<SessionFlags>,
    mut next_state: ResMut<NextState<GameState>>,
    mut save_writer: EventWriter<SaveRequestEvent>,
    mut load_writer: EventWriter<LoadRequestEvent>,
    mut exit_writer: EventWriter<AppExit>,
) {
    for (interaction, button) in &query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            MenuButton::Start => {
                flags.resumable = true;
                next_state.set(GameState::Running);
            }
            MenuButton::Save => {
                save_writer.send(SaveRequestEvent);
            }
            MenuButton::Load => {
                load_writer.send(LoadRequestEvent);
            }
            MenuButton::Credits => {
                next_state.set(GameState::Credits);
            }
            MenuButton::Quit => {
                // The exit path saves unsaved progress in Last.
                exit_writer.send(AppExit::Success);
            }
            _ => {}
        }
    }
}
