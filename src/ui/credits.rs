use bevy::prelude::*;

use super::widgets::{self, MenuButton};
use crate::shared::*;

#[derive(Component)]
pub struct CreditsRoot;

const CREDIT_LINES: &[&str] = &[
    "Courtside",
    "A tennis idle clicker",
    "",
    "Built with Bevy",
    "Tennis balls harmed: 0",
];

pub fn spawn_credits(mut commands: Commands) {
    commands
        .spawn((
            CreditsRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            widgets::spawn_menu_title(parent, "Credits");

            for line in CREDIT_LINES {
                parent.spawn((
                    Text::new(*line),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }

            parent
                .spawn(Node {
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                })
                .with_children(|row| {
                    widgets::spawn_menu_button(row, MenuButton::Back, "Back");
                });
        });
}

pub fn despawn_credits(mut commands: Commands, query: Query<Entity, With<CreditsRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Back is the only transition defined from the credits screen.
pub fn handle_back_button(
    query: Query<(&Interaction, &MenuButton), Changed<Interaction>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (interaction, button) in &query {
        if *interaction == Interaction::Pressed && *button == MenuButton::Back {
            next_state.set(GameState::MainMenu);
        }
    }
}
