use bevy::prelude::*;

use super::widgets::{self, MenuButton};
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HudPointsText;

#[derive(Component)]
pub struct HudProductionText;

#[derive(Component)]
pub struct HudClickPowerText;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Score block, top center of the court area.
            parent
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(20.0),
                        left: Val::Px(SCREEN_WIDTH / 2.0 - SHOP_PANEL_WIDTH / 2.0 - 130.0),
                        width: Val::Px(260.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|score| {
                    score.spawn((
                        HudPointsText,
                        Text::new("0"),
                        TextFont {
                            font_size: 36.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    score.spawn((
                        HudProductionText,
                        Text::new("0.0 / s"),
                        TextFont {
                            font_size: 15.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.75, 0.85, 0.7)),
                    ));
                });

            // Click power label, tucked under the target ball.
            parent.spawn((
                HudClickPowerText,
                Text::new("Click power: 1"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(SCREEN_HEIGHT / 2.0 + CLICK_TARGET_RADIUS + 34.0),
                    left: Val::Px(SCREEN_WIDTH / 2.0 - 90.0),
                    ..default()
                },
            ));

            // Pause button, top left.
            parent
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(16.0),
                    left: Val::Px(16.0),
                    ..default()
                })
                .with_children(|corner| {
                    widgets::spawn_menu_button(corner, MenuButton::Pause, "Pause");
                });
        });
}

pub fn despawn_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE
// ═══════════════════════════════════════════════════════════════════════

pub fn update_points_text(
    player: Res<PlayerState>,
    mut query: Query<&mut Text, With<HudPointsText>>,
) {
    for mut text in query.iter_mut() {
        text.0 = format!("{}", player.points.floor() as i64);
    }
}

pub fn update_production_text(
    shop: Res<ShopState>,
    player: Res<PlayerState>,
    mut query: Query<&mut Text, With<HudProductionText>>,
) {
    let rate = shop.total_production_per_second() * player.global_multiplier;
    for mut text in query.iter_mut() {
        text.0 = format!("{:.1} / s", rate);
    }
}

pub fn update_click_power_text(
    player: Res<PlayerState>,
    mut query: Query<&mut Text, With<HudClickPowerText>>,
) {
    for mut text in query.iter_mut() {
        text.0 = format!("Click power: {:.0}", player.click_power);
    }
}

/// The pause button is RUNNING's only way back to the menu besides Escape.
pub fn handle_pause_button(
    query: Query<(&Interaction, &MenuButton), Changed<Interaction>>,
    mut flags: ResMut<SessionFlags>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (interaction, button) in &query {
        if *interaction == Interaction::Pressed && *button == MenuButton::Pause {
            flags.resumable = true;
            next_state.set(GameState::MainMenu);
        }
    }
}

/// Escape mirrors the pause button.
pub fn pause_keybind(
    input: Res<PlayerInput>,
    mut flags: ResMut<SessionFlags>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if input.pause {
        flags.resumable = true;
        next_state.set(GameState::MainMenu);
    }
}
