//! The right-hand shop column: one card per building plus the current
//! upgrade. Cards are buttons; pressing one fires the matching purchase
//! event, and affordability tinting refreshes every frame against the
//! player's balance.

use bevy::prelude::*;

use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct ShopPanelRoot;

#[derive(Component)]
pub struct BuildingCard {
    pub building_id: BuildingId,
}

#[derive(Component)]
pub struct BuildingPriceText {
    pub building_id: BuildingId,
}

#[derive(Component)]
pub struct BuildingCountText {
    pub building_id: BuildingId,
}

#[derive(Component)]
pub struct UpgradeCard;

#[derive(Component)]
pub struct UpgradeNameText;

#[derive(Component)]
pub struct UpgradePriceText;

const CARD_BG: Color = Color::srgb(0.13, 0.13, 0.16);
const CARD_BG_UNAFFORDABLE: Color = Color::srgb(0.09, 0.09, 0.11);
const UPGRADE_BG: Color = Color::srgb(0.31, 0.24, 0.47);
const UPGRADE_BG_UNAFFORDABLE: Color = Color::srgb(0.18, 0.14, 0.28);
const PRICE_COLOR: Color = Color::srgb(1.0, 0.86, 0.39);

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_shop_panel(mut commands: Commands, shop: Res<ShopState>) {
    commands
        .spawn((
            ShopPanelRoot,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                top: Val::Px(0.0),
                width: Val::Px(SHOP_PANEL_WIDTH),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                padding: UiRect {
                    top: Val::Px(18.0),
                    bottom: Val::Px(18.0),
                    left: Val::Px(16.0),
                    right: Val::Px(16.0),
                },
                ..default()
            },
            BackgroundColor(Color::srgba(0.08, 0.10, 0.08, 0.88)),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("PRO SHOP"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.9, 0.5)),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            for building in shop.buildings.values() {
                spawn_building_card(panel, building);
            }

            spawn_upgrade_card(panel);
        });
}

fn spawn_building_card(panel: &mut ChildBuilder, building: &Building) {
    let id = building.id;
    panel
        .spawn((
            BuildingCard { building_id: id },
            Button,
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(64.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(2.0),
                ..default()
            },
            BackgroundColor(CARD_BG),
            BorderRadius::all(Val::Px(8.0)),
        ))
        .with_children(|card| {
            card.spawn((
                Text::new(building.name.clone()),
                TextFont {
                    font_size: 17.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            card.spawn(Node {
                width: Val::Percent(90.0),
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            })
            .with_children(|row| {
                row.spawn((
                    BuildingPriceText { building_id: id },
                    Text::new(format!("{}$", building.price_next())),
                    TextFont {
                        font_size: 15.0,
                        ..default()
                    },
                    TextColor(PRICE_COLOR),
                ));
                row.spawn((
                    BuildingCountText { building_id: id },
                    Text::new("x0"),
                    TextFont {
                        font_size: 15.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.62, 0.52, 0.38)),
                ));
            });
        });
}

fn spawn_upgrade_card(panel: &mut ChildBuilder) {
    panel
        .spawn((
            UpgradeCard,
            Button,
            Node {
                width: Val::Percent(85.0),
                height: Val::Px(64.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(2.0),
                margin: UiRect::top(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(UPGRADE_BG),
            BorderRadius::all(Val::Px(10.0)),
        ))
        .with_children(|card| {
            card.spawn((
                UpgradeNameText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            card.spawn((
                UpgradePriceText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(PRICE_COLOR),
            ));
        });
}

pub fn despawn_shop_panel(mut commands: Commands, query: Query<Entity, With<ShopPanelRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION
// ═══════════════════════════════════════════════════════════════════════

pub fn handle_building_card_clicks(
    query: Query<(&Interaction, &BuildingCard), Changed<Interaction>>,
    mut buy_writer: EventWriter<BuyBuildingEvent>,
) {
    for (interaction, card) in &query {
        if *interaction == Interaction::Pressed {
            buy_writer.send(BuyBuildingEvent {
                building_id: card.building_id,
            });
        }
    }
}

pub fn handle_upgrade_card_clicks(
    query: Query<&Interaction, (Changed<Interaction>, With<UpgradeCard>)>,
    mut buy_writer: EventWriter<BuyUpgradeEvent>,
) {
    for interaction in &query {
        if *interaction == Interaction::Pressed {
            buy_writer.send(BuyUpgradeEvent);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// REFRESH
// ═══════════════════════════════════════════════════════════════════════

/// Keeps prices, counts, affordability tints, and the upgrade card fresh.
/// Cheap enough to run every frame, and it keeps the panel honest after
/// loads and background production.
pub fn refresh_shop_panel(
    shop: Res<ShopState>,
    player: Res<PlayerState>,
    mut price_texts: Query<(&BuildingPriceText, &mut Text)>,
    mut count_texts: Query<(&BuildingCountText, &mut Text), Without<BuildingPriceText>>,
    mut cards: Query<(&BuildingCard, &mut BackgroundColor)>,
    mut upgrade_card: Query<
        (&mut Node, &mut BackgroundColor),
        (With<UpgradeCard>, Without<BuildingCard>),
    >,
    mut upgrade_name: Query<
        &mut Text,
        (
            With<UpgradeNameText>,
            Without<BuildingPriceText>,
            Without<BuildingCountText>,
        ),
    >,
    mut upgrade_price: Query<
        &mut Text,
        (
            With<UpgradePriceText>,
            Without<UpgradeNameText>,
            Without<BuildingPriceText>,
            Without<BuildingCountText>,
        ),
    >,
) {
    for (marker, mut text) in price_texts.iter_mut() {
        if let Some(building) = shop.buildings.get(&marker.building_id) {
            text.0 = format!("{}$", building.price_next());
        }
    }
    for (marker, mut text) in count_texts.iter_mut() {
        if let Some(building) = shop.buildings.get(&marker.building_id) {
            text.0 = format!("x{}", building.count);
        }
    }
    for (card, mut bg) in cards.iter_mut() {
        if let Some(building) = shop.buildings.get(&card.building_id) {
            let affordable = player.points >= building.price_next() as f64;
            bg.0 = if affordable {
                CARD_BG
            } else {
                CARD_BG_UNAFFORDABLE
            };
        }
    }

    let current = shop.current_upgrade();
    for (mut node, mut bg) in upgrade_card.iter_mut() {
        match current {
            Some(upgrade) => {
                node.display = Display::Flex;
                let affordable = player.points >= upgrade.price as f64;
                bg.0 = if affordable {
                    UPGRADE_BG
                } else {
                    UPGRADE_BG_UNAFFORDABLE
                };
            }
            None => {
                node.display = Display::None;
            }
        }
    }
    if let Some(upgrade) = current {
        for mut text in upgrade_name.iter_mut() {
            text.0 = upgrade.name.clone();
        }
        for mut text in upgrade_price.iter_mut() {
            text.0 = format!("{} : {}$", upgrade.description, upgrade.price);
        }
    }
}
