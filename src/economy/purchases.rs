use bevy::prelude::*;

use super::effects::recompute_upgrade_effects;
use crate::balls::spawning::spawn_ball;
use crate::shared::*;

/// Processes BuyBuildingEvents: the core purchase flow.
///
/// An unaffordable request is rejected silently (logged, no state change,
/// no ball spawn). A successful purchase deducts the compounding price,
/// increments the owned count, and spawns exactly one ball wearing the
/// building's skin.
pub fn handle_buy_building(
    mut buy_events: EventReader<BuyBuildingEvent>,
    mut shop: ResMut<ShopState>,
    mut player: ResMut<PlayerState>,
    mut purchase_writer: EventWriter<PurchaseEvent>,
) {
    let mut rng = rand::thread_rng();

    for ev in buy_events.read() {
        let (price, label) = {
            let Some(building) = shop.buildings.get_mut(&ev.building_id) else {
                warn!(
                    "[Economy] Buy failed, unknown building id {}",
                    ev.building_id
                );
                continue;
            };

            let price = building.price_next();
            if player.points < price as f64 {
                info!(
                    "[Economy] Cannot afford '{}' (need {}, have {:.0})",
                    building.name, price, player.points
                );
                continue;
            }

            building.count += 1;
            (price, building.name.clone())
        };

        player.points -= price as f64;
        spawn_ball(&mut shop, ev.building_id, &mut rng);

        purchase_writer.send(PurchaseEvent {
            label: label.clone(),
            cost: price,
        });
        info!(
            "[Economy] Bought '{}' for {}. Remaining points: {:.0}",
            label, price, player.points
        );
    }
}

/// Processes BuyUpgradeEvents. Only the upgrade at the current index is
/// ever evaluated; buying it advances the index and recomputes effects.
pub fn handle_buy_upgrade(
    mut buy_events: EventReader<BuyUpgradeEvent>,
    mut shop: ResMut<ShopState>,
    mut player: ResMut<PlayerState>,
    mut purchase_writer: EventWriter<PurchaseEvent>,
) {
    for _ev in buy_events.read() {
        let index = shop.current_upgrade_index;
        let (price, id, label) = {
            let Some(upgrade) = shop.upgrade_list.get_mut(index) else {
                // Track exhausted; the panel hides the card but a stale
                // click may still arrive.
                continue;
            };

            let price = upgrade.price;
            if player.points < price as f64 {
                info!(
                    "[Economy] Cannot afford upgrade '{}' (need {}, have {:.0})",
                    upgrade.name, price, player.points
                );
                continue;
            }

            upgrade.bought = true;
            (price, upgrade.id.clone(), upgrade.name.clone())
        };

        player.points -= price as f64;
        player.purchased_upgrades.push(id);
        shop.current_upgrade_index = index + 1;
        recompute_upgrade_effects(&mut shop, &mut player);

        purchase_writer.send(PurchaseEvent {
            label: label.clone(),
            cost: price,
        });
        info!(
            "[Economy] Bought upgrade '{}' for {}. Click power is now {:.0}",
            label, price, player.click_power
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    fn catalog_shop() -> ShopState {
        ShopState {
            buildings: catalog::starting_buildings(),
            upgrade_list: catalog::starting_upgrades(),
            ..Default::default()
        }
    }

    fn buy_building(shop: &mut ShopState, player: &mut PlayerState, id: BuildingId) {
        // Mirrors handle_buy_building without the ECS plumbing.
        let mut rng = rand::thread_rng();
        let Some(building) = shop.buildings.get_mut(&id) else {
            return;
        };
        let price = building.price_next();
        if player.points < price as f64 {
            return;
        }
        building.count += 1;
        player.points -= price as f64;
        spawn_ball(shop, id, &mut rng);
    }

    #[test]
    fn test_exact_points_purchase_succeeds_and_zeroes_balance() {
        let mut shop = catalog_shop();
        let mut player = PlayerState {
            points: 50.0,
            ..Default::default()
        };
        buy_building(&mut shop, &mut player, 1);
        assert_eq!(player.points, 0.0);
        assert_eq!(shop.buildings[&1].count, 1);
        assert_eq!(shop.balls.len(), 1);
        assert_eq!(shop.balls[0].type_id, Some(1));
    }

    #[test]
    fn test_one_point_short_changes_nothing() {
        let mut shop = catalog_shop();
        let mut player = PlayerState {
            points: 49.0,
            ..Default::default()
        };
        buy_building(&mut shop, &mut player, 1);
        assert_eq!(player.points, 49.0);
        assert_eq!(shop.buildings[&1].count, 0);
        assert!(shop.balls.is_empty());
    }

    #[test]
    fn test_price_compounds_across_purchases() {
        let mut shop = catalog_shop();
        let mut player = PlayerState {
            points: 1_000.0,
            ..Default::default()
        };
        buy_building(&mut shop, &mut player, 1); // 50
        buy_building(&mut shop, &mut player, 1); // floor(50 * 1.15) = 57
        assert_eq!(shop.buildings[&1].count, 2);
        assert_eq!(player.points, 1_000.0 - 50.0 - 57.0);
        assert_eq!(shop.balls.len(), 2);
    }
}
