//! Upgrade effect computation.
//!
//! Effects are always re-derived from the bought flags by folding over the
//! whole upgrade track in catalog order, against fixed base values. That
//! makes the recompute idempotent: running it twice with unchanged flags
//! yields the same multipliers, click power, and target scale.

use bevy::prelude::*;

use crate::shared::*;

/// Folds every bought upgrade into the shop's cached multipliers and
/// applies the click-power multiplier to the player.
///
/// | bought upgrades | click power | target scale |
/// |-----------------|-------------|--------------|
/// | 0               | 1.0         | 1.0          |
/// | 1               | 2.0         | 1.15         |
/// | 2               | 4.0         | 1.3225       |
/// | 3               | 8.0         | ~1.5209      |
///
/// The scale multiplier is consumed by the click target's animation, which
/// composes it with the hover factor against the target's base scale.
pub fn recompute_upgrade_effects(shop: &mut ShopState, player: &mut PlayerState) {
    let mut power_mult = 1.0_f64;
    let mut scale_mult = 1.0_f64;

    for upgrade in &shop.upgrade_list {
        if upgrade.bought {
            power_mult *= UPGRADE_POWER_FACTOR;
            scale_mult *= UPGRADE_SCALE_FACTOR;
        }
    }

    shop.click_power_multiplier = power_mult;
    shop.clickable_scale_multiplier = scale_mult;
    player.click_power = BASE_CLICK_POWER * power_mult;
}

/// Per-frame defensive re-sync while running, so derived state can never
/// drift from the bought flags (e.g. after a load).
pub fn sync_upgrade_effects(mut shop: ResMut<ShopState>, mut player: ResMut<PlayerState>) {
    recompute_upgrade_effects(&mut shop, &mut player);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    fn shop_with_bought(n: usize) -> ShopState {
        let mut shop = ShopState {
            upgrade_list: catalog::starting_upgrades(),
            ..Default::default()
        };
        for upgrade in shop.upgrade_list.iter_mut().take(n) {
            upgrade.bought = true;
        }
        shop.current_upgrade_index = n;
        shop
    }

    #[test]
    fn test_no_upgrades_leaves_base_values() {
        let mut shop = shop_with_bought(0);
        let mut player = PlayerState::default();
        recompute_upgrade_effects(&mut shop, &mut player);
        assert_eq!(shop.click_power_multiplier, 1.0);
        assert_eq!(shop.clickable_scale_multiplier, 1.0);
        assert_eq!(player.click_power, BASE_CLICK_POWER);
    }

    #[test]
    fn test_two_upgrades_stack_multiplicatively() {
        let mut shop = shop_with_bought(2);
        let mut player = PlayerState::default();
        recompute_upgrade_effects(&mut shop, &mut player);
        assert_eq!(shop.click_power_multiplier, 4.0);
        assert!((shop.clickable_scale_multiplier - 1.3225).abs() < 1e-9);
        assert_eq!(player.click_power, 4.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut shop = shop_with_bought(3);
        let mut player = PlayerState::default();
        recompute_upgrade_effects(&mut shop, &mut player);
        let first = (
            shop.click_power_multiplier,
            shop.clickable_scale_multiplier,
            player.click_power,
        );
        recompute_upgrade_effects(&mut shop, &mut player);
        assert_eq!(first.0, shop.click_power_multiplier);
        assert_eq!(first.1, shop.clickable_scale_multiplier);
        assert_eq!(first.2, player.click_power);
    }
}
