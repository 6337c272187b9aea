use bevy::prelude::*;

use crate::shared::*;

/// Adds passive income each simulated frame:
/// `points += total_production * global_multiplier * dt`.
///
/// Runs only in the Running state; pausing to the menu freezes income.
/// Every simulated frame also marks the session dirty for save-on-quit.
pub fn accrue_production(
    time: Res<Time>,
    shop: Res<ShopState>,
    mut player: ResMut<PlayerState>,
    mut unsaved: ResMut<UnsavedChanges>,
) {
    let dt = time.delta_secs_f64();
    if dt <= 0.0 {
        return;
    }

    let produced = shop.total_production_per_second() * dt;
    player.points += produced * player.global_multiplier;
    unsaved.0 = true;
}

#[cfg(test)]
mod tests {
    use crate::data::catalog;
    use crate::shared::*;

    #[test]
    fn test_production_formula_matches_rate_count_and_ball_trickle() {
        let mut shop = ShopState {
            buildings: catalog::starting_buildings(),
            ..Default::default()
        };
        // One building: rate 4.0, count 2. Two balls of value 0.5 each.
        if let Some(b) = shop.buildings.get_mut(&2) {
            b.count = 2;
        }
        for _ in 0..2 {
            shop.balls.push(BallBody {
                x: 300.0,
                y: 300.0,
                vx: 0.0,
                vy: 0.0,
                radius: 14.0,
                value: 0.5,
                type_id: Some(1),
            });
        }
        let expected = 4.0 * 2.0 + 2.0 * 0.5 * BALL_PASSIVE_RATE;
        assert!((shop.total_production_per_second() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_global_multiplier_scales_accrual() {
        let mut shop = ShopState {
            buildings: catalog::starting_buildings(),
            ..Default::default()
        };
        if let Some(b) = shop.buildings.get_mut(&1) {
            b.count = 4;
        }
        let mut player = PlayerState {
            global_multiplier: 3.0,
            ..Default::default()
        };

        // One second of production, applied the way accrue_production does.
        let dt = 1.0_f64;
        player.points += shop.total_production_per_second() * dt * player.global_multiplier;
        assert!((player.points - 4.0 * 0.5 * 3.0).abs() < 1e-9);
    }
}
