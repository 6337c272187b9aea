//! Ball creation and population upkeep.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// Visual radius for a building's balls: bigger machines launch bigger balls.
pub fn ball_radius_for(building_id: BuildingId) -> f32 {
    12.0 + 2.0 * building_id as f32
}

/// Pushes one new ball for `building_id` onto the shop's ball list, with a
/// random court position and velocity. No-op for unknown ids.
pub fn spawn_ball(shop: &mut ShopState, building_id: BuildingId, rng: &mut impl Rng) {
    let Some(building) = shop.buildings.get(&building_id) else {
        warn!("[Balls] Spawn skipped, unknown building id {}", building_id);
        return;
    };

    let ball = BallBody {
        x: rng.gen_range(BALL_SPAWN_X_MIN..=BALL_SPAWN_X_MAX),
        y: rng.gen_range(BALL_SPAWN_Y_MIN..=BALL_SPAWN_Y_MAX),
        vx: rng.gen_range(-BALL_SPAWN_SPEED_X..=BALL_SPAWN_SPEED_X),
        vy: rng.gen_range(-BALL_SPAWN_SPEED_Y..=BALL_SPAWN_SPEED_Y),
        radius: ball_radius_for(building_id),
        value: building.production_per_second,
        type_id: Some(building_id),
    };
    shop.balls.push(ball);
}

/// Tops the population back up to one ball per building owned, picking a
/// uniformly random owned building for each missing ball. Restores balls
/// dropped by a save file; the population is never trimmed here.
pub fn replenish_balls(mut shop: ResMut<ShopState>) {
    let owed = shop.owed_ball_count();
    if shop.balls.len() >= owed {
        return;
    }

    let owned: Vec<BuildingId> = shop
        .buildings
        .values()
        .filter(|b| b.count > 0)
        .map(|b| b.id)
        .collect();
    if owned.is_empty() {
        return;
    }

    let mut rng = rand::thread_rng();
    while shop.balls.len() < owed {
        let id = owned[rng.gen_range(0..owned.len())];
        spawn_ball(&mut shop, id, &mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog_shop() -> ShopState {
        ShopState {
            buildings: catalog::starting_buildings(),
            ..Default::default()
        }
    }

    #[test]
    fn test_radius_grows_with_building_id() {
        assert_eq!(ball_radius_for(1), 14.0);
        assert_eq!(ball_radius_for(6), 24.0);
    }

    #[test]
    fn test_spawn_ball_tags_and_values_from_building() {
        let mut shop = catalog_shop();
        let mut rng = StdRng::seed_from_u64(9);
        spawn_ball(&mut shop, 3, &mut rng);

        assert_eq!(shop.balls.len(), 1);
        let ball = &shop.balls[0];
        assert_eq!(ball.type_id, Some(3));
        assert_eq!(ball.radius, 18.0);
        assert_eq!(ball.value, 15.0);
        assert!(ball.x >= BALL_SPAWN_X_MIN && ball.x <= BALL_SPAWN_X_MAX);
        assert!(ball.y >= BALL_SPAWN_Y_MIN && ball.y <= BALL_SPAWN_Y_MAX);
        assert!(ball.vx.abs() <= BALL_SPAWN_SPEED_X);
        assert!(ball.vy.abs() <= BALL_SPAWN_SPEED_Y);
    }

    #[test]
    fn test_spawn_ball_ignores_unknown_id() {
        let mut shop = catalog_shop();
        let mut rng = StdRng::seed_from_u64(9);
        spawn_ball(&mut shop, 99, &mut rng);
        assert!(shop.balls.is_empty());
    }

    #[test]
    fn test_replenish_restores_population_to_owned_counts() {
        let mut shop = catalog_shop();
        if let Some(b) = shop.buildings.get_mut(&1) {
            b.count = 2;
        }
        if let Some(b) = shop.buildings.get_mut(&4) {
            b.count = 1;
        }

        // Same loop as the system, without ECS plumbing.
        let owed = shop.owed_ball_count();
        let owned: Vec<BuildingId> = shop
            .buildings
            .values()
            .filter(|b| b.count > 0)
            .map(|b| b.id)
            .collect();
        let mut rng = StdRng::seed_from_u64(5);
        while shop.balls.len() < owed {
            let id = owned[rng.gen_range(0..owned.len())];
            spawn_ball(&mut shop, id, &mut rng);
        }

        assert_eq!(shop.balls.len(), 3);
        for ball in &shop.balls {
            let id = ball.type_id.expect("replenished balls carry a type id");
            assert!(shop.buildings[&id].count > 0);
        }
    }
}
