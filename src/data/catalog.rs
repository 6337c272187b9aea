//! The fixed game-design catalog: six buildings, three sequential upgrades.

use crate::shared::*;
use std::collections::BTreeMap;

/// Buildings available in the shop, keyed by id. Counts start at zero;
/// only counts mutate afterwards (purchase or load).
pub fn starting_buildings() -> BTreeMap<BuildingId, Building> {
    let list = [
        Building::new(1, "Ball Machine", 50, 0.5),
        Building::new(2, "Pro Launcher", 300, 4.0),
        Building::new(3, "Ball Factory", 1500, 15.0),
        Building::new(4, "Tennis Lab", 8000, 75.0),
        Building::new(5, "Quantum Server", 50_000, 400.0),
        Building::new(6, "Tennis Paradox Core", 300_000, 2500.0),
    ];
    list.into_iter().map(|b| (b.id, b)).collect()
}

/// The sequential upgrade track. Each entry doubles click power and grows
/// the click target by 15%.
pub fn starting_upgrades() -> Vec<Upgrade> {
    vec![
        Upgrade::new("up1", "Better Swing I", "x2 power, +15% size", 200),
        Upgrade::new("up2", "Better Swing II", "x2 power, +15% size", 2_000),
        Upgrade::new("up3", "Better Swing III", "x2 power, +15% size", 12_000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_ids_are_unique_and_match_keys() {
        let buildings = starting_buildings();
        assert_eq!(buildings.len(), 6);
        for (id, b) in &buildings {
            assert_eq!(*id, b.id);
            assert!(b.base_price > 0);
            assert!(b.production_per_second > 0.0);
            assert_eq!(b.count, 0);
        }
    }

    #[test]
    fn test_building_prices_ascend_with_id() {
        let buildings = starting_buildings();
        let prices: Vec<u64> = buildings.values().map(|b| b.base_price).collect();
        for pair in prices.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_upgrade_track_is_unbought_and_ascending() {
        let upgrades = starting_upgrades();
        assert_eq!(upgrades.len(), 3);
        for u in &upgrades {
            assert!(!u.bought);
            assert!(u.price > 0);
        }
        for pair in upgrades.windows(2) {
            assert!(pair[0].price < pair[1].price);
        }
    }
}
