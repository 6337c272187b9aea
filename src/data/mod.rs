//! Data layer: seeds the shop catalog at game startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills the shop with the
//! building and upgrade catalogs defined in `catalog`, then transitions the
//! game into GameState::MainMenu. No other domain needs to seed ShopState.

pub mod catalog;

use crate::shared::*;
use bevy::prelude::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_catalog);
    }
}

/// Single system that populates the shop and then transitions to MainMenu.
fn load_catalog(mut shop: ResMut<ShopState>, mut next_state: ResMut<NextState<GameState>>) {
    shop.buildings = catalog::starting_buildings();
    shop.upgrade_list = catalog::starting_upgrades();
    shop.current_upgrade_index = 0;

    info!(
        "DataPlugin: catalog loaded ({} buildings, {} upgrades). Transitioning to MainMenu.",
        shop.buildings.len(),
        shop.upgrade_list.len()
    );
    next_state.set(GameState::MainMenu);
}
