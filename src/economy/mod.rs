//! Economy domain: purchases, upgrade effects, production accrual.
//!
//! All cross-domain communication goes through `crate::shared::*` events
//! and resources. Ball placement on purchase reuses the pure spawn helper
//! exported by the balls domain.

use bevy::prelude::*;

use crate::shared::*;

pub mod effects;
pub mod production;
pub mod purchases;

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                // Defensive re-sync of derived multipliers each frame.
                effects::sync_upgrade_effects,
                // Passive income accrues before purchases are processed.
                production::accrue_production,
                // Purchase requests from the shop panel.
                purchases::handle_buy_building,
                purchases::handle_buy_upgrade,
            )
                .chain()
                .run_if(in_state(GameState::Running)),
        );

        info!("[Economy] EconomyPlugin registered.");
    }
}
